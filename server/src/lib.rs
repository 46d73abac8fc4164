use std::{
    convert::Infallible,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{info, warn};
use warp::{Filter, http::StatusCode};

// 1. TABELAS (o que o diretório guarda em memória)
// ---------------------------------------------------------

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomStatus {
    #[default]
    Active,
    Inactive,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: u64,               // ID automático da sala
    pub name: String,          // Nome escolhido por quem criou
    pub status: RoomStatus,    // ACTIVE = aberta para entrar
    pub players: Vec<String>,  // Participantes (o cliente só usa o tamanho)
    pub turn_count: u32,       // Turno atual da partida
}

#[derive(Debug, Deserialize)]
pub struct CreateRoomRequest {
    pub name: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

/// Armazenamento em memória; a ordem do vetor é a ordem de criação.
pub struct RoomStore {
    rooms: RwLock<Vec<Room>>,
    next_id: AtomicU64,
}

pub type SharedStore = Arc<RoomStore>;

impl Default for RoomStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RoomStore {
    pub fn new() -> Self {
        Self {
            rooms: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Cria o store já com salas pré-cadastradas (flag `--seed`).
    pub async fn with_seed<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let store = Self::new();
        for name in names {
            let name = name.into();
            if store.create(name.clone()).await.is_none() {
                warn!(seed = %name, "ignoring blank seed room name");
            }
        }
        store
    }

    pub async fn list(&self) -> Vec<Room> {
        self.rooms.read().await.clone()
    }

    // 2. REDUCERS (a lógica / API)
    // ---------------------------------------------------------

    /// Insere uma sala nova. Nome vazio (após trim) é recusado.
    pub async fn create(&self, name: String) -> Option<Room> {
        let cleaned = name.trim().to_string();
        if cleaned.is_empty() {
            return None;
        }

        let room = Room {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: cleaned,
            status: RoomStatus::Active,
            players: Vec::new(),
            turn_count: 0,
        };
        self.rooms.write().await.push(room.clone());
        Some(room)
    }
}

// 3. ROTAS HTTP
// ---------------------------------------------------------

/// `GET /room` e `POST /room`, no mesmo formato que o cliente consome.
pub fn routes(
    store: SharedStore,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let list = warp::path("room")
        .and(warp::path::end())
        .and(warp::get())
        .and(with_store(store.clone()))
        .and_then(handle_list_rooms);

    let create = warp::path("room")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::body::json())
        .and(with_store(store))
        .and_then(handle_create_room);

    list.or(create)
}

fn with_store(store: SharedStore) -> impl Filter<Extract = (SharedStore,), Error = Infallible> + Clone {
    warp::any().map(move || store.clone())
}

async fn handle_list_rooms(store: SharedStore) -> Result<impl warp::Reply, warp::Rejection> {
    let rooms = store.list().await;
    info!(count = rooms.len(), "listing rooms");
    Ok(warp::reply::json(&rooms))
}

async fn handle_create_room(
    req: CreateRoomRequest,
    store: SharedStore,
) -> Result<impl warp::Reply, warp::Rejection> {
    match store.create(req.name).await {
        Some(room) => {
            info!(id = room.id, name = %room.name, "created room");
            Ok(warp::reply::with_status(
                warp::reply::json(&room),
                StatusCode::CREATED,
            ))
        }
        None => {
            warn!("rejected room creation with blank name");
            Ok(warp::reply::with_status(
                warp::reply::json(&ErrorBody {
                    error: "room name must not be blank".to_string(),
                }),
                StatusCode::BAD_REQUEST,
            ))
        }
    }
}

#[cfg(test)]
#[path = "tests/routes_tests.rs"]
mod tests;
