use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tracing::{info, warn};

use crate::{
    directory::RoomDirectory,
    error::{LobbyError, Result},
    navigation::Navigator,
    room::Room,
    state::{Action, ScreenState, SharedState, snapshot_state, update_state},
};

/// Dono do estado da tela de salas.
///
/// Faz a ponte entre o diretório remoto e a camada de apresentação: toda
/// mudança passa por [`ScreenState::apply`] e o snapshot resultante é
/// publicado para quem chamou [`RoomListController::subscribe`].
#[derive(Clone)]
pub struct RoomListController {
    directory: Arc<dyn RoomDirectory>,
    navigator: Arc<dyn Navigator>,
    state: SharedState,
    publisher: Arc<watch::Sender<ScreenState>>,
}

impl RoomListController {
    pub fn new(directory: Arc<dyn RoomDirectory>, navigator: Arc<dyn Navigator>) -> Self {
        let initial = ScreenState::default();
        let (publisher, _) = watch::channel(initial.clone());
        Self {
            directory,
            navigator,
            state: Arc::new(Mutex::new(initial)),
            publisher: Arc::new(publisher),
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ScreenState> {
        self.publisher.subscribe()
    }

    pub fn snapshot(&self) -> ScreenState {
        snapshot_state(&self.state)
    }

    /// Aplica uma ação e publica o novo snapshot.
    fn dispatch(&self, action: Action) {
        self.transition(|s| s.apply(action));
    }

    fn transition<R>(&self, f: impl FnOnce(&mut ScreenState) -> R) -> R {
        update_state(&self.state, |s| {
            let out = f(s);
            self.publisher.send_replace(s.clone());
            out
        })
    }

    /// Primeira carga da tela.
    pub async fn initialize(&self) -> Result<()> {
        self.dispatch(Action::Initialize);
        self.fetch_rooms().await
    }

    /// Recarga disparada pelo usuário.
    pub async fn refresh(&self) -> Result<()> {
        self.dispatch(Action::RefreshRequested);
        self.fetch_rooms().await
    }

    pub async fn fetch_rooms(&self) -> Result<()> {
        let generation = self.transition(|s| {
            s.apply(Action::FetchStarted);
            s.latest_fetch()
        });

        match self.directory.fetch_rooms().await {
            Ok(rooms) => {
                info!(generation, count = rooms.len(), "rooms fetched");
                self.dispatch(Action::FetchSucceeded { generation, rooms });
                Ok(())
            }
            Err(err) => {
                warn!(generation, "fetching rooms failed: {err}");
                self.dispatch(Action::FetchFailed {
                    generation,
                    message: err.to_string(),
                });
                Err(err)
            }
        }
    }

    /// Filtro local, sem I/O.
    pub fn search(&self, term: impl Into<String>) {
        self.dispatch(Action::Search(term.into()));
    }

    pub fn open_creation_modal(&self) {
        self.dispatch(Action::OpenCreationModal);
    }

    pub fn close_creation_modal(&self) {
        self.dispatch(Action::CloseCreationModal);
    }

    pub fn edit_room_name(&self, name: impl Into<String>) {
        self.dispatch(Action::EditRoomName(name.into()));
    }

    /// Cria a sala com o nome digitado e navega para ela.
    ///
    /// Nome vazio é recusado antes de qualquer flag de carregamento, e um
    /// segundo pedido enquanto outro está em andamento é ignorado.
    pub async fn create_room(&self) -> Result<Room> {
        let name = self.transition(|s| {
            if s.creation_room_loading {
                return Err(LobbyError::CreationInFlight);
            }
            if s.new_room_name.is_empty() {
                s.apply(Action::CreateRejected(LobbyError::EmptyRoomName.to_string()));
                return Err(LobbyError::EmptyRoomName);
            }
            s.apply(Action::CreateStarted);
            Ok(s.new_room_name.clone())
        })?;

        match self.directory.create_room(&name).await {
            Ok(room) => {
                info!(id = %room.id, name = %room.name, "room created");
                self.dispatch(Action::CreateSucceeded);
                self.navigator.navigate_to_room(room.id);
                Ok(room)
            }
            Err(err) => {
                warn!(name = %name, "creating room failed: {err}");
                self.dispatch(Action::CreateFailed(err.to_string()));
                Err(err)
            }
        }
    }

    pub fn select_room(&self, room: &Room) {
        info!(id = %room.id, "navigating to room");
        self.navigator.navigate_to_room(room.id);
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
