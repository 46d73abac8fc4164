use async_trait::async_trait;

use crate::{error::Result, room::Room};

mod http;

pub use http::HttpRoomDirectory;

/// Serviço remoto que lista e cria salas.
///
/// Injetado no controlador; os testes usam implementações em memória.
#[async_trait]
pub trait RoomDirectory: Send + Sync {
    /// `GET /room`: snapshot completo, sem paginação.
    async fn fetch_rooms(&self) -> Result<Vec<Room>>;

    /// `POST /room` com `{name}`; devolve a sala criada.
    async fn create_room(&self, name: &str) -> Result<Room>;
}
