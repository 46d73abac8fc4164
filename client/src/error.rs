use thiserror::Error;

/// Falhas do controlador da lista de salas e do cliente do diretório.
#[derive(Debug, Error)]
pub enum LobbyError {
    #[error("request to room directory failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("room directory answered {status}: {body}")]
    Status { status: u16, body: String },

    #[error("room name must not be empty")]
    EmptyRoomName,

    #[error("a room creation request is already in flight")]
    CreationInFlight,
}

pub type Result<T, E = LobbyError> = std::result::Result<T, E>;
