use std::fmt;

use serde::{Deserialize, Serialize};

/// Lugares por mesa exibidos no subtítulo de cada sala.
pub const MAX_PLAYERS: usize = 6;

/// Identificador atribuído pelo servidor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub u64);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomStatus {
    Active,
    Inactive,
    /// Ausente ou desconhecido no payload do backend.
    #[default]
    #[serde(other)]
    Unknown,
}

/// Sala de jogo como recebida de `GET /room` e `POST /room`.
///
/// Só `id` é obrigatório: a resposta de criação pode vir incompleta.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: RoomId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub status: RoomStatus,
    /// Só o tamanho é usado; o formato de cada participante é do backend.
    #[serde(default)]
    pub players: Vec<serde_json::Value>,
    #[serde(default)]
    pub turn_count: u32,
}

impl Room {
    pub fn is_open(&self) -> bool {
        self.status == RoomStatus::Active
    }

    /// `"Alpha (#1)"`
    pub fn title(&self) -> String {
        format!("{} ({})", self.name, self.id)
    }

    /// `"2/6 players  -  Turn 3"`
    pub fn subtitle(&self) -> String {
        format!(
            "{}/{} players  -  Turn {}",
            self.players.len(),
            MAX_PLAYERS,
            self.turn_count
        )
    }

    /// Filtro da busca: substring sem diferenciar maiúsculas.
    pub fn matches(&self, term: &str) -> bool {
        self.name.to_uppercase().contains(&term.to_uppercase())
    }
}

/// Aplica o termo de busca preservando a ordem original do snapshot.
pub fn filter_rooms(rooms: &[Room], term: &str) -> Vec<Room> {
    rooms.iter().filter(|r| r.matches(term)).cloned().collect()
}

#[cfg(test)]
#[path = "tests/room_tests.rs"]
mod tests;
