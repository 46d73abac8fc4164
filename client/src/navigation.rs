use std::sync::mpsc::Sender;

use tracing::warn;

use crate::room::RoomId;

/// Host que troca para a tela "Room".
pub trait Navigator: Send + Sync {
    fn navigate_to_room(&self, room_id: RoomId);
}

/// Encaminha a navegação para o loop da TUI por um canal.
pub struct ChannelNavigator {
    tx: Sender<RoomId>,
}

impl ChannelNavigator {
    pub fn new(tx: Sender<RoomId>) -> Self {
        Self { tx }
    }
}

impl Navigator for ChannelNavigator {
    fn navigate_to_room(&self, room_id: RoomId) {
        if let Err(err) = self.tx.send(room_id) {
            warn!(%room_id, "navigation host is gone: {err}");
        }
    }
}
