use crate::room::RoomId;

/// Telas principais da aplicação.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UiScreen {
    #[default]
    RoomList,
    /// Destino da navegação ao entrar numa sala.
    Room(RoomId),
}

/// Estado puramente visual; o estado da lista mora no controlador.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Tela em foco.
    pub screen: UiScreen,
    /// Índice selecionado em `filtered_rooms`.
    pub selected: usize,
    /// Flag global de encerramento do app.
    pub should_quit: bool,
}

impl UiState {
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self, len: usize) {
        if self.selected + 1 < len {
            self.selected += 1;
        }
    }

    /// Mantém a seleção dentro da lista filtrada atual.
    pub fn clamp_selection(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}
