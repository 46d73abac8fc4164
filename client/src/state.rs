use std::sync::{Arc, Mutex, PoisonError};

use crate::room::{Room, filter_rooms};

/// Estado efêmero da tela de salas. Vive enquanto o controlador existir.
#[derive(Clone, Debug, PartialEq)]
pub struct ScreenState {
    /// Snapshot do último fetch bem-sucedido.
    pub rooms: Vec<Room>,
    /// Termo de busca atual.
    pub search: String,
    /// `rooms` filtrado por `search`, na mesma ordem.
    pub filtered_rooms: Vec<Room>,
    /// Verdadeiro da construção até o primeiro fetch terminar.
    pub loading: bool,
    /// Recarga pedida pelo usuário em andamento.
    pub refreshing: bool,
    pub overlay_is_visible: bool,
    pub creation_room_loading: bool,
    /// Conteúdo do campo de nome no modal de criação.
    pub new_room_name: String,
    pub fetch_error: Option<String>,
    pub creation_error: Option<String>,
    /// Geração do fetch mais recente disparado.
    issued_fetch: u64,
    /// Geração da resposta mais recente aplicada.
    applied_fetch: u64,
}

impl Default for ScreenState {
    fn default() -> Self {
        Self {
            rooms: Vec::new(),
            search: String::new(),
            filtered_rooms: Vec::new(),
            loading: true,
            refreshing: false,
            overlay_is_visible: false,
            creation_room_loading: false,
            new_room_name: String::new(),
            fetch_error: None,
            creation_error: None,
            issued_fetch: 0,
            applied_fetch: 0,
        }
    }
}

/// Fase principal da tela; o modal é ortogonal (ver [`Modal`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Initializing,
    Idle,
    Refreshing,
    CreatingRoom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modal {
    Closed,
    Open,
}

/// Todas as transições possíveis do estado da tela.
#[derive(Clone, Debug)]
pub enum Action {
    Initialize,
    RefreshRequested,
    /// Um fetch foi disparado; a geração nova fica em `latest_fetch()`.
    FetchStarted,
    FetchSucceeded { generation: u64, rooms: Vec<Room> },
    FetchFailed { generation: u64, message: String },
    Search(String),
    OpenCreationModal,
    CloseCreationModal,
    EditRoomName(String),
    CreateStarted,
    CreateRejected(String),
    CreateSucceeded,
    CreateFailed(String),
}

impl ScreenState {
    /// Função de transição: única porta de escrita do estado.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Initialize => {
                self.loading = true;
            }
            Action::RefreshRequested => {
                self.refreshing = true;
            }
            Action::FetchStarted => {
                self.issued_fetch = self.issued_fetch.saturating_add(1);
            }
            Action::FetchSucceeded { generation, rooms } => {
                // Resposta atrasada de um fetch antigo: descarta.
                if generation <= self.applied_fetch {
                    return;
                }
                self.applied_fetch = generation;
                self.filtered_rooms = filter_rooms(&rooms, &self.search);
                self.rooms = rooms;
                self.fetch_error = None;
                self.settle_fetch(generation);
            }
            Action::FetchFailed {
                generation,
                message,
            } => {
                if generation <= self.applied_fetch {
                    return;
                }
                self.applied_fetch = generation;
                self.fetch_error = Some(message);
                self.settle_fetch(generation);
            }
            Action::Search(term) => {
                self.filtered_rooms = filter_rooms(&self.rooms, &term);
                self.search = term;
            }
            Action::OpenCreationModal => {
                self.overlay_is_visible = true;
                self.creation_error = None;
            }
            Action::CloseCreationModal => {
                self.overlay_is_visible = false;
                self.creation_error = None;
            }
            Action::EditRoomName(name) => {
                self.new_room_name = name;
                self.creation_error = None;
            }
            Action::CreateStarted => {
                self.creation_room_loading = true;
                self.creation_error = None;
            }
            Action::CreateRejected(message) => {
                self.creation_error = Some(message);
            }
            Action::CreateSucceeded => {
                self.overlay_is_visible = false;
                self.creation_room_loading = false;
                self.new_room_name.clear();
            }
            Action::CreateFailed(message) => {
                self.creation_room_loading = false;
                self.creation_error = Some(message);
            }
        }
    }

    /// Flags de carregamento só baixam quando o fetch mais novo termina.
    fn settle_fetch(&mut self, generation: u64) {
        if generation >= self.issued_fetch {
            self.loading = false;
            self.refreshing = false;
        }
    }

    pub fn latest_fetch(&self) -> u64 {
        self.issued_fetch
    }

    pub fn phase(&self) -> Phase {
        if self.creation_room_loading {
            Phase::CreatingRoom
        } else if self.loading {
            Phase::Initializing
        } else if self.refreshing {
            Phase::Refreshing
        } else {
            Phase::Idle
        }
    }

    pub fn modal(&self) -> Modal {
        if self.overlay_is_visible {
            Modal::Open
        } else {
            Modal::Closed
        }
    }
}

pub type SharedState = Arc<Mutex<ScreenState>>;

pub fn snapshot_state(state: &SharedState) -> ScreenState {
    state
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

pub fn update_state<R>(state: &SharedState, f: impl FnOnce(&mut ScreenState) -> R) -> R {
    let mut guard = state.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

#[cfg(test)]
#[path = "tests/state_tests.rs"]
mod tests;
