use crossterm::event::{self, KeyCode, KeyEvent, KeyModifiers};
use tokio::runtime::Handle;
use tracing::debug;

use crate::{
    controller::RoomListController,
    ui::ui_state::{UiScreen, UiState},
};

/// Roteador principal de teclado.
///
/// A função decide:
/// - atalhos globais (Ctrl+C),
/// - comportamento por tela (lista/sala),
/// - tratamento do modal de criação.
///
/// Operações de rede são disparadas no runtime e nunca bloqueiam o loop.
pub fn handle_key_event(
    key: KeyEvent,
    controller: &RoomListController,
    ui: &mut UiState,
    runtime: &Handle,
) {
    if key.kind != event::KeyEventKind::Press {
        // Ignora eventos de repeat/release.
        return;
    }

    // Saída forçada global.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        ui.should_quit = true;
        return;
    }

    match ui.screen {
        UiScreen::RoomList if controller.snapshot().overlay_is_visible => {
            handle_modal_key(key, controller, runtime)
        }
        UiScreen::RoomList => handle_list_key(key, controller, ui, runtime),
        UiScreen::Room(_) => handle_room_key(key, ui),
    }
}

/// Busca, seleção, recarga e abertura do modal.
fn handle_list_key(
    key: KeyEvent,
    controller: &RoomListController,
    ui: &mut UiState,
    runtime: &Handle,
) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let state = controller.snapshot();

    match key.code {
        KeyCode::Up => ui.select_previous(),
        KeyCode::Down => ui.select_next(state.filtered_rooms.len()),
        KeyCode::Enter => {
            if let Some(room) = state.filtered_rooms.get(ui.selected) {
                controller.select_room(room);
            }
        }
        KeyCode::F(5) => spawn_refresh(controller, runtime),
        KeyCode::Char('r') if ctrl => spawn_refresh(controller, runtime),
        KeyCode::F(2) => controller.open_creation_modal(),
        KeyCode::Char('n') if ctrl => controller.open_creation_modal(),
        KeyCode::Esc => {
            controller.search("");
            ui.selected = 0;
        }
        KeyCode::Backspace => {
            let mut term = state.search;
            term.pop();
            controller.search(term);
            ui.selected = 0;
        }
        KeyCode::Char(c) => {
            // Entrada textual simples (sem Ctrl/Alt).
            if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) {
                let mut term = state.search;
                term.push(c);
                controller.search(term);
                ui.selected = 0;
            }
        }
        _ => {}
    }
}

/// Teclas com o modal de criação aberto.
fn handle_modal_key(key: KeyEvent, controller: &RoomListController, runtime: &Handle) {
    match key.code {
        KeyCode::Esc => controller.close_creation_modal(),
        KeyCode::Enter => {
            let controller = controller.clone();
            runtime.spawn(async move {
                // Falhas já ficam registradas no estado da tela.
                if let Err(err) = controller.create_room().await {
                    debug!("create room finished with error: {err}");
                }
            });
        }
        KeyCode::Backspace => {
            let mut name = controller.snapshot().new_room_name;
            name.pop();
            controller.edit_room_name(name);
        }
        KeyCode::Char(c) => {
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT)
            {
                let mut name = controller.snapshot().new_room_name;
                name.push(c);
                controller.edit_room_name(name);
            }
        }
        _ => {}
    }
}

/// Tela da sala: só volta para a lista ou sai.
fn handle_room_key(key: KeyEvent, ui: &mut UiState) {
    match key.code {
        KeyCode::Esc => ui.screen = UiScreen::RoomList,
        KeyCode::Char('q') => ui.should_quit = true,
        _ => {}
    }
}

fn spawn_refresh(controller: &RoomListController, runtime: &Handle) {
    let controller = controller.clone();
    runtime.spawn(async move {
        if let Err(err) = controller.refresh().await {
            debug!("refresh finished with error: {err}");
        }
    });
}

#[cfg(test)]
#[path = "../tests/key_handler_tests.rs"]
mod tests;
