use std::sync::{
    Arc,
    mpsc::{self, Receiver},
};

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::runtime::Handle;

use crate::{
    controller::RoomListController,
    directory::RoomDirectory,
    error::Result,
    navigation::ChannelNavigator,
    room::{Room, RoomId},
    ui::ui_state::{UiScreen, UiState},
};

use super::handle_key_event;

struct StaticDirectory;

#[async_trait]
impl RoomDirectory for StaticDirectory {
    async fn fetch_rooms(&self) -> Result<Vec<Room>> {
        Ok(vec![
            Room {
                id: RoomId(1),
                name: "Alpha".to_string(),
                ..Default::default()
            },
            Room {
                id: RoomId(2),
                name: "Beta".to_string(),
                ..Default::default()
            },
        ])
    }

    async fn create_room(&self, name: &str) -> Result<Room> {
        Ok(Room {
            id: RoomId(10),
            name: name.to_string(),
            ..Default::default()
        })
    }
}

async fn loaded_controller() -> (RoomListController, Receiver<RoomId>) {
    let (tx, rx) = mpsc::channel();
    let controller =
        RoomListController::new(Arc::new(StaticDirectory), Arc::new(ChannelNavigator::new(tx)));
    controller.initialize().await.expect("initialize");
    (controller, rx)
}

fn press(controller: &RoomListController, ui: &mut UiState, code: KeyCode) {
    handle_key_event(
        KeyEvent::new(code, KeyModifiers::NONE),
        controller,
        ui,
        &Handle::current(),
    );
}

fn type_text(controller: &RoomListController, ui: &mut UiState, text: &str) {
    for c in text.chars() {
        press(controller, ui, KeyCode::Char(c));
    }
}

#[tokio::test]
async fn typing_filters_and_enter_navigates_to_selected_room() {
    let (controller, rx) = loaded_controller().await;
    let mut ui = UiState::default();

    type_text(&controller, &mut ui, "be");
    assert_eq!(controller.snapshot().search, "be");
    assert_eq!(controller.snapshot().filtered_rooms.len(), 1);

    press(&controller, &mut ui, KeyCode::Enter);
    assert_eq!(rx.try_recv().ok(), Some(RoomId(2)));

    press(&controller, &mut ui, KeyCode::Esc);
    assert!(controller.snapshot().search.is_empty());
    assert_eq!(controller.snapshot().filtered_rooms.len(), 2);
}

#[tokio::test]
async fn selection_stays_within_filtered_rooms() {
    let (controller, _rx) = loaded_controller().await;
    let mut ui = UiState::default();

    press(&controller, &mut ui, KeyCode::Down);
    press(&controller, &mut ui, KeyCode::Down);
    assert_eq!(ui.selected, 1);

    press(&controller, &mut ui, KeyCode::Up);
    press(&controller, &mut ui, KeyCode::Up);
    assert_eq!(ui.selected, 0);
}

#[tokio::test]
async fn modal_captures_typing_and_enter_creates_room() {
    let (controller, rx) = loaded_controller().await;
    let mut ui = UiState::default();

    press(&controller, &mut ui, KeyCode::F(2));
    assert!(controller.snapshot().overlay_is_visible);

    type_text(&controller, &mut ui, "Gamma");
    press(&controller, &mut ui, KeyCode::Backspace);
    let state = controller.snapshot();
    assert_eq!(state.new_room_name, "Gamm");
    assert!(state.search.is_empty());

    press(&controller, &mut ui, KeyCode::Enter);
    let mut navigated = None;
    for _ in 0..100 {
        tokio::task::yield_now().await;
        if let Ok(room_id) = rx.try_recv() {
            navigated = Some(room_id);
            break;
        }
    }

    assert_eq!(navigated, Some(RoomId(10)));
    assert!(!controller.snapshot().overlay_is_visible);
}

#[tokio::test]
async fn esc_closes_modal_without_creating() {
    let (controller, rx) = loaded_controller().await;
    let mut ui = UiState::default();

    press(&controller, &mut ui, KeyCode::F(2));
    type_text(&controller, &mut ui, "Delta");
    press(&controller, &mut ui, KeyCode::Esc);

    let state = controller.snapshot();
    assert!(!state.overlay_is_visible);
    assert_eq!(state.new_room_name, "Delta");
    assert!(rx.try_recv().is_err());

    press(&controller, &mut ui, KeyCode::F(2));
    assert_eq!(controller.snapshot().new_room_name, "Delta");
}

#[tokio::test]
async fn room_screen_quits_on_q_and_ignores_other_keys() {
    let (controller, _rx) = loaded_controller().await;
    let mut ui = UiState {
        screen: UiScreen::Room(RoomId(2)),
        ..Default::default()
    };

    press(&controller, &mut ui, KeyCode::Backspace);
    press(&controller, &mut ui, KeyCode::F(1));
    assert_eq!(ui.screen, UiScreen::Room(RoomId(2)));
    assert!(!ui.should_quit);

    press(&controller, &mut ui, KeyCode::Char('q'));
    assert!(ui.should_quit);
}

#[tokio::test]
async fn room_screen_goes_back_and_ctrl_c_quits() {
    let (controller, _rx) = loaded_controller().await;
    let mut ui = UiState {
        screen: UiScreen::Room(RoomId(1)),
        ..Default::default()
    };

    press(&controller, &mut ui, KeyCode::Esc);
    assert_eq!(ui.screen, UiScreen::RoomList);

    handle_key_event(
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        &controller,
        &mut ui,
        &Handle::current(),
    );
    assert!(ui.should_quit);
}
