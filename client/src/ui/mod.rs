pub mod instructions;
pub mod key_handler;
pub mod ui_room_list_screen;
pub mod ui_room_screen;
pub mod ui_state;
