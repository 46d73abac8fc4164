pub mod config;
pub mod controller;
pub mod directory;
pub mod error;
pub mod navigation;
pub mod room;
pub mod state;
pub mod ui;

mod app;

pub use app::run;
