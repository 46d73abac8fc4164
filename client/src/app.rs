// `app.rs` concentra orquestração:
// - configuração, logs e runtime async,
// - controlador da lista de salas ligado ao diretório HTTP,
// - loop de renderização/eventos da TUI e navegação entre telas.

use std::{
    fs::OpenOptions,
    io,
    sync::{
        Arc, Mutex,
        mpsc::{self, Receiver, TryRecvError},
    },
    time::Duration,
};

use anyhow::{Context, anyhow};
use clap::Parser;
use crossterm::{
    event::{self, Event as CEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::{runtime::Handle, sync::watch};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::{
    config::LobbyConfig,
    controller::RoomListController,
    directory::HttpRoomDirectory,
    navigation::ChannelNavigator,
    room::RoomId,
    state::ScreenState,
    ui::{
        key_handler::handle_key_event,
        ui_room_list_screen::render_room_list_screen,
        ui_room_screen::render_room_screen,
        ui_state::{UiScreen, UiState},
    },
};

pub fn run() -> anyhow::Result<()> {
    let config = LobbyConfig::parse();
    init_logging(&config)?;
    info!(api_url = %config.api_url, "starting lobby client");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let directory = HttpRoomDirectory::new(&config)?;
    info!(url = directory.rooms_url(), "room directory client ready");
    // Canal interno: o controlador pede navegação e o loop da TUI troca de tela.
    let (nav_tx, nav_rx) = mpsc::channel::<RoomId>();
    let controller = RoomListController::new(
        Arc::new(directory),
        Arc::new(ChannelNavigator::new(nav_tx)),
    );
    let screen_updates = controller.subscribe();

    let initial = controller.clone();
    runtime.spawn(async move {
        if let Err(err) = initial.initialize().await {
            warn!("initial room fetch failed: {err}");
        }
    });

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app_res = run_app(
        &mut terminal,
        &controller,
        screen_updates,
        &nav_rx,
        runtime.handle(),
    );

    // Restaura terminal antes de sair.
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    runtime.shutdown_timeout(Duration::from_secs(1));
    info!("lobby client stopped");

    app_res
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    controller: &RoomListController,
    mut screen_updates: watch::Receiver<ScreenState>,
    nav_rx: &Receiver<RoomId>,
    runtime: &Handle,
) -> anyhow::Result<()> {
    let mut ui = UiState::default();

    loop {
        // Drena pedidos de navegação sem bloquear; vale o último.
        loop {
            match nav_rx.try_recv() {
                Ok(room_id) => {
                    info!(%room_id, "entering room");
                    ui.screen = UiScreen::Room(room_id);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => break,
            }
        }

        let snapshot = screen_updates.borrow_and_update().clone();
        ui.clamp_selection(snapshot.filtered_rooms.len());

        terminal.draw(|f| match ui.screen {
            UiScreen::RoomList => render_room_list_screen(f, &ui, &snapshot),
            UiScreen::Room(room_id) => render_room_screen(f, room_id, &snapshot),
        })?;

        if ui.should_quit {
            break;
        }

        if event::poll(Duration::from_millis(50))?
            && let CEvent::Key(key) = event::read()?
        {
            // Toda regra de teclado fica centralizada em `key_handler`.
            handle_key_event(key, controller, &mut ui, runtime);
        }
    }

    Ok(())
}

/// Logs vão para arquivo: o stdout pertence à TUI.
fn init_logging(config: &LobbyConfig) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .with_context(|| format!("failed to open log file {}", config.log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow!("failed to install logger: {err}"))
}
