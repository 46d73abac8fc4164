use crate::{
    room::Room,
    state::{Phase, ScreenState},
    ui::{
        instructions::{InstructionItem, render_instructions},
        ui_state::UiState,
    },
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

const LIST_INSTRUCTIONS: [InstructionItem<'static>; 5] = [
    InstructionItem::new("Join", "Enter"),
    InstructionItem::new("Move", "Up/Down"),
    InstructionItem::new("Refresh", "F5"),
    InstructionItem::new("New room", "F2"),
    InstructionItem::new("Quit", "Ctrl+C"),
];

const MODAL_INSTRUCTIONS: [InstructionItem<'static>; 3] = [
    InstructionItem::new("Create", "Enter"),
    InstructionItem::new("Delete", "Backspace"),
    InstructionItem::new("Close", "Esc"),
];

pub fn render_room_list_screen(frame: &mut ratatui::Frame<'_>, ui: &UiState, state: &ScreenState) {
    // -------- MAIN LAYOUT ----------

    let footer_height = if state.loading { 2 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             //title
            Constraint::Length(3),             //search
            Constraint::Min(4),                //rooms
            Constraint::Length(footer_height), //loading
            Constraint::Length(1),             //instructions
        ])
        .split(frame.area());

    // -------- TITLE ----------

    let (status_label, status_color) = header_status(state);
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "Available rooms",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(status_label, Style::default().fg(status_color)),
    ]))
    .block(Block::default().borders(Borders::ALL).title("Lobby"));
    frame.render_widget(header, chunks[0]);

    // -------- SEARCH ----------

    let search_text = if state.search.is_empty() {
        Span::styled("Search a room...", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(state.search.as_str(), Style::default().fg(Color::Yellow))
    };
    let search = Paragraph::new(Line::from(search_text))
        .block(Block::default().borders(Borders::ALL).title("Search"));
    frame.render_widget(search, chunks[1]);

    // -------- ROOMS ----------

    let items: Vec<ListItem<'_>> = state.filtered_rooms.iter().map(room_item).collect();
    let rooms_title = format!(
        "Rooms ({} of {})",
        state.filtered_rooms.len(),
        state.rooms.len()
    );
    let rooms = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(rooms_title))
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");
    let mut list_state = ListState::default();
    if !state.filtered_rooms.is_empty() {
        list_state.select(Some(ui.selected.min(state.filtered_rooms.len() - 1)));
    }
    frame.render_stateful_widget(rooms, chunks[2], &mut list_state);

    if state.filtered_rooms.is_empty() && !state.loading {
        render_empty_hint(frame, chunks[2], state);
    }

    // -------- LOADING ----------

    if state.loading {
        let loading = Paragraph::new("Loading rooms...")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Cyan))
            .block(Block::default().borders(Borders::TOP));
        frame.render_widget(loading, chunks[3]);
    }

    if state.overlay_is_visible {
        render_creation_modal(frame, state);
    } else {
        render_instructions(frame, chunks[4], &LIST_INSTRUCTIONS);
    }
}

/// Texto e cor do status no cabeçalho, pela fase atual.
///
/// Carga em andamento tem prioridade sobre o erro do fetch anterior.
pub(crate) fn header_status(state: &ScreenState) -> (String, Color) {
    match (state.phase(), &state.fetch_error) {
        (Phase::Initializing, _) => ("Loading...".to_string(), Color::Cyan),
        (Phase::Refreshing, _) => ("Refreshing...".to_string(), Color::Cyan),
        (_, Some(err)) => (format!("Directory unreachable: {err}"), Color::Red),
        (Phase::CreatingRoom, None) => ("Creating room...".to_string(), Color::Cyan),
        (Phase::Idle, None) => (format!("{} rooms", state.rooms.len()), Color::Green),
    }
}

fn room_item(room: &Room) -> ListItem<'_> {
    let (lock, lock_color) = if room.is_open() {
        ("open  ", Color::Green)
    } else {
        ("locked", Color::DarkGray)
    };

    ListItem::new(Line::from(vec![
        Span::styled(format!("[{lock}] "), Style::default().fg(lock_color)),
        Span::styled(
            room.title(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(room.subtitle(), Style::default().fg(Color::Gray)),
    ]))
}

fn render_empty_hint(frame: &mut ratatui::Frame<'_>, area: Rect, state: &ScreenState) {
    let hint_area = Rect {
        x: area.x.saturating_add(2),
        y: area.y.saturating_add(1),
        width: area.width.saturating_sub(4),
        height: 1,
    };
    if hint_area.width == 0 || area.height < 3 {
        return;
    }

    let text = if state.rooms.is_empty() {
        "No rooms yet. Press F2 to create one."
    } else {
        "No room matches the search."
    };
    let hint = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, hint_area);
}

fn render_creation_modal(frame: &mut ratatui::Frame<'_>, state: &ScreenState) {
    let area = centered_rect(50, 40, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default()
            .title("New room")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
        area,
    );

    let inner = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let input = Paragraph::new(state.new_room_name.as_str())
        .block(Block::default().borders(Borders::ALL).title("Room name"))
        .style(Style::default().fg(Color::Yellow))
        .wrap(Wrap { trim: false });
    frame.render_widget(input, inner[0]);

    let (button, button_color) = if state.creation_room_loading {
        ("Creating...", Color::Cyan)
    } else {
        ("[ Create room ]", Color::Yellow)
    };
    frame.render_widget(
        Paragraph::new(button)
            .alignment(Alignment::Center)
            .style(Style::default().fg(button_color).add_modifier(Modifier::BOLD)),
        inner[1],
    );

    if let Some(err) = &state.creation_error {
        let error = Paragraph::new(err.as_str())
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true });
        frame.render_widget(error, inner[2]);
    }

    render_instructions(frame, inner[3], &MODAL_INSTRUCTIONS);
}

pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
#[path = "../tests/ui_room_list_screen_tests.rs"]
mod tests;
