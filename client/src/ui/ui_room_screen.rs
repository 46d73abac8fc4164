use crate::{
    room::RoomId,
    state::ScreenState,
    ui::instructions::{InstructionItem, render_instructions},
};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

/// Tela de destino da navegação. Mostra o que o snapshot sabe da sala.
pub fn render_room_screen(frame: &mut ratatui::Frame<'_>, room_id: RoomId, state: &ScreenState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let header = Paragraph::new(format!("Room {room_id}"))
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL).title("Lobby"));
    frame.render_widget(header, chunks[0]);

    frame.render_widget(
        Paragraph::new(room_details(room_id, state))
            .block(Block::default().borders(Borders::ALL).title("Details")),
        chunks[1],
    );

    let instructions = [
        InstructionItem::new("Back to rooms", "Esc"),
        InstructionItem::new("Quit", "Q"),
    ];
    render_instructions(frame, chunks[2], &instructions);
}

/// Sala recém-criada ainda não aparece no snapshot até o próximo fetch.
pub(crate) fn room_details(room_id: RoomId, state: &ScreenState) -> Vec<Line<'static>> {
    match state.rooms.iter().find(|r| r.id == room_id) {
        Some(room) => vec![
            Line::from(room.title()),
            Line::from(room.subtitle()),
            Line::from(if room.is_open() { "Open" } else { "Locked" }),
        ],
        None => vec![
            Line::from(format!("Joined room {room_id}.")),
            Line::from("Details show up after the next refresh.")
                .style(Style::default().fg(Color::DarkGray)),
        ],
    }
}
