use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Par "ação <tecla>" da barra de atalhos.
#[derive(Clone, Copy)]
pub struct InstructionItem<'a> {
    pub label: &'a str,
    pub key: &'a str,
}

/// Espaço entre dois atalhos.
const ITEM_GAP: &str = "  ";

impl<'a> InstructionItem<'a> {
    pub const fn new(label: &'a str, key: &'a str) -> Self {
        Self { label, key }
    }

    /// Largura de `"label <key>"` em colunas.
    fn width(&self) -> usize {
        self.label.chars().count() + self.key.chars().count() + 3
    }

    fn spans(&self) -> [Span<'a>; 3] {
        [
            Span::styled(self.label, Style::default().fg(Color::Gray)),
            Span::raw(" "),
            Span::styled(
                format!("<{}>", self.key),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]
    }
}

/// Barra de atalhos centralizada, com traços preenchendo as laterais.
pub fn render_instructions(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    items: &[InstructionItem<'_>],
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    frame.render_widget(Paragraph::new(instruction_line(items, area.width)), area);
}

/// Monta a linha da barra. Atalhos do fim que não cabem na largura são
/// descartados inteiros em vez de cortados no meio (caso do modal estreito).
pub(crate) fn instruction_line<'a>(items: &[InstructionItem<'a>], width: u16) -> Line<'a> {
    let width = width as usize;
    let fitting = fitting_items(items, width);
    let content_width = instruction_text_width(fitting);

    let hints = fitting.iter().enumerate().flat_map(|(idx, item)| {
        let gap = (idx > 0).then(|| Span::raw(ITEM_GAP));
        gap.into_iter().chain(item.spans())
    });

    let side_len = width.saturating_sub(content_width + 2) / 2;
    if side_len == 0 {
        return Line::from(hints.collect::<Vec<_>>());
    }

    let mut spans = vec![rule(side_len), Span::raw(" ")];
    spans.extend(hints);
    spans.push(Span::raw(" "));
    spans.push(rule(side_len));
    Line::from(spans)
}

fn fitting_items<'i, 'a>(items: &'i [InstructionItem<'a>], width: usize) -> &'i [InstructionItem<'a>] {
    let mut used = 0;
    for (idx, item) in items.iter().enumerate() {
        let gap = if idx > 0 { ITEM_GAP.len() } else { 0 };
        used += gap + item.width();
        if used > width {
            // Sempre mostra ao menos o primeiro atalho.
            return &items[..idx.max(1)];
        }
    }
    items
}

fn rule<'a>(len: usize) -> Span<'a> {
    Span::styled("\u{2500}".repeat(len), Style::default().fg(Color::DarkGray))
}

fn instruction_text_width(items: &[InstructionItem<'_>]) -> usize {
    items.iter().map(InstructionItem::width).sum::<usize>()
        + items.len().saturating_sub(1) * ITEM_GAP.len()
}
