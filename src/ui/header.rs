use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::nav::PageId;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, SIGIL_ACCENT};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, page: PageId) -> Paragraph<'static> {
        let line = Line::from(vec![
            Span::styled(" ⛧ ", Style::default().fg(SIGIL_ACCENT)),
            Span::styled("Pentangelen-universet", Style::default().fg(HEADER_TEXT)),
            Span::styled("  Mørk • Okkult • Humor", Style::default().fg(MUTED_TEXT)),
            Span::styled(
                format!("  │ {}", page.title()),
                Style::default().fg(SIGIL_ACCENT),
            ),
        ]);

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
