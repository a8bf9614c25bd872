use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::nav::PageId;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::pages::body_lines;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BODY_TEXT, GLOBAL_BORDER, HEADER_TEXT, POPUP_BORDER, SIGIL_ACCENT,
};

/// Draw one frame: pure function of the latest snapshot.
pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new();
    frame.render_widget(header_widget.widget(app.nav().current_page), header);

    frame.render_widget(Clear, body);
    let page = Paragraph::new(body_lines(app))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll(), 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        );
    frame.render_widget(page, body);

    let footer_widget = Footer::new();
    frame.render_widget(footer_widget.widget(footer), footer);

    if app.overlay().menu_open {
        draw_menu(frame, app, body);
    }
    // The AI popup renders above the menu; it closes only via its own
    // dismiss control.
    if app.overlay().ai_popup_open {
        draw_ai_popup(frame, body);
    }
}

fn draw_menu(frame: &mut Frame<'_>, app: &App, body: ratatui::layout::Rect) {
    let mut lines = Vec::new();
    for (idx, page) in PageId::menu_pages().iter().enumerate() {
        let mut line = Line::from(Span::styled(
            format!(" {} ", page.title()),
            Style::default().fg(HEADER_TEXT),
        ));
        if idx == app.menu_selection() {
            line = line.style(Style::default().bg(ACTIVE_HIGHLIGHT));
        }
        lines.push(line);
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Enter: Velg  Esc: Lukk ",
        Style::default().fg(BODY_TEXT),
    )));

    let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16 + 4;
    let height = lines.len() as u16 + 2;
    let area = centered_rect_by_size(body, width, height);

    frame.render_widget(Clear, area);
    let popup = Block::default()
        .title(Span::styled("Meny", Style::default().fg(SIGIL_ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(popup), area);
}

fn draw_ai_popup(frame: &mut Frame<'_>, body: ratatui::layout::Rect) {
    let lines: Vec<Line<'static>> = vec![
        Line::from("KI er IKKE brukt til å generere tekst til bøkene."),
        Line::from(""),
        Line::from("KI er brukt til å generere kode til nettsiden, til å lage"),
        Line::from("medier på nettsiden og sammenfatte tekst til nettsiden."),
        Line::from(""),
        Line::from("Svart og lysebrun magi er brukt til det hele."),
        Line::from(""),
        Line::from(Span::styled(" Esc: Lukk ", Style::default().fg(BODY_TEXT))),
    ];

    let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16 + 4;
    let height = lines.len() as u16 + 2;
    let area = centered_rect_by_size(body, width, height);

    frame.render_widget(Clear, area);
    let popup = Block::default()
        .title(Span::styled("Bruk av KI", Style::default().fg(SIGIL_ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(popup), area);
}
