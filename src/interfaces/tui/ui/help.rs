use ratatui::{
    Frame,
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
};

use super::common::centered_rect;

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )])
}

fn shortcut(keys: &'static str, desc: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<16}", keys), Style::default().fg(Color::Cyan)),
        Span::styled(desc, Style::default().fg(Color::White)),
    ])
}

pub fn draw_help_screen(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(70, 80, area);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title("Help - Keyboard Shortcuts")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, popup_area);

    let inner_area = popup_area.inner(Margin::new(2, 1));

    let help_text = vec![
        section("SCREENS"),
        shortcut("Tab", "Switch between Home and Products"),
        shortcut("?", "Show this help"),
        shortcut("q, Esc", "Quit"),
        Line::from(""),
        section("PRODUCTS"),
        shortcut("Up/Down, j/k", "Select product"),
        shortcut("Enter, l", "Like selected product"),
        shortcut("/", "Focus search bar"),
        Line::from(""),
        section("SEARCH BAR"),
        shortcut("Enter", "Search (empty lists everything)"),
        shortcut("Esc", "Leave search bar"),
    ];

    frame.render_widget(Paragraph::new(help_text), inner_area);
}
