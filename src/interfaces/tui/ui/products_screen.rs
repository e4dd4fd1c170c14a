use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use super::common::message_paragraph;
use crate::interfaces::tui::app::App;
use crate::page::{ProductItemView, format::like_count_label};

pub fn draw_products_screen(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Min(5),    // Product list
        ])
        .split(area);

    draw_search_bar(frame, app, chunks[0]);
    draw_product_list(frame, app, chunks[1]);
}

fn draw_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let border_color = if app.search_focused {
        Color::Yellow
    } else {
        Color::DarkGray
    };

    let mut spans = vec![
        Span::styled("Search: ", Style::default().fg(Color::Cyan)),
        Span::styled(
            app.page.search_bar().to_string(),
            Style::default().fg(Color::White),
        ),
    ];
    if app.search_focused {
        spans.push(Span::styled(
            "█",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color)),
    );
    frame.render_widget(bar, area);
}

fn item_lines(item: &ProductItemView) -> Vec<Line<'static>> {
    let likes_style = if item.pulsing {
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(Color::Magenta)
    };
    let likes = format!("♥ {}", like_count_label(&item.like_count));

    vec![
        Line::from(vec![
            Span::styled(
                item.name.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", item.price),
                Style::default().fg(Color::Green),
            ),
            Span::raw("  "),
            Span::styled(likes, likes_style),
        ]),
        Line::from(Span::styled(
            format!("  {}", item.description),
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            format!("  [image] {}", item.image),
            Style::default().fg(Color::DarkGray),
        )),
    ]
}

fn draw_product_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Products ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));

    if let Some(message) = app.page.product_list().and_then(|list| list.message()) {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(message_paragraph(message), inner);
        return;
    }

    let items: Vec<ListItem> = app
        .items()
        .iter()
        .map(|item| ListItem::new(item_lines(item)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, area, &mut app.list_state);
}
