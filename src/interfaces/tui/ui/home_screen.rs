use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::common::message_paragraph;
use crate::interfaces::tui::app::App;
use crate::page::SlideshowState;

pub fn draw_home_screen(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Popular products ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(slideshow) = app.page.slideshow() else {
        return;
    };

    let (Some(slide), SlideshowState::Rotating { products, current }) =
        (app.page.current_slide(), slideshow.state())
    else {
        let message = slideshow.message().unwrap_or_default();
        frame.render_widget(message_paragraph(message), inner);
        return;
    };

    // 轮播位置指示点
    let dots: Vec<Span> = (0..products.len())
        .map(|i| {
            if i == *current {
                Span::styled("● ", Style::default().fg(Color::Cyan))
            } else {
                Span::styled("○ ", Style::default().fg(Color::DarkGray))
            }
        })
        .collect();

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            slide.name,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            slide.price,
            Style::default().fg(Color::Green),
        )),
        Line::from(Span::styled(
            format!("♥ {}", slide.likes),
            Style::default().fg(Color::Magenta),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("[image] {}", slide.image),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(dots),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}
