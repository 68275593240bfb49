//! Header bar: brand, assistant tagline, session summary.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::state::AppState;
use crate::utils::spinner_char;

pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(22), // Brand
            Constraint::Min(20),    // Tagline
            Constraint::Length(30), // Session summary
        ])
        .split(area);

    // Brand
    let pulse = if state.tick_count % 2 == 0 {
        "●"
    } else {
        "○"
    };
    let brand = Paragraph::new(Line::from(vec![
        Span::styled(" ", Style::default()),
        Span::styled(pulse, Style::default().fg(t.accent)),
        Span::styled(" HALAWA WAX ", t.header_style()),
        Span::styled("✨", Style::default().fg(t.accent_secondary)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_style()),
    );
    frame.render_widget(brand, chunks[0]);

    // Tagline, plus a waiting badge while a request is in flight
    let mut tagline_spans = vec![
        Span::raw(" "),
        Span::styled(
            t!("header.tagline").to_string(),
            Style::default().fg(t.text_dim),
        ),
    ];
    if state.loading {
        tagline_spans.push(Span::raw("  "));
        let spinner = spinner_char(state.tick_count);
        tagline_spans.push(Span::styled(
            format!(" {} WAXBOT ", spinner),
            Style::default()
                .fg(t.bg_dark)
                .bg(t.assistant_accent)
                .add_modifier(Modifier::BOLD),
        ));
    }
    let tagline = Paragraph::new(Line::from(tagline_spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_style()),
    );
    frame.render_widget(tagline, chunks[1]);

    // Who we are talking to and how much has been said
    let who = state
        .conversation
        .user_name
        .clone()
        .unwrap_or_else(|| t!("header.guest").to_string());
    let summary_text = t!(
        "header.summary",
        name = crate::utils::truncate_str(&who, 14),
        count = state.conversation.len()
    )
    .to_string();
    let summary = Paragraph::new(Line::from(vec![Span::styled(
        summary_text,
        Style::default().fg(t.text_dim),
    )]))
    .alignment(Alignment::Right)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_style()),
    );
    frame.render_widget(summary, chunks[2]);
}
