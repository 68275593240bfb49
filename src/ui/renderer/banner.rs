//! Escalation banner, shown between the thread and the input box when
//! the assistant (or a failed request) offers a human handoff.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::state::AppState;

pub fn render_banner(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;

    let block = Block::default()
        .title(Span::styled(
            format!(" 🆘 {} ", t!("banner.title")),
            Style::default().fg(t.warning).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(t.warning));

    let lines = vec![
        Line::from(Span::styled(
            format!(" {}", t!("banner.body")),
            Style::default().fg(t.text_primary),
        )),
        Line::from(vec![
            Span::raw(" "),
            Span::styled(
                " F4 ",
                Style::default()
                    .fg(t.bg_dark)
                    .bg(t.warning)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {}", t!("banner.connect")),
                Style::default().fg(t.text_dim),
            ),
        ]),
    ];

    let banner = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(banner, area);
}
