//! Popup overlays. Only one so far: the keyboard help.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::constants::{HELP_POPUP_HEIGHT, HELP_POPUP_WIDTH};
use crate::ui::state::AppState;

use super::helpers::centered_rect;

pub fn render_help_overlay(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let popup_area = centered_rect(HELP_POPUP_WIDTH, HELP_POPUP_HEIGHT, area);

    frame.render_widget(Clear, popup_area);

    let help_entry = |key: &str, desc: &str, color: ratatui::style::Color| -> Line {
        Line::from(vec![
            Span::styled(
                format!("  {:<20}", key),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(desc.to_string(), Style::default().fg(t.text_primary)),
        ])
    };

    let help_text = vec![
        Line::from(Span::styled(
            "  HALAWA WAX - Keyboard Shortcuts",
            t.header_style(),
        )),
        Line::raw(""),
        help_entry("Enter", "Send message", t.accent),
        help_entry("Backspace", "Delete before cursor", t.accent),
        help_entry("Left / Right", "Move cursor", t.accent),
        help_entry("Home / End", "Jump to start / end", t.accent),
        help_entry("Ctrl+U", "Clear the input line", t.accent),
        help_entry("Up / Down", "Scroll the thread", t.accent),
        help_entry("PgUp / PgDn", "Page up / down", t.accent),
        help_entry("F1", "Toggle this help", t.accent),
        help_entry("F2", "Cycle color theme", t.accent),
        help_entry("F3", "Cycle UI language", t.accent),
        help_entry("F4", "Connect to a human agent", t.warning),
        help_entry("Esc", "Close help / quit", t.accent),
        help_entry("Ctrl+C", "Quit", t.accent),
        Line::raw(""),
        Line::from(Span::styled(
            "  While WAXBOT is typing:",
            Style::default()
                .fg(t.assistant_accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "  Enter is ignored until the reply arrives; you can",
            Style::default().fg(t.text_muted),
        )),
        Line::from(Span::styled(
            "  keep editing your next message meanwhile.",
            Style::default().fg(t.text_muted),
        )),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  Tip: ", Style::default().fg(t.text_dim)),
            Span::styled(
                "replies may come with a product card and a",
                Style::default().fg(t.text_muted),
            ),
        ]),
        Line::from(Span::styled(
            "  human-handoff offer (F4 accepts it).",
            Style::default().fg(t.text_muted),
        )),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(Span::styled(t!("title.help").to_string(), t.header_style()))
                .borders(Borders::ALL)
                .border_style(t.border_highlight_style()),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(help, popup_area);
}
