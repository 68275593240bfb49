//! Status bar at the bottom of the screen.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::constants::STATUS_MESSAGE_TIMEOUT_SECS;
use crate::ui::state::AppState;

pub fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;

    // Helper to create a keybind badge
    let badge = |key: &str, color: ratatui::style::Color| -> Span {
        Span::styled(
            format!(" {} ", key),
            Style::default()
                .fg(t.bg_dark)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        )
    };
    let dim =
        |text: &str| -> Span { Span::styled(text.to_string(), Style::default().fg(t.text_dim)) };

    let mut spans = vec![
        Span::styled(" ", Style::default()),
        badge("Enter", t.accent),
        dim(&t!("status.send").to_string()),
        badge("↑↓", t.accent),
        dim(&t!("status.scroll").to_string()),
        badge("F2", t.accent),
        dim(&format!(" {}: {} ", t!("status.theme"), t.name)),
        badge("F3", t.accent),
        dim(&format!(
            " {}: {} ",
            t!("status.lang"),
            state.current_lang.to_uppercase()
        )),
        badge("F1", t.accent),
        dim(&t!("status.help").to_string()),
        badge("Esc", t.accent),
        dim(&t!("status.quit").to_string()),
    ];

    // Offer the handoff shortcut while the banner is up
    if state.show_escalation {
        spans.push(badge("F4", t.warning));
        spans.push(dim(&t!("status.agent").to_string()));
    }

    // Transient status message -- auto-expires
    if let Some((msg, when)) = &state.status_message {
        if when.elapsed().as_secs() < STATUS_MESSAGE_TIMEOUT_SECS {
            spans.push(Span::styled(
                format!("  {} ", msg),
                Style::default().fg(t.warning).add_modifier(Modifier::BOLD),
            ));
        }
    }

    let status = Paragraph::new(Line::from(spans));
    frame.render_widget(status, area);
}
