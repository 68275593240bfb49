//! Conversation thread and message input box.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::chat::{intent_icon, Sender};
use crate::ui::state::AppState;
use crate::utils::{loading_dots, spinner_char};

use super::helpers::render_scrollbar_bordered;

/// The message history. New activity sticks to the bottom unless the
/// user has scrolled up.
pub fn render_thread(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;

    let border_style = if state.loading {
        t.border_highlight_style()
    } else {
        t.border_style()
    };
    let title = if state.loading {
        format!(
            " {} {} ",
            spinner_char(state.tick_count),
            t!("chat.title")
        )
    } else {
        format!(" 💬 {} ", t!("chat.title"))
    };

    let block = Block::default()
        .title(Span::styled(title, t.header_style()))
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let wrap_width = (inner.width as usize).saturating_sub(2).max(10);
    let mut lines: Vec<Line> = Vec::new();

    if state.conversation.is_empty() && !state.loading {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            t!("chat.empty").to_string(),
            Style::default()
                .fg(t.text_muted)
                .add_modifier(Modifier::ITALIC),
        )))
        .alignment(Alignment::Center);
        let mut centered = inner;
        centered.y += inner.height / 2;
        centered.height = 1.min(inner.height);
        frame.render_widget(placeholder, centered);
        return;
    }

    for msg in state.conversation.messages() {
        lines.push(message_header(msg, state));
        for raw_line in msg.text.lines() {
            if raw_line.is_empty() {
                lines.push(Line::raw(""));
                continue;
            }
            for wrapped in textwrap::wrap(raw_line, wrap_width) {
                lines.push(Line::from(Span::styled(
                    format!("  {}", wrapped),
                    t.message_style(msg.sender),
                )));
            }
        }
        lines.push(Line::raw(""));
    }

    if state.loading {
        lines.push(Line::from(Span::styled(
            format!(
                "  {}{}",
                t!("chat.typing"),
                loading_dots(state.tick_count)
            ),
            Style::default()
                .fg(t.assistant_accent)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    let total_lines = lines.len();
    let visible_height = inner.height as usize;

    // scroll counts lines up from the bottom; 0 follows new messages
    let max_scroll = total_lines.saturating_sub(visible_height);
    let offset = max_scroll.saturating_sub(state.scroll.min(max_scroll));

    let history = Paragraph::new(lines).scroll((offset as u16, 0));
    frame.render_widget(history, inner);

    render_scrollbar_bordered(frame, area, total_lines, offset);
}

/// Badge + intent icon + timestamp line above each message body.
fn message_header<'a>(msg: &'a crate::chat::Message, state: &AppState) -> Line<'a> {
    let t = &state.theme;
    let label = match msg.sender {
        Sender::User => state
            .conversation
            .user_name
            .clone()
            .unwrap_or_else(|| t!("chat.you").to_string()),
        Sender::Assistant => "WAXBOT".to_string(),
    };

    let mut spans = vec![Span::styled(format!(" {} ", label), t.badge_style(msg.sender))];
    if msg.sender == Sender::Assistant {
        spans.push(Span::raw(" "));
        spans.push(Span::raw(intent_icon(msg.intent.as_deref())));
    }
    spans.push(Span::styled(
        format!("  {}", msg.timestamp.format("%H:%M")),
        Style::default().fg(t.text_muted),
    ));
    Line::from(spans)
}

/// Single-line input box with a visible cursor. While a request is in
/// flight the box dims and Enter is ignored, but editing still works.
pub fn render_input(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;

    let (title, border_style) = if state.loading {
        (
            format!(" {} ", t!("input.waiting")),
            t.border_style(),
        )
    } else {
        (
            format!(" {} ", t!("input.title")),
            t.border_highlight_style(),
        )
    };

    let input_line = if state.input.is_empty() {
        Line::from(vec![
            Span::raw(" "),
            Span::styled(" ", Style::default().add_modifier(Modifier::REVERSED)),
            Span::styled(
                format!(" {}", t!("input.placeholder")),
                Style::default()
                    .fg(t.text_muted)
                    .add_modifier(Modifier::ITALIC),
            ),
        ])
    } else {
        let before = &state.input[..state.cursor_pos];
        let at = state.input[state.cursor_pos..]
            .chars()
            .next()
            .map(|c| c.to_string())
            .unwrap_or_else(|| " ".to_string());
        let after_start = state.input[state.cursor_pos..]
            .char_indices()
            .nth(1)
            .map(|(i, _)| state.cursor_pos + i)
            .unwrap_or(state.input.len());
        Line::from(vec![
            Span::styled(
                format!(" {}", before),
                Style::default().fg(t.text_primary),
            ),
            Span::styled(at, Style::default().add_modifier(Modifier::REVERSED)),
            Span::styled(
                state.input[after_start..].to_string(),
                Style::default().fg(t.text_primary),
            ),
        ])
    };

    let input = Paragraph::new(input_line).block(
        Block::default()
            .title(Span::styled(title, Style::default().fg(t.accent)))
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(input, area);
}
