//! Product recommendation side panel.
//!
//! Shows the card from the most recent reply. The image URL is carried
//! on the wire but a terminal has nowhere to put it, so only the text
//! fields and the shop link are rendered.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::state::AppState;

pub fn render_product(frame: &mut Frame, area: Rect, state: &AppState) {
    let t = &state.theme;
    let Some(product) = &state.current_product else {
        return;
    };

    let block = Block::default()
        .title(Span::styled(
            format!(" 🛍️ {} ", t!("product.title")),
            Style::default()
                .fg(t.product_accent)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(t.product_accent))
        .style(Style::default().bg(t.bg_panel));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let wrap_width = (inner.width as usize).saturating_sub(2).max(10);
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        format!(" {}", crate::utils::truncate_str(&product.name, wrap_width)),
        Style::default()
            .fg(t.text_primary)
            .add_modifier(Modifier::BOLD),
    )));
    if let Some(price) = product.price {
        lines.push(Line::from(Span::styled(
            format!(" ${:.2}", price),
            Style::default().fg(t.success).add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::raw(""));

    push_section(
        &mut lines,
        &t!("product.features").to_string(),
        &product.features,
        wrap_width,
        state,
    );
    push_section(
        &mut lines,
        &t!("product.benefits").to_string(),
        &product.benefits,
        wrap_width,
        state,
    );

    if !product.product_link.is_empty() {
        lines.push(Line::from(Span::styled(
            format!(" {}:", t!("product.link")),
            Style::default().fg(t.text_dim).add_modifier(Modifier::BOLD),
        )));
        for wrapped in textwrap::wrap(&product.product_link, wrap_width) {
            lines.push(Line::from(Span::styled(
                format!("  {}", wrapped),
                Style::default()
                    .fg(t.accent_secondary)
                    .add_modifier(Modifier::UNDERLINED),
            )));
        }
    }

    let card = Paragraph::new(lines);
    frame.render_widget(card, inner);
}

fn push_section(
    lines: &mut Vec<Line>,
    heading: &str,
    body: &str,
    wrap_width: usize,
    state: &AppState,
) {
    if body.is_empty() {
        return;
    }
    let t = &state.theme;
    lines.push(Line::from(Span::styled(
        format!(" {}:", heading),
        Style::default().fg(t.text_dim).add_modifier(Modifier::BOLD),
    )));
    for wrapped in textwrap::wrap(body, wrap_width) {
        lines.push(Line::from(Span::styled(
            format!("  {}", wrapped),
            Style::default().fg(t.text_primary),
        )));
    }
    lines.push(Line::raw(""));
}
