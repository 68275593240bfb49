//! Renderer module: split into focused submodules.
//!
//! - `header`: Brand, tagline, session summary
//! - `status_bar`: Bottom status bar with keybinds
//! - `chat`: Conversation thread + input box
//! - `banner`: Escalation-to-human banner
//! - `product`: Product recommendation side panel
//! - `overlays`: Popup overlays (help)
//! - `helpers`: Shared rendering utilities

mod banner;
mod chat;
mod header;
pub mod helpers;
mod overlays;
mod product;
mod status_bar;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::constants::{BANNER_HEIGHT, INPUT_HEIGHT, PRODUCT_PANEL_WIDTH};

use super::state::AppState;

/// Top-level render function. Delegates to sub-renderers per region.
pub fn render(frame: &mut Frame, state: &AppState) {
    let size = frame.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header bar
            Constraint::Min(10),   // Content area
            Constraint::Length(1), // Status bar
        ])
        .split(size);

    header::render_header(frame, main_chunks[0], state);
    status_bar::render_status_bar(frame, main_chunks[2], state);

    // Product panel takes a fixed column on the right when a card is
    // showing, unless the terminal is too narrow to split.
    let chat_area = if state.current_product.is_some()
        && main_chunks[1].width > PRODUCT_PANEL_WIDTH + 40
    {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(40),
                Constraint::Length(PRODUCT_PANEL_WIDTH),
            ])
            .split(main_chunks[1]);
        product::render_product(frame, cols[1], state);
        cols[0]
    } else {
        main_chunks[1]
    };

    render_chat_column(frame, chat_area, state);

    if state.show_help {
        overlays::render_help_overlay(frame, size, state);
    }
}

/// Thread on top, input at the bottom, with the escalation banner
/// wedged between them while it is showing.
fn render_chat_column(frame: &mut Frame, area: Rect, state: &AppState) {
    if state.show_escalation {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(8),
                Constraint::Length(BANNER_HEIGHT),
                Constraint::Length(INPUT_HEIGHT),
            ])
            .split(area);
        chat::render_thread(frame, rows[0], state);
        banner::render_banner(frame, rows[1], state);
        chat::render_input(frame, rows[2], state);
    } else {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(INPUT_HEIGHT)])
            .split(area);
        chat::render_thread(frame, rows[0], state);
        chat::render_input(frame, rows[1], state);
    }
}
