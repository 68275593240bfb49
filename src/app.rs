//! Application struct and event loop.
//!
//! Owns the terminal, state, the chat client, and the reply channel.
//! Extracts the event loop from `main()` into a testable, well-structured unit.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use crate::chat::{generate_session_id, ChatClient, ChatEvent, Message};
use crate::config::Config;
use crate::constants::{EVENT_POLL_MS, TICK_MS};
use crate::ui::{self, AppState, Theme};

/// Main application struct.
///
/// Owns all runtime resources: terminal state, the chat client, and the
/// channel the request task reports back on.
pub struct App {
    state: AppState,
    client: ChatClient,

    chat_tx: mpsc::UnboundedSender<ChatEvent>,
    chat_rx: mpsc::UnboundedReceiver<ChatEvent>,

    last_tick: Instant,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let theme = Theme::resolve(&config.theme);
        let session_id = generate_session_id();
        tracing::info!(session_id = %session_id, server = %config.server_url, "starting session");

        let mut state = AppState::new(session_id, config.user_name.clone(), theme);
        if config.show_greeting {
            state.conversation.push(Message::greeting());
        }
        state.set_status(t!("status.server", url = config.server_url.clone()).to_string());

        let client = ChatClient::new(&config.server_url);
        let (chat_tx, chat_rx) = mpsc::unbounded_channel::<ChatEvent>();

        Self {
            state,
            client,
            chat_tx,
            chat_rx,
            last_tick: Instant::now(),
        }
    }

    /// Run the main event loop. Returns when the user quits.
    pub async fn run(&mut self) -> Result<()> {
        // Terminal init
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        // Main loop
        loop {
            terminal.draw(|frame| ui::render(frame, &self.state))?;

            self.drain_chat_events();

            if event::poll(Duration::from_millis(EVENT_POLL_MS))? {
                let terminal_event = event::read()?;

                if let Event::Mouse(mouse) = terminal_event {
                    self.handle_mouse(mouse);
                    continue;
                }

                if let Event::Key(key) = terminal_event {
                    if self.handle_key(key) {
                        break; // quit requested
                    }
                }
            }

            self.tick();
        }

        // Cleanup
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        println!("\n{}\n", t!("app.goodbye"));
        Ok(())
    }

    // ── Channel draining ─────────────────────────────────────────

    fn drain_chat_events(&mut self) {
        while let Ok(event) = self.chat_rx.try_recv() {
            match event {
                ChatEvent::Reply(reply) => {
                    tracing::debug!(intent = ?reply.intent, "reply received");
                    self.state.apply_reply(&reply);
                }
                ChatEvent::Failed(err) => {
                    // Detail goes to the log; the thread gets the fixed
                    // fallback message instead.
                    tracing::warn!("chat request failed: {}", err);
                    self.state.apply_failure();
                }
            }
        }
    }

    // ── Request dispatch ─────────────────────────────────────────

    /// Spawn an async task to POST `text` and report back on the channel.
    fn dispatch_chat(&self, text: String) {
        let request = self.state.conversation.request_for(text);
        tracing::debug!(chars = request.message.len(), "dispatching chat request");
        let client = self.client.clone();
        let tx = self.chat_tx.clone();

        tokio::spawn(async move {
            client.send_chat(request, tx).await;
        });
    }

    // ── Mouse handling ───────────────────────────────────────────

    fn handle_mouse(&mut self, mouse: crossterm::event::MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollUp => self.state.scroll_up(),
            MouseEventKind::ScrollDown => self.state.scroll_down(),
            _ => {}
        }
    }

    // ── Keyboard handling ────────────────────────────────────────

    /// Handle a key event. Returns `true` if the app should quit.
    fn handle_key(&mut self, key: crossterm::event::KeyEvent) -> bool {
        // Ctrl+C quits from any mode
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // Help overlay mode
        if self.state.show_help {
            return self.handle_key_help(key);
        }

        match key.code {
            KeyCode::Esc => return true,
            KeyCode::Enter => {
                if let Some(text) = self.state.submit() {
                    self.dispatch_chat(text);
                }
            }
            KeyCode::Backspace => self.state.input_backspace(),
            KeyCode::Left => self.state.cursor_left(),
            KeyCode::Right => self.state.cursor_right(),
            KeyCode::Home => self.state.cursor_home(),
            KeyCode::End => self.state.cursor_end(),
            KeyCode::Up => self.state.scroll_up(),
            KeyCode::Down => self.state.scroll_down(),
            KeyCode::PageUp => self.state.page_up(),
            KeyCode::PageDown => self.state.page_down(),
            KeyCode::F(1) => self.state.show_help = true,
            KeyCode::F(2) => self.state.cycle_theme(),
            KeyCode::F(3) => self.state.cycle_lang(),
            KeyCode::F(4) => {
                if self.state.acknowledge_escalation() {
                    tracing::info!("escalation accepted, handoff shown");
                }
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.input_clear();
            }
            // Unhandled Ctrl chords must not type letters
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.input_char(c);
            }
            _ => {}
        }
        false
    }

    fn handle_key_help(&mut self, key: crossterm::event::KeyEvent) -> bool {
        match key.code {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q') => {
                self.state.show_help = false;
            }
            _ => {}
        }
        false
    }

    // ── Tick ─────────────────────────────────────────────────────

    /// Advance the animation tick on a fixed cadence, independent of how
    /// fast events make the loop spin.
    fn tick(&mut self) {
        if self.last_tick.elapsed() >= Duration::from_millis(TICK_MS) {
            self.state.tick_count = self.state.tick_count.wrapping_add(1);
            self.last_tick = Instant::now();
        }
    }
}
