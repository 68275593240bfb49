//! Application-wide constants.
//!
//! Centralizes magic numbers, default endpoints, and the fixed assistant
//! texts inherited from the Halawa Wax product.

use std::path::PathBuf;

// ── Timing ────────────────────────────────────────────────────────
/// Event poll timeout (ms) -- how often the UI checks for input.
pub const EVENT_POLL_MS: u64 = 50;
/// Animation tick interval (ms) -- drives the spinner and pulse dot.
pub const TICK_MS: u64 = 250;
/// Status message display duration (seconds).
pub const STATUS_MESSAGE_TIMEOUT_SECS: u64 = 5;

// ── Assistant Endpoint ────────────────────────────────────────────
/// Default assistant server base URL.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:7860";
/// Chat endpoint path, appended to the base URL.
pub const CHAT_PATH: &str = "/chat";
/// Random suffix length of a generated session id.
pub const SESSION_SUFFIX_LEN: usize = 9;

// ── UI Layout ─────────────────────────────────────────────────────
/// Page up/down scroll step in the chat thread.
pub const PAGE_SIZE: usize = 10;
/// Width of the product side panel when a product is displayed.
pub const PRODUCT_PANEL_WIDTH: u16 = 38;
/// Height of the escalation banner row.
pub const BANNER_HEIGHT: u16 = 5;
/// Height of the input box.
pub const INPUT_HEIGHT: u16 = 3;
/// Help overlay width.
pub const HELP_POPUP_WIDTH: u16 = 55;
/// Help overlay height.
pub const HELP_POPUP_HEIGHT: u16 = 24;

// ── Spinner Animation ─────────────────────────────────────────────
/// Spinner character sequence for loading indicators.
pub const SPINNER_CHARS: &[&str] = &["◐", "◓", "◑", "◒"];

// ── Supported Languages ───────────────────────────────────────────
/// Available UI languages for cycling.
pub const LANGUAGES: &[&str] = &["en", "es"];

// ── Fixed Assistant Texts ─────────────────────────────────────────
// These are product copy, shown verbatim regardless of UI language.

/// Greeting appended at startup.
pub const GREETING_TEXT: &str = "Hi! I'm your Halawa Wax AI assistant WAXBOT. I can help you with:\n\n• 🛍️ Product recommendations\n• 🧴 Aftercare tips\n• ❓ General questions\n\nHow can I assist you today?";

/// Shown in place of a reply when the request fails.
pub const FALLBACK_TEXT: &str = "I'm sorry, I'm having trouble connecting right now. Please try again later or contact us directly.";

/// Appended when the user accepts the escalation offer.
pub const HANDOFF_TEXT: &str = "I'm connecting you with our customer service team. They'll be with you shortly. In the meantime, you can also reach us at:\n\n📞 Phone: (555) 123-4567\n📧 Email: support@halawawax.com\n💬 Live chat available on our website";

// ── Paths ─────────────────────────────────────────────────────────

/// Returns the user's home directory, falling back to /tmp.
pub fn home_dir() -> PathBuf {
    PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string()))
}

/// Returns `~/.config/waxchat/`.
pub fn config_dir() -> PathBuf {
    home_dir().join(".config").join("waxchat")
}

/// Returns `~/.config/waxchat/config.toml`.
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Returns `~/.config/waxchat/theme.toml`.
pub fn custom_theme_path() -> PathBuf {
    config_dir().join("theme.toml")
}

/// Returns `~/.config/waxchat/.env` (server URL override, never committed).
pub fn env_file_path() -> PathBuf {
    config_dir().join(".env")
}

/// Returns `~/.local/share/waxchat/`.
pub fn data_dir() -> PathBuf {
    home_dir().join(".local").join("share").join("waxchat")
}

/// Returns `~/.local/share/waxchat/waxchat.log`.
pub fn log_file_path() -> PathBuf {
    data_dir().join("waxchat.log")
}
