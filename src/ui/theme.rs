use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

use crate::chat::Sender;

/// All available built-in theme names.
pub const BUILTIN_THEME_NAMES: &[&str] = &["blossom", "light", "lavender", "noir"];

/// Data-driven theme: every color in one struct.
/// Constructed from built-in presets or loaded from a TOML file.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // ── Brand / Primary ──────────────────────────────────────
    pub accent: Color,
    pub accent_secondary: Color,
    pub bg_dark: Color,
    pub bg_panel: Color,

    // ── Text ─────────────────────────────────────────────────
    pub text_primary: Color,
    pub text_dim: Color,
    pub text_muted: Color,

    // ── Semantic ─────────────────────────────────────────────
    pub success: Color,
    pub warning: Color,
    pub danger: Color,

    // ── Borders ──────────────────────────────────────────────
    pub border: Color,

    // ── Chat ─────────────────────────────────────────────────
    pub user_accent: Color,
    pub assistant_accent: Color,
    pub product_accent: Color,
}

impl Theme {
    // ── Constructors ─────────────────────────────────────────

    /// Default palette: the Halawa Wax brand pinks on a dark plum base.
    pub fn blossom() -> Self {
        Self {
            name: "blossom".to_string(),
            accent: Color::Rgb(236, 72, 153),
            accent_secondary: Color::Rgb(196, 181, 253),
            bg_dark: Color::Rgb(24, 17, 23),
            bg_panel: Color::Rgb(35, 25, 33),
            text_primary: Color::Rgb(237, 225, 233),
            text_dim: Color::Rgb(168, 146, 160),
            text_muted: Color::Rgb(110, 90, 103),
            success: Color::Rgb(74, 222, 128),
            warning: Color::Rgb(250, 204, 21),
            danger: Color::Rgb(248, 113, 113),
            border: Color::Rgb(74, 52, 66),
            user_accent: Color::Rgb(96, 165, 250),
            assistant_accent: Color::Rgb(244, 114, 182),
            product_accent: Color::Rgb(45, 212, 191),
        }
    }

    /// Light palette echoing the original web widget (white card, pink chrome).
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),
            accent: Color::Rgb(219, 39, 119),
            accent_secondary: Color::Rgb(147, 51, 234),
            bg_dark: Color::Rgb(253, 247, 250),
            bg_panel: Color::Rgb(252, 231, 243),
            text_primary: Color::Rgb(55, 35, 45),
            text_dim: Color::Rgb(125, 95, 110),
            text_muted: Color::Rgb(180, 155, 168),
            success: Color::Rgb(22, 163, 74),
            warning: Color::Rgb(202, 138, 4),
            danger: Color::Rgb(220, 38, 38),
            border: Color::Rgb(251, 207, 232),
            user_accent: Color::Rgb(59, 130, 246),
            assistant_accent: Color::Rgb(236, 72, 153),
            product_accent: Color::Rgb(13, 148, 136),
        }
    }

    /// Lavender palette from the site's gradient end.
    pub fn lavender() -> Self {
        Self {
            name: "lavender".to_string(),
            accent: Color::Rgb(167, 139, 250),
            accent_secondary: Color::Rgb(244, 114, 182),
            bg_dark: Color::Rgb(24, 21, 38),
            bg_panel: Color::Rgb(34, 30, 52),
            text_primary: Color::Rgb(230, 226, 245),
            text_dim: Color::Rgb(158, 150, 190),
            text_muted: Color::Rgb(105, 98, 135),
            success: Color::Rgb(110, 231, 183),
            warning: Color::Rgb(253, 224, 71),
            danger: Color::Rgb(251, 113, 133),
            border: Color::Rgb(63, 56, 92),
            user_accent: Color::Rgb(125, 211, 252),
            assistant_accent: Color::Rgb(196, 181, 253),
            product_accent: Color::Rgb(94, 234, 212),
        }
    }

    /// Neutral dark palette with a gold accent.
    pub fn noir() -> Self {
        Self {
            name: "noir".to_string(),
            accent: Color::Rgb(212, 175, 55),
            accent_secondary: Color::Rgb(176, 190, 197),
            bg_dark: Color::Rgb(18, 18, 18),
            bg_panel: Color::Rgb(28, 28, 28),
            text_primary: Color::Rgb(224, 224, 224),
            text_dim: Color::Rgb(150, 150, 150),
            text_muted: Color::Rgb(95, 95, 95),
            success: Color::Rgb(129, 199, 132),
            warning: Color::Rgb(255, 213, 79),
            danger: Color::Rgb(229, 115, 115),
            border: Color::Rgb(60, 60, 60),
            user_accent: Color::Rgb(100, 181, 246),
            assistant_accent: Color::Rgb(240, 178, 122),
            product_accent: Color::Rgb(77, 182, 172),
        }
    }

    /// Look up a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "blossom" => Some(Self::blossom()),
            "light" => Some(Self::light()),
            "lavender" => Some(Self::lavender()),
            "noir" => Some(Self::noir()),
            _ => None,
        }
    }

    /// Cycle to the next built-in theme.
    pub fn next_builtin(&self) -> Self {
        let idx = BUILTIN_THEME_NAMES
            .iter()
            .position(|&n| n == self.name)
            .unwrap_or(0);
        let next_idx = (idx + 1) % BUILTIN_THEME_NAMES.len();
        Self::by_name(BUILTIN_THEME_NAMES[next_idx]).unwrap()
    }

    /// Resolve a configured theme name: built-ins first, then the custom
    /// theme file for "custom", then the default palette.
    pub fn resolve(name: &str) -> Self {
        if let Some(t) = Self::by_name(name) {
            return t;
        }
        if name.eq_ignore_ascii_case("custom") {
            if let Some(mut t) = Self::from_toml_file(&crate::constants::custom_theme_path()) {
                t.name = "custom".to_string();
                return t;
            }
            tracing::warn!("custom theme file missing or invalid, using blossom");
        } else {
            tracing::warn!("unknown theme '{}', using blossom", name);
        }
        Self::blossom()
    }

    /// Load a custom theme from a TOML file, falling back to the default
    /// palette for missing fields.
    pub fn from_toml_file(path: &std::path::Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        let file: ThemeFile = toml::from_str(&content).ok()?;
        Some(
            file.into_theme(
                path.file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("custom"),
            ),
        )
    }

    // ── Computed Styles ──────────────────────────────────────

    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn border_highlight_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Role badge next to each message.
    pub fn badge_style(&self, sender: Sender) -> Style {
        let bg = match sender {
            Sender::User => self.user_accent,
            Sender::Assistant => self.assistant_accent,
        };
        Style::default()
            .fg(self.bg_dark)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Message body text, per sender.
    pub fn message_style(&self, sender: Sender) -> Style {
        match sender {
            Sender::User => Style::default().fg(self.text_primary),
            Sender::Assistant => Style::default().fg(self.text_dim),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::blossom()
    }
}

// ── TOML deserialization for custom themes ──────────────────

/// Intermediate struct for parsing theme TOML files.
/// All fields are optional; missing fields inherit from the default theme.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ThemeFile {
    accent: Option<String>,
    accent_secondary: Option<String>,
    bg_dark: Option<String>,
    bg_panel: Option<String>,
    text_primary: Option<String>,
    text_dim: Option<String>,
    text_muted: Option<String>,
    success: Option<String>,
    warning: Option<String>,
    danger: Option<String>,
    border: Option<String>,
    user_accent: Option<String>,
    assistant_accent: Option<String>,
    product_accent: Option<String>,
}

impl ThemeFile {
    fn into_theme(self, name: &str) -> Theme {
        let base = Theme::blossom();
        Theme {
            name: name.to_string(),
            accent: parse_color(&self.accent).unwrap_or(base.accent),
            accent_secondary: parse_color(&self.accent_secondary).unwrap_or(base.accent_secondary),
            bg_dark: parse_color(&self.bg_dark).unwrap_or(base.bg_dark),
            bg_panel: parse_color(&self.bg_panel).unwrap_or(base.bg_panel),
            text_primary: parse_color(&self.text_primary).unwrap_or(base.text_primary),
            text_dim: parse_color(&self.text_dim).unwrap_or(base.text_dim),
            text_muted: parse_color(&self.text_muted).unwrap_or(base.text_muted),
            success: parse_color(&self.success).unwrap_or(base.success),
            warning: parse_color(&self.warning).unwrap_or(base.warning),
            danger: parse_color(&self.danger).unwrap_or(base.danger),
            border: parse_color(&self.border).unwrap_or(base.border),
            user_accent: parse_color(&self.user_accent).unwrap_or(base.user_accent),
            assistant_accent: parse_color(&self.assistant_accent)
                .unwrap_or(base.assistant_accent),
            product_accent: parse_color(&self.product_accent).unwrap_or(base.product_accent),
        }
    }
}

/// Parse a hex color string like "#FF8800" or "FF8800" into a ratatui Color.
fn parse_color(opt: &Option<String>) -> Option<Color> {
    let s = opt.as_ref()?;
    let hex = s.trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
