use crate::chat::client::{ChatReply, Product};
use crate::chat::{capture_name, Conversation, Message};
use crate::constants::{LANGUAGES, PAGE_SIZE};

use super::theme::Theme;

/// Central application state - the single source of truth.
///
/// All mutation happens on the event-loop thread, each handler running to
/// completion, so no handler ever observes a partial update.
pub struct AppState {
    /// The thread plus session context (id, captured name).
    pub conversation: Conversation,
    /// Product from the most recent reply, if any. At most one shown.
    pub current_product: Option<Product>,
    /// Whether the escalation banner is visible.
    pub show_escalation: bool,
    /// One request may be outstanding; this flag blocks resubmission.
    pub loading: bool,

    // ── Input box ───────────────────────────────────────────────
    pub input: String,
    pub cursor_pos: usize,

    // ── View ────────────────────────────────────────────────────
    /// Lines scrolled up from the bottom of the thread; 0 follows new
    /// messages.
    pub scroll: usize,
    pub show_help: bool,
    pub tick_count: u64,

    // ── Status message (shown in status bar) ────────────────────
    pub status_message: Option<(String, std::time::Instant)>,

    // ── Theme / Language ────────────────────────────────────────
    pub theme: Theme,
    pub current_lang: String,
}

impl AppState {
    pub fn new(session_id: String, user_name: Option<String>, theme: Theme) -> Self {
        let mut conversation = Conversation::new(session_id);
        conversation.user_name = user_name;
        Self {
            conversation,
            current_product: None,
            show_escalation: false,
            loading: false,
            input: String::new(),
            cursor_pos: 0,
            scroll: 0,
            show_help: false,
            tick_count: 0,
            status_message: None,
            theme,
            current_lang: rust_i18n::locale().to_string(),
        }
    }

    // ── Submit / reply flow ─────────────────────────────────────

    /// Take the input line as a message to send.
    ///
    /// Empty (after trimming) input and input while a request is in
    /// flight are rejected silently. Otherwise the user message is
    /// appended immediately, the product card and escalation banner are
    /// cleared, the in-flight flag is set, and the trimmed text is
    /// returned for dispatch.
    pub fn submit(&mut self) -> Option<String> {
        if self.loading {
            return None;
        }
        let text = self.input.trim().to_string();
        if text.is_empty() {
            return None;
        }
        self.input.clear();
        self.cursor_pos = 0;

        self.conversation.push(Message::user(&text));
        self.current_product = None;
        self.show_escalation = false;
        self.loading = true;
        self.scroll = 0;
        Some(text)
    }

    /// Fold a successful reply into the state and clear the in-flight
    /// flag. Appends exactly one assistant message.
    pub fn apply_reply(&mut self, reply: &ChatReply) {
        self.conversation.push(reply.to_message());

        if let Some(product) = &reply.product {
            self.current_product = Some(product.clone());
        }
        if reply.escalation_needed == Some(true) {
            self.show_escalation = true;
        }
        self.try_capture_name(reply);

        self.loading = false;
        self.scroll = 0;
    }

    /// Fold a failed request into the state: one fixed fallback message,
    /// the banner forced visible, and the in-flight flag cleared.
    pub fn apply_failure(&mut self) {
        self.conversation.push(Message::fallback());
        self.show_escalation = true;
        self.loading = false;
        self.scroll = 0;
    }

    /// Accept the escalation offer: hide the banner and append the fixed
    /// handoff message. A no-op when the banner is not showing.
    pub fn acknowledge_escalation(&mut self) -> bool {
        if !self.show_escalation {
            return false;
        }
        self.show_escalation = false;
        self.conversation.push(Message::handoff());
        self.scroll = 0;
        true
    }

    /// Remember the user's name for later requests, when the reply makes
    /// it worth looking for one: booking intent plus a contact entity,
    /// and no name captured yet. The name comes from the user's own
    /// submitted text, never from the reply.
    fn try_capture_name(&mut self, reply: &ChatReply) {
        if self.conversation.user_name.is_some() {
            return;
        }
        if reply.intent.as_deref() != Some("booking") {
            return;
        }
        // An explicit JSON null does not count as a contact entity.
        let has_contact = reply
            .entities
            .as_ref()
            .and_then(|e| e.get("contact"))
            .is_some_and(|v| !v.is_null());
        if !has_contact {
            return;
        }
        if let Some(text) = self.conversation.last_user_text() {
            if let Some(name) = capture_name(text) {
                tracing::debug!("captured user name: {}", name);
                self.conversation.user_name = Some(name);
            }
        }
    }

    // ── Input editing ───────────────────────────────────────────

    pub fn input_char(&mut self, c: char) {
        self.input.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
    }

    pub fn input_backspace(&mut self) {
        if self.cursor_pos > 0 {
            // Find the previous char boundary
            let prev = self.input[..self.cursor_pos]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.input.remove(prev);
            self.cursor_pos = prev;
        }
    }

    pub fn input_clear(&mut self) {
        self.input.clear();
        self.cursor_pos = 0;
    }

    pub fn cursor_left(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos = self.input[..self.cursor_pos]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn cursor_right(&mut self) {
        if self.cursor_pos < self.input.len() {
            self.cursor_pos = self.input[self.cursor_pos..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_pos + i)
                .unwrap_or(self.input.len());
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor_pos = self.input.len();
    }

    // ── Scrolling ───────────────────────────────────────────────

    pub fn scroll_up(&mut self) {
        self.scroll += 1;
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn page_up(&mut self) {
        self.scroll += PAGE_SIZE;
    }

    pub fn page_down(&mut self) {
        self.scroll = self.scroll.saturating_sub(PAGE_SIZE);
    }

    // ── Chrome ──────────────────────────────────────────────────

    /// Cycle to the next built-in theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next_builtin();
    }

    /// Cycle to the next UI language.
    pub fn cycle_lang(&mut self) {
        let current_idx = LANGUAGES
            .iter()
            .position(|&l| l == self.current_lang)
            .unwrap_or(0);
        let next_idx = (current_idx + 1) % LANGUAGES.len();
        let next_lang = LANGUAGES[next_idx];
        rust_i18n::set_locale(next_lang);
        self.current_lang = next_lang.to_string();
    }

    /// Set a status bar message with automatic timestamp.
    pub fn set_status(&mut self, msg: String) {
        self.status_message = Some((msg, std::time::Instant::now()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Sender;

    fn make_state() -> AppState {
        rust_i18n::set_locale("en");
        AppState::new("session_test".to_string(), None, Theme::default())
    }

    fn reply_from(json: &str) -> ChatReply {
        serde_json::from_str(json).unwrap()
    }

    fn type_text(s: &mut AppState, text: &str) {
        for c in text.chars() {
            s.input_char(c);
        }
    }

    // ── Input editing ─────────────────────────────────────────────

    #[test]
    fn input_char_and_backspace() {
        let mut s = make_state();
        s.input_char('h');
        s.input_char('i');
        assert_eq!(s.input, "hi");
        assert_eq!(s.cursor_pos, 2);
        s.input_backspace();
        assert_eq!(s.input, "h");
        assert_eq!(s.cursor_pos, 1);
    }

    #[test]
    fn input_backspace_at_start() {
        let mut s = make_state();
        s.input_backspace(); // should be safe no-op
        assert_eq!(s.input, "");
        assert_eq!(s.cursor_pos, 0);
    }

    #[test]
    fn input_multibyte_chars() {
        let mut s = make_state();
        s.input_char('é');
        s.input_char('!');
        assert_eq!(s.input, "é!");
        assert_eq!(s.cursor_pos, 3);
        s.input_backspace();
        s.input_backspace();
        assert_eq!(s.input, "");
        assert_eq!(s.cursor_pos, 0);
    }

    #[test]
    fn cursor_movement() {
        let mut s = make_state();
        type_text(&mut s, "abc");
        assert_eq!(s.cursor_pos, 3);

        s.cursor_left();
        assert_eq!(s.cursor_pos, 2);
        s.cursor_home();
        assert_eq!(s.cursor_pos, 0);
        s.cursor_left(); // stays at 0
        assert_eq!(s.cursor_pos, 0);
        s.cursor_right();
        assert_eq!(s.cursor_pos, 1);
        s.cursor_end();
        assert_eq!(s.cursor_pos, 3);
        s.cursor_right(); // stays at end
        assert_eq!(s.cursor_pos, 3);
    }

    #[test]
    fn input_clear_resets() {
        let mut s = make_state();
        type_text(&mut s, "draft");
        s.input_clear();
        assert_eq!(s.input, "");
        assert_eq!(s.cursor_pos, 0);
    }

    // ── Submit ────────────────────────────────────────────────────

    #[test]
    fn submit_returns_trimmed_text_and_appends_user_message() {
        let mut s = make_state();
        type_text(&mut s, "  hello there  ");
        let result = s.submit();
        assert_eq!(result, Some("hello there".to_string()));
        assert_eq!(s.input, "");
        assert_eq!(s.cursor_pos, 0);
        assert_eq!(s.conversation.len(), 1);
        assert_eq!(s.conversation.messages()[0].sender, Sender::User);
        assert_eq!(s.conversation.messages()[0].text, "hello there");
        assert!(s.loading);
    }

    #[test]
    fn submit_empty_is_a_silent_no_op() {
        let mut s = make_state();
        assert_eq!(s.submit(), None);
        assert_eq!(s.conversation.len(), 0);
        assert!(!s.loading);
    }

    #[test]
    fn submit_whitespace_only_is_a_silent_no_op() {
        let mut s = make_state();
        type_text(&mut s, "   ");
        assert_eq!(s.submit(), None);
        assert_eq!(s.conversation.len(), 0);
        assert!(!s.loading);
    }

    #[test]
    fn submit_while_loading_is_rejected() {
        let mut s = make_state();
        type_text(&mut s, "first");
        assert!(s.submit().is_some());
        assert!(s.loading);

        type_text(&mut s, "second");
        assert_eq!(s.submit(), None);
        // The draft stays in the input, nothing was appended
        assert_eq!(s.input, "second");
        assert_eq!(s.conversation.len(), 1);
    }

    #[test]
    fn submit_clears_product_and_banner() {
        let mut s = make_state();
        type_text(&mut s, "show me a wax kit");
        s.submit().unwrap();
        s.apply_reply(&reply_from(
            r#"{"message":"Here you go","escalation_needed":true,
                "product":{"name":"Kit","features":"f","benefits":"b",
                           "image_url":"i","product_link":"l"}}"#,
        ));
        assert!(s.current_product.is_some());
        assert!(s.show_escalation);

        type_text(&mut s, "thanks");
        s.submit().unwrap();
        assert!(s.current_product.is_none());
        assert!(!s.show_escalation);
    }

    // ── Replies ───────────────────────────────────────────────────

    #[test]
    fn apply_reply_appends_exactly_one_assistant_message() {
        let mut s = make_state();
        type_text(&mut s, "hi");
        s.submit().unwrap();
        let before = s.conversation.assistant_count();

        s.apply_reply(&reply_from(r#"{"message":"Hello! How can I help?"}"#));
        assert_eq!(s.conversation.assistant_count(), before + 1);
        let last = s.conversation.messages().last().unwrap();
        assert_eq!(last.text, "Hello! How can I help?");
        assert!(!s.loading);
    }

    #[test]
    fn messages_stay_in_submission_order() {
        let mut s = make_state();
        type_text(&mut s, "one");
        s.submit().unwrap();
        s.apply_reply(&reply_from(r#"{"message":"reply one"}"#));
        type_text(&mut s, "two");
        s.submit().unwrap();
        s.apply_reply(&reply_from(r#"{"message":"reply two"}"#));

        let texts: Vec<&str> = s
            .conversation
            .messages()
            .iter()
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(texts, vec!["one", "reply one", "two", "reply two"]);
    }

    #[test]
    fn escalation_reply_shows_banner() {
        let mut s = make_state();
        type_text(&mut s, "this is unacceptable");
        s.submit().unwrap();
        s.apply_reply(&reply_from(
            r#"{"message":"I understand","escalation_needed":true}"#,
        ));
        assert!(s.show_escalation);
    }

    #[test]
    fn escalation_false_leaves_banner_hidden() {
        let mut s = make_state();
        type_text(&mut s, "hi");
        s.submit().unwrap();
        s.apply_reply(&reply_from(
            r#"{"message":"hello","escalation_needed":false}"#,
        ));
        assert!(!s.show_escalation);
    }

    #[test]
    fn product_replaces_previous_product() {
        let mut s = make_state();
        type_text(&mut s, "wax?");
        s.submit().unwrap();
        s.apply_reply(&reply_from(
            r#"{"message":"a","product":{"name":"First","features":"f","benefits":"b","image_url":"i","product_link":"l"}}"#,
        ));
        assert_eq!(s.current_product.as_ref().unwrap().name, "First");

        type_text(&mut s, "anything else?");
        s.submit().unwrap();
        s.apply_reply(&reply_from(
            r#"{"message":"b","product":{"name":"Second","features":"f","benefits":"b","image_url":"i","product_link":"l"}}"#,
        ));
        assert_eq!(s.current_product.as_ref().unwrap().name, "Second");
    }

    #[test]
    fn reply_without_product_leaves_card_cleared() {
        let mut s = make_state();
        type_text(&mut s, "wax?");
        s.submit().unwrap();
        s.apply_reply(&reply_from(
            r#"{"message":"a","product":{"name":"Kit","features":"f","benefits":"b","image_url":"i","product_link":"l"}}"#,
        ));
        assert!(s.current_product.is_some());

        // The new submission clears the card; a plain reply leaves it so
        type_text(&mut s, "and my total?");
        s.submit().unwrap();
        assert!(s.current_product.is_none());
        s.apply_reply(&reply_from(r#"{"message":"$20"}"#));
        assert!(s.current_product.is_none());
    }

    // ── Failures ──────────────────────────────────────────────────

    #[test]
    fn failure_appends_one_fallback_and_shows_banner() {
        let mut s = make_state();
        type_text(&mut s, "hello?");
        s.submit().unwrap();
        let before = s.conversation.assistant_count();

        s.apply_failure();
        assert_eq!(s.conversation.assistant_count(), before + 1);
        let last = s.conversation.messages().last().unwrap();
        assert!(last.text.contains("trouble connecting"));
        assert!(s.show_escalation);
        assert!(!s.loading);
    }

    #[test]
    fn failure_clears_loading_for_next_submit() {
        let mut s = make_state();
        type_text(&mut s, "hello?");
        s.submit().unwrap();
        s.apply_failure();

        type_text(&mut s, "retry");
        assert!(s.submit().is_some());
    }

    // ── Escalation acknowledgment ─────────────────────────────────

    #[test]
    fn acknowledge_hides_banner_and_appends_handoff_once() {
        let mut s = make_state();
        type_text(&mut s, "help");
        s.submit().unwrap();
        s.apply_reply(&reply_from(
            r#"{"message":"Let me get someone","escalation_needed":true}"#,
        ));
        let before = s.conversation.len();

        assert!(s.acknowledge_escalation());
        assert!(!s.show_escalation);
        assert_eq!(s.conversation.len(), before + 1);
        let last = s.conversation.messages().last().unwrap();
        assert_eq!(last.intent.as_deref(), Some("escalation"));
    }

    #[test]
    fn acknowledge_when_hidden_is_a_no_op() {
        let mut s = make_state();
        let before = s.conversation.len();
        assert!(!s.acknowledge_escalation());
        assert_eq!(s.conversation.len(), before);
    }

    #[test]
    fn acknowledge_twice_appends_only_one_handoff() {
        let mut s = make_state();
        type_text(&mut s, "help");
        s.submit().unwrap();
        s.apply_reply(&reply_from(r#"{"message":"ok","escalation_needed":true}"#));

        assert!(s.acknowledge_escalation());
        let after_first = s.conversation.len();
        assert!(!s.acknowledge_escalation());
        assert_eq!(s.conversation.len(), after_first);
    }

    // ── Name capture ──────────────────────────────────────────────

    #[test]
    fn booking_reply_with_contact_captures_name() {
        let mut s = make_state();
        type_text(&mut s, "Hi, I'm Sara, I'd like to book");
        s.submit().unwrap();
        s.apply_reply(&reply_from(
            r#"{"message":"Sure!","intent":"booking","entities":{"contact":"x"}}"#,
        ));
        assert_eq!(s.conversation.user_name.as_deref(), Some("Sara"));
    }

    #[test]
    fn non_booking_intent_does_not_capture() {
        let mut s = make_state();
        type_text(&mut s, "I'm Sara");
        s.submit().unwrap();
        s.apply_reply(&reply_from(
            r#"{"message":"hi","intent":"casual_chat","entities":{"contact":"x"}}"#,
        ));
        assert!(s.conversation.user_name.is_none());
    }

    #[test]
    fn null_contact_entity_does_not_capture() {
        let mut s = make_state();
        type_text(&mut s, "I'm Sara, book me in");
        s.submit().unwrap();
        s.apply_reply(&reply_from(
            r#"{"message":"when?","intent":"booking","entities":{"contact":null}}"#,
        ));
        assert!(s.conversation.user_name.is_none());
    }

    #[test]
    fn booking_without_contact_does_not_capture() {
        let mut s = make_state();
        type_text(&mut s, "I'm Sara, book me in");
        s.submit().unwrap();
        s.apply_reply(&reply_from(
            r#"{"message":"when?","intent":"booking","entities":{"date":"friday"}}"#,
        ));
        assert!(s.conversation.user_name.is_none());
    }

    #[test]
    fn existing_name_is_not_overwritten() {
        let mut s = make_state();
        s.conversation.user_name = Some("Jordan".to_string());
        type_text(&mut s, "I'm Sara, book me in");
        s.submit().unwrap();
        s.apply_reply(&reply_from(
            r#"{"message":"ok","intent":"booking","entities":{"contact":"x"}}"#,
        ));
        assert_eq!(s.conversation.user_name.as_deref(), Some("Jordan"));
    }

    #[test]
    fn unmatchable_text_captures_nothing() {
        let mut s = make_state();
        type_text(&mut s, "book me for tuesday");
        s.submit().unwrap();
        s.apply_reply(&reply_from(
            r#"{"message":"ok","intent":"booking","entities":{"contact":"x"}}"#,
        ));
        assert!(s.conversation.user_name.is_none());
    }

    // ── Scrolling ─────────────────────────────────────────────────

    #[test]
    fn scroll_down_saturates_at_bottom() {
        let mut s = make_state();
        s.scroll_down();
        assert_eq!(s.scroll, 0);
        s.scroll_up();
        s.scroll_up();
        assert_eq!(s.scroll, 2);
        s.scroll_down();
        assert_eq!(s.scroll, 1);
    }

    #[test]
    fn page_scroll_steps() {
        let mut s = make_state();
        s.page_up();
        assert_eq!(s.scroll, PAGE_SIZE);
        s.page_down();
        assert_eq!(s.scroll, 0);
    }

    #[test]
    fn new_activity_snaps_to_bottom() {
        let mut s = make_state();
        s.scroll = 7;
        type_text(&mut s, "hi");
        s.submit().unwrap();
        assert_eq!(s.scroll, 0);

        s.scroll = 7;
        s.apply_reply(&reply_from(r#"{"message":"hello"}"#));
        assert_eq!(s.scroll, 0);
    }

    // ── Chrome ────────────────────────────────────────────────────

    #[test]
    fn set_status_stores_message() {
        let mut s = make_state();
        assert!(s.status_message.is_none());
        s.set_status("sent".to_string());
        let (msg, _) = s.status_message.as_ref().unwrap();
        assert_eq!(msg, "sent");
    }

    #[test]
    fn cycle_theme_changes() {
        let mut s = make_state();
        let initial = s.theme.name.clone();
        s.cycle_theme();
        assert_ne!(s.theme.name, initial);
    }

    #[test]
    fn cycle_lang_wraps() {
        let mut s = make_state();
        assert_eq!(s.current_lang, "en");
        s.cycle_lang();
        assert_eq!(s.current_lang, "es");
        s.cycle_lang();
        assert_eq!(s.current_lang, "en");
    }
}
