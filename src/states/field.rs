//! Input Field State
//!
//! Edit buffer and flags behind an [`InputField`](crate::components::composite::InputField).
//! The buffer is seeded from the caller's value once; later changes to that
//! value are not mirrored back.

use gpui::SharedString;

use super::notice::Notice;

/// Kind of value the field edits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldKind {
    #[default]
    Text,
    /// Whole numbers only
    Number,
    Password,
    /// No whitespace
    Email,
}

impl FieldKind {
    /// Whether the editor may hold `text`. Edits that fail are dropped as typed.
    pub fn accepts(self, text: &str) -> bool {
        match self {
            FieldKind::Text | FieldKind::Password => true,
            FieldKind::Number => text.chars().all(|c| c.is_ascii_digit()),
            FieldKind::Email => !text.chars().any(char::is_whitespace),
        }
    }
}

/// Change notification carrying the new buffer value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange {
    pub value: String,
}

/// Line shown under the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Caption {
    Helper(SharedString),
    Error(SharedString),
}

#[derive(Debug, Clone, Default)]
pub struct FieldState {
    value: String,
    kind: FieldKind,
    label: Option<SharedString>,
    placeholder: Option<SharedString>,
    helper_text: Option<SharedString>,
    error_message: Option<SharedString>,
    required: bool,
    clearable: bool,
    invalid: bool,
    loading: bool,
    revealed: bool,
}

impl FieldState {
    /// Create a field whose buffer starts as `initial`
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            value: initial.into(),
            ..Default::default()
        }
    }

    pub fn kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn helper_text(mut self, text: impl Into<SharedString>) -> Self {
        self.helper_text = Some(text.into());
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Mark the field invalid, optionally with a message replacing the helper text
    pub fn invalid(mut self, message: Option<SharedString>) -> Self {
        self.set_invalid(message);
        self
    }

    // ==================== Getters ====================

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn field_kind(&self) -> FieldKind {
        self.kind
    }

    pub fn label_text(&self) -> Option<&SharedString> {
        self.label.as_ref()
    }

    pub fn placeholder_text(&self) -> Option<&SharedString> {
        self.placeholder.as_ref()
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_invalid(&self) -> bool {
        self.invalid
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Kind the input is rendered as; a revealed password shows as plain text
    pub fn effective_kind(&self) -> FieldKind {
        match self.kind {
            FieldKind::Password if self.revealed => FieldKind::Text,
            kind => kind,
        }
    }

    /// Whether the input should hide its characters
    pub fn is_masked(&self) -> bool {
        self.effective_kind() == FieldKind::Password
    }

    pub fn shows_clear(&self) -> bool {
        self.clearable && !self.value.is_empty()
    }

    pub fn shows_reveal_toggle(&self) -> bool {
        self.kind == FieldKind::Password
    }

    /// Accessible label for the reveal toggle
    pub fn reveal_label(&self) -> &'static str {
        if self.revealed {
            "Hide password"
        } else {
            "Show password"
        }
    }

    /// Helper text while valid, the error message while invalid
    pub fn caption(&self) -> Option<Caption> {
        if self.invalid {
            self.error_message.clone().map(Caption::Error)
        } else {
            self.helper_text.clone().map(Caption::Helper)
        }
    }

    // ==================== Setters ====================

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_invalid(&mut self, message: Option<SharedString>) {
        self.invalid = true;
        self.error_message = message;
    }

    pub fn set_valid(&mut self) {
        self.invalid = false;
        self.error_message = None;
    }

    /// Apply a user edit. Returns `None` when the buffer already holds `value`.
    pub fn edit(&mut self, value: impl Into<String>) -> Option<FieldChange> {
        let value = value.into();
        if value == self.value {
            return None;
        }
        self.value = value;
        Some(FieldChange {
            value: self.value.clone(),
        })
    }

    /// Reset the buffer to empty. Used by the clear button and by owners
    /// resetting the field after a successful submit.
    pub fn clear(&mut self) -> FieldChange {
        self.value.clear();
        FieldChange {
            value: String::new(),
        }
    }

    /// Flip password visibility. The buffer is left untouched.
    pub fn toggle_reveal(&mut self) -> FieldKind {
        self.revealed = !self.revealed;
        self.effective_kind()
    }

    /// Validate for submission, yielding the value to hand to the submit callback
    pub fn submit(&self) -> Result<String, Notice> {
        if self.required && self.value.trim().is_empty() {
            return Err(Notice::empty_input());
        }
        Ok(self.value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_updates_value() {
        let mut field = FieldState::new("").label("Name").placeholder("Enter name");
        let change = field.edit("John").expect("value changed");
        assert_eq!(change.value, "John");
        assert_eq!(field.value(), "John");
    }

    #[test]
    fn test_edit_same_value_is_silent() {
        let mut field = FieldState::new("abc");
        assert!(field.edit("abc").is_none());
    }

    #[test]
    fn test_clear_emits_empty_change() {
        let mut field = FieldState::new("Hello").clearable(true);
        assert!(field.shows_clear());

        let change = field.clear();
        assert_eq!(change.value, "");
        assert_eq!(field.value(), "");
        assert!(!field.shows_clear());
    }

    #[test]
    fn test_clear_button_hidden_unless_clearable() {
        let field = FieldState::new("Hello");
        assert!(!field.shows_clear());
    }

    #[test]
    fn test_password_toggle_switches_kind() {
        let mut field = FieldState::new("secret").kind(FieldKind::Password);
        assert!(field.shows_reveal_toggle());
        assert_eq!(field.effective_kind(), FieldKind::Password);
        assert!(field.is_masked());
        assert_eq!(field.reveal_label(), "Show password");

        assert_eq!(field.toggle_reveal(), FieldKind::Text);
        assert!(!field.is_masked());
        assert_eq!(field.reveal_label(), "Hide password");

        assert_eq!(field.toggle_reveal(), FieldKind::Password);
        assert_eq!(field.value(), "secret");
    }

    #[test]
    fn test_reveal_toggle_only_for_password() {
        let field = FieldState::new("").kind(FieldKind::Email);
        assert!(!field.shows_reveal_toggle());
        assert_eq!(field.effective_kind(), FieldKind::Email);
    }

    #[test]
    fn test_required_blank_submit_is_rejected() {
        let field = FieldState::new("").required(true);
        assert_eq!(field.submit(), Err(Notice::empty_input()));

        let whitespace = FieldState::new("   ").required(true);
        assert_eq!(whitespace.submit(), Err(Notice::empty_input()));
    }

    #[test]
    fn test_required_filled_submit_passes_value() {
        let field = FieldState::new("x").required(true);
        assert_eq!(field.submit(), Ok("x".to_string()));
    }

    #[test]
    fn test_optional_blank_submit_passes() {
        let field = FieldState::new("");
        assert_eq!(field.submit(), Ok(String::new()));
    }

    #[test]
    fn test_caption_prefers_error_when_invalid() {
        let mut field = FieldState::new("").helper_text("We will never share your email");
        assert_eq!(
            field.caption(),
            Some(Caption::Helper("We will never share your email".into()))
        );

        field.set_invalid(Some("Invalid email".into()));
        assert_eq!(field.caption(), Some(Caption::Error("Invalid email".into())));

        field.set_valid();
        assert!(matches!(field.caption(), Some(Caption::Helper(_))));
    }

    #[test]
    fn test_number_kind_takes_whole_numbers() {
        let kind = FieldKind::Number;
        assert!(kind.accepts(""));
        assert!(kind.accepts("25"));
        assert!(!kind.accepts("25.5"));
        assert!(!kind.accepts("-3"));
        assert!(!kind.accepts("abc"));
    }

    #[test]
    fn test_email_kind_rejects_whitespace() {
        assert!(FieldKind::Email.accepts("ann@example.com"));
        assert!(!FieldKind::Email.accepts("ann @example.com"));
    }

    #[test]
    fn test_text_kinds_take_anything() {
        for kind in [FieldKind::Text, FieldKind::Password] {
            assert!(kind.accepts("any thing 12.5 !"));
        }
    }

    #[test]
    fn test_loading_flag() {
        let mut field = FieldState::new("").loading(true);
        assert!(field.is_loading());
        field.set_loading(false);
        assert!(!field.is_loading());
    }
}
