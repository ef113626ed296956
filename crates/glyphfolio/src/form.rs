//! Contact form state.
//!
//! The form only collects text. Its submit button has no handler.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// The focusable parts of the form, in tab order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormFocus {
    #[default]
    Name,
    Email,
    Message,
    Submit,
}

impl FormFocus {
    fn next(self) -> Self {
        match self {
            FormFocus::Name => FormFocus::Email,
            FormFocus::Email => FormFocus::Message,
            FormFocus::Message => FormFocus::Submit,
            FormFocus::Submit => FormFocus::Name,
        }
    }

    fn prev(self) -> Self {
        match self {
            FormFocus::Name => FormFocus::Submit,
            FormFocus::Email => FormFocus::Name,
            FormFocus::Message => FormFocus::Email,
            FormFocus::Submit => FormFocus::Message,
        }
    }
}

/// The contact form: three text fields and a submit button.
#[derive(Debug, Default)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    focus: FormFocus,
    /// Whether keystrokes go to the form.
    editing: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Start sending keystrokes to the form, keeping the last focus.
    pub fn begin_editing(&mut self) {
        self.editing = true;
    }

    pub fn stop_editing(&mut self) {
        self.editing = false;
    }

    pub fn focus(&self) -> FormFocus {
        self.focus
    }

    /// Current text of a field; the submit button has none.
    pub fn value(&self, field: FormFocus) -> &str {
        match field {
            FormFocus::Name => &self.name,
            FormFocus::Email => &self.email,
            FormFocus::Message => &self.message,
            FormFocus::Submit => "",
        }
    }

    fn focused_text(&mut self) -> Option<&mut String> {
        match self.focus {
            FormFocus::Name => Some(&mut self.name),
            FormFocus::Email => Some(&mut self.email),
            FormFocus::Message => Some(&mut self.message),
            FormFocus::Submit => None,
        }
    }

    /// Handle a key press while editing. Returns false when the key was not
    /// consumed by the form.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if !self.editing {
            return false;
        }
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, _) => return false,
            (_, KeyCode::Esc) => self.stop_editing(),
            (_, KeyCode::Tab) | (_, KeyCode::Down) => self.focus = self.focus.next(),
            (_, KeyCode::BackTab) | (_, KeyCode::Up) => self.focus = self.focus.prev(),
            (_, KeyCode::Enter) => self.press_enter(),
            (_, KeyCode::Backspace) => {
                if let Some(text) = self.focused_text() {
                    text.pop();
                }
            }
            (_, KeyCode::Char(c)) => {
                if let Some(text) = self.focused_text() {
                    text.push(c);
                }
            }
            _ => return false,
        }
        true
    }

    fn press_enter(&mut self) {
        match self.focus {
            FormFocus::Message => self.message.push('\n'),
            FormFocus::Submit => {
                tracing::debug!("send pressed; the form has no submit handler");
            }
            FormFocus::Name | FormFocus::Email => self.focus = self.focus.next(),
        }
    }
}
