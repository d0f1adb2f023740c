//! The two numeric input fields and their key handling.

use crossterm::event::KeyCode;

/// Input field identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Candidate count
    N,
    /// Planted palindrome count
    X,
}

impl Field {
    /// Get field title
    pub fn title(&self) -> &'static str {
        match self {
            Self::N => "N (data count)",
            Self::X => "X (palindromes)",
        }
    }

    fn other(&self) -> Self {
        match self {
            Self::N => Self::X,
            Self::X => Self::N,
        }
    }
}

/// What a key press asks the application to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    /// Nothing beyond editing
    None,
    /// Run the benchmark
    Submit,
    /// Leave the application
    Quit,
}

/// Raw text of the N and X fields.
///
/// Values are kept as typed; validation happens when the benchmark is
/// triggered, not while editing.
#[derive(Debug, Clone)]
pub struct InputForm {
    n: String,
    x: String,
    focus: Field,
}

/// Longest value a field accepts.
const MAX_FIELD_LEN: usize = 12;

impl InputForm {
    pub fn new(n: impl Into<String>, x: impl Into<String>) -> Self {
        Self {
            n: n.into(),
            x: x.into(),
            focus: Field::N,
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::N => &self.n,
            Field::X => &self.x,
        }
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyCode) -> FormAction {
        match key {
            KeyCode::Esc | KeyCode::Char('q') => return FormAction::Quit,
            KeyCode::Enter => return FormAction::Submit,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = self.focus.other();
            }
            KeyCode::Backspace => {
                self.focused_mut().pop();
            }
            KeyCode::Char(c) if c.is_ascii_digit() || c == '-' => {
                let value = self.focused_mut();
                if value.len() < MAX_FIELD_LEN {
                    value.push(c);
                }
            }
            _ => {}
        }
        FormAction::None
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            Field::N => &mut self.n,
            Field::X => &mut self.x,
        }
    }
}
