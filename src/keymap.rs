//! Key bindings for the grade screen.
//!
//! Keys resolve to a [`Command`] depending on which control has focus and
//! whether an alert is open. Resolution is pure so bindings can be tested
//! without a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Control that currently receives keyboard input, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    TitleField,
    GradeField,
    AddButton,
    List,
    CalculateButton,
    ClearButton,
    DarkModeSwitch,
}

impl Focus {
    const ORDER: [Focus; 7] = [
        Focus::TitleField,
        Focus::GradeField,
        Focus::AddButton,
        Focus::List,
        Focus::CalculateButton,
        Focus::ClearButton,
        Focus::DarkModeSwitch,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|&f| f == self).unwrap_or(0)
    }

    /// Next control (wraps)
    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    /// Previous control (wraps)
    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    pub fn is_text_field(self) -> bool {
        matches!(self, Focus::TitleField | Focus::GradeField)
    }
}

/// Something the user asked the screen to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Insert(char),
    Backspace,
    FocusNext,
    FocusPrev,
    /// Press whatever has focus (add from a field)
    Activate,
    AddAssignment,
    CalculateGrade,
    ClearAssignments,
    ToggleDarkMode,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    ScrollHome,
    ScrollEnd,
    /// Close the open alert
    Dismiss,
    Quit,
}

/// Map a key press to a command
pub fn resolve(key: KeyEvent, focus: Focus, alert_open: bool) -> Option<Command> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && matches!(key.code, KeyCode::Char('c')) {
        return Some(Command::Quit);
    }

    if alert_open {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(Command::Dismiss),
            _ => None,
        };
    }

    if ctrl {
        return match key.code {
            KeyCode::Char('a') => Some(Command::AddAssignment),
            KeyCode::Char('g') => Some(Command::CalculateGrade),
            KeyCode::Char('l') => Some(Command::ClearAssignments),
            KeyCode::Char('d') => Some(Command::ToggleDarkMode),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Tab => return Some(Command::FocusNext),
        KeyCode::BackTab => return Some(Command::FocusPrev),
        KeyCode::Enter => return Some(Command::Activate),
        _ => {}
    }

    if focus.is_text_field() {
        return match key.code {
            KeyCode::Char(c) => Some(Command::Insert(c)),
            KeyCode::Backspace => Some(Command::Backspace),
            KeyCode::Down => Some(Command::FocusNext),
            KeyCode::Up => Some(Command::FocusPrev),
            KeyCode::Esc => Some(Command::Quit),
            _ => None,
        };
    }

    if focus == Focus::List {
        return match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Command::ScrollUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Command::ScrollDown),
            KeyCode::PageUp => Some(Command::PageUp),
            KeyCode::PageDown => Some(Command::PageDown),
            KeyCode::Home | KeyCode::Char('g') => Some(Command::ScrollHome),
            KeyCode::End | KeyCode::Char('G') => Some(Command::ScrollEnd),
            KeyCode::Esc | KeyCode::Char('q') => Some(Command::Quit),
            _ => None,
        };
    }

    // Buttons and the switch
    match key.code {
        KeyCode::Char(' ') => Some(Command::Activate),
        KeyCode::Down | KeyCode::Right => Some(Command::FocusNext),
        KeyCode::Up | KeyCode::Left => Some(Command::FocusPrev),
        KeyCode::Esc | KeyCode::Char('q') => Some(Command::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_focus_wraps() {
        assert_eq!(Focus::TitleField.next(), Focus::GradeField);
        assert_eq!(Focus::DarkModeSwitch.next(), Focus::TitleField);
        assert_eq!(Focus::TitleField.prev(), Focus::DarkModeSwitch);
        assert_eq!(Focus::List.prev(), Focus::AddButton);
    }

    #[test]
    fn test_typing_in_fields() {
        assert_eq!(
            resolve(key(KeyCode::Char('q')), Focus::TitleField, false),
            Some(Command::Insert('q'))
        );
        assert_eq!(
            resolve(key(KeyCode::Backspace), Focus::GradeField, false),
            Some(Command::Backspace)
        );
        assert_eq!(
            resolve(key(KeyCode::Enter), Focus::GradeField, false),
            Some(Command::Activate)
        );
    }

    #[test]
    fn test_shifted_chars_still_insert() {
        let upper = KeyEvent::new(KeyCode::Char('H'), KeyModifiers::SHIFT);
        assert_eq!(
            resolve(upper, Focus::TitleField, false),
            Some(Command::Insert('H'))
        );
    }

    #[test]
    fn test_ctrl_shortcuts() {
        assert_eq!(resolve(ctrl('a'), Focus::TitleField, false), Some(Command::AddAssignment));
        assert_eq!(resolve(ctrl('g'), Focus::List, false), Some(Command::CalculateGrade));
        assert_eq!(resolve(ctrl('l'), Focus::AddButton, false), Some(Command::ClearAssignments));
        assert_eq!(resolve(ctrl('d'), Focus::GradeField, false), Some(Command::ToggleDarkMode));
        assert_eq!(resolve(ctrl('c'), Focus::GradeField, false), Some(Command::Quit));
    }

    #[test]
    fn test_alert_swallows_keys() {
        assert_eq!(resolve(key(KeyCode::Enter), Focus::TitleField, true), Some(Command::Dismiss));
        assert_eq!(resolve(key(KeyCode::Esc), Focus::List, true), Some(Command::Dismiss));
        assert_eq!(resolve(key(KeyCode::Char('x')), Focus::TitleField, true), None);
        assert_eq!(resolve(ctrl('a'), Focus::TitleField, true), None);
        assert_eq!(resolve(ctrl('c'), Focus::TitleField, true), Some(Command::Quit));
    }

    #[test]
    fn test_list_navigation() {
        assert_eq!(resolve(key(KeyCode::Char('j')), Focus::List, false), Some(Command::ScrollDown));
        assert_eq!(resolve(key(KeyCode::Up), Focus::List, false), Some(Command::ScrollUp));
        assert_eq!(resolve(key(KeyCode::Char('G')), Focus::List, false), Some(Command::ScrollEnd));
        assert_eq!(resolve(key(KeyCode::Char('q')), Focus::List, false), Some(Command::Quit));
    }

    #[test]
    fn test_buttons() {
        assert_eq!(
            resolve(key(KeyCode::Char(' ')), Focus::ClearButton, false),
            Some(Command::Activate)
        );
        assert_eq!(
            resolve(key(KeyCode::Tab), Focus::DarkModeSwitch, false),
            Some(Command::FocusNext)
        );
        assert_eq!(resolve(key(KeyCode::Char('x')), Focus::AddButton, false), None);
    }
}
