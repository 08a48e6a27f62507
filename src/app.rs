use std::time::{Duration, Instant};

use crate::config::Config;
use crate::gradebook::{course_grade_message, Gradebook};
use crate::keymap::{Command, Focus};
use crate::ui::scroll::ListScroll;
use crate::ui::theme::Theme;

/// Modal message drawn over the form
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    /// Course grade result, fades in
    Result,
    /// Quit confirmation
    Confirm,
}

impl Alert {
    fn error(err: impl std::fmt::Display, title: &str) -> Self {
        Self {
            kind: AlertKind::Error,
            title: title.to_string(),
            message: err.to_string(),
        }
    }
}

/// Application state
pub struct App {
    /// Records, drafts and the dark mode flag
    gradebook: Gradebook,
    /// Control receiving keyboard input
    focus: Focus,
    /// Open modal, if any
    alert: Option<Alert>,
    /// When the last course grade was computed (drives the fade-in)
    result_shown_at: Option<Instant>,
    /// Assignment list viewport
    scroll: ListScroll,
    /// Configuration
    config: Config,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let gradebook = Gradebook::with_dark_mode(config.appearance.dark_mode);
        Self {
            gradebook,
            focus: Focus::TitleField,
            alert: None,
            result_shown_at: None,
            scroll: ListScroll::default(),
            config,
            should_quit: false,
        }
    }

    pub fn gradebook(&self) -> &Gradebook {
        &self.gradebook
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Palette for the current dark mode setting
    pub fn theme(&self) -> Theme {
        self.config.resolve_theme(self.gradebook.is_dark_mode())
    }

    pub fn scroll_mut(&mut self) -> &mut ListScroll {
        &mut self.scroll
    }

    /// Apply one command
    pub fn dispatch(&mut self, command: Command) {
        if self.alert.is_some() {
            match command {
                Command::Dismiss => self.dismiss_alert(),
                Command::Quit => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match command {
            Command::Insert(c) => self.insert_char(c),
            Command::Backspace => {
                if let Some(buffer) = self.focused_buffer() {
                    buffer.pop();
                }
            }
            Command::FocusNext => self.focus = self.focus.next(),
            Command::FocusPrev => self.focus = self.focus.prev(),
            Command::Activate => self.activate(),
            Command::AddAssignment => self.add_assignment(),
            Command::CalculateGrade => self.calculate_grade(),
            Command::ClearAssignments => self.clear_assignments(),
            Command::ToggleDarkMode => self.gradebook.toggle_dark_mode(),
            Command::ScrollUp => self.scroll.move_up(),
            Command::ScrollDown => self.scroll.move_down(self.gradebook.len()),
            Command::PageUp => self.scroll.page_up(PAGE_ROWS),
            Command::PageDown => self.scroll.page_down(self.gradebook.len(), PAGE_ROWS),
            Command::ScrollHome => self.scroll.home(),
            Command::ScrollEnd => self.scroll.end(self.gradebook.len()),
            Command::Dismiss => {}
            Command::Quit => self.request_quit(),
        }
    }

    /// Press the focused control
    fn activate(&mut self) {
        match self.focus {
            Focus::TitleField | Focus::GradeField | Focus::AddButton => self.add_assignment(),
            Focus::CalculateButton => self.calculate_grade(),
            Focus::ClearButton => self.clear_assignments(),
            Focus::DarkModeSwitch => self.gradebook.toggle_dark_mode(),
            Focus::List => {}
        }
    }

    fn focused_buffer(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::TitleField => Some(self.gradebook.draft_title_mut()),
            Focus::GradeField => Some(self.gradebook.draft_grade_mut()),
            _ => None,
        }
    }

    fn insert_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        if self.focus == Focus::GradeField
            && self.config.behavior.numeric_grade_input
            && !is_number_char(c)
        {
            return;
        }
        if let Some(buffer) = self.focused_buffer() {
            buffer.push(c);
        }
    }

    fn add_assignment(&mut self) {
        match self.gradebook.add_assignment() {
            Ok(record) => {
                tracing::info!("Added {:?} ({}%)", record.title, record.grade);
                self.focus = Focus::TitleField;
                self.scroll.end(self.gradebook.len());
            }
            Err(err) => self.alert = Some(Alert::error(err, err.alert_title())),
        }
    }

    fn calculate_grade(&mut self) {
        match self.gradebook.calculate_grade() {
            Ok(average) => {
                self.result_shown_at = Some(Instant::now());
                self.alert = Some(Alert {
                    kind: AlertKind::Result,
                    title: "Current Grade".to_string(),
                    message: course_grade_message(average, self.config.behavior.decimals),
                });
            }
            Err(err) => self.alert = Some(Alert::error(err, err.alert_title())),
        }
    }

    fn clear_assignments(&mut self) {
        self.gradebook.clear_assignments();
        self.scroll.clamp(0);
        self.focus = Focus::TitleField;
    }

    fn request_quit(&mut self) {
        if self.config.behavior.confirm_quit && !self.gradebook.is_empty() {
            self.alert = Some(Alert {
                kind: AlertKind::Confirm,
                title: "Quit".to_string(),
                message: format!(
                    "{} assignments will be lost. Press Ctrl+C again to quit, Esc to stay.",
                    self.gradebook.len()
                ),
            });
        } else {
            self.should_quit = true;
        }
    }

    fn dismiss_alert(&mut self) {
        if let Some(alert) = self.alert.take() {
            if alert.kind == AlertKind::Result {
                self.result_shown_at = None;
            }
        }
    }

    /// Fade-in progress of the course grade, 0.0 to 1.0
    pub fn fade_progress(&self, now: Instant) -> f64 {
        let Some(start) = self.result_shown_at else {
            return 1.0;
        };
        let duration = Duration::from_millis(self.config.behavior.fade_ms);
        if duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(start);
        (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
    }

    /// Whether a fade is still running and the screen should keep redrawing
    pub fn is_animating(&self, now: Instant) -> bool {
        self.result_shown_at.is_some() && self.fade_progress(now) < 1.0
    }
}

/// Rows moved by PageUp/PageDown in the list
const PAGE_ROWS: usize = 5;

/// Characters that can appear in a decimal number
fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')
}
