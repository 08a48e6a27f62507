//! Form controls for the grade screen
//!
//! - `TextField`: bordered single-line input with placeholder
//! - `Button`: one-line filled button
//! - `Switch`: labelled on/off toggle

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::theme::Theme;

/// Single-line text input
pub struct TextField<'a> {
    value: &'a str,
    placeholder: &'a str,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> TextField<'a> {
    pub fn new(value: &'a str, placeholder: &'a str, theme: &'a Theme) -> Self {
        Self {
            value,
            placeholder,
            focused: false,
            theme,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Terminal cell where the cursor belongs when this field has focus
    pub fn cursor_position(value: &str, area: Rect) -> (u16, u16) {
        let inner_width = area.width.saturating_sub(2) as usize;
        let shown = tail(value, inner_width.saturating_sub(1)).width() as u16;
        (area.x + 1 + shown, area.y + 1)
    }
}

impl<'a> Widget for TextField<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height < 3 {
            return;
        }

        let mut border_style = Style::default().fg(self.theme.input_border);
        if self.focused {
            border_style = border_style.add_modifier(Modifier::BOLD);
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(self.theme.input_bg));
        let inner = block.inner(area);
        block.render(area, buf);

        let width = inner.width as usize;
        if self.value.is_empty() {
            let style = Style::default()
                .fg(self.theme.placeholder)
                .bg(self.theme.input_bg);
            buf.set_string(inner.x, inner.y, truncate(self.placeholder, width), style);
        } else {
            // Keep the end of long input visible, leaving a cell for the cursor
            let style = Style::default()
                .fg(self.theme.input_fg)
                .bg(self.theme.input_bg);
            buf.set_string(inner.x, inner.y, tail(self.value, width.saturating_sub(1)), style);
        }
    }
}

/// One-line filled button
pub struct Button<'a> {
    label: &'a str,
    color: ratatui::style::Color,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str, color: ratatui::style::Color, theme: &'a Theme) -> Self {
        Self {
            label,
            color,
            focused: false,
            theme,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl<'a> Widget for Button<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let mut style = Style::default().fg(self.theme.button_text).bg(self.color);
        if self.focused {
            style = style.add_modifier(Modifier::BOLD);
        }
        buf.set_style(area, style);

        let label = if self.focused {
            format!("▸ {} ◂", self.label)
        } else {
            self.label.to_string()
        };
        let label = truncate(&label, area.width as usize);
        let x = area.x + (area.width.saturating_sub(label.width() as u16)) / 2;
        let y = area.y + area.height / 2;
        buf.set_string(x, y, label, style);
    }
}

/// Labelled on/off switch
pub struct Switch<'a> {
    label: &'a str,
    on: bool,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> Switch<'a> {
    pub fn new(label: &'a str, on: bool, theme: &'a Theme) -> Self {
        Self {
            label,
            on,
            focused: false,
            theme,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl<'a> Widget for Switch<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let label_style = Style::default()
            .fg(self.theme.accent)
            .bg(self.theme.background)
            .add_modifier(Modifier::BOLD);
        let mut knob_style = Style::default().fg(self.theme.foreground).bg(self.theme.background);
        if self.focused {
            knob_style = knob_style.add_modifier(Modifier::REVERSED);
        }

        let knob = if self.on { "[x]" } else { "[ ]" };
        let label = format!("{} ", self.label);
        let (x, _) = buf.set_stringn(area.x, area.y, &label, area.width as usize, label_style);
        let remaining = (area.x + area.width).saturating_sub(x) as usize;
        buf.set_stringn(x, area.y, knob, remaining, knob_style);
    }
}

/// Truncate string to fit within max_width, adding ellipsis if needed
fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 1 {
        return "…".repeat(max_width);
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width + 1 > max_width {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

/// Longest suffix of `s` that fits in `max_width` columns
fn tail(s: &str, max_width: usize) -> &str {
    let mut width = 0;
    let mut start = s.len();
    for (idx, c) in s.char_indices().rev() {
        let char_width = c.width().unwrap_or(0);
        if width + char_width > max_width {
            break;
        }
        width += char_width;
        start = idx;
    }
    &s[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello w…");
        assert_eq!(truncate("hi", 2), "hi");
        assert_eq!(truncate("hello", 1), "…");
        assert_eq!(truncate("hello", 0), "");
    }

    #[test]
    fn test_tail() {
        assert_eq!(tail("assignment", 4), "ment");
        assert_eq!(tail("hw", 10), "hw");
        assert_eq!(tail("日本語", 4), "本語");
        assert_eq!(tail("abc", 0), "");
    }

    #[test]
    fn test_field_shows_placeholder_then_value() {
        let theme = Theme::light();
        let area = Rect::new(0, 0, 20, 3);

        let mut buf = Buffer::empty(area);
        TextField::new("", "Grade", &theme).render(area, &mut buf);
        assert!(row(&buf, 1).contains("Grade"));

        let mut buf = Buffer::empty(area);
        TextField::new("92.5", "Grade", &theme).render(area, &mut buf);
        assert!(row(&buf, 1).contains("92.5"));
        assert!(!row(&buf, 1).contains("Grade"));
    }

    #[test]
    fn test_cursor_after_text() {
        let area = Rect::new(2, 4, 20, 3);
        assert_eq!(TextField::cursor_position("", area), (3, 5));
        assert_eq!(TextField::cursor_position("HW1", area), (6, 5));
        // Long input scrolls, cursor pinned to the last cell
        assert_eq!(TextField::cursor_position(&"x".repeat(40), area), (2 + 1 + 17, 5));
    }

    #[test]
    fn test_button_centres_label() {
        let theme = Theme::light();
        let area = Rect::new(0, 0, 12, 1);
        let mut buf = Buffer::empty(area);
        Button::new("Add", theme.add_button, &theme).render(area, &mut buf);
        assert_eq!(row(&buf, 0), "    Add     ");
    }

    #[test]
    fn test_switch_states() {
        let theme = Theme::dark();
        let area = Rect::new(0, 0, 20, 1);

        let mut buf = Buffer::empty(area);
        Switch::new("Dark Mode", true, &theme).render(area, &mut buf);
        assert!(row(&buf, 0).starts_with("Dark Mode [x]"));

        let mut buf = Buffer::empty(area);
        Switch::new("Dark Mode", false, &theme).render(area, &mut buf);
        assert!(row(&buf, 0).starts_with("Dark Mode [ ]"));
    }
}
