//! Screen rendering
//!
//! Top to bottom: heading, dark mode switch, the two input fields, the add
//! button, the assignment list, calculate/clear buttons and a status bar.
//! An open alert is drawn last, centred over everything else.

use std::time::Instant;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{Alert, AlertKind, App};
use crate::keymap::Focus;
use crate::ui::theme::{blend, Theme};
use crate::ui::widgets::{Button, Switch, TextField};

/// Main draw function
pub fn draw(f: &mut Frame, app: &mut App, now: Instant) {
    let theme = app.theme();
    let area = f.area();
    f.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Heading
            Constraint::Length(1), // Dark mode switch
            Constraint::Length(3), // Assignment name
            Constraint::Length(3), // Grade
            Constraint::Length(1), // Add button
            Constraint::Min(3),    // Assignment list
            Constraint::Length(1), // Calculate button
            Constraint::Length(1), // Clear button
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_header(f, app, chunks[0], chunks[1], &theme);
    draw_fields(f, app, chunks[2], chunks[3], &theme);

    let focus = app.focus();
    f.render_widget(
        Button::new("Add Assignment", theme.add_button, &theme)
            .focused(focus == Focus::AddButton),
        chunks[4],
    );

    draw_assignment_list(f, app, chunks[5], &theme);

    f.render_widget(
        Button::new("Calculate Grade", theme.calculate_button, &theme)
            .focused(focus == Focus::CalculateButton),
        chunks[6],
    );
    f.render_widget(
        Button::new("Clear Assignments", theme.clear_button, &theme)
            .focused(focus == Focus::ClearButton),
        chunks[7],
    );

    draw_status_bar(f, app, chunks[8], &theme);

    if let Some(alert) = app.alert() {
        draw_alert(f, alert, app.fade_progress(now), &theme);
    }
}

fn draw_header(f: &mut Frame, app: &App, title_area: Rect, switch_area: Rect, theme: &Theme) {
    let heading = Paragraph::new(app.config().appearance.title.as_str())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(theme.accent)
                .bg(theme.background)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(heading, title_area);

    let switch = Switch::new("Dark Mode", app.gradebook().is_dark_mode(), theme)
        .focused(app.focus() == Focus::DarkModeSwitch);
    let indented = Rect {
        x: switch_area.x + 2,
        width: switch_area.width.saturating_sub(2),
        ..switch_area
    };
    f.render_widget(switch, indented);
}

fn draw_fields(f: &mut Frame, app: &App, title_area: Rect, grade_area: Rect, theme: &Theme) {
    let book = app.gradebook();
    let appearance = &app.config().appearance;
    let focus = app.focus();

    f.render_widget(
        TextField::new(book.draft_title(), &appearance.title_placeholder, theme)
            .focused(focus == Focus::TitleField),
        title_area,
    );
    f.render_widget(
        TextField::new(book.draft_grade(), &appearance.grade_placeholder, theme)
            .focused(focus == Focus::GradeField),
        grade_area,
    );

    // The terminal cursor is hidden unless a field is being typed into
    if app.alert().is_none() {
        match focus {
            Focus::TitleField => {
                f.set_cursor_position(TextField::cursor_position(book.draft_title(), title_area))
            }
            Focus::GradeField => {
                f.set_cursor_position(TextField::cursor_position(book.draft_grade(), grade_area))
            }
            _ => {}
        }
    }
}

/// Draw the assignments in insertion order, scrolled to the selection
fn draw_assignment_list(f: &mut Frame, app: &mut App, area: Rect, theme: &Theme) {
    let focused = app.focus() == Focus::List;
    let border = if focused { theme.accent } else { theme.dimmed };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(" Assignments ")
        .style(Style::default().bg(theme.background));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let total = app.gradebook().len();
    let range = app.scroll_mut().visible_range(total, inner.height as usize);
    let selected = app.scroll_mut().selected;

    let lines: Vec<Line> = app.gradebook().records()[range.clone()]
        .iter()
        .enumerate()
        .map(|(local, record)| {
            let mut style = Style::default().fg(theme.item).bg(theme.background);
            if focused && range.start + local == selected {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Line::styled(record.display_line(), style)
        })
        .collect();

    f.render_widget(Paragraph::new(lines), inner);
}

/// Draw the status bar
fn draw_status_bar(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let count = app.gradebook().len();
    let hints = match app.focus() {
        _ if app.alert().is_some() => "Enter/Esc: dismiss",
        Focus::TitleField | Focus::GradeField => "Enter: add | Tab: next",
        Focus::List => "↑↓: scroll | Tab: next",
        _ => "Enter/Space: press | Tab: next",
    };
    let status = format!(
        " {} assignment{} | {} | ^G: grade | ^L: clear | ^D: theme | ^C: quit",
        count,
        if count == 1 { "" } else { "s" },
        hints
    );

    let status_bar =
        Paragraph::new(status).style(Style::default().fg(theme.dimmed).bg(theme.background));
    f.render_widget(status_bar, area);
}

/// Draw a modal alert; the course grade fades in from the background
fn draw_alert(f: &mut Frame, alert: &Alert, fade: f64, theme: &Theme) {
    let area = centered_rect(f.area(), 48, 6);

    let border = match alert.kind {
        AlertKind::Error => theme.error,
        AlertKind::Result | AlertKind::Confirm => theme.accent,
    };
    let text = match alert.kind {
        AlertKind::Result => blend(theme.background, theme.foreground, fade),
        _ => theme.foreground,
    };

    let body = Paragraph::new(vec![
        Line::styled(alert.message.as_str(), Style::default().fg(text)),
        Line::default(),
        Line::styled("[ OK ]", Style::default().fg(border).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(format!(" {} ", alert.title))
            .style(Style::default().bg(theme.background)),
    );

    f.render_widget(Clear, area);
    f.render_widget(body, area);
}

/// Rectangle of at most `width` x `height` centred in `area`
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::keymap::Command;
    use ratatui::{backend::TestBackend, buffer::Buffer, style::Color, Terminal};
    use std::time::Duration;

    fn make_terminal() -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(60, 24)).unwrap()
    }

    fn screen_text(buf: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn add(app: &mut App, title: &str, grade: &str) {
        for c in title.chars() {
            app.dispatch(Command::Insert(c));
        }
        app.dispatch(Command::FocusNext);
        for c in grade.chars() {
            app.dispatch(Command::Insert(c));
        }
        app.dispatch(Command::Activate);
    }

    fn find(buf: &Buffer, needle: &str) -> Option<(u16, u16)> {
        let text = screen_text(buf);
        text.lines().enumerate().find_map(|(y, line)| {
            line.find(needle)
                .map(|byte| (line[..byte].chars().count() as u16, y as u16))
        })
    }

    #[test]
    fn test_empty_screen_renders() {
        let mut terminal = make_terminal();
        let mut app = App::new(Config::default());
        terminal
            .draw(|f| draw(f, &mut app, Instant::now()))
            .unwrap();

        let text = screen_text(terminal.backend().buffer());
        assert!(text.contains("Assignment Grade Calculator"));
        assert!(text.contains("Dark Mode [ ]"));
        assert!(text.contains("Assignment Name"));
        assert!(text.contains("Add Assignment"));
        assert!(text.contains("Calculate Grade"));
        assert!(text.contains("Clear Assignments"));
        assert!(text.contains("0 assignments"));
    }

    #[test]
    fn test_records_listed_in_order() {
        let mut terminal = make_terminal();
        let mut app = App::new(Config::default());
        add(&mut app, "HW1", "80");
        add(&mut app, "Lab", "92.5");
        terminal
            .draw(|f| draw(f, &mut app, Instant::now()))
            .unwrap();

        let buf = terminal.backend().buffer();
        let first = find(buf, "HW1: 80%").unwrap();
        let second = find(buf, "Lab: 92.5%").unwrap();
        assert!(first.1 < second.1);
        assert!(screen_text(buf).contains("2 assignments"));
    }

    #[test]
    fn test_error_alert_drawn() {
        let mut terminal = make_terminal();
        let mut app = App::new(Config::default());
        app.dispatch(Command::CalculateGrade);
        terminal
            .draw(|f| draw(f, &mut app, Instant::now()))
            .unwrap();

        let text = screen_text(terminal.backend().buffer());
        assert!(text.contains(" Error "));
        assert!(text.contains("No assignments entered"));
    }

    #[test]
    fn test_result_fades_in() {
        let mut terminal = make_terminal();
        let mut app = App::new(Config::default());
        add(&mut app, "HW1", "80");
        add(&mut app, "HW2", "100");
        app.dispatch(Command::CalculateGrade);
        let theme = app.theme();
        let start = Instant::now();

        terminal.draw(|f| draw(f, &mut app, start)).unwrap();
        let buf = terminal.backend().buffer().clone();
        let (x, y) = find(&buf, "Your course grade is 90.00%").unwrap();
        let early = buf[(x, y)].fg;

        terminal
            .draw(|f| draw(f, &mut app, start + Duration::from_secs(5)))
            .unwrap();
        let late = terminal.backend().buffer()[(x, y)].fg;

        assert_eq!(late, theme.foreground);
        assert_ne!(early, late);
    }

    #[test]
    fn test_dark_mode_changes_background() {
        let mut terminal = make_terminal();
        let mut app = App::new(Config::default());
        app.dispatch(Command::ToggleDarkMode);
        terminal
            .draw(|f| draw(f, &mut app, Instant::now()))
            .unwrap();

        let buf = terminal.backend().buffer();
        assert_eq!(buf[(0, 0)].bg, Color::Rgb(18, 18, 18));
        assert!(screen_text(buf).contains("Dark Mode [x]"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(8, 4)).unwrap();
        let mut app = App::new(Config::default());
        add(&mut app, "HW1", "80");
        app.dispatch(Command::CalculateGrade);
        terminal
            .draw(|f| draw(f, &mut app, Instant::now()))
            .unwrap();
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 60, 24);
        assert_eq!(centered_rect(area, 48, 6), Rect::new(6, 9, 48, 6));
        assert_eq!(centered_rect(Rect::new(0, 0, 10, 4), 48, 6), Rect::new(0, 0, 10, 4));
    }
}
