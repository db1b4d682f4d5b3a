use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    style::{self, Color, Stylize},
    terminal::{self, ClearType},
    ExecutableCommand, QueueableCommand,
};

use super::format;
use super::RawModeGuard;
use crate::clock::Clock;
use crate::data::model::Client;
use crate::data::navigator::{PageCommand, WeekNavigator, WeekView};

const YELLOW: Color = Color::Rgb {
    r: 0xFF,
    g: 0xFF,
    b: 0xA5,
};
const GREEN: Color = Color::Rgb {
    r: 0x69,
    g: 0xFF,
    b: 0x94,
};
const BLUE: Color = Color::Rgb {
    r: 0xD6,
    g: 0xAC,
    b: 0xFF,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BrowseAction {
    Page(PageCommand),
    Redraw,
    Quit,
}

fn action_for_key(key: KeyEvent) -> Option<BrowseAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(BrowseAction::Quit);
    }
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => Some(BrowseAction::Page(PageCommand::Prev)),
        KeyCode::Right | KeyCode::Char('l') => Some(BrowseAction::Page(PageCommand::Next)),
        KeyCode::Char('t') => Some(BrowseAction::Page(PageCommand::Today)),
        KeyCode::Esc | KeyCode::Char('q') => Some(BrowseAction::Quit),
        _ => None,
    }
}

fn read_browse_action() -> Result<BrowseAction> {
    loop {
        match event::read()? {
            Event::Key(key) => {
                if let Some(action) = action_for_key(key) {
                    return Ok(action);
                }
            }
            Event::Resize(_, _) => return Ok(BrowseAction::Redraw),
            _ => {}
        }
    }
}

fn terminal_width() -> usize {
    terminal::size().map(|(w, _)| w as usize).unwrap_or(80)
}

fn render_week(stdout: &mut io::Stdout, client: &Client, view: &WeekView<'_>) -> Result<()> {
    let width = terminal_width();

    stdout.queue(cursor::MoveTo(0, 0))?;
    stdout.queue(terminal::Clear(ClearType::All))?;

    stdout.queue(style::PrintStyledContent(client.name.as_str().bold().with(GREEN)))?;
    stdout.queue(cursor::MoveToNextLine(1))?;
    stdout.queue(style::Print(format!(
        "{}  ({})",
        format::week_range(&view.window()),
        format::offset_label(view.week_offset)
    )))?;
    stdout.queue(cursor::MoveToNextLine(2))?;

    if view.week.is_empty() {
        stdout.queue(style::PrintStyledContent(format::EMPTY_WEEK.dim()))?;
        stdout.queue(cursor::MoveToNextLine(2))?;
    }

    for day in &view.week.days {
        let (weekday, full_date) = format::day_label(day.date);
        let title_len = weekday.chars().count() + 1 + full_date.chars().count();
        let (left, right) = format::divider_sides(title_len, width);

        stdout.queue(style::Print(format!("{left} ")))?;
        stdout.queue(style::PrintStyledContent(weekday.with(YELLOW)))?;
        stdout.queue(style::Print(format!(" {full_date} {right}")))?;
        stdout.queue(cursor::MoveToNextLine(2))?;

        for meal in &day.meals {
            stdout.queue(style::Print(format!("{} | ", format::meal_time(meal))))?;
            stdout.queue(style::PrintStyledContent(
                meal.restaurant_name.as_str().with(GREEN),
            ))?;
            stdout.queue(style::PrintStyledContent(
                format!(" [{}]", meal.cuisine).with(BLUE),
            ))?;
            stdout.queue(cursor::MoveToNextLine(1))?;
        }
        stdout.queue(cursor::MoveToNextLine(1))?;
    }

    stdout.queue(cursor::MoveToNextLine(1))?;
    render_controls(stdout, view)?;
    stdout.queue(cursor::MoveToNextLine(1))?;
    stdout.queue(style::PrintStyledContent("t: this week   q: quit".dim()))?;
    stdout.queue(cursor::MoveToNextLine(1))?;

    stdout.flush()?;
    Ok(())
}

fn render_controls(stdout: &mut io::Stdout, view: &WeekView<'_>) -> Result<()> {
    if view.nav.can_go_prev {
        stdout.queue(style::PrintStyledContent(format::PREV_ARROW.with(GREEN)))?;
    } else {
        stdout.queue(style::PrintStyledContent(format::PREV_ARROW.dim()))?;
    }
    stdout.queue(style::Print(format::CONTROLS_HINT))?;
    if view.nav.can_go_next {
        stdout.queue(style::PrintStyledContent(format::NEXT_ARROW.with(GREEN)))?;
    } else {
        stdout.queue(style::PrintStyledContent(format::NEXT_ARROW.dim()))?;
    }
    Ok(())
}

fn browse_loop(
    stdout: &mut io::Stdout,
    client: &Client,
    navigator: &mut WeekNavigator,
    clock: &dyn Clock,
) -> Result<()> {
    render_week(stdout, client, &navigator.current_view(clock.now()))?;

    loop {
        match read_browse_action()? {
            BrowseAction::Page(command) => {
                if navigator.apply(command, clock.now()) {
                    tracing::debug!(offset = navigator.week_offset(), "week changed");
                    render_week(stdout, client, &navigator.current_view(clock.now()))?;
                }
            }
            BrowseAction::Redraw => {
                render_week(stdout, client, &navigator.current_view(clock.now()))?;
            }
            BrowseAction::Quit => return Ok(()),
        }
    }
}

/// Interactive week browser. Returns when the user quits.
pub fn browse(client: &Client, navigator: &mut WeekNavigator, clock: &dyn Clock) -> Result<()> {
    let _guard = RawModeGuard::enable()?;
    let mut stdout = io::stdout();
    stdout.execute(cursor::Hide)?;

    let result = browse_loop(&mut stdout, client, navigator, clock);

    stdout.execute(cursor::Show)?;
    stdout.execute(terminal::Clear(ClearType::All))?;
    stdout.execute(cursor::MoveTo(0, 0))?;

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_arrow_keys_page() {
        assert_eq!(
            action_for_key(press(KeyCode::Left)),
            Some(BrowseAction::Page(PageCommand::Prev))
        );
        assert_eq!(
            action_for_key(press(KeyCode::Right)),
            Some(BrowseAction::Page(PageCommand::Next))
        );
    }

    #[test]
    fn test_vim_keys_page() {
        assert_eq!(
            action_for_key(press(KeyCode::Char('h'))),
            Some(BrowseAction::Page(PageCommand::Prev))
        );
        assert_eq!(
            action_for_key(press(KeyCode::Char('l'))),
            Some(BrowseAction::Page(PageCommand::Next))
        );
    }

    #[test]
    fn test_today_key() {
        assert_eq!(
            action_for_key(press(KeyCode::Char('t'))),
            Some(BrowseAction::Page(PageCommand::Today))
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(action_for_key(press(KeyCode::Esc)), Some(BrowseAction::Quit));
        assert_eq!(
            action_for_key(press(KeyCode::Char('q'))),
            Some(BrowseAction::Quit)
        );
        assert_eq!(
            action_for_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(BrowseAction::Quit)
        );
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(action_for_key(press(KeyCode::Up)), None);
        assert_eq!(action_for_key(press(KeyCode::Char('x'))), None);
        assert_eq!(action_for_key(press(KeyCode::Enter)), None);
    }

    #[test]
    fn test_key_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Left,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(action_for_key(release), None);
    }
}
