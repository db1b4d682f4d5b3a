use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    style::{self, Stylize},
    ExecutableCommand, QueueableCommand,
};

use super::RawModeGuard;

enum Edit {
    Push(char),
    Pop,
    Submit,
    Cancel,
}

fn edit_for_key(key: KeyEvent) -> Option<Edit> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Edit::Cancel);
    }
    match key.code {
        KeyCode::Enter => Some(Edit::Submit),
        KeyCode::Esc => Some(Edit::Cancel),
        KeyCode::Backspace => Some(Edit::Pop),
        KeyCode::Char(c) if !c.is_control() => Some(Edit::Push(c)),
        _ => None,
    }
}

/// The answer to keep, or `None` when only whitespace was typed.
fn accepted(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Reads one line of text, repeating the prompt until something is typed.
/// `None` means cancelled.
pub fn input_text(prompt: &str) -> Result<Option<String>> {
    let _guard = RawModeGuard::enable()?;
    let mut stdout = io::stdout();

    let display_prompt = format!("{prompt}: ");

    stdout.queue(style::Print(&display_prompt))?;
    stdout.flush()?;

    let mut input = String::new();

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        match edit_for_key(key) {
            Some(Edit::Submit) => {
                stdout.execute(cursor::MoveToNextLine(1))?;
                if let Some(answer) = accepted(&input) {
                    return Ok(Some(answer));
                }
                stdout.queue(style::PrintStyledContent("A value is required.".red()))?;
                stdout.queue(cursor::MoveToNextLine(1))?;
                stdout.queue(style::Print(&display_prompt))?;
                stdout.flush()?;
            }
            Some(Edit::Push(c)) => {
                input.push(c);
                stdout.queue(style::Print(c))?;
                stdout.flush()?;
            }
            Some(Edit::Pop) => {
                if input.pop().is_some() {
                    stdout.queue(cursor::MoveLeft(1))?;
                    stdout.queue(style::Print(' '))?;
                    stdout.queue(cursor::MoveLeft(1))?;
                    stdout.flush()?;
                }
            }
            Some(Edit::Cancel) => {
                stdout.execute(cursor::MoveToNextLine(1))?;
                return Ok(None);
            }
            None => {}
        }
    }
}
