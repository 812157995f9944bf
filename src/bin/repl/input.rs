//! Raw-mode line reader with history navigation.

use super::CommandHistory;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    style::Print,
    terminal::{self, ClearType},
};
use std::io::{self, Write};

/// Reads one line, with arrow-key navigation through `history`.
///
/// Returns `Interrupted` on Ctrl-C, and `UnexpectedEof` on Ctrl-D at an
/// empty line. The terminal is restored to cooked mode on every exit path.
pub fn read_line_with_history(prompt: &str, history: &mut CommandHistory) -> io::Result<String> {
    terminal::enable_raw_mode()?;
    let result = edit_line(prompt, history);
    terminal::disable_raw_mode()?;
    result
}

fn edit_line(prompt: &str, history: &mut CommandHistory) -> io::Result<String> {
    let mut line = String::new();
    let mut cursor_position = 0;

    redraw(prompt, &line, cursor_position)?;

    loop {
        let Event::Key(KeyEvent {
            code, modifiers, ..
        }) = event::read()?
        else {
            continue;
        };

        match code {
            KeyCode::Enter => {
                print!("\r\n");
                io::stdout().flush()?;
                return Ok(line);
            }
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                print!("^C\r\n");
                io::stdout().flush()?;
                return Err(io::Error::new(io::ErrorKind::Interrupted, "Ctrl-C"));
            }
            KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => {
                if line.is_empty() {
                    print!("\r\n");
                    io::stdout().flush()?;
                    return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "Ctrl-D"));
                }
            }
            KeyCode::Char(c) => {
                line.insert(cursor_position, c);
                cursor_position += 1;
            }
            KeyCode::Backspace => {
                if cursor_position > 0 {
                    cursor_position -= 1;
                    line.remove(cursor_position);
                }
            }
            KeyCode::Delete => {
                if cursor_position < line.len() {
                    line.remove(cursor_position);
                }
            }
            KeyCode::Left => cursor_position = cursor_position.saturating_sub(1),
            KeyCode::Right => {
                if cursor_position < line.len() {
                    cursor_position += 1;
                }
            }
            KeyCode::Home => cursor_position = 0,
            KeyCode::End => cursor_position = line.len(),
            KeyCode::Up => {
                if let Some(older) = history.older(&line) {
                    line = older.to_string();
                    cursor_position = line.len();
                }
            }
            KeyCode::Down => {
                if let Some(newer) = history.newer() {
                    line = newer.to_string();
                    cursor_position = line.len();
                }
            }
            _ => {}
        }

        redraw(prompt, &line, cursor_position)?;
    }
}

/// Clears the prompt line and redraws it with the cursor in place.
fn redraw(prompt: &str, line: &str, cursor_position: usize) -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(
        stdout,
        cursor::MoveToColumn(0),
        terminal::Clear(ClearType::CurrentLine),
        Print(prompt),
        Print(line),
        cursor::MoveToColumn((prompt.len() + cursor_position) as u16),
    )?;
    stdout.flush()
}
