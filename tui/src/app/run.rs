use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::{
    state::{model::Command, session::ExplorerState},
    ui::draw::draw,
};

const POLL_INTERVAL: Duration = Duration::from_millis(120);

/// Steps of a coarse slider move, in tenths.
const COARSE_STEP: i32 = 10;

struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Quit,
    Apply(Command),
}

fn action(code: KeyCode) -> Option<Action> {
    let command = match code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Up | KeyCode::Char('k') => Command::FocusPrev,
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => Command::FocusNext,
        KeyCode::Left | KeyCode::Char('h') => Command::Step(-1),
        KeyCode::Right | KeyCode::Char('l') => Command::Step(1),
        KeyCode::Char('H') | KeyCode::PageDown => Command::Step(-COARSE_STEP),
        KeyCode::Char('L') | KeyCode::PageUp => Command::Step(COARSE_STEP),
        KeyCode::Char(' ') | KeyCode::Enter => Command::Activate,
        KeyCode::Char('r') => Command::Reset,
        _ => return None,
    };

    Some(Action::Apply(command))
}

/// Runs the explorer until the user quits.
///
/// # Errors
/// Returns an error if terminal setup or rendering fails.
pub fn run(mut state: ExplorerState) -> Result<()> {
    let _guard = TerminalGuard::enter()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    loop {
        terminal.draw(|f| draw(f, &state))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        let Event::Key(k) = event::read()? else {
            continue;
        };
        if k.kind != KeyEventKind::Press {
            continue;
        }

        match action(k.code) {
            Some(Action::Quit) => break,
            Some(Action::Apply(command)) => {
                if state.apply(command) {
                    log::debug!(command:? = command; "scene recomputed");
                }
            }
            None => {}
        }
    }

    terminal.show_cursor()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_to_commands() {
        assert_eq!(action(KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(action(KeyCode::Esc), Some(Action::Quit));
        assert_eq!(action(KeyCode::Char('j')), action(KeyCode::Down));
        assert_eq!(action(KeyCode::Left), Some(Action::Apply(Command::Step(-1))));
        assert_eq!(action(KeyCode::Char('L')), Some(Action::Apply(Command::Step(10))));
        assert_eq!(action(KeyCode::Enter), Some(Action::Apply(Command::Activate)));
        assert_eq!(action(KeyCode::Char('r')), Some(Action::Apply(Command::Reset)));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        assert_eq!(action(KeyCode::Char('z')), None);
        assert_eq!(action(KeyCode::F(1)), None);
    }
}
