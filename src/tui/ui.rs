//! Event loop and key mapping for the checklist session.

use super::app::App;
use super::{Focus, EVENT_POLL_MS};
use anyhow::{Context, Result};
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use std::io;
use std::time::Duration;

pub(super) fn run_tui(mut app: App) -> Result<()> {
    let guard = TerminalGuard::enter()?;
    let mut terminal = {
        let stdout = io::stdout();
        let backend = CrosstermBackend::new(stdout);
        ratatui::Terminal::new(backend).context("init terminal")?
    };

    loop {
        terminal
            .draw(|frame| app.draw(frame))
            .context("draw checklist ui")?;

        if event::poll(Duration::from_millis(EVENT_POLL_MS)).context("poll event")? {
            if let Event::Key(key) = event::read().context("read event")? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if app.show_help {
                    // The overlay swallows one key press, whatever it is.
                    app.toggle_help();
                    continue;
                }
                let Some(action) = action_from_key(key, app.focus, app.pending_clear) else {
                    continue;
                };
                match action {
                    Action::Quit => break,
                    Action::SwitchFocus => app.switch_focus(),
                    Action::Submit => app.submit_form(),
                    Action::InsertChar(c) => app.form.push_char(c),
                    Action::Backspace => app.form.backspace(),
                    Action::QuantityUp => app.form.quantity_up(),
                    Action::QuantityDown => app.form.quantity_down(),
                    Action::Up => app.move_selection(-1),
                    Action::Down => app.move_selection(1),
                    Action::Toggle => app.toggle_selected(),
                    Action::Delete => app.delete_selected(),
                    Action::Clear => app.request_clear(),
                    Action::CycleSort => app.cycle_sort(),
                    Action::ToggleHelp => app.toggle_help(),
                    Action::ConfirmYes => app.confirm_pending_clear(),
                    Action::ConfirmNo => app.cancel_pending_clear(),
                }
            }
        }
    }

    drop(guard);
    terminal.show_cursor().ok();
    Ok(())
}

#[derive(Debug, PartialEq, Eq)]
enum Action {
    Quit,
    SwitchFocus,
    Submit,
    InsertChar(char),
    Backspace,
    QuantityUp,
    QuantityDown,
    Up,
    Down,
    Toggle,
    Delete,
    Clear,
    CycleSort,
    ToggleHelp,
    ConfirmYes,
    ConfirmNo,
}

/// Map a key press to an action given the current input context. The
/// confirmation modal captures everything; the form takes printable
/// characters; the list owns navigation and item operations.
fn action_from_key(key: KeyEvent, focus: Focus, confirming: bool) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(Action::Quit);
    }
    if confirming {
        return match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => Some(Action::ConfirmYes),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(Action::ConfirmNo),
            _ => None,
        };
    }
    match focus {
        Focus::Form => match key.code {
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Esc | KeyCode::Tab => Some(Action::SwitchFocus),
            KeyCode::Up => Some(Action::QuantityUp),
            KeyCode::Down => Some(Action::QuantityDown),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Char(c) => Some(Action::InsertChar(c)),
            _ => None,
        },
        Focus::List => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Tab | KeyCode::Char('a') => Some(Action::SwitchFocus),
            KeyCode::Up | KeyCode::Char('k') => Some(Action::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::Down),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Toggle),
            KeyCode::Delete | KeyCode::Char('d') => Some(Action::Delete),
            KeyCode::Char('c') => Some(Action::Clear),
            KeyCode::Char('s') => Some(Action::CycleSort),
            KeyCode::Char('?') => Some(Action::ToggleHelp),
            _ => None,
        },
    }
}

struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("enable raw mode")?;
        execute!(io::stdout(), EnterAlternateScreen, Hide).context("enter alt screen")?;
        Ok(Self { active: true })
    }

    fn suspend(&mut self) {
        if self.active {
            disable_raw_mode().ok();
            execute!(io::stdout(), LeaveAlternateScreen, Show).ok();
            self.active = false;
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.suspend();
    }
}
