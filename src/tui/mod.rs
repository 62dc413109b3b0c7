pub mod app;
pub mod ui;

use std::io;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use crate::config::Config;
use crate::error::Result;
use crate::session::Step;
use app::{App, InputMode};
use ui::ui;

pub fn run_tui(config: &Config) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res.map_err(Into::into)
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.input_mode == InputMode::Editing {
                match key.code {
                    KeyCode::Enter => app.handle_input(),
                    KeyCode::Esc => app.cancel_input(),
                    KeyCode::Char(c) => app.input_buffer.push(c),
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    _ => {}
                }
                continue;
            }

            match app.session.step() {
                Step::CollectingTasks => match key.code {
                    KeyCode::Esc => return Ok(()),
                    KeyCode::Tab => app.advance(),
                    KeyCode::Enter => app.type_char('\n'),
                    KeyCode::Char(c) => app.type_char(c),
                    KeyCode::Backspace => app.delete_char(),
                    _ => {}
                },
                Step::AssigningAttributes => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Down | KeyCode::Char('j') => app.next(),
                    KeyCode::Up | KeyCode::Char('k') => app.previous(),
                    KeyCode::Char('i') => app.cycle_importance(),
                    KeyCode::Char('t') => app.cycle_due_type(),
                    KeyCode::Char('e') | KeyCode::Enter => app.start_edit_value(),
                    KeyCode::Tab => app.advance(),
                    KeyCode::BackTab => app.back(),
                    _ => {}
                },
                Step::ViewingResults => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('c') => app.toggle_columns(),
                    KeyCode::Char('r') => app.restart(),
                    KeyCode::BackTab => app.back(),
                    _ => {}
                },
            }
        }
    }
}
