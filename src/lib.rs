pub mod app;
pub mod cli;
pub mod sim;
pub mod ui;

#[cfg(test)]
mod test_support;

use std::{
    io::{self, Stdout},
    thread,
    time::{Duration, Instant},
};

use anyhow::Result;
use app::{events, state::AppState};
use cli::Cli;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use sim::GridSize;
use ui::theme;

pub const TICK_INTERVAL: Duration = Duration::from_millis(15);

pub fn run(cli: &Cli) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_inner(&mut terminal, cli);
    restore_terminal(&mut terminal)?;
    result
}

fn run_inner(terminal: &mut Terminal<CrosstermBackend<Stdout>>, cli: &Cli) -> Result<()> {
    let size = terminal.size()?;
    let grid = GridSize {
        rows: size.height,
        cols: size.width,
    };
    let theme = theme::theme_for(cli);
    let mut state = AppState::new(cli, grid);
    let mut rng = rand::rng();
    let mut last_tick = Instant::now();

    while state.running {
        // Soft real-time pacing: sleep off the remainder of the tick, free-run
        // when a deadline was missed.
        let elapsed = last_tick.elapsed();
        if elapsed < TICK_INTERVAL {
            thread::sleep(TICK_INTERVAL - elapsed);
        }
        last_tick = Instant::now();

        if let Some(event) = events::poll_pending()? {
            state.handle_event(event);
        }
        if !state.running {
            break;
        }

        state.tick(last_tick, &mut rng);
        terminal.draw(|frame| ui::render(frame, &state, &theme, last_tick))?;
    }

    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn install_panic_hook() {
    let existing = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        let _ = execute!(stdout, LeaveAlternateScreen);
        existing(panic);
    }));
}
