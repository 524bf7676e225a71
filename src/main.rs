//! Adapta - A terminal browser shell with a new-tab home page.

use adapta::app::App;
use adapta::config::Config;
use adapta::navigation::classify;
use adapta::ui;
use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "adapta")]
#[command(version, about = "A terminal browser shell with a new-tab home page", long_about = None)]
struct Args {
    /// Location or search to open after the start page
    url: Option<String>,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Start in dark mode
    #[arg(long)]
    dark: bool,

    /// Print the location the input resolves to and exit
    #[arg(long, value_name = "TEXT")]
    resolve: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)?;
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(log_file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Adapta");
    }

    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if args.dark {
        config.dark = true;
    }

    if let Some(text) = &args.resolve {
        if let Some(location) = classify(text, &config.search_engine()).location() {
            println!("{}", location);
        }
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let mut app = App::new(&config, args.url.as_deref(), Instant::now());
    let res = run_app(&mut terminal, &mut app);
    app.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    if args.log.is_some() {
        tracing::info!("Adapta exited");
    }

    Ok(())
}

/// Whether a character key with these modifiers types text. Shift is
/// allowed; Ctrl, Alt and friends are shortcuts.
fn is_text_input(modifiers: KeyModifiers) -> bool {
    modifiers.difference(KeyModifiers::SHIFT).is_empty()
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        // Address field - handle separately
        if app.toolbar.address().is_editing() {
            match (key.modifiers, key.code) {
                (_, KeyCode::Enter) => app.submit_address(),
                (_, KeyCode::Esc) => app.toolbar.cancel_address(),
                (_, KeyCode::Backspace) => app.toolbar.address_mut().backspace(),
                (modifiers, KeyCode::Char(c)) if is_text_input(modifiers) => {
                    app.toolbar.address_mut().input(c)
                },
                _ => {},
            }
            continue;
        }

        // Home search box
        if app.home.is_searching() {
            match (key.modifiers, key.code) {
                (_, KeyCode::Enter) => app.submit_home_search(),
                (_, KeyCode::Esc) => app.home.cancel_search(),
                (_, KeyCode::Backspace) => app.home.search_backspace(),
                (modifiers, KeyCode::Char(c)) if is_text_input(modifiers) => {
                    app.home.search_input(c)
                },
                _ => {},
            }
            continue;
        }

        // Command line
        if app.command.is_active() {
            match (key.modifiers, key.code) {
                (_, KeyCode::Enter) => app.run_command(),
                (_, KeyCode::Esc) => app.command.cancel(),
                (_, KeyCode::Backspace) => app.command.backspace(),
                (modifiers, KeyCode::Char(c)) if is_text_input(modifiers) => app.command.input(c),
                _ => {},
            }
            continue;
        }

        // Home grid selection
        if app.showing_home() {
            match (key.modifiers, key.code) {
                (KeyModifiers::NONE, KeyCode::Left) | (KeyModifiers::NONE, KeyCode::Char('h')) => {
                    app.home.grid_mut().move_left();
                    continue;
                },
                (KeyModifiers::NONE, KeyCode::Right) | (KeyModifiers::NONE, KeyCode::Char('l')) => {
                    app.home.grid_mut().move_right();
                    continue;
                },
                (KeyModifiers::NONE, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                    app.home.grid_mut().move_up();
                    continue;
                },
                (KeyModifiers::NONE, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                    app.home.grid_mut().move_down();
                    continue;
                },
                (KeyModifiers::NONE, KeyCode::Enter) => {
                    app.activate_bookmark();
                    continue;
                },
                (KeyModifiers::NONE, KeyCode::Char('/')) => {
                    app.home.start_search();
                    continue;
                },
                _ => {},
            }
        }

        // Normal mode
        match (key.modifiers, key.code) {
            // Quit
            (KeyModifiers::NONE, KeyCode::Char('q')) => return Ok(()),

            // Address field
            (KeyModifiers::NONE, KeyCode::Char('o'))
            | (KeyModifiers::CONTROL, KeyCode::Char('l')) => {
                app.toolbar.address_mut().focus();
            },

            // History
            (KeyModifiers::SHIFT, KeyCode::Char('H')) | (KeyModifiers::ALT, KeyCode::Left) => {
                app.go_back();
            },
            (KeyModifiers::SHIFT, KeyCode::Char('L')) | (KeyModifiers::ALT, KeyCode::Right) => {
                app.go_forward();
            },
            (KeyModifiers::NONE, KeyCode::Char('r')) | (KeyModifiers::NONE, KeyCode::F(5)) => {
                app.reload();
            },
            (KeyModifiers::NONE, KeyCode::Char('g')) => {
                app.go_home();
            },

            // Features
            (KeyModifiers::SHIFT, KeyCode::Char('T')) => {
                app.toggle_theme();
            },
            (KeyModifiers::NONE, KeyCode::Char('y')) => {
                app.copy_location();
            },
            (KeyModifiers::NONE, KeyCode::Char(':'))
            | (KeyModifiers::SHIFT, KeyCode::Char(':')) => {
                app.command.start();
            },
            (KeyModifiers::SHIFT, KeyCode::Char('?')) | (KeyModifiers::NONE, KeyCode::Char('?')) => {
                app.status =
                    "Help: o=address, H/L=back/forward, r=reload, g=home, T=theme, y=copy, :=command, q=quit"
                        .to_string();
            },

            _ => {},
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_and_shifted_keys_type_text() {
        assert!(is_text_input(KeyModifiers::NONE));
        assert!(is_text_input(KeyModifiers::SHIFT));
    }

    #[test]
    fn modified_keys_do_not_type_text() {
        assert!(!is_text_input(KeyModifiers::CONTROL));
        assert!(!is_text_input(KeyModifiers::ALT));
        assert!(!is_text_input(KeyModifiers::CONTROL | KeyModifiers::SHIFT));
    }
}
