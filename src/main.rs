use std::io;
use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use tinyurl_tui::app::App;
use tinyurl_tui::config::Config;
use tinyurl_tui::ui;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tick interval for spinner animation while a request is in flight.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--version") {
        println!("tinyurl-tui {VERSION}");
        return Ok(());
    }

    color_eyre::install()?;
    init_tracing();
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = Config::from_env();
        tracing::info!("starting against {}", config.base_url);

        let mut app = App::new(config);
        // Warm both dashboards up front so switching tabs later shows data
        // without an extra round trip.
        app.spawn_initial_fetches();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

        let result = run_app(&mut terminal, &mut app).await;

        restore_terminal(&mut terminal)?;
        result
    })
}

/// Log to a file under the user cache dir so output never corrupts the
/// alternate screen. Logging is best-effort; failures here are ignored.
fn init_tracing() {
    let Some(cache_dir) = dirs::cache_dir() else {
        return;
    };
    let log_dir = cache_dir.join("tinyurl-tui");
    if std::fs::create_dir_all(&log_dir).is_err() {
        return;
    }
    let Ok(file) = std::fs::File::create(log_dir.join("tinyurl-tui.log")) else {
        return;
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
}

/// Restore the terminal before the default panic output, so a panic message
/// is readable instead of being swallowed by the alternate screen.
fn setup_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
        original(info);
    }));
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, Show)?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut message_rx = app
        .message_rx
        .take()
        .ok_or_else(|| eyre!("message receiver already taken"))?;

    loop {
        if app.needs_redraw {
            terminal.draw(|frame| ui::render(frame, app))?;
            app.needs_redraw = false;
        }

        let tick = tokio::time::sleep(TICK_INTERVAL);

        tokio::select! {
            _ = tick => {
                app.tick();
            }

            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Resize(_, _))) => {
                        app.mark_dirty();
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    // Input stream closed: nothing more to react to.
                    None => return Ok(()),
                }
            }

            maybe_msg = message_rx.recv() => {
                if let Some(msg) = maybe_msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
