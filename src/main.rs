use soulstream::app::{App, AppMessage};
use soulstream::config::AppConfig;
use soulstream::terminal::{install_panic_hook, TerminalManager};
use soulstream::{logging, ui};

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{error, info};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Animation tick for the spinner and the connecting screen.
const TICK: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("soulstream {}", VERSION);
        return Ok(());
    }
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    color_eyre::install()?;
    let config = AppConfig::from_env()?.apply_args(&args)?;
    let log_path = logging::init(config.resolved_data_dir().as_deref());
    info!(version = VERSION, generator = ?config.generator, log = ?log_path, "starting soulstream");

    install_panic_hook();
    let mut app = App::new(config);
    let mut manager = TerminalManager::new()?;
    let result = run_app(manager.terminal(), &mut app).await;
    manager.restore()?;

    if let Err(e) = &result {
        error!(error = %e, "run loop failed");
    }
    info!("soulstream exited");
    result
}

fn print_help() {
    println!("soulstream {}", VERSION);
    println!();
    println!("USAGE: soulstream [--offline] [--no-capture]");
    println!();
    println!("  --offline      use scripted healer replies instead of Gemini");
    println!("  --no-capture   start sessions without camera or microphone");
    println!("  -V, --version  print the version");
    println!();
    println!("ENV: GEMINI_API_KEY, SOULSTREAM_MODEL, SOULSTREAM_API_BASE,");
    println!("     SOULSTREAM_CONNECT_DELAY_MS, SOULSTREAM_BILLING_DELAY_MS,");
    println!("     SOULSTREAM_CAPTURE, SOULSTREAM_DATA_DIR, RUST_LOG");
}

async fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(TICK);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Paste(text))) => app.handle_paste(&text),
                    Some(Ok(Event::Resize(..))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        error!(error = %e, "terminal event stream failed");
                        return Err(e.into());
                    }
                    None => app.quit(),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
