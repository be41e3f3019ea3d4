use anyhow::{Context, Result};
use gh_review_bridge::CommandBridge;
use gh_review_config::AppConfig;
use gh_review_dashboard::actions::{AuthAction, GlobalAction};
use gh_review_dashboard::middleware::{AuthMiddleware, LoggingMiddleware, ReviewQueueMiddleware};
use gh_review_dashboard::views::{help_text, ConsoleCommand, ConsoleView};
use gh_review_dashboard::{Action, AppState, Store};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

mod logger;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let log_file = logger::init()?;

    log::info!("Starting gh-review (log file {})", log_file.display());

    let config = AppConfig::load();
    let bridge = connect(&config)?;

    // Initialize store with middleware
    let mut store = Store::new(AppState::default());

    // Add middleware in order (they execute in this order)
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    store.add_middleware(Box::new(AuthMiddleware::new(
        Arc::clone(&bridge),
        config.auth.poll_grace(),
    )));
    store.add_middleware(Box::new(ReviewQueueMiddleware::new(bridge)));

    store.dispatch(Action::Auth(AuthAction::CheckStatus));

    println!("{}", help_text());
    let result = run_app(&mut store).await;

    log::info!("Exiting gh-review");
    result
}

#[cfg(unix)]
fn connect(config: &AppConfig) -> Result<Arc<dyn CommandBridge>> {
    use gh_review_bridge::{InvokeBridge, IpcTransport};

    log::info!(
        "Using host bridge at {}",
        config.bridge.socket_path.display()
    );
    let transport = IpcTransport::new(config.bridge.socket_path.clone());
    Ok(Arc::new(InvokeBridge::new(transport)))
}

#[cfg(not(unix))]
fn connect(_config: &AppConfig) -> Result<Arc<dyn CommandBridge>> {
    anyhow::bail!("gh-review talks to its host over a Unix socket, which this platform lacks")
}

async fn run_app(store: &mut Store) -> Result<()> {
    let mut view = ConsoleView::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = std::io::stdout();

    while store.state().running {
        // Render
        if let Some(text) = view.render(store.state(), chrono::Utc::now()) {
            write!(stdout, "{}", text)?;
            stdout.flush()?;
        }

        tokio::select! {
            _ = store.process_next() => {}
            line = lines.next_line() => {
                match line.context("Failed to read command")? {
                    Some(line) if line.trim().is_empty() => {}
                    Some(line) => match ConsoleCommand::parse_line(&line) {
                        Ok(command) => store.dispatch(command.to_action()),
                        Err(message) => writeln!(stdout, "{}", message)?,
                    },
                    // stdin closed
                    None => store.dispatch(Action::Global(GlobalAction::Quit)),
                }
            }
        }
    }

    Ok(())
}
