use anyhow::Result;
use clap::Parser;
use tuentitv::app::App;
use tuentitv::cli::Cli;
use tuentitv::services::AccountStore;
use tuentitv::tui::Tui;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal state before handling panic
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen
        );
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging directory
    let log_dir = tuentitv::utils::get_log_dir();
    std::fs::create_dir_all(&log_dir)?;

    // Initialize tracing with file logging
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // Write to file, stdout belongs to the TUI
    let file_appender = tracing_appender::rolling::never(&log_dir, "tuentitv.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false) // Disable ANSI colors in file
        .init();

    let config_path = cli.config_path();
    if cli.execute()? {
        drop(guard);
        return Ok(());
    }

    setup_panic_hook();

    let store = AccountStore::open(&config_path)?;
    let mut app = App::new(store);
    let mut tui = Tui::new()?;
    let result = app.run(&mut tui);

    // Restore terminal state on normal exit
    // (panic hook handles panics)
    drop(tui);
    drop(guard);

    result
}
