use anyhow::Result;

use tty_clock::app::{App, SignalFlags};
use tty_clock::config::{self, Invocation};
use tty_clock::logging;
use tty_clock::time::LocalClock;
use tty_clock::tui::Tui;

#[tokio::main]
async fn main() -> Result<()> {
    let config = match config::parse_invocation(std::env::args_os()) {
        Invocation::Run(config) => config,
        Invocation::Print(text) => {
            print!("{}", text);
            return Ok(());
        }
    };

    // File logging only when a log directory is configured
    let _logging = match config::log_dir() {
        Some(dir) => {
            let (log_file_info, guard) = logging::init_file_logging(&dir)?;
            tracing::info!("Logging to: {}", log_file_info.path.display());
            Some(guard)
        }
        None => None,
    };

    let signals = SignalFlags::new();
    signals.listen()?;

    // Run the clock; the loop blocks on terminal input, so keep it off the async workers
    let mut app = App::new(&config, Tui::new()?, LocalClock, signals);
    tokio::task::block_in_place(|| app.run())
}
