use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    fs, io,
    path::PathBuf,
    sync::atomic::{AtomicBool, Ordering},
    time::{Duration, Instant},
};

/// Terminal client for a content-addressed file drop
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <tmp>/dcastui-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (j/k, i or / to edit the query)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Service URL, overrides base_url from the config file
    #[arg(long)]
    base_url: Option<String>,
}

// Global flag for debug mode
static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

mod api;
mod app;
mod config;
mod handlers;
mod logic;
mod model;
mod services;
mod ui;
mod utils;

use api::DcasClient;
use config::Config;
use dcastui::Pane;

fn log_debug(msg: &str) {
    // Only log if debug mode is enabled
    if !DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    use std::fs::OpenOptions;
    use std::io::Write;
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(utils::get_debug_log_path())
    {
        let _ = writeln!(
            file,
            "{} {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            msg
        );
    }
}

pub struct App {
    pub model: model::Model,

    client: DcasClient,
    api_tx: tokio::sync::mpsc::UnboundedSender<services::api::ApiRequest>,
    api_rx: tokio::sync::mpsc::UnboundedReceiver<services::api::ApiResponse>,

    download_dir: PathBuf,
    max_upload_bytes: u64,

    /// Drives spinner animation
    started_at: Instant,
}

impl App {
    fn new(config: Config) -> Self {
        let client = DcasClient::new(config.base_url.clone());
        let download_dir = config.resolve_download_dir();

        // Spawn API service worker
        let (api_tx, api_rx) = services::api::spawn_api_service(client.clone());

        log_debug(&format!(
            "App start: base_url={} upload={} search={} download_dir={}",
            client.base_url(),
            config.upload_enabled,
            config.search_enabled,
            download_dir.display()
        ));

        App {
            model: model::Model::new(
                config.vim_mode,
                config.upload_enabled,
                config.search_enabled,
            ),
            client,
            api_tx,
            api_rx,
            download_dir,
            max_upload_bytes: config.max_upload_bytes,
            started_at: Instant::now(),
        }
    }

    /// Handle API responses from background worker
    /// Delegated to handlers::api module
    fn handle_api_response(&mut self, response: services::api::ApiResponse) {
        handlers::handle_api_response(self, response);
    }

    /// Handle keyboard input
    /// Delegated to handlers::keyboard module
    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        handlers::handle_key(self, key)
    }
}

/// Determine the config file path with fallback logic
///
/// Returns None when no file exists and none was requested explicitly;
/// the caller then needs `--base-url`.
fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    // If CLI argument provided, use it
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        } else {
            anyhow::bail!("Config file not found at specified path: {}", path);
        }
    }

    // Try ~/.config/dcastui/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("dcastui").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

fn missing_config_error() -> anyhow::Error {
    let expected_path = if let Some(config_dir) = dirs::config_dir() {
        config_dir
            .join("dcastui")
            .join("config.yaml")
            .display()
            .to_string()
    } else {
        "~/.config/dcastui/config.yaml".to_string()
    };

    anyhow::anyhow!(
        "Config file not found. Expected locations:\n\
         1. {} (preferred)\n\
         2. ./config.yaml (fallback)\n\
         \n\
         Use --config <path> to specify a custom location, \
         or --base-url <url> to run without one.",
        expected_path
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    // Set debug mode
    DEBUG_MODE.store(args.debug, Ordering::Relaxed);

    if args.debug {
        log_debug("Debug mode enabled");
    }

    // Load configuration
    let mut config = match get_config_path(args.config)? {
        Some(config_path) => {
            log_debug(&format!("Loading config from: {:?}", config_path));
            let config_str = fs::read_to_string(&config_path)?;
            serde_yaml::from_str::<Config>(&config_str)?
        }
        None => match &args.base_url {
            Some(url) => Config::with_base_url(url.clone()),
            None => return Err(missing_config_error()),
        },
    };

    // Override config with CLI flags
    if let Some(url) = args.base_url {
        config.base_url = url;
    }
    if args.vim {
        config.vim_mode = true;
    }

    if !config.upload_enabled && !config.search_enabled {
        anyhow::bail!("Both upload_enabled and search_enabled are false; nothing to show");
    }

    // Initialize app
    let mut app = App::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if app.model.ui.should_dismiss_toast() {
            app.model.ui.dismiss_toast();
        }

        if app.model.ui.should_quit {
            break;
        }

        // Process API responses (non-blocking)
        while let Ok(response) = app.api_rx.try_recv() {
            app.handle_api_response(response);
        }

        // Short poll while a request is in flight so the busy indicator animates
        let busy = app.model.upload.in_progress
            || app.model.search.panel == model::SearchPanel::Loading;
        let poll_timeout = if busy {
            Duration::from_millis(50)
        } else {
            Duration::from_millis(250)
        };

        if event::poll(poll_timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key)?;
                }
            }
        }
    }

    Ok(())
}
