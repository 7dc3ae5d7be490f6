mod app;
mod config;
mod error;
mod paths;
mod theme;
mod view;

use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use jsontree::clipboard::Osc52Clipboard;
use jsontree::collapse::CollapseState;
use jsontree::error::ValueError;
use jsontree::render::render;
use jsontree::sample::DEFAULT_URL;
use jsontree::serialize::write_pretty;
use jsontree::Value;
use jsontree_term::Terminal;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::app::App;
use crate::config::ViewerConfig;
use crate::error::AppError;
use crate::theme::Theme;

/// Collapsible JSON tree viewer
#[derive(Parser, Debug)]
#[command(name = "jsontree-tui", version, about = "Collapsible JSON tree viewer")]
struct Cli {
    /// JSON document to view (`-` reads stdin). Without it the demo report
    /// and its schema are shown.
    file: Option<PathBuf>,

    /// URL stamped into the demo report
    #[arg(long, conflicts_with = "file")]
    url: Option<String>,

    /// Print the fully expanded tree as text and exit
    #[arg(long, conflicts_with = "json")]
    print: bool,

    /// Print the document as pretty JSON and exit
    #[arg(long)]
    json: bool,

    /// Path to configuration file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = ViewerConfig::load(cli.config.as_deref())?;
    init_logging(&config)?;
    log::info!("jsontree-tui {} starting", env!("CARGO_PKG_VERSION"));

    let app = match &cli.file {
        Some(path) => {
            let value = load_document(path)?;
            App::for_file(document_title(path), value, &config)
        }
        None => {
            let url = cli.url.as_deref().unwrap_or(DEFAULT_URL);
            App::demo(url, &config).map_err(AppError::Sample)?
        }
    };

    if cli.print || cli.json {
        let value = app.active_pane().session().value();
        let stdout = io::stdout().lock();
        if cli.json {
            write_pretty(value, stdout)?;
        } else {
            print_tree(value, config.indent_width, stdout)?;
        }
        return Ok(());
    }

    run_terminal(app, &config)
}

fn init_logging(config: &ViewerConfig) -> Result<(), AppError> {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else {
        return Ok(());
    };
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| AppError::Logging(e.to_string()))?;
    }
    let file = File::create(&path).map_err(|e| AppError::Logging(e.to_string()))?;
    let level = config.level_filter().unwrap_or(LevelFilter::Debug);
    WriteLogger::init(level, Config::default(), file)
        .map_err(|e| AppError::Logging(e.to_string()))?;

    if config.level_filter().is_none() {
        log::warn!("unknown log level {:?}, using debug", config.log_level);
    }
    Ok(())
}

fn load_document(path: &Path) -> Result<Value, AppError> {
    let result = if path == Path::new("-") {
        Value::from_reader(io::stdin().lock())
    } else {
        File::open(path)
            .map_err(ValueError::from)
            .and_then(|file| Value::from_reader(BufReader::new(file)))
    };
    let value = result.map_err(|source| AppError::Input {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("loaded {} ({} nodes)", path.display(), value.node_count());
    Ok(value)
}

fn document_title(path: &Path) -> String {
    if path == Path::new("-") {
        return "stdin".to_string();
    }
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn print_tree(value: &Value, indent_width: usize, mut out: impl io::Write) -> io::Result<()> {
    let tree = render(value, &CollapseState::new());
    writeln!(out, "{}", tree.to_text(indent_width))
}

fn run_terminal(mut app: App, config: &ViewerConfig) -> Result<(), AppError> {
    let theme = Theme::default();
    let mut terminal = Terminal::with_mouse(config.mouse)?;
    let (width, height) = terminal.size();
    app.resize(width, height);

    while !app.should_quit() {
        let now = Instant::now();
        app.tick(now);
        terminal.draw(|buf| view::draw(&app, buf, &theme, config.indent_width, now))?;

        for event in terminal.poll(Some(app.next_wakeup(now)))? {
            let mut clipboard =
                Osc52Clipboard::new(&mut terminal).with_max_bytes(config.osc52_max_bytes);
            app.handle_event(event, Instant::now(), &mut clipboard);
        }
    }

    log::info!("jsontree-tui exiting");
    Ok(())
}
