use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::{Write, stdout};
use std::path::PathBuf;

use comiq::app::App;
use comiq::catalog::{CatalogClient, CatalogLoader, CatalogSource, ComicRecord, load_blocking};
use comiq::config::{self, ApiConfig, ConfigResult};
use comiq::error::ComiqError;
use comiq::filter::{FilterCriteria, filter_refs};
use comiq::stats::{StatField, StatsState};

/// Interactive comics catalog browser
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Browse a comics catalog with live filtering and collection statistics"
)]
struct Args {
    /// Saved catalog response to load instead of calling the API
    input: Option<PathBuf>,

    /// Print stats and matching comics to stdout instead of starting the UI
    #[arg(long)]
    print: bool,

    /// Case-insensitive title substring
    #[arg(long, value_name = "TEXT")]
    search: Option<String>,

    /// Exact character name
    #[arg(long, value_name = "NAME")]
    character: Option<String>,

    /// Exact comic type (comic, graphic novel, trade paperback, ...)
    #[arg(long = "type", value_name = "TYPE")]
    comic_type: Option<String>,

    /// Attribute the statistics are computed over
    #[arg(long, value_enum)]
    field: Option<StatField>,

    /// Catalog API public key
    #[arg(long, env = "COMIQ_PUBLIC_KEY", hide_env_values = true)]
    public_key: Option<String>,

    /// Catalog API private key
    #[arg(long, env = "COMIQ_PRIVATE_KEY", hide_env_values = true)]
    private_key: Option<String>,

    /// Number of comics to request
    #[arg(long)]
    limit: Option<u32>,
}

impl Args {
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            title_substring: self.search.clone().unwrap_or_default(),
            character_name: self.character.clone(),
            comic_type: self.comic_type.clone(),
        }
    }
}

fn main() -> Result<()> {
    // Writes to /tmp/comiq-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    init_debug_log();

    color_eyre::install()?;

    let args = Args::parse();

    let mut config_result = config::load_config();
    let config = &mut config_result.config;
    config.api = std::mem::take(&mut config.api).with_overrides(
        args.public_key.clone(),
        args.private_key.clone(),
        args.limit,
    );
    if let Some(field) = args.field {
        config.stats.field = field;
    }

    let source = catalog_source(args.input.clone(), &config.api);

    if args.print {
        if let Some(warning) = &config_result.warning {
            eprintln!("Warning: {}", warning);
        }
        return print_catalog(source?, &args.criteria(), config_result.config.stats.field);
    }

    let app = match source {
        Ok(source) => App::new_with_loader(
            CatalogLoader::spawn(source),
            &config_result.config,
            args.criteria(),
        ),
        Err(e) => {
            log::error!("Cannot load catalog: {}", e);
            let mut app = App::new(&config_result.config, args.criteria());
            let summary = e.to_string();
            app.notification
                .show_error(summary.lines().next().unwrap_or_default());
            app
        }
    };

    let terminal = init_terminal()?;
    let result = run(terminal, app, config_result);
    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== COMIQ DEBUG SESSION ENDED ===");

    Ok(())
}

#[cfg(debug_assertions)]
fn init_debug_log() {
    let Ok(log_file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/comiq-debug.log")
    else {
        return;
    };

    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Debug)
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();

    log::debug!("=== COMIQ DEBUG SESSION STARTED ===");
}

/// A file argument wins over the API
fn catalog_source(input: Option<PathBuf>, api: &ApiConfig) -> Result<CatalogSource, ComiqError> {
    match input {
        Some(path) => Ok(CatalogSource::File(path)),
        None => CatalogClient::from_config(api).map(CatalogSource::Remote),
    }
}

/// Stats over the whole collection, a blank line, then one line per matching comic
fn print_catalog(source: CatalogSource, criteria: &FilterCriteria, field: StatField) -> Result<()> {
    let comics = load_blocking(source)?;

    let mut stats = StatsState::new(field);
    stats.compute(&comics);

    let mut out = stdout().lock();
    writeln!(out, "{}", stats.summary_text())?;
    writeln!(out)?;
    for comic in filter_refs(&comics, criteria) {
        writeln!(out, "{}", print_line(comic, field))?;
    }
    Ok(())
}

fn print_line(comic: &ComicRecord, field: StatField) -> String {
    if comic.comic_type.is_empty() {
        format!("{} - {} {}", comic.title, field.value(comic), field)
    } else {
        format!(
            "{} [{}] - {} {}",
            comic.title,
            comic.comic_type,
            field.value(comic),
            field
        )
    }
}

/// Initialize terminal with raw mode, alternate screen, and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App, config_result: ConfigResult) -> Result<()> {
    if let Some(warning) = config_result.warning {
        app.notification.show_warning(&warning);
    }

    loop {
        // Poll before render so the first frame after arrival shows the data
        app.poll_loader();

        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use comiq::catalog::CharacterRef;

    fn comic(title: &str, comic_type: &str) -> ComicRecord {
        ComicRecord {
            id: 1,
            title: title.to_string(),
            comic_type: comic_type.to_string(),
            character_count: 2,
            characters: vec![CharacterRef {
                id: 1009610,
                name: "Spider-Man (Peter Parker)".to_string(),
            }],
            page_count: 32,
            ..Default::default()
        }
    }

    #[test]
    fn test_print_line_with_type() {
        let line = print_line(&comic("Spider-Man #1", "comic"), StatField::CharacterCount);
        assert_eq!(line, "Spider-Man #1 [comic] - 2 characters");
    }

    #[test]
    fn test_print_line_without_type() {
        let line = print_line(&comic("Spider-Man #1", ""), StatField::PageCount);
        assert_eq!(line, "Spider-Man #1 - 32 pages");
    }

    #[test]
    fn test_file_argument_wins_over_api() {
        let source = catalog_source(Some(PathBuf::from("catalog.json")), &ApiConfig::default());
        assert!(matches!(source, Ok(CatalogSource::File(_))));
    }

    #[test]
    fn test_missing_credentials_without_file() {
        let source = catalog_source(None, &ApiConfig::default());
        assert!(matches!(source, Err(ComiqError::MissingCredentials)));
    }

    #[test]
    fn test_args_criteria() {
        let args = Args::parse_from(["comiq", "--search", "x-men", "--type", "comic"]);
        let criteria = args.criteria();
        assert_eq!(criteria.title_substring, "x-men");
        assert_eq!(criteria.comic_type.as_deref(), Some("comic"));
        assert_eq!(criteria.character_name, None);
    }

    #[test]
    fn test_field_value_names() {
        let args = Args::parse_from(["comiq", "--field", "page-count"]);
        assert_eq!(args.field, Some(StatField::PageCount));
    }
}
