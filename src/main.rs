use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, LevelFilter};

use contacts::audit::AuditLogger;
use contacts::cli::{run_menu, Console, Pacing};
use contacts::config::{paths::ContactsPaths, settings::Settings};
use contacts::display::Theme;
use contacts::models::Validator;
use contacts::storage::ContactStore;

#[derive(Parser)]
#[command(
    name = "contacts",
    version,
    about = "Terminal-based contact book",
    long_about = "Contacts Book keeps a list of contacts for the current session. \
                  Add, search, update and delete contacts from an interactive menu; \
                  names, emails and phone numbers are validated on the way in."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Settings file to use instead of the default location
    #[arg(long, global = true, env = "CONTACTS_BOOK_CONFIG")]
    config: Option<PathBuf>,

    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,

    /// Disable "Press Enter" pauses and progress animations
    #[arg(long, global = true)]
    no_pause: bool,

    /// Record every change in the audit log
    #[arg(long, global = true)]
    audit: bool,

    /// Log level for diagnostics on stderr (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = parse_log_level)]
    log_level: LevelFilter,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive menu (default)
    #[command(alias = "run")]
    Menu,

    /// Write a settings file with default values
    Init,

    /// Show current configuration and paths
    Config,

    /// Show the most recent audit log entries
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },
}

fn parse_log_level(s: &str) -> Result<LevelFilter, String> {
    s.parse()
        .map_err(|_| format!("unknown log level '{}' (off, error, warn, info, debug, trace)", s))
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    let paths = ContactsPaths::new()?;
    let settings_file = cli.config.clone().unwrap_or_else(|| paths.settings_file());

    match cli.command.take().unwrap_or(Commands::Menu) {
        Commands::Init => init_settings(&settings_file)?,
        Commands::History { count } => show_history(&paths, count)?,
        Commands::Menu => {
            let settings = load_settings(&cli, &paths)?;
            run_interactive(&paths, &settings)?;
        }
        Commands::Config => {
            let settings = load_settings(&cli, &paths)?;
            println!("Contacts Book Configuration");
            println!("===========================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", settings_file.display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!(
                "  Phone digits:    {}-{}",
                settings.phone.min_digits, settings.phone.max_digits
            );
            println!("  Colour:          {}", settings.display.color);
            println!("  Icons:           {}", settings.display.icons);
            println!("  Pauses:          {}", settings.display.pauses);
            println!("  Animations:      {}", settings.display.animations);
            println!("  Audit enabled:   {}", settings.audit.enabled);
        }
    }

    Ok(())
}

/// Read settings from `--config` or the default location, then apply flags
fn load_settings(cli: &Cli, paths: &ContactsPaths) -> Result<Settings> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load_or_create(paths)?,
    };
    debug!("Settings loaded: {:?}", settings);

    if cli.no_color {
        settings.display.color = false;
    }
    if cli.no_pause {
        settings.display.pauses = false;
        settings.display.animations = false;
    }
    if cli.audit {
        settings.audit.enabled = true;
    }
    Ok(settings)
}

/// Write default settings unless the file is already there
fn init_settings(settings_file: &Path) -> Result<()> {
    if settings_file.exists() {
        println!("Settings already exist at: {}", settings_file.display());
        return Ok(());
    }

    if let Some(parent) = settings_file.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    Settings::default().save_to(settings_file)?;
    println!("Wrote default settings to: {}", settings_file.display());
    Ok(())
}

/// Print the tail of the audit log
fn show_history(paths: &ContactsPaths, count: usize) -> Result<()> {
    let logger = AuditLogger::new(paths.audit_log());
    if !logger.exists() {
        println!("No audit log at {}", logger.path().display());
        return Ok(());
    }

    let total = logger.entry_count()?;
    if total == 0 {
        println!("No audit entries in {}", logger.path().display());
        return Ok(());
    }

    let entries = logger.read_recent(count)?;
    println!("Showing {} of {} audit entries", entries.len(), total);
    println!();
    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}

/// Build the store and console from settings and run the menu on stdin/stdout
fn run_interactive(paths: &ContactsPaths, settings: &Settings) -> Result<()> {
    let mut store = ContactStore::new(Validator::new(settings.phone));
    if settings.audit.enabled {
        debug!("Audit log enabled at {}", paths.audit_log().display());
        store = store.with_audit(AuditLogger::new(paths.audit_log()));
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(
        stdin.lock(),
        stdout.lock(),
        Theme::from_settings(&settings.display),
        Pacing::from_settings(&settings.display),
    );

    run_menu(&mut store, &mut console).context("Console session failed")?;
    Ok(())
}
