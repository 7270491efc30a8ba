//! Command handlers

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use outdoorsy_app::app::{ingest_file_at, list_customers, IngestPolicy};
use outdoorsy_app::config::Config;
use outdoorsy_app::repository::open_existing_store;
use outdoorsy_types::{Delimiter, OutputFormat, Result, SortKey};
use tracing::{debug, info};

use crate::cli::{Cli, Commands};
use crate::interactive;
use crate::output::{no_data_message, output_listing, output_report};
use crate::ui::{MessageType, Style};

pub fn execute(cli: Cli, style: &Style) -> Result<()> {
    let config_path = cli.config.as_deref();
    let db_override = cli.db.as_deref();

    match cli.command {
        Some(Commands::Import {
            file,
            delimiter,
            skip_malformed,
        }) => {
            let config = load_config(config_path)?;
            let policy = if skip_malformed {
                IngestPolicy::Skip
            } else {
                IngestPolicy::Abort
            };
            let output_format = cli.format.unwrap_or(config.output_format);
            cmd_import(&config, db_override, &file, &delimiter, policy, output_format, style)
        }
        Some(Commands::View { sort }) => {
            let config = load_config(config_path)?;
            let sort = sort.unwrap_or(config.default_sort);
            let output_format = cli.format.unwrap_or(config.output_format);
            cmd_view(&config, db_override, sort, output_format, style)
        }
        // Loads the file itself so --reset still works on a broken one
        Some(Commands::Config {
            show,
            set_db_path,
            set_sort,
            set_format,
            reset,
        }) => cmd_config(
            config_path,
            show,
            set_db_path,
            set_sort,
            set_format,
            reset,
            style,
        ),
        Some(Commands::Interactive) | None => {
            let config = load_config(config_path)?;
            interactive::run(&config, db_override, style)
        }
    }
}

/// Load `--config` when given, else the per-user file
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config = match config_path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    debug!(?config, "loaded configuration");
    Ok(config)
}

fn cmd_import(
    config: &Config,
    db_override: Option<&Path>,
    file: &Path,
    delimiter: &str,
    policy: IngestPolicy,
    output_format: OutputFormat,
    style: &Style,
) -> Result<()> {
    // Reject a bad delimiter before a database file is created
    let delimiter = Delimiter::from_name(delimiter)?;
    let db_file = config.db_file(db_override);
    info!(file = %file.display(), db = %db_file.display(), %delimiter, "importing");

    let report = ingest_file_at(&db_file, file, delimiter, policy)?;

    let stdout = io::stdout();
    output_report(&mut stdout.lock(), output_format, &report, &db_file, style)
}

fn cmd_view(
    config: &Config,
    db_override: Option<&Path>,
    sort: SortKey,
    output_format: OutputFormat,
    style: &Style,
) -> Result<()> {
    let db_file = config.db_file(db_override);
    let listing = match open_existing_store(config, db_override)
        .and_then(|store| list_customers(&store, sort))
    {
        Ok(listing) => listing,
        Err(e) if e.is_no_data() => {
            // stdout stays a valid (empty) JSON array
            if output_format == OutputFormat::Json {
                println!("[]");
                eprintln!("{}", no_data_message(style, &db_file));
            } else {
                println!("{}", no_data_message(style, &db_file));
            }
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if output_format == OutputFormat::Table {
        if listing.is_empty() {
            writeln!(
                out,
                "{}",
                style.message(
                    MessageType::Info,
                    &format!("The customer table in {} is empty", db_file.display())
                )
            )?;
            return Ok(());
        }
        writeln!(
            out,
            "{}",
            style.section(&format!("Customers sorted by {} ({} rows)", sort, listing.len()))
        )?;
    }
    output_listing(&mut out, output_format, &listing)
}

fn cmd_config(
    config_path: Option<&Path>,
    show: bool,
    set_db_path: Option<PathBuf>,
    set_sort: Option<SortKey>,
    set_format: Option<OutputFormat>,
    reset: bool,
    style: &Style,
) -> Result<()> {
    let save = |config: &Config| match config_path {
        Some(path) => config.save_to(path),
        None => config.save(),
    };

    if reset {
        let config = Config::default();
        save(&config)?;
        println!("{}", style.message(MessageType::Ok, "Configuration reset to defaults"));
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = load_config(config_path)?;
    let mut modified = false;

    if let Some(db_path) = set_db_path {
        config.db_path = Some(db_path);
        modified = true;
    }

    if let Some(sort) = set_sort {
        config.default_sort = sort;
        modified = true;
    }

    if let Some(output_format) = set_format {
        config.output_format = output_format;
        modified = true;
    }

    if modified {
        save(&config)?;
        println!("{}", style.message(MessageType::Ok, "Configuration updated"));
    }

    if show || !modified {
        println!("{}", config);
        let location = match config_path {
            Some(path) => path.to_path_buf(),
            None => Config::config_path()?,
        };
        println!("{}", style.message_detail("Config file", &location.display().to_string()));
    }

    Ok(())
}
