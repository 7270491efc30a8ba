//! Interactive menu
//!
//! Line-oriented prompts over any `BufRead`/`Write` pair so the loop can be
//! driven from stdin or from a test script.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use outdoorsy_app::app::{ingest_file_at, list_customers, IngestPolicy};
use outdoorsy_app::config::Config;
use outdoorsy_app::repository::open_existing_store_at;
use outdoorsy_types::{Delimiter, OutputFormat, Result, SortKey};
use tracing::debug;

use crate::output::{no_data_message, output_report, render_table};
use crate::ui::{MessageType, Style};

/// Run the menu on the process's stdin and stdout
pub fn run(config: &Config, db_override: Option<&Path>, style: &Style) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(stdin.lock(), stdout.lock(), config, db_override, style).run()
}

pub struct Session<'a, R, W> {
    input: R,
    out: W,
    config: &'a Config,
    db_override: Option<&'a Path>,
    style: &'a Style,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(
        input: R,
        out: W,
        config: &'a Config,
        db_override: Option<&'a Path>,
        style: &'a Style,
    ) -> Self {
        Self {
            input,
            out,
            config,
            db_override,
            style,
        }
    }

    /// Loop until the user picks Exit or input ends
    ///
    /// Failed uploads and views are reported and the menu is shown again.
    /// Only errors on the terminal streams themselves end the loop.
    pub fn run(mut self) -> Result<()> {
        loop {
            writeln!(self.out)?;
            writeln!(self.out, "{}", self.style.section("Welcome to the Outdoorsy interface."))?;
            writeln!(self.out, "1) Upload new file (comma or pipe delimited)")?;
            writeln!(self.out, "2) View entries")?;
            writeln!(self.out, "3) Exit.")?;

            let Some(selection) = self.prompt("Your selection: ")? else {
                break;
            };
            debug!(%selection, "menu selection");

            match selection.as_str() {
                "1" => self.upload()?,
                "2" => self.view()?,
                "3" => break,
                _ => self.error("Invalid option, please try again!")?,
            }
        }

        writeln!(self.out, "Goodbye!")?;
        Ok(())
    }

    fn upload(&mut self) -> Result<()> {
        let Some(file) = self.prompt("Please enter the path of the file: ")? else {
            return Ok(());
        };
        let Some(delimiter) = self.prompt("Is the file comma or pipe delimited? (comma|pipe): ")?
        else {
            return Ok(());
        };
        let delimiter = match Delimiter::from_name(&delimiter.to_lowercase()) {
            Ok(delimiter) => delimiter,
            Err(e) => return self.error(&e.to_string()),
        };

        let Some(answer) = self.prompt("Would you like to specify the DB path? (y/n): ")? else {
            return Ok(());
        };
        let db_file = match answer.to_lowercase().as_str() {
            "y" => {
                let Some(dir) = self.prompt("Please enter the path for the database: ")? else {
                    return Ok(());
                };
                let dir = PathBuf::from(dir);
                if !dir.exists() {
                    return self.error(&format!(
                        "The path specified to create the database does not exist: {}",
                        dir.display()
                    ));
                }
                self.config.db_file(Some(&dir))
            }
            "n" => self.config.db_file(self.db_override),
            _ => return self.error("Please answer 'y' or 'n'"),
        };

        match ingest_file_at(&db_file, Path::new(&file), delimiter, IngestPolicy::Abort) {
            Ok(report) => output_report(
                &mut self.out,
                OutputFormat::Table,
                &report,
                &db_file,
                self.style,
            ),
            Err(e) => self.error(&e.to_string()),
        }
    }

    fn view(&mut self) -> Result<()> {
        let Some(answer) = self.prompt("Did you previously set a custom DB path? (y/n): ")? else {
            return Ok(());
        };
        let db_file = match answer.to_lowercase().as_str() {
            "y" => {
                let Some(path) = self.prompt("Please enter the path of the database: ")? else {
                    return Ok(());
                };
                self.config.db_file(Some(Path::new(&path)))
            }
            "n" => self.config.db_file(self.db_override),
            _ => return self.error("Please answer 'y' or 'n'"),
        };

        let Some(choice) =
            self.prompt("Would you like to sort by Full Name (1) or by Vehicle Type (2)? (1|2): ")?
        else {
            return Ok(());
        };
        let sort = match choice.as_str() {
            "1" => SortKey::ByName,
            "2" => SortKey::ByVehicleType,
            _ => return self.error("Please select 1 or 2"),
        };

        match open_existing_store_at(db_file.clone()).and_then(|store| list_customers(&store, sort))
        {
            Ok(listing) if listing.is_empty() => {
                let text = format!("The customer table in {} is empty", db_file.display());
                writeln!(self.out, "{}", self.style.message(MessageType::Info, &text))?;
                Ok(())
            }
            Ok(listing) => {
                writeln!(self.out, "{}", render_table(&listing.records))?;
                Ok(())
            }
            Err(e) if e.is_no_data() => {
                writeln!(self.out, "{}", no_data_message(self.style, &db_file))?;
                Ok(())
            }
            Err(e) => self.error(&e.to_string()),
        }
    }

    /// Print `text` and read one trimmed line; `None` at end of input
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn error(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", self.style.message(MessageType::Err, text))?;
        Ok(())
    }
}
