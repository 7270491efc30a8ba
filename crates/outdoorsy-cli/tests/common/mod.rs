//! Shared test utilities for outdoorsy-cli integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;

/// Get a Command for the outdoorsy binary.
///
/// Colors are off and the config file lives inside `dir`, so runs never
/// read or write the per-user configuration.
#[allow(deprecated)]
pub fn outdoorsy_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("outdoorsy").expect("outdoorsy binary should exist");
    cmd.env_remove("OUTDOORSY_DB")
        .env_remove("RUST_LOG")
        .arg("--color")
        .arg("never")
        .arg("--config")
        .arg(dir.join("config.json"));
    cmd
}

/// Write a data file into `dir` and return its path.
pub fn write_data(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("data file should be writable");
    path
}

pub const COMMAS: &str = "\
Greta,Thunberg,greta@future.com,Sailboat,Fridays For Future,32'
Ansel,Adams,a@example.com,motorboat,Rushing Water,24'
Steve,Irwin,steve@crocodiles.com,RV,G'Day For Adventure,32 ft
";

pub const PIPES: &str = "\
Isaac|Newton|isaac@gravity.com|Trailer|Falling Apple|32 ft
Ansel|Adams|a@example.com|Motorboat|Rushing Water|24
Greta|Thunberg|greta@future.com|Bicycle|Fridays For Future|none
Steve|Irwin|steve@crocodiles.com|RV|G'Day For Adventure|29'
";
