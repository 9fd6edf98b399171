//! Runtime configuration for the desktop shell.

use std::env;
use std::path::PathBuf;

/// Default database filename, relative to the working directory.
pub const DEFAULT_DB_FILE: &str = "products.db";

/// Default export filename, relative to the working directory.
pub const DEFAULT_EXPORT_FILE: &str = "products.xlsx";

/// File locations for the catalog database and the spreadsheet export.
///
/// Both default to fixed filenames in the working directory; environment
/// variables override them for tests and portable installs.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub export_path: PathBuf,
}

impl Config {
    /// Read `STOCKBOOK_DB_PATH` and `STOCKBOOK_EXPORT_PATH`, falling back
    /// to the working-directory defaults.
    pub fn from_env() -> Self {
        let db_path = env::var("STOCKBOOK_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DB_FILE));
        let export_path = env::var("STOCKBOOK_EXPORT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_EXPORT_FILE));

        Self {
            db_path,
            export_path,
        }
    }
}
