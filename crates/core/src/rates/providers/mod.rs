//! Rate table providers.

mod csv_directory;
mod google_sheets;

pub use csv_directory::CsvDirectoryProvider;
pub use google_sheets::{GoogleSheetsProvider, DEFAULT_SHEETS_BASE_URL};
