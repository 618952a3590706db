pub mod config;
pub mod target;
pub mod probe;
pub mod scanner;
pub mod report;
pub mod error;
pub mod logging;

pub use self::config::Config;
pub use self::scanner::run_scan;
pub use self::report::ScanReport;
pub use self::error::ScanError;
