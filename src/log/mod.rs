//! Log parsing for the pipe-delimited checkpoint timing log.

pub mod parse;
pub mod row;

pub use parse::parse_log_file;
pub use row::LogRecord;
