#![deny(unsafe_code)]

pub mod error;
pub mod report;
pub mod write;

pub use error::{OutputError, Result};
pub use report::{DEFAULT_HINT_THRESHOLD, ReportSummary, ReviewReport, UnclaimedChapter};
pub use write::{write_report, write_structure};
