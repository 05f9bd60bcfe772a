#![forbid(unsafe_code)]

pub mod error;
pub mod policy;

pub mod hash {
    pub mod digest;
}

pub mod baseline;
pub mod compare;
pub mod csv;

// Re-exports: stable API surface
pub use baseline::{BaselineOptions, BaselineTable, FileRecord, build_baseline};
pub use compare::{ComparisonReport, ComparisonRow, FileStatus, StatusCounts, compare};
pub use csv::{read_baseline, write_baseline, write_report};
pub use policy::{DuplicatePolicy, HashAlgo};
