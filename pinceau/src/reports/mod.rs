//! Report data structures for commands.
//!
//! Commands build reports and print them through `Display`.

mod stage;

pub use stage::StageReport;
