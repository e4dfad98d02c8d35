#[macro_use]
extern crate failure;

pub mod clock;
pub mod club;
pub mod config;
pub mod discrete_system;
pub mod loader;
pub mod report;

pub use crate::club::run;
pub use crate::loader::{load, load_file, LoadError, Loaded};
pub use crate::report::DayReport;
