pub mod engine;
pub mod loader;
pub mod repl;
pub mod scramble;
pub mod solver;

pub use crate::domain::model::{City, SessionSummary};
pub use crate::domain::ports::{CitySource, ConfigProvider, Storage};
pub use crate::utils::error::Result;
