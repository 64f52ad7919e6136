pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, PoodleConfig};
pub use config::RosterConfig;

pub use domain::model::{Breed, Dog, Poodle};
pub use domain::ports::Canine;
pub use utils::error::{KennelError, Result};
