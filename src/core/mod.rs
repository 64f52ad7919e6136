pub mod demo;

pub use crate::domain::model::{Breed, Dog, Poodle};
pub use crate::domain::ports::Canine;
pub use crate::utils::error::Result;
