use crate::domain::model::{Dog, Poodle};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "kennel")]
#[command(about = "Meet a dog, or a whole kennel of them")]
pub struct CliConfig {
    #[arg(long, default_value = "Buddy")]
    pub name: String,

    #[arg(long, default_value = "3", allow_hyphen_values = true)]
    pub age: i64,

    /// Path to a TOML roster; replaces --name/--age when given
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, help = "Print the dogs as JSON")]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn to_dog(&self) -> Dog {
        Dog::new(self.name.clone(), self.age)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "poodle")]
#[command(about = "Meet a poodle")]
pub struct PoodleConfig {
    #[arg(long, default_value = "Bella")]
    pub name: String,

    #[arg(long, default_value = "2", allow_hyphen_values = true)]
    pub age: i64,

    #[arg(long, default_value = "white")]
    pub coat_color: String,

    #[arg(long, help = "Print the poodle as JSON")]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl PoodleConfig {
    pub fn to_poodle(&self) -> Poodle {
        Poodle::new(self.name.clone(), self.age, self.coat_color.clone())
    }
}
