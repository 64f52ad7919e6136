use crate::domain::model::{Breed, Dog, Poodle};
use crate::utils::error::{KennelError, Result};
use crate::utils::validation::{validate_non_empty_list, validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    pub kennel: KennelInfo,
    #[serde(default)]
    pub dogs: Vec<DogEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KennelInfo {
    pub name: String,
    pub description: Option<String>,
}

/// One roster line. Entries with a coat color are poodles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DogEntry {
    pub name: String,
    pub age: i64,
    pub coat_color: Option<String>,
}

impl DogEntry {
    pub fn to_breed(&self) -> Breed {
        match &self.coat_color {
            Some(color) => Breed::Poodle(Poodle::new(self.name.clone(), self.age, color.clone())),
            None => Breed::Dog(Dog::new(self.name.clone(), self.age)),
        }
    }
}

impl RosterConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        tracing::debug!("Reading roster from {}", path.as_ref().display());
        let content = std::fs::read_to_string(&path).map_err(KennelError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| KennelError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("kennel.name", &self.kennel.name)?;
        validate_non_empty_list("dogs", &self.dogs)?;
        Ok(())
    }

    pub fn breeds(&self) -> Vec<Breed> {
        self.dogs.iter().map(DogEntry::to_breed).collect()
    }
}

impl Validate for RosterConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
