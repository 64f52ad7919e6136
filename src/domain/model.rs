use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::ports::Canine;

/// A dog with a name, an age and a posture.
///
/// `name` and `age` are plain public fields and accept any value, including
/// an empty name or a negative age. `sitting` only moves through
/// [`Canine::sit`] and [`Canine::stand`].
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dog {
    pub name: String,
    pub age: i64,
    #[serde(default)]
    sitting: bool,
}

impl Dog {
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            age,
            sitting: false,
        }
    }

    pub fn is_sitting(&self) -> bool {
        self.sitting
    }

    pub(crate) fn set_sitting(&mut self, sitting: bool) {
        self.sitting = sitting;
    }
}

impl Canine for Dog {
    fn as_dog(&self) -> &Dog {
        self
    }

    fn as_dog_mut(&mut self) -> &mut Dog {
        self
    }
}

impl fmt::Display for Dog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl fmt::Debug for Dog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.debug_describe())
    }
}

/// A poodle: a [`Dog`] with a coat color.
///
/// Everything except the string form comes from the base dog, including the
/// debug form, which keeps reporting `Dog(name=.., age=..)`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Poodle {
    #[serde(flatten)]
    pub dog: Dog,
    pub coat_color: String,
}

impl Poodle {
    pub fn new(name: impl Into<String>, age: i64, coat_color: impl Into<String>) -> Self {
        Self {
            dog: Dog::new(name, age),
            coat_color: coat_color.into(),
        }
    }

    pub fn groom(&self) -> String {
        format!(
            "{} is being groomed. The coat color is {}.",
            self.dog.name, self.coat_color
        )
    }
}

impl Canine for Poodle {
    fn as_dog(&self) -> &Dog {
        &self.dog
    }

    fn as_dog_mut(&mut self) -> &mut Dog {
        &mut self.dog
    }

    fn kind(&self) -> &'static str {
        "Poodle"
    }

    fn describe(&self) -> String {
        format!(
            "{} is a {} Poodle, {} years old.",
            self.dog.name, self.coat_color, self.dog.age
        )
    }
}

impl AsRef<Dog> for Poodle {
    fn as_ref(&self) -> &Dog {
        &self.dog
    }
}

impl AsMut<Dog> for Poodle {
    fn as_mut(&mut self) -> &mut Dog {
        &mut self.dog
    }
}

impl From<Poodle> for Dog {
    fn from(poodle: Poodle) -> Self {
        poodle.dog
    }
}

impl fmt::Display for Poodle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl fmt::Debug for Poodle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.debug_describe())
    }
}

/// Either kind of dog, as read from a roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Breed {
    Dog(Dog),
    Poodle(Poodle),
}

impl Breed {
    pub fn as_canine(&self) -> &dyn Canine {
        match self {
            Breed::Dog(dog) => dog,
            Breed::Poodle(poodle) => poodle,
        }
    }

    pub fn as_canine_mut(&mut self) -> &mut dyn Canine {
        match self {
            Breed::Dog(dog) => dog,
            Breed::Poodle(poodle) => poodle,
        }
    }
}

impl fmt::Display for Breed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Breed::Dog(dog) => fmt::Display::fmt(dog, f),
            Breed::Poodle(poodle) => fmt::Display::fmt(poodle, f),
        }
    }
}
