use crate::core::{Breed, Canine, Dog, Poodle, Result};
use serde::Serialize;

/// Lines the dog demo prints: the dog barks.
pub fn dog_report(dog: &Dog) -> Vec<String> {
    tracing::debug!("Reporting on {:?}", dog);
    vec![dog.bark()]
}

/// Lines the poodle demo prints: bark, groom, then the string form.
pub fn poodle_report(poodle: &Poodle) -> Vec<String> {
    tracing::debug!("Reporting on {:?} ({})", poodle, poodle.kind());
    vec![poodle.bark(), poodle.groom(), poodle.to_string()]
}

pub fn roster_report(breeds: &[Breed]) -> Vec<String> {
    let mut lines = Vec::with_capacity(breeds.len() * 2);
    for breed in breeds {
        tracing::debug!("Reporting on {} {:?}", breed.as_canine().kind(), breed);
        lines.push(breed.as_canine().bark());
        if let Breed::Poodle(poodle) = breed {
            lines.push(poodle.groom());
        }
        lines.push(breed.to_string());
    }
    lines
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// JSON form of a roster, each entry tagged with its kind.
pub fn roster_json(breeds: &[Breed]) -> Result<String> {
    let entries = breeds
        .iter()
        .map(|breed| -> Result<serde_json::Value> {
            let mut value = match breed {
                Breed::Dog(dog) => serde_json::to_value(dog)?,
                Breed::Poodle(poodle) => serde_json::to_value(poodle)?,
            };
            if let Some(object) = value.as_object_mut() {
                object.insert(
                    "kind".to_string(),
                    serde_json::Value::from(breed.as_canine().kind()),
                );
            }
            Ok(value)
        })
        .collect::<Result<Vec<_>>>()?;
    to_json(&entries)
}
