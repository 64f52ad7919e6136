use crate::domain::model::Dog;

/// Anything that is a [`Dog`].
///
/// Implementors only say where their base dog lives; every behavior has a
/// default built on that. A specialized breed overrides the methods it needs
/// and keeps the rest, so `debug_describe` stays on the base form even when
/// `describe` is overridden.
pub trait Canine {
    fn as_dog(&self) -> &Dog;
    fn as_dog_mut(&mut self) -> &mut Dog;

    fn kind(&self) -> &'static str {
        "Dog"
    }

    fn name(&self) -> &str {
        &self.as_dog().name
    }

    fn age(&self) -> i64 {
        self.as_dog().age
    }

    fn is_sitting(&self) -> bool {
        self.as_dog().is_sitting()
    }

    fn bark(&self) -> String {
        format!("{} says Woof!", self.name())
    }

    fn sit(&mut self) -> String {
        self.as_dog_mut().set_sitting(true);
        format!("{} is now sitting.", self.name())
    }

    fn stand(&mut self) -> String {
        self.as_dog_mut().set_sitting(false);
        format!("{} is now standing.", self.name())
    }

    /// Human-readable form, used by `Display`.
    fn describe(&self) -> String {
        format!("{} is {} years old.", self.name(), self.age())
    }

    /// Diagnostic form, used by `Debug`. Always the base dog's tag and fields.
    fn debug_describe(&self) -> String {
        let dog = self.as_dog();
        format!("Dog(name={}, age={})", dog.name, dog.age)
    }
}
