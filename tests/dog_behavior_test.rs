use kennel::{Canine, Dog, Poodle};

/// Compile-time "is a Dog" checks used below.
fn assert_is_canine<T: Canine + ?Sized>(_: &T) {}
fn assert_as_dog<T: AsRef<Dog>>(value: &T) -> &Dog {
    value.as_ref()
}

#[test]
fn test_construction_preserves_any_value() {
    let cases: [(&str, i64); 6] = [
        ("Buddy", 3),
        ("", 5),
        ("123", 2),
        ("Mr. Woof-a-lot", 0),
        ("TimeTraveler", -1),
        ("Ancient", 1000),
    ];

    for (name, age) in cases {
        let dog = Dog::new(name, age);
        assert_eq!(dog.name, name);
        assert_eq!(dog.age, age);
        assert!(!dog.is_sitting());
    }

    let huge = Dog::new("Eternal", i64::MAX);
    assert_eq!(huge.age, i64::MAX);
}

#[test]
fn test_bark_edge_cases() {
    assert_eq!(Dog::new("", 5).bark(), " says Woof!");
    assert_eq!(Dog::new("Mr. Woof-a-lot", 3).bark(), "Mr. Woof-a-lot says Woof!");
    assert_eq!(Dog::new("123", 2).bark(), "123 says Woof!");
}

#[test]
fn test_string_form_keeps_sign_and_magnitude() {
    assert_eq!(Dog::new("TimeTraveler", -1).to_string(), "TimeTraveler is -1 years old.");
    assert_eq!(Dog::new("Ancient", 1000).to_string(), "Ancient is 1000 years old.");
    assert_eq!(Dog::new("Buddy", 3).describe(), "Buddy is 3 years old.");
}

#[test]
fn test_debug_form() {
    let dog = Dog::new("Buddy", 3);
    assert_eq!(dog.debug_describe(), "Dog(name=Buddy, age=3)");
    assert_eq!(format!("{:?}", dog), "Dog(name=Buddy, age=3)");
}

#[test]
fn test_instances_are_independent() {
    let mut rex = Dog::new("Rex", 4);
    let max = Dog::new("Max", 6);

    rex.sit();
    rex.name = "Max".to_string();
    rex.age = 6;

    assert!(rex.is_sitting());
    assert!(!max.is_sitting());
    assert_eq!(max.name, "Max");
    assert_eq!(max.age, 6);

    rex.name.push_str(" Jr.");
    rex.age = -3;
    rex.stand();
    rex.sit();

    assert_eq!(max, Dog::new("Max", 6));
    assert_eq!(max.to_string(), "Max is 6 years old.");
}

#[test]
fn test_clones_are_independent() {
    let original = Dog::new("Rex", 4);
    let mut copy = original.clone();

    copy.sit();
    copy.name = "Rexy".to_string();
    copy.age = 5;

    assert!(!original.is_sitting());
    assert_eq!(original.name, "Rex");
    assert_eq!(original.age, 4);
}

#[test]
fn test_poodle_inherits_dog_behavior() {
    let mut poodle = Poodle::new("Bella", 2, "white");

    assert_eq!(poodle.bark(), "Bella says Woof!");
    assert_eq!(poodle.sit(), "Bella is now sitting.");
    assert!(poodle.is_sitting());
    assert_eq!(poodle.stand(), "Bella is now standing.");
    assert!(!poodle.is_sitting());
}

#[test]
fn test_poodle_presentation() {
    let bella = Poodle::new("Bella", 2, "white");
    let shadow = Poodle::new("Shadow", 4, "black");

    assert_eq!(bella.groom(), "Bella is being groomed. The coat color is white.");
    assert_eq!(shadow.groom(), "Shadow is being groomed. The coat color is black.");
    assert_eq!(bella.describe(), "Bella is a white Poodle, 2 years old.");
    assert_eq!(shadow.to_string(), "Shadow is a black Poodle, 4 years old.");
    assert_eq!(bella.debug_describe(), "Dog(name=Bella, age=2)");
    assert_eq!(format!("{:?}", bella), "Dog(name=Bella, age=2)");
}

#[test]
fn test_poodle_is_a_dog() {
    let mut poodle = Poodle::new("Bella", 2, "white");

    assert_is_canine(&poodle);
    assert_eq!(assert_as_dog(&poodle).name, "Bella");

    // Mutating through the base view is visible on the poodle.
    poodle.as_mut().age = 3;
    assert_eq!(poodle.age(), 3);
    assert_eq!(poodle.to_string(), "Bella is a white Poodle, 3 years old.");
}

#[test]
fn test_override_resolution_through_trait_objects() {
    let mut pack: Vec<Box<dyn Canine>> = vec![
        Box::new(Dog::new("Buddy", 3)),
        Box::new(Poodle::new("Bella", 2, "white")),
    ];

    for canine in pack.iter_mut() {
        assert_is_canine(canine.as_ref());
        canine.sit();
    }

    assert!(pack.iter().all(|canine| canine.is_sitting()));
    assert_eq!(pack[0].describe(), "Buddy is 3 years old.");
    assert_eq!(pack[1].describe(), "Bella is a white Poodle, 2 years old.");
    assert_eq!(pack[1].debug_describe(), "Dog(name=Bella, age=2)");
    assert_eq!(pack[0].kind(), "Dog");
    assert_eq!(pack[1].kind(), "Poodle");
}

#[test]
fn test_poodle_coat_color_is_mutable() {
    let mut poodle = Poodle::new("Cocoa", 3, "brown");
    assert_eq!(poodle.coat_color, "brown");

    poodle.coat_color = "grey".to_string();
    poodle.dog.name = "Silver".to_string();
    assert_eq!(poodle.groom(), "Silver is being groomed. The coat color is grey.");
}
