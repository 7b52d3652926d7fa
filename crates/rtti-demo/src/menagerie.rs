//! The example hierarchy the reports are run against: an [`Animal`] base
//! type and a [`Dog`] that extends it and implements the [`Voice`]
//! capability.
//!
//! Output-producing operations take the writer explicitly so callers (and
//! tests) decide where the text goes.

use rtti_core::{
    Annotation, ConstructorInfo, FieldInfo, MethodInfo, Modifiers, ParamInfo, Reflect, TypeId,
    TypeInfo, TypeRef, Value,
};
use std::io::{self, Write};
use std::ops::Deref;

/// Capability of producing a characteristic sound.
pub trait Voice {
    fn perform_voice(&self, out: &mut dyn Write) -> io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct Animal {
    breed: String,
}

impl Animal {
    pub fn new(breed: impl Into<String>) -> Self {
        Self {
            breed: breed.into(),
        }
    }

    pub fn breed(&self) -> &str {
        &self.breed
    }
}

impl Reflect for Animal {
    fn type_info() -> TypeInfo {
        TypeInfo {
            id: TypeId::new(),
            name: "Animal".to_string(),
            qualified_name: std::any::type_name::<Animal>().to_string(),
            superclass: None,
            interfaces: Vec::new(),
            constructors: vec![ConstructorInfo {
                name: "new".to_string(),
                modifiers: Modifiers::public_static(),
                params: vec![ParamInfo::new("breed", TypeRef::of::<String>())],
            }],
            methods: vec![MethodInfo {
                name: "breed".to_string(),
                modifiers: Modifiers::public(),
                return_type: TypeRef::of::<&str>(),
                params: Vec::new(),
            }],
            fields: vec![FieldInfo {
                name: "breed".to_string(),
                ty: TypeRef::of::<String>(),
                modifiers: Modifiers::private(),
                annotations: Vec::new(),
            }],
        }
    }

    fn type_name(&self) -> &'static str {
        "Animal"
    }

    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "breed" => Some(Value::Str(self.breed.clone())),
            _ => None,
        }
    }
}

/// A dog: extends [`Animal`] (by composition, with `Deref` to the base) and
/// adds a nameable identity the base type knows nothing about.
#[derive(Debug, Clone)]
pub struct Dog {
    base: Animal,
    name: Option<String>,
}

impl Dog {
    pub fn new(breed: impl Into<String>) -> Self {
        Self {
            base: Animal::new(breed),
            name: None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn eat(&self, out: &mut dyn Write, treat: &str) -> io::Result<()> {
        writeln!(out, "What a yummy {}!", treat.to_lowercase())
    }
}

impl Deref for Dog {
    type Target = Animal;

    fn deref(&self) -> &Animal {
        &self.base
    }
}

impl Voice for Dog {
    fn perform_voice(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Woof woof")
    }
}

impl Reflect for Dog {
    fn type_info() -> TypeInfo {
        let unit = TypeRef::of::<io::Result<()>>();
        let writer = TypeRef::of::<&mut dyn Write>();
        TypeInfo {
            id: TypeId::new(),
            name: "Dog".to_string(),
            qualified_name: std::any::type_name::<Dog>().to_string(),
            superclass: Some(TypeRef::of::<Animal>()),
            interfaces: vec![TypeRef::new(
                "Voice",
                format!("{}::Voice", module_path!()),
            )],
            constructors: vec![ConstructorInfo {
                name: "new".to_string(),
                modifiers: Modifiers::public_static(),
                params: vec![ParamInfo::new("breed", TypeRef::of::<String>())],
            }],
            methods: vec![
                MethodInfo {
                    name: "name".to_string(),
                    modifiers: Modifiers::public(),
                    return_type: TypeRef::of::<Option<&str>>(),
                    params: Vec::new(),
                },
                MethodInfo {
                    name: "set_name".to_string(),
                    modifiers: Modifiers::public(),
                    return_type: TypeRef::of::<()>(),
                    params: vec![ParamInfo::new("name", TypeRef::of::<String>())],
                },
                MethodInfo {
                    name: "eat".to_string(),
                    modifiers: Modifiers::public(),
                    return_type: unit.clone(),
                    params: vec![
                        ParamInfo::new("out", writer.clone()),
                        ParamInfo::new("treat", TypeRef::of::<&str>()),
                    ],
                },
                MethodInfo {
                    name: "perform_voice".to_string(),
                    modifiers: Modifiers::public(),
                    return_type: unit,
                    params: vec![ParamInfo::new("out", writer)],
                },
            ],
            // Only the declared field; `breed` belongs to Animal's table.
            fields: vec![FieldInfo {
                name: "name".to_string(),
                ty: TypeRef::of::<Option<String>>(),
                modifiers: Modifiers::private(),
                annotations: vec![Annotation::new("Deprecated")],
            }],
        }
    }

    fn type_name(&self) -> &'static str {
        "Dog"
    }

    fn field(&self, name: &str) -> Option<Value> {
        match name {
            "name" => Some(Value::from(self.name.clone())),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn capture(write: impl FnOnce(&mut dyn Write) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        write(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn eat_lowercases_the_treat() {
        let dog = Dog::new("Labradoodle");
        let output = capture(|out| dog.eat(out, "Bone"));
        assert_eq!(output, "What a yummy bone!\n");
    }

    #[test]
    fn voice_is_constant() {
        let mut dog = Dog::new("Labradoodle");
        let before = capture(|out| dog.perform_voice(out));
        dog.set_name("Jack");
        let after = capture(|out| dog.perform_voice(out));
        assert_eq!(before, "Woof woof\n");
        assert_eq!(before, after);
    }

    #[test]
    fn breed_is_reachable_through_the_base() {
        let dog = Dog::new("Labradoodle");
        assert_eq!(dog.breed(), "Labradoodle");
    }

    #[test]
    fn setter_may_be_called_repeatedly() {
        let mut dog = Dog::new("Labradoodle");
        dog.set_name("Jack");
        dog.set_name("Rex");
        assert_eq!(dog.name(), Some("Rex"));
    }
}
