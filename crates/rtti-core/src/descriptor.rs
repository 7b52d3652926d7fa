//! Descriptor model for declared type shapes.
//!
//! Rust has no runtime reflection, so every introspectable type supplies a
//! metadata table describing its declared shape (see [`crate::Reflect`]).
//! The types here are the read-only snapshots those tables are built from:
//! a [`TypeInfo`] per type, with one member descriptor per declared
//! constructor, method, and field.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Unique identifier for types in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeId(pub u64);

static TYPE_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

impl TypeId {
    pub fn new() -> Self {
        TypeId(TYPE_ID_COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl Default for TypeId {
    fn default() -> Self {
        TypeId::new()
    }
}

/// Name-only reference to a type: simple name plus fully-qualified path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRef {
    pub simple: String,
    pub qualified: String,
}

impl TypeRef {
    pub fn new(simple: impl Into<String>, qualified: impl Into<String>) -> Self {
        Self {
            simple: simple.into(),
            qualified: qualified.into(),
        }
    }

    /// Derive both names from a concrete Rust type.
    pub fn of<T: ?Sized>() -> Self {
        let qualified = std::any::type_name::<T>();
        Self {
            simple: simple_name(qualified),
            qualified: qualified.to_string(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified)
    }
}

/// Strip module paths from a qualified type name, keeping generics intact:
/// `core::option::Option<alloc::string::String>` becomes `Option<String>`.
pub fn simple_name(qualified: &str) -> String {
    let mut out = String::with_capacity(qualified.len());
    let mut ident = String::new();
    let mut chars = qualified.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch.is_alphanumeric() || ch == '_' {
            ident.push(ch);
        } else if ch == ':' && chars.peek() == Some(&':') {
            chars.next();
            // Path separator: everything accumulated so far was a module
            // segment, not the final name.
            ident.clear();
        } else {
            out.push_str(&ident);
            ident.clear();
            out.push(ch);
        }
    }
    out.push_str(&ident);
    out
}

/// Declared visibility of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    Pub,
    Crate,
    Private,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Pub => f.write_str("pub"),
            Visibility::Crate => f.write_str("pub(crate)"),
            Visibility::Private => f.write_str("private"),
        }
    }
}

/// Declared modifiers of a member. `is_static` marks associated functions
/// that take no receiver (constructors are always static).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub vis: Visibility,
    pub is_static: bool,
}

impl Modifiers {
    pub fn public() -> Self {
        Self {
            vis: Visibility::Pub,
            is_static: false,
        }
    }

    pub fn public_static() -> Self {
        Self {
            vis: Visibility::Pub,
            is_static: true,
        }
    }

    pub fn private() -> Self {
        Self {
            vis: Visibility::Private,
            is_static: false,
        }
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.vis.fmt(f)?;
        if self.is_static {
            f.write_str(" static")?;
        }
        Ok(())
    }
}

/// One declared parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamInfo {
    pub name: String,
    pub ty: TypeRef,
}

impl ParamInfo {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Information about a declared constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructorInfo {
    pub name: String,
    pub modifiers: Modifiers,
    pub params: Vec<ParamInfo>,
}

impl ConstructorInfo {
    pub fn param_count(&self) -> usize {
        self.params.len()
    }
}

/// Information about a declared method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodInfo {
    pub name: String,
    pub modifiers: Modifiers,
    pub return_type: TypeRef,
    pub params: Vec<ParamInfo>,
}

impl MethodInfo {
    pub fn param_count(&self) -> usize {
        self.params.len()
    }
}

/// Marker attached to a declared member. Carries only its own type identity;
/// no payload is ever read through it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub name: String,
}

impl Annotation {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Information about a declared field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldInfo {
    pub name: String,
    pub ty: TypeRef,
    pub modifiers: Modifiers,
    pub annotations: Vec<Annotation>,
}

/// Complete declared shape of one type. Immutable once registered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeInfo {
    pub id: TypeId,
    pub name: String,
    pub qualified_name: String,
    pub superclass: Option<TypeRef>,
    pub interfaces: Vec<TypeRef>,
    pub constructors: Vec<ConstructorInfo>,
    pub methods: Vec<MethodInfo>,
    pub fields: Vec<FieldInfo>,
}

impl TypeInfo {
    pub fn field(&self, name: &str) -> Option<&FieldInfo> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn method_count(&self) -> usize {
        self.methods.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn simple_name_strips_module_paths() {
        assert_eq!(simple_name("alloc::string::String"), "String");
        assert_eq!(
            simple_name("core::option::Option<alloc::string::String>"),
            "Option<String>"
        );
        assert_eq!(simple_name("&str"), "&str");
        assert_eq!(simple_name("()"), "()");
    }

    #[test]
    fn type_ref_of_concrete_type() {
        let ty = TypeRef::of::<String>();
        assert_eq!(ty.simple, "String");
        assert_eq!(ty.qualified, "alloc::string::String");
    }

    #[test]
    fn modifier_strings() {
        assert_eq!(Modifiers::public().to_string(), "pub");
        assert_eq!(Modifiers::public_static().to_string(), "pub static");
        assert_eq!(Modifiers::private().to_string(), "private");
    }

    #[test]
    fn type_ids_are_unique() {
        assert_ne!(TypeId::new(), TypeId::new());
    }
}
