//! Metadata query facility for runtime type introspection.
//!
//! Rust has no reflection at runtime, so introspectable types carry
//! registration-time metadata tables instead: each implements [`Reflect`],
//! whose `type_info` builds a [`TypeInfo`] descriptor of the type's declared
//! shape. A [`TypeRegistry`] stores descriptors and answers by-name lookups,
//! [`TypeQueries`] offers stateless programmatic queries, [`Mirror`] pairs a
//! live instance with its descriptor for access-checked field reads, and
//! [`Reporter`] renders any of it as line-oriented text.

pub mod descriptor;
pub mod error;
pub mod mirror;
pub mod queries;
pub mod reflect;
pub mod registry;
pub mod report;
pub mod value;

pub use descriptor::{
    Annotation, ConstructorInfo, FieldInfo, MethodInfo, Modifiers, ParamInfo, TypeId, TypeInfo,
    TypeRef, Visibility,
};
pub use error::{Error, Result};
pub use mirror::{FieldMirror, Mirror};
pub use queries::TypeQueries;
pub use reflect::Reflect;
pub use registry::{AccessPolicy, TypeRegistry};
pub use report::Reporter;
pub use value::Value;
