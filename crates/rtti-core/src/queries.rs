// Type queries - stateless operations over registered descriptors

use crate::descriptor::TypeRef;
use crate::error::{Error, Result};
use crate::registry::TypeRegistry;
use std::sync::Arc;

/// Stateless type queries for introspection by name.
///
/// Unlike direct descriptor access, every query resolves its subject through
/// the registry, so an unknown type name surfaces as
/// [`Error::TypeNotFound`].
pub struct TypeQueries {
    type_registry: Arc<TypeRegistry>,
}

impl TypeQueries {
    pub fn new(type_registry: Arc<TypeRegistry>) -> Self {
        Self { type_registry }
    }

    /// The direct superclass of a type, if it declares one.
    pub fn superclass_of(&self, type_name: &str) -> Result<Option<TypeRef>> {
        let info = self.type_registry.type_by_name(type_name)?;
        Ok(info.superclass)
    }

    /// Interfaces the type itself declares (never inherited ones).
    pub fn interfaces_of(&self, type_name: &str) -> Result<Vec<TypeRef>> {
        let info = self.type_registry.type_by_name(type_name)?;
        Ok(info.interfaces)
    }

    /// Check if a type declares a specific field.
    pub fn has_field(&self, type_name: &str, field_name: &str) -> Result<bool> {
        let info = self.type_registry.type_by_name(type_name)?;
        Ok(info.has_field(field_name))
    }

    /// Number of declared fields.
    pub fn field_count(&self, type_name: &str) -> Result<usize> {
        let info = self.type_registry.type_by_name(type_name)?;
        Ok(info.field_count())
    }

    /// Number of declared methods.
    pub fn method_count(&self, type_name: &str) -> Result<usize> {
        let info = self.type_registry.type_by_name(type_name)?;
        Ok(info.method_count())
    }

    /// Field information as (name, simple type name) pairs, in declaration
    /// order.
    pub fn reflect_fields(&self, type_name: &str) -> Result<Vec<(String, String)>> {
        let info = self.type_registry.type_by_name(type_name)?;
        Ok(info
            .fields
            .iter()
            .map(|field| (field.name.clone(), field.ty.simple.clone()))
            .collect())
    }

    /// The declared type of a specific field.
    pub fn field_type(&self, type_name: &str, field_name: &str) -> Result<TypeRef> {
        let info = self.type_registry.type_by_name(type_name)?;
        info.field(field_name)
            .map(|field| field.ty.clone())
            .ok_or_else(|| Error::field_not_found(info.name.as_str(), field_name))
    }
}
