//! Central registry for type descriptors.

use crate::descriptor::{TypeId, TypeInfo};
use crate::error::{Error, Result};
use crate::reflect::Reflect;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;

/// Whether privileged reads of non-`pub` fields may be requested.
///
/// The analogue of a runtime granting or refusing an accessibility override:
/// under `Restricted`, `set_accessible(true)` on a field mirror fails with
/// [`Error::AccessDenied`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessPolicy {
    #[default]
    Permissive,
    Restricted,
}

/// Registry of type descriptors, keyed by id and by name. Both the simple
/// and the fully-qualified name resolve in lookups.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: RwLock<HashMap<TypeId, TypeInfo>>,
    name_to_id: RwLock<HashMap<String, TypeId>>,
    policy: RwLock<AccessPolicy>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: AccessPolicy) -> Self {
        let registry = Self::default();
        registry.set_policy(policy);
        registry
    }

    /// Register a type's metadata table.
    pub fn register<T: Reflect>(&self) -> TypeId {
        self.register_type(T::type_info())
    }

    /// Register a pre-built descriptor.
    pub fn register_type(&self, type_info: TypeInfo) -> TypeId {
        let mut types = self.types.write().unwrap();
        let mut name_to_id = self.name_to_id.write().unwrap();

        debug!(name = %type_info.name, id = type_info.id.0, "registering type");
        name_to_id.insert(type_info.name.clone(), type_info.id);
        name_to_id.insert(type_info.qualified_name.clone(), type_info.id);
        let id = type_info.id;
        types.insert(id, type_info);
        id
    }

    /// Get type information by id.
    pub fn get_type_info(&self, type_id: TypeId) -> Option<TypeInfo> {
        self.types.read().unwrap().get(&type_id).cloned()
    }

    /// Look a descriptor up by (simple or qualified) name. This is the
    /// by-name path: unknown names are an error, not an empty result.
    pub fn type_by_name(&self, name: &str) -> Result<TypeInfo> {
        let name_to_id = self.name_to_id.read().unwrap();
        let type_id = name_to_id
            .get(name)
            .copied()
            .ok_or_else(|| Error::TypeNotFound(name.to_string()))?;
        drop(name_to_id);
        self.get_type_info(type_id)
            .ok_or_else(|| Error::TypeNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.name_to_id.read().unwrap().contains_key(name)
    }

    pub fn set_policy(&self, policy: AccessPolicy) {
        *self.policy.write().unwrap() = policy;
    }

    pub fn policy(&self) -> AccessPolicy {
        *self.policy.read().unwrap()
    }

    /// All registered types, as (id, simple name) pairs.
    pub fn list_types(&self) -> Vec<(TypeId, String)> {
        let types = self.types.read().unwrap();
        types
            .iter()
            .map(|(id, info)| (*id, info.name.clone()))
            .collect()
    }
}
