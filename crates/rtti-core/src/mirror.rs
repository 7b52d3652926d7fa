//! Instance views with access-checked field reads.

use crate::descriptor::{FieldInfo, TypeInfo, Visibility};
use crate::error::{Error, Result};
use crate::reflect::Reflect;
use crate::registry::{AccessPolicy, TypeRegistry};
use crate::value::Value;

/// Pairs a live instance with its registered descriptor.
pub struct Mirror<'a> {
    instance: &'a dyn Reflect,
    info: TypeInfo,
    registry: &'a TypeRegistry,
}

impl<'a> Mirror<'a> {
    /// Resolve the instance's descriptor through the registry.
    pub fn of(instance: &'a dyn Reflect, registry: &'a TypeRegistry) -> Result<Self> {
        let info = registry.type_by_name(instance.type_name())?;
        Ok(Self {
            instance,
            info,
            registry,
        })
    }

    pub fn type_info(&self) -> &TypeInfo {
        &self.info
    }

    /// View of one declared field on this instance.
    pub fn field(&self, name: &str) -> Result<FieldMirror<'_>> {
        let field = self
            .info
            .field(name)
            .cloned()
            .ok_or_else(|| Error::field_not_found(self.info.name.as_str(), name))?;
        Ok(FieldMirror {
            mirror: self,
            field,
            accessible: false,
        })
    }
}

/// One field of a mirrored instance.
///
/// Reading a non-`pub` field requires requesting the accessibility override
/// first; both the request and an unprivileged read can fail with
/// [`Error::AccessDenied`], and callers must propagate that.
pub struct FieldMirror<'a> {
    mirror: &'a Mirror<'a>,
    field: FieldInfo,
    accessible: bool,
}

impl FieldMirror<'_> {
    pub fn info(&self) -> &FieldInfo {
        &self.field
    }

    /// Request (or drop) the visibility override for this field. The
    /// registry's policy decides whether the request is granted.
    pub fn set_accessible(&mut self, accessible: bool) -> Result<()> {
        if accessible && self.mirror.registry.policy() == AccessPolicy::Restricted {
            return Err(Error::access_denied(
                self.mirror.info.name.as_str(),
                self.field.name.as_str(),
            ));
        }
        self.accessible = accessible;
        Ok(())
    }

    /// Read the field's current value from the instance.
    pub fn get(&self) -> Result<Value> {
        if self.field.modifiers.vis != Visibility::Pub && !self.accessible {
            return Err(Error::access_denied(
                self.mirror.info.name.as_str(),
                self.field.name.as_str(),
            ));
        }
        self.mirror.instance.field(&self.field.name).ok_or_else(|| {
            Error::field_not_found(self.mirror.info.name.as_str(), self.field.name.as_str())
        })
    }
}
