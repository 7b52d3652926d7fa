use crate::descriptor::TypeInfo;
use crate::value::Value;

/// Metadata surface every introspectable type provides.
///
/// `type_info` plays the role a runtime reflection API would: it builds the
/// table of declared members once, at registration time. Instance-side,
/// `field` hands out raw values without any access check; visibility is
/// enforced by [`crate::Mirror`], not here.
pub trait Reflect {
    /// Build the metadata table describing this type's declared shape.
    fn type_info() -> TypeInfo
    where
        Self: Sized;

    /// Name under which this instance's descriptor is registered.
    fn type_name(&self) -> &'static str;

    /// Raw read of a declared field. `None` for fields this type does not
    /// declare (inherited fields belong to the base type's table).
    fn field(&self, name: &str) -> Option<Value>;
}
