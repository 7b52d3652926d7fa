//! The canned introspection walkthrough.

use crate::menagerie::{Animal, Dog, Voice};
use rtti_core::{AccessPolicy, Mirror, Reporter, Result, TypeRegistry};
use std::io::Write;
use std::sync::Arc;
use tracing::debug;

/// Registry holding the example hierarchy's descriptors.
pub fn registry() -> Arc<TypeRegistry> {
    let registry = TypeRegistry::new();
    registry.register::<Animal>();
    registry.register::<Dog>();
    Arc::new(registry)
}

/// Run the full demonstration against `out`: exercise the dog, then report
/// every metadata category of its type.
///
/// Under [`AccessPolicy::Restricted`] the field-values report fails with an
/// access denial, which propagates out of here untouched.
pub fn run(out: &mut dyn Write, policy: AccessPolicy) -> Result<()> {
    let registry = registry();
    registry.set_policy(policy);

    let mut dog = Dog::new("Labradoodle");
    dog.set_name("Jack");
    dog.eat(&mut *out, "bone")?;
    dog.perform_voice(&mut *out)?;

    debug!("rendering full report for Dog");
    let mirror = Mirror::of(&dog, &registry)?;
    let mut reporter = Reporter::new(out);
    reporter.full_report(&mirror)?;
    Ok(())
}
