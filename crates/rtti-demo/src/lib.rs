//! Example type hierarchy and canned walkthrough for the introspection
//! facility in `rtti-core`.

pub mod demo;
pub mod menagerie;

pub use menagerie::{Animal, Dog, Voice};
