//! Core building blocks for the library service: layered settings, the
//! module capability, and the static module registry.

pub mod module;
pub mod registry;
pub mod settings;

pub use module::{InitCtx, Migration, Module};
pub use registry::ModuleRegistry;
