//! The kikv document profile: Dutch-language specification documents
//! published under Creative Commons licenses.

mod defaults;
pub mod headers;

pub use defaults::{license_info, lint_registry, resolve};
