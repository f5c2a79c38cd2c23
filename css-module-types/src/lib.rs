//! css-module-types library
//!
//! Generates TypeScript declaration files for CSS Modules so editors can
//! autocomplete `styles.className` imports.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod error;
pub mod observability;
pub mod templates;
pub mod typegen;

pub use config::GeneratorConfig;
pub use error::{Result, TypegenError};
pub use templates::DeclarationTemplate;
pub use typegen::{GeneratedFile, StyleTypeGenerator};
