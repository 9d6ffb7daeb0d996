//! Core string utilities for the packetgen code generator.
//!
//! This crate provides the casing transforms shared by the language
//! backends. It is self-contained (no external dependencies beyond std).

mod case;

pub use case::{to_lower_camel_case, to_title_case, to_upper_camel_case};
