//! Java naming conventions and primitive tables for the packetgen code
//! generator.
//!
//! The generator emits Java source for a described communication schema
//! (structs, enums, fields). This crate owns the Java side of that
//! translation: which Java type a schema primitive maps to, and how
//! human-readable schema labels become Java identifiers.

mod error;
mod naming;
mod primitive;

pub use error::{Error, Result};
pub use naming::{enum_element, field_name, is_reserved, safe_name, type_name, variable_name};
pub use primitive::{JavaPrimitive, PrimitiveType, SchemaType};
