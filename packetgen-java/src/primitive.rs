//! Primitive type table for the Java backend.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use packetgen_core::to_upper_camel_case;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Fixed-width scalar types recognized by the schema language.
///
/// This is the closed set of canonical identifiers a schema may use for
/// primitive fields. Use [`PrimitiveType::java`] or [`JavaPrimitive::lookup`]
/// to get the Java representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveType {
    #[serde(rename = "int8_t")]
    Int8,
    #[serde(rename = "int16_t")]
    Int16,
    #[serde(rename = "int32_t")]
    Int32,
    #[serde(rename = "uint8_t")]
    Uint8,
    #[serde(rename = "uint16_t")]
    Uint16,
    #[serde(rename = "uint32_t")]
    Uint32,
    #[serde(rename = "float")]
    Float,
    #[serde(rename = "char")]
    Char,
    #[serde(rename = "Bool")]
    Bool,
}

impl PrimitiveType {
    /// Every canonical primitive, in declaration order.
    pub const ALL: [PrimitiveType; 9] = [
        PrimitiveType::Int8,
        PrimitiveType::Int16,
        PrimitiveType::Int32,
        PrimitiveType::Uint8,
        PrimitiveType::Uint16,
        PrimitiveType::Uint32,
        PrimitiveType::Float,
        PrimitiveType::Char,
        PrimitiveType::Bool,
    ];

    /// Get the canonical identifier used in schema descriptions.
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveType::Int8 => "int8_t",
            PrimitiveType::Int16 => "int16_t",
            PrimitiveType::Int32 => "int32_t",
            PrimitiveType::Uint8 => "uint8_t",
            PrimitiveType::Uint16 => "uint16_t",
            PrimitiveType::Uint32 => "uint32_t",
            PrimitiveType::Float => "float",
            PrimitiveType::Char => "char",
            PrimitiveType::Bool => "Bool",
        }
    }

    /// The Java representation of this primitive.
    pub fn java(self) -> JavaPrimitive {
        match self {
            PrimitiveType::Int8 => JavaPrimitive {
                java_type: "int",
                name: "Int8",
                size: 1,
                storage_type: "byte",
                accessor: "",
            },
            PrimitiveType::Int16 => JavaPrimitive {
                java_type: "int",
                name: "Int16",
                size: 2,
                storage_type: "short",
                accessor: "Short",
            },
            PrimitiveType::Int32 => JavaPrimitive {
                java_type: "int",
                name: "Int32",
                size: 4,
                storage_type: "int",
                accessor: "Int",
            },
            PrimitiveType::Uint8 => JavaPrimitive {
                java_type: "int",
                name: "Uint8",
                size: 1,
                storage_type: "byte",
                accessor: "",
            },
            PrimitiveType::Uint16 => JavaPrimitive {
                java_type: "int",
                name: "Uint16",
                size: 2,
                storage_type: "short",
                accessor: "Short",
            },
            PrimitiveType::Uint32 => JavaPrimitive {
                java_type: "int",
                name: "Uint32",
                size: 4,
                storage_type: "int",
                accessor: "Int",
            },
            PrimitiveType::Float => JavaPrimitive {
                java_type: "float",
                name: "Float",
                size: 4,
                storage_type: "float",
                accessor: "Float",
            },
            PrimitiveType::Char => JavaPrimitive {
                java_type: "char",
                name: "Char",
                size: 1,
                storage_type: "byte",
                accessor: "",
            },
            PrimitiveType::Bool => JavaPrimitive {
                java_type: "boolean",
                name: "Bool",
                size: 1,
                storage_type: "boolean",
                accessor: "",
            },
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrimitiveType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "int8_t" => Ok(PrimitiveType::Int8),
            "int16_t" => Ok(PrimitiveType::Int16),
            "int32_t" => Ok(PrimitiveType::Int32),
            "uint8_t" => Ok(PrimitiveType::Uint8),
            "uint16_t" => Ok(PrimitiveType::Uint16),
            "uint32_t" => Ok(PrimitiveType::Uint32),
            "float" => Ok(PrimitiveType::Float),
            "char" => Ok(PrimitiveType::Char),
            "Bool" => Ok(PrimitiveType::Bool),
            _ => Err(Error::UnknownPrimitive {
                name: s.to_string(),
            }),
        }
    }
}

/// How a schema primitive is represented in generated Java.
///
/// The `accessor` suffix is consumed by the generator when it builds
/// byte-buffer accessor calls; nothing in this crate reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JavaPrimitive {
    /// Java type used in generated signatures (e.g. "int", "boolean").
    pub java_type: &'static str,
    /// Display name (e.g. "Int8", "Uint32").
    pub name: &'static str,
    /// Storage size in bytes.
    pub size: usize,
    /// Java storage type holding the value in the wire layer (e.g. "short").
    pub storage_type: &'static str,
    /// Suffix for building accessor method names (e.g. "Short"); empty when
    /// the plain accessor applies.
    pub accessor: &'static str,
}

impl JavaPrimitive {
    /// Look up the Java representation for a canonical identifier.
    pub fn lookup(name: &str) -> Result<JavaPrimitive> {
        name.parse::<PrimitiveType>().map(PrimitiveType::java)
    }

    /// All nine primitives, ordered by display name.
    pub fn all() -> Vec<JavaPrimitive> {
        let mut primitives: Vec<JavaPrimitive> =
            PrimitiveType::ALL.iter().map(|ty| ty.java()).collect();
        primitives.sort_by(|a, b| a.name_cmp(b.name));
        primitives
    }

    /// Order this primitive against a display name.
    ///
    /// Kept as an explicit comparator so listings can sort by name without
    /// a total-order impl on the record itself.
    pub fn name_cmp(&self, name: &str) -> Ordering {
        self.name.cmp(&name)
    }
}

/// A type reference in a schema: a known primitive or a user-defined name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaType {
    /// One of the nine canonical primitives.
    Primitive(PrimitiveType),
    /// A user-defined struct or enum name, possibly containing spaces.
    Named(String),
}

impl SchemaType {
    /// Classify a schema type identifier. Free-form names never fail; they
    /// become [`SchemaType::Named`].
    pub fn parse(name: &str) -> SchemaType {
        match name.parse::<PrimitiveType>() {
            Ok(ty) => SchemaType::Primitive(ty),
            Err(_) => SchemaType::Named(name.to_string()),
        }
    }

    /// The Java type name for this schema type.
    pub fn java_type_name(&self) -> String {
        match self {
            SchemaType::Primitive(ty) => ty.java().java_type.to_string(),
            SchemaType::Named(name) => to_upper_camel_case(name),
        }
    }
}
