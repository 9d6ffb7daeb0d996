//! Java-specific naming conventions.

use packetgen_core::to_lower_camel_case;

use crate::error::{Error, Result};
use crate::primitive::SchemaType;

/// Java type name for a schema type identifier.
///
/// Canonical primitives map to their Java type ("int32_t" -> "int"); user-
/// defined names become UpperCamelCase ("motor driver" -> "MotorDriver").
pub fn type_name(name: &str) -> String {
    SchemaType::parse(name).java_type_name()
}

/// Java variable name for a field description ("motor speed" -> "motorSpeed").
///
/// Input that yields no identifier characters is rejected rather than
/// producing an empty name.
pub fn variable_name(name: &str) -> Result<String> {
    let ident = to_lower_camel_case(name);
    if ident.is_empty() {
        return Err(Error::EmptyVariableName {
            input: name.to_string(),
        });
    }
    Ok(ident)
}

/// Java enum constant for a value label ("forward left" -> "FORWARD_LEFT").
///
/// Only spaces are normalized; other punctuation passes through unchanged.
pub fn enum_element(name: &str) -> String {
    name.to_uppercase().replace(' ', "_")
}

/// Java reserved words (keywords plus the `true`, `false` and `null`
/// literals), none of which may appear as a generated identifier.
const RESERVED_WORDS: &[&str] = &[
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "try",
    "void",
    "volatile",
    "while",
    "true",
    "false",
    "null",
];

fn escape_java_reserved(name: &str) -> String {
    format!("_{}", name)
}

/// Check if a name is a Java reserved word.
pub fn is_reserved(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Get a safe Java identifier, escaping reserved words if necessary.
pub fn safe_name(name: &str) -> String {
    if is_reserved(name) {
        escape_java_reserved(name)
    } else {
        name.to_string()
    }
}

/// Java field name for a field description: [`variable_name`] made safe
/// against reserved words ("new" -> "_new").
pub fn field_name(name: &str) -> Result<String> {
    variable_name(name).map(|ident| safe_name(&ident))
}
