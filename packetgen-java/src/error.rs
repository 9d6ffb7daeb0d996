use miette::Diagnostic;
use thiserror::Error;

/// Result type for Java naming operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("unknown primitive type '{name}'")]
    #[diagnostic(
        code(packetgen::unknown_primitive),
        help(
            "valid types are: int8_t, int16_t, int32_t, uint8_t, uint16_t, uint32_t, float, char, Bool"
        )
    )]
    UnknownPrimitive { name: String },

    #[error("cannot derive a variable name from '{input}'")]
    #[diagnostic(
        code(packetgen::empty_variable_name),
        help("variable descriptions must contain at least one non-space character")
    )]
    EmptyVariableName { input: String },
}
