//! End-to-end checks of the Java naming surface.

use packetgen_java::{Error, JavaPrimitive, PrimitiveType, enum_element, type_name, variable_name};

#[test]
fn canonical_primitives_map_to_java_types() {
    assert_eq!(type_name("int8_t"), "int");
    assert_eq!(type_name("int16_t"), "int");
    assert_eq!(type_name("int32_t"), "int");
    assert_eq!(type_name("uint8_t"), "int");
    assert_eq!(type_name("uint16_t"), "int");
    assert_eq!(type_name("uint32_t"), "int");
    assert_eq!(type_name("float"), "float");
    assert_eq!(type_name("char"), "char");
    assert_eq!(type_name("Bool"), "boolean");
}

#[test]
fn user_defined_names_become_upper_camel_case() {
    assert_eq!(type_name("motor driver"), "MotorDriver");
    assert_eq!(type_name("robot position"), "RobotPosition");
}

#[test]
fn identifier_casing_matches_java_conventions() {
    assert_eq!(variable_name("motor speed").unwrap(), "motorSpeed");
    assert_eq!(variable_name("Id").unwrap(), "id");
    assert_eq!(enum_element("forward left"), "FORWARD_LEFT");
    assert_eq!(enum_element("idle"), "IDLE");
}

#[test]
fn empty_descriptions_are_rejected() {
    let err = variable_name("").unwrap_err();
    assert!(matches!(err, Error::EmptyVariableName { .. }));
}

#[test]
fn unknown_primitives_surface_an_error() {
    let err = JavaPrimitive::lookup("uint64_t").unwrap_err();
    assert!(matches!(err, Error::UnknownPrimitive { .. }));
}

#[test]
fn primitive_listing_is_stable() {
    let listing: Vec<String> = JavaPrimitive::all()
        .iter()
        .map(|p| format!("{} {} {} {}", p.name, p.java_type, p.storage_type, p.size))
        .collect();

    insta::assert_snapshot!(listing.join("\n"), @r"
Bool boolean boolean 1
Char char byte 1
Float float float 4
Int16 int short 2
Int32 int int 4
Int8 int byte 1
Uint16 int short 2
Uint32 int int 4
Uint8 int byte 1
");
}

#[test]
fn schema_identifiers_deserialize_to_primitives() {
    let ty: PrimitiveType = serde_json::from_str("\"int16_t\"").unwrap();
    assert_eq!(ty, PrimitiveType::Int16);
    assert_eq!(
        serde_json::to_string(&PrimitiveType::Uint32).unwrap(),
        "\"uint32_t\""
    );
}
