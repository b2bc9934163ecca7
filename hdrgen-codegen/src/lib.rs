//! # hdrgen Codegen
//!
//! C header generation from API descriptions.
//!
//! This crate provides:
//! - A naming policy deriving every emitted symbol from the schema prefix
//! - Constant, typedef, enum, bitmask and structure rendering
//! - Function pointer, proc typedef and exported declaration rendering
//! - File and string entry points

pub mod c;
pub mod error;
pub mod generator;
pub mod naming;

pub use error::CodegenError;
pub use generator::Generator;
pub use naming::NamingPolicy;

/// Generates a C header from an XML API description.
///
/// # Arguments
/// * `xml` - API description content
///
/// # Returns
/// Generated header as a string.
///
/// # Errors
/// Returns `CodegenError` if parsing fails or structures embed each other
/// in a cycle.
pub fn generate_from_xml(xml: &str) -> Result<String, CodegenError> {
    let schema = hdrgen_schema::parse_schema(xml)?;
    let ir = hdrgen_schema::SchemaIr::from_schema(&schema)?;
    let generator = Generator::new(&ir);
    Ok(generator.generate())
}

/// Generates a C header from an XML API description file.
///
/// # Arguments
/// * `path` - Path to the API description
///
/// # Returns
/// Generated header as a string.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or resolution fails.
pub fn generate_from_file(path: &std::path::Path) -> Result<String, CodegenError> {
    let xml = std::fs::read_to_string(path)?;
    generate_from_xml(&xml)
}
