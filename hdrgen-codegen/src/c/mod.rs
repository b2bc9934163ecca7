//! C header generation modules.

pub mod enums;
pub mod functions;
pub mod preamble;
pub mod structs;
pub mod types;

pub use enums::EnumGenerator;
pub use functions::{FunctionGenerator, Signature, SignatureMode, signature};
pub use preamble::PreambleGenerator;
pub use structs::StructGenerator;
pub use types::TypeGenerator;

use crate::naming::NamingPolicy;
use hdrgen_schema::ir::SchemaIr;
use hdrgen_schema::resolve::TypeRef;

/// Renders a type reference as a C type name.
///
/// Primitives pass through verbatim. References get the naming prefix, and
/// bitmasks resolve to their `Flags` scalar rather than the enum itself.
#[must_use]
pub fn c_type(ir: &SchemaIr, naming: &NamingPolicy, type_ref: &TypeRef) -> String {
    match type_ref {
        TypeRef::Primitive(name) => name.clone(),
        TypeRef::Reference(name) if ir.is_bitmask(type_ref) => naming.flags_name(name),
        TypeRef::Reference(name) => naming.type_name(name),
    }
}

/// Joins the parts of a variable declaration: qualifiers, type, optional
/// annotation and name.
pub(crate) fn declarator(
    qualifiers: Vec<String>,
    c_type: String,
    annotation: Option<&str>,
    name: &str,
) -> String {
    let mut parts = qualifiers;
    parts.push(c_type);
    if let Some(annotation) = annotation.filter(|a| !a.trim().is_empty()) {
        parts.push(annotation.trim().to_string());
    }
    parts.push(name.to_string());
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use hdrgen_schema::parser::parse_schema;

    fn test_ir() -> SchemaIr {
        let xml = r#"<api>
    <metadata><prefix><c>WGPU</c></prefix></metadata>
    <types>
        <value name="Bool" type="uint32_t"/>
        <bitmask name="ColorWriteMask"><entry name="Red" value="1"/></bitmask>
        <struct name="Color"><member name="r" type="double"/></struct>
    </types>
</api>"#;
        let schema = parse_schema(xml).expect("Failed to parse");
        SchemaIr::from_schema(&schema).expect("Failed to resolve")
    }

    #[test]
    fn test_c_type() {
        let ir = test_ir();
        let naming = NamingPolicy::new("WGPU");

        assert_eq!(c_type(&ir, &naming, &TypeRef::resolve("uint32_t")), "uint32_t");
        assert_eq!(c_type(&ir, &naming, &TypeRef::resolve("Color")), "WGPUColor");
        assert_eq!(
            c_type(&ir, &naming, &TypeRef::resolve("ColorWriteMask")),
            "WGPUColorWriteMaskFlags"
        );
        assert_eq!(c_type(&ir, &naming, &TypeRef::resolve("bool")), "WGPUBool");
    }

    #[test]
    fn test_unknown_reference_passes_through() {
        let ir = test_ir();
        let naming = NamingPolicy::new("WGPU");
        assert_eq!(c_type(&ir, &naming, &TypeRef::resolve("Mystery")), "WGPUMystery");
    }

    #[test]
    fn test_declarator() {
        assert_eq!(
            declarator(
                vec!["WGPU_NULLABLE".to_string()],
                "char".to_string(),
                Some("const *"),
                "label"
            ),
            "WGPU_NULLABLE char const * label"
        );
        assert_eq!(
            declarator(Vec::new(), "uint32_t".to_string(), Some(""), "count"),
            "uint32_t count"
        );
        assert_eq!(
            declarator(Vec::new(), "double".to_string(), None, "r"),
            "double r"
        );
    }
}
