//! Intermediate representation for header generation.
//!
//! [`SchemaIr`] couples the loaded schema with everything the renderer needs
//! to ask about it: what kind of entity a name refers to, and the order in
//! which structures must be declared.

use crate::error::SchemaError;
use crate::order::{struct_depths, struct_order};
use crate::resolve::TypeRef;
use crate::types::{Schema, StructDef, TypeDef};
use std::collections::HashMap;

/// Kind of a named schema entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Named scalar.
    Value,
    /// Enumeration.
    Enum,
    /// Bitmask.
    Bitmask,
    /// Structure.
    Struct,
    /// Opaque object handle.
    Object,
    /// Function pointer type.
    FunctionPointer,
}

/// Resolved, ordered view of a schema.
#[derive(Debug, Clone)]
pub struct SchemaIr {
    /// The loaded schema.
    pub schema: Schema,
    /// Entity kind by name.
    kinds: HashMap<String, EntityKind>,
    /// Nesting depth by structure name.
    depths: HashMap<String, usize>,
    /// Structure names in declaration order.
    struct_order: Vec<String>,
}

impl SchemaIr {
    /// Creates an intermediate representation from a loaded schema.
    ///
    /// # Errors
    /// Returns `SchemaError::CircularReference` if structures embed each
    /// other in a cycle.
    pub fn from_schema(schema: &Schema) -> Result<Self, SchemaError> {
        let mut kinds = HashMap::new();

        for type_def in &schema.types {
            let kind = match type_def {
                TypeDef::Value(_) => EntityKind::Value,
                TypeDef::Enum(_) => EntityKind::Enum,
                TypeDef::Bitmask(_) => EntityKind::Bitmask,
                TypeDef::Struct(_) => EntityKind::Struct,
            };
            kinds.insert(type_def.name().to_string(), kind);
        }
        for object in &schema.objects {
            kinds.insert(object.name.clone(), EntityKind::Object);
        }
        for func in &schema.function_pointers {
            kinds.insert(func.name.clone(), EntityKind::FunctionPointer);
        }

        let depths = struct_depths(schema)?;
        let struct_order = struct_order(schema, &depths);

        tracing::debug!(order = ?struct_order, "computed structure declaration order");

        Ok(Self {
            schema: schema.clone(),
            kinds,
            depths,
            struct_order,
        })
    }

    /// Returns the kind of the entity a name refers to.
    #[must_use]
    pub fn kind_of(&self, name: &str) -> Option<EntityKind> {
        self.kinds.get(name).copied()
    }

    /// Returns the kind of the entity a type refers to, if it is a reference.
    #[must_use]
    pub fn kind_of_type(&self, type_ref: &TypeRef) -> Option<EntityKind> {
        type_ref.as_reference().and_then(|name| self.kind_of(name))
    }

    /// Returns true if the type refers to a structure.
    #[must_use]
    pub fn is_struct(&self, type_ref: &TypeRef) -> bool {
        self.kind_of_type(type_ref) == Some(EntityKind::Struct)
    }

    /// Returns true if the type refers to a bitmask.
    #[must_use]
    pub fn is_bitmask(&self, type_ref: &TypeRef) -> bool {
        self.kind_of_type(type_ref) == Some(EntityKind::Bitmask)
    }

    /// Returns the nesting depth of a structure.
    #[must_use]
    pub fn depth(&self, name: &str) -> Option<usize> {
        self.depths.get(name).copied()
    }

    /// Returns structure names in declaration order.
    #[must_use]
    pub fn struct_order(&self) -> &[String] {
        &self.struct_order
    }

    /// Iterates over structures in declaration order.
    pub fn structs_in_order(&self) -> impl Iterator<Item = &StructDef> {
        self.struct_order
            .iter()
            .filter_map(|name| self.schema.get_struct(name))
    }
}

/// Converts a name to SCREAMING_SNAKE_CASE.
///
/// Already upper-case names pass through unchanged.
#[must_use]
pub fn to_screaming_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;
    for c in s.chars() {
        if c.is_uppercase()
            && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit())
        {
            result.push('_');
        }
        result.push(c.to_ascii_uppercase());
        prev = Some(c);
    }
    result
}

/// Lower-cases the first character of a name.
#[must_use]
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_schema;

    const SCHEMA: &str = r#"<api>
    <metadata><prefix><c>WGPU</c></prefix></metadata>
    <types>
        <value name="Flags" type="uint32_t"/>
        <enum name="TextureFormat"><entry name="R8Unorm" value="1"/></enum>
        <bitmask name="TextureUsage"><entry name="CopySrc" value="1"/></bitmask>
        <struct name="Extent3D"><member name="width" type="uint32_t"/></struct>
        <struct name="TextureDescriptor">
            <member name="usage" type="TextureUsage"/>
            <member name="size" type="Extent3D"/>
        </struct>
    </types>
    <function_pointers><function name="ProcCallback"/></function_pointers>
    <objects><object name="Texture"/></objects>
</api>"#;

    #[test]
    fn test_to_screaming_snake_case() {
        assert_eq!(to_screaming_snake_case("WholeSize"), "WHOLE_SIZE");
        assert_eq!(to_screaming_snake_case("WHOLE_SIZE"), "WHOLE_SIZE");
        assert_eq!(
            to_screaming_snake_case("arrayLayerCountUndefined"),
            "ARRAY_LAYER_COUNT_UNDEFINED"
        );
        assert_eq!(to_screaming_snake_case("MaxSize3D"), "MAX_SIZE3_D");
    }

    #[test]
    fn test_lower_first() {
        assert_eq!(lower_first("Device"), "device");
        assert_eq!(lower_first("RenderPassEncoder"), "renderPassEncoder");
        assert_eq!(lower_first(""), "");
    }

    #[test]
    fn test_kinds() {
        let schema = parse_schema(SCHEMA).expect("Failed to parse");
        let ir = SchemaIr::from_schema(&schema).expect("Failed to resolve");

        assert_eq!(ir.kind_of("Flags"), Some(EntityKind::Value));
        assert_eq!(ir.kind_of("TextureFormat"), Some(EntityKind::Enum));
        assert_eq!(ir.kind_of("TextureUsage"), Some(EntityKind::Bitmask));
        assert_eq!(ir.kind_of("Extent3D"), Some(EntityKind::Struct));
        assert_eq!(ir.kind_of("Texture"), Some(EntityKind::Object));
        assert_eq!(ir.kind_of("ProcCallback"), Some(EntityKind::FunctionPointer));
        assert_eq!(ir.kind_of("Missing"), None);
    }

    #[test]
    fn test_type_queries() {
        let schema = parse_schema(SCHEMA).expect("Failed to parse");
        let ir = SchemaIr::from_schema(&schema).expect("Failed to resolve");

        assert!(ir.is_struct(&TypeRef::resolve("Extent3D")));
        assert!(!ir.is_struct(&TypeRef::resolve("Texture")));
        assert!(ir.is_bitmask(&TypeRef::resolve("TextureUsage")));
        assert!(!ir.is_bitmask(&TypeRef::resolve("uint32_t")));
        assert_eq!(ir.kind_of_type(&TypeRef::resolve("uint32_t")), None);
    }

    #[test]
    fn test_struct_order() {
        let schema = parse_schema(SCHEMA).expect("Failed to parse");
        let ir = SchemaIr::from_schema(&schema).expect("Failed to resolve");

        assert_eq!(ir.struct_order(), ["Extent3D", "TextureDescriptor"]);
        assert_eq!(ir.depth("TextureDescriptor"), Some(1));
        let names: Vec<&str> = ir.structs_in_order().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Extent3D", "TextureDescriptor"]);
    }

    #[test]
    fn test_cycle_rejected() {
        let xml = r#"<api>
    <metadata><prefix><c>WGPU</c></prefix></metadata>
    <types>
        <struct name="A"><member name="b" type="B"/></struct>
        <struct name="B"><member name="a" type="A"/></struct>
    </types>
</api>"#;
        let schema = parse_schema(xml).expect("Failed to parse");
        assert!(matches!(
            SchemaIr::from_schema(&schema),
            Err(SchemaError::CircularReference { .. })
        ));
    }
}
