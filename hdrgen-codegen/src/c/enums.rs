//! Enum and bitmask generation.

use crate::c::c_type;
use crate::naming::{FORCE32_MEMBER, FORCE32_VALUE, NamingPolicy};
use hdrgen_schema::ir::SchemaIr;
use hdrgen_schema::resolve::{FLAGS_VALUE_TYPE, TypeRef};
use hdrgen_schema::types::NamedValue;

/// Generator for enum and bitmask definitions.
pub struct EnumGenerator<'a> {
    ir: &'a SchemaIr,
    naming: &'a NamingPolicy,
}

impl<'a> EnumGenerator<'a> {
    /// Creates a new enum generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr, naming: &'a NamingPolicy) -> Self {
        Self { ir, naming }
    }

    /// Generates all enum definitions in document order.
    #[must_use]
    pub fn enums(&self) -> String {
        let mut output = String::new();
        for def in self.ir.schema.enums() {
            output.push_str(&self.generate_enum(&def.name, &def.values));
            output.push('\n');
        }
        output
    }

    /// Generates all bitmask definitions in document order, each followed by
    /// its flags typedef.
    #[must_use]
    pub fn bitmasks(&self) -> String {
        let mut output = String::new();
        for def in self.ir.schema.bitmasks() {
            output.push_str(&self.generate_enum(&def.name, &def.values));
            output.push_str(&format!(
                "typedef {} {} {};\n",
                c_type(self.ir, self.naming, &TypeRef::reference(FLAGS_VALUE_TYPE)),
                self.naming.flags_name(&def.name),
                self.naming.enum_attribute()
            ));
            output.push('\n');
        }
        output
    }

    /// Generates a `typedef enum` body ending with the 32-bit sentinel.
    fn generate_enum(&self, name: &str, values: &[NamedValue]) -> String {
        let type_name = self.naming.type_name(name);
        let mut output = String::new();

        output.push_str(&format!("typedef enum {} {{\n", type_name));
        for value in values {
            output.push_str(&format!(
                "    {} = {},\n",
                self.naming.enum_member(name, &value.name),
                hex_literal(value)
            ));
        }
        output.push_str(&format!(
            "    {} = {}\n",
            self.naming.enum_member(name, FORCE32_MEMBER),
            FORCE32_VALUE
        ));
        output.push_str(&format!(
            "}} {} {};\n",
            type_name,
            self.naming.enum_attribute()
        ));
        output
    }
}

/// Formats a value as `0x` plus eight upper-case hex digits.
///
/// Literals that are not plain decimal or hex numbers, or that do not fit in
/// 32 bits, are reproduced as written.
fn hex_literal(value: &NamedValue) -> String {
    match value.as_u64().and_then(|n| u32::try_from(n).ok()) {
        Some(n) => format!("0x{:08X}", n),
        None => value.value.clone(),
    }
}
