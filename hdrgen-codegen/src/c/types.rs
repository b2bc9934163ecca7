//! Constant, typedef and forward declaration generation.

use crate::c::c_type;
use crate::naming::NamingPolicy;
use hdrgen_schema::ir::SchemaIr;

/// Generator for constants, value typedefs, object handles and structure
/// forward declarations.
pub struct TypeGenerator<'a> {
    ir: &'a SchemaIr,
    naming: &'a NamingPolicy,
}

impl<'a> TypeGenerator<'a> {
    /// Creates a new type generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr, naming: &'a NamingPolicy) -> Self {
        Self { ir, naming }
    }

    /// Generates one `#define` per constant, sorted by name.
    #[must_use]
    pub fn constants(&self) -> String {
        let mut constants: Vec<_> = self.ir.schema.constants.iter().collect();
        constants.sort_by(|a, b| a.name.cmp(&b.name));

        let mut output = String::new();
        for constant in &constants {
            output.push_str(&format!(
                "#define {} ({})\n",
                self.naming.constant_name(&constant.name),
                constant.literal()
            ));
        }
        finish_section(output)
    }

    /// Generates value typedefs in reverse name order.
    #[must_use]
    pub fn value_types(&self) -> String {
        let mut values: Vec<_> = self.ir.schema.value_types().collect();
        values.sort_by(|a, b| b.name.cmp(&a.name));

        let mut output = String::new();
        for value in values {
            output.push_str(&format!(
                "typedef {} {};\n",
                c_type(self.ir, self.naming, &value.underlying),
                self.naming.type_name(&value.name)
            ));
        }
        finish_section(output)
    }

    /// Generates opaque handle typedefs, sorted by name.
    #[must_use]
    pub fn object_handles(&self) -> String {
        let mut objects: Vec<_> = self.ir.schema.objects.iter().collect();
        objects.sort_by(|a, b| a.name.cmp(&b.name));

        let attribute = self.naming.object_attribute();
        let mut output = String::new();
        for object in objects {
            output.push_str(&format!(
                "typedef struct {}* {} {};\n",
                self.naming.object_impl(&object.name),
                self.naming.type_name(&object.name),
                attribute
            ));
        }
        finish_section(output)
    }

    /// Generates structure forward declarations in declaration order.
    #[must_use]
    pub fn forward_declarations(&self) -> String {
        if self.ir.struct_order().is_empty() {
            return String::new();
        }

        let mut output = String::from("// Structure forward declarations\n");
        for name in self.ir.struct_order() {
            output.push_str(&format!("struct {};\n", self.naming.type_name(name)));
        }
        output.push('\n');
        output
    }
}

fn finish_section(mut output: String) -> String {
    if !output.is_empty() {
        output.push('\n');
    }
    output
}
