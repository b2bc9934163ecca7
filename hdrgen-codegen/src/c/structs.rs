//! Structure body generation.

use crate::c::{c_type, declarator};
use crate::naming::NamingPolicy;
use hdrgen_schema::ir::SchemaIr;
use hdrgen_schema::types::{ChainDirection, Extensibility, StructDef, StructMember};

/// Generator for structure definitions.
pub struct StructGenerator<'a> {
    ir: &'a SchemaIr,
    naming: &'a NamingPolicy,
}

impl<'a> StructGenerator<'a> {
    /// Creates a new structure generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr, naming: &'a NamingPolicy) -> Self {
        Self { ir, naming }
    }

    /// Generates the chain header structures and every structure body in
    /// declaration order.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = self.chain_headers();
        for def in self.ir.structs_in_order() {
            output.push_str(&self.generate_struct(def));
        }
        output
    }

    /// Generates `ChainedStruct` and `ChainedStructOut`.
    fn chain_headers(&self) -> String {
        let attribute = self.naming.structure_attribute();
        let s_type = self.naming.type_name("SType");
        let mut output = String::new();

        for (name, qualifier) in [
            (self.naming.chained_struct(), " const"),
            (self.naming.chained_struct_out(), ""),
        ] {
            output.push_str(&format!("typedef struct {} {{\n", name));
            output.push_str(&format!("    struct {}{} * next;\n", name, qualifier));
            output.push_str(&format!("    {} sType;\n", s_type));
            output.push_str(&format!("}} {} {};\n\n", name, attribute));
        }

        output
    }

    /// Generates one structure body.
    fn generate_struct(&self, def: &StructDef) -> String {
        let type_name = self.naming.type_name(&def.name);
        let mut output = String::new();

        if !def.chain_roots.is_empty() {
            let roots: Vec<String> = def
                .chain_roots
                .iter()
                .map(|root| self.naming.type_name(root))
                .collect();
            output.push_str(&format!("// Can be chained in {}\n", roots.join(", ")));
        }

        output.push_str(&format!("typedef struct {} {{\n", type_name));
        for field in self.chain_fields(def) {
            output.push_str(&format!("    {};\n", field));
        }
        for member in &def.members {
            output.push_str(&format!("    {};\n", self.member(member)));
        }
        output.push_str(&format!(
            "}} {} {};\n\n",
            type_name,
            self.naming.structure_attribute()
        ));

        output
    }

    /// Synthesized leading fields for extension chains.
    fn chain_fields(&self, def: &StructDef) -> Vec<String> {
        let mut fields = Vec::new();
        if def.extensible == Extensibility::In {
            fields.push(format!(
                "{} const * nextInChain",
                self.naming.chained_struct()
            ));
        }
        if def.chained == ChainDirection::In {
            fields.push(format!("{} chain", self.naming.chained_struct()));
        }
        if def.chained == ChainDirection::Out || def.extensible == Extensibility::Out {
            fields.push(format!(
                "{} * nextInChain",
                self.naming.chained_struct_out()
            ));
        }
        fields
    }

    fn member(&self, member: &StructMember) -> String {
        let mut qualifiers = Vec::new();
        if member.optional {
            qualifiers.push(self.naming.nullable());
        }
        declarator(
            qualifiers,
            c_type(self.ir, self.naming, &member.type_ref),
            member.annotation.as_deref(),
            &member.name,
        )
    }
}
