//! Header generator orchestration.

use crate::c::{EnumGenerator, FunctionGenerator, PreambleGenerator, StructGenerator, TypeGenerator};
use crate::naming::NamingPolicy;
use hdrgen_schema::ir::SchemaIr;

/// Main header generator.
///
/// Renders the complete header in one pass over a resolved schema.
pub struct Generator<'a> {
    ir: &'a SchemaIr,
    naming: NamingPolicy,
    include_guard: Option<String>,
    extern_c: bool,
}

impl<'a> Generator<'a> {
    /// Creates a new generator for the given schema IR.
    #[must_use]
    pub fn new(ir: &'a SchemaIr) -> Self {
        Self {
            ir,
            naming: NamingPolicy::new(&ir.schema.prefix),
            include_guard: None,
            extern_c: true,
        }
    }

    /// Overrides the include guard macro.
    #[must_use]
    pub fn include_guard(mut self, guard: impl Into<String>) -> Self {
        self.include_guard = Some(guard.into());
        self
    }

    /// Enables or disables the `extern "C"` wrapper.
    #[must_use]
    pub fn extern_c(mut self, enabled: bool) -> Self {
        self.extern_c = enabled;
        self
    }

    /// Returns the naming policy derived from the schema prefix.
    #[must_use]
    pub fn naming(&self) -> &NamingPolicy {
        &self.naming
    }

    /// Generates the complete header.
    ///
    /// # Returns
    /// Generated C header as a string.
    #[must_use]
    pub fn generate(&self) -> String {
        let guard = self
            .include_guard
            .clone()
            .unwrap_or_else(|| self.naming.include_guard());

        let preamble = PreambleGenerator::new(&self.ir.schema.license, &self.naming);
        let types = TypeGenerator::new(self.ir, &self.naming);
        let enums = EnumGenerator::new(self.ir, &self.naming);
        let functions = FunctionGenerator::new(self.ir, &self.naming);
        let structs = StructGenerator::new(self.ir, &self.naming);

        let mut output = String::new();
        let mut section = |name: &str, text: String| {
            tracing::trace!(section = name, bytes = text.len(), "emitting section");
            output.push_str(&text);
        };

        section("license", preamble.license());
        section("guard", preamble.guard_open(&guard));
        section("export", preamble.export_macro());
        section("feature guards", preamble.feature_guards());
        section("includes", preamble.includes());
        section("constants", types.constants());
        section("value types", types.value_types());
        section("objects", types.object_handles());
        section("forward declarations", types.forward_declarations());
        section("enums", enums.enums());
        section("bitmasks", enums.bitmasks());
        section("function pointers", functions.function_pointers());
        section("structures", structs.generate());
        if self.extern_c {
            section("extern open", preamble.extern_c_open());
        }
        section("procs", functions.procs());
        section("declarations", functions.declarations());
        if self.extern_c {
            section("extern close", preamble.extern_c_close());
        }
        section("guard close", preamble.guard_close(&guard));

        tracing::info!(
            prefix = %self.ir.schema.prefix,
            bytes = output.len(),
            "generated header"
        );

        output
    }
}
