//! Function pointer, proc typedef and exported declaration generation.
//!
//! All three share one signature builder, [`signature`], which differs only
//! in the [`SignatureMode`] it is given.

use crate::c::{c_type, declarator};
use crate::naming::NamingPolicy;
use hdrgen_schema::functions::{Argument, Function};
use hdrgen_schema::ir::{SchemaIr, lower_first};
use hdrgen_schema::resolve::{TypeRef, VOID};

/// Formatting switches for argument lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureMode {
    /// Emit the nullable guard before optional arguments.
    pub nullable: bool,
    /// Emit `struct` before structure-typed arguments.
    pub tag_structs: bool,
}

impl SignatureMode {
    /// Function pointer typedefs, which precede the structure bodies.
    pub const FUNCTION_POINTER: Self = Self {
        nullable: false,
        tag_structs: true,
    };

    /// Proc typedefs.
    pub const PROC: Self = Self {
        nullable: true,
        tag_structs: false,
    };

    /// Exported declarations.
    pub const DECLARATION: Self = Self {
        nullable: true,
        tag_structs: false,
    };
}

/// Rendered return type and parameter list of a function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// C return type.
    pub return_type: String,
    /// Individual parameter declarations.
    pub params: Vec<String>,
}

impl Signature {
    /// Joins the parameters, or `void` when there are none.
    #[must_use]
    pub fn parameter_list(&self) -> String {
        if self.params.is_empty() {
            VOID.to_string()
        } else {
            self.params.join(", ")
        }
    }
}

/// Builds the signature of `func` as a member of `owner`.
///
/// # Arguments
/// * `ir` - Resolved schema
/// * `naming` - Naming policy
/// * `owner` - Object or structure name, empty for free functions
/// * `func` - Function to render
/// * `mode` - Formatting switches
///
/// # Returns
/// The rendered return type and parameters.
#[must_use]
pub fn signature(
    ir: &SchemaIr,
    naming: &NamingPolicy,
    owner: &str,
    func: &Function,
    mode: SignatureMode,
) -> Signature {
    let mut params = Vec::with_capacity(func.args.len() + 3);

    if !owner.is_empty() {
        params.push(format!(
            "{} {}",
            c_type(ir, naming, &TypeRef::reference(owner)),
            lower_first(owner)
        ));
    }

    for arg in &func.args {
        params.push(argument(ir, naming, arg, mode));
    }

    if func.is_async {
        params.push(format!(
            "{} callback",
            c_type(ir, naming, &func.callback_type())
        ));
        params.push("void * userdata".to_string());
    }

    Signature {
        return_type: c_type(ir, naming, &func.return_type()),
        params,
    }
}

fn argument(ir: &SchemaIr, naming: &NamingPolicy, arg: &Argument, mode: SignatureMode) -> String {
    let mut qualifiers = Vec::new();
    if mode.nullable && arg.is_nullable() {
        qualifiers.push(naming.nullable());
    }
    if mode.tag_structs && ir.is_struct(&arg.type_ref) {
        qualifiers.push("struct".to_string());
    }

    declarator(
        qualifiers,
        c_type(ir, naming, &arg.type_ref),
        arg.annotation.as_deref(),
        &arg.name,
    )
}

/// Functions grouped by owner.
struct OwnerGroup {
    owner: String,
    functions: Vec<Function>,
}

/// Generator for function pointer typedefs, proc typedefs and declarations.
pub struct FunctionGenerator<'a> {
    ir: &'a SchemaIr,
    naming: &'a NamingPolicy,
}

impl<'a> FunctionGenerator<'a> {
    /// Creates a new function generator.
    #[must_use]
    pub fn new(ir: &'a SchemaIr, naming: &'a NamingPolicy) -> Self {
        Self { ir, naming }
    }

    /// Generates function pointer typedefs, sorted by name.
    #[must_use]
    pub fn function_pointers(&self) -> String {
        let mut pointers: Vec<_> = self.ir.schema.function_pointers.iter().collect();
        pointers.sort_by(|a, b| a.name.cmp(&b.name));

        let attribute = self.naming.function_attribute();
        let mut output = String::new();
        for func in &pointers {
            let sig = signature(self.ir, self.naming, "", func, SignatureMode::FUNCTION_POINTER);
            output.push_str(&format!(
                "typedef {} (*{})({}) {};\n",
                sig.return_type,
                self.naming.type_name(&func.name),
                sig.parameter_list(),
                attribute
            ));
        }
        if !output.is_empty() {
            output.push('\n');
        }
        output
    }

    /// Generates the proc typedef block.
    #[must_use]
    pub fn procs(&self) -> String {
        let guard = self.naming.skip_procs();
        let attribute = self.naming.function_attribute();

        let mut output = format!("#if !defined({})\n\n", guard);
        for group in self.owners() {
            if !group.owner.is_empty() {
                output.push_str(&format!("// Procs of {}\n", group.owner));
            }
            for func in &group.functions {
                let sig = signature(self.ir, self.naming, &group.owner, func, SignatureMode::PROC);
                output.push_str(&format!(
                    "typedef {} (*{})({}) {};\n",
                    sig.return_type,
                    self.naming.proc_name(&group.owner, &func.name),
                    sig.parameter_list(),
                    attribute
                ));
            }
            output.push('\n');
        }
        output.push_str(&format!("#endif  // !defined({})\n\n", guard));
        output
    }

    /// Generates the exported declaration block.
    #[must_use]
    pub fn declarations(&self) -> String {
        let guard = self.naming.skip_declarations();
        let export = self.naming.export_macro();
        let attribute = self.naming.function_attribute();

        let mut output = format!("#if !defined({})\n\n", guard);
        for group in self.owners() {
            if !group.owner.is_empty() {
                output.push_str(&format!("// Methods of {}\n", group.owner));
            }
            for func in &group.functions {
                let sig = signature(
                    self.ir,
                    self.naming,
                    &group.owner,
                    func,
                    SignatureMode::DECLARATION,
                );
                output.push_str(&format!(
                    "{} {} {}({}) {};\n",
                    export,
                    sig.return_type,
                    self.naming.function_name(&group.owner, &func.name),
                    sig.parameter_list(),
                    attribute
                ));
            }
            output.push('\n');
        }
        output.push_str(&format!("#endif  // !defined({})\n\n", guard));
        output
    }

    /// Collects non-empty owner groups: free functions, then objects by
    /// name, then structures with methods in declaration order.
    fn owners(&self) -> Vec<OwnerGroup> {
        let schema = &self.ir.schema;
        let mut groups = Vec::new();

        let mut free: Vec<Function> = schema.free_functions.clone();
        free.sort_by(|a, b| a.name.cmp(&b.name));
        groups.push(OwnerGroup {
            owner: String::new(),
            functions: free,
        });

        let mut objects: Vec<_> = schema.objects.iter().collect();
        objects.sort_by(|a, b| a.name.cmp(&b.name));
        for object in objects {
            groups.push(OwnerGroup {
                owner: object.name.clone(),
                functions: object.all_methods(),
            });
        }

        for def in self.ir.structs_in_order() {
            groups.push(OwnerGroup {
                owner: def.name.clone(),
                functions: def.methods.values().cloned().collect(),
            });
        }

        groups.retain(|group| !group.functions.is_empty());
        groups
    }
}
