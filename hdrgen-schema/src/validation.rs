//! Schema validation utilities.
//!
//! Header generation itself performs no semantic checks; these are available
//! to callers that want to reject a broken API description before rendering.

use crate::error::SchemaError;
use crate::order::struct_depths;
use crate::types::{NamedValue, Schema, TypeDef};
use std::collections::HashSet;

/// Validates a loaded schema for consistency.
///
/// # Arguments
/// * `schema` - The schema to validate
///
/// # Returns
/// Ok(()) if valid, or SchemaError describing the first issue found.
///
/// # Errors
/// Returns `SchemaError` if a name is declared twice within its namespace,
/// an enum or bitmask repeats a member, a structure repeats a member, or
/// structures embed each other in a cycle.
pub fn validate_schema(schema: &Schema) -> Result<(), SchemaError> {
    check_unique("constant", schema.constants.iter().map(|c| c.name.as_str()))?;
    validate_types(schema)?;
    check_unique(
        "free function",
        schema.free_functions.iter().map(|f| f.name.as_str()),
    )?;
    check_unique(
        "function pointer",
        schema.function_pointers.iter().map(|f| f.name.as_str()),
    )?;
    check_unique("object", schema.objects.iter().map(|o| o.name.as_str()))?;
    struct_depths(schema)?;
    Ok(())
}

/// Validates all type definitions in the schema.
fn validate_types(schema: &Schema) -> Result<(), SchemaError> {
    for kind in ["value", "enum", "bitmask", "struct"] {
        check_unique(
            kind,
            schema
                .types
                .iter()
                .filter(|t| t.kind_name() == kind)
                .map(TypeDef::name),
        )?;
    }

    for type_def in &schema.types {
        match type_def {
            TypeDef::Enum(def) => validate_entries(&def.name, &def.values)?,
            TypeDef::Bitmask(def) => validate_entries(&def.name, &def.values)?,
            TypeDef::Struct(def) => {
                let mut seen = HashSet::new();
                for member in &def.members {
                    if !seen.insert(member.name.as_str()) {
                        return Err(SchemaError::Validation {
                            message: format!(
                                "Duplicate member '{}' in struct '{}'",
                                member.name, def.name
                            ),
                        });
                    }
                }
            }
            TypeDef::Value(_) => {}
        }
    }

    Ok(())
}

/// Validates enum or bitmask members.
fn validate_entries(owner: &str, values: &[NamedValue]) -> Result<(), SchemaError> {
    let mut seen_names = HashSet::new();

    for value in values {
        if !seen_names.insert(value.name.as_str()) {
            return Err(SchemaError::Validation {
                message: format!("Duplicate entry name '{}' in '{}'", value.name, owner),
            });
        }
    }

    Ok(())
}

/// Fails on the first name that appears twice.
fn check_unique<'a>(
    kind: &str,
    names: impl IntoIterator<Item = &'a str>,
) -> Result<(), SchemaError> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(SchemaError::duplicate(kind, name));
        }
    }
    Ok(())
}
