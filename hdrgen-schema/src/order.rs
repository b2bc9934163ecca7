//! Structure nesting depth and declaration order.
//!
//! A structure's depth is the length of the longest chain of
//! structure-typed members below it. Emitting structures by ascending depth
//! guarantees every embedded structure is defined before its user; ties are
//! broken alphabetically so the order is reproducible.

use crate::error::SchemaError;
use crate::types::Schema;
use std::collections::HashMap;

/// Computes the nesting depth of every structure in the schema.
///
/// # Errors
/// Returns `SchemaError::CircularReference` if structure membership forms a
/// cycle.
pub fn struct_depths(schema: &Schema) -> Result<HashMap<String, usize>, SchemaError> {
    let mut depths = HashMap::new();
    let mut in_progress = Vec::new();

    for def in schema.structs() {
        depth_of(schema, &def.name, &mut depths, &mut in_progress)?;
    }

    Ok(depths)
}

/// Memoized depth of one structure.
///
/// `in_progress` holds the chain of structures currently being resolved.
fn depth_of(
    schema: &Schema,
    name: &str,
    depths: &mut HashMap<String, usize>,
    in_progress: &mut Vec<String>,
) -> Result<usize, SchemaError> {
    if let Some(&depth) = depths.get(name) {
        return Ok(depth);
    }

    if in_progress.iter().any(|n| n == name) {
        let mut path = in_progress.join(" -> ");
        path.push_str(" -> ");
        path.push_str(name);
        return Err(SchemaError::CircularReference { path });
    }

    let Some(def) = schema.get_struct(name) else {
        return Ok(0);
    };

    in_progress.push(name.to_string());

    let mut depth = 0;
    for member_type in def.referenced_types() {
        if schema.get_struct(member_type).is_some() {
            let member_depth = depth_of(schema, member_type, depths, in_progress)?;
            depth = depth.max(member_depth + 1);
        }
    }

    in_progress.pop();
    depths.insert(name.to_string(), depth);

    Ok(depth)
}

/// Returns all structure names in declaration order.
///
/// Names are sorted alphabetically to obtain a baseline index, then by the
/// composite key `(depth, baseline index)`.
#[must_use]
pub fn struct_order(schema: &Schema, depths: &HashMap<String, usize>) -> Vec<String> {
    let mut names: Vec<String> = schema.structs().map(|s| s.name.clone()).collect();
    names.sort();

    let mut keyed: Vec<(usize, usize, String)> = names
        .into_iter()
        .enumerate()
        .map(|(baseline, name)| (depths.get(&name).copied().unwrap_or(0), baseline, name))
        .collect();
    keyed.sort_by_key(|&(depth, baseline, _)| (depth, baseline));

    keyed.into_iter().map(|(_, _, name)| name).collect()
}
