//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```ignore
//! use hdrgen::prelude::*;
//! ```

// Schema types
pub use hdrgen_schema::{
    EntityKind, Function, ObjectDef, ParseError, Schema, SchemaError, SchemaIr, StructDef,
    TypeDef, TypeRef, parse_schema, validate_schema,
};

// Generation
pub use hdrgen_codegen::{
    CodegenError, Generator, NamingPolicy, generate_from_file, generate_from_xml,
};
