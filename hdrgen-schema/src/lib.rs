//! # hdrgen Schema
//!
//! API description loading and resolution.
//!
//! This crate provides:
//! - XML loading of API descriptions into typed entity records
//! - Type reference resolution (primitive pass-through vs. named entity)
//! - Structure nesting depth and deterministic declaration order
//! - Optional schema validation
//! - Intermediate representation for header generation

pub mod error;
pub mod functions;
pub mod ir;
pub mod order;
pub mod parser;
pub mod resolve;
pub mod types;
pub mod validation;

pub use error::{ParseError, SchemaError};
pub use functions::{Argument, Function, ObjectDef};
pub use ir::{EntityKind, SchemaIr};
pub use parser::parse_schema;
pub use resolve::TypeRef;
pub use types::{
    BitmaskDef, ChainDirection, Constant, EnumDef, Extensibility, NamedValue, Schema, StructDef,
    StructMember, TypeDef, ValueTypeDef,
};
pub use validation::validate_schema;
