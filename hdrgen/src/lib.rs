//! # hdrgen
//!
//! C header generator for WebGPU-style API descriptions.
//!
//! hdrgen reads an XML description of an API surface (constants, value
//! types, enums, bitmasks, structures, objects and functions) and renders a
//! single self-contained C header with a platform export macro, feature
//! guard macros, proc typedefs and exported declarations.
//!
//! ## Quick Start
//!
//! ```ignore
//! use hdrgen::prelude::*;
//!
//! let schema = parse_schema(&xml)?;
//! let ir = SchemaIr::from_schema(&schema)?;
//! let header = Generator::new(&ir).include_guard("WEBGPU_H_").generate();
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - XML loading, type resolution and declaration order
//! - [`codegen`] - C header rendering

pub mod prelude;

/// API description loading and resolution.
pub mod schema {
    pub use hdrgen_schema::*;
}

/// C header generation.
pub mod codegen {
    pub use hdrgen_codegen::*;
}

// Re-export commonly used items at the crate root
pub use hdrgen_codegen::{CodegenError, Generator, generate_from_file, generate_from_xml};
pub use hdrgen_schema::{ParseError, SchemaError, SchemaIr, parse_schema, validate_schema};
