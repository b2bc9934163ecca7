//! Schema type definitions.
//!
//! This module contains the data structures representing the declared
//! entities of an API description: constants, value types, enums, bitmasks
//! and structures.

use crate::functions::{Function, ObjectDef};
use crate::resolve::TypeRef;
use std::collections::{BTreeMap, HashMap};

/// Sentinel token for the maximum 64-bit unsigned value.
pub const UINT64_MAX: &str = "UINT64_MAX";

/// Sentinel token for the maximum 32-bit unsigned value.
pub const UINT32_MAX: &str = "UINT32_MAX";

/// Complete API description.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    /// License text placed at the top of the output.
    pub license: String,
    /// Naming prefix applied to every public symbol.
    pub prefix: String,
    /// Constant definitions.
    pub constants: Vec<Constant>,
    /// Type definitions, in document order.
    pub types: Vec<TypeDef>,
    /// Free functions.
    pub free_functions: Vec<Function>,
    /// Function pointer types.
    pub function_pointers: Vec<Function>,
    /// Ref-counted or plain opaque objects.
    pub objects: Vec<ObjectDef>,
    /// Type lookup map (built during loading).
    type_map: HashMap<String, usize>,
}

impl Schema {
    /// Creates a new empty schema with the given prefix.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Self::default()
        }
    }

    /// Adds a type definition to the schema.
    pub fn add_type(&mut self, type_def: TypeDef) {
        let name = type_def.name().to_string();
        let index = self.types.len();
        self.types.push(type_def);
        self.type_map.insert(name, index);
    }

    /// Looks up a type by name.
    #[must_use]
    pub fn get_type(&self, name: &str) -> Option<&TypeDef> {
        self.type_map.get(name).and_then(|&idx| self.types.get(idx))
    }

    /// Returns true if a type with the given name exists.
    #[must_use]
    pub fn has_type(&self, name: &str) -> bool {
        self.type_map.contains_key(name)
    }

    /// Looks up a structure by name.
    #[must_use]
    pub fn get_struct(&self, name: &str) -> Option<&StructDef> {
        match self.get_type(name) {
            Some(TypeDef::Struct(s)) => Some(s),
            _ => None,
        }
    }

    /// Iterates over value types in document order.
    pub fn value_types(&self) -> impl Iterator<Item = &ValueTypeDef> {
        self.types.iter().filter_map(|t| match t {
            TypeDef::Value(v) => Some(v),
            _ => None,
        })
    }

    /// Iterates over enums in document order.
    pub fn enums(&self) -> impl Iterator<Item = &EnumDef> {
        self.types.iter().filter_map(|t| match t {
            TypeDef::Enum(e) => Some(e),
            _ => None,
        })
    }

    /// Iterates over bitmasks in document order.
    pub fn bitmasks(&self) -> impl Iterator<Item = &BitmaskDef> {
        self.types.iter().filter_map(|t| match t {
            TypeDef::Bitmask(b) => Some(b),
            _ => None,
        })
    }

    /// Iterates over structures in document order.
    pub fn structs(&self) -> impl Iterator<Item = &StructDef> {
        self.types.iter().filter_map(|t| match t {
            TypeDef::Struct(s) => Some(s),
            _ => None,
        })
    }

    /// Builds the type lookup map from the types vector.
    pub fn build_type_map(&mut self) {
        self.type_map.clear();
        for (idx, type_def) in self.types.iter().enumerate() {
            self.type_map.insert(type_def.name().to_string(), idx);
        }
    }
}

/// Preprocessor constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant {
    /// Constant name.
    pub name: String,
    /// Declared type.
    pub type_ref: TypeRef,
    /// Literal value, stored verbatim.
    pub value: String,
}

impl Constant {
    /// Creates a new constant.
    #[must_use]
    pub fn new(name: impl Into<String>, type_ref: TypeRef, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_ref,
            value: value.into(),
        }
    }

    /// Returns the literal to emit, with sentinel tokens replaced.
    #[must_use]
    pub fn literal(&self) -> &str {
        match self.value.as_str() {
            UINT64_MAX => "0xffffffffffffffffULL",
            UINT32_MAX => "0xffffffffUL",
            other => other,
        }
    }
}

/// Type definition variants.
#[derive(Debug, Clone)]
pub enum TypeDef {
    /// Named scalar over a primitive.
    Value(ValueTypeDef),
    /// Enumeration.
    Enum(EnumDef),
    /// Bitmask (rendered as an enum plus a flags typedef).
    Bitmask(BitmaskDef),
    /// Structure.
    Struct(StructDef),
}

impl TypeDef {
    /// Returns the name of the type.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Value(v) => &v.name,
            Self::Enum(e) => &e.name,
            Self::Bitmask(b) => &b.name,
            Self::Struct(s) => &s.name,
        }
    }

    /// Returns the section tag this definition is declared under.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Value(_) => "value",
            Self::Enum(_) => "enum",
            Self::Bitmask(_) => "bitmask",
            Self::Struct(_) => "struct",
        }
    }

    /// Returns true if this is a structure.
    #[must_use]
    pub const fn is_struct(&self) -> bool {
        matches!(self, Self::Struct(_))
    }

    /// Returns true if this is a bitmask.
    #[must_use]
    pub const fn is_bitmask(&self) -> bool {
        matches!(self, Self::Bitmask(_))
    }
}

/// Named scalar type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueTypeDef {
    /// Type name.
    pub name: String,
    /// Underlying type.
    pub underlying: TypeRef,
}

impl ValueTypeDef {
    /// Creates a new value type.
    #[must_use]
    pub fn new(name: impl Into<String>, underlying: TypeRef) -> Self {
        Self {
            name: name.into(),
            underlying,
        }
    }
}

/// Enum or bitmask member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedValue {
    /// Member name.
    pub name: String,
    /// Literal value, stored verbatim.
    pub value: String,
}

impl NamedValue {
    /// Creates a new named value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Parses the literal as an unsigned integer (decimal or `0x` hex).
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        let text = self.value.trim();
        match text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
        {
            Some(hex) => u64::from_str_radix(hex, 16).ok(),
            None => text.parse().ok(),
        }
    }
}

/// Enum type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDef {
    /// Type name.
    pub name: String,
    /// Members in declaration order.
    pub values: Vec<NamedValue>,
}

impl EnumDef {
    /// Creates a new enum definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    /// Adds a member.
    pub fn add_value(&mut self, value: NamedValue) {
        self.values.push(value);
    }

    /// Looks up a member by name.
    #[must_use]
    pub fn get_value(&self, name: &str) -> Option<&NamedValue> {
        self.values.iter().find(|v| v.name == name)
    }
}

/// Bitmask type definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmaskDef {
    /// Type name.
    pub name: String,
    /// Members in declaration order.
    pub values: Vec<NamedValue>,
}

impl BitmaskDef {
    /// Creates a new bitmask definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    /// Adds a member.
    pub fn add_value(&mut self, value: NamedValue) {
        self.values.push(value);
    }

    /// Looks up a member by name.
    #[must_use]
    pub fn get_value(&self, name: &str) -> Option<&NamedValue> {
        self.values.iter().find(|v| v.name == name)
    }
}

/// Whether a structure carries an extension chain pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Extensibility {
    /// No extension pointer.
    #[default]
    None,
    /// Accepts input extensions.
    In,
    /// Produces output extensions.
    Out,
}

impl Extensibility {
    /// Parses extensibility from an attribute value.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "" | "none" | "false" => Some(Self::None),
            "in" | "true" => Some(Self::In),
            "out" => Some(Self::Out),
            _ => None,
        }
    }
}

/// Whether a structure can itself be chained onto another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChainDirection {
    /// Not chainable.
    #[default]
    None,
    /// Chained into an input structure.
    In,
    /// Chained into an output structure.
    Out,
}

impl ChainDirection {
    /// Parses a chain direction from an attribute value.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "" | "none" => Some(Self::None),
            "in" => Some(Self::In),
            "out" => Some(Self::Out),
            _ => None,
        }
    }
}

/// Structure member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructMember {
    /// Member name.
    pub name: String,
    /// Member type.
    pub type_ref: TypeRef,
    /// Pointer or array qualifier, e.g. `const *`.
    pub annotation: Option<String>,
    /// Name of the member holding this member's element count.
    pub length: Option<String>,
    /// Default value.
    pub default: Option<String>,
    /// Whether the member may be null.
    pub optional: bool,
}

impl StructMember {
    /// Creates a new structure member.
    #[must_use]
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            type_ref,
            annotation: None,
            length: None,
            default: None,
            optional: false,
        }
    }
}

/// Structure definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructDef {
    /// Type name.
    pub name: String,
    /// Members in layout order.
    pub members: Vec<StructMember>,
    /// Methods keyed by name.
    pub methods: BTreeMap<String, Function>,
    /// Extension pointer direction.
    pub extensible: Extensibility,
    /// Chain direction.
    pub chained: ChainDirection,
    /// Structures this one may be chained onto.
    pub chain_roots: Vec<String>,
}

impl StructDef {
    /// Creates a new structure definition.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
            methods: BTreeMap::new(),
            extensible: Extensibility::None,
            chained: ChainDirection::None,
            chain_roots: Vec::new(),
        }
    }

    /// Adds a member.
    pub fn add_member(&mut self, member: StructMember) {
        self.members.push(member);
    }

    /// Adds a method.
    pub fn add_method(&mut self, method: Function) {
        self.methods.insert(method.name.clone(), method);
    }

    /// Returns the names of members whose type is a reference.
    pub fn referenced_types(&self) -> impl Iterator<Item = &str> {
        self.members.iter().filter_map(|m| m.type_ref.as_reference())
    }
}
