//! Function and object definitions.
//!
//! Free functions, function pointer types, structure methods and object
//! methods all share the [`Function`] record.

use crate::resolve::TypeRef;
use std::collections::BTreeMap;

/// Suffix appended to an asynchronous function's name to form its default
/// callback type.
pub const CALLBACK_SUFFIX: &str = "Callback";

/// Function argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    /// Argument name.
    pub name: String,
    /// Argument type.
    pub type_ref: TypeRef,
    /// Pointer or array qualifier, e.g. `const *`.
    pub annotation: Option<String>,
    /// Name of the argument holding this argument's element count.
    pub length: Option<String>,
    /// Whether the argument may be null.
    pub optional: bool,
    /// Suppresses the nullable marker even when optional.
    pub suppress_nullable: bool,
    /// Default value.
    pub default: Option<String>,
}

impl Argument {
    /// Creates a new required argument.
    #[must_use]
    pub fn new(name: impl Into<String>, type_ref: TypeRef) -> Self {
        Self {
            name: name.into(),
            type_ref,
            annotation: None,
            length: None,
            optional: false,
            suppress_nullable: false,
            default: None,
        }
    }

    /// Returns true if the nullable marker applies to this argument.
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        self.optional && !self.suppress_nullable
    }
}

/// Function, method, or function pointer signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Function {
    /// Function name.
    pub name: String,
    /// Declared return type.
    pub returns: TypeRef,
    /// Whether the function completes through a callback.
    pub is_async: bool,
    /// Explicit callback type.
    pub callback: Option<TypeRef>,
    /// Arguments in declaration order.
    pub args: Vec<Argument>,
}

impl Function {
    /// Creates a function returning nothing and taking no arguments.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            returns: TypeRef::void(),
            is_async: false,
            callback: None,
            args: Vec::new(),
        }
    }

    /// Adds an argument.
    pub fn add_arg(&mut self, arg: Argument) {
        self.args.push(arg);
    }

    /// Returns the effective return type.
    ///
    /// Asynchronous functions always return `void`.
    #[must_use]
    pub fn return_type(&self) -> TypeRef {
        if self.is_async {
            TypeRef::void()
        } else {
            self.returns.clone()
        }
    }

    /// Returns the callback type of an asynchronous function.
    #[must_use]
    pub fn callback_type(&self) -> TypeRef {
        self.callback
            .clone()
            .unwrap_or_else(|| TypeRef::reference(format!("{}{}", self.name, CALLBACK_SUFFIX)))
    }
}

/// Opaque object with methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectDef {
    /// Object name.
    pub name: String,
    /// Declared methods keyed by name.
    pub methods: BTreeMap<String, Function>,
    /// Whether `Reference`/`Release` are generated.
    pub refcounted: bool,
}

impl ObjectDef {
    /// Creates a new object.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: BTreeMap::new(),
            refcounted: false,
        }
    }

    /// Adds a method.
    pub fn add_method(&mut self, method: Function) {
        self.methods.insert(method.name.clone(), method);
    }

    /// Returns the declared methods plus the synthesized `Reference` and
    /// `Release` for ref-counted objects, sorted by name.
    #[must_use]
    pub fn all_methods(&self) -> Vec<Function> {
        let mut methods = self.methods.clone();
        if self.refcounted {
            for name in ["Reference", "Release"] {
                methods.insert(name.to_string(), Function::new(name));
            }
        }
        methods.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_async_return_type_is_void() {
        let mut func = Function::new("RequestAdapter");
        func.returns = TypeRef::resolve("Adapter");
        assert_eq!(func.return_type(), TypeRef::reference("Adapter"));

        func.is_async = true;
        assert!(func.return_type().is_void());
    }

    #[test]
    fn test_default_callback_type() {
        let func = Function::new("MapAsync");
        assert_eq!(func.callback_type(), TypeRef::reference("MapAsyncCallback"));
    }

    #[test]
    fn test_explicit_callback_type() {
        let mut func = Function::new("MapAsync");
        func.callback = Some(TypeRef::resolve("BufferMapCallback"));
        assert_eq!(func.callback_type(), TypeRef::reference("BufferMapCallback"));
    }

    #[test]
    fn test_argument_nullable() {
        let mut arg = Argument::new("descriptor", TypeRef::resolve("DeviceDescriptor"));
        assert!(!arg.is_nullable());
        arg.optional = true;
        assert!(arg.is_nullable());
        arg.suppress_nullable = true;
        assert!(!arg.is_nullable());
    }

    #[test]
    fn test_refcounted_methods() {
        let mut object = ObjectDef::new("Device");
        object.add_method(Function::new("Destroy"));
        object.refcounted = true;

        let names: Vec<String> = object.all_methods().into_iter().map(|m| m.name).collect();
        assert_eq!(names, vec!["Destroy", "Reference", "Release"]);
        // synthesized methods are not stored
        assert_eq!(object.methods.len(), 1);
    }

    #[test]
    fn test_plain_object_methods() {
        let mut object = ObjectDef::new("Surface");
        object.add_method(Function::new("Present"));
        let methods = object.all_methods();
        assert_eq!(methods.len(), 1);
        assert!(methods[0].args.is_empty());
    }
}
