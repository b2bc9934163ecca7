//! Naming policy for emitted symbols.

use hdrgen_schema::ir::to_screaming_snake_case;

/// Suffix of the scalar typedef generated next to each bitmask.
pub const FLAGS_SUFFIX: &str = "Flags";

/// Name of the sentinel member appended to every enum and bitmask.
pub const FORCE32_MEMBER: &str = "Force32";

/// Value of the sentinel member, forcing a 32-bit underlying type.
pub const FORCE32_VALUE: &str = "0x7FFFFFFF";

/// Derives every public symbol name from the schema's prefix.
///
/// Built once per run and passed by reference to every formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingPolicy {
    type_prefix: String,
    function_prefix: String,
    macro_prefix: String,
}

impl NamingPolicy {
    /// Creates a naming policy from the declared prefix, e.g. `WGPU`.
    #[must_use]
    pub fn new(prefix: &str) -> Self {
        Self {
            type_prefix: prefix.to_string(),
            function_prefix: prefix.to_lowercase(),
            macro_prefix: prefix.to_uppercase(),
        }
    }

    /// `WGPUName`
    #[must_use]
    pub fn type_name(&self, name: &str) -> String {
        format!("{}{}", self.type_prefix, name)
    }

    /// `WGPUNameFlags`
    #[must_use]
    pub fn flags_name(&self, name: &str) -> String {
        format!("{}{}{}", self.type_prefix, name, FLAGS_SUFFIX)
    }

    /// `WGPUEnum_Member`
    #[must_use]
    pub fn enum_member(&self, owner: &str, member: &str) -> String {
        format!("{}{}_{}", self.type_prefix, owner, member)
    }

    /// `WGPU_CONSTANT_NAME`
    #[must_use]
    pub fn constant_name(&self, name: &str) -> String {
        format!("{}_{}", self.macro_prefix, to_screaming_snake_case(name))
    }

    /// `WGPUNameImpl`, the incomplete struct behind an object handle.
    #[must_use]
    pub fn object_impl(&self, name: &str) -> String {
        format!("{}{}Impl", self.type_prefix, name)
    }

    /// `wgpuOwnerName`
    #[must_use]
    pub fn function_name(&self, owner: &str, name: &str) -> String {
        format!("{}{}{}", self.function_prefix, owner, name)
    }

    /// `WGPUProcOwnerName`
    #[must_use]
    pub fn proc_name(&self, owner: &str, name: &str) -> String {
        format!("{}Proc{}{}", self.type_prefix, owner, name)
    }

    /// Default include guard, `WGPU_H_`.
    #[must_use]
    pub fn include_guard(&self) -> String {
        self.macro_name("H_")
    }

    /// `WGPU_EXPORT`
    #[must_use]
    pub fn export_macro(&self) -> String {
        self.macro_name("EXPORT")
    }

    /// `WGPU_SHARED_LIBRARY`
    #[must_use]
    pub fn shared_library_macro(&self) -> String {
        self.macro_name("SHARED_LIBRARY")
    }

    /// `WGPU_IMPLEMENTATION`
    #[must_use]
    pub fn implementation_macro(&self) -> String {
        self.macro_name("IMPLEMENTATION")
    }

    /// `WGPU_OBJECT_ATTRIBUTE`
    #[must_use]
    pub fn object_attribute(&self) -> String {
        self.macro_name("OBJECT_ATTRIBUTE")
    }

    /// `WGPU_ENUM_ATTRIBUTE`
    #[must_use]
    pub fn enum_attribute(&self) -> String {
        self.macro_name("ENUM_ATTRIBUTE")
    }

    /// `WGPU_STRUCTURE_ATTRIBUTE`
    #[must_use]
    pub fn structure_attribute(&self) -> String {
        self.macro_name("STRUCTURE_ATTRIBUTE")
    }

    /// `WGPU_FUNCTION_ATTRIBUTE`
    #[must_use]
    pub fn function_attribute(&self) -> String {
        self.macro_name("FUNCTION_ATTRIBUTE")
    }

    /// `WGPU_NULLABLE`
    #[must_use]
    pub fn nullable(&self) -> String {
        self.macro_name("NULLABLE")
    }

    /// `WGPU_SKIP_PROCS`
    #[must_use]
    pub fn skip_procs(&self) -> String {
        self.macro_name("SKIP_PROCS")
    }

    /// `WGPU_SKIP_DECLARATIONS`
    #[must_use]
    pub fn skip_declarations(&self) -> String {
        self.macro_name("SKIP_DECLARATIONS")
    }

    /// The feature-guard macros a consumer may define before inclusion.
    #[must_use]
    pub fn feature_guards(&self) -> [String; 5] {
        [
            self.object_attribute(),
            self.enum_attribute(),
            self.structure_attribute(),
            self.function_attribute(),
            self.nullable(),
        ]
    }

    /// `WGPUChainedStruct`
    #[must_use]
    pub fn chained_struct(&self) -> String {
        self.type_name("ChainedStruct")
    }

    /// `WGPUChainedStructOut`
    #[must_use]
    pub fn chained_struct_out(&self) -> String {
        self.type_name("ChainedStructOut")
    }

    fn macro_name(&self, suffix: &str) -> String {
        format!("{}_{}", self.macro_prefix, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        let naming = NamingPolicy::new("WGPU");
        assert_eq!(naming.type_name("Device"), "WGPUDevice");
        assert_eq!(naming.flags_name("BufferUsage"), "WGPUBufferUsageFlags");
        assert_eq!(
            naming.enum_member("BufferUsage", "MapRead"),
            "WGPUBufferUsage_MapRead"
        );
        assert_eq!(naming.object_impl("Device"), "WGPUDeviceImpl");
    }

    #[test]
    fn test_function_names() {
        let naming = NamingPolicy::new("WGPU");
        assert_eq!(naming.function_name("Device", "Release"), "wgpuDeviceRelease");
        assert_eq!(naming.function_name("", "CreateInstance"), "wgpuCreateInstance");
        assert_eq!(naming.proc_name("Device", "Release"), "WGPUProcDeviceRelease");
    }

    #[test]
    fn test_macro_names() {
        let naming = NamingPolicy::new("WGPU");
        assert_eq!(naming.include_guard(), "WGPU_H_");
        assert_eq!(naming.export_macro(), "WGPU_EXPORT");
        assert_eq!(naming.nullable(), "WGPU_NULLABLE");
        assert_eq!(naming.constant_name("WholeSize"), "WGPU_WHOLE_SIZE");
        assert_eq!(naming.feature_guards()[0], "WGPU_OBJECT_ATTRIBUTE");
        assert_eq!(naming.feature_guards()[4], "WGPU_NULLABLE");
    }

    #[test]
    fn test_mixed_case_prefix() {
        let naming = NamingPolicy::new("Vk");
        assert_eq!(naming.type_name("Buffer"), "VkBuffer");
        assert_eq!(naming.function_name("", "CreateBuffer"), "vkCreateBuffer");
        assert_eq!(naming.export_macro(), "VK_EXPORT");
    }
}
