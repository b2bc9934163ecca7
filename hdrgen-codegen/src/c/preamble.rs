//! License banner, include guard, export macro and linkage wrappers.

use crate::naming::NamingPolicy;

/// Generator for the fixed text surrounding the header body.
pub struct PreambleGenerator<'a> {
    license: &'a str,
    naming: &'a NamingPolicy,
}

impl<'a> PreambleGenerator<'a> {
    /// Creates a new preamble generator.
    #[must_use]
    pub fn new(license: &'a str, naming: &'a NamingPolicy) -> Self {
        Self { license, naming }
    }

    /// Generates the license banner as line comments.
    ///
    /// Returns an empty string when the schema carries no license text.
    #[must_use]
    pub fn license(&self) -> String {
        let text = self.license.trim();
        if text.is_empty() {
            return String::new();
        }

        let mut output = String::new();
        for line in text.lines() {
            let line = line.trim_end();
            if line.is_empty() {
                output.push_str("//\n");
            } else {
                output.push_str(&format!("// {}\n", line));
            }
        }
        output.push('\n');
        output
    }

    /// Opens the include guard.
    #[must_use]
    pub fn guard_open(&self, guard: &str) -> String {
        format!("#ifndef {guard}\n#define {guard}\n\n")
    }

    /// Closes the include guard.
    #[must_use]
    pub fn guard_close(&self, guard: &str) -> String {
        format!("#endif // {guard}\n")
    }

    /// Generates the export macro selection block.
    #[must_use]
    pub fn export_macro(&self) -> String {
        let export = self.naming.export_macro();
        let shared = self.naming.shared_library_macro();
        let implementation = self.naming.implementation_macro();

        let mut output = String::new();
        output.push_str(&format!("#if defined({})\n", shared));
        output.push_str("#    if defined(_WIN32)\n");
        output.push_str(&format!("#        if defined({})\n", implementation));
        output.push_str(&format!(
            "#            define {} __declspec(dllexport)\n",
            export
        ));
        output.push_str("#        else\n");
        output.push_str(&format!(
            "#            define {} __declspec(dllimport)\n",
            export
        ));
        output.push_str("#        endif\n");
        output.push_str("#    else  // defined(_WIN32)\n");
        output.push_str(&format!("#        if defined({})\n", implementation));
        output.push_str(&format!(
            "#            define {} __attribute__((visibility(\"default\")))\n",
            export
        ));
        output.push_str("#        else\n");
        output.push_str(&format!("#            define {}\n", export));
        output.push_str("#        endif\n");
        output.push_str("#    endif  // defined(_WIN32)\n");
        output.push_str(&format!("#else  // defined({})\n", shared));
        output.push_str(&format!("#    define {}\n", export));
        output.push_str(&format!("#endif  // defined({})\n\n", shared));
        output
    }

    /// Generates the feature-guard macros a consumer may predefine.
    #[must_use]
    pub fn feature_guards(&self) -> String {
        let mut output = String::new();
        for guard in self.naming.feature_guards() {
            output.push_str(&format!("#if !defined({guard})\n#define {guard}\n#endif\n\n"));
        }
        output
    }

    /// Generates the standard includes.
    #[must_use]
    pub fn includes(&self) -> String {
        "#include <stdint.h>\n#include <stddef.h>\n\n".to_string()
    }

    /// Opens the C++ linkage wrapper.
    #[must_use]
    pub fn extern_c_open(&self) -> String {
        "#ifdef __cplusplus\nextern \"C\" {\n#endif\n\n".to_string()
    }

    /// Closes the C++ linkage wrapper.
    #[must_use]
    pub fn extern_c_close(&self) -> String {
        "#ifdef __cplusplus\n} // extern \"C\"\n#endif\n\n".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_license_banner() {
        let naming = NamingPolicy::new("WGPU");
        let generator = PreambleGenerator::new("Copyright 2024\n\nBSD-3-Clause\n", &naming);
        assert_eq!(generator.license(), "// Copyright 2024\n//\n// BSD-3-Clause\n\n");
    }

    #[test]
    fn test_empty_license() {
        let naming = NamingPolicy::new("WGPU");
        let generator = PreambleGenerator::new("   \n", &naming);
        assert!(generator.license().is_empty());
    }

    #[test]
    fn test_export_macro() {
        let naming = NamingPolicy::new("WGPU");
        let output = PreambleGenerator::new("", &naming).export_macro();

        assert!(output.starts_with("#if defined(WGPU_SHARED_LIBRARY)\n"));
        assert!(output.contains("#            define WGPU_EXPORT __declspec(dllexport)\n"));
        assert!(output.contains("#            define WGPU_EXPORT __declspec(dllimport)\n"));
        assert!(output.contains("__attribute__((visibility(\"default\")))"));
        assert!(output.contains("#    define WGPU_EXPORT\n"));
        assert!(output.ends_with("#endif  // defined(WGPU_SHARED_LIBRARY)\n\n"));
    }

    #[test]
    fn test_feature_guards() {
        let naming = NamingPolicy::new("WGPU");
        let output = PreambleGenerator::new("", &naming).feature_guards();

        assert!(output.contains("#if !defined(WGPU_OBJECT_ATTRIBUTE)\n#define WGPU_OBJECT_ATTRIBUTE\n#endif\n"));
        assert!(output.contains("#define WGPU_ENUM_ATTRIBUTE\n"));
        assert!(output.contains("#define WGPU_STRUCTURE_ATTRIBUTE\n"));
        assert!(output.contains("#define WGPU_FUNCTION_ATTRIBUTE\n"));
        assert!(output.contains("#define WGPU_NULLABLE\n"));
        assert_eq!(output.matches("#if !defined(").count(), 5);
    }

    #[test]
    fn test_guard() {
        let naming = NamingPolicy::new("WGPU");
        let generator = PreambleGenerator::new("", &naming);
        assert_eq!(generator.guard_open("WGPU_H_"), "#ifndef WGPU_H_\n#define WGPU_H_\n\n");
        assert_eq!(generator.guard_close("WGPU_H_"), "#endif // WGPU_H_\n");
    }
}
