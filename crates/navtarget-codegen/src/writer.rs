//! Rendering and persistence of generated containers.
//!
//! A container is rendered to a complete source string in memory first and
//! only then persisted, via a temp file renamed into place. An error anywhere
//! in the round leaves either the previous file or no file - never a
//! truncated container.

use std::fs;
use std::path::{Path, PathBuf};

use crate::emit::MethodSpec;
use crate::error::CodegenError;

/// One generated container type, ready to serialize.
#[derive(Debug, Clone)]
pub struct GeneratedContainer {
    /// Container type name, e.g. `ActivityTargets`.
    pub name: String,
    /// File name within the output directory, e.g. `activity_targets.rs`.
    pub file_name: String,
    pub methods: Vec<MethodSpec>,
}

/// Runtime symbols a generated file may need, in import order.
const RUNTIME_SYMBOLS: [&str; 8] = [
    "ActivityTarget",
    "Bundle",
    "BundleError",
    "FragmentState",
    "FragmentTarget",
    "FromBundle",
    "ParameterProvider",
    "TargetClass",
];

fn used_imports(methods: &[MethodSpec]) -> Vec<&'static str> {
    let mut text = String::new();
    for method in methods {
        for (_, ty) in &method.args {
            text.push_str(ty);
        }
        text.push_str(&method.ret);
        for line in &method.body {
            text.push_str(line);
        }
    }

    RUNTIME_SYMBOLS
        .iter()
        .filter(|symbol| match **symbol {
            // The trait never appears by name in emitted bodies, only its method.
            "FromBundle" => text.contains("::from_bundle("),
            symbol => text.contains(symbol),
        })
        .copied()
        .collect()
}

impl GeneratedContainer {
    /// Serialize the container to Rust source.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str("// Generated by navtarget-codegen. Do not edit.\n\n");

        let imports = used_imports(&self.methods);
        if !imports.is_empty() {
            out.push_str(&format!("use navtarget::{{{}}};\n\n", imports.join(", ")));
        }

        out.push_str(&format!("pub struct {};\n\n", self.name));
        out.push_str("#[allow(non_snake_case)]\n");
        out.push_str(&format!("impl {} {{\n", self.name));

        for (index, method) in self.methods.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            let args = method
                .args
                .iter()
                .map(|(name, ty)| format!("{name}: {ty}"))
                .collect::<Vec<_>>()
                .join(", ");
            out.push_str(&format!(
                "    pub fn {}({args}) -> {} {{\n",
                method.name, method.ret
            ));
            for line in &method.body {
                out.push_str("        ");
                out.push_str(line);
                out.push('\n');
            }
            out.push_str("    }\n");
        }

        out.push_str("}\n");
        out
    }
}

/// Persist `container` into `dir`, all-or-nothing.
pub(crate) fn write_container(
    dir: &Path,
    container: &GeneratedContainer,
) -> Result<PathBuf, CodegenError> {
    let code = container.render();

    fs::create_dir_all(dir).map_err(|source| CodegenError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(&container.file_name);
    let tmp = dir.join(format!("{}.tmp", container.file_name));
    fs::write(&tmp, &code).map_err(|source| CodegenError::Write {
        path: tmp.clone(),
        source,
    })?;
    fs::rename(&tmp, &path).map_err(|source| CodegenError::Write {
        path: path.clone(),
        source,
    })?;

    log::debug!(
        "wrote {} ({} methods)",
        path.display(),
        container.methods.len()
    );
    Ok(path)
}
