//! # navtarget-codegen
//!
//! Navigation target code generator. This crate scans Rust sources for
//! `navtarget-macros` marker attributes and generates companion containers of
//! type-safe factory methods (`ActivityTargets`, `FragmentTargets`,
//! `TargetBundles`) returning the descriptor types from the `navtarget`
//! runtime crate.
//!
//! ## Usage
//!
//! ### 1. Mark your declarations
//!
//! ```rust,ignore
//! use navtarget_macros::{activity_target, target_parameter};
//!
//! #[activity_target(enter_anim = 7, exit_anim = 8)]
//! #[target_parameter(key = "userId", ty = "i64", group = "edit")]
//! pub struct Profile;
//! ```
//!
//! ### 2. Generate containers in build.rs
//!
//! ```rust,ignore
//! use navtarget_codegen::CodeGenerator;
//!
//! fn main() {
//!     let out_dir = std::env::var("OUT_DIR").unwrap();
//!
//!     let mut generator = CodeGenerator::new();
//!     generator.add_source_file("src/lib.rs").unwrap();
//!     generator.write_to_dir(&out_dir).unwrap();
//!
//!     for diagnostic in generator.diagnostics() {
//!         println!("cargo:warning={diagnostic}");
//!     }
//!     println!("cargo:rerun-if-changed=src/lib.rs");
//! }
//! ```
//!
//! One generation round processes the complete snapshot of marked
//! declarations added so far. Output is deterministic: declarations emit in
//! lexicographic name order, parameter groups in lexicographic group order,
//! so re-running on unchanged input yields byte-identical files.

mod diagnostics;
mod emit;
mod error;
mod model;
mod scanner;
mod writer;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use emit::{ActivityModel, FragmentModel};
use scanner::ScannedDeclaration;

pub use diagnostics::{Diagnostic, Diagnostics};
pub use emit::MethodSpec;
pub use error::CodegenError;
pub use model::{
    ActivityAttrs, Declaration, FragmentAttrs, FragmentStateAttr, ParameterEntry, ParameterModel,
    DEFAULT_GROUP, UNSET_ID,
};
pub use writer::GeneratedContainer;

/// Code generator that collects marked declarations and emits factory
/// containers.
///
/// Each marker kind (activity targets, fragment targets, bundle models) is
/// grouped and emitted independently; they share no mutable state beyond the
/// scanned declaration list.
#[derive(Debug)]
pub struct CodeGenerator {
    module_root: String,
    declarations: Vec<ScannedDeclaration>,
    diagnostics: Diagnostics,
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self {
            module_root: "crate".to_string(),
            declarations: Vec::new(),
            diagnostics: Diagnostics::new(),
        }
    }
}

impl CodeGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Module path prefix for emitted type references (default `crate`).
    /// Nested inline modules extend this path during scanning.
    pub fn set_module_root(&mut self, module_root: impl Into<String>) -> &mut Self {
        self.module_root = module_root.into();
        self
    }

    /// Parse a single Rust source file and collect its marked declarations
    /// under the configured module root.
    pub fn add_source_file(&mut self, path: impl AsRef<Path>) -> Result<&mut Self, CodegenError> {
        let root = self.module_root.clone();
        self.scan_file(path.as_ref(), &root)?;
        Ok(self)
    }

    /// Like [`add_source_file`](Self::add_source_file), but places the file's
    /// declarations under an explicit module path. Use this for out-of-line
    /// module files, whose path is not derivable from their content:
    ///
    /// ```rust,ignore
    /// generator.add_module_file("src/screens.rs", "crate::screens")?;
    /// ```
    pub fn add_module_file(
        &mut self,
        path: impl AsRef<Path>,
        module_path: impl AsRef<str>,
    ) -> Result<&mut Self, CodegenError> {
        self.scan_file(path.as_ref(), module_path.as_ref())?;
        Ok(self)
    }

    /// Parse Rust source from a string and collect its marked declarations.
    pub fn add_source_str(&mut self, source: &str) -> Result<&mut Self, CodegenError> {
        let root = self.module_root.clone();
        scanner::scan_source(source, &root, &mut self.declarations, &mut self.diagnostics)
            .map_err(CodegenError::ParseSource)?;
        Ok(self)
    }

    /// Recursively scan a directory for `.rs` files and collect marked
    /// declarations from each.
    pub fn add_source_dir(&mut self, path: impl AsRef<Path>) -> Result<&mut Self, CodegenError> {
        let root = self.module_root.clone();
        for entry in WalkDir::new(path).into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();
            if path.extension().map(|e| e == "rs").unwrap_or(false) {
                self.scan_file(path, &root)?;
            }
        }
        Ok(self)
    }

    fn scan_file(&mut self, path: &Path, module_path: &str) -> Result<(), CodegenError> {
        let source = fs::read_to_string(path).map_err(|source| CodegenError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        scanner::scan_source(
            &source,
            module_path,
            &mut self.declarations,
            &mut self.diagnostics,
        )
        .map_err(|source| CodegenError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(())
    }

    /// Diagnostics collected so far. Advisory: a diagnosed declaration is
    /// skipped, the rest of the round proceeds.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.diagnostics.entries()
    }

    /// Render the `ActivityTargets` container, or `None` when no activity
    /// declaration was scanned.
    pub fn generate_activity_targets(&self) -> Option<String> {
        self.activity_container().map(|c| c.render())
    }

    /// Render the `FragmentTargets` container, or `None` when no fragment
    /// declaration was scanned.
    pub fn generate_fragment_targets(&self) -> Option<String> {
        self.fragment_container().map(|c| c.render())
    }

    /// Render the `TargetBundles` container, or `None` when no bundle model
    /// was scanned.
    pub fn generate_target_bundles(&self) -> Option<String> {
        self.bundle_container().map(|c| c.render())
    }

    /// Persist every non-empty container into `dir`, one file per marker
    /// kind. Returns the written paths.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, CodegenError> {
        let dir = dir.as_ref();
        let containers = [
            self.activity_container(),
            self.fragment_container(),
            self.bundle_container(),
        ];

        let mut written = Vec::new();
        for container in containers.into_iter().flatten() {
            written.push(writer::write_container(dir, &container)?);
        }
        Ok(written)
    }

    fn activity_container(&self) -> Option<GeneratedContainer> {
        let mut models: BTreeMap<String, ActivityModel> = BTreeMap::new();
        for scanned in &self.declarations {
            if let Some(attrs) = scanned.activity {
                models.insert(
                    scanned.name.clone(),
                    ActivityModel {
                        declaration: scanned.declaration(),
                        attrs,
                        parameters: ParameterModel::build(
                            scanned.parameters.clone(),
                            scanned.force_empty,
                        ),
                    },
                );
            }
        }
        if models.is_empty() {
            return None;
        }

        Some(GeneratedContainer {
            name: "ActivityTargets".to_string(),
            file_name: "activity_targets.rs".to_string(),
            methods: models.values().flat_map(emit::activity_methods).collect(),
        })
    }

    fn fragment_container(&self) -> Option<GeneratedContainer> {
        let mut models: BTreeMap<String, FragmentModel> = BTreeMap::new();
        for scanned in &self.declarations {
            if let Some(attrs) = &scanned.fragment {
                models.insert(
                    scanned.name.clone(),
                    FragmentModel {
                        declaration: scanned.declaration(),
                        attrs: attrs.clone(),
                        parameters: ParameterModel::build(
                            scanned.parameters.clone(),
                            scanned.force_empty,
                        ),
                    },
                );
            }
        }
        if models.is_empty() {
            return None;
        }

        Some(GeneratedContainer {
            name: "FragmentTargets".to_string(),
            file_name: "fragment_targets.rs".to_string(),
            methods: models.values().flat_map(emit::fragment_methods).collect(),
        })
    }

    fn bundle_container(&self) -> Option<GeneratedContainer> {
        let mut models: BTreeMap<String, Declaration> = BTreeMap::new();
        for scanned in &self.declarations {
            if scanned.bundle_model {
                models.insert(scanned.name.clone(), scanned.declaration());
            }
        }
        if models.is_empty() {
            return None;
        }

        Some(GeneratedContainer {
            name: "TargetBundles".to_string(),
            file_name: "target_bundles.rs".to_string(),
            methods: emit::bundle_accessors(&models),
        })
    }
}
