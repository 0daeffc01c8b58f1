//! Marker attributes consumed by `navtarget-codegen`.
//!
//! Every attribute in this crate is a **no-op** - it returns its input
//! unchanged and generates no code. The attributes exist so that marked
//! sources compile; the actual factory generation happens in your build.rs
//! via `navtarget_codegen::CodeGenerator`, which scans the source text for
//! these markers.
//!
//! # Usage
//!
//! ```rust,ignore
//! use navtarget_macros::{activity_target, target_parameter};
//!
//! #[activity_target(enter_anim = 7, exit_anim = 8)]
//! #[target_parameter(key = "userId", ty = "i64", group = "edit")]
//! pub struct Profile;
//! ```
//!
//! Then in your build.rs:
//!
//! ```rust,ignore
//! use navtarget_codegen::CodeGenerator;
//!
//! fn main() {
//!     let mut generator = CodeGenerator::new();
//!     generator.add_source_file("src/lib.rs").unwrap();
//!     generator.write_to_dir(std::env::var("OUT_DIR").unwrap()).unwrap();
//!
//!     println!("cargo:rerun-if-changed=src/lib.rs");
//! }
//! ```

use proc_macro::TokenStream;

/// Marks a struct as an activity-style navigation target.
///
/// Optional arguments: `enter_anim = <i32>`, `exit_anim = <i32>`. Unset
/// animation ids default to the sentinel `-1`.
#[proc_macro_attribute]
pub fn activity_target(_args: TokenStream, input: TokenStream) -> TokenStream {
    input
}

/// Marks a struct as a fragment-style navigation target.
///
/// Optional arguments: `container_id = <i32>`, `tag = <str>`,
/// `state = replace|add`, `enter_anim`, `exit_anim`, `pop_enter_anim`,
/// `pop_exit_anim` (all `<i32>`). Unset ids default to the sentinel `-1`.
#[proc_macro_attribute]
pub fn fragment_target(_args: TokenStream, input: TokenStream) -> TokenStream {
    input
}

/// Declares one navigation parameter of the marked target. Repeatable.
///
/// Arguments: `key = <str>` (required), `ty = <str>` (required, a Rust type),
/// `name = <str>` (display name, defaults to `"unspecified"`), `optional`
/// (flag), `group = <str>` (defaults to the shared default group).
#[proc_macro_attribute]
pub fn target_parameter(_args: TokenStream, input: TokenStream) -> TokenStream {
    input
}

/// Forces a zero-argument factory method for a target that also declares
/// grouped parameters.
#[proc_macro_attribute]
pub fn force_empty_target(_args: TokenStream, input: TokenStream) -> TokenStream {
    input
}

/// Registers a model struct for a generated bundle accessor. The struct must
/// implement `navtarget::FromBundle`.
#[proc_macro_attribute]
pub fn bundle_model(_args: TokenStream, input: TokenStream) -> TokenStream {
    input
}
