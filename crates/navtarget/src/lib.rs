//! # navtarget
//!
//! Runtime descriptor types for the `navtarget` navigation code generator.
//!
//! Generated containers (`ActivityTargets`, `FragmentTargets`, `TargetBundles`)
//! return the types defined here. A target descriptor pairs the declaration it
//! navigates to with the parameter providers needed to construct it; the host
//! dispatcher consumes the descriptor, this crate does not perform any screen
//! transition itself.
//!
//! ## Example
//!
//! ```rust
//! use navtarget::{ActivityTarget, ParameterProvider, TargetClass};
//!
//! struct Profile;
//!
//! let target = ActivityTarget::new(
//!     TargetClass::of::<Profile>(),
//!     vec![ParameterProvider::new("userId", "user id", 42i64, false)],
//! );
//!
//! assert!(target.target().is::<Profile>());
//! assert_eq!(target.bundle().get_i64("userId").unwrap(), 42);
//! ```

mod bundle;
mod target;

pub use bundle::{Bundle, BundleError, BundleValue, FromBundle};
pub use target::{
    ActivityTarget, FragmentState, FragmentTarget, ParameterProvider, TargetClass, UNSET,
};
