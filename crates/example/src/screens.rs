//! Marked screen declarations scanned by build.rs.

use navtarget::{Bundle, BundleError, FromBundle};
use navtarget_macros::{
    activity_target, bundle_model, force_empty_target, fragment_target, target_parameter,
};

#[activity_target]
pub struct Home;

#[activity_target(enter_anim = 7, exit_anim = 8)]
#[target_parameter(key = "userId", ty = "i64", group = "edit")]
#[target_parameter(key = "userId", ty = "i64", group = "view")]
pub struct Profile;

/// Grouped parameters plus a forced bare factory for the common case.
#[activity_target]
#[force_empty_target]
#[target_parameter(key = "query", ty = "String", group = "filters")]
#[target_parameter(key = "limit", name = "result limit", ty = "u32", optional, group = "filters")]
pub struct Search;

#[fragment_target(container_id = 10, tag = "details", state = add)]
#[target_parameter(key = "itemId", ty = "i64")]
#[target_parameter(key = "comment", name = "comment text", ty = "String", optional)]
pub struct Details;

/// No container id on purpose: the dispatcher supplies one at navigation time.
#[fragment_target(tag = "overlay")]
pub struct Overlay;

#[bundle_model]
pub struct SessionModel {
    pub token: String,
    pub account_id: i64,
}

impl FromBundle for SessionModel {
    fn from_bundle(bundle: &Bundle) -> Result<Self, BundleError> {
        Ok(Self {
            token: bundle.get_str("token")?.to_string(),
            account_id: bundle.get_i64("accountId")?,
        })
    }
}
