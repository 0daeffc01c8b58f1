//! Example crate demonstrating navtarget code generation.
//!
//! `build.rs` scans [`screens`] for marker attributes and writes the factory
//! containers into `OUT_DIR`; each generated file is included here as its own
//! module.

pub mod screens;

pub mod generated {
    pub mod activity_targets {
        include!(concat!(env!("OUT_DIR"), "/activity_targets.rs"));
    }

    pub mod fragment_targets {
        include!(concat!(env!("OUT_DIR"), "/fragment_targets.rs"));
    }

    pub mod target_bundles {
        include!(concat!(env!("OUT_DIR"), "/target_bundles.rs"));
    }
}

pub use generated::activity_targets::ActivityTargets;
pub use generated::fragment_targets::FragmentTargets;
pub use generated::target_bundles::TargetBundles;

#[cfg(test)]
mod tests {
    use super::*;
    use navtarget::{Bundle, FragmentState, UNSET};

    #[test]
    fn test_home_has_bare_factory() {
        let target = ActivityTargets::showHome();
        assert!(target.target().is::<screens::Home>());
        assert!(target.parameters().is_empty());
        assert_eq!(target.enter_anim(), UNSET);
    }

    #[test]
    fn test_profile_grouped_factories() {
        let edit = ActivityTargets::showProfileForEdit(42);
        let view = ActivityTargets::showProfileForView(42);

        for target in [&edit, &view] {
            assert!(target.target().is::<screens::Profile>());
            assert_eq!(target.parameters().len(), 1);
            assert_eq!(target.parameters()[0].key(), "userId");
            assert_eq!(target.enter_anim(), 7);
            assert_eq!(target.exit_anim(), 8);
        }
        assert_eq!(edit.bundle().get_i64("userId").unwrap(), 42);
    }

    #[test]
    fn test_search_forced_empty_factory() {
        let bare = ActivityTargets::showSearch();
        assert!(bare.parameters().is_empty());

        let filtered = ActivityTargets::showSearchForFilters("rust".to_string(), 20);
        let keys: Vec<_> = filtered.parameters().iter().map(|p| p.key()).collect();
        assert_eq!(keys, ["query", "limit"]);
        assert!(filtered.parameters()[1].is_optional());
        assert_eq!(filtered.parameters()[1].display_name(), "result limit");
    }

    #[test]
    fn test_details_fragment_attributes() {
        let target = FragmentTargets::showDetails(5, "nice".to_string());
        assert!(target.target().is::<screens::Details>());
        assert_eq!(target.container_id(), 10);
        assert_eq!(target.tag(), "details");
        assert_eq!(target.state(), FragmentState::Add);

        let bundle = target.bundle();
        assert_eq!(bundle.get_i64("itemId").unwrap(), 5);
        assert_eq!(bundle.get_str("comment").unwrap(), "nice");
    }

    #[test]
    fn test_overlay_unset_container_id() {
        let target = FragmentTargets::showOverlay();
        assert_eq!(target.container_id(), UNSET);
        assert_eq!(target.tag(), "overlay");
        assert_eq!(target.state(), FragmentState::Replace);
    }

    #[test]
    fn test_session_model_bundle_accessor() {
        let mut bundle = Bundle::new();
        bundle.insert("token", "abc");
        bundle.insert("accountId", 7i64);

        let session = TargetBundles::getSessionModel(&bundle).unwrap();
        assert_eq!(session.token, "abc");
        assert_eq!(session.account_id, 7);

        assert!(TargetBundles::getSessionModel(&Bundle::new()).is_err());
    }
}
