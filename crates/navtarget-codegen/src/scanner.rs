//! Source scanner that extracts marker-annotated declarations.
//!
//! The scanner is a pure function from parsed source to a list of
//! [`ScannedDeclaration`]s plus diagnostics: it walks every item visible in a
//! file (including nested inline modules), filters items carrying a marker
//! attribute, and records declaration name and enclosing module path. A
//! marker on a non-struct item produces an error diagnostic naming the
//! declaration and scanning continues - a malformed marker target never
//! aborts the round.

use syn::meta::ParseNestedMeta;
use syn::{Attribute, Item};

use crate::diagnostics::Diagnostics;
use crate::model::{
    ActivityAttrs, Declaration, FragmentAttrs, FragmentStateAttr, ParameterEntry, DEFAULT_GROUP,
};

const ACTIVITY_MARKER: &str = "activity_target";
const FRAGMENT_MARKER: &str = "fragment_target";
const PARAMETER_MARKER: &str = "target_parameter";
const FORCE_EMPTY_MARKER: &str = "force_empty_target";
const BUNDLE_MARKER: &str = "bundle_model";

/// One struct declaration together with every marker attached to it.
#[derive(Debug, Clone, Default)]
pub(crate) struct ScannedDeclaration {
    pub name: String,
    pub module_path: String,
    pub activity: Option<ActivityAttrs>,
    pub fragment: Option<FragmentAttrs>,
    pub parameters: Vec<ParameterEntry>,
    pub force_empty: bool,
    pub bundle_model: bool,
}

impl ScannedDeclaration {
    pub fn declaration(&self) -> Declaration {
        Declaration::new(self.name.clone(), self.module_path.clone())
    }

    fn carries_marker(&self) -> bool {
        self.activity.is_some()
            || self.fragment.is_some()
            || self.bundle_model
            || self.force_empty
            || !self.parameters.is_empty()
    }
}

/// Identify a marker attribute by the last segment of its path, which handles
/// both `#[activity_target]` and `#[navtarget_macros::activity_target]`.
fn marker_name(attr: &Attribute) -> Option<&'static str> {
    let segment = attr.path().segments.last()?;
    match segment.ident.to_string().as_str() {
        ACTIVITY_MARKER => Some(ACTIVITY_MARKER),
        FRAGMENT_MARKER => Some(FRAGMENT_MARKER),
        PARAMETER_MARKER => Some(PARAMETER_MARKER),
        FORCE_EMPTY_MARKER => Some(FORCE_EMPTY_MARKER),
        BUNDLE_MARKER => Some(BUNDLE_MARKER),
        _ => None,
    }
}

fn has_any_marker(attrs: &[Attribute]) -> bool {
    attrs.iter().any(|attr| marker_name(attr).is_some())
}

/// Parse a source string and collect every marked declaration under
/// `module_path`.
pub(crate) fn scan_source(
    source: &str,
    module_path: &str,
    out: &mut Vec<ScannedDeclaration>,
    diagnostics: &mut Diagnostics,
) -> syn::Result<()> {
    let file = syn::parse_file(source)?;
    scan_items(&file.items, module_path, out, diagnostics);
    Ok(())
}

fn scan_items(
    items: &[Item],
    module_path: &str,
    out: &mut Vec<ScannedDeclaration>,
    diagnostics: &mut Diagnostics,
) {
    for item in items {
        match item {
            Item::Struct(item) => scan_struct(item, module_path, out, diagnostics),
            Item::Mod(item) => {
                if has_any_marker(&item.attrs) {
                    diagnostics.error(item.ident.to_string(), "can only be applied to a struct");
                }
                if let Some((_, items)) = &item.content {
                    let nested = format!("{module_path}::{}", item.ident);
                    scan_items(items, &nested, out, diagnostics);
                }
            }
            other => {
                if let Some((name, attrs)) = item_name_and_attrs(other) {
                    if has_any_marker(attrs) {
                        diagnostics.error(name, "can only be applied to a struct");
                    }
                }
            }
        }
    }
}

fn item_name_and_attrs(item: &Item) -> Option<(String, &[Attribute])> {
    match item {
        Item::Enum(item) => Some((item.ident.to_string(), &item.attrs)),
        Item::Fn(item) => Some((item.sig.ident.to_string(), &item.attrs)),
        Item::Trait(item) => Some((item.ident.to_string(), &item.attrs)),
        Item::Type(item) => Some((item.ident.to_string(), &item.attrs)),
        Item::Union(item) => Some((item.ident.to_string(), &item.attrs)),
        Item::Const(item) => Some((item.ident.to_string(), &item.attrs)),
        Item::Static(item) => Some((item.ident.to_string(), &item.attrs)),
        _ => None,
    }
}

fn scan_struct(
    item: &syn::ItemStruct,
    module_path: &str,
    out: &mut Vec<ScannedDeclaration>,
    diagnostics: &mut Diagnostics,
) {
    let name = item.ident.to_string();
    let mut scanned = ScannedDeclaration {
        name: name.clone(),
        module_path: module_path.to_string(),
        ..ScannedDeclaration::default()
    };

    for attr in &item.attrs {
        match marker_name(attr) {
            Some(ACTIVITY_MARKER) => match parse_activity(attr) {
                Ok(attrs) => scanned.activity = Some(attrs),
                Err(err) => diagnostics.error(name.as_str(), format!("invalid activity_target marker: {err}")),
            },
            Some(FRAGMENT_MARKER) => match parse_fragment(attr) {
                Ok(attrs) => scanned.fragment = Some(attrs),
                Err(err) => diagnostics.error(name.as_str(), format!("invalid fragment_target marker: {err}")),
            },
            Some(PARAMETER_MARKER) => match parse_parameter(attr) {
                Ok(entry) => scanned.parameters.push(entry),
                Err(err) => diagnostics.error(name.as_str(), format!("invalid target_parameter marker: {err}")),
            },
            Some(FORCE_EMPTY_MARKER) => scanned.force_empty = true,
            Some(BUNDLE_MARKER) => scanned.bundle_model = true,
            Some(_) => {}
            None => {}
        }
    }

    if scanned.carries_marker() {
        log::debug!("scanned {}::{name}", scanned.module_path);
        out.push(scanned);
    }
}

fn parse_activity(attr: &Attribute) -> syn::Result<ActivityAttrs> {
    let mut attrs = ActivityAttrs::default();
    if matches!(attr.meta, syn::Meta::Path(_)) {
        return Ok(attrs);
    }
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("enter_anim") {
            attrs.enter_anim = int_value(&meta)?;
        } else if meta.path.is_ident("exit_anim") {
            attrs.exit_anim = int_value(&meta)?;
        } else {
            return Err(meta.error("unknown activity_target argument"));
        }
        Ok(())
    })?;
    Ok(attrs)
}

fn parse_fragment(attr: &Attribute) -> syn::Result<FragmentAttrs> {
    let mut attrs = FragmentAttrs::default();
    if matches!(attr.meta, syn::Meta::Path(_)) {
        return Ok(attrs);
    }
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("container_id") {
            attrs.container_id = int_value(&meta)?;
        } else if meta.path.is_ident("tag") {
            attrs.tag = string_value(&meta)?;
        } else if meta.path.is_ident("state") {
            attrs.state = state_value(&meta)?;
        } else if meta.path.is_ident("enter_anim") {
            attrs.enter_anim = int_value(&meta)?;
        } else if meta.path.is_ident("exit_anim") {
            attrs.exit_anim = int_value(&meta)?;
        } else if meta.path.is_ident("pop_enter_anim") {
            attrs.pop_enter_anim = int_value(&meta)?;
        } else if meta.path.is_ident("pop_exit_anim") {
            attrs.pop_exit_anim = int_value(&meta)?;
        } else {
            return Err(meta.error("unknown fragment_target argument"));
        }
        Ok(())
    })?;
    Ok(attrs)
}

fn parse_parameter(attr: &Attribute) -> syn::Result<ParameterEntry> {
    if matches!(attr.meta, syn::Meta::Path(_)) {
        return Err(syn::Error::new_spanned(
            attr,
            "target_parameter requires `key` and `ty` arguments",
        ));
    }

    let mut key: Option<String> = None;
    let mut display_name = "unspecified".to_string();
    let mut ty: Option<String> = None;
    let mut optional = false;
    let mut group = DEFAULT_GROUP.to_string();

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("key") {
            key = Some(string_value(&meta)?);
        } else if meta.path.is_ident("name") {
            display_name = string_value(&meta)?;
        } else if meta.path.is_ident("ty") {
            ty = Some(string_value(&meta)?);
        } else if meta.path.is_ident("optional") {
            optional = flag_value(&meta)?;
        } else if meta.path.is_ident("group") {
            let value = string_value(&meta)?;
            if !value.is_empty() {
                group = value;
            }
        } else {
            return Err(meta.error("unknown target_parameter argument"));
        }
        Ok(())
    })?;

    let key = key.ok_or_else(|| syn::Error::new_spanned(attr, "missing `key` argument"))?;
    let ty = ty.ok_or_else(|| syn::Error::new_spanned(attr, "missing `ty` argument"))?;

    // The key doubles as the generated argument name.
    syn::parse_str::<syn::Ident>(&key)
        .map_err(|_| syn::Error::new_spanned(attr, format!("key `{key}` is not a valid identifier")))?;
    syn::parse_str::<syn::Type>(&ty)
        .map_err(|_| syn::Error::new_spanned(attr, format!("ty `{ty}` is not a valid Rust type")))?;

    Ok(ParameterEntry {
        key,
        display_name,
        ty,
        optional,
        group,
    })
}

fn int_value(meta: &ParseNestedMeta) -> syn::Result<i32> {
    let lit: syn::LitInt = meta.value()?.parse()?;
    lit.base10_parse()
}

fn string_value(meta: &ParseNestedMeta) -> syn::Result<String> {
    let lit: syn::LitStr = meta.value()?.parse()?;
    Ok(lit.value())
}

/// Accepts both the bare `optional` flag and the explicit `optional = true`.
fn flag_value(meta: &ParseNestedMeta) -> syn::Result<bool> {
    if meta.input.peek(syn::Token![=]) {
        let lit: syn::LitBool = meta.value()?.parse()?;
        Ok(lit.value())
    } else {
        Ok(true)
    }
}

fn state_value(meta: &ParseNestedMeta) -> syn::Result<FragmentStateAttr> {
    let ident: syn::Ident = meta.value()?.parse()?;
    match ident.to_string().as_str() {
        "replace" => Ok(FragmentStateAttr::Replace),
        "add" => Ok(FragmentStateAttr::Add),
        other => Err(syn::Error::new(
            ident.span(),
            format!("unknown fragment state `{other}`, expected `replace` or `add`"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UNSET_ID;

    fn scan(source: &str) -> (Vec<ScannedDeclaration>, Diagnostics) {
        let mut out = Vec::new();
        let mut diagnostics = Diagnostics::new();
        scan_source(source, "crate", &mut out, &mut diagnostics).expect("parse");
        (out, diagnostics)
    }

    #[test]
    fn test_scan_bare_activity_marker() {
        let (out, diagnostics) = scan(
            r#"
            #[activity_target]
            pub struct Home;
            "#,
        );

        assert!(diagnostics.is_empty());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Home");
        assert_eq!(out[0].module_path, "crate");
        assert_eq!(out[0].activity, Some(ActivityAttrs::default()));
        assert!(out[0].parameters.is_empty());
    }

    #[test]
    fn test_scan_activity_with_animations() {
        let (out, _) = scan(
            r#"
            #[activity_target(enter_anim = 7, exit_anim = 8)]
            pub struct Profile;
            "#,
        );

        let attrs = out[0].activity.unwrap();
        assert_eq!(attrs.enter_anim, 7);
        assert_eq!(attrs.exit_anim, 8);
    }

    #[test]
    fn test_scan_qualified_marker_path() {
        let (out, _) = scan(
            r#"
            #[navtarget_macros::activity_target]
            pub struct Home;
            "#,
        );

        assert_eq!(out.len(), 1);
        assert!(out[0].activity.is_some());
    }

    #[test]
    fn test_scan_fragment_defaults() {
        let (out, _) = scan(
            r#"
            #[fragment_target]
            pub struct Overlay;
            "#,
        );

        let attrs = out[0].fragment.clone().unwrap();
        assert_eq!(attrs.container_id, UNSET_ID);
        assert_eq!(attrs.tag, "");
        assert_eq!(attrs.state, FragmentStateAttr::Replace);
        assert_eq!(attrs.enter_anim, UNSET_ID);
        assert_eq!(attrs.pop_exit_anim, UNSET_ID);
    }

    #[test]
    fn test_scan_fragment_full() {
        let (out, _) = scan(
            r#"
            #[fragment_target(container_id = 10, tag = "details", state = add,
                              enter_anim = 1, exit_anim = 2, pop_enter_anim = 3, pop_exit_anim = 4)]
            pub struct Details;
            "#,
        );

        let attrs = out[0].fragment.clone().unwrap();
        assert_eq!(attrs.container_id, 10);
        assert_eq!(attrs.tag, "details");
        assert_eq!(attrs.state, FragmentStateAttr::Add);
        assert_eq!(
            (attrs.enter_anim, attrs.exit_anim, attrs.pop_enter_anim, attrs.pop_exit_anim),
            (1, 2, 3, 4)
        );
    }

    #[test]
    fn test_scan_repeated_parameters_in_order() {
        let (out, _) = scan(
            r#"
            #[activity_target]
            #[target_parameter(key = "userId", ty = "i64", group = "edit")]
            #[target_parameter(key = "comment", name = "comment text", ty = "String", optional)]
            pub struct Profile;
            "#,
        );

        let parameters = &out[0].parameters;
        assert_eq!(parameters.len(), 2);
        assert_eq!(parameters[0].key, "userId");
        assert_eq!(parameters[0].group, "edit");
        assert_eq!(parameters[0].display_name, "unspecified");
        assert!(!parameters[0].optional);
        assert_eq!(parameters[1].key, "comment");
        assert_eq!(parameters[1].group, DEFAULT_GROUP);
        assert_eq!(parameters[1].display_name, "comment text");
        assert!(parameters[1].optional);
    }

    #[test]
    fn test_marker_on_enum_is_rejected() {
        let (out, diagnostics) = scan(
            r#"
            #[activity_target]
            pub enum NotAScreen { A, B }
            "#,
        );

        assert!(out.is_empty());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics.entries()[0].declaration, "NotAScreen");
        assert!(diagnostics.entries()[0]
            .message
            .contains("can only be applied to a struct"));
    }

    #[test]
    fn test_marker_on_fn_is_rejected_and_scanning_continues() {
        let (out, diagnostics) = scan(
            r#"
            #[fragment_target]
            fn not_a_screen() {}

            #[fragment_target]
            pub struct Overlay;
            "#,
        );

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics.entries()[0].declaration, "not_a_screen");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "Overlay");
    }

    #[test]
    fn test_nested_modules_extend_path() {
        let (out, _) = scan(
            r#"
            mod screens {
                mod admin {
                    #[activity_target]
                    pub struct Dashboard;
                }
            }
            "#,
        );

        assert_eq!(out[0].module_path, "crate::screens::admin");
        assert_eq!(out[0].declaration().qualified(), "crate::screens::admin::Dashboard");
    }

    #[test]
    fn test_missing_key_is_a_diagnostic_not_an_abort() {
        let (out, diagnostics) = scan(
            r#"
            #[activity_target]
            #[target_parameter(ty = "i64")]
            pub struct Profile;
            "#,
        );

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics.entries()[0].message.contains("missing `key`"));
        // The declaration itself survives with the bad entry skipped.
        assert_eq!(out.len(), 1);
        assert!(out[0].parameters.is_empty());
    }

    #[test]
    fn test_invalid_ty_is_a_diagnostic() {
        let (_, diagnostics) = scan(
            r#"
            #[activity_target]
            #[target_parameter(key = "userId", ty = "not a type!!")]
            pub struct Profile;
            "#,
        );

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics.entries()[0].message.contains("not a valid Rust type"));
    }

    #[test]
    fn test_invalid_key_identifier_is_a_diagnostic() {
        let (_, diagnostics) = scan(
            r#"
            #[activity_target]
            #[target_parameter(key = "user-id", ty = "i64")]
            pub struct Profile;
            "#,
        );

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics.entries()[0].message.contains("not a valid identifier"));
    }

    #[test]
    fn test_force_empty_and_bundle_markers() {
        let (out, _) = scan(
            r#"
            #[activity_target]
            #[force_empty_target]
            #[target_parameter(key = "userId", ty = "i64", group = "edit")]
            pub struct Profile;

            #[bundle_model]
            pub struct SessionModel { pub token: String }
            "#,
        );

        assert_eq!(out.len(), 2);
        assert!(out[0].force_empty);
        assert!(out[1].bundle_model);
    }

    #[test]
    fn test_unmarked_items_are_ignored() {
        let (out, diagnostics) = scan(
            r#"
            pub struct Plain;
            pub enum PlainEnum { A }
            fn helper() {}
            "#,
        );

        assert!(out.is_empty());
        assert!(diagnostics.is_empty());
    }
}
