//! Structured method emission.
//!
//! Emitters turn the metadata model into [`MethodSpec`] values - name,
//! arguments, return type, body statements - without committing to any
//! textual formatting. Serialization to Rust source is the writer's job,
//! which keeps "what to emit" independently testable.

use std::collections::BTreeMap;

use crate::model::{
    ActivityAttrs, Declaration, FragmentAttrs, ParameterEntry, ParameterModel, DEFAULT_GROUP,
    UNSET_ID,
};

/// One generated associated function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSpec {
    pub name: String,
    /// `(argument name, argument type)` pairs, in signature order.
    pub args: Vec<(String, String)>,
    pub ret: String,
    /// Body statements, one per line; the final line is the return expression.
    pub body: Vec<String>,
}

/// Everything the emitter needs about one activity declaration.
#[derive(Debug, Clone)]
pub(crate) struct ActivityModel {
    pub declaration: Declaration,
    pub attrs: ActivityAttrs,
    pub parameters: ParameterModel,
}

/// Everything the emitter needs about one fragment declaration.
#[derive(Debug, Clone)]
pub(crate) struct FragmentModel {
    pub declaration: Declaration,
    pub attrs: FragmentAttrs,
    pub parameters: ParameterModel,
}

/// Factory method name for a (declaration, group) pair.
///
/// The default group yields `show<Declaration>`; any other group yields
/// `show<Declaration>For<Group'>` where the group key is lower-cased first and
/// then ASCII-capitalized, so generated names are stable regardless of marker
/// input casing.
pub(crate) fn method_name(declaration: &str, group: &str) -> String {
    if group == DEFAULT_GROUP {
        return format!("show{declaration}");
    }
    let lowered = group.to_lowercase();
    let mut chars = lowered.chars();
    match chars.next() {
        Some(first) => format!(
            "show{declaration}For{}{}",
            first.to_ascii_uppercase(),
            chars.as_str()
        ),
        None => format!("show{declaration}"),
    }
}

fn signature_args(entries: &[ParameterEntry]) -> Vec<(String, String)> {
    entries
        .iter()
        .map(|entry| (entry.key.clone(), entry.ty.clone()))
        .collect()
}

fn provider_statements(entries: &[ParameterEntry]) -> Vec<String> {
    let mut body =
        vec!["let mut parameter_list: Vec<ParameterProvider> = Vec::new();".to_string()];
    for entry in entries {
        body.push(format!(
            "parameter_list.push(ParameterProvider::new({:?}, {:?}, {}, {}));",
            entry.key, entry.display_name, entry.key, entry.optional
        ));
    }
    body
}

fn target_class_expr(declaration: &Declaration) -> String {
    format!("TargetClass::of::<{}>()", declaration.qualified())
}

fn activity_return(target: &str, list: &str, attrs: &ActivityAttrs) -> String {
    let base = format!("ActivityTarget::new({target}, {list})");
    if attrs.enter_anim == UNSET_ID && attrs.exit_anim == UNSET_ID {
        base
    } else {
        format!(
            "{base}.with_animations({}, {})",
            attrs.enter_anim, attrs.exit_anim
        )
    }
}

fn fragment_return(target: &str, list: &str, attrs: &FragmentAttrs) -> String {
    format!(
        "FragmentTarget::new({target}, {}, {:?}, {}, {}, {}, {}, {}, {list})",
        attrs.container_id,
        attrs.tag,
        attrs.state.emit_path(),
        attrs.enter_anim,
        attrs.exit_anim,
        attrs.pop_enter_anim,
        attrs.pop_exit_anim,
    )
}

/// One factory method per (declaration, group) pair, plus the zero-argument
/// method when the model calls for it.
pub(crate) fn activity_methods(model: &ActivityModel) -> Vec<MethodSpec> {
    let target = target_class_expr(&model.declaration);
    let mut methods = Vec::new();

    if model.parameters.emits_empty_method() {
        methods.push(MethodSpec {
            name: method_name(&model.declaration.name, DEFAULT_GROUP),
            args: Vec::new(),
            ret: "ActivityTarget".to_string(),
            body: vec![activity_return(&target, "Vec::new()", &model.attrs)],
        });
    }

    for (group, entries) in model.parameters.groups() {
        let mut body = provider_statements(entries);
        body.push(activity_return(&target, "parameter_list", &model.attrs));
        methods.push(MethodSpec {
            name: method_name(&model.declaration.name, group),
            args: signature_args(entries),
            ret: "ActivityTarget".to_string(),
            body,
        });
    }

    methods
}

pub(crate) fn fragment_methods(model: &FragmentModel) -> Vec<MethodSpec> {
    let target = target_class_expr(&model.declaration);
    let mut methods = Vec::new();

    if model.parameters.emits_empty_method() {
        methods.push(MethodSpec {
            name: method_name(&model.declaration.name, DEFAULT_GROUP),
            args: Vec::new(),
            ret: "FragmentTarget".to_string(),
            body: vec![fragment_return(&target, "Vec::new()", &model.attrs)],
        });
    }

    for (group, entries) in model.parameters.groups() {
        let mut body = provider_statements(entries);
        body.push(fragment_return(&target, "parameter_list", &model.attrs));
        methods.push(MethodSpec {
            name: method_name(&model.declaration.name, group),
            args: signature_args(entries),
            ret: "FragmentTarget".to_string(),
            body,
        });
    }

    methods
}

/// One static accessor per bundle-backed model, in map order.
pub(crate) fn bundle_accessors(models: &BTreeMap<String, Declaration>) -> Vec<MethodSpec> {
    models
        .iter()
        .map(|(name, declaration)| MethodSpec {
            name: format!("get{name}"),
            args: vec![("bundle".to_string(), "&Bundle".to_string())],
            ret: format!("Result<{}, BundleError>", declaration.qualified()),
            body: vec![format!("{}::from_bundle(bundle)", declaration.qualified())],
        })
        .collect()
}
