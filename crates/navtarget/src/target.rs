//! Navigation target descriptors returned by generated factory methods.

use std::any::{type_name, TypeId};

use crate::bundle::{Bundle, BundleValue};

/// Sentinel denoting "unset, use caller/framework default" for integer
/// attributes (container ids, animation references).
pub const UNSET: i32 = -1;

/// Reference to the declaration a target navigates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetClass {
    name: &'static str,
    id: TypeId,
}

impl TargetClass {
    pub fn of<T: 'static>() -> Self {
        Self {
            name: type_name::<T>(),
            id: TypeId::of::<T>(),
        }
    }

    /// Fully-qualified name of the referenced declaration.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is<T: 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

/// Carrier pairing a parameter key with its value and metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterProvider {
    key: String,
    display_name: String,
    optional: bool,
    value: BundleValue,
}

impl ParameterProvider {
    pub fn new(
        key: &str,
        display_name: &str,
        value: impl Into<BundleValue>,
        optional: bool,
    ) -> Self {
        Self {
            key: key.to_string(),
            display_name: display_name.to_string(),
            optional,
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn value(&self) -> &BundleValue {
        &self.value
    }

    /// Store this provider's value in `bundle` under its key.
    pub fn add_to(&self, bundle: &mut Bundle) {
        bundle.insert(self.key.clone(), self.value.clone());
    }
}

/// How a fragment target is attached to its container.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FragmentState {
    #[default]
    Replace,
    Add,
}

/// Descriptor for an activity-style target.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityTarget {
    target: TargetClass,
    parameters: Vec<ParameterProvider>,
    enter_anim: i32,
    exit_anim: i32,
}

impl ActivityTarget {
    pub fn new(target: TargetClass, parameters: Vec<ParameterProvider>) -> Self {
        Self {
            target,
            parameters,
            enter_anim: UNSET,
            exit_anim: UNSET,
        }
    }

    /// Attach enter/exit animation ids; [`UNSET`] leaves the framework default.
    pub fn with_animations(mut self, enter_anim: i32, exit_anim: i32) -> Self {
        self.enter_anim = enter_anim;
        self.exit_anim = exit_anim;
        self
    }

    pub fn target(&self) -> &TargetClass {
        &self.target
    }

    pub fn parameters(&self) -> &[ParameterProvider] {
        &self.parameters
    }

    pub fn enter_anim(&self) -> i32 {
        self.enter_anim
    }

    pub fn exit_anim(&self) -> i32 {
        self.exit_anim
    }

    /// Collect every provider into a [`Bundle`], in provider order.
    pub fn bundle(&self) -> Bundle {
        collect_bundle(&self.parameters)
    }
}

/// Descriptor for a fragment-style target.
#[derive(Debug, Clone, PartialEq)]
pub struct FragmentTarget {
    target: TargetClass,
    container_id: i32,
    tag: String,
    state: FragmentState,
    enter_anim: i32,
    exit_anim: i32,
    pop_enter_anim: i32,
    pop_exit_anim: i32,
    parameters: Vec<ParameterProvider>,
}

impl FragmentTarget {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        target: TargetClass,
        container_id: i32,
        tag: &str,
        state: FragmentState,
        enter_anim: i32,
        exit_anim: i32,
        pop_enter_anim: i32,
        pop_exit_anim: i32,
        parameters: Vec<ParameterProvider>,
    ) -> Self {
        Self {
            target,
            container_id,
            tag: tag.to_string(),
            state,
            enter_anim,
            exit_anim,
            pop_enter_anim,
            pop_exit_anim,
            parameters,
        }
    }

    pub fn target(&self) -> &TargetClass {
        &self.target
    }

    /// Container id, or [`UNSET`] when the marker left it unspecified. The
    /// dispatcher is responsible for rejecting an unset container at
    /// navigation time.
    pub fn container_id(&self) -> i32 {
        self.container_id
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn state(&self) -> FragmentState {
        self.state
    }

    pub fn enter_anim(&self) -> i32 {
        self.enter_anim
    }

    pub fn exit_anim(&self) -> i32 {
        self.exit_anim
    }

    pub fn pop_enter_anim(&self) -> i32 {
        self.pop_enter_anim
    }

    pub fn pop_exit_anim(&self) -> i32 {
        self.pop_exit_anim
    }

    pub fn parameters(&self) -> &[ParameterProvider] {
        &self.parameters
    }

    /// Collect every provider into a [`Bundle`], in provider order.
    pub fn bundle(&self) -> Bundle {
        collect_bundle(&self.parameters)
    }
}

fn collect_bundle(parameters: &[ParameterProvider]) -> Bundle {
    let mut bundle = Bundle::new();
    for provider in parameters {
        provider.add_to(&mut bundle);
    }
    bundle
}
