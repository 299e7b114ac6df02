//! Render templates and the variant binding mechanism.
//!
//! A base [`RenderTemplate`] is authored once per story; every declared
//! variant gets an independent [`BoundTemplate`] derived from it via
//! [`RenderTemplate::bind`]. Each bound template owns its own default
//! [`ArgumentSet`], so specializing or later reassigning one variant's
//! defaults never leaks into the base or into sibling variants.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::args::ArgumentSet;

/// Capability contract for component references: the catalog only needs
/// a component to be invocable with an [`ArgumentSet`]. Prop schemas and
/// control inference stay with the preview host.
pub trait Component: Send + Sync {
    /// Display name, used in the rendered descriptor.
    fn name(&self) -> &str;

    /// Produce renderable output for the given arguments.
    fn invoke(&self, args: &ArgumentSet) -> RenderOutput;
}

/// Shared handle to a component reference.
pub type ComponentRef = Arc<dyn Component>;

/// Concrete renderable descriptor handed to the preview host: which
/// component to mount and the final merged arguments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderOutput {
    pub component: String,
    pub args: ArgumentSet,
}

impl RenderOutput {
    pub fn new(component: impl Into<String>, args: ArgumentSet) -> Self {
        Self {
            component: component.into(),
            args,
        }
    }
}

type RenderFn = Arc<dyn Fn(&dyn Component, &ArgumentSet) -> RenderOutput + Send + Sync>;

/// An opaque render function of (component, arguments) -> output.
///
/// Cloning is cheap; the underlying closure is immutable and shared.
#[derive(Clone)]
pub struct RenderTemplate {
    render: RenderFn,
}

impl RenderTemplate {
    pub fn new<F>(render: F) -> Self
    where
        F: Fn(&dyn Component, &ArgumentSet) -> RenderOutput + Send + Sync + 'static,
    {
        Self {
            render: Arc::new(render),
        }
    }

    /// The canonical template: forward all arguments straight to the
    /// component, i.e. `(args) => <Component {...args} />`.
    pub fn passthrough() -> Self {
        Self::new(|component, args| component.invoke(args))
    }

    /// Derive an independent variant template carrying `defaults` as its
    /// argument overlay. Never mutates `self` or earlier derivations.
    pub fn bind(&self, defaults: ArgumentSet) -> BoundTemplate {
        BoundTemplate {
            base: Arc::clone(&self.render),
            defaults,
        }
    }

    /// Evaluate the base template directly, with no default overlay.
    pub fn render(&self, component: &dyn Component, args: &ArgumentSet) -> RenderOutput {
        (self.render)(component, args)
    }
}

impl fmt::Debug for RenderTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenderTemplate").finish_non_exhaustive()
    }
}

/// A derived render template: the base render function plus this
/// variant's own default arguments.
#[derive(Clone)]
pub struct BoundTemplate {
    base: RenderFn,
    defaults: ArgumentSet,
}

impl BoundTemplate {
    pub fn defaults(&self) -> &ArgumentSet {
        &self.defaults
    }

    /// Reassign this variant's defaults slot. Only this bound template is
    /// affected; the base and sibling derivations keep their own sets.
    pub fn set_defaults(&mut self, defaults: ArgumentSet) {
        self.defaults = defaults;
    }

    /// Evaluate the base template with `defaults` merged under the
    /// caller-supplied `runtime` set (runtime wins on shared keys).
    pub fn render(&self, component: &dyn Component, runtime: &ArgumentSet) -> RenderOutput {
        let merged = self.defaults.merged_with(runtime);
        (self.base)(component, &merged)
    }
}

impl fmt::Debug for BoundTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundTemplate")
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}
