//! Story entries: the catalog record an external preview host consumes.
//!
//! A story is declared with a title, a component reference, a base render
//! template, and named variants. Building the entry parses the title,
//! derives a stable identifier per variant, and binds each variant its
//! own template derivation. The whole declaration is validated up front:
//! a colliding variant rejects the entire entry and registers nothing.

use std::collections::HashMap;

use tracing::debug;

use crate::args::ArgumentSet;
use crate::error::{Result, StoryError};
use crate::ident::StoryId;
use crate::template::{BoundTemplate, ComponentRef, RenderOutput, RenderTemplate};
use crate::title::TitlePath;

/// One named, independently configurable configuration of a story.
pub struct Variant {
    id: StoryId,
    name: String,
    template: BoundTemplate,
}

impl Variant {
    pub fn id(&self) -> &StoryId {
        &self.id
    }

    /// Author-facing display name, e.g. `"Default"` or `"默认"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The defaults this variant renders with when the caller supplies
    /// no runtime arguments. Read-only from the host's perspective.
    pub fn defaults(&self) -> &ArgumentSet {
        self.template.defaults()
    }
}

/// Declaration-order builder for a [`StoryEntry`].
///
/// Mirrors the authoring surface: title and component up front, then a
/// base template, optional story-level args, and named variants.
pub struct StoryBuilder {
    title: String,
    component: ComponentRef,
    template: Option<RenderTemplate>,
    base_args: ArgumentSet,
    variants: Vec<(String, ArgumentSet)>,
}

impl StoryBuilder {
    pub fn new(title: impl Into<String>, component: ComponentRef) -> Self {
        Self {
            title: title.into(),
            component,
            template: None,
            base_args: ArgumentSet::new(),
            variants: Vec::new(),
        }
    }

    /// Set the base render template every variant derives from.
    pub fn template(mut self, template: RenderTemplate) -> Self {
        self.template = Some(template);
        self
    }

    /// Story-level default args, inherited by every variant below its
    /// own overlay.
    pub fn args(mut self, args: ArgumentSet) -> Self {
        self.base_args = args;
        self
    }

    /// Declare a variant. Order is preserved in the built entry.
    pub fn variant(mut self, name: impl Into<String>, args: ArgumentSet) -> Self {
        self.variants.push((name.into(), args));
        self
    }

    /// Validate the declaration and produce the immutable entry.
    pub fn build(self) -> Result<StoryEntry> {
        let title = TitlePath::parse(&self.title)?;

        let template = match self.template {
            Some(template) => template,
            // A story with no variants needs no template yet; one that
            // binds variants does.
            None if self.variants.is_empty() => RenderTemplate::passthrough(),
            None => return Err(StoryError::UnboundTemplate),
        };

        let mut variants: Vec<Variant> = Vec::with_capacity(self.variants.len());
        let mut id_to_index: HashMap<StoryId, usize> = HashMap::with_capacity(self.variants.len());

        for (name, overlay) in self.variants {
            let id = StoryId::derive(&title, &name);
            if id_to_index.contains_key(&id) {
                return Err(StoryError::DuplicateIdentifier(id.to_string()));
            }

            // Merge order: story args < variant args < runtime args.
            let defaults = self.base_args.merged_with(&overlay);
            id_to_index.insert(id.clone(), variants.len());
            variants.push(Variant {
                id,
                name,
                template: template.bind(defaults),
            });
        }

        debug!(
            title = %title,
            variants = variants.len(),
            "built story entry"
        );

        Ok(StoryEntry {
            title,
            component: self.component,
            variants,
            id_to_index,
        })
    }
}

/// Immutable catalog record for one story: title path, component
/// reference, and the variant mapping. This is the only object exposed
/// across the boundary to the external renderer.
pub struct StoryEntry {
    title: TitlePath,
    component: ComponentRef,
    variants: Vec<Variant>,
    id_to_index: HashMap<StoryId, usize>,
}

impl StoryEntry {
    /// Start a declaration for `component` under `title`.
    pub fn builder(title: impl Into<String>, component: ComponentRef) -> StoryBuilder {
        StoryBuilder::new(title, component)
    }

    pub fn title_path(&self) -> &TitlePath {
        &self.title
    }

    /// Top-level catalog category (first title segment).
    pub fn category(&self) -> &str {
        self.title.root()
    }

    /// Display name of the story (last title segment).
    pub fn name(&self) -> &str {
        self.title.leaf()
    }

    pub fn component_name(&self) -> &str {
        self.component.name()
    }

    /// Enumerate variants as (identifier, display name), in declaration
    /// order.
    pub fn list_variants(&self) -> impl Iterator<Item = (&StoryId, &str)> {
        self.variants.iter().map(|v| (&v.id, v.name.as_str()))
    }

    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }

    pub fn variant(&self, id: &str) -> Option<&Variant> {
        self.id_to_index.get(id).map(|&index| &self.variants[index])
    }

    /// All identifiers this entry would claim in a registry.
    pub(crate) fn ids(&self) -> impl Iterator<Item = &StoryId> {
        self.variants.iter().map(|v| &v.id)
    }

    /// Render the variant `id` with `runtime` args layered over its
    /// defaults. Fails with [`StoryError::UnknownVariant`] for an
    /// identifier not in this entry.
    pub fn render(&self, id: &str, runtime: &ArgumentSet) -> Result<RenderOutput> {
        let variant = self
            .variant(id)
            .ok_or_else(|| StoryError::UnknownVariant(id.to_string()))?;
        Ok(variant.template.render(self.component.as_ref(), runtime))
    }
}
