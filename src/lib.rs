//! Storybook Core - story catalog for a component preview host
//!
//! This library turns story declarations (a title path, a component
//! reference, a render template, and named variants with default
//! arguments) into structured, addressable catalog entries an external
//! preview renderer can enumerate, identify, and invoke.
//!
//! # Components
//!
//! - [`TitlePath`] - hierarchical breadcrumb parsed from a story title
//! - [`StoryId`] - stable, URL-safe variant identifier
//! - [`RenderTemplate`] / [`BoundTemplate`] - base templates and
//!   per-variant derivations carrying default-argument overlays
//! - [`StoryEntry`] - the aggregate record exposed to the renderer
//! - [`registry`] - per-instance and process-scoped catalogs
//!
//! # Usage
//!
//! ```rust,ignore
//! use storybook_core::{args, registry, RenderTemplate, StoryEntry};
//!
//! let entry = StoryEntry::builder("Examples/Button", button)
//!     .template(RenderTemplate::passthrough())
//!     .variant("Default", args! { "children": "Click" })
//!     .build()?;
//! registry::register(entry)?;
//! ```

pub mod args;
pub mod error;
pub mod ident;
pub mod logging;
pub mod registry;
pub mod story;
pub mod template;
pub mod title;

#[cfg(test)]
mod story_tests;

pub use error::{Result, ResultExt, StoryError};
pub use ident::StoryId;
pub use story::{StoryBuilder, StoryEntry, Variant};
pub use template::{BoundTemplate, Component, ComponentRef, RenderOutput, RenderTemplate};
pub use title::TitlePath;

pub use crate::args::ArgumentSet;
