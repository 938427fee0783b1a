//! Page assembly and static site generation for swatch.
//!
//! [`PageAssembler`] turns a component id into an ordered page model,
//! [`SiteRenderer`] wraps page models in the site chrome, and
//! [`StaticBuilder`] writes every page of both languages to disk.

pub mod assets;
pub mod builder;
pub mod markdown;
pub mod page;
pub mod renderer;
pub mod templates;

pub use assets::AssetPipeline;
pub use builder::{BuildConfig, BuildError, BuildResult, StaticBuilder};
pub use page::{ComponentPage, PageAssembler, Section, SectionBody, SectionId, TocEntry};
pub use renderer::{LinkStyle, RenderError, RenderOptions, Route, SiteRenderer};
pub use templates::TemplateEngine;
