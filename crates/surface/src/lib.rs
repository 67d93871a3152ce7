//! The display surface: the filter-controls region and the display region of
//! the page shell, written only through full replacement.

pub mod backend;
pub mod config;

pub use backend::*;
pub use config::*;

use catalog::ResourceLocator;
use view::{Element, Node, to_html};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    DocumentUnavailable,
    MissingRegion(String),
    Config(String),
}

impl std::fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SurfaceError::DocumentUnavailable => write!(f, "browser document unavailable"),
            SurfaceError::MissingRegion(id) => write!(f, "page shell has no element #{id}"),
            SurfaceError::Config(msg) => write!(f, "invalid surface config: {msg}"),
        }
    }
}

impl std::error::Error for SurfaceError {}

/// What the display region should show.
#[derive(Debug, Clone, Copy)]
pub enum DisplayContent<'a> {
    Empty,
    Locator(&'a ResourceLocator),
    Informational(&'a Node),
}

#[derive(Debug)]
pub struct DisplaySurface<B> {
    backend: B,
    config: SurfaceConfig,
}

impl<B: RegionBackend> DisplaySurface<B> {
    pub fn new(backend: B, config: SurfaceConfig) -> Self {
        Self { backend, config }
    }

    /// Replaces the filter-controls region; `None` clears it.
    pub fn set_filter_region(&mut self, controls: Option<&Node>) -> Result<(), SurfaceError> {
        let html = controls.map(to_html).unwrap_or_default();
        self.backend.replace(RegionId::Filter, &html)
    }

    /// Replaces the display region.
    pub fn set_display(&mut self, content: DisplayContent<'_>) -> Result<(), SurfaceError> {
        let html = match content {
            DisplayContent::Empty => String::new(),
            DisplayContent::Locator(locator) => {
                tracing::debug!(path = %locator.path, "embedding visualization");
                to_html(&self.frame(locator))
            }
            DisplayContent::Informational(node) => to_html(node),
        };
        self.backend.replace(RegionId::Display, &html)
    }

    /// Empties both regions.
    pub fn clear(&mut self) -> Result<(), SurfaceError> {
        self.set_filter_region(None)?;
        self.set_display(DisplayContent::Empty)
    }

    /// Inline frame filling the display region.
    pub fn frame(&self, locator: &ResourceLocator) -> Node {
        Element::new("iframe")
            .attr("src", self.config.document_src(&locator.path))
            .attr("title", locator.title.as_str())
            .attr("id", self.config.frame_id.as_str())
            .attr("style", self.config.frame_style())
            .into()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
