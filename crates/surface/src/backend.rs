use crate::SurfaceError;

/// The two regions of the page shell owned by the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionId {
    Filter,
    Display,
}

/// Sink for region writes. Every write replaces the whole region.
pub trait RegionBackend {
    fn replace(&mut self, region: RegionId, html: &str) -> Result<(), SurfaceError>;
    fn contents(&self, region: RegionId) -> Result<String, SurfaceError>;
}

/// Headless backend: keeps region contents as strings.
#[derive(Debug, Default, Clone)]
pub struct InMemoryBackend {
    filter: String,
    display: String,
    writes: u64,
}

impl InMemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    /// Number of region writes performed so far.
    pub fn writes(&self) -> u64 {
        self.writes
    }
}

impl RegionBackend for InMemoryBackend {
    fn replace(&mut self, region: RegionId, html: &str) -> Result<(), SurfaceError> {
        let slot = match region {
            RegionId::Filter => &mut self.filter,
            RegionId::Display => &mut self.display,
        };
        slot.clear();
        slot.push_str(html);
        self.writes += 1;
        Ok(())
    }

    fn contents(&self, region: RegionId) -> Result<String, SurfaceError> {
        Ok(match region {
            RegionId::Filter => self.filter.clone(),
            RegionId::Display => self.display.clone(),
        })
    }
}

#[cfg(target_arch = "wasm32")]
mod dom {
    use super::{RegionBackend, RegionId};
    use crate::{SurfaceConfig, SurfaceError};

    /// Writes regions into the live document through `innerHTML`.
    #[derive(Debug)]
    pub struct DomBackend {
        document: web_sys::Document,
        filter_id: String,
        display_id: String,
    }

    impl DomBackend {
        /// Both regions must already be in the document.
        pub fn new(config: &SurfaceConfig) -> Result<Self, SurfaceError> {
            let document = web_sys::window()
                .and_then(|w| w.document())
                .ok_or(SurfaceError::DocumentUnavailable)?;
            let backend = Self {
                document,
                filter_id: config.filter_region_id.clone(),
                display_id: config.display_region_id.clone(),
            };
            backend.element(RegionId::Filter)?;
            backend.element(RegionId::Display)?;
            Ok(backend)
        }

        fn element(&self, region: RegionId) -> Result<web_sys::Element, SurfaceError> {
            let id = match region {
                RegionId::Filter => &self.filter_id,
                RegionId::Display => &self.display_id,
            };
            self.document
                .get_element_by_id(id)
                .ok_or_else(|| SurfaceError::MissingRegion(id.clone()))
        }
    }

    impl RegionBackend for DomBackend {
        fn replace(&mut self, region: RegionId, html: &str) -> Result<(), SurfaceError> {
            self.element(region)?.set_inner_html(html);
            Ok(())
        }

        fn contents(&self, region: RegionId) -> Result<String, SurfaceError> {
            Ok(self.element(region)?.inner_html())
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use dom::DomBackend;

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct DomBackend;

#[cfg(not(target_arch = "wasm32"))]
impl DomBackend {
    pub fn new(_config: &crate::SurfaceConfig) -> Result<Self, SurfaceError> {
        Err(SurfaceError::DocumentUnavailable)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl RegionBackend for DomBackend {
    fn replace(&mut self, _region: RegionId, _html: &str) -> Result<(), SurfaceError> {
        Err(SurfaceError::DocumentUnavailable)
    }

    fn contents(&self, _region: RegionId) -> Result<String, SurfaceError> {
        Err(SurfaceError::DocumentUnavailable)
    }
}
