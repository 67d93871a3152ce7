//! Command implementations behind the `firemap` binary.

use catalog::{
    CatalogError, CatalogManifest, Category, ClassificationAxis, ClassificationLevel, RegionCode,
    ResourceCatalog, ResourceLocator, ResourceProbe, Resolved, Selection, ValidationError, build,
    content_hash, validate,
};
use runtime::Event;
use serde::Serialize;
use surface::{DisplaySurface, InMemoryBackend, SurfaceConfig};
use viewstate::{ControllerError, Outcome, ViewStateController};

#[derive(Debug)]
pub enum ToolError {
    Catalog(CatalogError),
    Validation(ValidationError),
    Controller(ControllerError),
    /// Verification found documents missing from the plots directory.
    MissingDocuments(Vec<String>),
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToolError::Catalog(e) => write!(f, "{e}"),
            ToolError::Validation(e) => write!(f, "{e} ({})", e.notice()),
            ToolError::Controller(e) => write!(f, "{e}"),
            ToolError::MissingDocuments(paths) => {
                write!(f, "{} document(s) missing: {}", paths.len(), paths.join(", "))
            }
        }
    }
}

impl std::error::Error for ToolError {}

impl From<CatalogError> for ToolError {
    fn from(e: CatalogError) -> Self {
        ToolError::Catalog(e)
    }
}

impl From<ValidationError> for ToolError {
    fn from(e: ValidationError) -> Self {
        ToolError::Validation(e)
    }
}

impl From<ControllerError> for ToolError {
    fn from(e: ControllerError) -> Self {
        ToolError::Controller(e)
    }
}

/// Selection fields as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct SelectionArgs {
    pub category: String,
    pub region: Option<String>,
    pub axis: Option<String>,
    pub level: Option<String>,
}

impl SelectionArgs {
    /// Strict parse: unlike the interactive viewer, a bad token on the command
    /// line is an error rather than an unset field.
    pub fn to_selection(&self) -> Result<Selection, ToolError> {
        let mut selection = Selection::new(Category::parse(&self.category)?);
        if let Some(region) = &self.region {
            selection.set_region(Some(RegionCode::parse(region)?))?;
        }
        if let Some(axis) = &self.axis {
            selection.set_axis(Some(ClassificationAxis::parse(axis)?))?;
        }
        if let Some(level) = &self.level {
            selection.set_level(Some(ClassificationLevel::parse(level)?))?;
        }
        Ok(selection)
    }
}

pub fn manifest() -> CatalogManifest {
    CatalogManifest::from_catalog(&ResourceCatalog::new())
}

/// Validates and resolves a selection. `None` means the home view.
pub fn resolve(args: &SelectionArgs) -> Result<Option<ResourceLocator>, ToolError> {
    let valid = validate(&args.to_selection()?)?;
    Ok(match build(&valid) {
        Resolved::Visualization(locator) => Some(locator),
        Resolved::Informational => None,
    })
}

/// Region contents after a headless session.
#[derive(Debug, Clone, Serialize)]
pub struct RenderedSession {
    pub filter: String,
    pub display: String,
    pub notice: Option<String>,
    pub events: Vec<Event>,
}

/// Replays the interactions a user would make for `args` against an
/// in-memory surface and returns what both regions end up showing.
///
/// Arguments are checked as strictly as in [`resolve`] first; the viewer
/// itself would silently drop them.
pub fn render(args: &SelectionArgs, config: SurfaceConfig) -> Result<RenderedSession, ToolError> {
    let category = args.to_selection()?.category();
    let surface = DisplaySurface::new(InMemoryBackend::new(), config);
    let mut controller = ViewStateController::new(surface)?;
    controller.drain_events();

    controller.choose_category(category)?;
    if let Some(axis) = &args.axis {
        controller.change_axis(axis)?;
    }
    if let Some(region) = &args.region {
        controller.change_region(region)?;
    }
    if let Some(level) = &args.level {
        controller.change_level(level)?;
    }

    let mut notice = None;
    if category.needs_sub_selection() {
        if let Outcome::Notice(msg) = controller.generate()? {
            notice = Some(msg.to_string());
        }
        controller.refresh_controls()?;
    }

    let backend = controller.surface().backend();
    Ok(RenderedSession {
        filter: backend.filter().to_string(),
        display: backend.display().to_string(),
        notice,
        events: controller.drain_events(),
    })
}

/// Checks every catalog document against `probe` and fills in content hashes
/// for the ones present. Returns the annotated manifest and the missing paths.
pub fn verify(probe: &impl ResourceProbe) -> Result<(CatalogManifest, Vec<String>), ToolError> {
    let mut manifest = manifest();
    let mut missing = Vec::new();
    for entry in &mut manifest.entries {
        let locator = ResourceLocator {
            path: entry.path.clone(),
            title: entry.title.clone(),
        };
        match probe.read(&locator)? {
            Some(bytes) => entry.content_hash = Some(content_hash(&bytes)),
            None => {
                tracing::warn!(path = %entry.path, "document missing");
                missing.push(entry.path.clone());
            }
        }
    }
    Ok((manifest, missing))
}
