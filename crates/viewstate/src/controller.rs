use std::collections::HashMap;

use catalog::{
    CatalogError, Category, ClassificationAxis, ClassificationLevel, Field, RegionCode,
    Resolved, Selection, ValidSelection, ValidationError, build, validate,
};
use runtime::{Event, EventBus, EventKind};
use surface::{DisplayContent, DisplaySurface, RegionBackend, SurfaceError};
use tracing::{debug, info, warn};
use view::Node;

use crate::controls::{Binding, ControlId, bindings_for, filter_controls};
use crate::home::home_content;

const EVENT_HISTORY: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    /// Informational narrative, no filters.
    Home,
    /// A category needing sub-selection is being refined.
    CategorySelected(Selection),
    /// A visualization is displayed. The selection is kept so editing can
    /// resume without choosing the category again.
    Ready {
        selection: Selection,
        valid: ValidSelection,
    },
}

/// Result of handling one user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The display region was rewritten.
    Rendered,
    /// The selection or the filter region changed; nothing displayed yet.
    Updated,
    /// Blocking message for the user; nothing changed.
    Notice(&'static str),
    /// The action did not apply to the current state.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerError {
    Surface(SurfaceError),
    Catalog(CatalogError),
}

impl std::fmt::Display for ControllerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ControllerError::Surface(e) => write!(f, "display surface: {e}"),
            ControllerError::Catalog(e) => write!(f, "catalog: {e}"),
        }
    }
}

impl std::error::Error for ControllerError {}

impl From<SurfaceError> for ControllerError {
    fn from(e: SurfaceError) -> Self {
        ControllerError::Surface(e)
    }
}

impl From<CatalogError> for ControllerError {
    fn from(e: CatalogError) -> Self {
        ControllerError::Catalog(e)
    }
}

/// Handler attached to a control; receives the control's current value.
pub type Handler<B> = fn(&mut ViewStateController<B>, &str) -> Result<Outcome, ControllerError>;

/// Session state machine. Owns the display surface; nothing else writes to it.
pub struct ViewStateController<B> {
    surface: DisplaySurface<B>,
    state: ViewState,
    handlers: HashMap<ControlId, Handler<B>>,
    events: EventBus,
    home: Node,
    filter_revision: u64,
}

impl<B: RegionBackend> ViewStateController<B> {
    /// Starts a session on the home view.
    pub fn new(surface: DisplaySurface<B>) -> Result<Self, ControllerError> {
        let mut handlers: HashMap<ControlId, Handler<B>> = HashMap::new();
        handlers.insert(ControlId::RegionSelect, Self::change_region);
        handlers.insert(ControlId::AxisSelect, Self::change_axis);
        handlers.insert(ControlId::LevelSelect, Self::change_level);
        handlers.insert(ControlId::Generate, |c, _| c.generate());

        let mut controller = Self {
            surface,
            state: ViewState::Home,
            handlers,
            events: EventBus::with_limit(EVENT_HISTORY),
            home: home_content(),
            filter_revision: 0,
        };
        controller.choose_category(Category::Home)?;
        Ok(controller)
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Selection being edited or displayed; `None` on the home view.
    pub fn selection(&self) -> Option<&Selection> {
        match &self.state {
            ViewState::Home => None,
            ViewState::CategorySelected(selection) | ViewState::Ready { selection, .. } => {
                Some(selection)
            }
        }
    }

    pub fn surface(&self) -> &DisplaySurface<B> {
        &self.surface
    }

    pub fn events(&self) -> &[Event] {
        self.events.events()
    }

    pub fn drain_events(&mut self) -> Vec<Event> {
        self.events.drain()
    }

    /// Bumped on every filter-region write; hosts re-attach listeners when it
    /// changes.
    pub fn filter_revision(&self) -> u64 {
        self.filter_revision
    }

    /// Listeners the current filter region needs.
    pub fn bindings(&self) -> &'static [Binding] {
        self.selection()
            .map(|s| bindings_for(s.category()))
            .unwrap_or(&[])
    }

    /// Switches to `category`. Both regions are cleared before anything new is
    /// written.
    pub fn choose_category(&mut self, category: Category) -> Result<Outcome, ControllerError> {
        info!(%category, "category chosen");
        self.surface.clear()?;
        self.filter_revision += 1;
        self.events.emit(EventKind::Category, category.token());

        let selection = Selection::new(category);
        if category.needs_sub_selection() {
            self.write_controls(&selection)?;
            self.state = ViewState::CategorySelected(selection);
            return Ok(Outcome::Updated);
        }
        match validate(&selection) {
            Ok(valid) => self.render(selection, valid),
            Err(e) => Ok(self.notice(e)),
        }
    }

    /// Category chosen by token, as it arrives from the menu. Unknown tokens
    /// leave everything untouched.
    pub fn choose_category_token(&mut self, token: &str) -> Result<Outcome, ControllerError> {
        match Category::parse(token) {
            Ok(category) => self.choose_category(category),
            Err(e) => {
                warn!("ignoring category: {e}");
                Ok(self.ignore(format!("category {token:?}")))
            }
        }
    }

    pub fn change_region(&mut self, raw: &str) -> Result<Outcome, ControllerError> {
        let region = parse_field(raw, RegionCode::parse);
        let Some(selection) = self.begin_edit(Field::Region) else {
            return Ok(self.ignore(format!("region {raw:?}")));
        };
        selection.set_region(region)?;
        self.events
            .emit(EventKind::Field, format!("region={}", token_or_unset(region)));
        Ok(Outcome::Updated)
    }

    /// Changing the axis always drops the level and rebuilds the level
    /// selector for the new axis.
    pub fn change_axis(&mut self, raw: &str) -> Result<Outcome, ControllerError> {
        let axis = parse_field(raw, ClassificationAxis::parse);
        let Some(selection) = self.begin_edit(Field::Axis) else {
            return Ok(self.ignore(format!("axis {raw:?}")));
        };
        selection.set_axis(axis)?;
        let selection = selection.clone();
        self.write_controls(&selection)?;
        self.events
            .emit(EventKind::Field, format!("axis={}", token_or_unset(axis)));
        Ok(Outcome::Updated)
    }

    pub fn change_level(&mut self, raw: &str) -> Result<Outcome, ControllerError> {
        let level = parse_field(raw, ClassificationLevel::parse);
        let Some(selection) = self.begin_edit(Field::Level) else {
            return Ok(self.ignore(format!("level {raw:?}")));
        };
        let stored = match selection.set_level(level) {
            Ok(()) => level,
            Err(e) => {
                warn!("dropping level: {e}");
                selection.set_level(None)?;
                None
            }
        };
        self.events
            .emit(EventKind::Field, format!("level={}", token_or_unset(stored)));
        Ok(Outcome::Updated)
    }

    /// Validates the current selection and displays it. On failure the
    /// returned notice is the only effect.
    pub fn generate(&mut self) -> Result<Outcome, ControllerError> {
        let Some(selection) = self.selection().cloned() else {
            return Ok(self.ignore("generate on home".to_string()));
        };
        self.events
            .emit(EventKind::Generate, selection.category().token());
        match validate(&selection) {
            Ok(valid) => self.render(selection, valid),
            Err(e) => Ok(self.notice(e)),
        }
    }

    /// Routes a control event to the handler registered for it.
    pub fn dispatch(&mut self, control: ControlId, value: &str) -> Result<Outcome, ControllerError> {
        match self.handlers.get(&control).copied() {
            Some(handler) => handler(self, value),
            None => Ok(self.ignore(format!("{} has no handler", control.dom_id()))),
        }
    }

    /// Rewrites the filter region from the current selection, so it shows the
    /// values picked so far.
    pub fn refresh_controls(&mut self) -> Result<(), ControllerError> {
        match self.selection().cloned() {
            Some(selection) => self.write_controls(&selection),
            None => {
                self.surface.set_filter_region(None)?;
                self.filter_revision += 1;
                Ok(())
            }
        }
    }

    fn render(
        &mut self,
        selection: Selection,
        valid: ValidSelection,
    ) -> Result<Outcome, ControllerError> {
        match build(&valid) {
            Resolved::Visualization(locator) => {
                self.surface.set_display(DisplayContent::Locator(&locator))?;
                self.events.emit(EventKind::Render, locator.path);
            }
            Resolved::Informational => {
                self.surface
                    .set_display(DisplayContent::Informational(&self.home))?;
                self.events.emit(EventKind::Render, "home");
            }
        }
        self.state = match valid {
            ValidSelection::Home => ViewState::Home,
            _ => ViewState::Ready { selection, valid },
        };
        Ok(Outcome::Rendered)
    }

    fn write_controls(&mut self, selection: &Selection) -> Result<(), ControllerError> {
        let controls = filter_controls(selection);
        self.surface.set_filter_region(controls.as_ref())?;
        self.filter_revision += 1;
        Ok(())
    }

    /// Returns the selection to edit when the current category declares
    /// `field`. Editing a displayed selection moves back to `CategorySelected`.
    fn begin_edit(&mut self, field: Field) -> Option<&mut Selection> {
        let state = std::mem::replace(&mut self.state, ViewState::Home);
        self.state = match state {
            ViewState::Ready { selection, .. } if selection.category().declares(field) => {
                ViewState::CategorySelected(selection)
            }
            other => other,
        };
        match &mut self.state {
            ViewState::CategorySelected(selection) if selection.category().declares(field) => {
                Some(selection)
            }
            _ => None,
        }
    }

    fn notice(&mut self, e: ValidationError) -> Outcome {
        warn!("generate blocked: {e}");
        self.events.emit(EventKind::Notice, e.to_string());
        Outcome::Notice(e.notice())
    }

    fn ignore(&mut self, what: String) -> Outcome {
        debug!("ignored {what}");
        self.events.emit(EventKind::Ignored, what);
        Outcome::Ignored
    }
}

/// Empty control values are the placeholder option. Anything not in the
/// closed catalog is treated the same way and never reaches a path.
fn parse_field<T>(raw: &str, parse: fn(&str) -> Result<T, CatalogError>) -> Option<T> {
    if raw.trim().is_empty() {
        return None;
    }
    match parse(raw) {
        Ok(v) => Some(v),
        Err(e) => {
            warn!("treating control value as unset: {e}");
            None
        }
    }
}

fn token_or_unset<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "unset".to_string(), |v| v.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use surface::{InMemoryBackend, RegionId, SurfaceConfig};

    type Controller = ViewStateController<InMemoryBackend>;

    fn controller() -> Controller {
        let surface = DisplaySurface::new(InMemoryBackend::new(), SurfaceConfig::default());
        ViewStateController::new(surface).unwrap()
    }

    fn filter(c: &Controller) -> &str {
        c.surface().backend().filter()
    }

    fn display(c: &Controller) -> &str {
        c.surface().backend().display()
    }

    /// Records every write so tests can check ordering.
    #[derive(Default)]
    struct RecordingBackend {
        inner: InMemoryBackend,
        log: Vec<(RegionId, String)>,
    }

    impl RegionBackend for RecordingBackend {
        fn replace(&mut self, region: RegionId, html: &str) -> Result<(), SurfaceError> {
            self.log.push((region, html.to_string()));
            self.inner.replace(region, html)
        }

        fn contents(&self, region: RegionId) -> Result<String, SurfaceError> {
            self.inner.contents(region)
        }
    }

    #[test]
    fn starts_on_home_with_narrative() {
        let c = controller();
        assert_eq!(c.state(), &ViewState::Home);
        assert_eq!(filter(&c), "");
        assert!(display(&c).contains("home-content"));
        assert!(c.bindings().is_empty());
    }

    #[test]
    fn immediate_categories_render_without_generate() {
        let mut c = controller();
        let mut seen = Vec::new();
        for category in [Category::Points, Category::Biomes, Category::GeneralByState] {
            assert_eq!(c.choose_category(category).unwrap(), Outcome::Rendered);
            assert!(matches!(c.state(), ViewState::Ready { .. }));
            assert!(display(&c).starts_with("<iframe"));
            assert_eq!(filter(&c), "");
            seen.push(display(&c).to_string());
        }
        seen.dedup();
        assert_eq!(seen.len(), 3);

        assert_eq!(c.choose_category(Category::Home).unwrap(), Outcome::Rendered);
        assert_eq!(c.state(), &ViewState::Home);
        assert!(display(&c).contains("home-content"));
    }

    #[test]
    fn by_state_requires_region() {
        let mut c = controller();
        assert_eq!(c.choose_category(Category::ByState).unwrap(), Outcome::Updated);
        assert!(filter(&c).contains("id=\"region-select\""));
        assert_eq!(display(&c), "");

        let writes = c.surface().backend().writes();
        assert_eq!(
            c.generate().unwrap(),
            Outcome::Notice("Por favor, selecione um estado.")
        );
        assert_eq!(c.surface().backend().writes(), writes);
        assert!(matches!(c.state(), ViewState::CategorySelected(_)));

        c.change_region("SP").unwrap();
        assert_eq!(c.generate().unwrap(), Outcome::Rendered);
        assert!(display(&c).contains("src=\"./files/plots/by-state/SP_map.html\""));
        assert!(display(&c).contains("title=\"Mapa por Estado\""));
    }

    #[test]
    fn axis_change_resets_level_and_rebuilds_level_options() {
        let mut c = controller();
        c.choose_category(Category::ByClassification).unwrap();
        c.change_level("VeryHigh").unwrap();
        assert_eq!(
            c.selection().unwrap().level(),
            Some(ClassificationLevel::VeryHigh)
        );

        let revision = c.filter_revision();
        c.change_axis("fire_risk").unwrap();
        assert_eq!(c.selection().unwrap().level(), None);
        assert!(c.filter_revision() > revision);
        assert!(filter(&c).contains("<option value=\"Low\">Baixo</option>"));
        assert!(!filter(&c).contains("VeryHigh"));
        assert_eq!(
            c.generate().unwrap(),
            Outcome::Notice("Por favor, selecione um nível de classificação.")
        );
    }

    #[test]
    fn frp_high_resolves_to_classification_document() {
        let mut c = controller();
        c.choose_category(Category::ByClassification).unwrap();
        c.dispatch(ControlId::LevelSelect, "High").unwrap();
        assert_eq!(c.dispatch(ControlId::Generate, "").unwrap(), Outcome::Rendered);
        assert!(display(&c).contains("by-category/frp/High_frp.html"));
        assert_eq!(
            c.state(),
            &ViewState::Ready {
                selection: c.selection().unwrap().clone(),
                valid: ValidSelection::ByClassification {
                    axis: ClassificationAxis::FireRadiativePower,
                    level: ClassificationLevel::High,
                },
            }
        );
    }

    #[test]
    fn editing_after_ready_returns_to_category_selected() {
        let mut c = controller();
        c.choose_category(Category::ByState).unwrap();
        c.change_region("SP").unwrap();
        c.generate().unwrap();
        let shown = display(&c).to_string();

        c.change_region("RJ").unwrap();
        assert!(matches!(c.state(), ViewState::CategorySelected(_)));
        assert_eq!(display(&c), shown);

        c.generate().unwrap();
        assert!(display(&c).contains("RJ_map.html"));
    }

    #[test]
    fn level_not_offered_by_axis_is_dropped() {
        let mut c = controller();
        c.choose_category(Category::ByClassification).unwrap();
        c.change_axis("fire_risk").unwrap();
        c.change_level("VeryLow").unwrap();
        assert_eq!(c.selection().unwrap().level(), None);
    }

    #[test]
    fn unknown_values_never_reach_the_locator() {
        let mut c = controller();
        c.choose_category(Category::ByState).unwrap();
        c.change_region("../../etc/passwd").unwrap();
        assert_eq!(c.selection().unwrap().region(), None);
        assert!(matches!(c.generate().unwrap(), Outcome::Notice(_)));
    }

    #[test]
    fn unknown_category_token_is_a_no_op() {
        let mut c = controller();
        c.choose_category(Category::ByState).unwrap();
        c.change_region("SP").unwrap();
        c.generate().unwrap();
        let (f, d) = (filter(&c).to_string(), display(&c).to_string());
        let writes = c.surface().backend().writes();

        assert_eq!(c.choose_category_token("municipios").unwrap(), Outcome::Ignored);
        assert_eq!(c.surface().backend().writes(), writes);
        assert_eq!(filter(&c), f);
        assert_eq!(display(&c), d);
        assert_eq!(c.events().last().unwrap().kind, EventKind::Ignored);
    }

    #[test]
    fn fields_of_other_categories_are_ignored() {
        let mut c = controller();
        c.choose_category(Category::Points).unwrap();
        assert_eq!(c.change_region("SP").unwrap(), Outcome::Ignored);
        assert!(matches!(c.state(), ViewState::Ready { .. }));

        c.choose_category(Category::ByState).unwrap();
        assert_eq!(c.change_axis("frp").unwrap(), Outcome::Ignored);
        assert_eq!(c.generate().unwrap(), Outcome::Notice("Por favor, selecione um estado."));
    }

    #[test]
    fn generate_on_home_is_ignored() {
        let mut c = controller();
        assert_eq!(c.generate().unwrap(), Outcome::Ignored);
    }

    #[test]
    fn switching_category_clears_both_regions_first() {
        let surface = DisplaySurface::new(RecordingBackend::default(), SurfaceConfig::default());
        let mut c = ViewStateController::new(surface).unwrap();
        c.choose_category(Category::ByState).unwrap();
        c.change_region("SP").unwrap();
        c.generate().unwrap();

        let before = c.surface().backend().log.len();
        c.choose_category(Category::ByClassification).unwrap();
        let writes = &c.surface().backend().log[before..];
        assert_eq!(writes[0], (RegionId::Filter, String::new()));
        assert_eq!(writes[1], (RegionId::Display, String::new()));
        assert_eq!(writes[2].0, RegionId::Filter);
        assert!(writes[2].1.contains("axis-select"));
        assert!(!writes[2].1.contains("region-select"));
        assert_eq!(c.surface().backend().inner.display(), "");
    }

    #[test]
    fn bindings_follow_current_category() {
        let mut c = controller();
        c.choose_category(Category::ByState).unwrap();
        let controls: Vec<ControlId> = c.bindings().iter().map(|b| b.control).collect();
        assert_eq!(controls, vec![ControlId::RegionSelect, ControlId::Generate]);

        c.choose_category(Category::Biomes).unwrap();
        assert!(c.bindings().is_empty());
    }

    #[test]
    fn refresh_controls_shows_picked_values() {
        let mut c = controller();
        c.choose_category(Category::ByState).unwrap();
        c.change_region("SP").unwrap();
        assert!(!filter(&c).contains("value=\"SP\" selected"));
        c.refresh_controls().unwrap();
        assert!(filter(&c).contains("<option value=\"SP\" selected>São Paulo</option>"));
    }

    #[test]
    fn session_trace_records_transitions() {
        let mut c = controller();
        c.drain_events();
        c.choose_category(Category::ByState).unwrap();
        c.generate().unwrap();
        c.change_region("SP").unwrap();
        c.generate().unwrap();
        let kinds: Vec<EventKind> = c.events().iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                EventKind::Category,
                EventKind::Generate,
                EventKind::Notice,
                EventKind::Field,
                EventKind::Generate,
                EventKind::Render,
            ]
        );
        assert_eq!(c.events()[5].message, "by-state/SP_map.html");
    }
}
