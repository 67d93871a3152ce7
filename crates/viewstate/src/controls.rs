use catalog::{Category, ClassificationAxis, Selection, axes, options_for, regions};
use view::{Element, Node};

/// Interactive controls the viewer renders into the filter region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    RegionSelect,
    AxisSelect,
    LevelSelect,
    Generate,
}

impl ControlId {
    pub const ALL: [ControlId; 4] = [
        ControlId::RegionSelect,
        ControlId::AxisSelect,
        ControlId::LevelSelect,
        ControlId::Generate,
    ];

    /// Element id in the rendered markup.
    pub fn dom_id(self) -> &'static str {
        match self {
            ControlId::RegionSelect => "region-select",
            ControlId::AxisSelect => "axis-select",
            ControlId::LevelSelect => "level-select",
            ControlId::Generate => "generate-button",
        }
    }

    pub fn from_dom_id(id: &str) -> Option<Self> {
        ControlId::ALL.into_iter().find(|c| c.dom_id() == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomEvent {
    Change,
    Click,
}

impl DomEvent {
    pub fn name(self) -> &'static str {
        match self {
            DomEvent::Change => "change",
            DomEvent::Click => "click",
        }
    }
}

/// A listener the host has to attach for the current filter region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub control: ControlId,
    pub event: DomEvent,
}

const BY_STATE_BINDINGS: [Binding; 2] = [
    Binding {
        control: ControlId::RegionSelect,
        event: DomEvent::Change,
    },
    Binding {
        control: ControlId::Generate,
        event: DomEvent::Click,
    },
];

const BY_CLASSIFICATION_BINDINGS: [Binding; 3] = [
    Binding {
        control: ControlId::AxisSelect,
        event: DomEvent::Change,
    },
    Binding {
        control: ControlId::LevelSelect,
        event: DomEvent::Change,
    },
    Binding {
        control: ControlId::Generate,
        event: DomEvent::Click,
    },
];

pub fn bindings_for(category: Category) -> &'static [Binding] {
    match category {
        Category::ByState => &BY_STATE_BINDINGS,
        Category::ByClassification => &BY_CLASSIFICATION_BINDINGS,
        _ => &[],
    }
}

const REGION_PLACEHOLDER: &str = "Selecione um estado";
const LEVEL_PLACEHOLDER: &str = "Selecione uma classificação";
const GENERATE_LABEL: &str = "Gerar";

/// Filter-region markup for `selection`, with its current values selected.
/// Categories without dependent fields get no controls.
pub fn filter_controls(selection: &Selection) -> Option<Node> {
    match selection.category() {
        Category::ByState => Some(Node::Fragment(vec![
            container(1, region_select(selection)),
            container(2, generate_button()),
        ])),
        Category::ByClassification => Some(Node::Fragment(vec![
            container(1, axis_select(selection)),
            container(2, level_select(selection)),
            container(3, generate_button()),
        ])),
        _ => None,
    }
}

fn container(n: u8, control: Element) -> Node {
    Element::new("div")
        .attr("id", format!("options-container-{n}"))
        .child(control)
        .into()
}

fn option(value: &str, label: &str, selected: bool) -> Element {
    Element::new("option")
        .attr("value", value)
        .flag_if("selected", selected)
        .text(label)
}

fn region_select(selection: &Selection) -> Element {
    let current = selection.region();
    Element::new("select")
        .attr("id", ControlId::RegionSelect.dom_id())
        .child(option("", REGION_PLACEHOLDER, current.is_none()))
        .children(
            regions()
                .iter()
                .map(|r| option(r.code(), r.label(), current == Some(*r))),
        )
}

fn axis_select(selection: &Selection) -> Element {
    let current = selection.axis();
    Element::new("select")
        .attr("id", ControlId::AxisSelect.dom_id())
        .children(
            axes()
                .iter()
                .map(|a| option(a.token(), a.label(), current == Some(*a))),
        )
}

/// Level options always come from the axis currently selected.
fn level_select(selection: &Selection) -> Element {
    let current = selection.level();
    let levels = selection.axis().map(options_for).unwrap_or_default();
    let axis = selection
        .axis()
        .unwrap_or(ClassificationAxis::FireRadiativePower);
    Element::new("select")
        .attr("id", ControlId::LevelSelect.dom_id())
        .child(option("", LEVEL_PLACEHOLDER, current.is_none()))
        .children(
            levels
                .iter()
                .map(|l| option(l.token(), l.label(axis), current == Some(*l))),
        )
}

fn generate_button() -> Element {
    Element::new("button")
        .attr("id", ControlId::Generate.dom_id())
        .attr("type", "button")
        .text(GENERATE_LABEL)
}
