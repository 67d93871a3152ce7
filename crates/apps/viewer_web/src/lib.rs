use console_error_panic_hook::set_once;
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlSelectElement;

use surface::{DisplaySurface, DomBackend, SurfaceConfig};
use viewstate::{ControlId, Outcome, ViewStateController};

/// Attribute marking the shell's category menu entries, e.g.
/// `<button data-category="by_state">`.
const MENU_ATTR: &str = "data-category";

/// Keeps a DOM listener alive. Dropping it invalidates the JS callback.
struct Listener {
    _closure: Closure<dyn FnMut(web_sys::Event)>,
}

struct Viewer {
    controller: ViewStateController<DomBackend>,
    _menu: Vec<Listener>,
    listeners: Vec<Listener>,
    // Listeners of the previous filter region. A handler may be running when
    // the region is rebuilt, so its closure is dropped one rebuild later.
    _retired: Vec<Listener>,
    bound_revision: Option<u64>,
}

thread_local! {
    static VIEWER: RefCell<Option<Viewer>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    set_once();
    Ok(())
}

/// Takes over the page shell's filter and display regions and shows the home
/// view. `config_json` is an optional partial [`SurfaceConfig`].
///
/// Fails if the viewer is already running; the menu listeners of the first
/// call stay registered on the page.
#[wasm_bindgen]
pub fn init_viewer(config_json: Option<String>) -> Result<(), JsValue> {
    let installed = VIEWER.with(|cell| install(cell, || build_viewer(config_json.as_deref())))?;
    if !installed {
        return Err(JsValue::from_str("viewer already initialized"));
    }
    with_viewer(|v| v.rebind_if_needed())
}

fn build_viewer(config_json: Option<&str>) -> Result<Viewer, JsValue> {
    let config = SurfaceConfig::from_json(config_json.unwrap_or("")).map_err(to_js)?;
    let backend = DomBackend::new(&config).map_err(to_js)?;
    let controller = ViewStateController::new(DisplaySurface::new(backend, config)).map_err(to_js)?;
    Ok(Viewer {
        controller,
        _menu: bind_menu()?,
        listeners: Vec::new(),
        _retired: Vec::new(),
        bound_revision: None,
    })
}

/// Fills an empty slot with `init()`. An occupied slot is left alone and
/// `init` is not called; returns whether the slot was filled.
fn install<T, E>(
    slot: &RefCell<Option<T>>,
    init: impl FnOnce() -> Result<T, E>,
) -> Result<bool, E> {
    if slot.borrow().is_some() {
        return Ok(false);
    }
    let value = init()?;
    *slot.borrow_mut() = Some(value);
    Ok(true)
}

/// Entry point for shells that drive the category menu themselves.
#[wasm_bindgen]
pub fn choose_category(token: &str) -> Result<(), JsValue> {
    with_viewer(|v| {
        let outcome = v.controller.choose_category_token(token).map_err(to_js)?;
        v.after(outcome)
    })
}

#[wasm_bindgen]
pub fn generate() -> Result<(), JsValue> {
    with_viewer(|v| {
        let outcome = v.controller.generate().map_err(to_js)?;
        v.after(outcome)
    })
}

/// Current selection as JSON, or `null` on the home view.
#[wasm_bindgen]
pub fn selection_json() -> Result<String, JsValue> {
    with_viewer(|v| {
        serde_json::to_string(&v.controller.selection()).map_err(|e| JsValue::from_str(&e.to_string()))
    })
}

impl Viewer {
    fn handle(&mut self, control: ControlId, value: &str) -> Result<(), JsValue> {
        let outcome = self.controller.dispatch(control, value).map_err(to_js)?;
        self.after(outcome)
    }

    fn after(&mut self, outcome: Outcome) -> Result<(), JsValue> {
        if let Outcome::Notice(message) = outcome {
            if let Some(window) = web_sys::window() {
                window.alert_with_message(message)?;
            }
        }
        self.rebind_if_needed()
    }

    fn rebind_if_needed(&mut self) -> Result<(), JsValue> {
        let revision = self.controller.filter_revision();
        if self.bound_revision == Some(revision) {
            return Ok(());
        }
        let document = document()?;
        let mut fresh = Vec::new();
        for binding in self.controller.bindings() {
            let id = binding.control.dom_id();
            let Some(element) = document.get_element_by_id(id) else {
                log(&format!("filter control #{id} missing after render"));
                continue;
            };
            let control = binding.control;
            fresh.push(listen(&element, binding.event.name(), move |ev| {
                let value = select_value(&ev);
                if let Err(err) = with_viewer(|v| v.handle(control, &value)) {
                    log_error(&err);
                }
            })?);
        }
        self._retired = std::mem::replace(&mut self.listeners, fresh);
        self.bound_revision = Some(revision);
        Ok(())
    }
}

fn bind_menu() -> Result<Vec<Listener>, JsValue> {
    let entries = document()?.query_selector_all(&format!("[{MENU_ATTR}]"))?;
    let mut out = Vec::with_capacity(entries.length() as usize);
    for i in 0..entries.length() {
        let Some(element) = entries.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };
        let token = element.get_attribute(MENU_ATTR).unwrap_or_default();
        out.push(listen(&element, "click", move |_| {
            if let Err(err) = choose_category(&token) {
                log_error(&err);
            }
        })?);
    }
    Ok(out)
}

fn listen(
    element: &web_sys::Element,
    event: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> Result<Listener, JsValue> {
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    element.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    Ok(Listener { _closure: closure })
}

/// Value of the `<select>` that fired the event; buttons carry no value.
fn select_value(ev: &web_sys::Event) -> String {
    ev.target()
        .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
        .map(|s| s.value())
        .unwrap_or_default()
}

fn with_viewer<R>(f: impl FnOnce(&mut Viewer) -> Result<R, JsValue>) -> Result<R, JsValue> {
    VIEWER.with(|cell| {
        let mut slot = cell.borrow_mut();
        let viewer = slot
            .as_mut()
            .ok_or_else(|| JsValue::from_str("viewer not initialized; call init_viewer first"))?;
        f(viewer)
    })
}

fn document() -> Result<web_sys::Document, JsValue> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document unavailable"))
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn log(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

fn log_error(err: &JsValue) {
    web_sys::console::error_1(err);
}
