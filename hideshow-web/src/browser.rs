use std::rc::Rc;

use hideshow::{handle_click, Dom, Options, ToggleController, ToggleError};
use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

/// [`Dom`] over the page the module runs in.
#[derive(Debug, Clone)]
pub struct BrowserDom {
    window: Window,
    document: Document,
}

impl BrowserDom {
    pub fn new() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }
}

fn js_reason(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}

impl Dom for BrowserDom {
    type Node = HtmlElement;

    fn get_element_by_id(&self, id: &str) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()
    }

    fn query_by_attribute(&self, name: &str, value: &str) -> Vec<HtmlElement> {
        let selector = format!("[{name}=\"{value}\"]");
        let list = match self.document.query_selector_all(&selector) {
            Ok(list) => list,
            Err(err) => {
                warn!("[hideshow] bad trigger selector {selector}: {}", js_reason(&err));
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
            .collect()
    }

    fn parent(&self, node: &HtmlElement) -> Option<HtmlElement> {
        node.parent_element()?.dyn_into::<HtmlElement>().ok()
    }

    fn describe(&self, node: &HtmlElement) -> String {
        let tag = node.tag_name().to_ascii_lowercase();
        let id = node.id();
        if id.is_empty() { tag } else { format!("{tag}#{id}") }
    }

    fn attribute(&self, node: &HtmlElement, name: &str) -> Option<String> {
        node.get_attribute(name)
    }

    fn set_attribute(&mut self, node: &HtmlElement, name: &str, value: &str) {
        if let Err(err) = node.set_attribute(name, value) {
            warn!("[hideshow] set {name} on {}: {}", self.describe(node), js_reason(&err));
        }
    }

    fn remove_attribute(&mut self, node: &HtmlElement, name: &str) {
        if let Err(err) = node.remove_attribute(name) {
            warn!("[hideshow] remove {name} on {}: {}", self.describe(node), js_reason(&err));
        }
    }

    fn text(&self, node: &HtmlElement) -> String {
        let text = node.inner_text();
        if text.is_empty() {
            node.text_content().unwrap_or_default()
        } else {
            text
        }
    }

    fn set_label(&mut self, node: &HtmlElement, label: &str) {
        node.set_inner_html(label);
    }

    fn class_list_contains(&self, node: &HtmlElement, class: &str) -> Option<bool> {
        Some(node.class_list().contains(class))
    }

    fn class_list_add(&mut self, node: &HtmlElement, class: &str) -> bool {
        if let Err(err) = node.class_list().add_1(class) {
            warn!("[hideshow] add class {class}: {}", js_reason(&err));
        }
        true
    }

    fn class_list_remove(&mut self, node: &HtmlElement, class: &str) -> bool {
        if let Err(err) = node.class_list().remove_1(class) {
            warn!("[hideshow] remove class {class}: {}", js_reason(&err));
        }
        true
    }

    fn computed_display(&self, node: &HtmlElement) -> Result<String, ToggleError> {
        let unavailable = |reason: String| ToggleError::ComputedStyle {
            id: self.describe(node),
            reason,
        };
        let declaration = self
            .window
            .get_computed_style(node)
            .map_err(|err| unavailable(js_reason(&err)))?
            .ok_or_else(|| unavailable("no computed style".to_string()))?;
        declaration
            .get_property_value("display")
            .map_err(|err| unavailable(js_reason(&err)))
    }

    fn is_hidden(&self, node: &HtmlElement) -> bool {
        node.offset_parent().is_none()
    }

    fn set_display_none(&mut self, node: &HtmlElement) {
        if let Err(err) = node.style().set_property("display", "none") {
            warn!("[hideshow] set display on {}: {}", self.describe(node), js_reason(&err));
        }
    }

    fn focus(&mut self, node: &HtmlElement) -> bool {
        node.focus().is_ok()
    }
}

/// Register every trigger on the page with custom options (a JSON object).
///
/// Returns the number of triggers registered. Calling this more than once
/// registers the same triggers again.
#[wasm_bindgen(js_name = initWithOptions)]
pub fn init_with_options(options: &str) -> Result<usize, JsValue> {
    let options = Options::from_json(options).map_err(|err| JsValue::from_str(&err.to_string()))?;
    init(options)
}

#[cfg(feature = "autostart")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    init(Options::default()).map(|_| ())
}

fn init(options: Options) -> Result<usize, JsValue> {
    let dom = BrowserDom::new().ok_or_else(|| JsValue::from_str("no window or document"))?;
    let mut controller = ToggleController::new(options);
    let count = controller.init(&dom);

    let options = Rc::new(controller.options().clone());

    for trigger in controller.registrations() {
        // Each listener owns its handles: focus() can fire page handlers that
        // click another trigger before this listener returns.
        let mut dom = dom.clone();
        let options = Rc::clone(&options);
        let handler_trigger = trigger.clone();

        let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            // Triggers should be buttons; guard against links anyway.
            event.prevent_default();
            let result = handle_click(&mut dom, &handler_trigger, &options);
            if let Err(err) = result {
                log::error!("[hideshow] {err}");
                web_sys::console::error_1(&JsValue::from_str(&err.to_string()));
            }
        });

        trigger.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;
        // Listeners live as long as the page.
        listener.forget();
    }

    Ok(count)
}
