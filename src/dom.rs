//! Live-document implementations of [`ThemeSurface`] and [`MenuSurface`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything browser-specific lives here so `theme` and `menu` stay plain
//! Rust. Calls that can raise a script exception are mapped to
//! [`ChromeError::Dom`]; surface methods with no error channel log at `debug`
//! and carry on, matching the page's best-effort contract.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Node, Storage, Window};

use crate::config::ChromeConfig;
use crate::consts::{
    CONFIG_ELEMENT_ID, MENU_HOST_CLASS, MENU_ID_ATTR, MENU_OPEN_CLASS, MENU_SELECTOR, MENU_TOGGLE_CLASS,
    MENU_TOGGLE_GLYPH, MENU_TOGGLE_SELECTOR, PREFERS_DARK_QUERY, THEME_ATTR, THEME_TOGGLE_CLASS, THEME_TOGGLE_ID,
};
use crate::error::ChromeError;
use crate::menu::{ClickTarget, MenuChange, MenuId, MenuSurface};
use crate::theme::{self, Theme, ThemeSurface};

/// Map a script exception from `op` into [`ChromeError::Dom`].
pub(crate) fn js_err(op: &'static str) -> impl Fn(JsValue) -> ChromeError {
    move |value| ChromeError::Dom { op, detail: value.as_string().unwrap_or_else(|| format!("{value:?}")) }
}

/// Read the inline config element, falling back to defaults.
pub fn load_config(document: &Document) -> ChromeConfig {
    let Some(raw) = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return ChromeConfig::default();
    };
    match ChromeConfig::from_json(&raw) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
            ChromeConfig::default()
        }
    }
}

/// Handle to the page: window, document and the shared config.
///
/// Cheap to clone; clones are moved into event closures.
#[derive(Clone)]
pub struct WebPage {
    window: Window,
    document: Document,
    config: Rc<ChromeConfig>,
}

impl WebPage {
    /// Bind to the global window and document.
    pub fn new() -> Result<Self, ChromeError> {
        let window = web_sys::window().ok_or(ChromeError::MissingGlobal("window"))?;
        let document = window.document().ok_or(ChromeError::MissingGlobal("document"))?;
        let config = Rc::new(load_config(&document));
        Ok(Self { window, document, config })
    }

    #[must_use]
    pub fn window(&self) -> &Window {
        &self.window
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    #[must_use]
    pub fn config(&self) -> &ChromeConfig {
        &self.config
    }

    fn storage(&self) -> Option<Storage> {
        match self.window.local_storage() {
            Ok(storage) => storage,
            Err(err) => {
                log::debug!("localStorage unavailable: {err:?}");
                None
            }
        }
    }

    /// Current `window.innerWidth`, if readable.
    #[must_use]
    pub fn viewport_width(&self) -> Option<f64> {
        match self.window.inner_width() {
            Ok(width) => width.as_f64(),
            Err(_) => None,
        }
    }

    fn create_button(&self, class: &str) -> Result<Element, ChromeError> {
        let button = self.document.create_element("button").map_err(js_err("createElement(button)"))?;
        button.set_attribute("type", "button").map_err(js_err("set button type"))?;
        button.set_class_name(class);
        Ok(button)
    }

    fn menu_toggle(&self, id: MenuId) -> Option<Element> {
        let selector = format!("{MENU_TOGGLE_SELECTOR}[aria-controls=\"{id}\"]");
        match self.document.query_selector(&selector) {
            Ok(found) => found,
            Err(err) => {
                log::debug!("toggle lookup for {id} failed: {err:?}");
                None
            }
        }
    }

    /// Classify a click target for [`crate::menu::MenuController::click`].
    #[must_use]
    pub fn classify_click(&self, target: Option<&Element>) -> ClickTarget {
        let Some(target) = target else {
            return ClickTarget::Outside;
        };
        let toggle_controls = match target.closest(MENU_TOGGLE_SELECTOR) {
            Ok(Some(toggle)) => toggle.get_attribute("aria-controls"),
            _ => None,
        };
        let region_id = match target.closest(MENU_SELECTOR) {
            Ok(Some(region)) => Some(region.id()),
            _ => None,
        };
        ClickTarget::classify(toggle_controls.as_deref(), region_id.as_deref())
    }
}

impl ThemeSurface for WebPage {
    fn stored_theme(&self) -> Option<String> {
        let storage = self.storage()?;
        match storage.get_item(&self.config.storage_key) {
            Ok(value) => value,
            Err(err) => {
                log::debug!("theme read failed: {err:?}");
                None
            }
        }
    }

    fn store_theme(&mut self, theme: Theme) {
        let Some(storage) = self.storage() else {
            return;
        };
        if let Err(err) = storage.set_item(&self.config.storage_key, theme.as_str()) {
            log::debug!("theme write dropped: {err:?}");
        }
    }

    fn prefers_dark(&self) -> Option<bool> {
        match self.window.match_media(PREFERS_DARK_QUERY) {
            Ok(Some(query)) => Some(query.matches()),
            _ => None,
        }
    }

    fn root_theme(&self) -> Option<String> {
        self.document.document_element()?.get_attribute(THEME_ATTR)
    }

    fn set_root_theme(&mut self, theme: Theme) {
        let Some(root) = self.document.document_element() else {
            return;
        };
        if let Err(err) = root.set_attribute(THEME_ATTR, theme.as_str()) {
            log::debug!("set {THEME_ATTR} failed: {err:?}");
        }
    }

    fn has_toggle(&self) -> bool {
        self.document.get_element_by_id(THEME_TOGGLE_ID).is_some()
    }

    fn create_toggle(&mut self) -> Result<(), ChromeError> {
        let body = self.document.body().ok_or(ChromeError::MissingGlobal("document.body"))?;
        let button = self.create_button(THEME_TOGGLE_CLASS)?;
        button.set_id(THEME_TOGGLE_ID);

        let mut page = self.clone();
        let config = Rc::clone(&self.config);
        let on_click = Closure::wrap(Box::new(move || {
            theme::toggle(&mut page, &config);
        }) as Box<dyn FnMut()>);
        button
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(js_err("listen theme toggle click"))?;
        // Lives as long as the page.
        on_click.forget();

        body.append_child(&button).map_err(js_err("append theme toggle"))?;
        Ok(())
    }

    fn update_toggle(&mut self, label: &str, glyph: &str) {
        let Some(button) = self.document.get_element_by_id(THEME_TOGGLE_ID) else {
            return;
        };
        if let Err(err) = button.set_attribute("aria-label", label) {
            log::debug!("set theme toggle label failed: {err:?}");
        }
        button.set_text_content(Some(glyph));
    }
}

impl MenuSurface for WebPage {
    type Region = Element;

    fn regions(&self) -> Vec<Element> {
        let nodes = match self.document.query_selector_all(MENU_SELECTOR) {
            Ok(nodes) => nodes,
            Err(err) => {
                log::debug!("menu query failed: {err:?}");
                return Vec::new();
            }
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| match node.dyn_into::<Element>() {
                Ok(element) => Some(element),
                Err(_) => None,
            })
            .collect()
    }

    fn has_host(&self, region: &Element) -> bool {
        region.parent_element().is_some()
    }

    fn host_has_toggle(&self, region: &Element) -> bool {
        region
            .parent_element()
            .is_some_and(|host| matches!(host.query_selector(MENU_TOGGLE_SELECTOR), Ok(Some(_))))
    }

    fn equip(&mut self, region: &Element, id: MenuId) -> Result<(), ChromeError> {
        let host = region.parent_element().ok_or(ChromeError::MissingGlobal("menu host"))?;
        host.class_list().add_1(MENU_HOST_CLASS).map_err(js_err("mark menu host"))?;

        let id_text = id.to_string();
        region.set_attribute(MENU_ID_ATTR, &id_text).map_err(js_err("set menu id"))?;
        region.set_id(&id_text);

        let toggle = self.create_button(MENU_TOGGLE_CLASS)?;
        toggle.set_attribute("aria-expanded", "false").map_err(js_err("set aria-expanded"))?;
        toggle.set_attribute("aria-controls", &id_text).map_err(js_err("set aria-controls"))?;
        toggle.set_text_content(Some(MENU_TOGGLE_GLYPH));

        let anchor: &Node = region;
        host.insert_before(&toggle, Some(anchor)).map_err(js_err("insert menu toggle"))?;
        Ok(())
    }

    fn project(&mut self, change: MenuChange) {
        if let Some(region) = self.document.get_element_by_id(&change.id.to_string()) {
            let classes = region.class_list();
            let marked = if change.open { classes.add_1(MENU_OPEN_CLASS) } else { classes.remove_1(MENU_OPEN_CLASS) };
            if let Err(err) = marked {
                log::debug!("update {MENU_OPEN_CLASS} on {} failed: {err:?}", change.id);
            }
        }
        if let Some(toggle) = self.menu_toggle(change.id) {
            let expanded = if change.open { "true" } else { "false" };
            if let Err(err) = toggle.set_attribute("aria-expanded", expanded) {
                log::debug!("update aria-expanded on {} failed: {err:?}", change.id);
            }
        }
    }
}
