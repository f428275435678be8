//! Wasm entry point: logging, pre-paint theme, and event wiring.
//!
//! The start function runs as soon as the module is instantiated, which is
//! typically while the document is still parsing. The theme attribute is set
//! right away; buttons and listeners wait for `DOMContentLoaded` unless the
//! document is already past the loading state.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{DocumentReadyState, Element, Event};

use crate::dom::{WebPage, js_err};
use crate::error::ChromeError;
use crate::menu::{self, MenuController};
use crate::theme;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    init_logging();
    if let Err(err) = run() {
        log::warn!("site chrome disabled: {err}");
    }
}

fn init_logging() {
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        // Another logger is already installed; it receives our records.
        log::debug!("console logger not installed: {err}");
    }
}

fn run() -> Result<(), ChromeError> {
    let mut page = WebPage::new()?;
    let initial = theme::preload(&mut page);
    log::debug!("initial theme {initial}");

    if page.document().ready_state() != DocumentReadyState::Loading {
        mount_all(&page);
        return Ok(());
    }

    let deferred = page.clone();
    let on_ready = Closure::wrap(Box::new(move || mount_all(&deferred)) as Box<dyn FnMut()>);
    page.document()
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
        .map_err(js_err("listen DOMContentLoaded"))?;
    on_ready.forget();
    Ok(())
}

/// Mount the theme toggle, equip menus, and start routing clicks and resizes.
fn mount_all(page: &WebPage) {
    let mut surface = page.clone();
    match theme::mount(&mut surface, page.config()) {
        Ok(true) => log::debug!("theme toggle mounted"),
        Ok(false) => {}
        Err(err) => log::warn!("theme toggle not mounted: {err}"),
    }

    let menus = Rc::new(RefCell::new(MenuController::new()));
    let equipped = menus.borrow_mut().discover(&mut surface);
    log::info!("site chrome ready: {equipped} mobile menu(s)");

    if let Err(err) = listen_menu_events(page, &menus) {
        log::warn!("mobile menu listeners not installed: {err}");
    }
}

fn listen_menu_events(page: &WebPage, menus: &Rc<RefCell<MenuController>>) -> Result<(), ChromeError> {
    let mut surface = page.clone();
    let controller = Rc::clone(menus);
    let on_click = Closure::wrap(Box::new(move |event: Event| {
        let target = match event.target().map(|t| t.dyn_into::<Element>()) {
            Some(Ok(element)) => Some(element),
            _ => None,
        };
        let changes = controller.borrow_mut().click(surface.classify_click(target.as_ref()));
        menu::project(&mut surface, &changes);
    }) as Box<dyn FnMut(Event)>);
    page.document()
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(js_err("listen document click"))?;
    on_click.forget();

    let mut surface = page.clone();
    let controller = Rc::clone(menus);
    let breakpoint = page.config().breakpoint_px;
    let on_resize = Closure::wrap(Box::new(move || {
        let Some(width) = surface.viewport_width() else {
            return;
        };
        let changes = controller.borrow_mut().resize(width, breakpoint);
        menu::project(&mut surface, &changes);
    }) as Box<dyn FnMut()>);
    page.window()
        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
        .map_err(js_err("listen window resize"))?;
    on_resize.forget();
    Ok(())
}
