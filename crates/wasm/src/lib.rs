mod dom;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use masthead_core::theme::toggle_color_scheme as toggle_scheme;
use masthead_core::{EngineConfig, EventKind, LayoutEngine, Route, detach_all};
use masthead_protocol::{ColorScheme, SchemePreference};
use serde::Serialize;
use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use dom::{DomGeometry, DomStyleRegistry, WindowListeners};

type DomEngine = LayoutEngine<DomGeometry, DomStyleRegistry>;

fn listener(engine: Weak<RefCell<DomEngine>>, kind: EventKind) -> Closure<dyn FnMut()> {
    Closure::new(move || {
        // A notification arriving mid-pass is dropped; the pass in flight
        // already reads the latest geometry.
        if let Some(engine) = engine.upgrade()
            && let Ok(mut engine) = engine.try_borrow_mut()
        {
            engine.handle(kind);
        }
    })
}

/// Scroll-linked header engine bound to the current page.
#[wasm_bindgen]
pub struct HeaderController {
    engine: Rc<RefCell<DomEngine>>,
    listeners: WindowListeners,
}

#[wasm_bindgen]
impl HeaderController {
    /// Attach to the header element `header_id`, capture the offset of the
    /// avatar anchor `anchor_id`, run the first pass and start listening.
    ///
    /// `config_json` optionally overrides engine settings.
    pub fn mount(
        header_id: &str,
        anchor_id: &str,
        pathname: &str,
        config_json: Option<String>,
    ) -> Result<HeaderController, JsError> {
        console_error_panic_hook::set_once();

        let config = match config_json {
            Some(json) => {
                EngineConfig::from_json(&json).map_err(|e| JsError::new(&e.to_string()))?
            }
            None => EngineConfig::default(),
        };

        let window = web_sys::window().ok_or_else(|| JsError::new("no window"))?;
        let style = window
            .document()
            .and_then(|d| d.document_element())
            .ok_or_else(|| JsError::new("no document element"))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| JsError::new("document element is not an HTML element"))?
            .style();

        let engine = Rc::new(RefCell::new(LayoutEngine::new(
            DomGeometry::new(window.clone(), header_id, anchor_id),
            DomStyleRegistry::new(style),
            &Route::new(pathname),
            config,
        )));
        let mut listeners = WindowListeners::new(
            window,
            listener(Rc::downgrade(&engine), EventKind::Scroll),
            listener(Rc::downgrade(&engine), EventKind::Resize),
        );
        engine.borrow_mut().mount(&mut listeners);

        Ok(HeaderController { engine, listeners })
    }

    /// Stop listening. Published styles stay until the next controller
    /// overwrites them.
    pub fn teardown(&mut self) {
        match self.engine.try_borrow_mut() {
            Ok(mut engine) => engine.teardown(&mut self.listeners),
            Err(_) => {
                // The closures are freed with this controller, so they must
                // leave `window` even while a pass holds the engine.
                warn!("engine busy during teardown, detaching listeners directly");
                detach_all(&mut self.listeners);
            }
        }
    }

    /// Current lifecycle phase: `uninitialized`, `active` or `torndown`.
    pub fn phase(&self) -> Result<String, JsError> {
        let engine = self
            .engine
            .try_borrow()
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(engine.phase().as_str().to_string())
    }

    #[wasm_bindgen(getter, js_name = downDelay)]
    pub fn down_delay(&self) -> f64 {
        self.engine.try_borrow().map(|e| e.down_delay()).unwrap_or(0.0)
    }
}

impl Drop for HeaderController {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[derive(Serialize)]
struct SchemeToggle {
    scheme: ColorScheme,
    preference: SchemePreference,
}

/// Flip the color scheme. Returns `{scheme, preference}` as JSON, where
/// `preference` says whether to store or clear the persisted override.
#[wasm_bindgen]
pub fn toggle_color_scheme(is_dark: bool, system_dark: bool) -> Result<String, JsError> {
    let (scheme, preference) = toggle_scheme(
        ColorScheme::from_dark(is_dark),
        ColorScheme::from_dark(system_dark),
    );
    serde_json::to_string(&SchemeToggle { scheme, preference })
        .map_err(|e| JsError::new(&e.to_string()))
}

#[derive(Serialize)]
struct NavEntry {
    href: &'static str,
    label: &'static str,
    active: bool,
}

/// Navigation entries with their active state for `pathname`, as JSON.
#[wasm_bindgen]
pub fn navigation(pathname: &str) -> Result<String, JsError> {
    let route = Route::new(pathname);
    let entries: Vec<NavEntry> = route
        .nav()
        .map(|(href, label, active)| NavEntry {
            href,
            label,
            active,
        })
        .collect();
    serde_json::to_string(&entries).map_err(|e| JsError::new(&e.to_string()))
}
