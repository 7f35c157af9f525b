use masthead_core::{EventHost, EventKind, GeometrySampler, StyleRegistry};
use masthead_protocol::{GeometrySnapshot, HeaderGeometry, ScrollMetrics, StyleKey, StyleValue};
use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, CssStyleDeclaration, EventTarget, HtmlElement, Window};

/// Measures the live document. Elements are looked up by id on every call
/// so a detached header reads as "not mounted".
pub struct DomGeometry {
    window: Window,
    header_id: String,
    anchor_id: String,
}

impl DomGeometry {
    pub fn new(window: Window, header_id: &str, anchor_id: &str) -> Self {
        Self {
            window,
            header_id: header_id.to_string(),
            anchor_id: anchor_id.to_string(),
        }
    }
}

impl GeometrySampler for DomGeometry {
    fn sample(&self) -> Option<GeometrySnapshot> {
        let document = self.window.document()?;
        let header = document.get_element_by_id(&self.header_id)?;
        let rect = header.get_bounding_client_rect();

        let scroll = ScrollMetrics::new(
            self.window.scroll_y().ok()?,
            self.window.inner_height().ok()?.as_f64()?,
            f64::from(document.body()?.scroll_height()),
        );
        Some(GeometrySnapshot::new(
            scroll,
            HeaderGeometry::new(rect.top(), rect.height()),
        ))
    }

    fn anchor_offset(&self) -> Option<f64> {
        let anchor = self
            .window
            .document()?
            .get_element_by_id(&self.anchor_id)?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(f64::from(anchor.offset_top()))
    }
}

/// Custom properties on `document.documentElement.style`.
pub struct DomStyleRegistry {
    style: CssStyleDeclaration,
}

impl DomStyleRegistry {
    pub fn new(style: CssStyleDeclaration) -> Self {
        Self { style }
    }
}

impl StyleRegistry for DomStyleRegistry {
    fn set(&mut self, key: StyleKey, value: StyleValue) {
        if let Err(err) = self.style.set_property(key.property(), &value.to_string()) {
            warn!(%key, ?err, "style write rejected");
        }
    }

    fn remove(&mut self, key: StyleKey) {
        if let Err(err) = self.style.remove_property(key.property()) {
            warn!(%key, ?err, "style removal rejected");
        }
    }
}

/// Scroll and resize callbacks attached to `window`.
///
/// The closures must outlive their registration; the owner removes them
/// before dropping this value.
pub struct WindowListeners {
    window: Window,
    scroll: Closure<dyn FnMut()>,
    resize: Closure<dyn FnMut()>,
}

impl WindowListeners {
    pub fn new(window: Window, scroll: Closure<dyn FnMut()>, resize: Closure<dyn FnMut()>) -> Self {
        Self {
            window,
            scroll,
            resize,
        }
    }

    fn callback(&self, kind: EventKind) -> &js_sys::Function {
        match kind {
            EventKind::Scroll => self.scroll.as_ref().unchecked_ref(),
            EventKind::Resize => self.resize.as_ref().unchecked_ref(),
        }
    }
}

impl EventHost for WindowListeners {
    fn add_listener(&mut self, kind: EventKind) {
        let target: &EventTarget = self.window.as_ref();
        let callback = self.callback(kind);
        let result = match kind {
            EventKind::Scroll => {
                let options = AddEventListenerOptions::new();
                options.set_passive(true);
                target.add_event_listener_with_callback_and_add_event_listener_options(
                    kind.as_str(),
                    callback,
                    &options,
                )
            }
            EventKind::Resize => target.add_event_listener_with_callback(kind.as_str(), callback),
        };
        if let Err(err) = result {
            warn!(%kind, ?err, "failed to attach listener");
        }
    }

    fn remove_listener(&mut self, kind: EventKind) {
        let target: &EventTarget = self.window.as_ref();
        let result = target.remove_event_listener_with_callback(kind.as_str(), self.callback(kind));
        if let Err(err) = result {
            warn!(%kind, ?err, "failed to detach listener");
        }
    }
}
