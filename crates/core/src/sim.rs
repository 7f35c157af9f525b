//! Headless stand-ins for the rendering surface.
//!
//! [`ScriptedGeometry`] answers geometry queries from values set by the
//! caller and [`SimulatedWindow`] delivers notifications only to subscribed
//! listeners, so a full mount → scroll → teardown sequence can run without a
//! browser. [`replay`] drives both from a [`ReplayScript`].

use std::collections::BTreeMap;

use masthead_protocol::{GeometrySnapshot, HeaderGeometry, ScrollMetrics};
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::engine::{LayoutEngine, PassOutcome};
use crate::events::{EventHost, EventKind, ListenerSet};
use crate::geometry::GeometrySampler;
use crate::registry::{MemoryRegistry, StyleRegistry};
use crate::route::Route;

/// Geometry whose every value is set explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedGeometry {
    anchor: Option<f64>,
    scroll: ScrollMetrics,
    header: HeaderGeometry,
    mounted: bool,
}

impl ScriptedGeometry {
    /// Page at scroll offset 0 with the header at the viewport top.
    pub fn new(
        anchor: Option<f64>,
        viewport_height: f64,
        document_height: f64,
        header_height: f64,
    ) -> Self {
        Self {
            anchor,
            scroll: ScrollMetrics::new(0.0, viewport_height, document_height),
            header: HeaderGeometry::new(0.0, header_height),
            mounted: true,
        }
    }

    /// Current scroll metrics, including any earlier resize.
    pub fn scroll(&self) -> ScrollMetrics {
        self.scroll
    }

    pub fn set_anchor(&mut self, anchor: Option<f64>) {
        self.anchor = anchor;
    }

    /// Move to `scroll_offset` with the header's top edge at `header_top`.
    pub fn scroll_to(&mut self, scroll_offset: f64, header_top: f64) {
        self.scroll.scroll_offset = scroll_offset;
        self.header.top = header_top;
    }

    pub fn resize(&mut self, viewport_height: f64, document_height: f64) {
        self.scroll.viewport_height = viewport_height;
        self.scroll.document_height = document_height;
    }

    pub fn set_header_height(&mut self, height: f64) {
        self.header.height = height;
    }

    pub fn set_mounted(&mut self, mounted: bool) {
        self.mounted = mounted;
    }
}

impl GeometrySampler for ScriptedGeometry {
    fn sample(&self) -> Option<GeometrySnapshot> {
        self.mounted
            .then(|| GeometrySnapshot::new(self.scroll, self.header))
    }

    fn anchor_offset(&self) -> Option<f64> {
        self.anchor
    }
}

/// An event target that only delivers notifications to attached listeners.
#[derive(Debug, Clone, Default)]
pub struct SimulatedWindow {
    listeners: ListenerSet,
}

impl SimulatedWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_listening(&self, kind: EventKind) -> bool {
        self.listeners.is_listening(kind)
    }

    /// Fire `kind`. Without an attached listener the engine never sees it.
    pub fn dispatch<G, R>(&self, engine: &mut LayoutEngine<G, R>, kind: EventKind) -> PassOutcome
    where
        G: GeometrySampler,
        R: StyleRegistry,
    {
        if !self.listeners.is_listening(kind) {
            return PassOutcome::Ignored;
        }
        engine.handle(kind)
    }
}

impl EventHost for SimulatedWindow {
    fn add_listener(&mut self, kind: EventKind) {
        self.listeners.add_listener(kind);
    }

    fn remove_listener(&mut self, kind: EventKind) {
        self.listeners.remove_listener(kind);
    }
}

fn default_header_height() -> f64 {
    64.0
}

/// A scripted page session: initial layout plus a sequence of notifications.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplayScript {
    pub route: String,
    /// Avatar anchor offset; absent means unmeasurable.
    #[serde(default)]
    pub anchor_offset: Option<f64>,
    pub viewport_height: f64,
    pub document_height: f64,
    #[serde(default = "default_header_height")]
    pub header_height: f64,
    #[serde(default)]
    pub events: Vec<ReplayEvent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReplayEvent {
    #[serde(default = "default_kind")]
    pub kind: EventKind,
    #[serde(default)]
    pub scroll_offset: f64,
    #[serde(default)]
    pub header_top: f64,
    /// Resize the viewport before dispatching.
    #[serde(default)]
    pub viewport_height: Option<f64>,
    #[serde(default)]
    pub document_height: Option<f64>,
    /// Detach the header element before dispatching.
    #[serde(default)]
    pub unmounted: bool,
    /// Tear the engine down before dispatching.
    #[serde(default)]
    pub teardown: bool,
}

fn default_kind() -> EventKind {
    EventKind::Scroll
}

/// One line of replay output.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayRecord {
    /// `mount`, or the notification kind.
    pub step: String,
    pub scroll_offset: f64,
    pub outcome: PassOutcome,
    /// Full published style set after this step, by variable name.
    pub styles: BTreeMap<String, String>,
}

fn snapshot_styles(registry: &MemoryRegistry) -> BTreeMap<String, String> {
    registry
        .values()
        .iter()
        .map(|(key, value)| (key.name().to_string(), value.to_string()))
        .collect()
}

/// Mount an engine on the script's page, then feed it every event in order.
pub fn replay(script: &ReplayScript, config: EngineConfig) -> Vec<ReplayRecord> {
    let geometry = ScriptedGeometry::new(
        script.anchor_offset,
        script.viewport_height,
        script.document_height,
        script.header_height,
    );
    let mut engine = LayoutEngine::new(
        geometry,
        MemoryRegistry::new(),
        &Route::new(script.route.as_str()),
        config,
    );
    let mut window = SimulatedWindow::new();

    let mut records = Vec::with_capacity(script.events.len() + 1);
    let outcome = engine.mount(&mut window);
    records.push(ReplayRecord {
        step: "mount".to_string(),
        scroll_offset: 0.0,
        outcome,
        styles: snapshot_styles(engine.registry()),
    });

    for event in &script.events {
        if event.teardown {
            engine.teardown(&mut window);
        }
        let geometry = engine.sampler_mut();
        geometry.scroll_to(event.scroll_offset, event.header_top);
        geometry.set_mounted(!event.unmounted);
        if event.viewport_height.is_some() || event.document_height.is_some() {
            let current = geometry.scroll();
            geometry.resize(
                event.viewport_height.unwrap_or(current.viewport_height),
                event.document_height.unwrap_or(current.document_height),
            );
        }

        let outcome = window.dispatch(&mut engine, event.kind);
        records.push(ReplayRecord {
            step: event.kind.to_string(),
            scroll_offset: event.scroll_offset,
            outcome,
            styles: snapshot_styles(engine.registry()),
        });
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmounted_geometry_samples_nothing() {
        let mut geometry = ScriptedGeometry::new(Some(10.0), 800.0, 2000.0, 64.0);
        assert!(geometry.sample().is_some());
        geometry.set_mounted(false);
        assert!(geometry.sample().is_none());
        assert_eq!(geometry.anchor_offset(), Some(10.0));
    }

    #[test]
    fn script_defaults() {
        let script: ReplayScript = serde_json::from_str(
            r#"{"route":"/","viewport_height":800,"document_height":3000,
                "events":[{"scroll_offset":40}]}"#,
        )
        .unwrap();
        assert_eq!(script.header_height, 64.0);
        assert_eq!(script.anchor_offset, None);
        assert_eq!(script.events[0].kind, EventKind::Scroll);
        assert!(!script.events[0].teardown);
    }

    #[test]
    fn replay_records_mount_and_each_event() {
        let script: ReplayScript = serde_json::from_str(
            r#"{"route":"/","anchor_offset":100,"viewport_height":800,
                "document_height":3000,
                "events":[{"scroll_offset":50},{"kind":"resize","scroll_offset":50}]}"#,
        )
        .unwrap();
        let records = replay(&script, EngineConfig::default());
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].step, "mount");
        assert_eq!(records[2].step, "resize");
        assert_eq!(
            records[1].styles.get("avatar-image-transform").map(String::as_str),
            Some("translate3d(0.0625rem, 0, 0) scale(0.78125)")
        );
    }

    #[test]
    fn partial_resizes_keep_earlier_dimensions() {
        let script: ReplayScript = serde_json::from_str(
            r#"{"route":"/about","viewport_height":800,"document_height":4000,
                "events":[
                    {"kind":"resize","document_height":1000},
                    {"kind":"resize","scroll_offset":900,"viewport_height":700}
                ]}"#,
        )
        .unwrap();
        let records = replay(&script, EngineConfig::default());

        // 1000 - 700 = 300 at most, so the offset clamps to 300.
        assert_eq!(
            records[2].styles.get("header-height").map(String::as_str),
            Some("364px")
        );
    }
}
