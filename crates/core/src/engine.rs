use serde::Serialize;
use tracing::{debug, trace};

use crate::avatar::interpolate_avatar;
use crate::config::EngineConfig;
use crate::events::{EventHost, EventKind, detach_all};
use crate::geometry::{GeometrySampler, clamped_offset};
use crate::header::{self, HeaderInputs, Regime};
use crate::registry::StyleRegistry;
use crate::route::Route;

/// Lifecycle of a [`LayoutEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No pass has completed yet; the next one is the first.
    Uninitialized,
    /// At least one pass has completed.
    Active,
    /// Listeners removed. The engine will not compute again.
    TornDown,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Uninitialized => "uninitialized",
            Phase::Active => "active",
            Phase::TornDown => "torndown",
        }
    }
}

/// Result of one notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "regime", rename_all = "lowercase")]
pub enum PassOutcome {
    /// Geometry was sampled and all styles published.
    Recomputed(Regime),
    /// The header is not mounted; nothing was written.
    Unmounted,
    /// The engine is not listening (never mounted or torn down).
    Ignored,
}

/// Scroll-linked header layout engine.
///
/// Holds exactly two values across passes: the avatar anchor offset captured
/// at mount, and the lifecycle phase. Everything else is re-measured and
/// recomputed on every scroll or resize notification.
#[derive(Debug)]
pub struct LayoutEngine<G, R> {
    sampler: G,
    registry: R,
    config: EngineConfig,
    home: bool,
    down_delay: f64,
    phase: Phase,
    listening: bool,
}

impl<G: GeometrySampler, R: StyleRegistry> LayoutEngine<G, R> {
    pub fn new(sampler: G, registry: R, route: &Route, config: EngineConfig) -> Self {
        let home = route.is_home(&config.home_path);
        Self {
            sampler,
            registry,
            config,
            home,
            down_delay: 0.0,
            phase: Phase::Uninitialized,
            listening: false,
        }
    }

    /// Capture the anchor offset, run the first pass and subscribe to
    /// scroll and resize on `host`.
    ///
    /// A torn-down or already mounted engine returns [`PassOutcome::Ignored`]
    /// and leaves `host` untouched.
    pub fn mount<H: EventHost + ?Sized>(&mut self, host: &mut H) -> PassOutcome {
        if self.phase == Phase::TornDown || self.listening {
            return PassOutcome::Ignored;
        }

        self.down_delay = self
            .sampler
            .anchor_offset()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0);

        let outcome = self.run_pass();

        for kind in EventKind::ALL {
            host.add_listener(kind);
        }
        self.listening = true;

        debug!(
            down_delay = self.down_delay,
            home = self.home,
            ?outcome,
            "header engine mounted"
        );
        outcome
    }

    /// Handle one scroll or resize notification.
    pub fn handle(&mut self, kind: EventKind) -> PassOutcome {
        if !self.listening {
            trace!(%kind, phase = ?self.phase, "notification ignored");
            return PassOutcome::Ignored;
        }
        self.run_pass()
    }

    /// Unsubscribe from `host`. Published styles are left in place.
    pub fn teardown<H: EventHost + ?Sized>(&mut self, host: &mut H) {
        if self.phase == Phase::TornDown {
            return;
        }
        if self.listening {
            detach_all(host);
            self.listening = false;
        }
        self.phase = Phase::TornDown;
        debug!("header engine torn down");
    }

    fn run_pass(&mut self) -> PassOutcome {
        let Some(snapshot) = self.sampler.sample() else {
            debug!("header not mounted, skipping pass");
            return PassOutcome::Unmounted;
        };

        let initial = self.phase == Phase::Uninitialized;
        let scroll_offset = clamped_offset(&snapshot.scroll);

        let layout = header::resolve(&HeaderInputs {
            scroll_offset,
            top: snapshot.header.top,
            height: snapshot.header.height,
            down_delay: self.down_delay,
            up_delay: self.config.up_delay,
            initial,
        });
        layout.publish(&mut self.registry, initial, self.down_delay);

        if self.home {
            interpolate_avatar(&self.config.avatar, self.down_delay, scroll_offset)
                .publish(&mut self.registry);
        }

        self.phase = Phase::Active;
        trace!(
            scroll_offset,
            top = snapshot.header.top,
            height = snapshot.header.height,
            regime = ?layout.regime,
            inner = ?layout.inner,
            initial,
            "layout pass"
        );
        PassOutcome::Recomputed(layout.regime)
    }
}

impl<G, R> LayoutEngine<G, R> {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Anchor offset captured at mount; `0` before mounting.
    pub fn down_delay(&self) -> f64 {
        self.down_delay
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut R {
        &mut self.registry
    }

    pub fn sampler_mut(&mut self) -> &mut G {
        &mut self.sampler
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::ListenerSet;
    use crate::registry::MemoryRegistry;
    use crate::sim::ScriptedGeometry;
    use masthead_protocol::StyleKey;

    fn engine(path: &str) -> LayoutEngine<ScriptedGeometry, MemoryRegistry> {
        let geometry = ScriptedGeometry::new(Some(100.0), 800.0, 3000.0, 64.0);
        LayoutEngine::new(
            geometry,
            MemoryRegistry::new(),
            &Route::new(path),
            EngineConfig::default(),
        )
    }

    #[test]
    fn mount_runs_first_pass_and_subscribes() {
        let mut engine = engine("/");
        let mut host = ListenerSet::default();
        let outcome = engine.mount(&mut host);

        assert_eq!(outcome, PassOutcome::Recomputed(Regime::Docked));
        assert_eq!(engine.phase(), Phase::Active);
        assert!(host.is_listening(EventKind::Scroll));
        assert!(host.is_listening(EventKind::Resize));
        assert_eq!(
            engine.registry().css(StyleKey::HeaderPosition).as_deref(),
            Some("sticky")
        );
    }

    #[test]
    fn second_mount_is_refused() {
        let mut engine = engine("/");
        let mut host = ListenerSet::default();
        engine.mount(&mut host);
        assert_eq!(engine.mount(&mut host), PassOutcome::Ignored);
    }

    #[test]
    fn unmeasurable_anchor_defaults_to_zero() {
        let mut engine = engine("/");
        engine.sampler_mut().set_anchor(None);
        engine.mount(&mut ListenerSet::default());
        assert_eq!(engine.down_delay(), 0.0);
        assert_eq!(
            engine.registry().css(StyleKey::ContentOffset).as_deref(),
            Some("0px")
        );
    }

    #[test]
    fn handle_before_mount_is_ignored() {
        let mut engine = engine("/");
        assert_eq!(engine.handle(EventKind::Scroll), PassOutcome::Ignored);
        assert!(engine.registry().journal().is_empty());
    }

    #[test]
    fn teardown_is_idempotent() {
        let mut engine = engine("/");
        let mut host = ListenerSet::default();
        engine.mount(&mut host);
        engine.teardown(&mut host);
        engine.teardown(&mut host);
        assert!(host.is_empty());
        assert_eq!(engine.phase(), Phase::TornDown);
        assert_eq!(engine.mount(&mut host), PassOutcome::Ignored);
        assert!(host.is_empty());
    }
}
