use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Notifications that trigger a layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Scroll,
    Resize,
}

impl EventKind {
    pub const ALL: [EventKind; 2] = [EventKind::Scroll, EventKind::Resize];

    /// DOM event type name.
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Scroll => "scroll",
            EventKind::Resize => "resize",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The surface the engine subscribes to for scroll and resize notifications.
pub trait EventHost {
    fn add_listener(&mut self, kind: EventKind);
    fn remove_listener(&mut self, kind: EventKind);
}

/// Remove both the scroll and the resize listener from `host`.
pub fn detach_all<H: EventHost + ?Sized>(host: &mut H) {
    for kind in EventKind::ALL {
        host.remove_listener(kind);
    }
}

/// Bookkeeping of which listeners are currently attached.
#[derive(Debug, Clone, Default)]
pub struct ListenerSet {
    active: BTreeSet<EventKind>,
}

impl ListenerSet {
    pub fn is_listening(&self, kind: EventKind) -> bool {
        self.active.contains(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }
}

impl EventHost for ListenerSet {
    fn add_listener(&mut self, kind: EventKind) {
        self.active.insert(kind);
    }

    fn remove_listener(&mut self, kind: EventKind) {
        self.active.remove(&kind);
    }
}
