use masthead_protocol::{Position, StyleKey, StyleValue};
use serde::Serialize;

use crate::registry::StyleRegistry;

/// Positioning regime of the header for one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Regime {
    /// Sitting under the avatar hero, above the detach point.
    Docked,
    /// Scrolled out of view past the hysteresis band; shrinking.
    Collapsing,
    /// Top edge held at the viewport top.
    Pinned,
    /// Transition frame between regimes: keep the last published
    /// height and margin.
    Hold,
}

/// Whether the inner header bar is taken out of flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InnerPosition {
    Fixed,
    Flow,
}

/// The measurements a header pass depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderInputs {
    /// Clamped scroll offset.
    pub scroll_offset: f64,
    pub top: f64,
    pub height: f64,
    pub down_delay: f64,
    pub up_delay: f64,
    pub initial: bool,
}

/// Derived header values for one pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderLayout {
    pub regime: Regime,
    /// `(header-height, header-mb)`; `None` in [`Regime::Hold`].
    pub height_and_margin: Option<(f64, f64)>,
    pub inner: InnerPosition,
}

/// Classify the header into a regime. First matching rule wins.
pub fn classify(inputs: &HeaderInputs) -> Regime {
    if inputs.initial || inputs.scroll_offset < inputs.down_delay {
        Regime::Docked
    } else if inputs.top + inputs.height < -inputs.up_delay {
        Regime::Collapsing
    } else if inputs.top == 0.0 {
        Regime::Pinned
    } else {
        Regime::Hold
    }
}

pub fn inner_position(inputs: &HeaderInputs) -> InnerPosition {
    if inputs.top == 0.0 && inputs.scroll_offset > 0.0 && inputs.scroll_offset >= inputs.down_delay
    {
        InnerPosition::Fixed
    } else {
        InnerPosition::Flow
    }
}

pub fn resolve(inputs: &HeaderInputs) -> HeaderLayout {
    let regime = classify(inputs);
    let HeaderInputs {
        scroll_offset,
        height,
        down_delay,
        up_delay,
        ..
    } = *inputs;

    let height_and_margin = match regime {
        Regime::Docked => Some((down_delay + height, -down_delay)),
        Regime::Collapsing => {
            let offset = height.max(scroll_offset - up_delay);
            Some((offset, height - offset))
        }
        Regime::Pinned => Some((scroll_offset + height, -scroll_offset)),
        Regime::Hold => None,
    };

    HeaderLayout {
        regime,
        height_and_margin,
        inner: inner_position(inputs),
    }
}

impl HeaderLayout {
    /// Write this layout to `registry`.
    ///
    /// `header-position` is only upgraded to sticky on the first pass;
    /// later passes never touch it.
    pub fn publish<R: StyleRegistry + ?Sized>(
        &self,
        registry: &mut R,
        initial: bool,
        down_delay: f64,
    ) {
        if initial {
            registry.set(
                StyleKey::HeaderPosition,
                StyleValue::Position(Position::Sticky),
            );
        }

        registry.set(StyleKey::ContentOffset, StyleValue::Px(down_delay));

        if let Some((height, margin)) = self.height_and_margin {
            registry.set(StyleKey::HeaderHeight, StyleValue::Px(height));
            registry.set(StyleKey::HeaderMarginBottom, StyleValue::Px(margin));
        }

        match self.inner {
            InnerPosition::Fixed => {
                registry.set(
                    StyleKey::HeaderInnerPosition,
                    StyleValue::Position(Position::Fixed),
                );
                registry.remove(StyleKey::HeaderTop);
                registry.remove(StyleKey::AvatarTop);
            }
            InnerPosition::Flow => {
                registry.remove(StyleKey::HeaderInnerPosition);
                registry.set(StyleKey::HeaderTop, StyleValue::Px(0.0));
                registry.set(StyleKey::AvatarTop, StyleValue::Px(0.0));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::MemoryRegistry;

    fn inputs(scroll_offset: f64, top: f64, height: f64, down_delay: f64) -> HeaderInputs {
        HeaderInputs {
            scroll_offset,
            top,
            height,
            down_delay,
            up_delay: 64.0,
            initial: false,
        }
    }

    #[test]
    fn initial_pass_docks_even_when_scrolled() {
        let mut i = inputs(500.0, -300.0, 64.0, 100.0);
        i.initial = true;
        let layout = resolve(&i);
        assert_eq!(layout.regime, Regime::Docked);
        assert_eq!(layout.height_and_margin, Some((164.0, -100.0)));
    }

    #[test]
    fn above_detach_point_docks() {
        let layout = resolve(&inputs(99.0, -999.0, 64.0, 100.0));
        assert_eq!(layout.regime, Regime::Docked);
    }

    #[test]
    fn collapsing_uses_larger_of_height_and_offset() {
        let layout = resolve(&inputs(400.0, -200.0, 64.0, 100.0));
        assert_eq!(layout.regime, Regime::Collapsing);
        assert_eq!(layout.height_and_margin, Some((336.0, 64.0 - 336.0)));

        let layout = resolve(&inputs(100.0, -200.0, 64.0, 100.0));
        assert_eq!(layout.height_and_margin, Some((64.0, 0.0)));
    }

    #[test]
    fn pinned_at_viewport_top() {
        let layout = resolve(&inputs(250.0, 0.0, 64.0, 100.0));
        assert_eq!(layout.regime, Regime::Pinned);
        assert_eq!(layout.height_and_margin, Some((314.0, -250.0)));
        assert_eq!(layout.inner, InnerPosition::Fixed);
    }

    #[test]
    fn transition_frame_holds() {
        let layout = resolve(&inputs(250.0, -20.0, 64.0, 100.0));
        assert_eq!(layout.regime, Regime::Hold);
        assert_eq!(layout.height_and_margin, None);
        assert_eq!(layout.inner, InnerPosition::Flow);
    }

    #[test]
    fn inner_stays_in_flow_at_page_top() {
        // down_delay of zero with no scroll: top is 0 but nothing is scrolled.
        let i = inputs(0.0, 0.0, 64.0, 0.0);
        assert_eq!(inner_position(&i), InnerPosition::Flow);
    }

    #[test]
    fn publish_fixed_removes_top_overrides() {
        let mut registry = MemoryRegistry::new();
        registry.set(StyleKey::HeaderTop, StyleValue::Px(0.0));
        registry.set(StyleKey::AvatarTop, StyleValue::Px(0.0));

        resolve(&inputs(250.0, 0.0, 64.0, 100.0)).publish(&mut registry, false, 100.0);

        assert_eq!(
            registry.css(StyleKey::HeaderInnerPosition).as_deref(),
            Some("fixed")
        );
        assert!(!registry.contains(StyleKey::HeaderTop));
        assert!(!registry.contains(StyleKey::AvatarTop));
        assert!(!registry.contains(StyleKey::HeaderPosition));
        assert_eq!(registry.css(StyleKey::HeaderHeight).as_deref(), Some("314px"));
        assert_eq!(registry.css(StyleKey::HeaderMarginBottom).as_deref(), Some("-250px"));
    }

    #[test]
    fn publish_hold_keeps_previous_height() {
        let mut registry = MemoryRegistry::new();
        registry.set(StyleKey::HeaderHeight, StyleValue::Px(300.0));
        registry.set(StyleKey::HeaderMarginBottom, StyleValue::Px(-236.0));
        registry.clear_journal();

        resolve(&inputs(250.0, -20.0, 64.0, 100.0)).publish(&mut registry, false, 100.0);

        assert!(!registry.touched(StyleKey::HeaderHeight));
        assert!(!registry.touched(StyleKey::HeaderMarginBottom));
        assert_eq!(registry.css(StyleKey::HeaderHeight).as_deref(), Some("300px"));
        assert_eq!(registry.css(StyleKey::ContentOffset).as_deref(), Some("100px"));
    }
}
