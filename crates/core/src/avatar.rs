use masthead_protocol::{StyleKey, StyleValue, Transform};

use crate::config::AvatarConfig;
use crate::math::interpolate;
use crate::registry::StyleRegistry;

/// Avatar image and border-ring transforms for one scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AvatarTransform {
    /// `1` at the top of the page, `0` (or below) once detached.
    pub progress: f64,
    pub image: Transform,
    pub border: Transform,
    pub border_opacity: f64,
}

/// Interpolate the avatar between its large and compact forms.
///
/// A zero `down_delay` (no hero above the header) pins the avatar at the
/// compact endpoint instead of dividing by zero.
pub fn interpolate_avatar(
    config: &AvatarConfig,
    down_delay: f64,
    scroll_offset: f64,
) -> AvatarTransform {
    let progress = if down_delay != 0.0 {
        (down_delay - scroll_offset) / down_delay
    } else {
        0.0
    };

    let scale = interpolate(progress, config.from_scale, config.to_scale);
    let x = interpolate(progress, config.from_x, config.to_x);

    // The ring is drawn at the compact size; scale it up to follow the image.
    let border_scale = if scale != 0.0 {
        1.0 / (config.to_scale / scale)
    } else {
        1.0
    };
    let border_x = (x - config.to_x) * border_scale;

    AvatarTransform {
        progress,
        image: Transform::new(x, scale),
        border: Transform::new(border_x, border_scale),
        border_opacity: if scale == config.to_scale { 1.0 } else { 0.0 },
    }
}

impl AvatarTransform {
    pub fn publish<R: StyleRegistry + ?Sized>(&self, registry: &mut R) {
        registry.set(
            StyleKey::AvatarImageTransform,
            StyleValue::Transform(self.image),
        );
        registry.set(
            StyleKey::AvatarBorderTransform,
            StyleValue::Transform(self.border),
        );
        registry.set(
            StyleKey::AvatarBorderOpacity,
            StyleValue::Number(self.border_opacity),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::MemoryRegistry;

    #[test]
    fn halfway_through_hero() {
        let t = interpolate_avatar(&AvatarConfig::default(), 100.0, 50.0);
        assert_eq!(t.progress, 0.5);
        assert_eq!(t.image.scale, 0.78125);
        assert_eq!(t.image.translate_x, 0.0625);
        assert_eq!(t.border_opacity, 0.0);

        let expected_border = 1.0 / (0.5625 / 0.78125);
        assert_eq!(t.border.scale, expected_border);
        assert_eq!(t.border.translate_x, (0.0625 - 0.125) * expected_border);
    }

    #[test]
    fn page_top_is_full_size() {
        let t = interpolate_avatar(&AvatarConfig::default(), 100.0, 0.0);
        assert_eq!(t.image, Transform::new(0.0, 1.0));
        assert_eq!(t.border_opacity, 0.0);
    }

    #[test]
    fn past_detach_point_is_compact_with_ring() {
        let t = interpolate_avatar(&AvatarConfig::default(), 100.0, 1_000.0);
        assert_eq!(t.image, Transform::new(0.125, 0.5625));
        assert_eq!(t.border, Transform::new(0.0, 1.0));
        assert_eq!(t.border_opacity, 1.0);
    }

    #[test]
    fn zero_anchor_does_not_divide_by_zero() {
        let t = interpolate_avatar(&AvatarConfig::default(), 0.0, 37.0);
        assert_eq!(t.progress, 0.0);
        assert_eq!(t.image, Transform::new(0.125, 0.5625));
        assert_eq!(t.border, Transform::new(0.0, 1.0));
        assert_eq!(t.border_opacity, 1.0);
    }

    #[test]
    fn zero_scale_falls_back_to_unit_border() {
        let config = AvatarConfig {
            from_scale: 0.0,
            to_scale: 0.0,
            ..AvatarConfig::default()
        };
        let t = interpolate_avatar(&config, 100.0, 50.0);
        assert_eq!(t.border.scale, 1.0);
    }

    #[test]
    fn publishes_css_text() {
        let mut registry = MemoryRegistry::new();
        interpolate_avatar(&AvatarConfig::default(), 100.0, 50.0).publish(&mut registry);
        assert_eq!(
            registry.css(StyleKey::AvatarImageTransform).as_deref(),
            Some("translate3d(0.0625rem, 0, 0) scale(0.78125)")
        );
        assert_eq!(
            registry.css(StyleKey::AvatarBorderOpacity).as_deref(),
            Some("0")
        );
    }
}
