use masthead_protocol::{ColorScheme, SchemePreference};

/// Flip the active color scheme.
///
/// Returns the new scheme and what to do with the persisted choice: an
/// explicit override is only stored when it differs from the system scheme.
pub fn toggle_color_scheme(
    current: ColorScheme,
    system: ColorScheme,
) -> (ColorScheme, SchemePreference) {
    let next = current.flipped();
    let preference = if next == system {
        SchemePreference::Clear
    } else {
        SchemePreference::Store(next)
    };
    (next, preference)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_back_to_system_clears_override() {
        let (next, pref) = toggle_color_scheme(ColorScheme::Light, ColorScheme::Dark);
        assert_eq!(next, ColorScheme::Dark);
        assert_eq!(pref, SchemePreference::Clear);
    }

    #[test]
    fn toggling_away_from_system_stores_override() {
        let (next, pref) = toggle_color_scheme(ColorScheme::Dark, ColorScheme::Dark);
        assert_eq!(next, ColorScheme::Light);
        assert_eq!(pref, SchemePreference::Store(ColorScheme::Light));
    }
}
