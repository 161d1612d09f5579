//! String-keyed prop resolution with development-time diagnostics.

use style_contract::{resolve_style, ComponentStyle, Fallback, ResolvedStyle, StyleRequest};

/// Resolves text props (catalogs, fixtures, query strings) against `C`'s style map.
///
/// Unknown keys always fall back to the documented default. Debug builds log a warning for each
/// one; with the `strict-props` feature debug builds panic instead. Release builds stay silent.
pub fn resolve_props<C: ComponentStyle>(request: StyleRequest<'_>) -> ResolvedStyle<C> {
    let resolved = resolve_style::<C>(request);
    report_fallbacks(&resolved);
    resolved
}

fn report_fallbacks<C: ComponentStyle>(resolved: &ResolvedStyle<C>) {
    if !cfg!(debug_assertions) {
        return;
    }
    for (field, fallback) in &resolved.fallbacks {
        if let Fallback::Unrecognized(raw) = fallback {
            let message = format!("{} {field} `{raw}` is not declared; using the default", C::KIND);
            if cfg!(feature = "strict-props") {
                panic!("{message}");
            }
            leptos::logging::warn!("{message}");
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use style_contract::{AlertStatus, AlertStyle, BadgeStyle, BadgeVariant, Size};

    use super::*;

    #[test]
    fn declared_keys_resolve_without_diagnostics() {
        let resolved = resolve_props::<BadgeStyle>(StyleRequest::new().variant("error").size("sm"));
        assert_eq!(resolved.variant, BadgeVariant::Error);
        assert_eq!(resolved.size, Size::Sm);
    }

    #[test]
    fn alert_statuses_are_declared_keys() {
        for (raw, status) in [
            ("info", AlertStatus::Info),
            ("success", AlertStatus::Success),
            ("warning", AlertStatus::Warning),
            ("error", AlertStatus::Error),
        ] {
            let resolved = resolve_props::<AlertStyle>(StyleRequest::new().status(raw));
            assert_eq!(resolved.variant, status);
            assert!(!resolved.has_unrecognized_key());
        }
    }

    #[cfg(not(feature = "strict-props"))]
    #[test]
    fn unknown_keys_fall_back_to_defaults() {
        let resolved = resolve_props::<BadgeStyle>(StyleRequest::new().variant("bogus"));
        assert_eq!(resolved.variant, BadgeVariant::Default);
        assert!(resolved.has_unrecognized_key());
    }

    #[cfg(all(debug_assertions, feature = "strict-props"))]
    #[test]
    #[should_panic(expected = "badge variant `bogus` is not declared")]
    fn strict_props_fail_fast_in_debug_builds() {
        let _ = resolve_props::<BadgeStyle>(StyleRequest::new().variant("bogus"));
    }
}
