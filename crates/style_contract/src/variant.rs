//! Closed variant enumerations and lenient key resolution.

use std::fmt;

use crate::VariantError;

/// Why a resolution used the documented default instead of the caller's key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fallback {
    /// No key was supplied, or the key was blank.
    Omitted,
    /// The key is outside the declared enumeration.
    Unrecognized(String),
}

/// Result of resolving a caller-supplied key against a closed enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<V> {
    /// Selected entry. Always a declared key.
    pub value: V,
    /// Set when `value` is the default rather than the caller's key.
    pub fallback: Option<Fallback>,
}

impl<V> Resolved<V> {
    /// Wraps a key that matched the enumeration exactly.
    pub fn exact(value: V) -> Self {
        Self {
            value,
            fallback: None,
        }
    }

    /// Wraps a default chosen because of `fallback`.
    pub fn defaulted(value: V, fallback: Fallback) -> Self {
        Self {
            value,
            fallback: Some(fallback),
        }
    }

    /// Returns `true` when the caller's key was outside the enumeration.
    pub fn is_unrecognized(&self) -> bool {
        matches!(self.fallback, Some(Fallback::Unrecognized(_)))
    }
}

/// A closed enumeration of style keys (variant, size, or status).
///
/// Implementors list every declared key in [`VariantKey::ALL`] and give each a stable token.
/// Resolution never fails: blank or unknown input selects the documented default, which is the
/// key's `Default` impl. Status enumerations have no default and are resolved as optional.
pub trait VariantKey: Copy + Eq + fmt::Debug + 'static {
    /// Human-readable enumeration name used in diagnostics.
    const KIND: &'static str;
    /// Every declared key, in documentation order.
    const ALL: &'static [Self];

    /// Stable token used for class names, `data-ui-*` attributes, and serialized props.
    fn token(self) -> &'static str;

    /// Looks up a key by token. Surrounding whitespace is ignored; matching is otherwise exact.
    fn from_token(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.iter().copied().find(|key| key.token() == raw)
    }

    /// Resolves an optional key, falling back to [`Default::default`].
    fn resolve(raw: Option<&str>) -> Resolved<Self>
    where
        Self: Default,
    {
        Self::resolve_or(raw, Self::default())
    }

    /// Resolves an optional key, falling back to `default`.
    fn resolve_or(raw: Option<&str>, default: Self) -> Resolved<Self> {
        match raw {
            None => Resolved::defaulted(default, Fallback::Omitted),
            Some(raw) if raw.trim().is_empty() => Resolved::defaulted(default, Fallback::Omitted),
            Some(raw) => match Self::from_token(raw) {
                Some(value) => Resolved::exact(value),
                None => Resolved::defaulted(default, Fallback::Unrecognized(raw.to_string())),
            },
        }
    }

    /// Parses a key, rejecting anything outside the enumeration.
    ///
    /// # Errors
    ///
    /// Returns [`VariantError::Unknown`] when `raw` does not name a declared key.
    fn parse_strict(raw: &str) -> Result<Self, VariantError> {
        Self::from_token(raw).ok_or_else(|| VariantError::Unknown {
            kind: Self::KIND,
            value: raw.to_string(),
            expected: expected_tokens::<Self>(),
        })
    }
}

pub(crate) fn expected_tokens<V: VariantKey>() -> String {
    V::ALL
        .iter()
        .map(|key| key.token())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{BadgeVariant, Size};

    #[test]
    fn from_token_trims_but_stays_case_sensitive() {
        assert_eq!(BadgeVariant::from_token(" success "), Some(BadgeVariant::Success));
        assert_eq!(BadgeVariant::from_token("Success"), None);
    }

    #[test]
    fn resolve_reports_omitted_and_blank_keys() {
        assert_eq!(
            BadgeVariant::resolve(None),
            Resolved::defaulted(BadgeVariant::Default, Fallback::Omitted)
        );
        assert_eq!(
            BadgeVariant::resolve(Some("   ")),
            Resolved::defaulted(BadgeVariant::Default, Fallback::Omitted)
        );
    }

    #[test]
    fn resolve_reports_unrecognized_key() {
        let resolved = BadgeVariant::resolve(Some("bogus"));
        assert_eq!(resolved.value, BadgeVariant::Default);
        assert!(resolved.is_unrecognized());
    }

    #[test]
    fn resolve_or_uses_caller_default() {
        assert_eq!(Size::resolve_or(Some("xl"), Size::Sm).value, Size::Sm);
        assert_eq!(Size::resolve_or(Some("lg"), Size::Sm), Resolved::exact(Size::Lg));
    }

    #[test]
    fn parse_strict_lists_expected_tokens() {
        let err = Size::parse_strict("huge").expect_err("unknown size");
        assert_eq!(
            err.to_string(),
            "unknown size `huge` (expected one of: sm, md, lg)"
        );
    }
}
