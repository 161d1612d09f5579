//! Style descriptors and the `(variant, size, status)` resolver.

use std::marker::PhantomData;

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::{ClassList, ElementSpec, Fallback, Size, VariantKey};

fn is_unset(value: &&'static str) -> bool {
    value.is_empty()
}

/// Concrete style output selected from a component's style map.
///
/// Every field is a static CSS value; an empty string means "not set" and is skipped when the
/// descriptor is rendered, so a missing entry is a no-op rather than a broken declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct StyleDescriptor {
    /// `background`.
    #[serde(skip_serializing_if = "is_unset")]
    pub background: &'static str,
    /// `color`.
    #[serde(skip_serializing_if = "is_unset")]
    pub foreground: &'static str,
    /// `border-color`.
    #[serde(skip_serializing_if = "is_unset")]
    pub border: &'static str,
    /// `border-radius`.
    #[serde(skip_serializing_if = "is_unset")]
    pub radius: &'static str,
    /// `box-shadow`.
    #[serde(skip_serializing_if = "is_unset")]
    pub shadow: &'static str,
    /// `padding`.
    #[serde(skip_serializing_if = "is_unset")]
    pub padding: &'static str,
    /// `font-size`.
    #[serde(skip_serializing_if = "is_unset")]
    pub font_size: &'static str,
    /// `width`.
    #[serde(skip_serializing_if = "is_unset")]
    pub width: &'static str,
    /// `height`.
    #[serde(skip_serializing_if = "is_unset")]
    pub height: &'static str,
    /// `margin`.
    #[serde(skip_serializing_if = "is_unset")]
    pub margin: &'static str,
}

impl StyleDescriptor {
    /// Descriptor with every field unset.
    pub const EMPTY: Self = Self {
        background: "",
        foreground: "",
        border: "",
        radius: "",
        shadow: "",
        padding: "",
        font_size: "",
        width: "",
        height: "",
        margin: "",
    };

    /// Layers `top` over `self`: every field `top` sets wins, unset fields keep `self`.
    pub fn overlay(self, top: Self) -> Self {
        fn pick(base: &'static str, top: &'static str) -> &'static str {
            if top.is_empty() {
                base
            } else {
                top
            }
        }

        Self {
            background: pick(self.background, top.background),
            foreground: pick(self.foreground, top.foreground),
            border: pick(self.border, top.border),
            radius: pick(self.radius, top.radius),
            shadow: pick(self.shadow, top.shadow),
            padding: pick(self.padding, top.padding),
            font_size: pick(self.font_size, top.font_size),
            width: pick(self.width, top.width),
            height: pick(self.height, top.height),
            margin: pick(self.margin, top.margin),
        }
    }

    /// Ordered `(property, value)` pairs for the fields that are set.
    pub fn declarations(&self) -> Vec<(&'static str, &'static str)> {
        [
            ("background", self.background),
            ("color", self.foreground),
            ("border-color", self.border),
            ("border-radius", self.radius),
            ("box-shadow", self.shadow),
            ("padding", self.padding),
            ("font-size", self.font_size),
            ("width", self.width),
            ("height", self.height),
            ("margin", self.margin),
        ]
        .into_iter()
        .filter(|(_, value)| !value.trim().is_empty())
        .collect()
    }

    /// Inline `style` attribute text with a fixed property order.
    pub fn inline_style(&self) -> String {
        self.declarations()
            .into_iter()
            .map(|(property, value)| format!("{property}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Placeholder status enumeration for components that declare no status keys.
///
/// It has no declared tokens, so any supplied status resolves to "no status".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NoStatus {
    /// Never selected.
    #[default]
    Unset,
}

impl VariantKey for NoStatus {
    const KIND: &'static str = "status";
    const ALL: &'static [Self] = &[];

    fn token(self) -> &'static str {
        ""
    }
}

/// A component's immutable style map.
pub trait ComponentStyle: 'static {
    /// Stable `data-ui-kind` token.
    const KIND: &'static str;
    /// Base class every rendered element carries.
    const BASE_CLASS: &'static str;
    /// Size used when the caller omits or misspells one.
    const DEFAULT_SIZE: Size = Size::Md;
    /// `true` when the family's keys are statuses: the request's `status` key selects
    /// [`Self::Variant`] and the family declares no separate status layer.
    const STATUS_KEYED: bool = false;

    /// Closed variant enumeration.
    type Variant: VariantKey + Default;
    /// Closed status enumeration; [`NoStatus`] when the component has none.
    type Status: VariantKey;

    /// Table entry for a variant.
    fn variant_style(variant: Self::Variant) -> StyleDescriptor;

    /// Table entry for a size. Defaults to the shared padding/font scale.
    fn size_style(size: Size) -> StyleDescriptor {
        StyleDescriptor {
            padding: size.padding(),
            font_size: size.font_size(),
            ..StyleDescriptor::EMPTY
        }
    }

    /// Status override layered over the variant entry.
    fn status_style(_status: Self::Status) -> StyleDescriptor {
        StyleDescriptor::EMPTY
    }
}

/// Caller-supplied keys, any of which may be absent or outside the enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleRequest<'a> {
    /// Variant key.
    pub variant: Option<&'a str>,
    /// Size key.
    pub size: Option<&'a str>,
    /// Status key.
    pub status: Option<&'a str>,
}

impl<'a> StyleRequest<'a> {
    /// Request with every key omitted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the variant key.
    pub fn variant(mut self, variant: &'a str) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Sets the size key.
    pub fn size(mut self, size: &'a str) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the status key.
    pub fn status(mut self, status: &'a str) -> Self {
        self.status = Some(status);
        self
    }
}

/// One selected entry of a component's style map.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle<C: ComponentStyle> {
    /// Selected variant.
    pub variant: C::Variant,
    /// Selected size.
    pub size: Size,
    /// Selected status, if any.
    pub status: Option<C::Status>,
    /// Size, variant, and status entries layered in that order.
    pub descriptor: StyleDescriptor,
    /// Keys that fell back to a default, labeled `variant`, `size`, or `status`.
    pub fallbacks: Vec<(&'static str, Fallback)>,
    component: PhantomData<C>,
}

impl<C: ComponentStyle> ResolvedStyle<C> {
    /// Builds the entry for already-typed keys.
    pub fn from_keys(variant: C::Variant, size: Size, status: Option<C::Status>) -> Self {
        let mut descriptor = C::size_style(size).overlay(C::variant_style(variant));
        if let Some(status) = status {
            descriptor = descriptor.overlay(C::status_style(status));
        }
        Self {
            variant,
            size,
            status,
            descriptor,
            fallbacks: Vec::new(),
            component: PhantomData,
        }
    }

    /// Returns `true` when any key fell back because it was unrecognized.
    pub fn has_unrecognized_key(&self) -> bool {
        self.fallbacks
            .iter()
            .any(|(_, fallback)| matches!(fallback, Fallback::Unrecognized(_)))
    }

    /// Computed classes: base, then variant, size, and status modifiers.
    pub fn class_list(&self) -> ClassList {
        let base = C::BASE_CLASS;
        let mut classes = ClassList::new()
            .with(base)
            .with(&format!("{base}--{}", self.variant.token()))
            .with(&format!("{base}--{}", self.size.token()));
        if let Some(status) = self.status {
            classes.push(&format!("{base}--{}", status.token()));
        }
        classes
    }

    /// Describes the element a component renders for this entry, merging the caller's classes.
    pub fn element(&self, tag: &'static str, caller_class: Option<&str>) -> ElementSpec {
        let mut element = ElementSpec::new(tag)
            .classes(ClassList::merge(self.class_list(), caller_class))
            .style(&self.descriptor)
            .attr("data-ui-primitive", "true")
            .attr("data-ui-kind", C::KIND)
            .attr("data-ui-variant", self.variant.token())
            .attr("data-ui-size", self.size.token());
        if C::STATUS_KEYED {
            element = element.attr("data-ui-status", self.variant.token());
        }
        if let Some(status) = self.status {
            element = element.attr("data-ui-status", status.token());
        }
        element
    }
}

/// Resolves caller keys against `C`'s style map.
///
/// Omitted or unknown variant and size keys select the documented defaults. An omitted status
/// means "no status"; an unknown status is dropped and recorded as a fallback. Status-keyed
/// families read their variant from `status`, falling back to `variant` when it is blank.
pub fn resolve_style<C: ComponentStyle>(request: StyleRequest<'_>) -> ResolvedStyle<C> {
    let (variant_label, variant_key, status_key) = if C::STATUS_KEYED {
        let key = request
            .status
            .filter(|raw| !raw.trim().is_empty())
            .or(request.variant);
        ("status", key, None)
    } else {
        ("variant", request.variant, request.status)
    };
    let variant = C::Variant::resolve(variant_key);
    let size = Size::resolve_or(request.size, C::DEFAULT_SIZE);
    let (status, status_fallback) = match status_key {
        Some(raw) if !raw.trim().is_empty() => match C::Status::from_token(raw) {
            Some(status) => (Some(status), None),
            None => (None, Some(Fallback::Unrecognized(raw.to_string()))),
        },
        _ => (None, None),
    };

    let mut resolved = ResolvedStyle::from_keys(variant.value, size.value, status);
    // Omitted keys are the documented default path and are not reported.
    resolved.fallbacks = [
        (variant_label, variant.fallback),
        ("size", size.fallback),
        ("status", status_fallback),
    ]
    .into_iter()
    .filter_map(|(label, fallback)| match fallback {
        Some(Fallback::Omitted) | None => None,
        Some(fallback) => Some((label, fallback)),
    })
    .collect();
    resolved
}

/// Exports `C`'s full style map as JSON, keyed by token.
pub fn style_table<C: ComponentStyle>() -> Value {
    fn entries<V: VariantKey>(style: impl Fn(V) -> StyleDescriptor) -> Map<String, Value> {
        V::ALL
            .iter()
            .map(|key| (key.token().to_string(), json!(style(*key))))
            .collect()
    }

    json!({
        "kind": C::KIND,
        "base_class": C::BASE_CLASS,
        "default_variant": C::Variant::default().token(),
        "default_size": C::DEFAULT_SIZE.token(),
        "keyed_by": if C::STATUS_KEYED { "status" } else { "variant" },
        "variants": entries::<C::Variant>(C::variant_style),
        "sizes": entries::<Size>(C::size_style),
        "statuses": entries::<C::Status>(C::status_style),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{AvatarStyle, BadgeStyle, BadgeVariant, FieldStatus, TextFieldStyle};

    #[test]
    fn overlay_keeps_base_fields_the_top_leaves_unset() {
        let base = StyleDescriptor {
            padding: "4px",
            background: "#fff",
            ..StyleDescriptor::EMPTY
        };
        let top = StyleDescriptor {
            background: "#000",
            ..StyleDescriptor::EMPTY
        };
        let merged = base.overlay(top);
        assert_eq!(merged.background, "#000");
        assert_eq!(merged.padding, "4px");
    }

    #[test]
    fn inline_style_skips_unset_fields_in_fixed_order() {
        let descriptor = StyleDescriptor {
            padding: "2px",
            background: "red",
            shadow: " ",
            ..StyleDescriptor::EMPTY
        };
        assert_eq!(descriptor.inline_style(), "background: red; padding: 2px;");
        assert_eq!(StyleDescriptor::EMPTY.inline_style(), "");
    }

    #[test]
    fn omitted_keys_are_not_reported_as_fallbacks() {
        let resolved = resolve_style::<BadgeStyle>(StyleRequest::new());
        assert_eq!(resolved.variant, BadgeVariant::Default);
        assert_eq!(resolved.size, Size::Md);
        assert!(resolved.fallbacks.is_empty());
    }

    #[test]
    fn unknown_keys_are_reported_per_field() {
        let resolved =
            resolve_style::<BadgeStyle>(StyleRequest::new().variant("bogus").size("xxl"));
        assert_eq!(
            resolved.fallbacks,
            vec![
                ("variant", Fallback::Unrecognized("bogus".to_string())),
                ("size", Fallback::Unrecognized("xxl".to_string())),
            ]
        );
        assert!(resolved.has_unrecognized_key());
    }

    #[test]
    fn status_overrides_variant_border() {
        let resolved = resolve_style::<TextFieldStyle>(StyleRequest::new().status("error"));
        assert_eq!(resolved.status, Some(FieldStatus::Error));
        assert_eq!(resolved.descriptor.border, "#dc2626");
        assert!(resolved.class_list().contains("ui-text-field--error"));
    }

    #[test]
    fn unknown_status_is_dropped() {
        let resolved = resolve_style::<AvatarStyle>(StyleRequest::new().status("asleep"));
        assert_eq!(resolved.status, None);
        assert_eq!(
            resolved.fallbacks,
            vec![("status", Fallback::Unrecognized("asleep".to_string()))]
        );
    }

    #[test]
    fn status_on_component_without_statuses_is_ignored() {
        let resolved = resolve_style::<BadgeStyle>(StyleRequest::new().status("error"));
        assert_eq!(resolved.status, None);
        assert_eq!(
            resolved.descriptor,
            resolve_style::<BadgeStyle>(StyleRequest::new()).descriptor
        );
    }

    #[test]
    fn style_table_lists_every_declared_key() {
        let table = style_table::<BadgeStyle>();
        assert_eq!(table["kind"], "badge");
        assert_eq!(table["default_variant"], "default");
        let variants = table["variants"].as_object().expect("variants object");
        assert_eq!(variants.len(), BadgeVariant::ALL.len());
        assert_eq!(table["variants"]["success"]["background"], "#16a34a");
        assert!(table["statuses"].as_object().expect("statuses").is_empty());
        assert_eq!(table["keyed_by"], "variant");
        assert_eq!(style_table::<crate::AlertStyle>()["keyed_by"], "status");
    }
}
