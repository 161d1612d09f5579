use pretty_assertions::{assert_eq, assert_ne};
use style_contract::{
    resolve_style, AccordionStyle, AlertStatus, AlertStyle, AvatarStyle, BadgeStyle,
    BadgeVariant, ButtonStyle, ButtonVariant, CardStyle, CardVariant, ComponentStyle, Disclosure,
    DisclosureEvent, DropdownStyle, Fallback, InteractionMachine, LocalState, ModalStyle,
    ProgressStyle, ResolvedStyle, Size, StyleDescriptor, StyleRequest, SwitchEvent, SwitchState,
    SwitchStyle, TabsStyle, TextFieldStyle, TooltipStyle, VariantKey,
};

fn badge_markup(variant: &str, class: Option<&str>) -> String {
    resolve_style::<BadgeStyle>(StyleRequest::new().variant(variant))
        .element("span", class)
        .to_markup("Status")
}

/// `(key, background, border, radius)` for every declared key, in declaration order.
type Rows = &'static [(&'static str, &'static str, &'static str, &'static str)];

fn keyed_request<C: ComponentStyle>(key: &'static str, size: &'static str) -> StyleRequest<'static> {
    let request = StyleRequest::new().size(size);
    if C::STATUS_KEYED {
        request.status(key)
    } else {
        request.variant(key)
    }
}

fn assert_documented_rows<C: ComponentStyle>(rows: Rows) {
    let declared = <C::Variant as VariantKey>::ALL
        .iter()
        .map(|key| key.token())
        .collect::<Vec<_>>();
    assert_eq!(
        rows.iter().map(|row| row.0).collect::<Vec<_>>(),
        declared,
        "{} keys",
        C::KIND
    );

    for &(key, background, border, radius) in rows {
        for size in Size::ALL {
            let resolved = resolve_style::<C>(keyed_request::<C>(key, size.token()));
            assert_eq!(resolved.variant.token(), key, "{}", C::KIND);
            assert_eq!(resolved.size, *size, "{} {key}", C::KIND);
            assert!(resolved.fallbacks.is_empty(), "{} {key} fell back", C::KIND);
            assert_eq!(
                (
                    resolved.descriptor.background,
                    resolved.descriptor.border,
                    resolved.descriptor.radius
                ),
                (background, border, radius),
                "{} {key} at {}",
                C::KIND,
                size.token()
            );
        }
    }
}

#[test]
fn badge_table_matches_documented_values() {
    assert_documented_rows::<BadgeStyle>(&[
        ("default", "#f3f4f6", "#e5e7eb", "9999px"),
        ("primary", "#2563eb", "#1d4ed8", "9999px"),
        ("success", "#16a34a", "#15803d", "9999px"),
        ("warning", "#f59e0b", "#d97706", "9999px"),
        ("error", "#dc2626", "#b91c1c", "9999px"),
    ]);
}

#[test]
fn button_table_matches_documented_values() {
    assert_documented_rows::<ButtonStyle>(&[
        ("default", "#f3f4f6", "#e5e7eb", "8px"),
        ("primary", "#2563eb", "#1d4ed8", "8px"),
        ("secondary", "#e5e7eb", "#d1d5db", "8px"),
        ("danger", "#dc2626", "#b91c1c", "8px"),
        ("ghost", "transparent", "transparent", "8px"),
        ("outline", "transparent", "#2563eb", "8px"),
    ]);
}

#[test]
fn card_table_matches_documented_values() {
    assert_documented_rows::<CardStyle>(&[
        ("default", "#ffffff", "#e5e7eb", "12px"),
        ("elevated", "#ffffff", "transparent", "12px"),
        ("outlined", "#ffffff", "#d1d5db", "12px"),
        ("glass", "rgba(255, 255, 255, 0.6)", "rgba(255, 255, 255, 0.3)", "12px"),
    ]);
}

#[test]
fn alert_table_matches_documented_values() {
    assert_documented_rows::<AlertStyle>(&[
        ("info", "#eff6ff", "#bfdbfe", "8px"),
        ("success", "#f0fdf4", "#bbf7d0", "8px"),
        ("warning", "#fffbeb", "#fde68a", "8px"),
        ("error", "#fef2f2", "#fecaca", "8px"),
    ]);
}

#[test]
fn avatar_table_matches_documented_values() {
    assert_documented_rows::<AvatarStyle>(&[
        ("circle", "#e5e7eb", "transparent", "9999px"),
        ("rounded", "#e5e7eb", "transparent", "8px"),
        ("square", "#e5e7eb", "transparent", "0"),
    ]);
}

#[test]
fn text_field_table_matches_documented_values() {
    assert_documented_rows::<TextFieldStyle>(&[
        ("default", "#ffffff", "#d1d5db", "8px"),
        ("filled", "#f3f4f6", "transparent", "8px"),
        ("outline", "transparent", "#6b7280", "8px"),
    ]);
}

#[test]
fn progress_table_matches_documented_values() {
    assert_documented_rows::<ProgressStyle>(&[
        ("default", "#2563eb", "", "9999px"),
        ("success", "#16a34a", "", "9999px"),
        ("warning", "#f59e0b", "", "9999px"),
        ("error", "#dc2626", "", "9999px"),
    ]);
}

#[test]
fn modal_table_matches_documented_values() {
    assert_documented_rows::<ModalStyle>(&[
        ("default", "#ffffff", "transparent", "12px"),
        ("centered", "#ffffff", "transparent", "12px"),
        ("fullscreen", "#ffffff", "transparent", "0"),
    ]);
}

#[test]
fn tooltip_table_matches_documented_values() {
    assert_documented_rows::<TooltipStyle>(&[
        ("dark", "#111827", "#111827", "4px"),
        ("light", "#ffffff", "#e5e7eb", "4px"),
    ]);
}

#[test]
fn switch_table_matches_documented_values() {
    assert_documented_rows::<SwitchStyle>(&[
        ("default", "#2563eb", "", "9999px"),
        ("success", "#16a34a", "", "9999px"),
    ]);
}

#[test]
fn panel_tables_match_documented_values() {
    let rows: Rows = &[
        ("default", "transparent", "transparent", "8px"),
        ("bordered", "#ffffff", "#e5e7eb", "8px"),
    ];
    assert_documented_rows::<AccordionStyle>(rows);
    assert_documented_rows::<TabsStyle>(rows);
    assert_documented_rows::<DropdownStyle>(rows);
    assert_eq!(
        resolve_style::<DropdownStyle>(StyleRequest::new()).descriptor.shadow,
        "0 4px 6px rgba(0, 0, 0, 0.1)"
    );
}

#[test]
fn status_overrides_match_documented_borders() {
    for (status, border) in [
        ("online", "#22c55e"),
        ("offline", "#9ca3af"),
        ("busy", "#ef4444"),
        ("away", "#f59e0b"),
    ] {
        let resolved = resolve_style::<AvatarStyle>(StyleRequest::new().status(status));
        assert_eq!(resolved.descriptor.border, border, "avatar {status}");
        assert_eq!(resolved.descriptor.background, "#e5e7eb");
        assert!(resolved.class_list().contains(&format!("ui-avatar--{status}")));
    }

    for (status, border) in [("error", "#dc2626"), ("success", "#16a34a")] {
        let resolved =
            resolve_style::<TextFieldStyle>(StyleRequest::new().variant("filled").status(status));
        assert_eq!(resolved.descriptor.border, border, "text field {status}");
        assert_eq!(resolved.descriptor.background, "#f3f4f6");
    }
}

#[test]
fn size_scales_match_documented_values() {
    let badge = resolve_style::<BadgeStyle>(StyleRequest::new().size("sm")).descriptor;
    assert_eq!((badge.padding, badge.font_size), ("2px 8px", "12px"));

    let button = resolve_style::<ButtonStyle>(StyleRequest::new().size("lg")).descriptor;
    assert_eq!((button.padding, button.font_size), ("12px 24px", "16px"));

    let card = resolve_style::<CardStyle>(StyleRequest::new().size("sm")).descriptor;
    assert_eq!(card.padding, "12px");

    let avatar = resolve_style::<AvatarStyle>(StyleRequest::new().size("lg")).descriptor;
    assert_eq!((avatar.width, avatar.height), ("56px", "56px"));

    let progress = resolve_style::<ProgressStyle>(StyleRequest::new().size("sm")).descriptor;
    assert_eq!(progress.height, "4px");

    let modal = resolve_style::<ModalStyle>(StyleRequest::new()).descriptor;
    assert_eq!(modal.width, "560px");

    let switch = resolve_style::<SwitchStyle>(StyleRequest::new().size("lg")).descriptor;
    assert_eq!((switch.width, switch.height), ("56px", "30px"));

    let tooltip = resolve_style::<TooltipStyle>(StyleRequest::new()).descriptor;
    assert_eq!((tooltip.padding, tooltip.font_size), ("2px 8px", "12px"));
}

#[test]
fn alert_reads_its_status_key() {
    let resolved = resolve_style::<AlertStyle>(StyleRequest::new().status("success"));
    assert_eq!(resolved.variant, AlertStatus::Success);
    assert!(resolved.fallbacks.is_empty());
    assert_eq!(resolved.descriptor.background, "#f0fdf4");

    let element = resolved.element("div", None);
    assert_eq!(element.attribute("data-ui-status"), Some("success"));
    assert!(element.class_list().contains("ui-alert--success"));

    let via_variant = resolve_style::<AlertStyle>(StyleRequest::new().variant("warning"));
    assert_eq!(via_variant.variant, AlertStatus::Warning);

    let status_wins =
        resolve_style::<AlertStyle>(StyleRequest::new().variant("warning").status("error"));
    assert_eq!(status_wins.variant, AlertStatus::Error);
}

#[test]
fn unknown_alert_status_falls_back_to_info() {
    let resolved = resolve_style::<AlertStyle>(StyleRequest::new().status("critical"));
    assert_eq!(resolved.variant, AlertStatus::Info);
    assert_eq!(resolved.status, None);
    assert_eq!(
        resolved.fallbacks,
        vec![("status", Fallback::Unrecognized("critical".to_string()))]
    );
}

#[test]
fn modal_variants_differ_by_margin() {
    let margin = |variant: &'static str| {
        resolve_style::<ModalStyle>(StyleRequest::new().variant(variant))
            .descriptor
            .margin
    };
    assert_eq!(margin("default"), "48px auto 0");
    assert_eq!(margin("centered"), "auto");
    assert_eq!(margin("fullscreen"), "0");
    assert_ne!(
        resolve_style::<ModalStyle>(StyleRequest::new().variant("centered")).descriptor,
        resolve_style::<ModalStyle>(StyleRequest::new()).descriptor
    );
}

#[test]
fn success_badge_uses_documented_color_and_radius() {
    let resolved = resolve_style::<BadgeStyle>(StyleRequest::new().variant("success"));
    assert_eq!(resolved.variant, BadgeVariant::Success);
    assert_eq!(resolved.descriptor.background, "#16a34a");
    assert_eq!(resolved.descriptor.foreground, "#ffffff");
    assert_eq!(resolved.descriptor.radius, "9999px");
    assert_eq!(
        badge_markup("success", None),
        "<span class=\"ui-badge ui-badge--success ui-badge--md\" style=\"background: #16a34a; \
         color: #ffffff; border-color: #15803d; border-radius: 9999px; box-shadow: none; \
         padding: 4px 12px; font-size: 14px;\" data-ui-primitive=\"true\" data-ui-kind=\"badge\" \
         data-ui-variant=\"success\" data-ui-size=\"md\">Status</span>"
    );
}

#[test]
fn bogus_badge_renders_identically_to_default() {
    assert_eq!(badge_markup("bogus", None), badge_markup("default", None));
    assert_eq!(
        badge_markup("bogus", None),
        resolve_style::<BadgeStyle>(StyleRequest::new())
            .element("span", None)
            .to_markup("Status")
    );
}

#[test]
fn omitted_keys_use_documented_defaults() {
    let button = resolve_style::<ButtonStyle>(StyleRequest::new());
    assert_eq!(button.variant, ButtonVariant::Default);
    assert_eq!(button.size, Size::Md);

    let alert = resolve_style::<AlertStyle>(StyleRequest::new());
    assert_eq!(alert.variant, AlertStatus::Info);

    let tooltip = resolve_style::<TooltipStyle>(StyleRequest::new().size("giant"));
    assert_eq!(tooltip.size, Size::Sm);
}

#[test]
fn forwarded_classes_always_reach_the_class_list() {
    for caller in ["mt-4", "shadow-lg hover:scale-105", "ui-card extra"] {
        let element = ResolvedStyle::<CardStyle>::from_keys(CardVariant::Glass, Size::Lg, None)
            .element("article", Some(caller));
        for class in caller.split_whitespace() {
            assert!(
                element.class_list().contains(class),
                "missing `{class}` in {}",
                element.class_attr()
            );
        }
    }
}

#[test]
fn undefined_class_expression_is_a_no_op() {
    assert_eq!(badge_markup("primary", Some("")), badge_markup("primary", None));
}

#[test]
fn rendering_is_deterministic() {
    let first = badge_markup("warning", Some("pill"));
    let second = badge_markup("warning", Some("pill"));
    assert_eq!(first.as_bytes(), second.as_bytes());
}

#[test]
fn fullscreen_modal_overrides_size_width() {
    let resolved = resolve_style::<ModalStyle>(StyleRequest::new().variant("fullscreen").size("sm"));
    assert_eq!(resolved.descriptor.width, "100vw");
    assert_eq!(resolved.descriptor.height, "100vh");
    assert_eq!(
        resolve_style::<ModalStyle>(StyleRequest::new().size("sm")).descriptor.width,
        "400px"
    );
}

#[test]
fn descriptors_never_render_blank_declarations() {
    let descriptor = StyleDescriptor {
        shadow: "",
        ..StyleDescriptor::EMPTY
    };
    assert!(!descriptor.inline_style().contains("box-shadow"));
}

#[test]
fn pairs_of_toggles_restore_initial_output() {
    fn render(state: Disclosure) -> String {
        resolve_style::<CardStyle>(StyleRequest::new())
            .element("section", None)
            .attr("data-ui-state", state.token())
            .to_markup("")
    }

    let mut disclosure = LocalState::<Disclosure>::default();
    let initial = render(disclosure.get());
    for _ in 0..4 {
        disclosure.dispatch(DisclosureEvent::Toggle);
        disclosure.dispatch(DisclosureEvent::Toggle);
        assert_eq!(render(disclosure.get()), initial);
    }

    let mut switch = LocalState::<SwitchState>::default();
    switch.dispatch(SwitchEvent::Toggle);
    assert!(!switch.is_initial());
    switch.dispatch(SwitchEvent::Toggle);
    assert!(switch.is_initial());
}
