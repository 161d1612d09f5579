use super::*;

const PROGRESS_TRACK: &str = "#e5e7eb";

/// Up to two uppercase initials from a display name.
pub(crate) fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}

/// Fill width in percent, clamped to `0..=100`. A zero `max` reads as empty.
pub(crate) fn fill_percent(value: u16, max: u16) -> f32 {
    if max == 0 {
        return 0.0;
    }
    (f32::from(value.min(max)) / f32::from(max) * 100.0).clamp(0.0, 100.0)
}

#[component]
/// Compact status badge.
pub fn Badge(
    #[prop(default = BadgeVariant::Default)] variant: BadgeVariant,
    #[prop(default = Size::Md)] size: Size,
    #[prop(optional, into)] layout_class: Option<String>,
    children: Children,
) -> impl IntoView {
    let element = ResolvedStyle::<BadgeStyle>::from_keys(variant, size, None)
        .element("span", layout_class.as_deref());
    let attrs = DataAttrs::of(&element);

    view! {
        <span
            class=element.class_attr()
            style=element.style_attr()
            data-ui-primitive=attrs.primitive
            data-ui-kind=attrs.kind
            data-ui-variant=attrs.variant
            data-ui-size=attrs.size
        >
            {children()}
        </span>
    }
}

#[component]
/// Content card with an optional title row.
pub fn Card(
    #[prop(default = CardVariant::Default)] variant: CardVariant,
    #[prop(default = Size::Md)] size: Size,
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let element = ResolvedStyle::<CardStyle>::from_keys(variant, size, None)
        .element("article", layout_class.as_deref());
    let attrs = DataAttrs::of(&element);

    view! {
        <article
            class=element.class_attr()
            style=element.style_attr()
            data-ui-primitive=attrs.primitive
            data-ui-kind=attrs.kind
            data-ui-slot=ui_slot
            data-ui-variant=attrs.variant
            data-ui-size=attrs.size
        >
            {title.map(|title| view! { <header data-ui-slot="title">{title}</header> })}
            <div data-ui-slot="body">{children()}</div>
        </article>
    }
}

#[component]
/// Inline status callout.
pub fn Alert(
    #[prop(default = AlertStatus::Info)] status: AlertStatus,
    #[prop(default = Size::Md)] size: Size,
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    children: Children,
) -> impl IntoView {
    let element = ResolvedStyle::<AlertStyle>::from_keys(status, size, None)
        .element("div", layout_class.as_deref());
    let attrs = DataAttrs::of(&element);

    view! {
        <div
            class=element.class_attr()
            style=element.style_attr()
            role="alert"
            data-ui-primitive=attrs.primitive
            data-ui-kind=attrs.kind
            data-ui-variant=attrs.variant
            data-ui-size=attrs.size
            data-ui-status=attrs.status
        >
            {title.map(|title| view! { <strong data-ui-slot="title">{title}</strong> })}
            <div data-ui-slot="message">{children()}</div>
        </div>
    }
}

#[component]
/// User avatar showing an image or the name's initials, with an optional presence ring.
pub fn Avatar(
    #[prop(into)] name: String,
    #[prop(default = AvatarShape::Circle)] shape: AvatarShape,
    #[prop(default = Size::Md)] size: Size,
    #[prop(optional_no_strip)] status: Option<AvatarStatus>,
    #[prop(optional, into)] src: Option<String>,
    #[prop(optional, into)] layout_class: Option<String>,
) -> impl IntoView {
    let element = ResolvedStyle::<AvatarStyle>::from_keys(shape, size, status)
        .element("span", layout_class.as_deref());
    let attrs = DataAttrs::of(&element);
    let label = initials(&name);
    let content = match src {
        Some(src) => view! { <img data-ui-slot="image" src=src alt=name.clone() /> }.into_view(),
        None => view! { <span data-ui-slot="initials" aria-hidden="true">{label}</span> }.into_view(),
    };

    view! {
        <span
            class=element.class_attr()
            style=element.style_attr()
            role="img"
            aria-label=name
            data-ui-primitive=attrs.primitive
            data-ui-kind=attrs.kind
            data-ui-variant=attrs.variant
            data-ui-size=attrs.size
            data-ui-status=attrs.status
        >
            {content}
        </span>
    }
}

#[component]
/// Linear progress indicator. The variant colors the fill; the size sets the track height.
pub fn ProgressBar(
    value: u16,
    #[prop(default = 100)] max: u16,
    #[prop(default = ProgressVariant::Default)] variant: ProgressVariant,
    #[prop(default = Size::Md)] size: Size,
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
) -> impl IntoView {
    let resolved = ResolvedStyle::<ProgressStyle>::from_keys(variant, size, None);
    let element = resolved.element("div", layout_class.as_deref());
    let attrs = DataAttrs::of(&element);
    let track_style = StyleDescriptor {
        background: PROGRESS_TRACK,
        ..resolved.descriptor
    }
    .inline_style();
    let clamped = value.min(max);
    let percent = fill_percent(value, max);
    let fill_style = format!(
        "width: {percent:.2}%; height: 100%; background: {}; border-radius: {};",
        resolved.descriptor.background, resolved.descriptor.radius
    );

    view! {
        <div
            class=element.class_attr()
            style=track_style
            role="progressbar"
            aria-label=aria_label
            aria-valuemin="0"
            aria-valuemax=max
            aria-valuenow=clamped
            data-ui-primitive=attrs.primitive
            data-ui-kind=attrs.kind
            data-ui-variant=attrs.variant
            data-ui-size=attrs.size
            data-ui-value=clamped
            data-ui-max=max
        >
            <div data-ui-slot="fill" style=fill_style></div>
        </div>
    }
}
