use super::*;

#[component]
/// Trigger button plus a modal dialog with local open/closed state. Starts closed.
///
/// The dialog closes on its close button, a backdrop click, or Escape.
pub fn Modal(
    #[prop(into)] trigger_label: String,
    #[prop(optional, into)] title: Option<String>,
    #[prop(default = ModalVariant::Default)] variant: ModalVariant,
    #[prop(default = Size::Md)] size: Size,
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(optional)] on_toggle: Option<Callback<bool>>,
    children: ChildrenFn,
) -> impl IntoView {
    let element = ResolvedStyle::<ModalStyle>::from_keys(variant, size, None)
        .element("div", layout_class.as_deref());
    let dialog_class = element.class_attr();
    let dialog_style = element.style_attr();
    let DataAttrs {
        primitive,
        kind,
        variant: variant_token,
        size: size_token,
        ..
    } = DataAttrs::of(&element);
    let (state, dispatch) = local_state(Disclosure::default(), disclosure_callback(on_toggle));

    view! {
        <div
            class="ui-modal-root"
            data-ui-primitive=primitive
            data-ui-kind=kind
            data-ui-variant=variant_token
            data-ui-state=move || state.get().token()
        >
            <Button
                variant=ButtonVariant::Primary
                ui_slot="trigger"
                aria_expanded=Signal::derive(move || state.get().is_open())
                on_click=Callback::new(move |_| dispatch(DisclosureEvent::Open))
            >
                {trigger_label}
            </Button>
            <Show when=move || state.get().is_open() fallback=|| ()>
                <div
                    data-ui-slot="backdrop"
                    aria-hidden="true"
                    on:click=move |_| dispatch(DisclosureEvent::Close)
                ></div>
                <div
                    class=dialog_class.clone()
                    style=dialog_style.clone()
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    data-ui-slot="dialog"
                    data-ui-size=size_token.clone()
                    on:keydown=move |ev| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            dispatch(DisclosureEvent::Close);
                        }
                    }
                >
                    {title.clone().map(|title| view! { <header data-ui-slot="title">{title}</header> })}
                    <div data-ui-slot="body">{children()}</div>
                    <Button
                        variant=ButtonVariant::Ghost
                        ui_slot="close"
                        aria_label="Close dialog"
                        on_click=Callback::new(move |_| dispatch(DisclosureEvent::Close))
                    >
                        "Close"
                    </Button>
                </div>
            </Show>
        </div>
    }
}

#[component]
/// Hover tooltip wrapped around its anchor content.
pub fn Tooltip(
    #[prop(into)] text: String,
    #[prop(default = TooltipVariant::Dark)] variant: TooltipVariant,
    #[prop(default = Size::Sm)] size: Size,
    #[prop(optional, into)] layout_class: Option<String>,
    children: Children,
) -> impl IntoView {
    let element = ResolvedStyle::<TooltipStyle>::from_keys(variant, size, None)
        .element("span", layout_class.as_deref());
    let bubble_class = element.class_attr();
    let bubble_style = element.style_attr();
    let DataAttrs {
        primitive,
        kind,
        variant: variant_token,
        size: size_token,
        ..
    } = DataAttrs::of(&element);
    let (hover, dispatch) = local_state(Hover::default(), None);

    view! {
        <span
            class="ui-tooltip-anchor"
            data-ui-primitive=primitive
            data-ui-kind=kind
            data-ui-variant=variant_token
            data-ui-state=move || hover.get().token()
            on:mouseenter=move |_| dispatch(HoverEvent::Enter)
            on:mouseleave=move |_| dispatch(HoverEvent::Leave)
        >
            {children()}
            <Show when=move || hover.get() == Hover::Hovered fallback=|| ()>
                <span
                    class=bubble_class.clone()
                    style=bubble_style.clone()
                    role="tooltip"
                    data-ui-slot="bubble"
                    data-ui-size=size_token.clone()
                >
                    {text.clone()}
                </span>
            </Show>
        </span>
    }
}

#[component]
/// Trigger button plus a menu surface with local open/closed state. Starts closed.
///
/// Clicking an item or pressing Escape closes the menu.
pub fn Dropdown(
    #[prop(into)] label: String,
    #[prop(default = PanelVariant::Bordered)] variant: PanelVariant,
    #[prop(default = Size::Md)] size: Size,
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(optional)] on_toggle: Option<Callback<bool>>,
    children: ChildrenFn,
) -> impl IntoView {
    let element = ResolvedStyle::<DropdownStyle>::from_keys(variant, size, None)
        .element("div", layout_class.as_deref());
    let attrs = DataAttrs::of(&element);
    let menu_style = element.style_attr();
    let (state, dispatch) = local_state(Disclosure::default(), disclosure_callback(on_toggle));

    view! {
        <div
            class=element.class_attr()
            data-ui-primitive=attrs.primitive
            data-ui-kind=attrs.kind
            data-ui-variant=attrs.variant
            data-ui-size=attrs.size
            data-ui-state=move || state.get().token()
            on:keydown=move |ev| {
                if ev.key() == "Escape" {
                    dispatch(DisclosureEvent::Close);
                }
            }
        >
            <Button
                variant=ButtonVariant::Outline
                size=size
                ui_slot="trigger"
                aria_expanded=Signal::derive(move || state.get().is_open())
                on_click=Callback::new(move |_| dispatch(DisclosureEvent::Toggle))
            >
                {label}
                <span data-ui-slot="indicator" aria-hidden="true">
                    {move || if state.get().is_open() { "\u{25b4}" } else { "\u{25be}" }}
                </span>
            </Button>
            <Show when=move || state.get().is_open() fallback=|| ()>
                <div
                    role="menu"
                    style=menu_style.clone()
                    data-ui-slot="menu"
                    on:click=move |_| dispatch(DisclosureEvent::Close)
                >
                    {children()}
                </div>
            </Show>
        </div>
    }
}
