use super::*;

const SWITCH_OFF_TRACK: &str = "#d1d5db";

#[component]
/// Shared button primitive with variant/size styling and local pressed state.
pub fn Button(
    #[prop(default = ButtonVariant::Default)] variant: ButtonVariant,
    #[prop(default = Size::Md)] size: Size,
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] aria_expanded: MaybeSignal<bool>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    children: Children,
) -> impl IntoView {
    let element = ResolvedStyle::<ButtonStyle>::from_keys(variant, size, None)
        .element("button", layout_class.as_deref());
    let attrs = DataAttrs::of(&element);
    let (press, dispatch) = local_state(Press::default(), None);

    view! {
        <button
            type="button"
            class=element.class_attr()
            style=element.style_attr()
            id=id
            aria-label=aria_label
            aria-expanded=move || aria_expanded.get()
            title=title
            disabled=move || disabled.get()
            data-ui-primitive=attrs.primitive
            data-ui-kind=attrs.kind
            data-ui-slot=ui_slot
            data-ui-variant=attrs.variant
            data-ui-size=attrs.size
            data-ui-state=move || press.get().token()
            data-ui-disabled=move || bool_token(disabled.get())
            on:pointerdown=move |_| {
                if !disabled.get_untracked() {
                    dispatch(PressEvent::Down);
                }
            }
            on:pointerup=move |_| dispatch(PressEvent::Up)
            on:pointerleave=move |_| dispatch(PressEvent::Cancel)
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            on:keydown=move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Shared single-line text input with variant and validation-status styling.
pub fn TextField(
    #[prop(default = FieldVariant::Default)] variant: FieldVariant,
    #[prop(default = Size::Md)] size: Size,
    #[prop(optional_no_strip)] status: Option<FieldStatus>,
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
) -> impl IntoView {
    let element = ResolvedStyle::<TextFieldStyle>::from_keys(variant, size, status)
        .element("input", layout_class.as_deref());
    let attrs = DataAttrs::of(&element);

    view! {
        <input
            class=element.class_attr()
            style=element.style_attr()
            id=id
            placeholder=placeholder
            aria-label=aria_label
            aria-invalid=status.map(|status| bool_token(status == FieldStatus::Error))
            type=input_type.unwrap_or("text")
            prop:value=move || value.get()
            disabled=move || disabled.get()
            data-ui-primitive=attrs.primitive
            data-ui-kind=attrs.kind
            data-ui-slot=ui_slot
            data-ui-variant=attrs.variant
            data-ui-size=attrs.size
            data-ui-status=attrs.status
            data-ui-disabled=move || bool_token(disabled.get())
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(ev);
                }
            }
        />
    }
}

#[component]
/// Shared on/off switch with `role="switch"` semantics and local state. Starts off.
pub fn Switch(
    #[prop(default = SwitchVariant::Default)] variant: SwitchVariant,
    #[prop(default = Size::Md)] size: Size,
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_toggle: Option<Callback<bool>>,
) -> impl IntoView {
    let resolved = ResolvedStyle::<SwitchStyle>::from_keys(variant, size, None);
    let element = resolved.element("button", layout_class.as_deref());
    let attrs = DataAttrs::of(&element);
    let on_style = element.style_attr();
    let off_style = StyleDescriptor {
        background: SWITCH_OFF_TRACK,
        ..resolved.descriptor
    }
    .inline_style();

    let on_change = on_toggle
        .map(|on_toggle| Callback::new(move |state: SwitchState| on_toggle.call(state.is_on())));
    let (state, dispatch) = local_state(SwitchState::default(), on_change);
    let toggle = move || {
        if !disabled.get_untracked() {
            dispatch(SwitchEvent::Toggle);
        }
    };

    view! {
        <button
            type="button"
            class=element.class_attr()
            style=move || if state.get().is_on() { on_style.clone() } else { off_style.clone() }
            role="switch"
            aria-label=aria_label
            aria-checked=move || bool_token(state.get().is_on())
            disabled=move || disabled.get()
            data-ui-primitive=attrs.primitive
            data-ui-kind=attrs.kind
            data-ui-slot=ui_slot
            data-ui-variant=attrs.variant
            data-ui-size=attrs.size
            data-ui-state=move || state.get().token()
            data-ui-selected=move || bool_token(state.get().is_on())
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |_| toggle()
            on:keydown=move |ev| match ev.key().as_str() {
                " " | "Enter" => {
                    ev.prevent_default();
                    toggle();
                }
                _ => {}
            }
        >
            <span data-ui-slot="thumb"></span>
        </button>
    }
}
