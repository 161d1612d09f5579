use super::*;

#[component]
/// Single-section accordion with local open/closed state. Starts closed.
pub fn Accordion(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(default = PanelVariant::Default)] variant: PanelVariant,
    #[prop(default = Size::Md)] size: Size,
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(optional)] on_toggle: Option<Callback<bool>>,
    children: ChildrenFn,
) -> impl IntoView {
    let element = ResolvedStyle::<AccordionStyle>::from_keys(variant, size, None)
        .element("section", layout_class.as_deref());
    let attrs = DataAttrs::of(&element);
    let (state, dispatch) = local_state(Disclosure::default(), disclosure_callback(on_toggle));

    view! {
        <section
            class=element.class_attr()
            style=element.style_attr()
            data-ui-primitive=attrs.primitive
            data-ui-kind=attrs.kind
            data-ui-variant=attrs.variant
            data-ui-size=attrs.size
            data-ui-state=move || state.get().token()
            data-ui-expanded=move || bool_token(state.get().is_open())
        >
            <button
                type="button"
                data-ui-slot="toggle"
                aria-expanded=move || bool_token(state.get().is_open())
                on:click=move |_| dispatch(DisclosureEvent::Toggle)
            >
                <span data-ui-slot="copy">
                    <span data-ui-slot="title">{title}</span>
                    {description.map(|description| view! { <span data-ui-slot="description">{description}</span> })}
                </span>
                <span data-ui-slot="indicator" aria-hidden="true">
                    {move || if state.get().is_open() { "\u{2212}" } else { "+" }}
                </span>
            </button>
            <Show when=move || state.get().is_open() fallback=|| ()>
                <div data-ui-slot="body">{children()}</div>
            </Show>
        </section>
    }
}

#[component]
/// Tab set with a local active index. Starts on the first tab.
///
/// `render_panel` receives the active index; ArrowLeft/ArrowRight on the tab list wrap around.
pub fn Tabs(
    #[prop(into)] labels: Vec<String>,
    render_panel: Callback<usize, View>,
    #[prop(default = PanelVariant::Default)] variant: PanelVariant,
    #[prop(default = Size::Md)] size: Size,
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] on_change: Option<Callback<usize>>,
) -> impl IntoView {
    let element = ResolvedStyle::<TabsStyle>::from_keys(variant, size, None)
        .element("div", layout_class.as_deref());
    let attrs = DataAttrs::of(&element);
    let on_select = on_change
        .map(|on_change| Callback::new(move |state: TabSelection| on_change.call(state.active())));
    let (state, dispatch) = local_state(TabSelection::new(labels.len()), on_select);

    let tabs = labels
        .into_iter()
        .enumerate()
        .map(|(index, label)| {
            view! {
                <button
                    type="button"
                    role="tab"
                    data-ui-slot="tab"
                    aria-selected=move || bool_token(state.get().is_active(index))
                    data-ui-selected=move || bool_token(state.get().is_active(index))
                    on:click=move |_| dispatch(TabEvent::Select(index))
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    view! {
        <div
            class=element.class_attr()
            style=element.style_attr()
            data-ui-primitive=attrs.primitive
            data-ui-kind=attrs.kind
            data-ui-variant=attrs.variant
            data-ui-size=attrs.size
        >
            <div
                role="tablist"
                aria-label=aria_label
                data-ui-slot="tablist"
                on:keydown=move |ev: KeyboardEvent| match ev.key().as_str() {
                    "ArrowRight" => {
                        ev.prevent_default();
                        dispatch(TabEvent::Next);
                    }
                    "ArrowLeft" => {
                        ev.prevent_default();
                        dispatch(TabEvent::Previous);
                    }
                    _ => {}
                }
            >
                {tabs}
            </div>
            <div role="tabpanel" data-ui-slot="panel">
                {move || {
                    let selection = state.get();
                    (selection.count() > 0).then(|| render_panel.call(selection.active()))
                }}
            </div>
        </div>
    }
}
