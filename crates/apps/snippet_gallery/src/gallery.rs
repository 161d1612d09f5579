use leptos::*;
use snippet_ui::prelude::*;
use style_contract::resolve_style;

use crate::catalog::{builtin_catalog, CatalogEntry, ComponentKind};

const EVENT_LOG_LIMIT: usize = 8;

/// Static markup for the single-element families, resolved without diagnostics.
///
/// Returns `None` for the interactive and composite families, whose markup depends on local
/// state.
pub fn snippet_markup(entry: &CatalogEntry) -> Option<String> {
    let class = entry.class.as_deref();
    let label = entry.label.as_str();
    let request = entry.request();
    let markup = match entry.component {
        ComponentKind::Badge => resolve_style::<BadgeStyle>(request)
            .element("span", class)
            .to_markup(label),
        ComponentKind::Button => resolve_style::<ButtonStyle>(request)
            .element("button", class)
            .attr("type", "button")
            .to_markup(label),
        ComponentKind::Card => resolve_style::<CardStyle>(request)
            .element("article", class)
            .to_markup(label),
        ComponentKind::Alert => resolve_style::<AlertStyle>(request)
            .element("div", class)
            .attr("role", "alert")
            .to_markup(label),
        ComponentKind::Avatar => resolve_style::<AvatarStyle>(request)
            .element("span", class)
            .attr("role", "img")
            .attr("aria-label", label)
            .to_markup(""),
        ComponentKind::TextField => resolve_style::<TextFieldStyle>(request)
            .element("input", class)
            .attr("placeholder", label)
            .to_markup(""),
        ComponentKind::ProgressBar => resolve_style::<ProgressStyle>(request)
            .element("div", class)
            .attr("role", "progressbar")
            .attr("aria-valuenow", entry.value.unwrap_or(0).to_string())
            .to_markup(""),
        ComponentKind::Switch
        | ComponentKind::Tooltip
        | ComponentKind::Accordion
        | ComponentKind::Tabs
        | ComponentKind::Dropdown
        | ComponentKind::Modal => return None,
    };
    Some(markup)
}

#[component]
/// Gallery page: one section per component family, each with live demos, the family's style
/// table, and a shared event log for the interactive components.
pub fn Gallery() -> impl IntoView {
    let catalog = match builtin_catalog() {
        Ok(catalog) => catalog,
        Err(err) => {
            logging::warn!("gallery catalog unavailable: {err}");
            return view! {
                <main class="gallery" data-ui-slot="empty">
                    <p>"No components to show."</p>
                </main>
            }
            .into_view();
        }
    };

    let events = create_rw_signal(Vec::<String>::new());
    let log = Callback::new(move |line: String| {
        events.update(|lines| {
            lines.insert(0, line);
            lines.truncate(EVENT_LOG_LIMIT);
        });
    });

    let sections = catalog
        .sections()
        .into_iter()
        .map(|(kind, entries)| {
            let table = serde_json::to_string_pretty(&kind.style_table()).unwrap_or_default();
            let demos = entries
                .iter()
                .map(|entry| render_entry(entry, log))
                .collect_view();
            let snippets = entries
                .iter()
                .filter_map(|entry| snippet_markup(entry))
                .map(|markup| view! { <code data-ui-slot="snippet">{markup}</code> })
                .collect_view();

            view! {
                <section class="gallery-section" data-ui-slot="section" data-gallery-kind=kind.title()>
                    <h2>{kind.title()}</h2>
                    <Cluster gap=Size::Md>{demos}</Cluster>
                    <details>
                        <summary>"Markup and style table"</summary>
                        <Stack gap=Size::Sm>{snippets}</Stack>
                        <pre data-ui-slot="style-table">{table}</pre>
                    </details>
                </section>
            }
        })
        .collect_view();

    view! {
        <main class="gallery">
            <h1>{catalog.title.clone()}</h1>
            <Stack gap=Size::Lg>{sections}</Stack>
            <aside class="gallery-events" aria-live="polite">
                <h2>"Events"</h2>
                <ul>
                    {move || {
                        events
                            .get()
                            .into_iter()
                            .map(|line| view! { <li>{line}</li> })
                            .collect_view()
                    }}
                </ul>
            </aside>
        </main>
    }
    .into_view()
}

fn render_entry(entry: &CatalogEntry, log: Callback<String>) -> View {
    let label = entry.label.clone();
    let class = entry.class.clone().unwrap_or_default();
    let request = entry.request();

    match entry.component {
        ComponentKind::Badge => {
            let resolved = resolve_props::<BadgeStyle>(request);
            view! {
                <Badge variant=resolved.variant size=resolved.size layout_class=class>
                    {label}
                </Badge>
            }
            .into_view()
        }
        ComponentKind::Button => {
            let resolved = resolve_props::<ButtonStyle>(request);
            let clicked = label.clone();
            view! {
                <Button
                    variant=resolved.variant
                    size=resolved.size
                    layout_class=class
                    on_click=Callback::new(move |_| log.call(format!("clicked {clicked}")))
                >
                    {label}
                </Button>
            }
            .into_view()
        }
        ComponentKind::Card => {
            let resolved = resolve_props::<CardStyle>(request);
            view! {
                <Card variant=resolved.variant size=resolved.size layout_class=class title=label>
                    <p>"Cards group related content behind one surface."</p>
                </Card>
            }
            .into_view()
        }
        ComponentKind::Alert => {
            let resolved = resolve_props::<AlertStyle>(request);
            view! {
                <Alert status=resolved.variant size=resolved.size layout_class=class>
                    {label}
                </Alert>
            }
            .into_view()
        }
        ComponentKind::Avatar => {
            let resolved = resolve_props::<AvatarStyle>(request);
            view! {
                <Avatar
                    name=label
                    shape=resolved.variant
                    size=resolved.size
                    status=resolved.status
                    layout_class=class
                />
            }
            .into_view()
        }
        ComponentKind::TextField => {
            let resolved = resolve_props::<TextFieldStyle>(request);
            let field = label.clone();
            view! {
                <TextField
                    variant=resolved.variant
                    size=resolved.size
                    status=resolved.status
                    placeholder=label.clone()
                    aria_label=label
                    layout_class=class
                    on_input=Callback::new(move |ev| {
                        log.call(format!("{field}: {}", event_target_value(&ev)))
                    })
                />
            }
            .into_view()
        }
        ComponentKind::ProgressBar => {
            let resolved = resolve_props::<ProgressStyle>(request);
            view! {
                <ProgressBar
                    value=entry.value.unwrap_or(0)
                    variant=resolved.variant
                    size=resolved.size
                    aria_label=label
                    layout_class=class
                />
            }
            .into_view()
        }
        ComponentKind::Switch => {
            let resolved = resolve_props::<SwitchStyle>(request);
            let switched = label.clone();
            view! {
                <Cluster>
                    <Switch
                        variant=resolved.variant
                        size=resolved.size
                        aria_label=label.clone()
                        layout_class=class
                        on_toggle=Callback::new(move |on: bool| {
                            log.call(format!("{switched} {}", if on { "on" } else { "off" }))
                        })
                    />
                    <span>{label}</span>
                </Cluster>
            }
            .into_view()
        }
        ComponentKind::Tooltip => {
            let resolved = resolve_props::<TooltipStyle>(request);
            view! {
                <Tooltip
                    text=format!("{} tooltip", resolved.variant.token())
                    variant=resolved.variant
                    size=resolved.size
                    layout_class=class
                >
                    <Button variant=ButtonVariant::Ghost>{label}</Button>
                </Tooltip>
            }
            .into_view()
        }
        ComponentKind::Accordion => {
            let resolved = resolve_props::<AccordionStyle>(request);
            let toggled = label.clone();
            view! {
                <Accordion
                    title=label
                    variant=resolved.variant
                    size=resolved.size
                    layout_class=class
                    on_toggle=Callback::new(move |open: bool| {
                        log.call(format!("{toggled} {}", if open { "expanded" } else { "collapsed" }))
                    })
                >
                    <p>"Undeclared keys render the documented default instead of failing."</p>
                </Accordion>
            }
            .into_view()
        }
        ComponentKind::Tabs => {
            let resolved = resolve_props::<TabsStyle>(request);
            let labels = entry.tab_labels();
            let count = labels.len();
            view! {
                <Tabs
                    labels=labels
                    render_panel=Callback::new(move |index: usize| {
                        view! { <p>{format!("Panel {} of {count}", index + 1)}</p> }.into_view()
                    })
                    variant=resolved.variant
                    size=resolved.size
                    layout_class=class
                    on_change=Callback::new(move |index: usize| log.call(format!("tab {index} selected")))
                />
            }
            .into_view()
        }
        ComponentKind::Dropdown => {
            let resolved = resolve_props::<DropdownStyle>(request);
            view! {
                <Dropdown label=label variant=resolved.variant size=resolved.size layout_class=class>
                    {["Newest", "Oldest", "Name"]
                        .into_iter()
                        .map(|choice| {
                            view! {
                                <Button
                                    variant=ButtonVariant::Ghost
                                    on_click=Callback::new(move |_| log.call(format!("sort by {choice}")))
                                >
                                    {choice}
                                </Button>
                            }
                        })
                        .collect_view()}
                </Dropdown>
            }
            .into_view()
        }
        ComponentKind::Modal => {
            let resolved = resolve_props::<ModalStyle>(request);
            view! {
                <Modal
                    trigger_label=label
                    title=format!("{} dialog", resolved.variant.token())
                    variant=resolved.variant
                    size=resolved.size
                    layout_class=class
                    on_toggle=Callback::new(move |open: bool| {
                        log.call(format!("dialog {}", if open { "opened" } else { "closed" }))
                    })
                >
                    <p>"Press Escape, click the backdrop, or use the close button."</p>
                </Modal>
            }
            .into_view()
        }
    }
}
