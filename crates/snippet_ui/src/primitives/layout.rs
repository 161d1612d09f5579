use super::*;

fn gap_css(gap: Size) -> &'static str {
    match gap {
        Size::Sm => "8px",
        Size::Md => "16px",
        Size::Lg => "24px",
    }
}

#[component]
/// Vertical layout stack.
pub fn Stack(
    #[prop(default = Size::Md)] gap: Size,
    #[prop(optional, into)] layout_class: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = style_contract::ClassList::merge(
        style_contract::ClassList::new().with("ui-stack"),
        layout_class.as_deref(),
    );

    view! {
        <div
            class=class.to_string()
            style=format!("display: flex; flex-direction: column; gap: {};", gap_css(gap))
            data-ui-primitive="true"
            data-ui-kind="stack"
            data-ui-gap=gap.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Horizontal wrapping cluster.
pub fn Cluster(
    #[prop(default = Size::Sm)] gap: Size,
    #[prop(optional, into)] layout_class: Option<String>,
    children: Children,
) -> impl IntoView {
    let class = style_contract::ClassList::merge(
        style_contract::ClassList::new().with("ui-cluster"),
        layout_class.as_deref(),
    );

    view! {
        <div
            class=class.to_string()
            style=format!(
                "display: flex; flex-wrap: wrap; align-items: center; gap: {};",
                gap_css(gap)
            )
            data-ui-primitive="true"
            data-ui-kind="cluster"
            data-ui-gap=gap.token()
        >
            {children()}
        </div>
    }
}
