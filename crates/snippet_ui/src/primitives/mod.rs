//! Shared stateless and interactive component primitives.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;
use style_contract::{
    AccordionStyle, AlertStatus, AlertStyle, AvatarShape, AvatarStatus, AvatarStyle, BadgeStyle,
    BadgeVariant, ButtonStyle, ButtonVariant, CardStyle, CardVariant, Disclosure,
    DisclosureEvent, DropdownStyle, ElementSpec, FieldStatus, FieldVariant, Hover, HoverEvent,
    InteractionMachine, LocalState, ModalStyle, ModalVariant, PanelVariant, Press, PressEvent,
    ProgressStyle, ProgressVariant, ResolvedStyle, Size, StyleDescriptor, SwitchEvent,
    SwitchState, SwitchStyle, SwitchVariant, TabEvent, TabSelection, TabsStyle, TextFieldStyle,
    TooltipStyle, TooltipVariant, VariantKey,
};

mod controls;
mod data_display;
mod layout;
mod navigation;
mod overlays;

pub use controls::{Button, Switch, TextField};
pub use data_display::{Alert, Avatar, Badge, Card, ProgressBar};
pub use layout::{Cluster, Stack};
pub use navigation::{Accordion, Tabs};
pub use overlays::{Dropdown, Modal, Tooltip};

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// `data-ui-*` values of a resolved element, so the DOM matches its markup description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct DataAttrs {
    pub(crate) primitive: Option<String>,
    pub(crate) kind: Option<String>,
    pub(crate) variant: Option<String>,
    pub(crate) size: Option<String>,
    pub(crate) status: Option<String>,
}

impl DataAttrs {
    pub(crate) fn of(element: &ElementSpec) -> Self {
        let value = |name: &str| element.attribute(name).map(str::to_string);
        Self {
            primitive: value("data-ui-primitive"),
            kind: value("data-ui-kind"),
            variant: value("data-ui-variant"),
            size: value("data-ui-size"),
            status: value("data-ui-status"),
        }
    }
}

/// Mounts a per-instance state cell and returns a read signal plus a copyable dispatcher.
///
/// `on_change` fires only when an event actually moves the machine to a different state.
pub(crate) fn local_state<M: InteractionMachine>(
    initial: M,
    on_change: Option<Callback<M>>,
) -> (Signal<M>, impl Fn(M::Event) + Copy + 'static) {
    let cell = create_rw_signal(LocalState::new(initial));
    let state = Signal::derive(move || cell.with(|cell| cell.get()));
    let dispatch = move |event: M::Event| {
        let mut changed = None;
        cell.update(|cell| {
            let previous = cell.get();
            let next = cell.dispatch(event);
            if next != previous {
                changed = Some(next);
            }
        });
        if let (Some(next), Some(on_change)) = (changed, on_change.as_ref()) {
            on_change.call(next);
        }
    };
    (state, dispatch)
}

/// Adapts a caller's `open`/`closed` callback to a [`Disclosure`] change callback.
pub(crate) fn disclosure_callback(on_toggle: Option<Callback<bool>>) -> Option<Callback<Disclosure>> {
    on_toggle.map(|on_toggle| Callback::new(move |state: Disclosure| on_toggle.call(state.is_open())))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bool_token_matches_data_attribute_contract() {
        assert_eq!(bool_token(true), "true");
        assert_eq!(bool_token(false), "false");
    }

    #[test]
    fn local_state_reports_only_real_transitions() {
        let runtime = create_runtime();
        let changes = create_rw_signal(Vec::<Disclosure>::new());
        let (state, dispatch) = local_state(
            Disclosure::default(),
            Some(Callback::new(move |next: Disclosure| {
                changes.update(|changes| changes.push(next))
            })),
        );

        for _ in 0..3 {
            dispatch(DisclosureEvent::Toggle);
            dispatch(DisclosureEvent::Toggle);
            assert_eq!(state.get_untracked(), Disclosure::Closed);
        }
        assert_eq!(changes.get_untracked().len(), 6);

        changes.set(Vec::new());
        dispatch(DisclosureEvent::Open);
        dispatch(DisclosureEvent::Open);
        assert_eq!(state.get_untracked(), Disclosure::Open);
        dispatch(DisclosureEvent::Close);
        dispatch(DisclosureEvent::Close);
        assert_eq!(state.get_untracked(), Disclosure::Closed);
        assert_eq!(
            changes.get_untracked(),
            vec![Disclosure::Open, Disclosure::Closed]
        );

        runtime.dispose();
    }

    #[test]
    fn disclosure_callback_forwards_open_flag() {
        let runtime = create_runtime();
        let seen = create_rw_signal(Vec::<bool>::new());
        let (_, dispatch) = local_state(
            Disclosure::default(),
            disclosure_callback(Some(Callback::new(move |open: bool| {
                seen.update(|seen| seen.push(open))
            }))),
        );

        dispatch(DisclosureEvent::Toggle);
        dispatch(DisclosureEvent::Close);
        dispatch(DisclosureEvent::Close);
        assert_eq!(seen.get_untracked(), vec![true, false]);

        runtime.dispose();
    }

    #[test]
    fn data_attributes_come_from_the_element_description() {
        let element = ResolvedStyle::<AvatarStyle>::from_keys(
            AvatarShape::Rounded,
            Size::Lg,
            Some(AvatarStatus::Busy),
        )
        .element("span", None);
        let attrs = DataAttrs::of(&element);
        assert_eq!(attrs.primitive.as_deref(), Some("true"));
        assert_eq!(attrs.kind.as_deref(), Some("avatar"));
        assert_eq!(attrs.variant.as_deref(), Some("rounded"));
        assert_eq!(attrs.size.as_deref(), Some("lg"));
        assert_eq!(attrs.status.as_deref(), Some("busy"));

        let plain = ResolvedStyle::<BadgeStyle>::from_keys(BadgeVariant::Default, Size::Md, None)
            .element("span", None);
        assert_eq!(DataAttrs::of(&plain).status, None);
    }
}
