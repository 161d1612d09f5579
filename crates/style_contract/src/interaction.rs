//! Local interaction state machines for interactive components.
//!
//! Each machine has a closed set of states, a fixed initial state (its `Default`), and changes
//! only in response to an explicit user event. None has a terminal state.

use std::fmt;

/// A UI-only state machine owned by a single component instance.
pub trait InteractionMachine: Copy + Eq + fmt::Debug + 'static {
    /// User events the machine reacts to.
    type Event: Copy + fmt::Debug;

    /// Next state after `event`.
    fn transition(self, event: Self::Event) -> Self;

    /// Stable `data-ui-state` token.
    fn token(self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Open/closed state for accordions, dropdowns, and modals. Starts closed.
pub enum Disclosure {
    /// Content hidden.
    Closed,
    /// Content shown.
    Open,
}

impl Default for Disclosure {
    fn default() -> Self {
        Self::Closed
    }
}

impl Disclosure {
    /// Returns `true` when open.
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Events accepted by [`Disclosure`].
pub enum DisclosureEvent {
    /// Trigger click.
    Toggle,
    /// Explicit open.
    Open,
    /// Close button, backdrop click, or Escape.
    Close,
}

impl InteractionMachine for Disclosure {
    type Event = DisclosureEvent;

    fn transition(self, event: DisclosureEvent) -> Self {
        match (self, event) {
            (Self::Closed, DisclosureEvent::Toggle) => Self::Open,
            (Self::Open, DisclosureEvent::Toggle) => Self::Closed,
            (_, DisclosureEvent::Open) => Self::Open,
            (_, DisclosureEvent::Close) => Self::Closed,
        }
    }

    fn token(self) -> &'static str {
        match self {
            Self::Closed => "closed",
            Self::Open => "open",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Pointer hover state. Starts idle.
pub enum Hover {
    /// Pointer outside.
    Idle,
    /// Pointer inside.
    Hovered,
}

impl Default for Hover {
    fn default() -> Self {
        Self::Idle
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Events accepted by [`Hover`].
pub enum HoverEvent {
    /// `mouseenter`.
    Enter,
    /// `mouseleave`.
    Leave,
}

impl InteractionMachine for Hover {
    type Event = HoverEvent;

    fn transition(self, event: HoverEvent) -> Self {
        match event {
            HoverEvent::Enter => Self::Hovered,
            HoverEvent::Leave => Self::Idle,
        }
    }

    fn token(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Hovered => "hovered",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Pointer press state for buttons. Starts released.
pub enum Press {
    /// Not pressed.
    Released,
    /// Pointer held down.
    Pressed,
}

impl Default for Press {
    fn default() -> Self {
        Self::Released
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Events accepted by [`Press`].
pub enum PressEvent {
    /// `pointerdown`.
    Down,
    /// `pointerup`.
    Up,
    /// `pointerleave` while held.
    Cancel,
}

impl InteractionMachine for Press {
    type Event = PressEvent;

    fn transition(self, event: PressEvent) -> Self {
        match event {
            PressEvent::Down => Self::Pressed,
            PressEvent::Up | PressEvent::Cancel => Self::Released,
        }
    }

    fn token(self) -> &'static str {
        match self {
            Self::Released => "released",
            Self::Pressed => "pressed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// On/off state for switches. Starts off.
pub enum SwitchState {
    /// Off.
    Off,
    /// On.
    On,
}

impl Default for SwitchState {
    fn default() -> Self {
        Self::Off
    }
}

impl SwitchState {
    /// Returns `true` when on.
    pub fn is_on(self) -> bool {
        self == Self::On
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Events accepted by [`SwitchState`].
pub enum SwitchEvent {
    /// Click, Space, or Enter.
    Toggle,
}

impl InteractionMachine for SwitchState {
    type Event = SwitchEvent;

    fn transition(self, event: SwitchEvent) -> Self {
        match (self, event) {
            (Self::Off, SwitchEvent::Toggle) => Self::On,
            (Self::On, SwitchEvent::Toggle) => Self::Off,
        }
    }

    fn token(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::On => "on",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Active tab index over a fixed number of tabs. Starts at the first tab.
pub struct TabSelection {
    active: usize,
    count: usize,
}

impl TabSelection {
    /// Selection over `count` tabs with the first one active.
    pub fn new(count: usize) -> Self {
        Self { active: 0, count }
    }

    /// Active index. Meaningless when there are no tabs.
    pub fn active(self) -> usize {
        self.active
    }

    /// Number of tabs.
    pub fn count(self) -> usize {
        self.count
    }

    /// Returns `true` when `index` is the active tab.
    pub fn is_active(self, index: usize) -> bool {
        self.count > 0 && self.active == index
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Events accepted by [`TabSelection`].
pub enum TabEvent {
    /// Tab click. Out-of-range indexes are ignored.
    Select(usize),
    /// ArrowRight, wrapping.
    Next,
    /// ArrowLeft, wrapping.
    Previous,
}

impl InteractionMachine for TabSelection {
    type Event = TabEvent;

    fn transition(self, event: TabEvent) -> Self {
        if self.count == 0 {
            return self;
        }
        let active = match event {
            TabEvent::Select(index) if index < self.count => index,
            TabEvent::Select(_) => self.active,
            TabEvent::Next => (self.active + 1) % self.count,
            TabEvent::Previous => (self.active + self.count - 1) % self.count,
        };
        Self { active, ..self }
    }

    fn token(self) -> &'static str {
        "selected"
    }
}

/// Owned state cell for one component instance.
///
/// Created at mount with a fixed initial state, changed only through [`LocalState::dispatch`],
/// dropped with the instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalState<M: InteractionMachine> {
    initial: M,
    current: M,
}

impl<M: InteractionMachine> LocalState<M> {
    /// Cell starting at `initial`.
    pub fn new(initial: M) -> Self {
        Self {
            initial,
            current: initial,
        }
    }

    /// Current state.
    pub fn get(&self) -> M {
        self.current
    }

    /// Applies `event` and returns the new state.
    pub fn dispatch(&mut self, event: M::Event) -> M {
        self.current = self.current.transition(event);
        self.current
    }

    /// Returns `true` when the cell is back at its initial state.
    pub fn is_initial(&self) -> bool {
        self.current == self.initial
    }
}

impl<M: InteractionMachine + Default> Default for LocalState<M> {
    fn default() -> Self {
        Self::new(M::default())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn disclosure_toggles_indefinitely() {
        let mut state = LocalState::<Disclosure>::default();
        for round in 1..=6 {
            state.dispatch(DisclosureEvent::Toggle);
            assert_eq!(state.get().is_open(), round % 2 == 1);
        }
        assert!(state.is_initial());
    }

    #[test]
    fn disclosure_open_and_close_are_idempotent() {
        let mut state = LocalState::<Disclosure>::default();
        state.dispatch(DisclosureEvent::Open);
        assert_eq!(state.dispatch(DisclosureEvent::Open), Disclosure::Open);
        state.dispatch(DisclosureEvent::Close);
        assert_eq!(state.dispatch(DisclosureEvent::Close), Disclosure::Closed);
    }

    #[test]
    fn press_cancel_releases() {
        let mut state = LocalState::<Press>::default();
        assert_eq!(state.dispatch(PressEvent::Down).token(), "pressed");
        assert_eq!(state.dispatch(PressEvent::Cancel), Press::Released);
    }

    #[test]
    fn hover_follows_enter_and_leave() {
        let mut state = LocalState::<Hover>::default();
        assert_eq!(state.dispatch(HoverEvent::Enter), Hover::Hovered);
        assert_eq!(state.dispatch(HoverEvent::Enter), Hover::Hovered);
        assert_eq!(state.dispatch(HoverEvent::Leave), Hover::Idle);
    }

    #[test]
    fn switch_pairs_of_toggles_return_to_off() {
        let mut state = LocalState::<SwitchState>::default();
        assert!(state.dispatch(SwitchEvent::Toggle).is_on());
        assert!(!state.dispatch(SwitchEvent::Toggle).is_on());
        assert!(state.is_initial());
    }

    #[test]
    fn tab_selection_wraps_and_ignores_out_of_range() {
        let mut state = LocalState::new(TabSelection::new(3));
        assert_eq!(state.dispatch(TabEvent::Previous).active(), 2);
        assert_eq!(state.dispatch(TabEvent::Next).active(), 0);
        assert_eq!(state.dispatch(TabEvent::Select(7)).active(), 0);
        assert_eq!(state.dispatch(TabEvent::Select(1)).active(), 1);
    }

    #[test]
    fn empty_tab_selection_never_moves() {
        let mut state = LocalState::new(TabSelection::new(0));
        assert_eq!(state.dispatch(TabEvent::Next).active(), 0);
        assert!(!state.get().is_active(0));
    }
}
