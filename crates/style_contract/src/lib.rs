//! Shared style contract for the variant-driven component library.
//!
//! This crate is intentionally runtime-agnostic. It owns the closed variant enumerations, the
//! immutable style tables each component selects from, class-list merging, a deterministic
//! element description used for markup snapshots, and the small local interaction state
//! machines (open/closed, hover, pressed, on/off, active tab). It does not depend on Leptos or
//! browser APIs so every rule here can be tested natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod class;
mod components;
mod element;
mod error;
mod interaction;
mod palette;
mod style;
mod variant;

pub use class::ClassList;
pub use components::{
    AccordionStyle, AlertStatus, AlertStyle, AvatarShape, AvatarStatus, AvatarStyle, BadgeStyle,
    BadgeVariant, ButtonStyle, ButtonVariant, CardStyle, CardVariant, DropdownStyle,
    FieldStatus, FieldVariant, ModalStyle, ModalVariant, PanelVariant, ProgressStyle,
    ProgressVariant, SwitchStyle, SwitchVariant, TabsStyle, TextFieldStyle, TooltipStyle,
    TooltipVariant,
};
pub use element::{escape_html, ElementSpec};
pub use error::VariantError;
pub use interaction::{
    Disclosure, DisclosureEvent, Hover, HoverEvent, InteractionMachine, LocalState, Press,
    PressEvent, SwitchEvent, SwitchState, TabEvent, TabSelection,
};
pub use palette::{Radius, Shadow, Size, Tone, ToneColors};
pub use style::{
    resolve_style, style_table, ComponentStyle, NoStatus, ResolvedStyle, StyleDescriptor,
    StyleRequest,
};
pub use variant::{Fallback, Resolved, VariantKey};
