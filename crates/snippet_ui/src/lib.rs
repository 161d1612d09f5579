//! Variant-driven Leptos component library.
//!
//! Every component resolves its `(variant, size, status)` keys through the `style_contract`
//! style maps, renders one element (or a small fixed tree) carrying the resulting classes,
//! inline style, and stable `data-ui-*` attributes, and merges the caller's `layout_class`
//! after the computed classes. Interactive components own one local state machine each.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;
mod props;

pub use primitives::{
    Accordion, Alert, Avatar, Badge, Button, Card, Cluster, Dropdown, Modal, ProgressBar, Stack,
    Switch, Tabs, TextField, Tooltip,
};
pub use props::resolve_props;
pub use style_contract;

/// Convenience imports for application crates consuming the component set.
pub mod prelude {
    pub use crate::{
        resolve_props, Accordion, Alert, Avatar, Badge, Button, Card, Cluster, Dropdown, Modal,
        ProgressBar, Stack, Switch, Tabs, TextField, Tooltip,
    };
    pub use style_contract::{
        AccordionStyle, AlertStatus, AlertStyle, AvatarShape, AvatarStatus, AvatarStyle,
        BadgeStyle, BadgeVariant, ButtonStyle, ButtonVariant, CardStyle, CardVariant,
        ComponentStyle, DropdownStyle, FieldStatus, FieldVariant, ModalStyle, ModalVariant,
        PanelVariant, ProgressStyle, ProgressVariant, ResolvedStyle, Size, StyleRequest,
        SwitchStyle, SwitchVariant, TabsStyle, TextFieldStyle, TooltipStyle, TooltipVariant,
        VariantKey,
    };
}
