//! Closed variant enumerations and immutable style maps for every component family.

use serde::{Deserialize, Serialize};

use crate::{ComponentStyle, NoStatus, Radius, Shadow, Size, StyleDescriptor, Tone, VariantKey};

const SURFACE: &str = "#ffffff";
const INK: &str = "#111827";
const HAIRLINE: &str = "#e5e7eb";
const TRANSPARENT: &str = "transparent";

fn tone_fill(tone: Tone, radius: Radius, shadow: Shadow) -> StyleDescriptor {
    let colors = tone.solid();
    StyleDescriptor {
        background: colors.background,
        foreground: colors.foreground,
        border: colors.border,
        radius: radius.css(),
        shadow: shadow.css(),
        ..StyleDescriptor::EMPTY
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Badge variants.
pub enum BadgeVariant {
    /// Neutral badge.
    Default,
    /// Brand badge.
    Primary,
    /// Positive status.
    Success,
    /// Cautionary status.
    Warning,
    /// Failure status.
    Error,
}

impl Default for BadgeVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl VariantKey for BadgeVariant {
    const KIND: &'static str = "badge variant";
    const ALL: &'static [Self] = &[
        Self::Default,
        Self::Primary,
        Self::Success,
        Self::Warning,
        Self::Error,
    ];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Primary => "primary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Style map for compact status badges.
pub struct BadgeStyle;

impl ComponentStyle for BadgeStyle {
    const KIND: &'static str = "badge";
    const BASE_CLASS: &'static str = "ui-badge";
    type Variant = BadgeVariant;
    type Status = NoStatus;

    fn variant_style(variant: BadgeVariant) -> StyleDescriptor {
        let tone = match variant {
            BadgeVariant::Default => Tone::Default,
            BadgeVariant::Primary => Tone::Primary,
            BadgeVariant::Success => Tone::Success,
            BadgeVariant::Warning => Tone::Warning,
            BadgeVariant::Error => Tone::Error,
        };
        tone_fill(tone, Radius::Full, Shadow::None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Button variants.
pub enum ButtonVariant {
    /// Neutral action.
    Default,
    /// Emphasized action.
    Primary,
    /// Secondary action.
    Secondary,
    /// Destructive action.
    Danger,
    /// Borderless, transparent action.
    Ghost,
    /// Transparent action with a brand border.
    Outline,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl VariantKey for ButtonVariant {
    const KIND: &'static str = "button variant";
    const ALL: &'static [Self] = &[
        Self::Default,
        Self::Primary,
        Self::Secondary,
        Self::Danger,
        Self::Ghost,
        Self::Outline,
    ];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Danger => "danger",
            Self::Ghost => "ghost",
            Self::Outline => "outline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Style map for action buttons.
pub struct ButtonStyle;

impl ComponentStyle for ButtonStyle {
    const KIND: &'static str = "button";
    const BASE_CLASS: &'static str = "ui-button";
    type Variant = ButtonVariant;
    type Status = NoStatus;

    fn variant_style(variant: ButtonVariant) -> StyleDescriptor {
        match variant {
            ButtonVariant::Default => tone_fill(Tone::Default, Radius::Md, Shadow::Sm),
            ButtonVariant::Primary => tone_fill(Tone::Primary, Radius::Md, Shadow::Sm),
            ButtonVariant::Secondary => tone_fill(Tone::Secondary, Radius::Md, Shadow::None),
            ButtonVariant::Danger => tone_fill(Tone::Error, Radius::Md, Shadow::Sm),
            ButtonVariant::Ghost => StyleDescriptor {
                background: TRANSPARENT,
                foreground: "#1f2937",
                border: TRANSPARENT,
                radius: Radius::Md.css(),
                shadow: Shadow::None.css(),
                ..StyleDescriptor::EMPTY
            },
            ButtonVariant::Outline => StyleDescriptor {
                background: TRANSPARENT,
                foreground: Tone::Primary.solid().background,
                border: Tone::Primary.solid().background,
                radius: Radius::Md.css(),
                shadow: Shadow::None.css(),
                ..StyleDescriptor::EMPTY
            },
        }
    }

    fn size_style(size: Size) -> StyleDescriptor {
        let (padding, font_size) = match size {
            Size::Sm => ("6px 12px", "13px"),
            Size::Md => ("8px 16px", "14px"),
            Size::Lg => ("12px 24px", "16px"),
        };
        StyleDescriptor {
            padding,
            font_size,
            ..StyleDescriptor::EMPTY
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Card variants.
pub enum CardVariant {
    /// Bordered surface with a hairline shadow.
    Default,
    /// Borderless surface with an overlay shadow.
    Elevated,
    /// Flat surface with a visible border.
    Outlined,
    /// Translucent frosted surface.
    Glass,
}

impl Default for CardVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl VariantKey for CardVariant {
    const KIND: &'static str = "card variant";
    const ALL: &'static [Self] = &[Self::Default, Self::Elevated, Self::Outlined, Self::Glass];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Elevated => "elevated",
            Self::Outlined => "outlined",
            Self::Glass => "glass",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Style map for content cards.
pub struct CardStyle;

impl ComponentStyle for CardStyle {
    const KIND: &'static str = "card";
    const BASE_CLASS: &'static str = "ui-card";
    type Variant = CardVariant;
    type Status = NoStatus;

    fn variant_style(variant: CardVariant) -> StyleDescriptor {
        let (background, border, shadow) = match variant {
            CardVariant::Default => (SURFACE, HAIRLINE, Shadow::Sm),
            CardVariant::Elevated => (SURFACE, TRANSPARENT, Shadow::Lg),
            CardVariant::Outlined => (SURFACE, "#d1d5db", Shadow::None),
            CardVariant::Glass => ("rgba(255, 255, 255, 0.6)", "rgba(255, 255, 255, 0.3)", Shadow::Md),
        };
        StyleDescriptor {
            background,
            foreground: "#1f2937",
            border,
            radius: Radius::Lg.css(),
            shadow: shadow.css(),
            ..StyleDescriptor::EMPTY
        }
    }

    fn size_style(size: Size) -> StyleDescriptor {
        let padding = match size {
            Size::Sm => "12px",
            Size::Md => "16px",
            Size::Lg => "24px",
        };
        StyleDescriptor {
            padding,
            ..StyleDescriptor::EMPTY
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Alert statuses. The status is the alert's variant key.
pub enum AlertStatus {
    /// Informational.
    Info,
    /// Positive outcome.
    Success,
    /// Cautionary.
    Warning,
    /// Failure.
    Error,
}

impl Default for AlertStatus {
    fn default() -> Self {
        Self::Info
    }
}

impl VariantKey for AlertStatus {
    const KIND: &'static str = "alert status";
    const ALL: &'static [Self] = &[Self::Info, Self::Success, Self::Warning, Self::Error];

    fn token(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Style map for inline alert callouts.
pub struct AlertStyle;

impl ComponentStyle for AlertStyle {
    const KIND: &'static str = "alert";
    const BASE_CLASS: &'static str = "ui-alert";
    const STATUS_KEYED: bool = true;
    type Variant = AlertStatus;
    type Status = NoStatus;

    fn variant_style(status: AlertStatus) -> StyleDescriptor {
        let tone = match status {
            AlertStatus::Info => Tone::Info,
            AlertStatus::Success => Tone::Success,
            AlertStatus::Warning => Tone::Warning,
            AlertStatus::Error => Tone::Error,
        };
        let colors = tone.subtle();
        StyleDescriptor {
            background: colors.background,
            foreground: colors.foreground,
            border: colors.border,
            radius: Radius::Md.css(),
            shadow: Shadow::None.css(),
            ..StyleDescriptor::EMPTY
        }
    }

    fn size_style(size: Size) -> StyleDescriptor {
        let padding = match size {
            Size::Sm => "8px 12px",
            Size::Md => "12px 16px",
            Size::Lg => "16px 20px",
        };
        StyleDescriptor {
            padding,
            font_size: size.font_size(),
            ..StyleDescriptor::EMPTY
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Avatar shapes.
pub enum AvatarShape {
    /// Round avatar.
    Circle,
    /// Rounded square.
    Rounded,
    /// Square corners.
    Square,
}

impl Default for AvatarShape {
    fn default() -> Self {
        Self::Circle
    }
}

impl VariantKey for AvatarShape {
    const KIND: &'static str = "avatar shape";
    const ALL: &'static [Self] = &[Self::Circle, Self::Rounded, Self::Square];

    fn token(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Rounded => "rounded",
            Self::Square => "square",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Presence statuses shown as the avatar ring color.
pub enum AvatarStatus {
    /// Available.
    Online,
    /// Signed out.
    Offline,
    /// Do not disturb.
    Busy,
    /// Idle.
    Away,
}

impl VariantKey for AvatarStatus {
    const KIND: &'static str = "avatar status";
    const ALL: &'static [Self] = &[Self::Online, Self::Offline, Self::Busy, Self::Away];

    fn token(self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Offline => "offline",
            Self::Busy => "busy",
            Self::Away => "away",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Style map for user avatars.
pub struct AvatarStyle;

impl ComponentStyle for AvatarStyle {
    const KIND: &'static str = "avatar";
    const BASE_CLASS: &'static str = "ui-avatar";
    type Variant = AvatarShape;
    type Status = AvatarStatus;

    fn variant_style(shape: AvatarShape) -> StyleDescriptor {
        let radius = match shape {
            AvatarShape::Circle => Radius::Full,
            AvatarShape::Rounded => Radius::Md,
            AvatarShape::Square => Radius::None,
        };
        StyleDescriptor {
            background: HAIRLINE,
            foreground: "#374151",
            border: TRANSPARENT,
            radius: radius.css(),
            ..StyleDescriptor::EMPTY
        }
    }

    fn size_style(size: Size) -> StyleDescriptor {
        let (dimension, font_size) = match size {
            Size::Sm => ("32px", "12px"),
            Size::Md => ("40px", "14px"),
            Size::Lg => ("56px", "18px"),
        };
        StyleDescriptor {
            width: dimension,
            height: dimension,
            font_size,
            ..StyleDescriptor::EMPTY
        }
    }

    fn status_style(status: AvatarStatus) -> StyleDescriptor {
        let border = match status {
            AvatarStatus::Online => "#22c55e",
            AvatarStatus::Offline => "#9ca3af",
            AvatarStatus::Busy => "#ef4444",
            AvatarStatus::Away => "#f59e0b",
        };
        StyleDescriptor {
            border,
            ..StyleDescriptor::EMPTY
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Text-field variants.
pub enum FieldVariant {
    /// White field with a gray border.
    Default,
    /// Gray filled field without a border.
    Filled,
    /// Transparent field with a strong border.
    Outline,
}

impl Default for FieldVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl VariantKey for FieldVariant {
    const KIND: &'static str = "field variant";
    const ALL: &'static [Self] = &[Self::Default, Self::Filled, Self::Outline];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Filled => "filled",
            Self::Outline => "outline",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Validation statuses for text fields.
pub enum FieldStatus {
    /// Invalid input.
    Error,
    /// Accepted input.
    Success,
}

impl VariantKey for FieldStatus {
    const KIND: &'static str = "field status";
    const ALL: &'static [Self] = &[Self::Error, Self::Success];

    fn token(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Success => "success",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Style map for single-line text inputs.
pub struct TextFieldStyle;

impl ComponentStyle for TextFieldStyle {
    const KIND: &'static str = "text-field";
    const BASE_CLASS: &'static str = "ui-text-field";
    type Variant = FieldVariant;
    type Status = FieldStatus;

    fn variant_style(variant: FieldVariant) -> StyleDescriptor {
        let (background, border) = match variant {
            FieldVariant::Default => (SURFACE, "#d1d5db"),
            FieldVariant::Filled => ("#f3f4f6", TRANSPARENT),
            FieldVariant::Outline => (TRANSPARENT, "#6b7280"),
        };
        StyleDescriptor {
            background,
            foreground: INK,
            border,
            radius: Radius::Md.css(),
            shadow: Shadow::None.css(),
            ..StyleDescriptor::EMPTY
        }
    }

    fn size_style(size: Size) -> StyleDescriptor {
        let (padding, font_size) = match size {
            Size::Sm => ("4px 8px", "13px"),
            Size::Md => ("8px 12px", "14px"),
            Size::Lg => ("12px 16px", "16px"),
        };
        StyleDescriptor {
            padding,
            font_size,
            ..StyleDescriptor::EMPTY
        }
    }

    fn status_style(status: FieldStatus) -> StyleDescriptor {
        let border = match status {
            FieldStatus::Error => Tone::Error.solid().background,
            FieldStatus::Success => Tone::Success.solid().background,
        };
        StyleDescriptor {
            border,
            ..StyleDescriptor::EMPTY
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Progress-bar fill variants.
pub enum ProgressVariant {
    /// Brand fill.
    Default,
    /// Green fill.
    Success,
    /// Amber fill.
    Warning,
    /// Red fill.
    Error,
}

impl Default for ProgressVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl VariantKey for ProgressVariant {
    const KIND: &'static str = "progress variant";
    const ALL: &'static [Self] = &[Self::Default, Self::Success, Self::Warning, Self::Error];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Style map for linear progress bars. `background` is the fill color.
pub struct ProgressStyle;

impl ComponentStyle for ProgressStyle {
    const KIND: &'static str = "progress";
    const BASE_CLASS: &'static str = "ui-progress";
    type Variant = ProgressVariant;
    type Status = NoStatus;

    fn variant_style(variant: ProgressVariant) -> StyleDescriptor {
        let tone = match variant {
            ProgressVariant::Default => Tone::Primary,
            ProgressVariant::Success => Tone::Success,
            ProgressVariant::Warning => Tone::Warning,
            ProgressVariant::Error => Tone::Error,
        };
        StyleDescriptor {
            background: tone.solid().background,
            radius: Radius::Full.css(),
            ..StyleDescriptor::EMPTY
        }
    }

    fn size_style(size: Size) -> StyleDescriptor {
        let height = match size {
            Size::Sm => "4px",
            Size::Md => "8px",
            Size::Lg => "12px",
        };
        StyleDescriptor {
            height,
            ..StyleDescriptor::EMPTY
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Modal dialog variants.
pub enum ModalVariant {
    /// Dialog offset from the top of the viewport.
    Default,
    /// Dialog centered by auto margins inside the backdrop.
    Centered,
    /// Dialog covering the viewport.
    Fullscreen,
}

impl Default for ModalVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl VariantKey for ModalVariant {
    const KIND: &'static str = "modal variant";
    const ALL: &'static [Self] = &[Self::Default, Self::Centered, Self::Fullscreen];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Centered => "centered",
            Self::Fullscreen => "fullscreen",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Style map for modal dialogs. Size selects the dialog width.
pub struct ModalStyle;

impl ComponentStyle for ModalStyle {
    const KIND: &'static str = "modal";
    const BASE_CLASS: &'static str = "ui-modal";
    type Variant = ModalVariant;
    type Status = NoStatus;

    fn variant_style(variant: ModalVariant) -> StyleDescriptor {
        let dialog = StyleDescriptor {
            background: SURFACE,
            foreground: INK,
            border: TRANSPARENT,
            radius: Radius::Lg.css(),
            shadow: Shadow::Lg.css(),
            padding: "24px",
            ..StyleDescriptor::EMPTY
        };
        match variant {
            ModalVariant::Default => StyleDescriptor {
                margin: "48px auto 0",
                ..dialog
            },
            ModalVariant::Centered => StyleDescriptor {
                margin: "auto",
                ..dialog
            },
            ModalVariant::Fullscreen => StyleDescriptor {
                radius: Radius::None.css(),
                shadow: Shadow::None.css(),
                width: "100vw",
                height: "100vh",
                margin: "0",
                ..dialog
            },
        }
    }

    fn size_style(size: Size) -> StyleDescriptor {
        let width = match size {
            Size::Sm => "400px",
            Size::Md => "560px",
            Size::Lg => "800px",
        };
        StyleDescriptor {
            width,
            ..StyleDescriptor::EMPTY
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Tooltip variants.
pub enum TooltipVariant {
    /// Dark bubble.
    Dark,
    /// Light bubble with a border.
    Light,
}

impl Default for TooltipVariant {
    fn default() -> Self {
        Self::Dark
    }
}

impl VariantKey for TooltipVariant {
    const KIND: &'static str = "tooltip variant";
    const ALL: &'static [Self] = &[Self::Dark, Self::Light];

    fn token(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Style map for hover tooltips.
pub struct TooltipStyle;

impl ComponentStyle for TooltipStyle {
    const KIND: &'static str = "tooltip";
    const BASE_CLASS: &'static str = "ui-tooltip";
    const DEFAULT_SIZE: Size = Size::Sm;
    type Variant = TooltipVariant;
    type Status = NoStatus;

    fn variant_style(variant: TooltipVariant) -> StyleDescriptor {
        let (background, foreground, border) = match variant {
            TooltipVariant::Dark => (INK, SURFACE, INK),
            TooltipVariant::Light => (SURFACE, INK, HAIRLINE),
        };
        StyleDescriptor {
            background,
            foreground,
            border,
            radius: Radius::Sm.css(),
            shadow: Shadow::Md.css(),
            ..StyleDescriptor::EMPTY
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Switch variants. The variant colors the "on" track.
pub enum SwitchVariant {
    /// Brand track.
    Default,
    /// Green track.
    Success,
}

impl Default for SwitchVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl VariantKey for SwitchVariant {
    const KIND: &'static str = "switch variant";
    const ALL: &'static [Self] = &[Self::Default, Self::Success];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Success => "success",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Style map for on/off switches. `background` is the "on" track color.
pub struct SwitchStyle;

impl ComponentStyle for SwitchStyle {
    const KIND: &'static str = "switch";
    const BASE_CLASS: &'static str = "ui-switch";
    type Variant = SwitchVariant;
    type Status = NoStatus;

    fn variant_style(variant: SwitchVariant) -> StyleDescriptor {
        let tone = match variant {
            SwitchVariant::Default => Tone::Primary,
            SwitchVariant::Success => Tone::Success,
        };
        StyleDescriptor {
            background: tone.solid().background,
            radius: Radius::Full.css(),
            ..StyleDescriptor::EMPTY
        }
    }

    fn size_style(size: Size) -> StyleDescriptor {
        let (width, height) = match size {
            Size::Sm => ("32px", "18px"),
            Size::Md => ("44px", "24px"),
            Size::Lg => ("56px", "30px"),
        };
        StyleDescriptor {
            width,
            height,
            ..StyleDescriptor::EMPTY
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Frame variants shared by accordions, tabs, and dropdown menus.
pub enum PanelVariant {
    /// Frameless.
    Default,
    /// White panel with a hairline border.
    Bordered,
}

impl Default for PanelVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl VariantKey for PanelVariant {
    const KIND: &'static str = "panel variant";
    const ALL: &'static [Self] = &[Self::Default, Self::Bordered];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Bordered => "bordered",
        }
    }
}

fn panel_frame(variant: PanelVariant) -> StyleDescriptor {
    let (background, border) = match variant {
        PanelVariant::Default => (TRANSPARENT, TRANSPARENT),
        PanelVariant::Bordered => (SURFACE, HAIRLINE),
    };
    StyleDescriptor {
        background,
        foreground: INK,
        border,
        radius: Radius::Md.css(),
        ..StyleDescriptor::EMPTY
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Style map for single-section accordions.
pub struct AccordionStyle;

impl ComponentStyle for AccordionStyle {
    const KIND: &'static str = "accordion";
    const BASE_CLASS: &'static str = "ui-accordion";
    type Variant = PanelVariant;
    type Status = NoStatus;

    fn variant_style(variant: PanelVariant) -> StyleDescriptor {
        panel_frame(variant)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Style map for tab sets.
pub struct TabsStyle;

impl ComponentStyle for TabsStyle {
    const KIND: &'static str = "tabs";
    const BASE_CLASS: &'static str = "ui-tabs";
    type Variant = PanelVariant;
    type Status = NoStatus;

    fn variant_style(variant: PanelVariant) -> StyleDescriptor {
        panel_frame(variant)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Style map for dropdown menu surfaces.
pub struct DropdownStyle;

impl ComponentStyle for DropdownStyle {
    const KIND: &'static str = "dropdown";
    const BASE_CLASS: &'static str = "ui-dropdown";
    type Variant = PanelVariant;
    type Status = NoStatus;

    fn variant_style(variant: PanelVariant) -> StyleDescriptor {
        StyleDescriptor {
            shadow: Shadow::Md.css(),
            ..panel_frame(variant)
        }
    }
}
