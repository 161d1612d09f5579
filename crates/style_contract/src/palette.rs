//! Shared palette, size scale, radius, and shadow tokens the component tables draw from.

use serde::{Deserialize, Serialize};

use crate::VariantKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
/// Background, foreground, and border colors for one tone.
pub struct ToneColors {
    /// Fill color.
    pub background: &'static str,
    /// Text/icon color.
    pub foreground: &'static str,
    /// Border color.
    pub border: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Semantic color tones.
pub enum Tone {
    /// Neutral gray.
    Default,
    /// Brand blue.
    Primary,
    /// Muted gray.
    Secondary,
    /// Green.
    Success,
    /// Amber.
    Warning,
    /// Red.
    Error,
    /// Sky blue.
    Info,
}

impl Default for Tone {
    fn default() -> Self {
        Self::Default
    }
}

impl Tone {
    /// Solid colors for filled surfaces (badges, buttons).
    pub const fn solid(self) -> ToneColors {
        match self {
            Self::Default => ToneColors {
                background: "#f3f4f6",
                foreground: "#1f2937",
                border: "#e5e7eb",
            },
            Self::Primary => ToneColors {
                background: "#2563eb",
                foreground: "#ffffff",
                border: "#1d4ed8",
            },
            Self::Secondary => ToneColors {
                background: "#e5e7eb",
                foreground: "#111827",
                border: "#d1d5db",
            },
            Self::Success => ToneColors {
                background: "#16a34a",
                foreground: "#ffffff",
                border: "#15803d",
            },
            Self::Warning => ToneColors {
                background: "#f59e0b",
                foreground: "#1f2937",
                border: "#d97706",
            },
            Self::Error => ToneColors {
                background: "#dc2626",
                foreground: "#ffffff",
                border: "#b91c1c",
            },
            Self::Info => ToneColors {
                background: "#0ea5e9",
                foreground: "#ffffff",
                border: "#0284c7",
            },
        }
    }

    /// Tinted colors for callouts (alerts).
    pub const fn subtle(self) -> ToneColors {
        match self {
            Self::Default | Self::Secondary => ToneColors {
                background: "#f9fafb",
                foreground: "#374151",
                border: "#e5e7eb",
            },
            Self::Primary | Self::Info => ToneColors {
                background: "#eff6ff",
                foreground: "#1e40af",
                border: "#bfdbfe",
            },
            Self::Success => ToneColors {
                background: "#f0fdf4",
                foreground: "#166534",
                border: "#bbf7d0",
            },
            Self::Warning => ToneColors {
                background: "#fffbeb",
                foreground: "#92400e",
                border: "#fde68a",
            },
            Self::Error => ToneColors {
                background: "#fef2f2",
                foreground: "#991b1b",
                border: "#fecaca",
            },
        }
    }
}

impl VariantKey for Tone {
    const KIND: &'static str = "tone";
    const ALL: &'static [Self] = &[
        Self::Default,
        Self::Primary,
        Self::Secondary,
        Self::Success,
        Self::Warning,
        Self::Error,
        Self::Info,
    ];

    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Shared sizing tokens.
pub enum Size {
    /// Dense.
    Sm,
    /// Default.
    Md,
    /// Spacious.
    Lg,
}

impl Default for Size {
    fn default() -> Self {
        Self::Md
    }
}

impl VariantKey for Size {
    const KIND: &'static str = "size";
    const ALL: &'static [Self] = &[Self::Sm, Self::Md, Self::Lg];

    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

impl Size {
    /// Padding shorthand for inline content at this size.
    pub const fn padding(self) -> &'static str {
        match self {
            Self::Sm => "2px 8px",
            Self::Md => "4px 12px",
            Self::Lg => "8px 16px",
        }
    }

    /// Font size at this size.
    pub const fn font_size(self) -> &'static str {
        match self {
            Self::Sm => "12px",
            Self::Md => "14px",
            Self::Lg => "16px",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Corner radius scale.
pub enum Radius {
    /// Square corners.
    None,
    /// Subtle rounding.
    Sm,
    /// Default rounding.
    Md,
    /// Large rounding.
    Lg,
    /// Pill/circle.
    Full,
}

impl Radius {
    /// CSS value.
    pub const fn css(self) -> &'static str {
        match self {
            Self::None => "0",
            Self::Sm => "4px",
            Self::Md => "8px",
            Self::Lg => "12px",
            Self::Full => "9999px",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Elevation shadow scale.
pub enum Shadow {
    /// Flat.
    None,
    /// Hairline lift.
    Sm,
    /// Raised.
    Md,
    /// Overlay.
    Lg,
}

impl Shadow {
    /// CSS value.
    pub const fn css(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "0 1px 2px rgba(0, 0, 0, 0.05)",
            Self::Md => "0 4px 6px rgba(0, 0, 0, 0.1)",
            Self::Lg => "0 10px 15px rgba(0, 0, 0, 0.15)",
        }
    }
}
