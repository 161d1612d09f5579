//! Gallery catalog: string-keyed demo props loaded from JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use style_contract::{
    style_table, AccordionStyle, AlertStyle, AvatarStyle, BadgeStyle, ButtonStyle, CardStyle,
    DropdownStyle, ModalStyle, ProgressStyle, StyleRequest, SwitchStyle, TabsStyle,
    TextFieldStyle, TooltipStyle,
};
use thiserror::Error;

const BUILTIN_CATALOG: &str = include_str!("../catalog.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Component families the gallery can render.
pub enum ComponentKind {
    /// [`snippet_ui::Badge`].
    Badge,
    /// [`snippet_ui::Button`].
    Button,
    /// [`snippet_ui::Card`].
    Card,
    /// [`snippet_ui::Alert`].
    Alert,
    /// [`snippet_ui::Avatar`].
    Avatar,
    /// [`snippet_ui::TextField`].
    TextField,
    /// [`snippet_ui::ProgressBar`].
    ProgressBar,
    /// [`snippet_ui::Switch`].
    Switch,
    /// [`snippet_ui::Tooltip`].
    Tooltip,
    /// [`snippet_ui::Accordion`].
    Accordion,
    /// [`snippet_ui::Tabs`].
    Tabs,
    /// [`snippet_ui::Dropdown`].
    Dropdown,
    /// [`snippet_ui::Modal`].
    Modal,
}

impl ComponentKind {
    /// Section heading.
    pub fn title(self) -> &'static str {
        match self {
            Self::Badge => "Badges",
            Self::Button => "Buttons",
            Self::Card => "Cards",
            Self::Alert => "Alerts",
            Self::Avatar => "Avatars",
            Self::TextField => "Text fields",
            Self::ProgressBar => "Progress bars",
            Self::Switch => "Switches",
            Self::Tooltip => "Tooltips",
            Self::Accordion => "Accordions",
            Self::Tabs => "Tabs",
            Self::Dropdown => "Dropdowns",
            Self::Modal => "Modals",
        }
    }

    /// The family's full style map as JSON.
    pub fn style_table(self) -> Value {
        match self {
            Self::Badge => style_table::<BadgeStyle>(),
            Self::Button => style_table::<ButtonStyle>(),
            Self::Card => style_table::<CardStyle>(),
            Self::Alert => style_table::<AlertStyle>(),
            Self::Avatar => style_table::<AvatarStyle>(),
            Self::TextField => style_table::<TextFieldStyle>(),
            Self::ProgressBar => style_table::<ProgressStyle>(),
            Self::Switch => style_table::<SwitchStyle>(),
            Self::Tooltip => style_table::<TooltipStyle>(),
            Self::Accordion => style_table::<AccordionStyle>(),
            Self::Tabs => style_table::<TabsStyle>(),
            Self::Dropdown => style_table::<DropdownStyle>(),
            Self::Modal => style_table::<ModalStyle>(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One demo instance. Keys stay as text so undeclared values exercise the fallback path.
pub struct CatalogEntry {
    /// Component family.
    pub component: ComponentKind,
    /// Visible label, title, or name. Tabs use `|`-separated tab labels.
    pub label: String,
    /// Variant key.
    #[serde(default)]
    pub variant: Option<String>,
    /// Size key.
    #[serde(default)]
    pub size: Option<String>,
    /// Status key.
    #[serde(default)]
    pub status: Option<String>,
    /// Pass-through classes.
    #[serde(default)]
    pub class: Option<String>,
    /// Progress value out of 100.
    #[serde(default)]
    pub value: Option<u16>,
}

impl CatalogEntry {
    /// Style keys for the resolver.
    pub fn request(&self) -> StyleRequest<'_> {
        StyleRequest {
            variant: self.variant.as_deref(),
            size: self.size.as_deref(),
            status: self.status.as_deref(),
        }
    }

    /// Tab labels split from `label`, ignoring blank segments.
    pub fn tab_labels(&self) -> Vec<String> {
        self.label
            .split('|')
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Gallery catalog document.
pub struct Catalog {
    /// Page title.
    pub title: String,
    /// Demo instances in display order.
    pub entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Entries grouped by component family, families in first-appearance order.
    pub fn sections(&self) -> Vec<(ComponentKind, Vec<&CatalogEntry>)> {
        let mut sections: Vec<(ComponentKind, Vec<&CatalogEntry>)> = Vec::new();
        for entry in &self.entries {
            match sections.iter_mut().find(|(kind, _)| *kind == entry.component) {
                Some((_, entries)) => entries.push(entry),
                None => sections.push((entry.component, vec![entry])),
            }
        }
        sections
    }
}

#[derive(Debug, Error)]
/// Catalog loading failures.
pub enum CatalogError {
    /// The document is not valid catalog JSON (including unknown component kinds).
    #[error("catalog parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    /// The document parsed but lists nothing to render.
    #[error("catalog `{0}` has no entries")]
    Empty(String),
}

/// Parses a catalog document.
///
/// # Errors
///
/// Returns [`CatalogError::Parse`] for malformed JSON or unknown component kinds and
/// [`CatalogError::Empty`] when no entries are listed.
pub fn parse_catalog(raw: &str) -> Result<Catalog, CatalogError> {
    let catalog: Catalog = serde_json::from_str(raw)?;
    if catalog.entries.is_empty() {
        return Err(CatalogError::Empty(catalog.title));
    }
    Ok(catalog)
}

/// Loads the catalog embedded at build time.
///
/// # Errors
///
/// See [`parse_catalog`].
pub fn builtin_catalog() -> Result<Catalog, CatalogError> {
    parse_catalog(BUILTIN_CATALOG)
}
