//! Deterministic description of the single element a presentational component emits.

use crate::{ClassList, StyleDescriptor};

const VOID_ELEMENTS: &[&str] = &["img", "input", "hr", "br"];

/// Tag, classes, inline style, and ordered attributes for one rendered element.
///
/// Components in the Leptos layer read `class_attr`, `style_attr`, and `attribute` when building
/// their `view!`; [`ElementSpec::to_markup`] renders the same data as HTML for snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSpec {
    tag: &'static str,
    classes: ClassList,
    style: String,
    attributes: Vec<(&'static str, String)>,
}

impl ElementSpec {
    /// Element with no classes, style, or attributes.
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: ClassList::new(),
            style: String::new(),
            attributes: Vec::new(),
        }
    }

    /// Replaces the class list.
    pub fn classes(mut self, classes: ClassList) -> Self {
        self.classes = classes;
        self
    }

    /// Replaces the inline style with `descriptor`'s declarations.
    pub fn style(mut self, descriptor: &StyleDescriptor) -> Self {
        self.style = descriptor.inline_style();
        self
    }

    /// Sets an attribute, replacing an existing value in place.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attributes.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.attributes.push((name, value)),
        }
        self
    }

    /// Element tag.
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Class list.
    pub fn class_list(&self) -> &ClassList {
        &self.classes
    }

    /// `class` attribute text.
    pub fn class_attr(&self) -> String {
        self.classes.to_string()
    }

    /// `style` attribute text.
    pub fn style_attr(&self) -> String {
        self.style.clone()
    }

    /// Value of a non-class, non-style attribute.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(existing, _)| *existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// Renders the element around escaped `text`. Void elements ignore `text`.
    pub fn to_markup(&self, text: &str) -> String {
        let mut markup = format!("<{}", self.tag);
        if !self.classes.is_empty() {
            markup.push_str(&format!(" class=\"{}\"", escape_html(&self.class_attr())));
        }
        if !self.style.is_empty() {
            markup.push_str(&format!(" style=\"{}\"", escape_html(&self.style)));
        }
        for (name, value) in &self.attributes {
            markup.push_str(&format!(" {name}=\"{}\"", escape_html(value)));
        }
        if VOID_ELEMENTS.contains(&self.tag) {
            markup.push_str(" />");
        } else {
            markup.push('>');
            markup.push_str(&escape_html(text));
            markup.push_str(&format!("</{}>", self.tag));
        }
        markup
    }
}

/// Escapes text for use in HTML content and double-quoted attributes.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
