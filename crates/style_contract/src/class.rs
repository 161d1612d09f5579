use std::fmt;

/// Ordered, de-duplicated class list.
///
/// Fragments are split on whitespace; blank fragments are dropped so an undefined or empty
/// class expression contributes nothing. The first occurrence of a class keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    /// Empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends every class in `fragment`.
    pub fn push(&mut self, fragment: &str) {
        for class in fragment.split_whitespace() {
            if !self.contains(class) {
                self.classes.push(class.to_string());
            }
        }
    }

    /// Builder form of [`ClassList::push`].
    pub fn with(mut self, fragment: &str) -> Self {
        self.push(fragment);
        self
    }

    /// Computed classes first, then every caller class. Caller classes are never dropped.
    pub fn merge(computed: ClassList, caller: Option<&str>) -> ClassList {
        match caller {
            Some(caller) => computed.with(caller),
            None => computed,
        }
    }

    /// Returns `true` when `class` is present.
    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|existing| existing == class)
    }

    /// Iterates classes in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    /// Returns `true` when no class is present.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.classes.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn merge_appends_caller_classes_after_computed() {
        let computed = ClassList::new().with("ui-badge ui-badge--success");
        let merged = ClassList::merge(computed, Some("ml-2 uppercase"));
        assert_eq!(merged.to_string(), "ui-badge ui-badge--success ml-2 uppercase");
    }

    #[test]
    fn blank_fragments_are_no_ops() {
        let merged = ClassList::merge(ClassList::new().with("ui-card").with(""), Some("   "));
        assert_eq!(merged.to_string(), "ui-card");
    }

    #[test]
    fn duplicate_caller_class_is_kept_once_in_first_position() {
        let merged = ClassList::merge(
            ClassList::new().with("ui-button ui-button--primary"),
            Some("ui-button--primary wide"),
        );
        assert_eq!(merged.iter().collect::<Vec<_>>(), vec!["ui-button", "ui-button--primary", "wide"]);
        assert!(merged.contains("wide"));
    }
}
