/// Categories currently expanded in a listing, in the order they were opened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedSections(Vec<String>);

impl ExpandedSections {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand a collapsed category or collapse an expanded one.
    ///
    /// Returns whether the category is expanded afterwards.
    pub fn toggle(&mut self, key: &str) -> bool {
        if let Some(pos) = self.0.iter().position(|k| k == key) {
            self.0.remove(pos);
            false
        } else {
            self.0.push(key.to_string());
            true
        }
    }

    #[must_use]
    pub fn is_expanded(&self, key: &str) -> bool {
        self.0.iter().any(|k| k == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_keeps_opening_order() {
        let mut sections = ExpandedSections::new();
        assert!(sections.toggle("departements"));
        assert!(sections.toggle("espaces_pedagogiques"));
        assert!(sections.toggle("laboratoires_et_ateliers"));
        assert!(!sections.toggle("espaces_pedagogiques"));

        assert_eq!(
            sections.iter().collect::<Vec<_>>(),
            ["departements", "laboratoires_et_ateliers"]
        );
        assert!(!sections.is_expanded("espaces_pedagogiques"));

        assert!(sections.toggle("espaces_pedagogiques"));
        assert_eq!(sections.iter().last(), Some("espaces_pedagogiques"));
        assert_eq!(sections.len(), 3);
    }
}
