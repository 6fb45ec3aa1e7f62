//! Property name mapping.

/// Binding from front matter fields to the page property names that hold
/// them.
///
/// The four mandatory bindings default to the conventional property
/// names. `published_at` has no default: leaving it unset means the
/// field is never emitted, regardless of what properties the page has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyMapping {
    /// Property holding the article title.
    pub title: String,
    /// Property holding the article classification.
    pub kind: String,
    /// Property holding the topic tags.
    pub topics: String,
    /// Property holding the published flag.
    pub published: String,
    /// Property holding the publication timestamp. Opt-in.
    pub published_at: Option<String>,
}

impl Default for PropertyMapping {
    fn default() -> Self {
        Self {
            title: "Title".to_owned(),
            kind: "Type".to_owned(),
            topics: "Topics".to_owned(),
            published: "Published".to_owned(),
            published_at: None,
        }
    }
}

impl PropertyMapping {
    /// Opt into the `published_at` field, bound to the given property.
    #[must_use]
    pub fn with_published_at(mut self, property: &str) -> Self {
        self.published_at = Some(property.to_owned());
        self
    }

    /// Every configured property name, for existence validation.
    pub(crate) fn configured_names(&self) -> impl Iterator<Item = &str> {
        [
            self.title.as_str(),
            self.kind.as_str(),
            self.topics.as_str(),
            self.published.as_str(),
        ]
        .into_iter()
        .chain(self.published_at.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_bindings() {
        let mapping = PropertyMapping::default();
        assert_eq!(mapping.title, "Title");
        assert_eq!(mapping.kind, "Type");
        assert_eq!(mapping.topics, "Topics");
        assert_eq!(mapping.published, "Published");
        assert_eq!(mapping.published_at, None);
    }

    #[test]
    fn test_configured_names_includes_published_at_only_when_set() {
        let mapping = PropertyMapping::default();
        assert_eq!(mapping.configured_names().count(), 4);

        let mapping = mapping.with_published_at("PublishedAt");
        let names: Vec<&str> = mapping.configured_names().collect();
        assert_eq!(
            names,
            ["Title", "Type", "Topics", "Published", "PublishedAt"]
        );
    }
}
