//! Front matter resolution from page properties.

use chrono::{DateTime, NaiveDate};
use tracing::debug;
use zenpress_notion::rich_text::title_text;
use zenpress_notion::types::{Icon, Page, PropertyValue};

use crate::error::ArticleError;
use crate::front_matter::{ArticleType, DEFAULT_EMOJI, FrontMatter};
use crate::mapping::PropertyMapping;

/// Resolve the front matter record from a page's properties.
///
/// Every configured property name must exist on the page; a missing one
/// fails with [`ArticleError::MissingProperty`] before any field is
/// read. Properties that exist but hold an unexpected type degrade to
/// the field's default instead (empty title, placeholder emoji, `tech`
/// classification, no topics, unpublished).
pub fn resolve_front_matter(
    page: &Page,
    mapping: &PropertyMapping,
) -> Result<FrontMatter, ArticleError> {
    for name in mapping.configured_names() {
        if !page.properties.contains_key(name) {
            return Err(ArticleError::MissingProperty {
                page_id: page.id.clone(),
                property: name.to_owned(),
            });
        }
    }

    let title = match page.properties.get(&mapping.title).map(|p| &p.value) {
        Some(PropertyValue::Title { title }) => title_text(title),
        _ => String::new(),
    };

    let emoji = match &page.icon {
        Some(Icon::Emoji { emoji }) => emoji.clone(),
        _ => DEFAULT_EMOJI.to_owned(),
    };

    let kind = match page.properties.get(&mapping.kind).map(|p| &p.value) {
        Some(PropertyValue::Select {
            select: Some(option),
        }) => ArticleType::parse(&option.name).unwrap_or_default(),
        _ => ArticleType::default(),
    };

    let topics = match page.properties.get(&mapping.topics).map(|p| &p.value) {
        Some(PropertyValue::MultiSelect { multi_select }) => multi_select
            .iter()
            .map(|option| option.name.clone())
            .collect(),
        _ => Vec::new(),
    };

    let published = match page.properties.get(&mapping.published).map(|p| &p.value) {
        Some(PropertyValue::Checkbox { checkbox }) => *checkbox,
        _ => false,
    };

    let published_at = mapping.published_at.as_ref().and_then(|name| {
        match page.properties.get(name).map(|p| &p.value) {
            Some(PropertyValue::Date { date: Some(date) }) => format_published_at(&date.start),
            _ => None,
        }
    });

    debug!(page_id = %page.id, %title, published, "Resolved front matter");

    Ok(FrontMatter {
        title,
        emoji,
        kind,
        topics,
        published,
        published_at,
    })
}

/// Format a date property's start instant as `yyyy-MM-dd HH:mm`.
///
/// Timestamps keep their stated offset (no conversion); date-only values
/// format as midnight. Unparseable values resolve to None.
fn format_published_at(start: &str) -> Option<String> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(start) {
        return Some(instant.format("%Y-%m-%d %H:%M").to_string());
    }
    NaiveDate::parse_from_str(start, "%Y-%m-%d")
        .ok()
        .map(|date| format!("{} 00:00", date.format("%Y-%m-%d")))
}
