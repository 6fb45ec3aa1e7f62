//! Page types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::property::Property;
use super::text::{FileSource, Icon};

/// A Notion page record.
///
/// Carries the property map keyed by the user-visible property names;
/// body content is fetched separately through the block tree.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Page {
    /// Page ID.
    pub id: String,
    #[serde(default)]
    pub created_time: Option<String>,
    #[serde(default)]
    pub last_edited_time: Option<String>,
    #[serde(default)]
    pub archived: bool,
    /// Page icon (emoji or image), when one is set.
    #[serde(default)]
    pub icon: Option<Icon>,
    /// Cover image, when one is set.
    #[serde(default)]
    pub cover: Option<FileSource>,
    /// Properties keyed by property name.
    #[serde(default)]
    pub properties: HashMap<String, Property>,
    /// Web UI link.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub public_url: Option<String>,
}
