//! CLI command implementations.

mod export;
mod front_matter;
mod images;

pub(crate) use export::ExportArgs;
pub(crate) use front_matter::FrontMatterArgs;
pub(crate) use images::ImagesArgs;

use clap::Args;
use zenpress_article::PropertyMapping;

/// Arguments shared by every command.
#[derive(Args)]
pub(crate) struct CommonArgs {
    /// Notion page ID.
    pub(crate) page_id: String,

    /// Notion integration token.
    #[arg(long, env = "NOTION_TOKEN", hide_env_values = true)]
    pub(crate) token: String,
}

/// Property name overrides for the front matter mapping.
#[derive(Args)]
pub(crate) struct MappingArgs {
    /// Property holding the article title.
    #[arg(long, value_name = "NAME", default_value = "Title")]
    title_prop: String,

    /// Property holding the article type.
    #[arg(long, value_name = "NAME", default_value = "Type")]
    type_prop: String,

    /// Property holding the topic tags.
    #[arg(long, value_name = "NAME", default_value = "Topics")]
    topics_prop: String,

    /// Property holding the published flag.
    #[arg(long, value_name = "NAME", default_value = "Published")]
    published_prop: String,

    /// Property holding the publication timestamp. When omitted, the
    /// published_at field is not emitted.
    #[arg(long, value_name = "NAME")]
    published_at_prop: Option<String>,
}

impl MappingArgs {
    pub(crate) fn to_mapping(&self) -> PropertyMapping {
        PropertyMapping {
            title: self.title_prop.clone(),
            kind: self.type_prop.clone(),
            topics: self.topics_prop.clone(),
            published: self.published_prop.clone(),
            published_at: self.published_at_prop.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    #[derive(clap::Parser)]
    struct Harness {
        #[command(flatten)]
        common: super::CommonArgs,
        #[command(flatten)]
        mapping: super::MappingArgs,
    }

    #[test]
    fn test_args_are_well_formed() {
        Harness::command().debug_assert();
    }

    #[test]
    fn test_mapping_overrides() {
        use clap::Parser;

        let harness = Harness::parse_from([
            "zenpress",
            "abc123",
            "--token",
            "secret",
            "--type-prop",
            "CustomType",
            "--published-at-prop",
            "PublishedAt",
        ]);
        let mapping = harness.mapping.to_mapping();

        assert_eq!(mapping.title, "Title");
        assert_eq!(mapping.kind, "CustomType");
        assert_eq!(mapping.published_at.as_deref(), Some("PublishedAt"));
    }
}
