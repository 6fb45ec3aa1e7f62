//! Notion API wire types.
//!
//! Field shapes follow the Notion API version pinned by the client
//! ([`crate::client`]). Every tagged union carries an `Unsupported`
//! fallback variant so that new API kinds degrade gracefully instead of
//! failing deserialization.

mod block;
mod page;
mod property;
mod text;

pub use block::{
    Block, BlockKind, BookmarkPayload, CalloutPayload, ChildTitle, CodePayload, EquationPayload,
    FilePayload, HeadingPayload, SyncedFrom, SyncedPayload, TablePayload, TableRowPayload,
    TextPayload, ToDoPayload, UrlPayload,
};
pub use page::Page;
pub use property::{FileAttachment, FormulaValue, Property, PropertyValue, SelectOption};
pub use text::{
    Annotations, DatabaseRef, DateValue, ExternalFile, FileSource, HostedFile, Icon,
    InlineEquation, Link, Mention, PageRef, RichText, RichTextVariant, TemplateRef, TextSpan,
    UrlRef, User,
};
