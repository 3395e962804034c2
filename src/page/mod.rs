//! Typed page-header model and its mapping to the wire metadata records.
pub mod header;
pub mod wire;

pub use header::{
    DataPageHeader, DataPageHeaderV2, DictionaryPageHeader, IndexPageHeader, PageHeader, PageKind,
    PageType,
};
