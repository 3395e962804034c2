use crate::errors::{Error, Result};
use crate::page::wire;
use crate::Encoding;

/// Page-type tag with its stable wire code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum PageType {
    DataPage,
    IndexPage,
    DictionaryPage,
    DataPageV2,
}

impl PageType {
    pub fn code(&self) -> i32 {
        match self {
            PageType::DataPage => 0,
            PageType::IndexPage => 1,
            PageType::DictionaryPage => 2,
            PageType::DataPageV2 => 3,
        }
    }
}

impl TryFrom<i32> for PageType {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self> {
        Ok(match code {
            0 => PageType::DataPage,
            1 => PageType::IndexPage,
            2 => PageType::DictionaryPage,
            3 => PageType::DataPageV2,
            other => return Err(general_err!("unknown page type code: {}", other)),
        })
    }
}

/// Header of a v1 data page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DataPageHeader {
    pub encoding: Encoding,
    pub num_values: i32,
}

impl DataPageHeader {
    pub fn new(encoding: Encoding, num_values: i32) -> Self {
        Self {
            encoding,
            num_values,
        }
    }

    pub fn from_wire(wire: &wire::DataPageHeader) -> Result<Self> {
        Ok(Self {
            encoding: Encoding::try_from(wire.encoding)?,
            num_values: wire.num_values,
        })
    }

    /// Level encodings in the wire record are always the run-length /
    /// bit-packed hybrid code, whatever the data encoding is.
    pub fn to_wire(&self) -> wire::DataPageHeader {
        wire::DataPageHeader {
            num_values: self.num_values,
            encoding: self.encoding.code(),
            definition_level_encoding: Encoding::levels().code(),
            repetition_level_encoding: Encoding::levels().code(),
        }
    }
}

/// Header of a v2 data page, where levels are stored uncompressed ahead of
/// the values with their byte lengths recorded here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DataPageHeaderV2 {
    pub num_values: i32,
    pub num_nulls: i32,
    pub num_rows: i32,
    pub encoding: Encoding,
    pub definition_levels_byte_length: i32,
    pub repetition_levels_byte_length: i32,
    pub is_compressed: bool,
}

impl DataPageHeaderV2 {
    pub fn from_wire(wire: &wire::DataPageHeaderV2) -> Result<Self> {
        Ok(Self {
            num_values: wire.num_values,
            num_nulls: wire.num_nulls,
            num_rows: wire.num_rows,
            encoding: Encoding::try_from(wire.encoding)?,
            definition_levels_byte_length: wire.definition_levels_byte_length,
            repetition_levels_byte_length: wire.repetition_levels_byte_length,
            is_compressed: wire.is_compressed.unwrap_or(true),
        })
    }

    pub fn to_wire(&self) -> wire::DataPageHeaderV2 {
        wire::DataPageHeaderV2 {
            num_values: self.num_values,
            num_nulls: self.num_nulls,
            num_rows: self.num_rows,
            encoding: self.encoding.code(),
            definition_levels_byte_length: self.definition_levels_byte_length,
            repetition_levels_byte_length: self.repetition_levels_byte_length,
            is_compressed: Some(self.is_compressed),
        }
    }
}

/// Header of a dictionary page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DictionaryPageHeader {
    pub num_values: i32,
    pub encoding: Encoding,
    pub is_sorted: bool,
}

impl DictionaryPageHeader {
    pub fn from_wire(wire: &wire::DictionaryPageHeader) -> Result<Self> {
        Ok(Self {
            num_values: wire.num_values,
            encoding: Encoding::try_from(wire.encoding)?,
            is_sorted: wire.is_sorted.unwrap_or(false),
        })
    }

    pub fn to_wire(&self) -> wire::DictionaryPageHeader {
        wire::DictionaryPageHeader {
            num_values: self.num_values,
            encoding: self.encoding.code(),
            is_sorted: Some(self.is_sorted),
        }
    }
}

/// Header of an index page. Empty on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IndexPageHeader;

impl IndexPageHeader {
    pub fn from_wire(_wire: &wire::IndexPageHeader) -> Self {
        Self
    }

    pub fn to_wire(&self) -> wire::IndexPageHeader {
        wire::IndexPageHeader::default()
    }
}

/// The variant part of a page header, dispatched by [`PageType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Data(DataPageHeader),
    DataV2(DataPageHeaderV2),
    Dictionary(DictionaryPageHeader),
    Index(IndexPageHeader),
}

impl PageKind {
    pub fn page_type(&self) -> PageType {
        match self {
            PageKind::Data(_) => PageType::DataPage,
            PageKind::DataV2(_) => PageType::DataPageV2,
            PageKind::Dictionary(_) => PageType::DictionaryPage,
            PageKind::Index(_) => PageType::IndexPage,
        }
    }

    /// The value encoding, where the variant carries one.
    pub fn encoding(&self) -> Option<Encoding> {
        match self {
            PageKind::Data(h) => Some(h.encoding),
            PageKind::DataV2(h) => Some(h.encoding),
            PageKind::Dictionary(h) => Some(h.encoding),
            PageKind::Index(_) => None,
        }
    }

    pub fn num_values(&self) -> Option<i32> {
        match self {
            PageKind::Data(h) => Some(h.num_values),
            PageKind::DataV2(h) => Some(h.num_values),
            PageKind::Dictionary(h) => Some(h.num_values),
            PageKind::Index(_) => None,
        }
    }
}

/// A complete page header: the size/checksum envelope plus the typed variant.
///
/// Immutable once constructed; changing a field means building a new header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageHeader {
    pub uncompressed_page_size: i32,
    pub compressed_page_size: i32,
    pub crc: Option<i32>,
    pub kind: PageKind,
}

impl PageHeader {
    pub fn page_type(&self) -> PageType {
        self.kind.page_type()
    }

    /// Builds a header from a wire record, validating the encoding code
    /// against the closed set and requiring the variant record matching the
    /// page-type tag to be present.
    pub fn from_wire(wire: &wire::PageHeader) -> Result<Self> {
        let page_type = PageType::try_from(wire.kind)?;
        let kind = match page_type {
            PageType::DataPage => {
                let header = wire
                    .data_page_header
                    .as_ref()
                    .ok_or_else(|| general_err!("data page header missing its variant record"))?;
                PageKind::Data(DataPageHeader::from_wire(header)?)
            }
            PageType::DataPageV2 => {
                let header = wire.data_page_header_v2.as_ref().ok_or_else(|| {
                    general_err!("data page v2 header missing its variant record")
                })?;
                PageKind::DataV2(DataPageHeaderV2::from_wire(header)?)
            }
            PageType::DictionaryPage => {
                let header = wire.dictionary_page_header.as_ref().ok_or_else(|| {
                    general_err!("dictionary page header missing its variant record")
                })?;
                PageKind::Dictionary(DictionaryPageHeader::from_wire(header)?)
            }
            PageType::IndexPage => PageKind::Index(
                wire.index_page_header
                    .as_ref()
                    .map(IndexPageHeader::from_wire)
                    .unwrap_or_default(),
            ),
        };

        Ok(Self {
            uncompressed_page_size: wire.uncompressed_page_size,
            compressed_page_size: wire.compressed_page_size,
            crc: wire.crc,
            kind,
        })
    }

    pub fn to_wire(&self) -> wire::PageHeader {
        let mut record = wire::PageHeader {
            kind: self.page_type().code(),
            uncompressed_page_size: self.uncompressed_page_size,
            compressed_page_size: self.compressed_page_size,
            crc: self.crc,
            data_page_header: None,
            index_page_header: None,
            dictionary_page_header: None,
            data_page_header_v2: None,
        };
        match &self.kind {
            PageKind::Data(h) => record.data_page_header = Some(h.to_wire()),
            PageKind::DataV2(h) => record.data_page_header_v2 = Some(h.to_wire()),
            PageKind::Dictionary(h) => record.dictionary_page_header = Some(h.to_wire()),
            PageKind::Index(h) => record.index_page_header = Some(h.to_wire()),
        }
        record
    }
}
