//! Zip container and content-type registry

use std::io::{Seek, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::{XlsxError, XlsxResult};
use crate::xml::{content_type, escape_xml, XML_DECLARATION};

/// Name of the mandatory content-types part
pub const CONTENT_TYPES_PART: &str = "[Content_Types].xml";

/// Compression applied to every part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
    /// Deflate (what spreadsheet applications write)
    #[default]
    Deflated,
    /// No compression
    Stored,
}

impl Compression {
    fn method(self) -> CompressionMethod {
        match self {
            Compression::Deflated => CompressionMethod::Deflated,
            Compression::Stored => CompressionMethod::Stored,
        }
    }
}

/// Content types of a package: defaults by extension plus per-part overrides
#[derive(Debug, Clone, PartialEq)]
pub struct ContentTypes {
    defaults: Vec<(String, String)>,
    overrides: Vec<(String, String)>,
}

impl ContentTypes {
    /// Registry with the `rels` and `xml` extension defaults
    pub fn new() -> Self {
        Self {
            defaults: vec![
                ("rels".into(), content_type::RELATIONSHIPS.into()),
                ("xml".into(), content_type::XML.into()),
            ],
            overrides: Vec::new(),
        }
    }

    /// Registry read back from an existing package
    pub(crate) fn from_entries(
        defaults: Vec<(String, String)>,
        overrides: Vec<(String, String)>,
    ) -> Self {
        Self {
            defaults,
            overrides,
        }
    }

    /// Register a part, adding an override unless its extension default already matches
    pub fn register(&mut self, part_name: &str, content_type: &str) {
        if self.default_for(part_name) == Some(content_type) {
            return;
        }
        let part_name = format!("/{}", part_name.trim_start_matches('/'));
        self.overrides.push((part_name, content_type.to_string()));
    }

    /// Content type a part resolves to, override first
    pub fn content_type_of(&self, part_name: &str) -> Option<&str> {
        let trimmed = part_name.trim_start_matches('/');
        self.overrides
            .iter()
            .find(|(name, _)| name.trim_start_matches('/') == trimmed)
            .map(|(_, ct)| ct.as_str())
            .or_else(|| self.default_for(trimmed))
    }

    fn default_for(&self, part_name: &str) -> Option<&str> {
        let ext = part_name.rsplit_once('.').map(|(_, ext)| ext)?;
        self.defaults
            .iter()
            .find(|(e, _)| e.eq_ignore_ascii_case(ext))
            .map(|(_, ct)| ct.as_str())
    }

    /// Serialize `[Content_Types].xml`
    pub fn to_xml(&self) -> String {
        let mut content = String::from(XML_DECLARATION);
        content.push_str(
            "\n<Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">",
        );
        for (ext, ct) in &self.defaults {
            content.push_str(&format!(
                "\n    <Default Extension=\"{}\" ContentType=\"{}\"/>",
                escape_xml(ext),
                escape_xml(ct)
            ));
        }
        for (part, ct) in &self.overrides {
            content.push_str(&format!(
                "\n    <Override PartName=\"{}\" ContentType=\"{}\"/>",
                escape_xml(part),
                escape_xml(ct)
            ));
        }
        content.push_str("\n</Types>");
        content
    }
}

impl Default for ContentTypes {
    fn default() -> Self {
        Self::new()
    }
}

/// A named part waiting to be written
#[derive(Debug, Clone)]
struct PackagePart {
    name: String,
    data: Vec<u8>,
}

/// Writes a set of named parts into a zip container
///
/// Parts are buffered until [`finish`](Self::finish), which writes
/// `[Content_Types].xml` first and then every part in the order it was added.
/// Nothing reaches the underlying writer before `finish`.
pub struct ZipPackageWriter<W: Write + Seek> {
    writer: W,
    compression: Compression,
    content_types: ContentTypes,
    parts: Vec<PackagePart>,
}

impl<W: Write + Seek> ZipPackageWriter<W> {
    /// Create a package writer over `writer`
    pub fn new(writer: W, compression: Compression) -> Self {
        Self {
            writer,
            compression,
            content_types: ContentTypes::new(),
            parts: Vec::new(),
        }
    }

    /// Add a part and register its content type
    ///
    /// Part names are package-relative without a leading slash
    /// (e.g., "xl/workbook.xml").
    pub fn add_part<S: Into<String>>(
        &mut self,
        name: S,
        content_type: &str,
        data: Vec<u8>,
    ) -> XlsxResult<()> {
        let name = name.into();
        if name.is_empty() || name.starts_with('/') || name == CONTENT_TYPES_PART {
            return Err(XlsxError::InvalidFormat(format!("invalid part name '{}'", name)));
        }
        if self.parts.iter().any(|p| p.name.eq_ignore_ascii_case(&name)) {
            return Err(XlsxError::InvalidFormat(format!("duplicate part '{}'", name)));
        }

        self.content_types.register(&name, content_type);
        self.parts.push(PackagePart { name, data });
        Ok(())
    }

    /// Content types registered so far
    pub fn content_types(&self) -> &ContentTypes {
        &self.content_types
    }

    /// Names of the parts added so far
    pub fn part_names(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().map(|p| p.name.as_str())
    }

    /// Write all parts and close the container, returning the inner writer
    pub fn finish(self) -> XlsxResult<W> {
        let options = SimpleFileOptions::default().compression_method(self.compression.method());
        let mut zip = ZipWriter::new(self.writer);

        let content_types = self.content_types.to_xml();
        zip.start_file(CONTENT_TYPES_PART, options)?;
        zip.write_all(content_types.as_bytes())?;
        log::trace!("wrote {} ({} bytes)", CONTENT_TYPES_PART, content_types.len());

        for part in &self.parts {
            zip.start_file(part.name.as_str(), options)?;
            zip.write_all(&part.data)?;
            log::trace!("wrote {} ({} bytes)", part.name, part.data.len());
        }

        Ok(zip.finish()?)
    }
}
