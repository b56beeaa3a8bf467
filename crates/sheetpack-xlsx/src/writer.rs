//! XLSX package assembly

use std::io::{Cursor, Seek, Write};
use std::path::Path;

use sheetpack_core::Workbook;
use tempfile::NamedTempFile;

use crate::doc_props::{self, APP_PART, CORE_PART};
use crate::error::{XlsxError, XlsxResult};
use crate::package::{Compression, ZipPackageWriter};
use crate::styles::styles_xml;
use crate::workbook::{
    root_relationships, workbook_relationships, workbook_xml, ROOT_RELS_PART, STYLES_PART,
    WORKBOOK_PART, WORKBOOK_RELS_PART,
};
use crate::worksheet::{worksheet_part_name, worksheet_xml};
use crate::xml::content_type;

/// Options controlling package output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageOptions {
    /// Compression for every part
    pub compression: Compression,
    /// Emit `docProps/core.xml` and `docProps/app.xml`
    pub document_properties: bool,
}

impl Default for PackageOptions {
    fn default() -> Self {
        Self {
            compression: Compression::Deflated,
            document_properties: true,
        }
    }
}

/// XLSX package writer
///
/// Assembly validates the workbook, serializes every part, and only then
/// opens the zip container. A failure at any step leaves the output untouched.
///
/// # Example
///
/// ```rust
/// use sheetpack_core::{SheetBuilder, Workbook};
/// use sheetpack_xlsx::XlsxWriter;
///
/// let mut workbook = Workbook::new();
/// let mut sheet = SheetBuilder::new();
/// sheet.append_row(1)?.append_cell("A", "Test", 0)?;
/// workbook.add_sheet(sheet, "Sheet1")?;
///
/// let bytes = XlsxWriter::new().assemble(&workbook)?;
/// assert_eq!(&bytes[..2], b"PK");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct XlsxWriter {
    options: PackageOptions,
}

impl XlsxWriter {
    /// Writer with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Writer with explicit options
    pub fn with_options(options: PackageOptions) -> Self {
        Self { options }
    }

    /// Options in effect
    pub fn options(&self) -> &PackageOptions {
        &self.options
    }

    /// Assemble a workbook into an in-memory package
    pub fn assemble(&self, workbook: &Workbook) -> XlsxResult<Vec<u8>> {
        let cursor = self.write(workbook, Cursor::new(Vec::new()))?;
        Ok(cursor.into_inner())
    }

    /// Assemble a workbook into `writer`, returning it once the container is closed
    pub fn write<W: Write + Seek>(&self, workbook: &Workbook, writer: W) -> XlsxResult<W> {
        workbook.validate()?;
        log::debug!(
            "assembling package: {} sheet(s), {} cell format(s)",
            workbook.sheet_count(),
            workbook.styles().cell_formats().len()
        );

        let mut package = ZipPackageWriter::new(writer, self.options.compression);

        // Styles first: cells only hold indices into this table
        package.add_part(
            STYLES_PART,
            content_type::STYLES,
            styles_xml(workbook.styles()).into_bytes(),
        )?;

        for sheet in workbook.sheets() {
            package.add_part(
                worksheet_part_name(sheet.id()),
                content_type::WORKSHEET,
                worksheet_xml(sheet).into_bytes(),
            )?;
        }

        let rels = workbook_relationships(workbook);
        package.add_part(
            WORKBOOK_PART,
            content_type::WORKBOOK,
            workbook_xml(workbook, &rels).into_bytes(),
        )?;
        package.add_part(
            WORKBOOK_RELS_PART,
            content_type::RELATIONSHIPS,
            rels.to_xml().into_bytes(),
        )?;

        let with_doc_props = self.options.document_properties;
        package.add_part(
            ROOT_RELS_PART,
            content_type::RELATIONSHIPS,
            root_relationships(with_doc_props).to_xml().into_bytes(),
        )?;
        if with_doc_props {
            let now = chrono::Utc::now().naive_utc();
            package.add_part(
                CORE_PART,
                content_type::CORE_PROPERTIES,
                doc_props::core_xml(workbook.properties(), now).into_bytes(),
            )?;
            package.add_part(
                APP_PART,
                content_type::EXTENDED_PROPERTIES,
                doc_props::app_xml(workbook).into_bytes(),
            )?;
        }

        let writer = package.finish()?;
        log::debug!("package assembled");
        Ok(writer)
    }

    /// Assemble a workbook and atomically replace `path` with it
    ///
    /// The package is written to a temporary file in the destination
    /// directory, synced, then renamed over `path`. On failure the temporary
    /// file is removed and `path` is left as it was.
    pub fn write_file<P: AsRef<Path>>(&self, workbook: &Workbook, path: P) -> XlsxResult<()> {
        let path = path.as_ref();
        let bytes = self.assemble(workbook)?;

        let parent = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(parent)?;
        tmp.as_file_mut().write_all(&bytes)?;
        tmp.as_file_mut().flush()?;
        tmp.as_file().sync_all()?;

        match tmp.persist(path) {
            Ok(_) => {}
            Err(err) if err.error.kind() == std::io::ErrorKind::AlreadyExists => {
                // Some platforms refuse to rename over an existing file
                std::fs::remove_file(path)?;
                err.file.persist(path).map_err(|e| XlsxError::Io(e.error))?;
            }
            Err(err) => return Err(XlsxError::Io(err.error)),
        }

        log::debug!("wrote {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }
}
