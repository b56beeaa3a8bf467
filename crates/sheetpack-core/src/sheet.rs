//! Worksheet builder and the immutable sheet it produces

use crate::cell::{check_col, check_date, check_row, CellAddress, CellRange, CellType, CellValue};
use crate::column::{resolve_columns, ColumnSpec};
use crate::error::{Error, Result};

/// A single cell: reference, value and style index
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// Cell location
    pub address: CellAddress,
    /// Cell value
    pub value: CellValue,
    /// Index into the cell format table (0 = default style)
    pub style_index: u32,
}

impl Cell {
    /// A1-style reference (e.g., "B3")
    pub fn reference(&self) -> String {
        self.address.to_a1_string()
    }

    /// Type tag derived from the value
    pub fn cell_type(&self) -> CellType {
        self.value.cell_type()
    }
}

/// A row of cells ordered left to right
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    index: u32,
    cells: Vec<Cell>,
}

impl Row {
    /// Row number (1-based)
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Cells in column order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Get a cell by column number
    pub fn cell(&self, col: u16) -> Option<&Cell> {
        self.cells
            .binary_search_by_key(&col, |c| c.address.col)
            .ok()
            .map(|i| &self.cells[i])
    }

    /// Check if the row has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Accumulates the content of one worksheet
///
/// Rows must be appended in strictly increasing order and cells within a row
/// left to right; violations are reported by the call that introduces them.
/// Hand the finished builder to [`Workbook::add_sheet`](crate::Workbook::add_sheet).
///
/// # Example
///
/// ```rust
/// use sheetpack_core::SheetBuilder;
///
/// let mut sheet = SheetBuilder::new();
/// sheet.append_row(1)?.append_cell("A", "Some text", 0)?;
/// sheet.add_merge_cell("A1:C1")?;
/// sheet.set_column_width(1, 1, 34.0, 0)?;
/// # Ok::<(), sheetpack_core::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SheetBuilder {
    rows: Vec<Row>,
    columns: Vec<ColumnSpec>,
    merges: Vec<CellRange>,
    auto_filter: Option<CellRange>,
}

impl SheetBuilder {
    /// Create an empty sheet builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row, returning a handle for adding its cells
    ///
    /// Fails with [`Error::RowOrder`] unless `row` is greater than the last
    /// appended row. Gaps are allowed.
    pub fn append_row(&mut self, row: u32) -> Result<RowHandle<'_>> {
        check_row(row)?;
        if let Some(last) = self.rows.last() {
            if row <= last.index {
                return Err(Error::RowOrder {
                    row,
                    previous: last.index,
                });
            }
        }

        self.rows.push(Row {
            index: row,
            cells: Vec::new(),
        });
        let row = self.rows.len() - 1;
        Ok(RowHandle {
            row: &mut self.rows[row],
        })
    }

    /// Set width and style for columns `min..=max` (1-based)
    ///
    /// Ranges may overlap; the range registered last wins for a shared column.
    pub fn set_column_width(&mut self, min: u16, max: u16, width: f64, style_index: u32) -> Result<()> {
        if min > max {
            return Err(Error::InvalidColumnRange { min, max });
        }
        check_col(min)?;
        check_col(max)?;
        if !width.is_finite() || width <= 0.0 {
            return Err(Error::InvalidColumnWidth(width));
        }

        self.columns.push(ColumnSpec::new(min, max, width, style_index));
        Ok(())
    }

    /// Set the auto-filter range, replacing any previous one
    pub fn set_auto_filter(&mut self, range: &str) -> Result<()> {
        self.auto_filter = Some(CellRange::parse(range)?);
        Ok(())
    }

    /// Register a merged range
    ///
    /// Fails with [`Error::InvalidRange`] for a single cell and with
    /// [`Error::MergeOverlap`] if it shares a cell with a range already
    /// registered.
    pub fn add_merge_cell(&mut self, range: &str) -> Result<()> {
        let range = CellRange::parse(range)?;
        if range.start == range.end {
            return Err(Error::InvalidRange(format!(
                "merge range {} covers a single cell",
                range
            )));
        }
        if let Some(existing) = self.merges.iter().find(|m| m.overlaps(&range)) {
            return Err(Error::MergeOverlap {
                range: range.to_a1_string(),
                existing: existing.to_a1_string(),
            });
        }
        self.merges.push(range);
        Ok(())
    }

    /// Number of the last appended row
    pub fn last_row(&self) -> Option<u32> {
        self.rows.last().map(|r| r.index)
    }

    pub(crate) fn build(self, id: u32, name: String) -> Sheet {
        Sheet {
            id,
            name,
            rows: self.rows,
            columns: self.columns,
            merges: self.merges,
            auto_filter: self.auto_filter,
        }
    }
}

/// Mutable access to the row most recently appended to a [`SheetBuilder`]
#[derive(Debug)]
pub struct RowHandle<'a> {
    row: &'a mut Row,
}

impl<'a> RowHandle<'a> {
    /// Row number (1-based)
    pub fn index(&self) -> u32 {
        self.row.index
    }

    /// Append a cell by column letters (e.g., "B")
    ///
    /// Fails with [`Error::ColumnOrder`] unless the column lies to the right
    /// of the previous cell in this row.
    pub fn append_cell<V: Into<CellValue>>(
        &mut self,
        column: &str,
        value: V,
        style_index: u32,
    ) -> Result<&mut Self> {
        let col = CellAddress::letters_to_column(column)?;
        self.push(CellAddress::new(self.row.index, col), value.into(), style_index)
    }

    /// Append a text cell by column letters
    pub fn append_text<S: Into<String>>(
        &mut self,
        column: &str,
        text: S,
        style_index: u32,
    ) -> Result<&mut Self> {
        self.append_cell(column, CellValue::String(text.into()), style_index)
    }

    /// Append a cell by full reference (e.g., "B3")
    ///
    /// Fails with [`Error::RowMismatch`] if the reference names another row.
    pub fn append_cell_at<V: Into<CellValue>>(
        &mut self,
        reference: &str,
        value: V,
        style_index: u32,
    ) -> Result<&mut Self> {
        let address = CellAddress::parse(reference)?;
        if address.row != self.row.index {
            return Err(Error::RowMismatch {
                reference: reference.to_string(),
                row: self.row.index,
            });
        }
        self.push(address, value.into(), style_index)
    }

    fn push(&mut self, address: CellAddress, value: CellValue, style_index: u32) -> Result<&mut Self> {
        check_col(address.col)?;
        if let CellValue::Date(dt) = &value {
            check_date(dt)?;
        }
        if let Some(last) = self.row.cells.last() {
            if address.col <= last.address.col {
                return Err(Error::ColumnOrder {
                    row: self.row.index,
                    column: CellAddress::column_to_letters(address.col),
                    previous: CellAddress::column_to_letters(last.address.col),
                });
            }
        }

        self.row.cells.push(Cell {
            address,
            value,
            style_index,
        });
        Ok(self)
    }
}

/// A finished worksheet owned by a [`Workbook`](crate::Workbook)
#[derive(Debug, Clone)]
pub struct Sheet {
    id: u32,
    name: String,
    rows: Vec<Row>,
    columns: Vec<ColumnSpec>,
    merges: Vec<CellRange>,
    auto_filter: Option<CellRange>,
}

impl Sheet {
    /// Sheet id (1-based, in order of addition)
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rows in ascending order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Get a row by number
    pub fn row(&self, row: u32) -> Option<&Row> {
        self.rows
            .binary_search_by_key(&row, |r| r.index)
            .ok()
            .map(|i| &self.rows[i])
    }

    /// Get a cell by A1-style reference
    pub fn cell(&self, reference: &str) -> Result<Option<&Cell>> {
        let addr = CellAddress::parse(reference)?;
        Ok(self.row(addr.row).and_then(|r| r.cell(addr.col)))
    }

    /// Iterate all cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flat_map(|r| r.cells.iter())
    }

    /// Column specs as registered (may overlap)
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Column specs flattened into non-overlapping ascending runs
    pub fn resolved_columns(&self) -> Vec<ColumnSpec> {
        resolve_columns(&self.columns)
    }

    /// Merged ranges in registration order
    pub fn merge_cells(&self) -> &[CellRange] {
        &self.merges
    }

    /// Auto-filter range
    pub fn auto_filter(&self) -> Option<&CellRange> {
        self.auto_filter.as_ref()
    }

    /// Smallest range containing every cell, `None` for a sheet without cells
    pub fn dimension(&self) -> Option<CellRange> {
        self.cells()
            .map(|c| CellRange::single(c.address))
            .reduce(|acc, r| acc.union(&r))
    }
}
