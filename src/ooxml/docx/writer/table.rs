/// Table types and implementation for DOCX documents.
use crate::ooxml::error::{Result, ensure_arg, ensure_xml_text};
use std::cell::RefCell;
use std::rc::Rc;

// Import shared format types
pub use super::super::format::{
    Alignment, BorderStyle, HeightRule, TableLayout, VerticalAlignment,
};
use super::factory::{BOOLEAN_TRUE, Border, OnOff, build_border};
// Import paragraph types
use super::paragraph::Paragraph;
use super::xml::{SerializeOptions, ToXml, XmlSink, serialize};

/// Block-level content held by cells and document bodies.
#[derive(Debug, Clone)]
pub enum BlockContent {
    Paragraph(Paragraph),
    Table(Table),
}

impl From<Paragraph> for BlockContent {
    fn from(para: Paragraph) -> Self {
        BlockContent::Paragraph(para)
    }
}

impl From<Table> for BlockContent {
    fn from(table: Table) -> Self {
        BlockContent::Table(table)
    }
}

impl ToXml for BlockContent {
    fn write_xml(&self, sink: &mut XmlSink) -> Result<()> {
        match self {
            BlockContent::Paragraph(para) => para.write_xml(sink),
            BlockContent::Table(table) => table.write_xml(sink),
        }
    }
}

/// Width with its measurement type (`dxa`, `pct`, `auto`, `nil`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableWidth {
    pub value: u32,
    pub unit: String,
}

impl TableWidth {
    fn write_xml(&self, sink: &mut XmlSink, name: &str) -> Result<()> {
        let mut buf = itoa::Buffer::new();
        sink.empty(
            name,
            &[("w:w", buf.format(self.value)), ("w:type", self.unit.as_str())],
        )
    }
}

/// Borders for a table or a cell.
///
/// Sides are reference counted so one border value can back several sides.
#[derive(Debug, Clone, Default)]
pub struct TableBorders {
    pub top: Option<Rc<Border>>,
    pub left: Option<Rc<Border>>,
    pub bottom: Option<Rc<Border>>,
    pub right: Option<Rc<Border>>,
    pub inside_h: Option<Rc<Border>>,
    pub inside_v: Option<Rc<Border>>,
}

impl TableBorders {
    fn write_xml(&self, sink: &mut XmlSink, name: &str) -> Result<()> {
        let sides = [
            ("w:top", &self.top),
            ("w:left", &self.left),
            ("w:bottom", &self.bottom),
            ("w:right", &self.right),
            ("w:insideH", &self.inside_h),
            ("w:insideV", &self.inside_v),
        ];
        if sides.iter().all(|(_, side)| side.is_none()) {
            return sink.empty(name, &[]);
        }

        sink.start(name, &[])?;
        for (side_name, side) in sides {
            if let Some(border) = side {
                border.write_xml(sink, side_name)?;
            }
        }
        sink.end(name)
    }
}

/// Cell shading; the pattern is always `clear`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shading {
    pub color: String,
    pub fill: String,
}

fn lazy_borders(borders: &mut Option<TableBorders>) -> &mut TableBorders {
    borders.get_or_insert_with(|| {
        log::trace!("creating border container");
        TableBorders::default()
    })
}

/// Table properties.
#[derive(Debug, Default)]
pub(crate) struct TableProperties {
    pub(crate) width: Option<TableWidth>,
    pub(crate) alignment: Option<Alignment>,
    pub(crate) borders: Option<TableBorders>,
    pub(crate) layout: Option<TableLayout>,
    pub(crate) look: Option<String>,
}

#[derive(Debug, Default)]
pub(crate) struct TableData {
    pub(crate) properties: TableProperties,
    pub(crate) grid: Option<Vec<u32>>,
    pub(crate) rows: Vec<Row>,
}

/// A table (`w:tbl`) under construction.
///
/// Like [`Paragraph`], a `Table` is a handle: clones share the same table and
/// each mutator hands back a handle to it.
///
/// # Examples
///
/// ```
/// use docx_fluent::{BorderStyle, Cell, Paragraph, Row, Table};
///
/// # fn main() -> docx_fluent::Result<()> {
/// let table = Table::create()
///     .borders(4, BorderStyle::Single, Some("FF0000"), None)?
///     .width_auto()
///     .add(Row::create().add(Cell::create().add(Paragraph::create().text(&["R1C1"])?)));
/// assert!(table.serialize()?.contains("<w:t>R1C1</w:t>"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Table {
    inner: Rc<RefCell<TableData>>,
}

impl Table {
    /// Create an empty table.
    pub fn create() -> Self {
        Self::default()
    }

    /// Whether both handles refer to the same table.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Append a row.
    pub fn add(&self, row: Row) -> Self {
        self.inner.borrow_mut().rows.push(row);
        self.clone()
    }

    /// Set horizontal alignment.
    pub fn align(&self, alignment: Alignment) -> Self {
        self.inner.borrow_mut().properties.alignment = Some(alignment);
        self.clone()
    }

    /// Set the preferred table width; `unit` is the measurement type (e.g. `"dxa"`).
    pub fn width(&self, value: u32, unit: &str) -> Result<Self> {
        ensure_arg(!unit.is_empty(), "Type not valid")?;
        ensure_xml_text(unit, "Type not valid")?;
        self.inner.borrow_mut().properties.width = Some(TableWidth {
            value,
            unit: unit.to_string(),
        });
        Ok(self.clone())
    }

    /// Let the table size itself (`w:w="0" w:type="auto"`).
    pub fn width_auto(&self) -> Self {
        self.inner.borrow_mut().properties.width = Some(TableWidth {
            value: 0,
            unit: "auto".to_string(),
        });
        self.clone()
    }

    /// Set the layout algorithm.
    pub fn layout(&self, layout: TableLayout) -> Self {
        self.inner.borrow_mut().properties.layout = Some(layout);
        self.clone()
    }

    /// Set the table look code (e.g. `"01E0"`).
    pub fn look(&self, code: &str) -> Result<Self> {
        ensure_arg(!code.is_empty(), "Look value not valid")?;
        ensure_xml_text(code, "Look value not valid")?;
        self.inner.borrow_mut().properties.look = Some(code.to_string());
        Ok(self.clone())
    }

    /// Replace the column grid with one column per value.
    ///
    /// An empty slice keeps the current grid.
    pub fn grid(&self, widths: &[u32]) -> Self {
        if !widths.is_empty() {
            self.inner.borrow_mut().grid = Some(widths.to_vec());
        }
        self.clone()
    }

    /// Set the table top border; see [`build_border`].
    pub fn border_top(
        &self,
        size: u32,
        style: BorderStyle,
        color: Option<&str>,
        space: Option<u32>,
    ) -> Result<Self> {
        let border = Rc::new(build_border(size, style, color, space)?);
        self.update_borders(|b| b.top = Some(border));
        Ok(self.clone())
    }

    /// Set the table bottom border; see [`build_border`].
    pub fn border_bottom(
        &self,
        size: u32,
        style: BorderStyle,
        color: Option<&str>,
        space: Option<u32>,
    ) -> Result<Self> {
        let border = Rc::new(build_border(size, style, color, space)?);
        self.update_borders(|b| b.bottom = Some(border));
        Ok(self.clone())
    }

    /// Set the table left border; see [`build_border`].
    pub fn border_left(
        &self,
        size: u32,
        style: BorderStyle,
        color: Option<&str>,
        space: Option<u32>,
    ) -> Result<Self> {
        let border = Rc::new(build_border(size, style, color, space)?);
        self.update_borders(|b| b.left = Some(border));
        Ok(self.clone())
    }

    /// Set the table right border; see [`build_border`].
    pub fn border_right(
        &self,
        size: u32,
        style: BorderStyle,
        color: Option<&str>,
        space: Option<u32>,
    ) -> Result<Self> {
        let border = Rc::new(build_border(size, style, color, space)?);
        self.update_borders(|b| b.right = Some(border));
        Ok(self.clone())
    }

    /// Set the border drawn between rows.
    pub fn border_inside_h(
        &self,
        size: u32,
        style: BorderStyle,
        color: Option<&str>,
        space: Option<u32>,
    ) -> Result<Self> {
        let border = Rc::new(build_border(size, style, color, space)?);
        self.update_borders(|b| b.inside_h = Some(border));
        Ok(self.clone())
    }

    /// Set the border drawn between columns.
    pub fn border_inside_v(
        &self,
        size: u32,
        style: BorderStyle,
        color: Option<&str>,
        space: Option<u32>,
    ) -> Result<Self> {
        let border = Rc::new(build_border(size, style, color, space)?);
        self.update_borders(|b| b.inside_v = Some(border));
        Ok(self.clone())
    }

    /// Set all six sides to one shared border value.
    pub fn borders(
        &self,
        size: u32,
        style: BorderStyle,
        color: Option<&str>,
        space: Option<u32>,
    ) -> Result<Self> {
        let border = Rc::new(build_border(size, style, color, space)?);
        self.update_borders(|b| {
            b.top = Some(Rc::clone(&border));
            b.bottom = Some(Rc::clone(&border));
            b.inside_h = Some(Rc::clone(&border));
            b.inside_v = Some(Rc::clone(&border));
            b.left = Some(Rc::clone(&border));
            b.right = Some(border);
        });
        Ok(self.clone())
    }

    /// Table borders, if any side has been set.
    pub fn table_borders(&self) -> Option<TableBorders> {
        self.inner.borrow().properties.borders.clone()
    }

    /// Column widths of the grid, if set.
    pub fn grid_columns(&self) -> Option<Vec<u32>> {
        self.inner.borrow().grid.clone()
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.inner.borrow().rows.len()
    }

    /// Get a row handle by index.
    pub fn row(&self, index: usize) -> Option<Row> {
        self.inner.borrow().rows.get(index).cloned()
    }

    /// XML of this table, indented and without a declaration.
    pub fn serialize(&self) -> Result<String> {
        serialize(self, &SerializeOptions::default())
    }

    /// XML of this table using the given options.
    pub fn serialize_with(&self, options: &SerializeOptions) -> Result<String> {
        serialize(self, options)
    }

    fn update_borders(&self, f: impl FnOnce(&mut TableBorders)) {
        let mut data = self.inner.borrow_mut();
        f(lazy_borders(&mut data.properties.borders));
    }
}

impl ToXml for Table {
    fn write_xml(&self, sink: &mut XmlSink) -> Result<()> {
        let data = self.inner.borrow();
        let props = &data.properties;
        sink.start("w:tbl", &[])?;

        // Table properties
        let has_properties = props.width.is_some()
            || props.alignment.is_some()
            || props.borders.is_some()
            || props.layout.is_some()
            || props.look.is_some();
        if has_properties {
            sink.start("w:tblPr", &[])?;
            if let Some(ref width) = props.width {
                width.write_xml(sink, "w:tblW")?;
            }
            if let Some(alignment) = props.alignment {
                sink.empty("w:jc", &[("w:val", alignment.as_str())])?;
            }
            if let Some(ref borders) = props.borders {
                borders.write_xml(sink, "w:tblBorders")?;
            }
            if let Some(layout) = props.layout {
                sink.empty("w:tblLayout", &[("w:type", layout.as_str())])?;
            }
            if let Some(ref look) = props.look {
                sink.empty("w:tblLook", &[("w:val", look.as_str())])?;
            }
            sink.end("w:tblPr")?;
        } else {
            sink.empty("w:tblPr", &[])?;
        }

        // Grid
        match data.grid {
            Some(ref columns) => {
                sink.start("w:tblGrid", &[])?;
                let mut buf = itoa::Buffer::new();
                for &width in columns {
                    sink.empty("w:gridCol", &[("w:w", buf.format(width))])?;
                }
                sink.end("w:tblGrid")?;
            },
            None => sink.empty("w:tblGrid", &[])?,
        }

        for row in &data.rows {
            row.write_xml(sink)?;
        }

        sink.end("w:tbl")
    }
}

/// One entry of a row's ordered property list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowProperty {
    Height { value: u32, rule: HeightRule },
    Alignment(Alignment),
    CantSplit(&'static OnOff),
}

impl RowProperty {
    fn write_xml(&self, sink: &mut XmlSink) -> Result<()> {
        match self {
            RowProperty::Height { value, rule } => {
                let mut buf = itoa::Buffer::new();
                sink.empty(
                    "w:trHeight",
                    &[("w:val", buf.format(*value)), ("w:hRule", rule.as_str())],
                )
            },
            RowProperty::Alignment(alignment) => {
                sink.empty("w:jc", &[("w:val", alignment.as_str())])
            },
            RowProperty::CantSplit(flag) => flag.write_xml(sink, "w:cantSplit"),
        }
    }
}

#[derive(Debug, Default)]
pub(crate) struct RowData {
    /// Kept in call order; repeated calls add entries instead of replacing
    pub(crate) properties: Vec<RowProperty>,
    pub(crate) cells: Vec<Cell>,
}

/// A table row (`w:tr`) under construction.
#[derive(Debug, Clone, Default)]
pub struct Row {
    inner: Rc<RefCell<RowData>>,
}

impl Row {
    /// Create an empty row.
    pub fn create() -> Self {
        Self::default()
    }

    /// Whether both handles refer to the same row.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Append a cell.
    pub fn add(&self, cell: Cell) -> Self {
        self.inner.borrow_mut().cells.push(cell);
        self.clone()
    }

    /// Add an exact row height.
    pub fn height(&self, value: u32) -> Result<Self> {
        self.height_with_rule(value, HeightRule::Exact)
    }

    /// Add a row height with the given rule.
    pub fn height_with_rule(&self, value: u32, rule: HeightRule) -> Result<Self> {
        ensure_arg(value > 0, "Height value not valid")?;
        self.push_property(RowProperty::Height { value, rule });
        Ok(self.clone())
    }

    /// Add a horizontal alignment entry.
    pub fn align(&self, alignment: Alignment) -> Self {
        self.push_property(RowProperty::Alignment(alignment));
        self.clone()
    }

    /// Keep the row on a single page.
    pub fn cant_split(&self) -> Self {
        self.push_property(RowProperty::CantSplit(&BOOLEAN_TRUE));
        self.clone()
    }

    /// Row property entries in call order.
    pub fn properties(&self) -> Vec<RowProperty> {
        self.inner.borrow().properties.clone()
    }

    /// Get the number of cells.
    pub fn cell_count(&self) -> usize {
        self.inner.borrow().cells.len()
    }

    /// Get a cell handle by index.
    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.inner.borrow().cells.get(index).cloned()
    }

    /// XML of this row, indented and without a declaration.
    pub fn serialize(&self) -> Result<String> {
        serialize(self, &SerializeOptions::default())
    }

    /// XML of this row with explicit output options.
    pub fn serialize_with(&self, options: &SerializeOptions) -> Result<String> {
        serialize(self, options)
    }

    fn push_property(&self, property: RowProperty) {
        self.inner.borrow_mut().properties.push(property);
    }
}

impl ToXml for Row {
    fn write_xml(&self, sink: &mut XmlSink) -> Result<()> {
        let data = self.inner.borrow();
        sink.start("w:tr", &[])?;

        if !data.properties.is_empty() {
            sink.start("w:trPr", &[])?;
            for property in &data.properties {
                property.write_xml(sink)?;
            }
            sink.end("w:trPr")?;
        }

        for cell in &data.cells {
            cell.write_xml(sink)?;
        }

        sink.end("w:tr")
    }
}

/// Cell properties.
#[derive(Debug, Default, Clone)]
pub struct CellProperties {
    pub width: Option<TableWidth>,
    pub grid_span: Option<u32>,
    /// `Some(None)` is a bare merge marker (continue), `Some(Some(v))` an explicit mode
    pub vertical_merge: Option<Option<String>>,
    /// Cell borders; only the four outer sides are used
    pub borders: Option<TableBorders>,
    pub shading: Option<Shading>,
    pub vertical_alignment: Option<VerticalAlignment>,
}

impl CellProperties {
    fn is_empty(&self) -> bool {
        self.width.is_none()
            && self.grid_span.is_none()
            && self.vertical_merge.is_none()
            && self.borders.is_none()
            && self.shading.is_none()
            && self.vertical_alignment.is_none()
    }

    fn write_xml(&self, sink: &mut XmlSink) -> Result<()> {
        if self.is_empty() {
            return Ok(());
        }

        sink.start("w:tcPr", &[])?;

        if let Some(ref width) = self.width {
            width.write_xml(sink, "w:tcW")?;
        }

        if let Some(span) = self.grid_span {
            let mut buf = itoa::Buffer::new();
            sink.empty("w:gridSpan", &[("w:val", buf.format(span))])?;
        }

        match self.vertical_merge {
            Some(Some(ref mode)) => sink.empty("w:vMerge", &[("w:val", mode.as_str())])?,
            Some(None) => sink.empty("w:vMerge", &[])?,
            None => {},
        }

        if let Some(ref borders) = self.borders {
            borders.write_xml(sink, "w:tcBorders")?;
        }

        if let Some(ref shading) = self.shading {
            sink.empty(
                "w:shd",
                &[
                    ("w:val", "clear"),
                    ("w:color", shading.color.as_str()),
                    ("w:fill", shading.fill.as_str()),
                ],
            )?;
        }

        if let Some(valign) = self.vertical_alignment {
            sink.empty("w:vAlign", &[("w:val", valign.as_str())])?;
        }

        sink.end("w:tcPr")
    }
}

#[derive(Debug, Default)]
pub(crate) struct CellData {
    pub(crate) properties: CellProperties,
    pub(crate) content: Vec<BlockContent>,
}

/// A table cell (`w:tc`) under construction.
#[derive(Debug, Clone, Default)]
pub struct Cell {
    inner: Rc<RefCell<CellData>>,
}

impl Cell {
    /// Create an empty cell.
    pub fn create() -> Self {
        Self::default()
    }

    /// Whether both handles refer to the same cell.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Append a paragraph or a nested table.
    pub fn add(&self, content: impl Into<BlockContent>) -> Self {
        self.inner.borrow_mut().content.push(content.into());
        self.clone()
    }

    /// Set how many grid columns the cell spans.
    pub fn grid_span(&self, span: u32) -> Result<Self> {
        ensure_arg(span > 0, "Grid span value not valid")?;
        self.inner.borrow_mut().properties.grid_span = Some(span);
        Ok(self.clone())
    }

    /// Set cell shading with a `clear` pattern.
    pub fn shade(&self, color: &str, fill: &str) -> Result<Self> {
        ensure_arg(!color.is_empty(), "String color not valid")?;
        ensure_arg(!fill.is_empty(), "String fill not valid")?;
        ensure_xml_text(color, "String color not valid")?;
        ensure_xml_text(fill, "String fill not valid")?;
        self.inner.borrow_mut().properties.shading = Some(Shading {
            color: color.to_string(),
            fill: fill.to_string(),
        });
        Ok(self.clone())
    }

    /// Set vertical alignment of the cell content.
    pub fn vertical_align(&self, alignment: VerticalAlignment) -> Self {
        self.inner.borrow_mut().properties.vertical_alignment = Some(alignment);
        self.clone()
    }

    /// Set the preferred cell width; `unit` is the measurement type (e.g. `"dxa"`).
    pub fn width(&self, value: u32, unit: &str) -> Result<Self> {
        ensure_arg(value > 0, "Width value not valid")?;
        ensure_arg(!unit.is_empty(), "Type not valid")?;
        ensure_xml_text(unit, "Type not valid")?;
        self.inner.borrow_mut().properties.width = Some(TableWidth {
            value,
            unit: unit.to_string(),
        });
        Ok(self.clone())
    }

    /// Set the cell top border; see [`build_border`].
    pub fn border_top(
        &self,
        size: u32,
        style: BorderStyle,
        color: Option<&str>,
        space: Option<u32>,
    ) -> Result<Self> {
        let border = Rc::new(build_border(size, style, color, space)?);
        self.update_borders(|b| b.top = Some(border));
        Ok(self.clone())
    }

    /// Set the cell bottom border; see [`build_border`].
    pub fn border_bottom(
        &self,
        size: u32,
        style: BorderStyle,
        color: Option<&str>,
        space: Option<u32>,
    ) -> Result<Self> {
        let border = Rc::new(build_border(size, style, color, space)?);
        self.update_borders(|b| b.bottom = Some(border));
        Ok(self.clone())
    }

    /// Set the cell left border; see [`build_border`].
    pub fn border_left(
        &self,
        size: u32,
        style: BorderStyle,
        color: Option<&str>,
        space: Option<u32>,
    ) -> Result<Self> {
        let border = Rc::new(build_border(size, style, color, space)?);
        self.update_borders(|b| b.left = Some(border));
        Ok(self.clone())
    }

    /// Set the cell right border; see [`build_border`].
    pub fn border_right(
        &self,
        size: u32,
        style: BorderStyle,
        color: Option<&str>,
        space: Option<u32>,
    ) -> Result<Self> {
        let border = Rc::new(build_border(size, style, color, space)?);
        self.update_borders(|b| b.right = Some(border));
        Ok(self.clone())
    }

    /// Mark the cell as part of a vertical merge.
    ///
    /// `None` writes a bare `<w:vMerge/>` (continue the region above); any
    /// other value is written verbatim, e.g. `"restart"`.
    pub fn vertical_merge(&self, mode: Option<&str>) -> Result<Self> {
        if let Some(mode) = mode {
            ensure_xml_text(mode, "Merge value not valid")?;
        }
        self.inner.borrow_mut().properties.vertical_merge = Some(mode.map(str::to_string));
        Ok(self.clone())
    }

    /// Snapshot of the cell properties.
    pub fn properties(&self) -> CellProperties {
        self.inner.borrow().properties.clone()
    }

    /// Number of block items in the cell.
    pub fn content_count(&self) -> usize {
        self.inner.borrow().content.len()
    }

    /// XML of this cell, indented and without a declaration.
    pub fn serialize(&self) -> Result<String> {
        serialize(self, &SerializeOptions::default())
    }

    /// XML of this cell with explicit output options.
    pub fn serialize_with(&self, options: &SerializeOptions) -> Result<String> {
        serialize(self, options)
    }

    fn update_borders(&self, f: impl FnOnce(&mut TableBorders)) {
        let mut data = self.inner.borrow_mut();
        f(lazy_borders(&mut data.properties.borders));
    }
}

impl ToXml for Cell {
    fn write_xml(&self, sink: &mut XmlSink) -> Result<()> {
        let data = self.inner.borrow();
        sink.start("w:tc", &[])?;

        data.properties.write_xml(sink)?;

        for item in &data.content {
            item.write_xml(sink)?;
        }

        sink.end("w:tc")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::error::OoxmlError;

    const HELLO_WORLD: &str = "Hello, world";

    fn hello_cell() -> Cell {
        Cell::create().add(Paragraph::create().text(&[HELLO_WORLD]).unwrap())
    }

    fn hello_table() -> Table {
        Table::create().add(Row::create().add(hello_cell()))
    }

    fn compact<T: ToXml>(node: &T) -> String {
        serialize(node, &SerializeOptions::compact()).unwrap()
    }

    // Cells

    #[test]
    fn test_cell_add() {
        let xml = hello_cell().serialize().unwrap();
        assert!(xml.contains("<w:tc"));
        assert!(xml.contains("<w:t>Hello, world</w:t>"));
    }

    #[test]
    fn test_cell_grid_span() {
        let xml = hello_cell().grid_span(2).unwrap().serialize().unwrap();
        assert!(xml.contains("<w:gridSpan w:val=\"2\"/>"));
        assert!(matches!(
            Cell::create().grid_span(0),
            Err(OoxmlError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_cell_shade() {
        let xml = compact(&hello_cell().shade("auto", "E6E6E6").unwrap());
        assert!(xml.contains("<w:shd w:val=\"clear\" w:color=\"auto\" w:fill=\"E6E6E6\"/>"));
        assert!(Cell::create().shade("", "E6E6E6").is_err());
        assert!(Cell::create().shade("auto", "").is_err());
    }

    #[test]
    fn test_cell_vertical_align() {
        let xml = hello_cell().vertical_align(VerticalAlignment::Center).serialize().unwrap();
        assert!(xml.contains("<w:vAlign w:val=\"center\"/>"));
    }

    #[test]
    fn test_cell_width() {
        let xml = compact(&Cell::create().width(2400, "dxa").unwrap());
        assert!(xml.contains("<w:tcW w:w=\"2400\" w:type=\"dxa\"/>"));
        assert!(Cell::create().width(0, "dxa").is_err());
        assert!(Cell::create().width(10, "").is_err());
    }

    #[test]
    fn test_cell_vertical_merge() {
        let xml = hello_cell().vertical_merge(Some("RESTART")).unwrap().serialize().unwrap();
        assert!(xml.contains("<w:vMerge w:val=\"RESTART\"/>"));

        let xml = hello_cell().vertical_merge(None).unwrap().serialize().unwrap();
        assert!(xml.contains("<w:vMerge/>"));
    }

    #[test]
    fn test_control_characters_rejected_in_cell_and_table() {
        let cell = Cell::create();
        assert!(cell.shade("auto", "FF\u{1}").is_err());
        assert!(cell.shade("\u{FFFE}", "FFFF00").is_err());
        assert!(cell.width(100, "pc\u{7}t").is_err());
        assert!(cell.vertical_merge(Some("re\u{0}start")).is_err());
        assert!(cell.border_top(4, BorderStyle::Single, Some("\u{1B}"), None).is_err());
        let props = cell.properties();
        assert!(props.shading.is_none());
        assert!(props.width.is_none());
        assert!(props.vertical_merge.is_none());
        assert!(props.borders.is_none());

        let table = Table::create();
        assert!(table.look("01\u{C}0").is_err());
        assert!(table.width(100, "\u{B}").is_err());
        assert!(table.borders(4, BorderStyle::Single, Some("FF\u{2}000"), None).is_err());
        assert!(table.table_borders().is_none());
        assert!(!compact(&table).contains("tblLook"));
    }

    #[test]
    fn test_cell_borders_lazy_and_ordered() {
        let cell = Cell::create();
        assert!(cell.properties().borders.is_none());

        cell.border_right(4, BorderStyle::Single, None, None)
            .unwrap()
            .border_top(6, BorderStyle::Dashed, Some("00FF00"), Some(2))
            .unwrap();
        let xml = compact(&cell);
        let top = xml.find("<w:top").unwrap();
        let right = xml.find("<w:right").unwrap();
        assert!(top < right);
        assert!(xml.contains("<w:tcBorders><w:top w:val=\"dashed\" w:color=\"00FF00\" w:sz=\"6\" w:space=\"2\"/>"));
        assert!(!xml.contains("<w:left"));

        assert!(cell.border_left(1, BorderStyle::Single, None, None).is_err());
    }

    #[test]
    fn test_cell_property_order() {
        let cell = Cell::create()
            .vertical_align(VerticalAlignment::Bottom)
            .shade("auto", "FFFF00")
            .unwrap()
            .border_bottom(8, BorderStyle::Single, None, None)
            .unwrap()
            .vertical_merge(None)
            .unwrap()
            .grid_span(3)
            .unwrap()
            .width(100, "pct")
            .unwrap();
        let xml = compact(&cell);
        let order = ["w:tcW", "w:gridSpan", "w:vMerge", "w:tcBorders", "w:shd", "w:vAlign"];
        let positions: Vec<usize> = order.iter().map(|n| xml.find(n).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_nested_table_in_cell() {
        let inner = hello_table();
        let xml = compact(&Cell::create().add(inner));
        assert!(xml.contains("<w:tc xmlns:w="));
        assert!(xml.contains("<w:tbl><w:tblPr/><w:tblGrid/><w:tr>"));
    }

    // Rows

    #[test]
    fn test_row_property_order() {
        let row = Row::create()
            .add(hello_cell())
            .height(100)
            .unwrap()
            .align(Alignment::Right)
            .cant_split();
        assert_eq!(
            row.properties(),
            vec![
                RowProperty::Height { value: 100, rule: HeightRule::Exact },
                RowProperty::Alignment(Alignment::Right),
                RowProperty::CantSplit(&BOOLEAN_TRUE),
            ]
        );
        let xml = compact(&row);
        assert!(xml.contains(
            "<w:trPr><w:trHeight w:val=\"100\" w:hRule=\"exact\"/><w:jc w:val=\"right\"/><w:cantSplit/></w:trPr>"
        ));
    }

    #[test]
    fn test_row_height_accumulates() {
        let row = Row::create()
            .height(100)
            .unwrap()
            .height_with_rule(200, HeightRule::AtLeast)
            .unwrap();
        assert_eq!(row.properties().len(), 2);
        let xml = compact(&row);
        assert!(xml.contains("<w:trHeight w:val=\"100\" w:hRule=\"exact\"/><w:trHeight w:val=\"200\" w:hRule=\"atLeast\"/>"));
        assert!(Row::create().height(0).is_err());
    }

    #[test]
    fn test_row_without_properties() {
        let xml = compact(&Row::create().add(Cell::create()));
        assert!(!xml.contains("w:trPr"));
        assert!(xml.ends_with("<w:tc></w:tc></w:tr>"));
    }

    // Tables

    #[test]
    fn test_table_add() {
        let xml = hello_table().serialize().unwrap();
        assert!(xml.contains("<w:tbl"));
        assert!(xml.contains("<w:t>Hello, world</w:t>"));
    }

    #[test]
    fn test_table_align() {
        let xml = hello_table().align(Alignment::Right).serialize().unwrap();
        assert!(xml.contains("<w:jc w:val=\"right\"/>"));
    }

    #[test]
    fn test_table_width() {
        let xml = hello_table().width(250, "dxa").unwrap().serialize().unwrap();
        assert!(xml.contains("<w:tblW w:w=\"250\" w:type=\"dxa\"/>"));
        assert!(Table::create().width(250, "").is_err());
        let xml = Table::create().width_auto().serialize().unwrap();
        assert!(xml.contains("<w:tblW w:w=\"0\" w:type=\"auto\"/>"));
    }

    #[test]
    fn test_table_layout() {
        let xml = hello_table().layout(TableLayout::Fixed).serialize().unwrap();
        assert!(xml.contains("<w:tblLayout w:type=\"fixed\"/>"));
    }

    #[test]
    fn test_table_look() {
        let xml = hello_table().look("01E0").unwrap().serialize().unwrap();
        assert!(xml.contains("<w:tblLook w:val=\"01E0\"/>"));
        assert!(Table::create().look("").is_err());
    }

    #[test]
    fn test_table_grid() {
        let table = hello_table().grid(&[100, 200, 300]);
        let xml = compact(&table);
        assert!(xml.contains(
            "<w:tblGrid><w:gridCol w:w=\"100\"/><w:gridCol w:w=\"200\"/><w:gridCol w:w=\"300\"/></w:tblGrid>"
        ));

        table.grid(&[]);
        assert_eq!(table.grid_columns(), Some(vec![100, 200, 300]));
        table.grid(&[50]);
        assert_eq!(table.grid_columns(), Some(vec![50]));
    }

    #[test]
    fn test_table_border_top() {
        let xml = hello_table()
            .border_top(3, BorderStyle::Double, Some("F0E000"), None)
            .unwrap()
            .serialize()
            .unwrap();
        assert!(xml.contains("<w:tblBorders>"));
        assert!(xml.contains("<w:top w:val=\"double\" w:color=\"F0E000\" w:sz=\"3\"/>"));
    }

    #[test]
    fn test_table_border_bottom() {
        let xml = hello_table()
            .border_bottom(10, BorderStyle::ZigZag, Some("001122"), None)
            .unwrap()
            .serialize()
            .unwrap();
        assert!(xml.contains("<w:bottom w:val=\"zigZag\" w:color=\"001122\" w:sz=\"10\"/>"));
    }

    #[test]
    fn test_table_borders_share_one_value() {
        let table = hello_table()
            .borders(3, BorderStyle::Double, Some("F0E000"), None)
            .unwrap();
        let borders = table.table_borders().unwrap();
        let top = borders.top.clone().unwrap();
        for side in [
            &borders.bottom,
            &borders.left,
            &borders.right,
            &borders.inside_h,
            &borders.inside_v,
        ] {
            assert!(Rc::ptr_eq(side.as_ref().unwrap(), &top));
        }

        let xml = compact(&table);
        for name in ["top", "left", "bottom", "right", "insideH", "insideV"] {
            let expected = format!("<w:{} w:val=\"double\" w:color=\"F0E000\" w:sz=\"3\"/>", name);
            assert!(xml.contains(&expected), "missing {}", expected);
        }
        assert!(!xml.contains("w:space"));
    }

    #[test]
    fn test_table_nil_borders() {
        let xml = compact(&Table::create().borders(4, BorderStyle::Nil, None, None).unwrap());
        assert_eq!(xml.matches("w:val=\"nil\"/>").count(), 6);
        assert!(!xml.contains("w:sz"));
    }

    #[test]
    fn test_table_property_order() {
        let table = Table::create()
            .look("04A0")
            .unwrap()
            .layout(TableLayout::Autofit)
            .borders(4, BorderStyle::Single, None, None)
            .unwrap()
            .align(Alignment::Center)
            .width(5000, "pct")
            .unwrap();
        let xml = compact(&table);
        let order = ["w:tblW", "w:jc", "w:tblBorders", "w:tblLayout", "w:tblLook", "w:tblGrid"];
        let positions: Vec<usize> = order.iter().map(|n| xml.find(n).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_mutation_after_add_is_visible() {
        let para = Paragraph::create().text(&["before"]).unwrap();
        let cell = Cell::create().add(para.clone());
        let table = Table::create().add(Row::create().add(cell.clone()));

        para.bold();
        cell.shade("auto", "CCCCCC").unwrap();

        let xml = compact(&table);
        assert!(xml.contains("<w:b/>"));
        assert!(xml.contains("w:fill=\"CCCCCC\""));
    }

    #[test]
    fn test_table_end_to_end() {
        let table = Table::create()
            .borders(4, BorderStyle::Single, Some("FF0000"), None)
            .unwrap()
            .width(0, "auto")
            .unwrap();
        let row = Row::create();
        for text in ["R1C1", "R1C2", "R1C3"] {
            row.add(Cell::create().add(Paragraph::create().text(&[text]).unwrap()));
        }
        table.add(row);

        let xml = table.serialize().unwrap();
        assert_eq!(xml.matches("<w:tbl ").count() + xml.matches("<w:tbl>").count(), 1);
        assert_eq!(xml.matches("<w:tblBorders>").count(), 1);
        for name in ["top", "left", "bottom", "right", "insideH", "insideV"] {
            let expected = format!("<w:{} w:val=\"single\" w:color=\"FF0000\" w:sz=\"4\"/>", name);
            assert!(xml.contains(&expected));
        }
        assert!(xml.contains("<w:tblW w:w=\"0\" w:type=\"auto\"/>"));
        assert_eq!(xml.matches("<w:tr>").count(), 1);
        assert_eq!(xml.matches("<w:tc>").count(), 3);
        for text in ["R1C1", "R1C2", "R1C3"] {
            assert!(xml.contains(&format!("<w:t>{}</w:t>", text)));
        }
    }
}
