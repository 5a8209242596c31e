//! Table building demo.
//!
//! Builds two tables, one with red single-line borders and automatic width and
//! one without borders at half the page width, and prints the document XML.
//!
//! Run with:
//! ```bash
//! cargo run --example table_demo
//! ```

use docx_fluent::{BorderStyle, Cell, DocumentBody, Paragraph, Row, Table};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut body = DocumentBody::new();

    body.add(Paragraph::create().text(&["Table with single line border width 12 and width set to auto"])?);
    let first = Table::create()
        .borders(12, BorderStyle::Single, Some("FF0000"), None)?
        .width_auto();
    add_rows_and_cells(&first)?;
    body.add(first);

    body.add(Paragraph::create().text(&["Table with no line border and 50% width"])?);
    // 2500 fiftieths of a percent = 50%
    let second = Table::create()
        .borders(4, BorderStyle::Nil, None, None)?
        .width(2500, "pct")?;
    add_rows_and_cells(&second)?;
    body.add(second);

    println!("{}", body.to_xml()?);
    Ok(())
}

fn add_rows_and_cells(table: &Table) -> docx_fluent::Result<()> {
    for r in 1..=2 {
        let row = Row::create();
        for c in 1..=3 {
            let text = format!("R{}C{}", r, c);
            row.add(Cell::create().add(Paragraph::create().text(&[text.as_str()])?));
        }
        table.add(row);
    }
    Ok(())
}
