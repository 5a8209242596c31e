//! Paragraph formatting demo.
//!
//! Builds a few paragraphs with different fonts, colors and alignments and
//! prints the resulting main document part.
//!
//! Run with:
//! ```bash
//! cargo run --example paragraph_demo
//! ```

use docx_fluent::{Alignment, DocumentBody, Paragraph, color_to_hex};

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Morbi nec dolor \
non erat lacinia porta. Vestibulum condimentum eleifend euismod. In viverra lacus ut justo \
posuere ullamcorper vitae id ipsum. Sed vestibulum sagittis ipsum, in rhoncus justo imperdiet et.";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut body = DocumentBody::new();

    body.add(Paragraph::create().text(&["No formatting"])?);

    body.add(
        Paragraph::create()
            .text(&["Tahoma 24 red right aligned"])?
            .font("Tahoma", 24)?
            .color("FF0000")?
            .align(Alignment::Right),
    );

    body.add(
        Paragraph::create()
            .text(&["Verdana 16 bold blue center aligned"])?
            .font("Verdana", 16)?
            .bold()
            .color(&color_to_hex(0x0000FF))?
            .align(Alignment::Center),
    );

    body.add(
        Paragraph::create()
            .text(&["Verdana 6 Italic justified", LOREM])?
            .font("Verdana", 6)?
            .italic()
            .align(Alignment::Justify),
    );

    println!("{}", body.to_xml()?);
    Ok(())
}
