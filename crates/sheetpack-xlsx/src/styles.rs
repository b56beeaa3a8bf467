//! `xl/styles.xml` serialization

use sheetpack_core::style::{
    Alignment, BorderEdge, BorderSpec, CellFormat, Color, FillSpec, FontSpec, PatternType,
};
use sheetpack_core::StyleTable;

use crate::xml::{escape_xml, format_number, NS_SPREADSHEETML, XML_DECLARATION};

/// Serialize a style table
///
/// Child elements follow the schema sequence: numFmts, fonts, fills, borders,
/// cellStyleXfs, cellXfs, cellStyles, dxfs, tableStyles.
pub fn styles_xml(table: &StyleTable) -> String {
    let mut xml = String::from(XML_DECLARATION);
    xml.push_str(&format!("\n<styleSheet xmlns=\"{}\">", NS_SPREADSHEETML));

    let numfmts = table.number_formats();
    if !numfmts.is_empty() {
        xml.push_str(&format!("\n  <numFmts count=\"{}\">", numfmts.len()));
        for fmt in numfmts {
            xml.push_str(&format!(
                "\n    <numFmt numFmtId=\"{}\" formatCode=\"{}\"/>",
                fmt.id,
                escape_xml(&fmt.code)
            ));
        }
        xml.push_str("\n  </numFmts>");
    }

    // Fonts
    xml.push_str(&format!("\n  <fonts count=\"{}\">", table.fonts().len()));
    for font in table.fonts() {
        xml.push_str("\n    ");
        xml.push_str(&write_font(font));
    }
    xml.push_str("\n  </fonts>");

    // Fills
    xml.push_str(&format!("\n  <fills count=\"{}\">", table.fills().len()));
    for fill in table.fills() {
        xml.push_str("\n    ");
        xml.push_str(&write_fill(fill));
    }
    xml.push_str("\n  </fills>");

    // Borders
    xml.push_str(&format!("\n  <borders count=\"{}\">", table.borders().len()));
    for border in table.borders() {
        xml.push_str("\n    ");
        xml.push_str(&write_border(border));
    }
    xml.push_str("\n  </borders>");

    // cellStyleXfs (required)
    xml.push_str(
        r#"
  <cellStyleXfs count="1">
    <xf numFmtId="0" fontId="0" fillId="0" borderId="0"/>
  </cellStyleXfs>"#,
    );

    // cellXfs
    xml.push_str(&format!("\n  <cellXfs count=\"{}\">", table.cell_formats().len()));
    for format in table.cell_formats() {
        xml.push_str("\n    ");
        xml.push_str(&write_xf(format));
    }
    xml.push_str("\n  </cellXfs>");

    // cellStyles (required)
    xml.push_str(
        r#"
  <cellStyles count="1">
    <cellStyle name="Normal" xfId="0" builtinId="0"/>
  </cellStyles>
  <dxfs count="0"/>
  <tableStyles count="0" defaultTableStyle="TableStyleMedium9" defaultPivotStyle="PivotStyleLight16"/>"#,
    );

    xml.push_str("\n</styleSheet>");
    xml
}

fn write_color(tag: &str, color: &Color) -> String {
    match color {
        Color::Auto => format!("<{tag} auto=\"1\"/>"),
        Color::Theme(index) => format!("<{tag} theme=\"{}\"/>", index),
        Color::Indexed(i) => format!("<{tag} indexed=\"{}\"/>", i),
        Color::Rgb { .. } | Color::Argb { .. } => match color.to_argb_hex() {
            Some(hex) => format!("<{tag} rgb=\"{}\"/>", hex),
            None => format!("<{tag} auto=\"1\"/>"),
        },
    }
}

fn write_font(font: &FontSpec) -> String {
    let mut s = String::from("<font>");
    if font.bold {
        s.push_str("<b/>");
    }
    if font.italic {
        s.push_str("<i/>");
    }
    s.push_str(&format!("<sz val=\"{}\"/>", format_number(font.size)));
    if font.color != Color::Auto {
        s.push_str(&write_color("color", &font.color));
    }
    s.push_str(&format!("<name val=\"{}\"/>", escape_xml(&font.name)));
    if let Some(family) = font.family {
        s.push_str(&format!("<family val=\"{}\"/>", family));
    }
    if let Some(scheme) = font.scheme {
        s.push_str(&format!("<scheme val=\"{}\"/>", scheme.as_str()));
    }
    s.push_str("</font>");
    s
}

fn write_fill(fill: &FillSpec) -> String {
    if fill.pattern == PatternType::None && fill.foreground.is_none() && fill.background.is_none() {
        return "<fill><patternFill patternType=\"none\"/></fill>".to_string();
    }

    let mut s = format!("<fill><patternFill patternType=\"{}\"", fill.pattern.as_str());
    if fill.foreground.is_none() && fill.background.is_none() {
        s.push_str("/></fill>");
        return s;
    }
    s.push('>');
    if let Some(fg) = &fill.foreground {
        s.push_str(&write_color("fgColor", fg));
    }
    if let Some(bg) = &fill.background {
        s.push_str(&write_color("bgColor", bg));
    }
    s.push_str("</patternFill></fill>");
    s
}

fn write_border_edge(tag: &str, edge: &Option<BorderEdge>) -> String {
    let Some((edge, style)) = edge.and_then(|e| e.style.as_str().map(|s| (e, s))) else {
        return format!("<{tag}/>");
    };
    match &edge.color {
        Some(color) => format!(
            "<{tag} style=\"{}\">{}</{tag}>",
            style,
            write_color("color", color)
        ),
        None => format!("<{tag} style=\"{}\"/>", style),
    }
}

fn write_border(border: &BorderSpec) -> String {
    let mut s = String::from("<border>");
    s.push_str(&write_border_edge("left", &border.left));
    s.push_str(&write_border_edge("right", &border.right));
    s.push_str(&write_border_edge("top", &border.top));
    s.push_str(&write_border_edge("bottom", &border.bottom));
    s.push_str(&write_border_edge("diagonal", &border.diagonal));
    s.push_str("</border>");
    s
}

fn write_alignment(al: &Alignment) -> String {
    let mut s = String::from("<alignment");
    if let Some(h) = al.horizontal {
        s.push_str(&format!(" horizontal=\"{}\"", h.as_str()));
    }
    if let Some(v) = al.vertical {
        s.push_str(&format!(" vertical=\"{}\"", v.as_str()));
    }
    if al.wrap_text {
        s.push_str(" wrapText=\"1\"");
    }
    s.push_str("/>");
    s
}

fn write_xf(format: &CellFormat) -> String {
    let flags = &format.flags;
    let mut attrs = String::new();
    if flags.apply_number_format {
        attrs.push_str(" applyNumberFormat=\"1\"");
    }
    if flags.apply_font {
        attrs.push_str(" applyFont=\"1\"");
    }
    if flags.apply_fill {
        attrs.push_str(" applyFill=\"1\"");
    }
    if flags.apply_border {
        attrs.push_str(" applyBorder=\"1\"");
    }
    if flags.alignment.is_some() {
        attrs.push_str(" applyAlignment=\"1\"");
    }

    let mut s = format!(
        "<xf numFmtId=\"{}\" fontId=\"{}\" fillId=\"{}\" borderId=\"{}\" xfId=\"0\"{}",
        format.num_fmt_id, format.font_id, format.fill_id, format.border_id, attrs
    );
    match &flags.alignment {
        Some(al) => {
            s.push('>');
            s.push_str(&write_alignment(al));
            s.push_str("</xf>");
        }
        None => s.push_str("/>"),
    }
    s
}
