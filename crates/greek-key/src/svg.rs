//! SVG output - serialize generated geometry as a standalone SVG document.
//!
//! The contour becomes a single `<path>`, rectangular frames become `<rect>`
//! and circular frames `<circle>`. Every element is stroked with the same
//! [`Style`] and left unfilled.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};

use crate::config::Style;
use crate::contour::fmt_coord;
use crate::error::SvgError;
use crate::frame::Frame;
use crate::pattern::KeyGeometry;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Render geometry and style into an SVG document string.
pub fn to_svg_document(geometry: &KeyGeometry, style: &Style) -> Result<String, SvgError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    write(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let width = fmt_coord(geometry.canvas.width);
    let height = fmt_coord(geometry.canvas.height);
    let view_box = format!("0 0 {} {}", width, height);

    let mut root = BytesStart::new("svg");
    root.push_attribute(("xmlns", SVG_NS));
    root.push_attribute(("width", width.as_str()));
    root.push_attribute(("height", height.as_str()));
    root.push_attribute(("viewBox", view_box.as_str()));
    write(&mut writer, Event::Start(root))?;

    let mut path = BytesStart::new("path");
    path.push_attribute(("d", geometry.contour.to_path_data().as_str()));
    push_stroke(&mut path, style);
    write(&mut writer, Event::Empty(path))?;

    for frame in &geometry.frames {
        write(&mut writer, Event::Empty(frame_element(frame, style)))?;
    }

    write(&mut writer, Event::End(BytesEnd::new("svg")))?;

    let svg = String::from_utf8(writer.into_inner())?;
    tracing::debug!(bytes = svg.len(), frames = geometry.frames.len(), "wrote SVG document");
    Ok(svg)
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), SvgError> {
    writer
        .write_event(event)
        .map_err(|e| SvgError::Write(e.to_string()))
}

fn frame_element(frame: &Frame, style: &Style) -> BytesStart<'static> {
    let mut elem = match *frame {
        Frame::Rect { x, y, width, height } => {
            let mut e = BytesStart::new("rect");
            e.push_attribute(("x", fmt_coord(x).as_str()));
            e.push_attribute(("y", fmt_coord(y).as_str()));
            e.push_attribute(("width", fmt_coord(width).as_str()));
            e.push_attribute(("height", fmt_coord(height).as_str()));
            e
        }
        Frame::Circle { center, radius } => {
            let mut e = BytesStart::new("circle");
            e.push_attribute(("cx", fmt_coord(center.x).as_str()));
            e.push_attribute(("cy", fmt_coord(center.y).as_str()));
            e.push_attribute(("r", fmt_coord(radius).as_str()));
            e
        }
    };
    push_stroke(&mut elem, style);
    elem
}

fn push_stroke(elem: &mut BytesStart<'_>, style: &Style) {
    elem.push_attribute(("fill", "none"));
    elem.push_attribute(("stroke", style.stroke_color.as_str()));
    elem.push_attribute(("stroke-width", fmt_coord(style.stroke_width).as_str()));
    elem.push_attribute(("stroke-opacity", fmt_coord(style.stroke_opacity).as_str()));
}
