//! A minimal SVG document holding the screenshot and the links drawn over
//! it.
use crate::portals::{Color, Rect};
use crate::vertex::Vertex;
use std::fmt;
use std::io::{self, Write};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

pub const LINK_COLOR: Color = Color::new(255, 0, 0);
pub const PORTAL_COLOR: Color = Color::new(0, 0, 0);

#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Image {
        href: String,
        width: u32,
        height: u32,
    },
    Line {
        from: Vertex,
        to: Vertex,
        color: Color,
    },
    Circle {
        center: Vertex,
        radius: i64,
        color: Color,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Svg {
    pub width: u32,
    pub height: u32,
    pub elements: Vec<Element>,
}

impl Svg {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            elements: Vec::with_capacity(1024),
        }
    }

    /// Show the image at `href` under everything else.
    pub fn add_image(&mut self, href: impl Into<String>, width: u32, height: u32) {
        self.elements.push(Element::Image {
            href: href.into(),
            width,
            height,
        });
    }

    pub fn add_link(&mut self, from: Vertex, to: Vertex) {
        self.elements.push(Element::Line {
            from,
            to,
            color: LINK_COLOR,
        });
    }

    pub fn add_portal(&mut self, portal: Rect) {
        let radius = portal.width() / 2;
        self.elements.push(Element::Circle {
            center: Vertex::new(portal.min.x + radius, portal.min.y + radius),
            radius,
            color: PORTAL_COLOR,
        });
    }

    pub fn write_to<W: Write>(&self, mut w: W) -> io::Result<()> {
        write!(w, "{}", self)
    }
}

impl fmt::Display for Svg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            r#"<svg version="1.1" height="{}" width="{}" xmlns="{}" xmlns:xlink="{}">"#,
            self.height, self.width, SVG_NS, XLINK_NS
        )?;
        for element in self.elements.iter() {
            f.write_str("\t")?;
            match element {
                Element::Image {
                    href,
                    width,
                    height,
                } => writeln!(
                    f,
                    r#"<image xlink:href="{}" x="0" y="0" width="{}" height="{}"></image>"#,
                    escape(href),
                    width,
                    height
                )?,
                Element::Line { from, to, color } => writeln!(
                    f,
                    r#"<line x1="{}" x2="{}" y1="{}" y2="{}" style="stroke:rgb({},{},{});stroke-width:1.5"></line>"#,
                    from.x, to.x, from.y, to.y, color.r, color.g, color.b
                )?,
                Element::Circle {
                    center,
                    radius,
                    color,
                } => writeln!(
                    f,
                    r#"<circle cx="{}" cy="{}" r="{}" style="stroke:rgb({},{},{});stroke-width:1;opacity:0.5;"></circle>"#,
                    center.x, center.y, radius, color.r, color.g, color.b
                )?,
            }
        }
        writeln!(f, "</svg>")
    }
}

/// Escape text for use inside a double quoted attribute.
fn escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
