//! XML mapping document.
//!
//! A run is written as:
//!
//! ```text
//! <?xml version='1.0' encoding='utf-8'?>
//! <TEST NAME="{run name}" FILE="{original file name}">
//!   <VERSION NUMBER="1" CHECKED="TRUE">
//!     <LOCATION ORIG="1" NEW="1"/>
//!     <LOCATION ORIG="2" NEW="-1"/>
//!   </VERSION>
//! </TEST>
//! ```
//!
//! Absent sides are written as the literal `-1`.
//!
//! Empty elements close with `/>` and no preceding space. Documents produced
//! by Python's ElementTree write ` />` instead, so files from that writer
//! differ at the byte level on every `LOCATION` line while carrying the same
//! XML content.

use std::path::{Path, PathBuf};

use linemap_types::{AlignmentRun, LocationMapping, VersionResult};
use tracing::info;

use crate::error::{IoError, IoResult};
use crate::naming::output_file_name;

const DECLARATION: &str = "<?xml version='1.0' encoding='utf-8'?>";
const INDENT: &str = "  ";

/// A minimal element tree; attributes keep insertion order.
struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Element>,
}

impl Element {
    fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    fn attr(mut self, name: &'static str, value: impl ToString) -> Self {
        self.attrs.push((name, value.to_string()));
        self
    }

    fn write(&self, out: &mut String, depth: usize) {
        for _ in 0..depth {
            out.push_str(INDENT);
        }
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(&escape_attr(value));
            out.push('"');
        }

        if self.children.is_empty() {
            out.push_str("/>");
            return;
        }

        out.push('>');
        for child in &self.children {
            out.push('\n');
            child.write(out, depth + 1);
        }
        out.push('\n');
        for _ in 0..depth {
            out.push_str(INDENT);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

/// Escape an attribute value. Whitespace control characters are written as
/// character references so they survive attribute-value normalization.
fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\n' => out.push_str("&#10;"),
            '\r' => out.push_str("&#13;"),
            '\t' => out.push_str("&#09;"),
            _ => out.push(ch),
        }
    }
    out
}

fn location_element(mapping: &LocationMapping) -> Element {
    Element::new("LOCATION")
        .attr("ORIG", mapping.orig())
        .attr("NEW", mapping.new_line())
}

fn version_element(version: &VersionResult) -> Element {
    let mut element = Element::new("VERSION")
        .attr("NUMBER", version.number)
        .attr("CHECKED", "TRUE");
    element.children = version.mappings.iter().map(location_element).collect();
    element
}

/// Serialize a run as an XML document, declaration included.
pub fn render_document(run: &AlignmentRun) -> String {
    let mut root = Element::new("TEST")
        .attr("NAME", &run.run_name)
        .attr("FILE", &run.original_file_name);
    root.children = run.versions.iter().map(version_element).collect();

    let mut out = String::from(DECLARATION);
    out.push('\n');
    root.write(&mut out, 0);
    out
}

/// Write the run's document into `dir`, named after the sanitized run name.
///
/// Returns the path of the written file.
pub fn write_document(run: &AlignmentRun, dir: impl AsRef<Path>) -> IoResult<PathBuf> {
    let path = dir.as_ref().join(output_file_name(&run.run_name));
    let document = render_document(run);

    std::fs::write(&path, document.as_bytes()).map_err(|source| IoError::Write {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), versions = run.versions.len(), "mapping document written");
    Ok(path)
}
