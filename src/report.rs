//! Emits a finalized tree as flat rows of `(label, parent label, size, value)`, and writes those
//! rows as a treemap document or other formats.

use std::io;
use std::str::FromStr;

use thiserror::Error;

use crate::size_tree::{NamePath, SizeNode};

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    WriteFailed(#[from] io::Error),

    #[error("failed to serialize row: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

/// One row of the report, as consumed by treemap renderers that build the tree from a flat list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRow<'a> {
    pub label: &'a str,
    /// `None` for the root.
    pub parent: Option<&'a str>,
    /// The size of leafs. Interior nodes report 0, renderers sum up the children themselves.
    pub size: u64,
    /// Reserved (color value in the treemap), always 0.
    pub value: u64,
}

impl ReportRow<'_> {
    /// E.g., `["5 B a/c.cc","42 B a",5,0]`.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&(self.label, self.parent, self.size, self.value))
    }
}

/// A finalized, read-only tree, see `SizeTree::finalize`.
#[derive(Debug, Clone)]
pub struct Report {
    total_size: u64,
    root: Option<SizeNode>,
}

impl Report {
    pub(crate) fn new(total_size: u64, root: Option<SizeNode>) -> Self {
        Self { total_size, root }
    }

    pub fn total_size(&self) -> u64 {
        self.total_size
    }

    pub fn root(&self) -> Option<&SizeNode> {
        self.root.as_ref()
    }

    /// Calls `sink` for every node in pre-order, i.e., a parent row is always emitted before the
    /// rows of its children. Stops at the first error returned by `sink`.
    pub fn emit<E>(&self, mut sink: impl FnMut(ReportRow<'_>) -> Result<(), E>) -> Result<(), E> {
        let Some(root) = &self.root else {
            return Ok(());
        };
        // Labels of the ancestors of the current node.
        let mut labels: Vec<String> = Vec::new();
        let mut visit = |path: &NamePath, node: &SizeNode| -> Result<(), E> {
            labels.truncate(path.depth());
            let label = node.label(path.as_str());
            sink(ReportRow {
                label: &label,
                parent: labels.last().map(String::as_str),
                size: if node.is_leaf() { node.size() } else { 0 },
                value: 0,
            })?;
            labels.push(label);
            Ok(())
        };
        root.try_internal_iter(&mut visit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Self-contained HTML page with a treemap chart.
    Html,
    /// One JSON array per line and node.
    Rows,
    /// Indented labels, for a quick look in the terminal.
    Tree,
}

impl FromStr for OutputFormat {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "h" | "html" => Ok(OutputFormat::Html),
            "r" | "rows" => Ok(OutputFormat::Rows),
            "t" | "tree" => Ok(OutputFormat::Tree),
            _ => Err("output format must be either 'html', 'rows', or 'tree'"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Title of the HTML page.
    pub title: String,
    /// Number of levels the treemap shows at once.
    pub max_depth: usize,
    /// Indentation per level in the tree format.
    pub indent_with: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "Size of some binary".to_owned(),
            max_depth: 2,
            indent_with: "  ".to_owned(),
        }
    }
}

impl ReportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_indent(mut self, indent_with: impl Into<String>) -> Self {
        self.indent_with = indent_with.into();
        self
    }
}

pub fn write_report(
    output: &mut impl io::Write,
    report: &Report,
    format: OutputFormat,
    config: &ReportConfig,
) -> Result<(), ReportError> {
    match format {
        OutputFormat::Html => write_html(output, report, config),
        OutputFormat::Rows => report.emit(|row| -> Result<(), ReportError> {
            writeln!(output, "{}", row.to_json()?)?;
            Ok(())
        }),
        OutputFormat::Tree => write_tree(output, report, config),
    }
}

const HTML_HEAD: &str = r#"<!DOCTYPE html>
<title>{title}</title>
<script src="https://www.gstatic.com/charts/loader.js"></script>
<style>
body {
  margin: 0;
}
#chart {
  width: 100vw;
  height: 100vh;
}
</style>
<div id="chart"></div>
<script>
google.charts.load('current', {'packages':['treemap']});
google.charts.setOnLoadCallback(draw_chart);
function draw_chart() {
  let data = google.visualization.arrayToDataTable([
"#;

const HTML_TAIL: &str = r#"  ]);
  let tree = new google.visualization.TreeMap(chart);
  tree.draw(data, {
    maxDepth: {max_depth},
    showScale: false
  });
}
</script>
"#;

fn write_html(output: &mut impl io::Write, report: &Report, config: &ReportConfig) -> Result<(), ReportError> {
    output.write_all(HTML_HEAD.replace("{title}", &escape_html(&config.title)).as_bytes())?;
    writeln!(output, r#"    ["Path", "Parent", "Size", "Value"],"#)?;
    report.emit(|row| -> Result<(), ReportError> {
        writeln!(output, "    {},", row.to_json()?)?;
        Ok(())
    })?;
    output.write_all(HTML_TAIL.replace("{max_depth}", &config.max_depth.to_string()).as_bytes())?;
    Ok(())
}

fn write_tree(output: &mut impl io::Write, report: &Report, config: &ReportConfig) -> Result<(), ReportError> {
    let Some(root) = report.root() else {
        return Ok(());
    };
    let mut visit = |path: &NamePath, node: &SizeNode| -> Result<(), ReportError> {
        write!(output, "{}", config.indent_with.repeat(path.depth()))?;
        writeln!(output, "{}", node.label(path.as_str()))?;
        Ok(())
    };
    root.try_internal_iter(&mut visit)
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
