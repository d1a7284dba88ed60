use std::path::PathBuf;

use clap::Parser;
use clap::ValueHint;

use crate::report::OutputFormat;

#[derive(Parser, Debug)]
#[clap(
    author = clap::crate_authors!(),
    version = clap::crate_version!(),
    about = clap::crate_description!(),
)]
pub struct Options {
    /// Symbol table to read, as printed by `nm -ClSp <binary>`. [default: stdin]
    #[clap(value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Output file to write the report to. [default: stdout]
    #[clap(short, long = "out", value_name = "file", value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Format of the report: an HTML page with a treemap, one JSON row per node,
    /// or an indented tree.
    /// [default: html]
    #[clap(short, long, default_value = "html", value_name = "h[tml]|r[ows]|t[ree]", hide_default_value = true)]
    pub format: OutputFormat,

    /// Break down the size of each file further by symbol.
    /// This drastically increases the size of the report.
    /// [default: false]
    #[clap(short, long)]
    pub symbols: bool,

    /// Title of the HTML report.
    #[clap(short, long, default_value = "Size of some binary", value_name = "string")]
    pub title: String,

    /// Number of tree levels the treemap shows at once.
    #[clap(long, default_value_t = 2, value_name = "levels")]
    pub max_depth: usize,

    /// For symbols without a source file, group by this many leading characters of the symbol.
    #[clap(long, default_value_t = 10, value_name = "chars")]
    pub placeholder_len: usize,

    /// Character(s) with which to indent levels of the tree format. [default: "  "]
    #[clap(short, long, default_value = "  ", value_name = "string", hide_default_value = true)]
    pub indent_with: String,

    /// Log debug output to stderr. The RUST_LOG environment variable takes precedence.
    #[clap(short, long)]
    pub verbose: bool,
}

#[test]
fn parse_options() {
    let options = Options::try_parse_from(["size-report", "binary.txt", "-o", "index.html", "-s", "--max-depth=3"]).unwrap();
    assert_eq!(options.input, Some(PathBuf::from("binary.txt")));
    assert_eq!(options.output, Some(PathBuf::from("index.html")));
    assert_eq!(options.format, OutputFormat::Html);
    assert!(options.symbols);
    assert_eq!(options.max_depth, 3);
    assert_eq!(options.placeholder_len, 10);
    assert_eq!(options.indent_with, "  ");

    let options = Options::try_parse_from(["size-report", "-f", "rows"]).unwrap();
    assert_eq!(options.input, None);
    assert_eq!(options.format, OutputFormat::Rows);

    assert!(Options::try_parse_from(["size-report", "--format=pdf"]).is_err());
}
