use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::{debug, info, warn};

use crate::aggregate::SizeTree;
use crate::nm::SymbolTableParser;
use crate::options::Options;
use crate::report::ReportConfig;

mod aggregate;
mod human_size;
mod longest_common_prefix;
mod nm;
mod options;
mod record;
mod report;

pub mod size_tree;

fn main() -> anyhow::Result<()> {
    let options = Options::parse();

    let log_level = if options.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();
    debug!("{options:#?}");

    // Read symbol table lines from input and insert the sized ones into the tree.
    let input: Box<dyn BufRead> = if let Some(file) = &options.input {
        let file = File::open(file).with_context(|| format!("cannot open '{}'", file.display()))?;
        Box::new(BufReader::new(file))
    } else {
        Box::new(io::stdin().lock())
    };

    let mut parser = SymbolTableParser::new(options.symbols, options.placeholder_len)?;
    let mut tree = SizeTree::new();
    for (i, line) in input.lines().enumerate() {
        let line = line.with_context(|| format!("cannot read input line {}", i + 1))?;
        let record = parser
            .parse_line(&line)
            .with_context(|| format!("input line {}: '{line}'", i + 1))?;
        if let Some(record) = record {
            tree.insert(&record);
        }
    }
    info!("{}", parser.stats());
    if tree.is_empty() {
        warn!("no sized symbols in input, the report is empty");
    }
    let distinct = tree.len();

    // Sum up subtree sizes and make the node labels unique.
    let report = tree.finalize();
    info!("{distinct} distinct entries, {} bytes in total", report.total_size());

    // Write report to output. Only create the output file once the input was fully processed.
    let mut output: Box<dyn io::Write> = if let Some(file) = &options.output {
        let file = File::create(file).with_context(|| format!("cannot create '{}'", file.display()))?;
        Box::new(BufWriter::new(file))
    } else {
        Box::new(io::stdout().lock())
    };

    let config = ReportConfig::new()
        .with_title(options.title.as_str())
        .with_max_depth(options.max_depth)
        .with_indent(options.indent_with.as_str());
    report::write_report(&mut output, &report, options.format, &config)?;
    output.flush()?;

    Ok(())
}
