use std::io::Write as _;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::info;

use crate::cli::OutputFormat;
use crate::comparison::{Comparison, ComparisonConfig, ComparisonEngine, Summary};
use crate::core::kmer::KmerLength;
use crate::parsing::manifest::parse_manifest_file;
use crate::utils::validation::{
    parse_flush_threshold, parse_kmer_length, DEFAULT_FLUSH_THRESHOLD,
};

#[derive(Args)]
pub struct CompareArgs {
    /// File listing the FASTA files to compare, one path per line
    #[arg(required = true)]
    pub manifest: PathBuf,

    /// Length of the k-mers to extract (positive integer)
    #[arg(required = true, value_parser = parse_kmer_length)]
    pub kmer_length: KmerLength,

    /// Bases buffered per record before k-merizing it in pieces
    #[arg(
        long,
        value_name = "BASES",
        default_value_t = DEFAULT_FLUSH_THRESHOLD,
        value_parser = parse_flush_threshold
    )]
    pub flush_threshold: usize,
}

/// Execute the comparison and print the report.
///
/// Nothing is printed to stdout unless every input file was parsed.
///
/// # Errors
///
/// Returns an error if the manifest or any listed file cannot be read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CompareArgs, format: OutputFormat) -> anyhow::Result<()> {
    let files = parse_manifest_file(&args.manifest)
        .with_context(|| format!("Failed to load manifest {}", args.manifest.display()))?;
    info!("Comparing {} files with k = {}", files.len(), args.kmer_length);

    let config =
        ComparisonConfig::new(args.kmer_length).with_flush_threshold(args.flush_threshold);
    let comparison = ComparisonEngine::new(config).run(files)?;
    let summary = Summary::from_table(&comparison.files, &comparison.table)?;

    let report = match format {
        OutputFormat::Text => format_text_report(&summary),
        OutputFormat::Json => format_json_report(&comparison, &summary)?,
    };

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(report.as_bytes())
        .context("Failed to write report")?;
    stdout.flush().context("Failed to write report")?;

    Ok(())
}

/// Tab-separated report: file patterns, pattern histogram, total
#[must_use]
pub fn format_text_report(summary: &Summary) -> String {
    let mut out = String::from("Filenames\tValues\n");
    for row in &summary.files {
        out.push_str(&format!("{}\t{}\n", row.path.display(), row.color));
    }

    out.push_str("\nVirtualColor\tCount\tPercentage\n");
    for row in &summary.colors {
        out.push_str(&format!(
            "{}\t{}\t{:.2}\n",
            row.color, row.count, row.percentage
        ));
    }

    out.push_str(&format!("\nUnique k-mers total count\t{}\n", summary.total));
    out
}

fn format_json_report(comparison: &Comparison, summary: &Summary) -> anyhow::Result<String> {
    let files: Vec<serde_json::Value> = summary
        .files
        .iter()
        .zip(&comparison.file_stats)
        .map(|(row, stats)| {
            serde_json::json!({
                "path": row.path.display().to_string(),
                "pattern": row.color,
                "records": stats.records,
                "bases": stats.bases,
                "kmers": stats.kmers,
            })
        })
        .collect();

    let output = serde_json::json!({
        "kmer_length": comparison.kmer_length.get(),
        "files": files,
        "colors": summary.colors,
        "total": summary.total,
    });

    let mut text = serde_json::to_string_pretty(&output)?;
    text.push('\n');
    Ok(text)
}
