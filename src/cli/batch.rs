//! Batch command implementation

use anyhow::Result;
use clap::Args;
use serde_json::Value;
use sms_segments::MessageStats;
use std::path::PathBuf;

use super::utils::{collapse_crlf, load_settings, read_template};

#[derive(Args)]
pub struct BatchArgs {
    /// Template files, one message per file
    #[arg(value_name = "FILES", required = true)]
    pub files: Vec<PathBuf>,

    /// Print JSON Lines instead of a table
    #[arg(long)]
    pub json: bool,

    /// Config file (default: sms-segments.toml or .yml in the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Exit with an error when any template needs more segments than this
    #[arg(long, value_name = "N")]
    pub max_segments: Option<usize>,

    /// Bill a CRLF pair as a single line break
    #[arg(long)]
    pub crlf_as_one: bool,
}

struct Row {
    path: String,
    stats: MessageStats,
}

pub fn run(args: BatchArgs) -> Result<()> {
    let settings = load_settings(args.config.as_deref(), args.max_segments)?;

    let mut rows = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let text = collapse_crlf(read_template(Some(path))?, args.crlf_as_one);
        let stats = settings.calculator.stats(&text);
        tracing::debug!(path = %path.display(), ?stats, "measured template");
        rows.push(Row { path: path.display().to_string(), stats });
    }

    if args.json {
        print!("{}", render_jsonl(&rows)?);
    } else {
        print!("{}", render_table(&rows));
    }

    if let Some(limit) = settings.max_segments {
        let over: Vec<&Row> = rows.iter().filter(|row| row.stats.segments > limit).collect();
        for row in &over {
            tracing::warn!("{} needs {} segments (limit {})", row.path, row.stats.segments, limit);
        }
        if !over.is_empty() {
            anyhow::bail!("{} of {} templates exceed {} segments", over.len(), rows.len(), limit);
        }
    }

    Ok(())
}

fn render_table(rows: &[Row]) -> String {
    let mut out = format!("{:>8}  {:>8}  {}\n", "LENGTH", "SEGMENTS", "PATH");
    for row in rows {
        let stats = &row.stats;
        out.push_str(&format!("{:>8}  {:>8}  {}\n", stats.length, stats.segments, row.path));
    }
    out
}

fn render_jsonl(rows: &[Row]) -> Result<String> {
    let mut lines = Vec::with_capacity(rows.len());
    for row in rows {
        // serde_json's default map is a BTreeMap, so keys come out sorted.
        let mut entry = match serde_json::to_value(row.stats)? {
            Value::Object(map) => map,
            other => anyhow::bail!("Unexpected stats encoding: {}", other),
        };
        entry.insert("path".to_string(), Value::String(row.path.clone()));
        lines.push(serde_json::to_string(&entry)?);
    }
    if lines.is_empty() {
        Ok(String::new())
    } else {
        Ok(format!("{}\n", lines.join("\n")))
    }
}
