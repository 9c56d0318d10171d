//! Count command implementation

use anyhow::Result;
use clap::Args;
use sms_segments::MessageStats;
use std::path::PathBuf;

use super::utils::{check_limit, collapse_crlf, load_settings, read_template};

#[derive(Args)]
pub struct CountArgs {
    /// Message template (read from --file or stdin when omitted)
    #[arg(value_name = "TEXT", conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the template from this file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Print the breakdown as JSON
    #[arg(long)]
    pub json: bool,

    /// Config file (default: sms-segments.toml or .yml in the current directory)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Exit with an error when the template needs more segments than this
    #[arg(long, value_name = "N")]
    pub max_segments: Option<usize>,

    /// Bill a CRLF pair as a single line break
    #[arg(long)]
    pub crlf_as_one: bool,
}

pub fn run(args: CountArgs) -> Result<()> {
    let settings = load_settings(args.config.as_deref(), args.max_segments)?;

    let text = match args.text {
        Some(text) => text,
        None => read_template(args.file.as_deref())?,
    };
    let text = collapse_crlf(text, args.crlf_as_one);

    let stats = settings.calculator.stats(&text);
    tracing::debug!(?stats, "measured template");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print!("{}", render_text(&stats));
    }

    check_limit(stats.segments, settings.max_segments)
}

fn render_text(stats: &MessageStats) -> String {
    format!(
        "Length: {}\nSegments: {}\nRemaining: {}\nLine breaks: {}\nURL tags: {}\nGeneric tags: {}\n",
        stats.length,
        stats.segments,
        stats.remaining,
        stats.line_breaks,
        stats.url_tags,
        stats.generic_tags,
    )
}
