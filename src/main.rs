//! sms-segments: measure SMS message templates from the command line
//!
//! Reports the billed length and carrier segment count of a template, the same
//! numbers a composer's live counter shows and the send pipeline bills.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
