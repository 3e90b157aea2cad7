//! The main module contains the code to process the command line for the doublet program and
//! run the path search.

mod path_generator;
mod path_printer;
mod search_parameters;
mod strategies_info;

use crate::path_generator::{generate_path, report_result};
use crate::strategies_info::display_strategies_info;
use chrono::Local;
use clap::Parser;
use env_logger::TimestampPrecision;
use std::io::Write;

#[derive(Parser, Debug, Clone)]
#[command(author, version, long_about = None)]
#[command(about = "Find a shortest chain of one-letter changes between two words.")]
pub struct DoubletCLArgs {
    /// The word the path starts from
    #[arg(required_unless_present_any = ["list_strategies", "describe_strategies"])]
    pub start: Option<String>,

    /// The word the path ends at
    #[arg(required_unless_present_any = ["list_strategies", "describe_strategies"])]
    pub end: Option<String>,

    /// Wrap every word except the first and the end word in spoiler markup
    #[arg(short, long)]
    pub discord: bool,

    /// Print plain words even if the configuration file asks for spoiler markup
    #[arg(long, conflicts_with = "discord")]
    pub no_discord: bool,

    /// Only allow same-length substitutions (a classic word ladder), takes precedence over
    /// --strategy
    #[arg(short, long)]
    pub ladder: bool,

    /// Newline delimited word list [default: words.txt]
    #[arg(long)]
    pub dictionary: Option<String>,

    /// Mutation strategy to search with [default: Doublet]
    #[arg(short, long)]
    pub strategy: Option<String>,

    /// Give up after expanding this many words
    #[arg(long)]
    pub max_expansions: Option<usize>,

    /// Longest word the rearrangement strategy will permute [default: 7]
    #[arg(long, conflicts_with = "no_rearrangement_limit")]
    pub max_rearrangement_length: Option<usize>,

    /// Permute words of any length
    #[arg(long)]
    pub no_rearrangement_limit: bool,

    /// Read search settings from a configuration (.dblt) file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Save the effective search settings to a configuration (.dblt) file
    #[arg(long)]
    pub save_config: Option<String>,

    /// List the available mutation strategies
    #[arg(long)]
    pub list_strategies: bool,

    /// Describe the available mutation strategies
    #[arg(long)]
    pub describe_strategies: bool,
}

fn main() {
    let _ = env_logger::builder()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .format_timestamp(Some(TimestampPrecision::Seconds))
        .try_init();

    let doublet_args = DoubletCLArgs::parse();

    if doublet_args.list_strategies || doublet_args.describe_strategies {
        if let Err(e) = display_strategies_info(&doublet_args) {
            println!("Unable to display mutation strategies: {}", e);
        }
        return;
    }

    let start = doublet_args.start.as_deref().unwrap_or_default();
    let end = doublet_args.end.as_deref().unwrap_or_default();

    let mut stdout = std::io::stdout().lock();
    let result = generate_path(&doublet_args, &mut stdout);
    if let Err(e) = report_result(&mut stdout, result, start, end) {
        log::error!("Unable to write to stdout: {}", e);
    }
}
