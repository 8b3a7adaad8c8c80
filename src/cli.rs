//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tiny_argsplit_rs::text::has_digits_only;

/// Split command lines into process arguments.
#[derive(Parser, Debug)]
#[command(name = "tiny-argsplit")]
#[command(version, about)]
pub struct Args {
    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// key=value settings file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Separate tokens with NUL instead of newlines
    #[arg(short = '0', long, global = true)]
    pub null: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Quote-aware split; reads stdin when no line is given.
    /// Put lines starting with '-' after `--`.
    Split {
        lines: Vec<String>,
    },
    /// Split on a single delimiter character
    Delim {
        #[arg(short, long)]
        delimiter: Option<char>,
        /// Keep empty pieces between adjacent delimiters
        #[arg(long)]
        keep_empty: bool,
        lines: Vec<String>,
    },
    /// Show what the current platform provides
    Platform,
    /// Ask a running process to stop
    Terminate {
        #[arg(value_parser = parse_pid)]
        pid: u32,
    },
    /// Open a folder in the desktop file manager
    Open {
        path: PathBuf,
    },
    /// Merge URLs into a saved download list
    ListAdd {
        file: PathBuf,
        /// Skip URLs already in the list
        #[arg(short, long)]
        unique: bool,
        #[arg(required = true)]
        urls: Vec<String>,
    },
}

// Rejects 0 (the caller's process group) and signed forms like "+5"
fn parse_pid(s: &str) -> Result<u32, String> {
    if s.is_empty() || !has_digits_only(s) {
        return Err(format!("not a process id: {}", s));
    }
    match s.parse::<u32>() {
        Ok(0) => Err("process id must be greater than 0".to_string()),
        Ok(pid) => Ok(pid),
        Err(e) => Err(format!("not a process id: {}: {}", s, e)),
    }
}
