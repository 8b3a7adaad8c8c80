//! CLI entry point.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tiny_argsplit_rs::config::{Config, ConfigLoader};
use tiny_argsplit_rs::counter::IdCounter;
use tiny_argsplit_rs::download_list::{DownloadList, ListMode};
use tiny_argsplit_rs::error::Result;
use tiny_argsplit_rs::io::input::InputHandler;
use tiny_argsplit_rs::platform::{self, Platform};
use tiny_argsplit_rs::splitter::{split, tokenize};
use tracing::{debug, error, info};

mod cli;

use cli::{Args, Command};

const PROMPT: &str = "argsplit> ";

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ConfigLoader::load_from_file(path),
        None => Ok(ConfigLoader::default_config()),
    };
    let log_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "info".to_string());
    init_tracing(&args, &log_level);

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("failed to load config: {}", e);
            return ExitCode::FAILURE;
        }
    };
    debug!(?args, ?config, "starting");

    match run(args, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

// RUST_LOG > --quiet > -v/-vv > config log_level
fn init_tracing(args: &Args, config_level: &str) {
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: Args, config: Config) -> Result<()> {
    let null_separated = args.null || config.null_separated;
    let counter = IdCounter::new();

    match args.command {
        Command::Split { lines } => {
            for_each_line(lines, &counter, null_separated, tokenize)?;
        }
        Command::Delim { delimiter, keep_empty, lines } => {
            let delimiter = delimiter.unwrap_or(config.delimiter);
            let skip_empty = !keep_empty && config.skip_empty;
            for_each_line(lines, &counter, null_separated, |line| {
                split(line, delimiter, skip_empty)
            })?;
        }
        Command::Platform => {
            let platform = platform::current();
            print_platform(platform.as_ref(), &mut io::stdout().lock())?;
        }
        Command::Terminate { pid } => {
            platform::current().terminate(pid)?;
        }
        Command::Open { path } => {
            let path = if platform::is_relative_path(&path) {
                std::env::current_dir()?.join(path)
            } else {
                path
            };
            platform::current().open_folder(&path)?;
        }
        Command::ListAdd { file, unique, urls } => {
            let mode = if unique { ListMode::DisallowDuplicates } else { ListMode::AllowDuplicates };
            let mut list = DownloadList::load(&file)?;
            let added = list.extend(&urls, mode);
            list.save()?;
            info!(path = %file.display(), added, total = list.len(), "updated download list");
        }
    }

    Ok(())
}

fn for_each_line<F>(lines: Vec<String>, counter: &IdCounter, null_separated: bool, split_fn: F) -> Result<()>
where
    F: Fn(&str) -> Vec<String>,
{
    let stdout = io::stdout();

    let handle = |line: &str| -> io::Result<()> {
        let id = counter.next();
        let tokens = split_fn(line);
        debug!(id, tokens = tokens.len(), "split line");
        let mut out = stdout.lock();
        write_record(&mut out, &tokens, null_separated)?;
        out.flush()
    };

    if !lines.is_empty() {
        for line in &lines {
            handle(line)?;
        }
        return Ok(());
    }

    let input = InputHandler::for_stdin(PROMPT);
    while let Some(line) = input.read_line()? {
        handle(&line)?;
    }
    Ok(())
}

// Each token is followed by the separator and the line ends with one more,
// so records read as "a\nb\n\n" or "a\0b\0\0".
fn write_record<W: Write>(out: &mut W, tokens: &[String], null_separated: bool) -> io::Result<()> {
    let sep: &[u8] = if null_separated { b"\0" } else { b"\n" };
    for token in tokens {
        out.write_all(token.as_bytes())?;
        out.write_all(sep)?;
    }
    out.write_all(sep)
}

fn print_platform<W: Write>(platform: &dyn Platform, out: &mut W) -> io::Result<()> {
    let describe = |path: Option<std::path::PathBuf>| {
        path.map(|p| p.display().to_string())
            .unwrap_or_else(|| "not found".to_string())
    };
    writeln!(out, "os: {}", platform.os().name())?;
    writeln!(out, "32-bit windows: {}", platform.is_32bit_windows())?;
    writeln!(out, "python3: {}", describe(platform.python3_path()))?;
    writeln!(out, "home: {}", describe(platform.home_path()))?;
    Ok(())
}
