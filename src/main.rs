//! CLI entry point for dirtree

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use dirtree::{
    Download, OutputConfig, ScanOptions, ScanResponse, TreeFormatter, TreeWalker, print_json,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(about = "Draw a directory as a text tree, optionally with sizes")]
#[command(version)]
struct Args {
    /// Directory to scan
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Show sizes next to names (directories show their total)
    #[arg(short = 's', long = "size")]
    size: bool,

    /// Show raw byte counts instead of KB/MB/GB
    #[arg(long = "bytes")]
    bytes: bool,

    /// Descend only N levels deep (0 shows nothing)
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Exclude names matching a case-insensitive regex (can be used multiple times)
    #[arg(short = 'I', long = "exclude")]
    exclude: Vec<String>,

    /// Read scan options from a JSON file; flags given here take precedence
    #[arg(long = "options", value_name = "FILE")]
    options: Option<PathBuf>,

    /// Print the scan result as JSON instead of a tree
    #[arg(long = "json")]
    json: bool,

    /// Also save the rendered tree as file_tree_<timestamp>.txt in DIR
    #[arg(long = "save", value_name = "DIR")]
    save: Option<PathBuf>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Log scan progress and diagnostics at debug level
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Merge the options file (if any) with command-line flags.
fn build_options(args: &Args) -> Result<ScanOptions, String> {
    let mut options = match &args.options {
        Some(file) => {
            let json = std::fs::read_to_string(file)
                .map_err(|e| format!("cannot read '{}': {}", file.display(), e))?;
            ScanOptions::from_json(&json)
                .map_err(|e| format!("invalid options in '{}': {}", file.display(), e))?
        }
        None => ScanOptions::default(),
    };

    if args.size {
        options.show_size = true;
    }
    if args.bytes {
        options.human_readable = false;
    }
    if args.level.is_some() {
        options.max_depth = args.level;
    }
    options.exclude_patterns.extend(args.exclude.iter().cloned());
    Ok(options)
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let options = build_options(&args).unwrap_or_else(|e| {
        eprintln!("dirtree: {}", e);
        process::exit(1);
    });

    let walker = TreeWalker::new(options);
    let result = walker.scan(&args.path);

    if !args.json {
        if let Some(err) = result.root_error() {
            eprintln!("dirtree: {}", err);
            process::exit(1);
        }
    }

    let output = if args.json {
        print_json(&ScanResponse::from(&result))
    } else {
        let config = OutputConfig {
            use_color: should_use_color(args.color),
            ..OutputConfig::from(&result.options)
        };
        TreeFormatter::new(config).print(&result.entries)
    };

    if let Err(e) = output {
        eprintln!("dirtree: error writing output: {}", e);
        process::exit(1);
    }

    if let Some(dir) = &args.save {
        if let Some(err) = result.root_error() {
            eprintln!("dirtree: nothing to save: {}", err);
            process::exit(1);
        }
        match Download::new(&result).write_to(dir) {
            Ok(path) => eprintln!("dirtree: saved {}", path.display()),
            Err(e) => {
                eprintln!("dirtree: cannot save to '{}': {}", dir.display(), e);
                process::exit(1);
            }
        }
    }

    if result.root_error().is_some() {
        process::exit(1);
    }
}
