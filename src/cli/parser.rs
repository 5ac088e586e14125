use crate::extract::ExtractorKind;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Command-line interface definition for phototime
/// CLI application to measure photographing time from EXIF capture dates
#[derive(Parser)]
#[command(
    name = "phototime",
    version = env!("CARGO_PKG_VERSION"),
    about = "Estimate how long you spent photographing, from the EXIF capture times of a folder",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Photo folder (default: current directory)
    #[arg(global = true, long = "folder", short = 'd', value_name = "DIR")]
    pub folder: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Extract capture times into the folder's cache
    Scan {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Compute the time spent photographing, excluding breaks
    Time {
        /// Break threshold in minutes
        #[arg(long = "break", short = 'b', value_name = "MINUTES")]
        break_minutes: Option<u32>,

        #[arg(
            long = "ask",
            conflicts_with = "break_minutes",
            help = "Ask for the break threshold interactively"
        )]
        ask: bool,

        #[arg(long = "no-cache", help = "Read metadata directly, skip the cache")]
        no_cache: bool,

        #[arg(long = "details", help = "List every detected break")]
        details: bool,

        #[arg(long = "json", conflicts_with = "details", help = "Print the summary as JSON")]
        json: bool,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Inspect or maintain the folder's cache
    Cache {
        #[arg(long = "info", help = "Show cache information")]
        info: bool,

        #[arg(long = "check", help = "Check cache database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the cache database using VACUUM")]
        vacuum: bool,

        #[arg(long = "list", help = "List cached files and capture times")]
        list: bool,

        #[arg(long, value_enum, default_value = "table", help = "Output format for --list")]
        format: ListFormat,
    },
}

/// Metadata backend overrides shared by `scan` and `time`
#[derive(clap::Args, Debug, Clone, Default)]
pub struct SourceArgs {
    #[arg(long, value_enum, help = "Metadata backend (overrides the configuration)")]
    pub backend: Option<ExtractorKind>,

    #[arg(long, value_name = "PATH", help = "Path of the exiftool program")]
    pub exiftool: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ListFormat {
    Table,
    Json,
    Csv,
}
