use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use stageclass_core::{OutputFormat, Stage};

#[derive(Parser)]
#[command(name = "stageclass")]
#[command(about = "Classify JSON records through a three-stage label pipeline")]
#[command(version)]
pub struct Cli {
    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Base directory (default: ~/.stageclass)
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StageArg {
    Shape,
    Categorize,
    Confirm,
}

impl From<StageArg> for Stage {
    fn from(arg: StageArg) -> Self {
        match arg {
            StageArg::Shape => Stage::Shape,
            StageArg::Categorize => Stage::Categorize,
            StageArg::Confirm => Stage::Confirm,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Options shared by `classify` and `batch`
#[derive(clap::Args, Clone, Copy, Debug)]
pub struct RunOptions {
    /// Last stage to run (default: from config, else confirm)
    #[arg(long, value_enum)]
    pub through: Option<StageArg>,

    /// Print every stage's label
    #[arg(short, long)]
    pub trace: bool,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify records given as JSON arguments
    Classify {
        /// Records as JSON (e.g., '{"value": 5}')
        #[arg(required = true, allow_negative_numbers = true)]
        records: Vec<String>,

        /// Treat each argument as the bare value (non-JSON text is a string)
        #[arg(long)]
        value: bool,

        #[command(flatten)]
        options: RunOptions,
    },

    /// Classify records from a JSON array or JSON Lines file
    Batch {
        /// Input file ("-" or omitted for stdin)
        file: Option<PathBuf>,

        /// Use the built-in demo records
        #[arg(long, conflicts_with = "file")]
        demo: bool,

        /// Print label counts after the results
        #[arg(short, long)]
        summary: bool,

        #[command(flatten)]
        options: RunOptions,
    },

    /// Run a single stage on a raw JSON value
    Stage {
        /// Stage to run
        #[arg(value_enum)]
        stage: StageArg,

        /// Input as JSON (a record for shape, a label string otherwise)
        #[arg(allow_negative_numbers = true)]
        input: String,
    },

    /// List every label, grouped by stage
    Labels,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Get a config value
    Get {
        /// Config key (e.g., output.format)
        key: String,
    },

    /// Set a config value
    Set {
        /// Config key (e.g., pipeline.through)
        key: String,

        /// Value to set (e.g., "json", "false", "categorize")
        value: String,
    },

    /// List all config values
    List,

    /// Show config file path
    Path,

    /// Initialize config file with defaults
    Init,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_classify() {
        let cli = Cli::parse_from([
            "stageclass",
            "classify",
            "--value",
            "--through",
            "categorize",
            "5",
            "hi",
        ]);
        match cli.command {
            Some(Commands::Classify {
                records,
                value,
                options,
            }) => {
                assert_eq!(records, vec!["5", "hi"]);
                assert!(value);
                assert!(matches!(options.through, Some(StageArg::Categorize)));
                assert!(!options.trace);
            }
            _ => panic!("expected classify"),
        }
    }

    #[test]
    fn test_negative_values_are_not_flags() {
        let cli = Cli::parse_from(["stageclass", "classify", "--value", "-2"]);
        match cli.command {
            Some(Commands::Classify { records, .. }) => assert_eq!(records, vec!["-2"]),
            _ => panic!("expected classify"),
        }
    }

    #[test]
    fn test_batch_demo_conflicts_with_file() {
        let result = Cli::try_parse_from(["stageclass", "batch", "--demo", "records.jsonl"]);
        assert!(result.is_err());
    }
}
