use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::{ColoredString, Colorize};
use serde::Serialize;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use stageclass_core::config::Config;
use stageclass_core::{
    demo_records, parse_argument, parse_records, wrap_value, BatchReport, Classified, Label,
    OutputFormat, Pipeline, Result, StageclassError, Stage, Step,
};

mod args;
use args::{Cli, Commands, ConfigAction, RunOptions, Shell};

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.quiet);

    let base_dir = resolve_base_dir(cli.base_dir);
    let config = load_config(&base_dir);

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let result = match cli.command {
        Some(Commands::Classify {
            records,
            value,
            options,
        }) => handle_classify(&config, &records, value, options),
        Some(Commands::Batch {
            file,
            demo,
            summary,
            options,
        }) => handle_batch(&config, file.as_deref(), demo, summary, options),
        Some(Commands::Stage { stage, input }) => handle_stage(stage.into(), &input),
        Some(Commands::Labels) => {
            handle_labels();
            Ok(())
        }
        Some(Commands::Config { action }) => handle_config(action, &base_dir),
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(())
        }
        None => {
            Cli::command().print_help().ok();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// RUST_LOG wins; otherwise -v/-q pick the level
fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn resolve_base_dir(cli_base: Option<PathBuf>) -> PathBuf {
    if let Some(base) = cli_base {
        return base;
    }

    if let Ok(base) = std::env::var("STAGECLASS_BASE") {
        return PathBuf::from(base);
    }

    dirs::home_dir()
        .map(|h| h.join(".stageclass"))
        .unwrap_or_else(|| PathBuf::from(".stageclass"))
}

fn load_config(base_dir: &Path) -> Config {
    Config::load(base_dir).unwrap_or_else(|e| {
        tracing::warn!("{}; using default config", e);
        Config::default()
    })
}

/// Effective run settings. Priority: CLI options > config file > defaults
struct RunSettings {
    pipeline: Pipeline,
    format: OutputFormat,
    trace: bool,
}

impl RunSettings {
    fn resolve(config: &Config, options: RunOptions) -> Self {
        let through = options
            .through
            .map(Stage::from)
            .unwrap_or(config.pipeline.through);
        let format = options
            .format
            .map(OutputFormat::from)
            .unwrap_or(config.output.format);

        Self {
            pipeline: Pipeline::through(through),
            format,
            trace: options.trace,
        }
    }
}

#[derive(Serialize)]
struct ResultLine<'a> {
    index: usize,
    input: &'a Value,
    label: Label,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<&'a [Step]>,
}

#[derive(Serialize)]
struct SummaryLine {
    total: usize,
    counts: Vec<LabelCount>,
}

#[derive(Serialize)]
struct LabelCount {
    label: Label,
    count: usize,
}

fn handle_classify(
    config: &Config,
    records: &[String],
    bare_values: bool,
    options: RunOptions,
) -> Result<()> {
    let settings = RunSettings::resolve(config, options);

    let inputs = records
        .iter()
        .map(|arg| {
            let parsed = parse_argument(arg, bare_values)?;
            Ok(if bare_values {
                wrap_value(parsed)
            } else {
                parsed
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let report = settings.pipeline.run_batch(&inputs);
    print_report(&report, &settings)
}

fn handle_batch(
    config: &Config,
    file: Option<&Path>,
    demo: bool,
    summary: bool,
    options: RunOptions,
) -> Result<()> {
    let settings = RunSettings::resolve(config, options);

    let inputs = if demo {
        demo_records()
    } else {
        let (source_name, text) = read_input(file)?;
        parse_records(&source_name, &text)?
    };

    tracing::info!(
        records = inputs.len(),
        through = %settings.pipeline.last_stage(),
        "running batch"
    );

    let report = settings.pipeline.run_batch(&inputs);
    print_report(&report, &settings)?;

    if summary {
        print_summary(&report, settings.format)?;
    }

    Ok(())
}

fn read_input(file: Option<&Path>) -> Result<(String, String)> {
    match file {
        Some(path) if path != Path::new("-") => {
            let text = fs::read_to_string(path)?;
            Ok((path.display().to_string(), text))
        }
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(("stdin".to_string(), text))
        }
    }
}

fn print_report(report: &BatchReport, settings: &RunSettings) -> Result<()> {
    for result in &report.results {
        match settings.format {
            OutputFormat::Text => print_text_result(result, settings.trace)?,
            OutputFormat::Json => {
                let line = ResultLine {
                    index: result.index,
                    input: &result.input,
                    label: result.label,
                    trace: settings.trace.then_some(result.steps.as_slice()),
                };
                println!("{}", serde_json::to_string(&line)?);
            }
        }
    }
    Ok(())
}

fn print_text_result(result: &Classified, trace: bool) -> Result<()> {
    let input = serde_json::to_string(&result.input)?;
    println!("{} => {}", input.dimmed(), paint(result.label));

    if trace {
        for step in &result.steps {
            println!(
                "    {}. {:<10} {}",
                step.stage.number(),
                step.stage.name(),
                step.label
            );
        }
    }
    Ok(())
}

fn print_summary(report: &BatchReport, format: OutputFormat) -> Result<()> {
    let counts = report.counts();

    match format {
        OutputFormat::Text => {
            println!();
            println!("{} {} records", "Summary:".cyan().bold(), report.len());
            for (label, count) in counts {
                println!("  {:>4}  {}", count, paint(label));
            }
        }
        OutputFormat::Json => {
            let line = SummaryLine {
                total: report.len(),
                counts: counts
                    .into_iter()
                    .map(|(label, count)| LabelCount { label, count })
                    .collect(),
            };
            println!("{}", serde_json::to_string(&line)?);
        }
    }
    Ok(())
}

/// Green for confirmed outcomes, yellow for fall-through labels
fn paint(label: Label) -> ColoredString {
    const FALL_THROUGH: &[&str] = &[
        "UNKNOWN",
        "UNHANDLED",
        "UNCATEGORIZED",
        "UNEXPECTED",
        "INVALID",
        "ERROR",
    ];

    if FALL_THROUGH.iter().any(|k| label.contains(k)) {
        label.as_str().yellow()
    } else {
        label.as_str().green()
    }
}

fn handle_stage(stage: Stage, input: &str) -> Result<()> {
    let value = parse_argument(input, true)?;
    let label = stage.apply(&value);
    tracing::debug!(stage = %stage, input = %value, label = %label, "single stage");
    println!("{}", paint(label));
    Ok(())
}

fn handle_labels() {
    for stage in Stage::ALL {
        println!();
        println!(
            "{}",
            format!("{}. {}", stage.number(), stage.name()).cyan().bold()
        );
        for label in Label::of_stage(stage) {
            println!("  {}", label);
        }
    }
    println!();
}

fn handle_config(action: ConfigAction, base_dir: &Path) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let path = Config::path(base_dir);
            let config = Config::load(base_dir)?;
            println!();
            if path.exists() {
                println!("{} {}", "Config file:".cyan().bold(), path.display());
            } else {
                println!(
                    "{} {} {}",
                    "Config file:".cyan().bold(),
                    path.display(),
                    "(not found, using defaults)".dimmed()
                );
            }
            println!();
            for (key, value) in config.list() {
                println!("  {} = {}", key.cyan(), value);
            }
            println!();
        }
        ConfigAction::Get { key } => {
            let config = Config::load(base_dir)?;
            match config.get(&key) {
                Some(value) => {
                    println!("{}", value);
                }
                None => {
                    return Err(StageclassError::ConfigKeyNotFound { key });
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load(base_dir)?;
            config.set(&key, &value)?;
            config.save(base_dir)?;
            println!("{} {} = {}", "Set:".green(), key, value);
        }
        ConfigAction::List => {
            let config = Config::load(base_dir)?;
            println!();
            for (key, value) in config.list() {
                println!("{} = {}", key.cyan(), value);
            }
            println!();
        }
        ConfigAction::Path => {
            let path = Config::path(base_dir);
            println!("{}", path.display());
        }
        ConfigAction::Init => {
            let path = Config::init(base_dir)?;
            println!("{} {}", "Initialized:".green(), path.display());
        }
    }

    Ok(())
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "stageclass", &mut io::stdout());
}
