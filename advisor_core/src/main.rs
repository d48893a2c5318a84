//! game-advisor - ask ten questions, recommend one game.

use std::io::{self, Write};
use std::path::PathBuf;

use advisor_core::{
    AdvisorConfig, ConflictStrategy, ConsoleIntake, ConsoleReporter, Engine, Explainer, RunReport,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Game advisor CLI
#[derive(Parser)]
#[command(name = "game-advisor")]
#[command(about = "Recommends a video game from a short yes/no questionnaire", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the rules, reset working memory and run the questionnaire
    Run {
        /// TOML configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Conflict strategy within a tier: recency, order or specificity
        #[arg(long)]
        strategy: Option<ConflictStrategy>,

        /// Explain how the recommendation was derived
        #[arg(long)]
        explain: bool,

        /// List the final working memory
        #[arg(long)]
        show_facts: bool,

        /// Print the firing trace as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the production set
    Rules,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Commands::Run {
        config: None,
        strategy: None,
        explain: false,
        show_facts: false,
        json: false,
    }) {
        Commands::Run {
            config,
            strategy,
            explain,
            show_facts,
            json,
        } => {
            let mut settings = match config {
                Some(path) => AdvisorConfig::load(&path)
                    .with_context(|| format!("loading {}", path.display()))?,
                None => AdvisorConfig::default(),
            };
            if let Some(strategy) = strategy {
                settings.engine.strategy = strategy;
            }
            settings.report.explain |= explain;
            settings.report.show_facts |= show_facts;
            run(&settings, json)
        }
        Commands::Rules => list_rules(),
    }
}

fn run(settings: &AdvisorConfig, json: bool) -> Result<()> {
    let mut engine = Engine::load().with_strategy(settings.engine.strategy);
    engine.reset();

    let stdin = io::stdin();
    let mut intake = ConsoleIntake::new(stdin.lock(), io::stdout(), settings.intake.clone());
    let mut reporter = ConsoleReporter::new(io::stdout());

    println!("Game advisor: answer each question with yes or no.\n");
    let report = engine
        .run(&mut intake, &mut reporter)
        .context("questionnaire aborted")?;

    let mut out = io::stdout().lock();
    if settings.report.show_facts {
        print_facts(&mut out, &engine)?;
    }
    if settings.report.explain {
        print_explanation(&mut out, &engine, &report)?;
    }
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    }
    Ok(())
}

fn print_facts(out: &mut impl Write, engine: &Engine) -> Result<()> {
    writeln!(out, "Working memory:")?;
    for record in engine.memory().records() {
        writeln!(
            out,
            "  f-{:<3} {} (source: {})",
            record.sequence, record.fact, record.source
        )?;
    }
    Ok(())
}

fn print_explanation(out: &mut impl Write, engine: &Engine, report: &RunReport) -> Result<()> {
    writeln!(out, "Explanation:")?;
    match Explainer::new(engine.memory()).explain_final_result() {
        Some(text) => writeln!(out, "{}", text)?,
        None => writeln!(
            out,
            "  No recommendation rule matched these answers ({} productions fired).",
            report.firings.len()
        )?,
    }
    Ok(())
}

fn list_rules() -> Result<()> {
    let engine = Engine::load();
    let mut out = io::stdout().lock();
    for production in engine.productions() {
        writeln!(out, "{}", production)?;
    }
    writeln!(out, "{} productions", engine.productions().len())?;
    Ok(())
}
