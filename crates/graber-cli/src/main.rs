//! GRABER command-line interface.

mod ansatz;
mod hamiltonian;
mod objectives;
mod output;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use graber_core::{Graber, GraberConfig, OptimizationResult, Optimizer};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use objectives::Objective;
use output::{
    create_spinner, format_params, print_header, print_result, print_section, print_success,
    print_warning,
};

#[derive(Parser)]
#[command(name = "graber")]
#[command(author, version, about = "Momentum gradient descent with parameter-shift derivatives", long_about = None)]
struct Cli {
    /// Increase log verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Minimize a built-in objective
    Run(RunArgs),

    /// List built-in objectives
    Objectives,
}

#[derive(Args)]
struct RunArgs {
    /// Objective to minimize
    #[arg(short, long, value_enum, default_value_t = Objective::H2)]
    objective: Objective,

    /// YAML or JSON optimizer config
    #[arg(short, long, env = "GRABER_CONFIG")]
    config: Option<PathBuf>,

    /// Maximum number of iterations
    #[arg(long)]
    maxiter: Option<usize>,

    /// Momentum coefficient in [0, 1)
    #[arg(long)]
    momentum: Option<f64>,

    /// Iterations before the step length decays
    #[arg(long)]
    offset: Option<f64>,

    /// Warm-up step length
    #[arg(long)]
    eta: Option<f64>,

    /// Convergence tolerance
    #[arg(long)]
    tol: Option<f64>,

    /// Log every iteration
    #[arg(long)]
    disp: bool,

    /// Starting point, comma separated
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    initial: Option<Vec<f64>>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct RunReport<'a> {
    objective: &'static str,
    config: &'a GraberConfig,
    initial_point: &'a [f64],
    result: &'a OptimizationResult,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Run(args) => run(args),
        Commands::Objectives => {
            list_objectives();
            Ok(())
        }
    }
}

fn build_config(args: &RunArgs) -> Result<GraberConfig> {
    let mut config = match &args.config {
        Some(path) => GraberConfig::from_path(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => GraberConfig::default(),
    };

    if let Some(maxiter) = args.maxiter {
        config = config.with_maxiter(maxiter);
    }
    if let Some(momentum) = args.momentum {
        config = config.with_momentum(momentum);
    }
    if let Some(offset) = args.offset {
        config = config.with_offset(offset);
    }
    if let Some(eta) = args.eta {
        config = config.with_initial_eta(eta);
    }
    if args.tol.is_some() {
        config = config.with_tol(args.tol);
    }
    if args.disp {
        config = config.with_disp(true);
    }

    Ok(config)
}

fn run(args: RunArgs) -> Result<()> {
    let config = build_config(&args)?;
    debug!(?config, "optimizer config");
    let optimizer = Graber::new(config).context("invalid optimizer configuration")?;

    let objective = args.objective;
    let initial = args
        .initial
        .clone()
        .unwrap_or_else(|| objective.default_initial());

    if initial.is_empty() {
        bail!("initial point must not be empty");
    }
    if let Some(dim) = objective.dimension() {
        if initial.len() != dim {
            bail!(
                "objective '{}' takes {} parameters, got {}",
                objective.name(),
                dim,
                initial.len()
            );
        }
    }

    let spinner = (!args.json && !optimizer.config().disp)
        .then(|| create_spinner(&format!("Minimizing {}", objective.name())));

    let result = optimizer
        .minimize(
            |x| {
                if let Some(pb) = &spinner {
                    pb.inc(1);
                }
                objective.evaluate(x)
            },
            initial.clone(),
        )
        .context("optimization failed")?;

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    if args.json {
        let report = RunReport {
            objective: objective.name(),
            config: optimizer.config(),
            initial_point: &initial,
            result: &result,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_summary(objective, &initial, &optimizer, &result);
    Ok(())
}

fn print_summary(
    objective: Objective,
    initial: &[f64],
    optimizer: &Graber,
    result: &OptimizationResult,
) {
    let config = optimizer.config();

    print_header(&format!("GRABER: {}", objective.description()));

    print_section("Configuration");
    print_result("Max iterations", config.maxiter);
    print_result("Momentum", config.momentum);
    print_result("Initial step length", config.initial_eta);
    print_result("Offset", config.offset);
    print_result("Tolerance", format!("{:e}", config.tol));
    print_result("Initial point", format_params(initial));

    print_section("Result");
    print_result("Best value", format!("{:.8}", result.optimal_value));
    print_result("Best parameters", format_params(&result.optimal_params));
    print_result("Iterations", result.num_iterations);
    print_result("Evaluations", result.num_evaluations);
    println!();

    if result.converged {
        print_success(&format!(
            "Converged after {} iterations",
            result.num_iterations
        ));
    } else {
        print_warning(&format!(
            "Stopped at maxiter ({}) without converging",
            config.maxiter
        ));
    }
}

fn list_objectives() {
    print_header("Built-in objectives");
    for objective in Objective::ALL {
        let dim = objective
            .dimension()
            .map_or_else(|| "any".to_string(), |d| d.to_string());
        print_result(
            objective.name(),
            format!("{} (parameters: {})", objective.description(), dim),
        );
    }
}
