use clap::Parser;
use scanline_dp::penalty::{linear, potts, truncated_linear, two_level};
use scanline_dp::{
    CostTable, LabelParallelTrellisSolver, ScalarTrellisSolver, SolverConfig, TieBreak,
    TrellisSolver, VectorizedTrellisSolver,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Scanline DP label optimizer (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output for performance profiling.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum SolverKind {
    Scalar,
    #[default]
    Vectorized,
    LabelParallel,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
enum TieBreakConfig {
    #[default]
    First,
    Last,
}

impl From<TieBreakConfig> for TieBreak {
    fn from(value: TieBreakConfig) -> Self {
        match value {
            TieBreakConfig::First => TieBreak::First,
            TieBreakConfig::Last => TieBreak::Last,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum PenaltyConfig {
    Potts { penalty: f64 },
    Linear { slope: f64 },
    TruncatedLinear { slope: f64, cap: f64 },
    TwoLevel { small: f64, large: f64 },
}

impl PenaltyConfig {
    fn build(&self, labels: usize) -> scanline_dp::TrellisResult<CostTable> {
        match *self {
            PenaltyConfig::Potts { penalty } => potts(labels, penalty),
            PenaltyConfig::Linear { slope } => linear(labels, slope),
            PenaltyConfig::TruncatedLinear { slope, cap } => truncated_linear(labels, slope, cap),
            PenaltyConfig::TwoLevel { small, large } => two_level(labels, small, large),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Config {
    unary: Vec<Vec<f64>>,
    pairwise: Option<Vec<Vec<f64>>>,
    penalty: Option<PenaltyConfig>,
    solver: SolverKind,
    tie_break: TieBreakConfig,
    include_tables: bool,
    output_path: Option<String>,
}

#[derive(Debug, Serialize)]
struct Output {
    solver: &'static str,
    path: Vec<usize>,
    total_cost: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    costs: Option<Vec<Vec<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parents: Option<Vec<Vec<Option<usize>>>>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive("scanline_dp=info".parse()?),
            )
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;

    let unary = CostTable::from_rows(&config.unary)?;
    let pairwise = match (&config.pairwise, &config.penalty) {
        (Some(rows), None) => CostTable::from_rows(rows)?,
        (None, Some(penalty)) => penalty.build(unary.rows())?,
        (Some(_), Some(_)) => return Err("set either pairwise or penalty, not both".into()),
        (None, None) => return Err("pairwise or penalty must be set in the config".into()),
    };

    let solver_config = SolverConfig {
        tie_break: config.tie_break.into(),
    };
    let solver: Box<dyn TrellisSolver> = match config.solver {
        SolverKind::Scalar => Box::new(ScalarTrellisSolver::new().with_config(solver_config)),
        SolverKind::Vectorized => {
            Box::new(VectorizedTrellisSolver::new().with_config(solver_config))
        }
        SolverKind::LabelParallel => {
            Box::new(LabelParallelTrellisSolver::new().with_config(solver_config))
        }
    };

    let solution = solver.solve_full(unary.view(), pairwise.view())?;
    let output = Output {
        solver: solver.name(),
        costs: config
            .include_tables
            .then(|| solution.costs.to_label_major()),
        parents: config
            .include_tables
            .then(|| solution.parents.to_label_major()),
        path: solution.path,
        total_cost: solution.total_cost,
    };
    let json = serde_json::to_string_pretty(&output)?;

    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
