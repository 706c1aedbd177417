//! gm - build affine transforms and inspect what they do
//!
//! Chains translate/scale/rotate operations, applies the result to points,
//! vectors and normals, and prints matrices, inverses and shading frames.

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::Op;

#[derive(Parser)]
#[command(name = "gm")]
#[command(author, version, about = "Affine transform and shading frame tool")]
#[command(long_about = "
Builds transforms from an ordered list of operations and applies them.
Operations compose left to right: the last one listed acts on the input first.

Examples:
  gm apply -o scale:1,4,1 --point 1,1,1 --vector 0,1,0 --normal 0,1,0
  gm apply -o translate:0,0,7 -o rotate:1,0,0,90 --point 1,1,1
  gm matrix -o rotate:0,1,1,30 -o scale:2,1,1
  gm invert 1,2,0,1,0,1,3,0,2,0,1,4,0,1,0,1
  gm onb 0.99,0.1,0.1
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a transform to points, vectors and normals
    #[command(visible_alias = "a")]
    Apply(ApplyArgs),

    /// Print the forward and inverse matrices of a transform
    #[command(visible_alias = "m")]
    Matrix(MatrixArgs),

    /// Invert an explicit 4x4 matrix
    Invert(InvertArgs),

    /// Build an orthonormal basis from a normal
    Onb(OnbArgs),
}

#[derive(Args)]
struct ApplyArgs {
    /// Operation: translate:X,Y,Z | scale:X,Y,Z | rotate:AX,AY,AZ,DEGREES
    #[arg(short = 'o', long = "op")]
    ops: Vec<Op>,

    /// Point to transform (X,Y,Z)
    #[arg(short, long = "point", allow_hyphen_values = true)]
    points: Vec<String>,

    /// Direction vector to transform (X,Y,Z)
    #[arg(short = 'd', long = "vector", allow_hyphen_values = true)]
    vectors: Vec<String>,

    /// Surface normal to transform (X,Y,Z)
    #[arg(short, long = "normal", allow_hyphen_values = true)]
    normals: Vec<String>,

    /// Reject transforms with non-finite or inconsistent matrices
    #[arg(long)]
    strict: bool,
}

#[derive(Args)]
struct MatrixArgs {
    /// Operation: translate:X,Y,Z | scale:X,Y,Z | rotate:AX,AY,AZ,DEGREES
    #[arg(short = 'o', long = "op")]
    ops: Vec<Op>,

    /// Digits after the decimal point
    #[arg(long, default_value = "4")]
    precision: usize,
}

#[derive(Args)]
struct InvertArgs {
    /// 16 comma-separated values in row-major order
    #[arg(allow_hyphen_values = true)]
    values: String,

    /// Digits after the decimal point
    #[arg(long, default_value = "4")]
    precision: usize,
}

#[derive(Args)]
struct OnbArgs {
    /// Normal direction (X,Y,Z); normalized before use
    #[arg(allow_hyphen_values = true)]
    normal: String,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Apply(args) => commands::apply::run(args),
        Commands::Matrix(args) => commands::matrix::run(args),
        Commands::Invert(args) => commands::matrix::run_invert(args),
        Commands::Onb(args) => commands::onb::run(args),
    }
}
