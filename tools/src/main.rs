use clap::Parser;
use log::{error, info};

use affine2d::error::Result;
use affine2d::geom::matrix::Matrix2D;
mod commands;
mod parse;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Six comma separated coefficients: m00,m01,m02,m10,m11,m12
    #[arg(short, long, value_name = "COEFFICIENTS", value_parser = parse::parse_matrix, allow_hyphen_values = true, global = true)]
    matrix: Option<Matrix2D>,
}

#[derive(Parser, Debug)]
enum Commands {
    Transform(commands::transform::Config),
    Invert(commands::invert::Config),
    Print(commands::print::Config),
    Compose(commands::compose::Config),
}

fn run(cli: Cli) -> Result<()> {
    let matrix = cli.matrix.unwrap_or_default();
    info!("Matrix: {:?}", matrix.to_array());

    match cli.command {
        Commands::Transform(cfg) => commands::transform::command(matrix, cfg),
        Commands::Invert(cfg) => commands::invert::command(matrix, cfg),
        Commands::Print(cfg) => commands::print::command(matrix, cfg),
        Commands::Compose(cfg) => commands::compose::command(matrix, cfg),
    }
}

fn main() {
    env_logger::init();
    if let Err(e) = run(Cli::parse()) {
        error!("{}", e);
        std::process::exit(1);
    }
}
