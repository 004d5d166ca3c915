use clap::Parser;
use log::info;

use affine2d::error::Result;
use affine2d::geom::matrix::Matrix2D;

use crate::parse::parse_matrix;

#[derive(Debug, Parser)]
pub struct Config {
    #[arg(short, long, value_parser = parse_matrix, allow_hyphen_values = true)]
    pub(crate) with: Matrix2D,

    /// Compose on the left, so `with` acts after the base matrix
    #[arg(long)]
    pub(crate) pre: bool,
}

pub fn compose(matrix: Matrix2D, cfg: &Config) -> Matrix2D {
    let mut matrix = matrix;
    if cfg.pre {
        info!("pre apply {:?}", cfg.with.to_array());
        matrix.pre_apply(&cfg.with);
    } else {
        info!("apply {:?}", cfg.with.to_array());
        matrix.apply(&cfg.with);
    }
    matrix
}

pub fn command(matrix: Matrix2D, cfg: Config) -> Result<()> {
    compose(matrix, &cfg).print();
    Ok(())
}
