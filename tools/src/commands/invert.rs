use clap::Parser;

use affine2d::error::Result;
use affine2d::geom::matrix::Matrix2D;

#[derive(Debug, Parser)]
pub struct Config {
    /// Print the flat row-major array instead of the dump
    #[arg(short, long)]
    pub(crate) flat: bool,
}

pub fn render(matrix: Matrix2D, cfg: &Config) -> Result<String> {
    let mut matrix = matrix;
    matrix.try_invert()?;
    if cfg.flat {
        let values: Vec<String> = matrix.to_array().iter().map(|v| v.to_string()).collect();
        Ok(format!("{}\n", values.join(",")))
    } else {
        Ok(matrix.to_string())
    }
}

pub fn command(matrix: Matrix2D, cfg: Config) -> Result<()> {
    print!("{}", render(matrix, &cfg)?);
    Ok(())
}
