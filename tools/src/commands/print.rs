use clap::Parser;

use affine2d::error::Result;
use affine2d::geom::matrix::Matrix2D;

#[derive(Debug, Parser)]
pub struct Config {}

pub fn render(matrix: Matrix2D) -> String {
    format!("{}determinant: {}\n", matrix, matrix.determinant())
}

pub fn command(matrix: Matrix2D, _cfg: Config) -> Result<()> {
    print!("{}", render(matrix));
    Ok(())
}
