use clap::Parser;
use log::info;

use affine2d::error::Result;
use affine2d::geom::matrix::Matrix2D;
use affine2d::geom::point::Point;

use crate::parse::parse_point;

#[derive(Debug, Parser)]
pub struct Config {
    /// Point as x,y; may be given several times
    #[arg(short, long, value_parser = parse_point, required = true, allow_hyphen_values = true)]
    pub(crate) point: Vec<Point>,

    /// Map through the inverse instead
    #[arg(short, long)]
    pub(crate) inverse: bool,
}

pub fn transform_points(matrix: Matrix2D, cfg: &Config) -> Result<Vec<Point>> {
    let mut matrix = matrix;
    if cfg.inverse {
        matrix.try_invert()?;
    }
    Ok(cfg.point.iter().map(|p| matrix.transform_point(p)).collect())
}

pub fn command(matrix: Matrix2D, cfg: Config) -> Result<()> {
    let points = transform_points(matrix, &cfg)?;
    for (p, out) in cfg.point.iter().zip(points) {
        info!("transform {:?} -> {:?}", p, out);
        println!("{} {}", out.x(), out.y());
    }
    Ok(())
}
