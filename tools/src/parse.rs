use affine2d::error::{AffineError, Result};
use affine2d::geom::matrix::Matrix2D;
use affine2d::geom::point::Point;

fn parse_floats(value: &str) -> Result<Vec<f32>> {
    value
        .split(',')
        .map(|s| {
            s.trim()
                .parse::<f32>()
                .map_err(|e| AffineError::Parse(format!("{:?}: {}", s, e)))
        })
        .collect()
}

pub fn parse_matrix(value: &str) -> Result<Matrix2D> {
    Matrix2D::from_slice(&parse_floats(value)?)
}

pub fn parse_point(value: &str) -> Result<Point> {
    let values = parse_floats(value)?;
    match values.as_slice() {
        [x, y] => Ok(Point::new(*x, *y)),
        _ => Err(AffineError::InvalidDimension {
            expected: 2,
            got: values.len(),
        }),
    }
}
