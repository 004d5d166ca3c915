pub mod error;
pub mod geom;

pub use error::{AffineError, Result};
pub use geom::matrix::Matrix2D;
pub use geom::point::Point;
