use std::fmt;
use std::ops::Mul;

use log::debug;

use crate::error::{AffineError, Result};
use crate::geom::point::Point;

/// A 2x3 affine matrix.
///
/// ```text
/// [ m00 m01 m02 ]
/// [ m10 m11 m12 ]
/// [  0   0   1  ]
/// ```
///
/// Points map as `x' = m00*x + m01*y + m02`, `y' = m10*x + m11*y + m12`.
/// The type is a plain value: sharing one instance between threads that
/// mutate it needs external synchronization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix2D {
    pub m00: f32,
    pub m01: f32,
    pub m02: f32,
    pub m10: f32,
    pub m11: f32,
    pub m12: f32,
}

impl Matrix2D {
    pub const LEN: usize = 6;

    pub fn new(m00: f32, m01: f32, m02: f32, m10: f32, m11: f32, m12: f32) -> Self {
        Matrix2D {
            m00,
            m01,
            m02,
            m10,
            m11,
            m12,
        }
    }

    pub const fn identity() -> Self {
        Matrix2D {
            m00: 1.0,
            m01: 0.0,
            m02: 0.0,
            m10: 0.0,
            m11: 1.0,
            m12: 0.0,
        }
    }

    pub fn from_slice(source: &[f32]) -> Result<Self> {
        let mut m = Matrix2D::identity();
        m.set_from_slice(source)?;
        Ok(m)
    }

    pub fn reset(&mut self) {
        *self = Matrix2D::identity();
    }

    pub fn is_identity(&self) -> bool {
        *self == Matrix2D::identity()
    }

    pub fn copy(&self) -> Matrix2D {
        *self
    }

    /// Row-major `[m00, m01, m02, m10, m11, m12]`.
    pub fn to_array(&self) -> [f32; 6] {
        [self.m00, self.m01, self.m02, self.m10, self.m11, self.m12]
    }

    /// Writes the coefficients into `target` when it holds exactly six values,
    /// otherwise into a freshly allocated vector.
    pub fn get_into(&self, target: Option<Vec<f32>>) -> Vec<f32> {
        let mut target = match target {
            Some(t) if t.len() == Self::LEN => t,
            _ => vec![0.0; Self::LEN],
        };
        target.copy_from_slice(&self.to_array());
        target
    }

    pub fn set(&mut self, src: &Matrix2D) {
        *self = *src;
    }

    pub fn set_from_slice(&mut self, source: &[f32]) -> Result<()> {
        if source.len() != Self::LEN {
            debug!("reject matrix source of length {}", source.len());
            return Err(AffineError::InvalidDimension {
                expected: Self::LEN,
                got: source.len(),
            });
        }
        self.set_coefficients(
            source[0], source[1], source[2], source[3], source[4], source[5],
        );
        Ok(())
    }

    pub fn set_coefficients(&mut self, m00: f32, m01: f32, m02: f32, m10: f32, m11: f32, m12: f32) {
        self.m00 = m00;
        self.m01 = m01;
        self.m02 = m02;
        self.m10 = m10;
        self.m11 = m11;
        self.m12 = m12;
    }

    /// Translates in the local frame, same as `apply` with a translation matrix.
    pub fn translate(&mut self, tx: f32, ty: f32) {
        self.m02 += tx * self.m00 + ty * self.m01;
        self.m12 += tx * self.m10 + ty * self.m11;
    }

    pub fn scale_uniform(&mut self, s: f32) {
        self.scale(s, s);
    }

    /// Scales the column space. Translation is left alone.
    pub fn scale(&mut self, sx: f32, sy: f32) {
        self.m00 *= sx;
        self.m01 *= sy;
        self.m10 *= sx;
        self.m11 *= sy;
    }

    /// Rotates by `angle` radians in the local frame.
    pub fn rotate(&mut self, angle: f32) {
        let (s, c) = angle.sin_cos();
        self.apply_coefficients(c, -s, 0.0, s, c, 0.0);
    }

    /// `self = self * source`: `source` acts on points before this matrix.
    pub fn apply(&mut self, source: &Matrix2D) {
        self.apply_coefficients(
            source.m00, source.m01, source.m02, source.m10, source.m11, source.m12,
        );
    }

    pub fn apply_coefficients(&mut self, n00: f32, n01: f32, n02: f32, n10: f32, n11: f32, n12: f32) {
        let (t0, t1) = (self.m00, self.m01);
        self.m00 = n00 * t0 + n10 * t1;
        self.m01 = n01 * t0 + n11 * t1;
        self.m02 += n02 * t0 + n12 * t1;

        let (t0, t1) = (self.m10, self.m11);
        self.m10 = n00 * t0 + n10 * t1;
        self.m11 = n01 * t0 + n11 * t1;
        self.m12 += n02 * t0 + n12 * t1;
    }

    /// `self = left * self`: `left` acts on points after this matrix.
    pub fn pre_apply(&mut self, left: &Matrix2D) {
        self.pre_apply_coefficients(left.m00, left.m01, left.m02, left.m10, left.m11, left.m12);
    }

    pub fn pre_apply_coefficients(
        &mut self,
        n00: f32,
        n01: f32,
        n02: f32,
        n10: f32,
        n11: f32,
        n12: f32,
    ) {
        let (t0, t1) = (self.m02, self.m12);
        self.m02 = n02 + t0 * n00 + t1 * n01;
        self.m12 = n12 + t0 * n10 + t1 * n11;

        let (t0, t1) = (self.m00, self.m10);
        self.m00 = t0 * n00 + t1 * n01;
        self.m10 = t0 * n10 + t1 * n11;

        let (t0, t1) = (self.m01, self.m11);
        self.m01 = t0 * n00 + t1 * n01;
        self.m11 = t0 * n10 + t1 * n11;
    }

    pub fn multiply(&self, vec: [f32; 2]) -> [f32; 2] {
        let x = self.m00 * vec[0] + self.m01 * vec[1] + self.m02;
        let y = self.m10 * vec[0] + self.m11 * vec[1] + self.m12;
        [x, y]
    }

    pub fn multiply_in_place(&self, vec: &mut [f32; 2]) {
        *vec = self.multiply(*vec);
    }

    /// Like `multiply`, reusing `out` only when it holds exactly two values.
    pub fn multiply_into(&self, vec: &[f32; 2], out: Option<Vec<f32>>) -> Vec<f32> {
        let mut out = match out {
            Some(o) if o.len() == 2 => o,
            _ => vec![0.0; 2],
        };
        out.copy_from_slice(&self.multiply(*vec));
        out
    }

    pub fn transform_point(&self, point: &Point) -> Point {
        self.multiply([point.x, point.y]).into()
    }

    pub fn determinant(&self) -> f32 {
        self.m00 * self.m11 - self.m01 * self.m10
    }

    /// Inverts in place. Returns `false` and leaves the matrix untouched when
    /// `|determinant| <= f32::MIN_POSITIVE`.
    #[must_use]
    pub fn invert(&mut self) -> bool {
        match self.inverse() {
            Some(inv) => {
                *self = inv;
                true
            }
            None => false,
        }
    }

    pub fn try_invert(&mut self) -> Result<()> {
        if self.invert() {
            Ok(())
        } else {
            Err(AffineError::SingularMatrix {
                determinant: self.determinant(),
            })
        }
    }

    pub fn inverse(&self) -> Option<Matrix2D> {
        let det = self.determinant();
        if det.abs() <= f32::MIN_POSITIVE {
            debug!("matrix is not invertible, determinant:{}", det);
            return None;
        }
        let Matrix2D {
            m00: t00,
            m01: t01,
            m02: t02,
            m10: t10,
            m11: t11,
            m12: t12,
        } = *self;
        Some(Matrix2D {
            m00: t11 / det,
            m01: -t01 / det,
            m02: (t01 * t12 - t11 * t02) / det,
            m10: -t10 / det,
            m11: t00 / det,
            m12: (t10 * t02 - t00 * t12) / det,
        })
    }

    pub fn print(&self) {
        print!("{}", self);
    }

    fn dump_digits(&self) -> usize {
        let big = self
            .to_array()
            .iter()
            .map(|v| v.abs())
            .fold(0.0_f32, |acc, v| if v > acc || v.is_nan() { v } else { acc });
        if !big.is_finite() {
            return 5;
        }
        let mut big = big;
        let mut digits = 1;
        while big >= 10.0 {
            big /= 10.0;
            digits += 1;
        }
        digits
    }
}

impl Default for Matrix2D {
    fn default() -> Self {
        Matrix2D::identity()
    }
}

impl Mul for Matrix2D {
    type Output = Matrix2D;

    fn mul(self, rhs: Matrix2D) -> Matrix2D {
        let mut out = self;
        out.apply(&rhs);
        out
    }
}

// Signed fixed width: a leading space stands in for '+'.
fn format_signed(v: f32, digits: usize) -> String {
    let sign = if v < 0.0 { "-" } else { " " };
    if !v.is_finite() {
        return format!("{}{}", sign, v.abs());
    }
    format!("{}{:0width$.4}", sign, v.abs(), width = digits + 5)
}

impl fmt::Display for Matrix2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.dump_digits();
        let rows = [
            [self.m00, self.m01, self.m02],
            [self.m10, self.m11, self.m12],
        ];
        for row in rows {
            let line: Vec<String> = row.iter().map(|v| format_signed(*v, digits)).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        writeln!(f)
    }
}
