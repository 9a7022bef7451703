use std::error::Error;
use std::fmt::{Display, Formatter};

/// Degenerate input detected by one of the math operations.
///
/// Operations that would otherwise divide by a zero length or pivot return
/// this instead of producing NaN components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MathError {
    /// A zero length vector or quaternion has no direction.
    ZeroLength,
    /// Gauss-Jordan elimination found no usable pivot in `column`.
    SingularMatrix { column: usize, pivot: f32 },
    /// The basis row for `axis` has zero length, its scale can't be divided out.
    ZeroScale { axis: usize },
    /// A projected point ended up with a homogeneous `w` of zero.
    PointAtInfinity,
}

impl Error for MathError {}

impl Display for MathError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MathError::ZeroLength => write!(f, "zero length vector has no direction"),
            MathError::SingularMatrix { column, pivot } => {
                write!(f, "singular matrix: pivot {pivot} in column {column}")
            }
            MathError::ZeroScale { axis } => write!(f, "zero scale on axis {axis}"),
            MathError::PointAtInfinity => write!(f, "projected point has w = 0"),
        }
    }
}

pub type MathResult<T> = Result<T, MathError>;
