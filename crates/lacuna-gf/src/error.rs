//! Error types for field and matrix arithmetic.

/// Errors that can occur in GF(2^n) arithmetic or matrix algebra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GfError {
    /// The requested field degree is outside the supported range.
    #[error("unsupported field degree {0}: must be between 1 and 7")]
    UnsupportedDegree(u32),

    /// Zero has no multiplicative inverse.
    #[error("zero has no inverse in GF(2^{degree})")]
    NoInverse {
        /// Degree of the field the inversion was attempted in.
        degree: u32,
    },

    /// The field cannot host a Cauchy matrix of the requested shape:
    /// rows and columns must index disjoint sets of field elements.
    #[error("field of order {order} is too small for a Cauchy matrix needing {needed} distinct points")]
    FieldTooSmall {
        /// Number of elements in the field.
        order: u16,
        /// Distinct points the requested shape needs (rows + cols).
        needed: usize,
    },

    /// The matrix has determinant zero and cannot be inverted.
    #[error("{dim}x{dim} matrix is singular")]
    Singular {
        /// Dimension of the square matrix.
        dim: usize,
    },
}
