//! The erasure coder: a validated configuration plus the Cauchy encoding
//! matrix it works with.

use lacuna_gf::{Field, Matrix};

use crate::config::CoderConfig;
use crate::error::CoderError;

/// An erasure coder for a fixed (N, K, word width) configuration.
///
/// Owns the N×K Cauchy matrix over GF(2^n) chosen at construction, and its
/// GF(2) bit expansion; both are reused across every block of every encode
/// call. Any K of the N produced shard streams reconstruct the original
/// stream (see [`decode`](Coder::decode)).
pub struct Coder {
    config: CoderConfig,
    field: Field,
    encoder: Matrix,
    encoder_bits: Matrix,
}

impl Coder {
    /// Build a coder from a validated configuration.
    pub fn new(config: CoderConfig) -> Result<Self, CoderError> {
        let field = Field::new(config.degree())?;
        let encoder = Matrix::cauchy(config.shards(), config.data_shards(), field)?;
        let encoder_bits = encoder.to_binary();
        Ok(Self {
            config,
            field,
            encoder,
            encoder_bits,
        })
    }

    /// The coder's configuration.
    pub fn config(&self) -> &CoderConfig {
        &self.config
    }

    /// The field the encoding matrix lives in.
    pub fn field(&self) -> Field {
        self.field
    }

    /// The N×K Cauchy encoding matrix.
    pub fn encoder_matrix(&self) -> &Matrix {
        &self.encoder
    }

    /// The bit expansion of the encoding matrix, shaped
    /// (N·degree)×(K·degree).
    pub(crate) fn encoder_bits(&self) -> &Matrix {
        &self.encoder_bits
    }

    /// The GF(2) decode matrix for a given set of missing shards: the bit
    /// expansion of the inverse of the surviving K×K submatrix of the
    /// encoder. Computed once per decode call.
    pub(crate) fn decoder_bits(&self, excluded_shards: &[usize]) -> Result<Matrix, CoderError> {
        let surviving = self.encoder.submatrix(excluded_shards, &[]);
        Ok(surviving.inverse()?.to_binary())
    }
}

/// Multiply a GF(2) matrix by a vector of words: output word i is the XOR
/// of the input words whose bit is set in row i.
///
/// This is the hot loop of both encode and decode; the field products were
/// already folded into the bit expansion, leaving conditional XORs.
pub(crate) fn apply_bits(matrix: &Matrix, words: &[u64]) -> Vec<u64> {
    debug_assert_eq!(matrix.cols(), words.len());
    let mut out = Vec::with_capacity(matrix.rows());
    for r in 0..matrix.rows() {
        let mut acc = 0u64;
        for (&bit, &word) in matrix.row(r).iter().zip(words) {
            if bit != 0 {
                acc ^= word;
            }
        }
        out.push(acc);
    }
    out
}
