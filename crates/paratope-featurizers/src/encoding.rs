//! One-hot encoding of residue sequences.

use candle_core::{Device, Result, Tensor};
use candle_nn::encoding::one_hot;

/// Width of one encoded residue: an indicator over the canonical
/// twenty-letter amino-acid alphabet.
pub const NUM_FEATURES: usize = 20;

#[rustfmt::skip]
pub fn aa1to_int(aa: char) -> i64 {
    match aa {
        'A' => 0, 'C' => 1, 'D' => 2,
        'E' => 3, 'F' => 4, 'G' => 5,
        'H' => 6, 'I' => 7, 'K' => 8,
        'L' => 9, 'M' => 10, 'N' => 11,
        'P' => 12, 'Q' => 13, 'R' => 14,
        'S' => 15, 'T' => 16, 'V' => 17,
        'W' => 18, 'Y' => 19, _   => -1,
    }
}

/// Encode a one-letter sequence as a `[len, NUM_FEATURES]` tensor.
///
/// Letters outside the alphabet map to index -1, which `one_hot` turns
/// into an all-zero row, so nonstandard residues keep their position in
/// the sequence without claiming a feature column.
pub fn seq_to_one_hot(seq: &str, device: &Device) -> Result<Tensor> {
    let indices: Vec<i64> = seq.chars().map(aa1to_int).collect();
    let len = indices.len();
    let indices = Tensor::from_vec(indices, len, device)?;
    one_hot(indices, NUM_FEATURES, 1f32, 0f32)
}
