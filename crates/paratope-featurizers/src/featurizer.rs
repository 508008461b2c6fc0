//! Complex Featurizer for antibody-antigen interfaces
//!
//! Turns one antibody-antigen complex into fixed-shape tensors:
//! - One-hot encoded residues for each of the six CDR loops
//! - Per-residue contact labels against the antigen chain
//! - The antigen sequence, replicated once per loop
//!
//! All tensors are zero-padded to the lengths in [`FeatureConfig`] so that
//! entries from different complexes can be stacked into one dataset.

use crate::encoding::{seq_to_one_hot, NUM_FEATURES};
use candle_core::{Device, Result, Tensor};
use paratope_core::{extract_cdrs, Cdr, Complex, NeighborSearch, Residue, CONTACT_DISTANCE};
use strum::IntoEnumIterator;

/// Default CDR padding length; the longest loop in the ABIP dataset.
pub const DATASET_MAX_CDR_LEN: usize = 31;
/// Default antigen padding length; the longest antigen chain in the ABIP dataset.
pub const DATASET_MAX_AG_LEN: usize = 1269;

/// Padded tensor geometry shared by every entry of a dataset.
#[derive(Debug, Clone, Copy)]
pub struct FeatureConfig {
    pub max_cdr_len: usize,
    pub max_ag_len: usize,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        FeatureConfig {
            max_cdr_len: DATASET_MAX_CDR_LEN,
            max_ag_len: DATASET_MAX_AG_LEN,
        }
    }
}

/// Running totals of contact labels over real (unpadded) CDR residues.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactTally {
    pub in_contact: usize,
    pub residues: usize,
}

/// Fixed-shape tensors for one manifest entry.
#[derive(Debug)]
pub struct EntryTensors {
    /// `[6, max_ag_len, NUM_FEATURES]`; the six slices are identical.
    pub antigens: Tensor,
    /// `[6, max_cdr_len, NUM_FEATURES]` in H1, H2, H3, L1, L2, L3 order.
    pub cdrs: Tensor,
    /// `[6, max_cdr_len, 1]` contact labels aligned with `cdrs`.
    pub labels: Tensor,
    pub tally: ContactTally,
}

/// Zero-pad a `[len, width]` matrix to `[target, width]`. A sequence
/// longer than its padded shape is unrepresentable, so that fails rather
/// than truncates.
fn pad_rows(matrix: &Tensor, target: usize, what: &str) -> Result<Tensor> {
    let (rows, _width) = matrix.dims2()?;
    if rows > target {
        return Err(candle_core::Error::Msg(format!(
            "{what} has {rows} residues, more than the configured maximum of {target}"
        )));
    }
    matrix.pad_with_zeros(0, 0, target - rows)
}

/// Featurize one complex.
///
/// CDR residues are located by Chothia numbering on the heavy and light
/// chains, labelled by atomic proximity to the antigen chain, one-hot
/// encoded and padded. Loops always appear in canonical order, so row `i`
/// of every per-loop tensor refers to the same loop.
pub fn process_chains(
    complex: &Complex,
    config: &FeatureConfig,
    device: &Device,
) -> Result<EntryTensors> {
    let mut cdrs = extract_cdrs(&complex.heavy, &[Cdr::H1, Cdr::H2, Cdr::H3]);
    cdrs.extend(extract_cdrs(&complex.light, &[Cdr::L1, Cdr::L2, Cdr::L3]));

    let antigen_atoms = complex.antigen.iter_atoms().map(|atom| atom.coords);
    let search = NeighborSearch::new(antigen_atoms, CONTACT_DISTANCE);

    let mut tally = ContactTally::default();
    let mut cdr_mats = Vec::new();
    let mut label_mats = Vec::new();
    for cdr in Cdr::iter() {
        let residues: &[&Residue] = cdrs.get(&cdr).map(Vec::as_slice).unwrap_or(&[]);

        let contact: Vec<f32> = residues
            .iter()
            .map(|res| {
                if search.residue_in_contact(res) {
                    1f32
                } else {
                    0f32
                }
            })
            .collect();
        tally.residues += contact.len();
        tally.in_contact += contact.iter().filter(|&&label| label > 0.0).count();

        let seq: String = residues.iter().map(|res| res.one_letter()).collect();
        let encoded = seq_to_one_hot(&seq, device)?;
        cdr_mats.push(pad_rows(&encoded, config.max_cdr_len, &format!("CDR {cdr}"))?);

        let len = contact.len();
        let labels = Tensor::from_vec(contact, (len, 1), device)?;
        label_mats.push(pad_rows(&labels, config.max_cdr_len, &format!("CDR {cdr}"))?);
    }
    let cdr_tensor = Tensor::stack(&cdr_mats, 0)?;
    let label_tensor = Tensor::stack(&label_mats, 0)?;

    let encoded = seq_to_one_hot(&complex.antigen.one_letter_sequence(), device)?;
    let padded = pad_rows(&encoded, config.max_ag_len, "antigen chain")?;
    // one antigen copy per CDR row, materialized so downstream stacking
    // sees a plain contiguous tensor
    let antigen_tensor = padded
        .unsqueeze(0)?
        .expand((6, config.max_ag_len, NUM_FEATURES))?
        .contiguous()?;

    Ok(EntryTensors {
        antigens: antigen_tensor,
        cdrs: cdr_tensor,
        labels: label_tensor,
        tally,
    })
}
