//! Residue name tables.
//!
//! Lookups used when converting parsed structure files into chains:
//!
//! - `is_amino_acid()` - Check if a residue name is a protein residue
//! - `aa3to1()` - Translate a three-letter residue name to its one-letter code
//!

use std::collections::HashSet;
use std::sync::OnceLock;

static AMINO_ACIDS: OnceLock<HashSet<&'static str>> = OnceLock::new();

/// The canonical twenty plus the nonstandard residues commonly deposited
/// in antibody crystal structures.
fn get_amino_acids() -> &'static HashSet<&'static str> {
    AMINO_ACIDS.get_or_init(|| {
        HashSet::from([
            "ALA", "ARG", "ASN", "ASP", "CYS", "GLN", "GLU", "GLY", "HIS", "ILE", "LEU", "LYS",
            "MET", "PHE", "PRO", "SER", "THR", "TRP", "TYR", "VAL", "MSE", "SEC", "PYL", "UNK",
        ])
    })
}

pub fn is_amino_acid(symbol: &str) -> bool {
    get_amino_acids().contains(symbol)
}

#[rustfmt::skip]
pub fn aa3to1(aa: &str) -> char {
    match aa {
        "ALA" => 'A', "CYS" => 'C', "ASP" => 'D',
        "GLU" => 'E', "PHE" => 'F', "GLY" => 'G',
        "HIS" => 'H', "ILE" => 'I', "LYS" => 'K',
        "LEU" => 'L', "MET" => 'M', "ASN" => 'N',
        "PRO" => 'P', "GLN" => 'Q', "ARG" => 'R',
        "SER" => 'S', "THR" => 'T', "VAL" => 'V',
        "TRP" => 'W', "TYR" => 'Y', _     => 'X',
    }
}
