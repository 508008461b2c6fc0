//! # paratope-core
//!
//! A library for working with antibody-antigen complexes at the structure level.
//!
//! __paratope-core__ provides functionality for:
//! * Reading PDB files into a light-weight chain/residue/atom model
//! * Locating the six complementarity-determining regions of a Chothia-numbered antibody
//! * Finding antibody residues in atomic contact with an antigen chain
//!
//! The main entry point is the [`Structure`] struct which holds the protein chains of one
//! complex and provides lookups by chain identifier.
//!
mod cdr;
mod contact;
mod conversions;
mod info;
mod structure;

pub use self::cdr::{extract_cdrs, Cdr, NUM_EXTRA_RESIDUES};
pub use self::contact::{NeighborSearch, CONTACT_DISTANCE};
pub use self::info::{aa3to1, is_amino_acid};
pub use self::structure::{Atom, Chain, Complex, Residue, Structure};
