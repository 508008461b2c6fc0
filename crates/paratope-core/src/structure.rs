use crate::info::aa3to1;
use anyhow::Result;

/// A single atom: its PDB atom name and its position in Angstroms.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub name: String,
    pub coords: [f32; 3],
}

/// One amino-acid residue with the atoms that were resolved for it.
///
/// `seq_num` is the author-assigned residue sequence number, which for
/// antibody chains is expected to follow the Chothia numbering scheme.
#[derive(Debug, Clone, PartialEq)]
pub struct Residue {
    pub seq_num: i32,
    pub name: String,
    pub atoms: Vec<Atom>,
}

impl Residue {
    /// One-letter code for this residue. Names outside the canonical
    /// twenty map to `X`.
    pub fn one_letter(&self) -> char {
        aa3to1(&self.name)
    }
}

/// A protein chain: an ordered run of residues under one chain identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    id: String,
    residues: Vec<Residue>,
}

impl Chain {
    pub fn new(id: String, residues: Vec<Residue>) -> Self {
        Chain { id, residues }
    }
    pub fn id(&self) -> &str {
        &self.id
    }
    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }
    pub fn len(&self) -> usize {
        self.residues.len()
    }
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
    /// The chain sequence as one-letter codes, in residue order.
    pub fn one_letter_sequence(&self) -> String {
        self.residues.iter().map(Residue::one_letter).collect()
    }
    /// Every atom of the chain, in residue order.
    pub fn iter_atoms(&self) -> impl Iterator<Item = &Atom> {
        self.residues.iter().flat_map(|residue| residue.atoms.iter())
    }
}

/// The protein chains of one structure file, in file order.
#[derive(Debug, Clone)]
pub struct Structure {
    chains: Vec<Chain>,
}

impl Structure {
    pub fn new(chains: Vec<Chain>) -> Self {
        Structure { chains }
    }
    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }
    /// Look up a chain by its identifier.
    pub fn chain(&self, id: &str) -> Option<&Chain> {
        self.chains.iter().find(|chain| chain.id() == id)
    }
    /// Clone a chain out of the structure, failing if the identifier is absent.
    pub fn take_chain(&self, id: &str) -> Result<Chain> {
        self.chain(id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no chain {id} in structure"))
    }
}

/// The three chains of an antibody-antigen complex.
///
/// Multi-chain antigens are not modelled; `antigen` is the single chain
/// named by the dataset manifest.
#[derive(Debug, Clone)]
pub struct Complex {
    pub antigen: Chain,
    pub heavy: Chain,
    pub light: Chain,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn residue(seq_num: i32, name: &str) -> Residue {
        Residue {
            seq_num,
            name: name.to_string(),
            atoms: vec![Atom {
                name: "CA".to_string(),
                coords: [seq_num as f32, 0.0, 0.0],
            }],
        }
    }

    #[test]
    fn test_one_letter_sequence() {
        let chain = Chain::new(
            "H".to_string(),
            vec![residue(1, "ALA"), residue(2, "GLY"), residue(3, "TRP")],
        );
        assert_eq!(chain.one_letter_sequence(), "AGW");
    }

    #[test]
    fn test_unknown_residue_is_x() {
        assert_eq!(residue(1, "XYZ").one_letter(), 'X');
    }

    #[test]
    fn test_chain_lookup() {
        let structure = Structure::new(vec![
            Chain::new("A".to_string(), vec![residue(1, "GLY")]),
            Chain::new("B".to_string(), vec![residue(1, "ALA"), residue(2, "SER")]),
        ]);
        assert_eq!(structure.chain("B").map(Chain::len), Some(2));
        assert!(structure.chain("C").is_none());
        assert!(structure.take_chain("C").is_err());
        assert_eq!(structure.take_chain("A").unwrap().id(), "A");
    }

    #[test]
    fn test_iter_atoms_spans_residues() {
        let chain = Chain::new("A".to_string(), vec![residue(1, "GLY"), residue(2, "ALA")]);
        assert_eq!(chain.iter_atoms().count(), 2);
    }
}
