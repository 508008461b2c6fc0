//! Complementarity-determining regions of Chothia-numbered antibody chains.

use crate::structure::{Chain, Residue};
use std::collections::HashMap;
use strum::{Display, EnumIter, EnumString};

/// Residues taken on each side of a CDR beyond its Chothia window.
pub const NUM_EXTRA_RESIDUES: i32 = 2;

/// The six CDR loops, three per antibody chain.
///
/// Enum order is the canonical loop order used for every per-entry tensor:
/// heavy chain loops first, then light chain loops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum Cdr {
    H1,
    H2,
    H3,
    L1,
    L2,
    L3,
}

impl Cdr {
    /// Chothia window for this loop as inclusive residue sequence numbers,
    /// before widening.
    #[rustfmt::skip]
    pub const fn chothia_window(&self) -> (i32, i32) {
        match self {
            Cdr::H1 => (26, 32), Cdr::H2 => (52, 56), Cdr::H3 => (95, 102),
            Cdr::L1 => (24, 34), Cdr::L2 => (50, 56), Cdr::L3 => (89, 97),
        }
    }

    /// True if a residue sequence number falls in the widened window.
    pub fn contains(&self, seq_num: i32) -> bool {
        let (low, high) = self.chothia_window();
        (low - NUM_EXTRA_RESIDUES..=high + NUM_EXTRA_RESIDUES).contains(&seq_num)
    }
}

/// Collect the residues of the requested CDR loops from one chain.
///
/// Selection is by residue sequence number, so the chain must carry Chothia
/// numbering. Residues keep their chain order within each loop. Loops with
/// no residues in the chain are absent from the map.
pub fn extract_cdrs<'a>(chain: &'a Chain, loops: &[Cdr]) -> HashMap<Cdr, Vec<&'a Residue>> {
    let mut cdrs: HashMap<Cdr, Vec<&Residue>> = HashMap::new();
    for residue in chain.residues() {
        for &cdr in loops {
            if cdr.contains(residue.seq_num) {
                cdrs.entry(cdr).or_default().push(residue);
            }
        }
    }
    cdrs
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn residue(seq_num: i32) -> Residue {
        Residue {
            seq_num,
            name: "GLY".to_string(),
            atoms: vec![],
        }
    }

    #[test]
    fn test_loop_order_is_canonical() {
        let order: Vec<Cdr> = Cdr::iter().collect();
        assert_eq!(
            order,
            [Cdr::H1, Cdr::H2, Cdr::H3, Cdr::L1, Cdr::L2, Cdr::L3]
        );
    }

    #[test]
    fn test_windows_are_widened() {
        // H1 spans 26-32, widened by two on each side
        assert!(Cdr::H1.contains(24));
        assert!(Cdr::H1.contains(34));
        assert!(!Cdr::H1.contains(23));
        assert!(!Cdr::H1.contains(35));
    }

    #[test]
    fn test_extract_cdrs() {
        let chain = Chain::new(
            "H".to_string(),
            (20..=60).map(residue).collect(),
        );
        let cdrs = extract_cdrs(&chain, &[Cdr::H1, Cdr::H2]);

        let h1: Vec<i32> = cdrs[&Cdr::H1].iter().map(|r| r.seq_num).collect();
        assert_eq!(h1, (24..=34).collect::<Vec<i32>>());

        let h2: Vec<i32> = cdrs[&Cdr::H2].iter().map(|r| r.seq_num).collect();
        assert_eq!(h2, (50..=58).collect::<Vec<i32>>());

        // H3 was not requested
        assert!(!cdrs.contains_key(&Cdr::H3));
    }

    #[test]
    fn test_extract_cdrs_missing_loop() {
        let chain = Chain::new("H".to_string(), (26..=32).map(residue).collect());
        let cdrs = extract_cdrs(&chain, &[Cdr::H1, Cdr::H3]);
        assert_eq!(cdrs[&Cdr::H1].len(), 7);
        assert!(!cdrs.contains_key(&Cdr::H3));
    }
}
