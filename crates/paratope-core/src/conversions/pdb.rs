use crate::info::is_amino_acid;
use crate::structure::{Atom, Chain, Residue, Structure};
use anyhow::{anyhow, Result};
use pdbtbx::PDB;

impl From<&PDB> for Structure {
    // the PDB API requires us to iterate:
    // PDB --> Chain --> Residue --> Atom if we want data from all.
    // Solvent and other non-protein residues are dropped here so that
    // chains hold amino acids only.
    fn from(pdb_data: &PDB) -> Self {
        let chains = pdb_data
            .chains()
            .map(|chain| {
                let residues = chain
                    .residues()
                    .filter_map(|residue| {
                        let res_name = residue.name().unwrap_or_default().to_string();
                        if !is_amino_acid(&res_name) {
                            return None;
                        }
                        let (res_number, _insertion_code) = residue.id();
                        let atoms = residue
                            .atoms()
                            .map(|atom| {
                                let (x, y, z) = atom.pos();
                                Atom {
                                    name: atom.name().to_string(),
                                    coords: [x as f32, y as f32, z as f32],
                                }
                            })
                            .collect();
                        Some(Residue {
                            seq_num: res_number as i32,
                            name: res_name,
                            atoms,
                        })
                    })
                    .collect();
                Chain::new(chain.id().to_string(), residues)
            })
            .collect();
        Structure::new(chains)
    }
}

impl Structure {
    /// Open a PDB file and convert it to protein chains. Parse warnings
    /// below the failure threshold are discarded.
    pub fn open(path: &str) -> Result<Structure> {
        let (pdb_data, _discarded) = pdbtbx::open(path)
            .map_err(|errors| anyhow!("unable to parse {path}: {errors:?}"))?;
        Ok(Structure::from(&pdb_data))
    }
}
