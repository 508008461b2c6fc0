//! Manifest-driven dataset assembly.
//!
//! A dataset is described by two CSV manifests (training and held-out) whose
//! rows name a PDB entry and its heavy, light and antigen chain identifiers.
//! Every row is featurized with [`process_chains`] and the per-entry tensors
//! are stacked along a new leading axis, so entry `i` of each stacked tensor
//! corresponds to manifest row `i`.

use crate::featurizer::{process_chains, ContactTally, FeatureConfig};
use anyhow::{bail, Context, Result};
use candle_core::{Device, Tensor};
use itertools::izip;
use paratope_core::{Complex, Structure};
use polars::prelude::*;
use std::path::{Path, PathBuf};

/// One row of a dataset manifest.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestEntry {
    pub pdb_id: String,
    pub heavy_chain: String,
    pub light_chain: String,
    pub antigen_chain: String,
}

/// Read a manifest CSV with the columns `PDB`, `Ab Heavy Chain`,
/// `Ab Light Chain` and `Ag`, in file order.
pub fn read_manifest(path: &Path) -> Result<Vec<ManifestEntry>> {
    let df = CsvReadOptions::default()
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .with_context(|| format!("unable to open manifest {}", path.display()))?
        .finish()
        .with_context(|| format!("unable to read manifest {}", path.display()))?;

    let pdbs = df.column("PDB")?.str()?;
    let heavies = df.column("Ab Heavy Chain")?.str()?;
    let lights = df.column("Ab Light Chain")?.str()?;
    let antigens = df.column("Ag")?.str()?;

    let mut entries = Vec::with_capacity(df.height());
    for (row, cells) in izip!(pdbs, heavies, lights, antigens).enumerate() {
        match cells {
            (Some(pdb_id), Some(heavy), Some(light), Some(antigen)) => {
                entries.push(ManifestEntry {
                    pdb_id: pdb_id.to_string(),
                    heavy_chain: heavy.to_string(),
                    light_chain: light.to_string(),
                    antigen_chain: antigen.to_string(),
                })
            }
            _ => bail!("manifest {} row {row} has an empty cell", path.display()),
        }
    }
    Ok(entries)
}

/// Resolves a manifest entry to an in-memory complex.
///
/// The disk-backed implementation is [`PdbDirSource`]; tests substitute
/// their own to observe or fake structure loading.
pub trait StructureSource {
    fn load_complex(&self, entry: &ManifestEntry) -> Result<Complex>;
}

/// Loads `<dir>/<pdb_id>.pdb` and pulls out the three manifest chains.
pub struct PdbDirSource {
    dir: PathBuf,
}

impl PdbDirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        PdbDirSource { dir: dir.into() }
    }
}

impl StructureSource for PdbDirSource {
    fn load_complex(&self, entry: &ManifestEntry) -> Result<Complex> {
        let path = self.dir.join(format!("{}.pdb", entry.pdb_id));
        let path = path
            .to_str()
            .with_context(|| format!("non-unicode structure path for {}", entry.pdb_id))?;
        let structure = Structure::open(path)?;
        Ok(Complex {
            antigen: structure
                .take_chain(&entry.antigen_chain)
                .with_context(|| format!("antigen chain of {}", entry.pdb_id))?,
            heavy: structure
                .take_chain(&entry.heavy_chain)
                .with_context(|| format!("heavy chain of {}", entry.pdb_id))?,
            light: structure
                .take_chain(&entry.light_chain)
                .with_context(|| format!("light chain of {}", entry.pdb_id))?,
        })
    }
}

/// Tensors for one manifest split, stacked along a leading entry axis.
#[derive(Debug)]
pub struct DatasetSplit {
    /// `[entries, 6, max_ag_len, NUM_FEATURES]`
    pub antigens: Tensor,
    /// `[entries, 6, max_cdr_len, NUM_FEATURES]`
    pub cdrs: Tensor,
    /// `[entries, 6, max_cdr_len, 1]`
    pub labels: Tensor,
}

/// Parameters a model needs alongside the tensors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatasetParams {
    pub max_ag_len: usize,
    pub max_cdr_len: usize,
    /// Ratio of all training CDR residues to those in contact. Always
    /// derived from the training split.
    pub pos_class_weight: f32,
}

/// The fully assembled training and held-out splits.
#[derive(Debug)]
pub struct Dataset {
    pub train: DatasetSplit,
    pub test: DatasetSplit,
    pub params: DatasetParams,
}

/// Builds dataset splits by featurizing every row of a manifest.
pub struct DatasetBuilder<S> {
    source: S,
    config: FeatureConfig,
    device: Device,
}

impl<S: StructureSource> DatasetBuilder<S> {
    pub fn new(source: S, config: FeatureConfig, device: Device) -> Self {
        DatasetBuilder {
            source,
            config,
            device,
        }
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    /// Featurize every manifest row and stack the results. Also returns the
    /// positive class weight observed in this split; a split with no contact
    /// residues has no meaningful weight and fails instead.
    pub fn process_manifest(&self, manifest: &Path) -> Result<(DatasetSplit, f32)> {
        let mut tally = ContactTally::default();
        let mut antigens = Vec::new();
        let mut cdrs = Vec::new();
        let mut labels = Vec::new();

        for entry in read_manifest(manifest)? {
            println!("Processing PDB: {}", entry.pdb_id);
            let complex = self.source.load_complex(&entry)?;
            let tensors = process_chains(&complex, &self.config, &self.device)
                .with_context(|| format!("unable to featurize {}", entry.pdb_id))?;
            tally.in_contact += tensors.tally.in_contact;
            tally.residues += tensors.tally.residues;
            antigens.push(tensors.antigens);
            cdrs.push(tensors.cdrs);
            labels.push(tensors.labels);
        }

        if tally.in_contact == 0 {
            bail!(
                "no contact residues in {}; the positive class weight is undefined",
                manifest.display()
            );
        }
        let split = DatasetSplit {
            antigens: Tensor::stack(&antigens, 0)?,
            cdrs: Tensor::stack(&cdrs, 0)?,
            labels: Tensor::stack(&labels, 0)?,
        };
        Ok((split, tally.residues as f32 / tally.in_contact as f32))
    }

    /// Build both splits. The held-out split's own contact ratio is
    /// discarded; the recorded weight comes from the training split.
    pub fn compute(&self, train_manifest: &Path, test_manifest: &Path) -> Result<Dataset> {
        let (train, pos_class_weight) = self.process_manifest(train_manifest)?;
        let (test, _) = self.process_manifest(test_manifest)?;
        Ok(Dataset {
            train,
            test,
            params: DatasetParams {
                max_ag_len: self.config.max_ag_len,
                max_cdr_len: self.config.max_cdr_len,
                pos_class_weight,
            },
        })
    }
}
