//! paratope-featurizers
//!
//! - turns antibody-antigen complexes into fixed-shape, ML-ready tensors
//!   with per-residue contact labels.
//! - assembles and caches whole train/test datasets from CSV manifests.
//! - CLI to handle the above.
//!
mod cache;
pub mod cli;
mod commands;
mod dataset;
mod encoding;
mod featurizer;

pub use cache::{DatasetCache, DATASET_CACHE};
pub use dataset::{
    read_manifest, Dataset, DatasetBuilder, DatasetParams, DatasetSplit, ManifestEntry,
    PdbDirSource, StructureSource,
};
pub use encoding::{aa1to_int, seq_to_one_hot, NUM_FEATURES};
pub use featurizer::{
    process_chains, ContactTally, EntryTensors, FeatureConfig, DATASET_MAX_AG_LEN,
    DATASET_MAX_CDR_LEN,
};
