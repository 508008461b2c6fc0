//! On-disk memoization of a built dataset.
//!
//! The whole dataset (both splits plus parameters) is persisted as one
//! safetensors file. Cache consultation is presence-keyed: if the file
//! exists it is served, with no freshness check against the manifests or
//! structure files it was built from. Delete the file to force a rebuild.

use crate::dataset::{Dataset, DatasetBuilder, DatasetParams, DatasetSplit, StructureSource};
use anyhow::{Context, Result};
use candle_core::{Device, Tensor};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Default cache filename.
pub const DATASET_CACHE: &str = "dataset.safetensors";

pub struct DatasetCache {
    path: PathBuf,
}

impl DatasetCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DatasetCache { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serve the persisted dataset if the cache file exists, otherwise run
    /// the full two-split build and persist it before returning.
    pub fn open_or_build<S: StructureSource>(
        &self,
        builder: &DatasetBuilder<S>,
        train_manifest: &Path,
        test_manifest: &Path,
    ) -> Result<Dataset> {
        if self.path.is_file() {
            println!("Precomputed dataset found, loading...");
            self.load(builder.device())
        } else {
            println!("Computing and storing the dataset...");
            let dataset = builder.compute(train_manifest, test_manifest)?;
            self.store(&dataset)?;
            Ok(dataset)
        }
    }

    pub fn load(&self, device: &Device) -> Result<Dataset> {
        let mut tensors = candle_core::safetensors::load(&self.path, device)
            .with_context(|| format!("unable to load dataset cache {}", self.path.display()))?;
        let mut take = |key: &str| {
            tensors
                .remove(key)
                .with_context(|| format!("cache {} is missing tensor {key}", self.path.display()))
        };
        Ok(Dataset {
            train: DatasetSplit {
                antigens: take("train.antigens")?,
                cdrs: take("train.cdrs")?,
                labels: take("train.labels")?,
            },
            test: DatasetSplit {
                antigens: take("test.antigens")?,
                cdrs: take("test.cdrs")?,
                labels: take("test.labels")?,
            },
            params: DatasetParams {
                max_ag_len: scalar_u32(&take("params.max_ag_len")?)? as usize,
                max_cdr_len: scalar_u32(&take("params.max_cdr_len")?)? as usize,
                pos_class_weight: scalar_f32(&take("params.pos_class_weight")?)?,
            },
        })
    }

    pub fn store(&self, dataset: &Dataset) -> Result<()> {
        let device = dataset.train.antigens.device();
        let mut tensors: HashMap<String, Tensor> = HashMap::new();
        tensors.insert("train.antigens".to_string(), dataset.train.antigens.clone());
        tensors.insert("train.cdrs".to_string(), dataset.train.cdrs.clone());
        tensors.insert("train.labels".to_string(), dataset.train.labels.clone());
        tensors.insert("test.antigens".to_string(), dataset.test.antigens.clone());
        tensors.insert("test.cdrs".to_string(), dataset.test.cdrs.clone());
        tensors.insert("test.labels".to_string(), dataset.test.labels.clone());
        // scalar parameters ride along as single-element tensors so the
        // dataset stays one self-contained file
        tensors.insert(
            "params.max_ag_len".to_string(),
            Tensor::new(&[dataset.params.max_ag_len as u32], device)?,
        );
        tensors.insert(
            "params.max_cdr_len".to_string(),
            Tensor::new(&[dataset.params.max_cdr_len as u32], device)?,
        );
        tensors.insert(
            "params.pos_class_weight".to_string(),
            Tensor::new(&[dataset.params.pos_class_weight], device)?,
        );
        candle_core::safetensors::save(&tensors, &self.path)
            .with_context(|| format!("unable to write dataset cache {}", self.path.display()))
    }
}

fn scalar_u32(tensor: &Tensor) -> Result<u32> {
    tensor
        .to_vec1::<u32>()?
        .first()
        .copied()
        .context("parameter tensor is empty")
}

fn scalar_f32(tensor: &Tensor) -> Result<f32> {
    tensor
        .to_vec1::<f32>()?
        .first()
        .copied()
        .context("parameter tensor is empty")
}
