use crate::{DatasetBuilder, DatasetCache, FeatureConfig, PdbDirSource};
use candle_core::Device;
use std::path::Path;

pub fn execute(
    train_manifest: &Path,
    test_manifest: &Path,
    pdb_dir: &Path,
    cache: &Path,
) -> anyhow::Result<()> {
    let builder = DatasetBuilder::new(
        PdbDirSource::new(pdb_dir),
        FeatureConfig::default(),
        Device::Cpu,
    );
    let dataset = DatasetCache::new(cache).open_or_build(&builder, train_manifest, test_manifest)?;

    println!("train antigens: {:?}", dataset.train.antigens.dims());
    println!("train cdrs:     {:?}", dataset.train.cdrs.dims());
    println!("train labels:   {:?}", dataset.train.labels.dims());
    println!("test antigens:  {:?}", dataset.test.antigens.dims());
    println!("test cdrs:      {:?}", dataset.test.cdrs.dims());
    println!("test labels:    {:?}", dataset.test.labels.dims());
    println!("pos class weight: {:.4}", dataset.params.pos_class_weight);
    Ok(())
}
