use crate::commands;
use crate::DATASET_CACHE;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the train/test tensor dataset, or load it from the cache.
    Dataset {
        /// CSV manifest of training complexes
        #[arg(long, default_value = "data/abip_train.csv")]
        train_manifest: PathBuf,

        /// CSV manifest of held-out complexes
        #[arg(long, default_value = "data/abip_test.csv")]
        test_manifest: PathBuf,

        /// Directory holding one `<pdb_id>.pdb` file per manifest row
        #[arg(long, default_value = "data/pdbs")]
        pdb_dir: PathBuf,

        /// Cache file; served as-is when present
        #[arg(long, default_value = DATASET_CACHE)]
        cache: PathBuf,
    },
}

impl Cli {
    pub fn execute(self) -> anyhow::Result<()> {
        match self.command {
            Commands::Dataset {
                train_manifest,
                test_manifest,
                pdb_dir,
                cache,
            } => commands::dataset::execute(&train_manifest, &test_manifest, &pdb_dir, &cache),
        }
    }
}
