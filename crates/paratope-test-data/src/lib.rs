//! paratope-test-data
//!
//! A module to provide test files embedded in the crate for use in testing.
//! Example binary data is included in the crate distribution for reference files.
//!
//! The test files are represented as `TestFile` objects which package the raw binary data
//! and create temporary files for programs to operate on.
use std::fs;
use std::path::Path;
use tempfile::{Builder, NamedTempFile};

#[derive(Debug)]
/// Test File
///
/// Example usage:
///
/// ```ignore
/// // returns (filepath, _tempfile_handle).
/// // _handle ensures the tempfile remains in scope
/// use paratope_test_data::TestFile;
/// let (prot_file, _temp) = TestFile::complex_01().create_temp().unwrap();
/// let (manifest, _temp) = TestFile::manifest_train_01().create_temp().unwrap();
///
/// ```
pub struct TestFile {
    filebinary: &'static [u8],
    suffix: &'static str,
}

impl TestFile {
    /// Minimal antibody-antigen complex with chains H, L and A.
    ///
    /// The heavy chain CDR loops hold 5, 3 and 7 residues, the light chain
    /// loops 4, 2 and 6. Two H3 residues and one L1 residue sit within
    /// contact range of the 8-residue antigen chain; everything else is
    /// kept far away. Chain A also carries one water.
    pub fn complex_01() -> Self {
        Self {
            filebinary: include_bytes!("../data/structures/9mab.pdb"),
            suffix: "pdb",
        }
    }
    /// Two-row training manifest pointing at `complex_01`.
    pub fn manifest_train_01() -> Self {
        Self {
            filebinary: include_bytes!("../data/manifests/abip_tiny_train.csv"),
            suffix: "csv",
        }
    }
    /// One-row held-out manifest pointing at `complex_01`.
    pub fn manifest_test_01() -> Self {
        Self {
            filebinary: include_bytes!("../data/manifests/abip_tiny_test.csv"),
            suffix: "csv",
        }
    }

    pub fn create_temp(&self) -> std::io::Result<(String, NamedTempFile)> {
        let temp = Builder::new()
            .suffix(&format!(".{}", self.suffix))
            .tempfile()?;

        fs::write(&temp, self.filebinary)?;
        let path = temp.path().to_string_lossy().into_owned();

        Ok((path, temp))
    }

    /// Write the file to a caller-chosen path, for layouts where the
    /// filename matters (for example `<dir>/<pdb_id>.pdb`).
    pub fn write_to(&self, path: &Path) -> std::io::Result<()> {
        fs::write(path, self.filebinary)
    }
}
