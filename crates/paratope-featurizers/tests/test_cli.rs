use assert_cmd::Command;
use paratope_test_data::TestFile;
use tempfile;

#[test]
fn test_dataset_command() {
    let dir = tempfile::tempdir().unwrap();
    TestFile::complex_01()
        .write_to(&dir.path().join("9mab.pdb"))
        .unwrap();
    let (train_manifest, _tmp1) = TestFile::manifest_train_01().create_temp().unwrap();
    let (test_manifest, _tmp2) = TestFile::manifest_test_01().create_temp().unwrap();
    let cache = dir.path().join("dataset.safetensors");

    let mut cmd = Command::cargo_bin("paratope-featurizers").unwrap();
    cmd.arg("dataset")
        .arg("--train-manifest")
        .arg(&train_manifest)
        .arg("--test-manifest")
        .arg(&test_manifest)
        .arg("--pdb-dir")
        .arg(dir.path())
        .arg("--cache")
        .arg(&cache);

    cmd.assert().success();
    assert!(cache.is_file());

    // a second run hits the cache
    let mut cmd = Command::cargo_bin("paratope-featurizers").unwrap();
    cmd.arg("dataset")
        .arg("--train-manifest")
        .arg(&train_manifest)
        .arg("--test-manifest")
        .arg(&test_manifest)
        .arg("--pdb-dir")
        .arg(dir.path())
        .arg("--cache")
        .arg(&cache);

    let output = cmd.output().unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Precomputed dataset found"));
}
