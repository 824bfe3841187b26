use std::path::PathBuf;

/// Absolute path of a CSV under `src/test/inputs`
pub fn fixture_path(filename: &str) -> String {
    let mut f = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    f.push("src/test/inputs");
    f.push(filename);
    f.to_string_lossy().into_owned()
}

/// Report path under `src/test/outputs/<test_subdir>`, creating the directory
pub fn output_path(filename: &str, test_subdir: &str) -> String {
    let mut f = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    f.push("src/test/outputs");
    f.push(test_subdir);
    std::fs::create_dir_all(&f).unwrap();
    f.push(format!("{}.csv", filename));
    f.to_string_lossy().into_owned()
}
