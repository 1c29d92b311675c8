use ebrick::config::AppConfig;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// The configuration used throughout the integration tests.
pub fn demo_config() -> AppConfig {
    AppConfig {
        modules: vec!["auth".to_string(), "billing".to_string()],
        database: true,
        cache: false,
        messaging: false,
        observability: true,
        ..AppConfig::new("demo", "github.com/x/demo")
    }
}

/// Relative paths of every file under `root`, with forward slashes.
pub fn list_files(root: &Path) -> BTreeSet<String> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(|e| relative(root, e.path()))
        .collect()
}

/// Relative paths of every directory under `root` (excluding `root` itself).
pub fn list_dirs(root: &Path) -> BTreeSet<String> {
    WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_dir())
        .map(|e| relative(root, e.path()))
        .collect()
}

fn relative(root: &Path, path: &Path) -> String {
    let rel: PathBuf = path.strip_prefix(root).unwrap().to_path_buf();
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Prints files present in only one of the directories and files whose
/// content differs.
pub fn print_dir_diff(dir1: &Path, dir2: &Path) {
    let files1 = list_files(dir1);
    let files2 = list_files(dir2);

    println!("\n=== Directory Comparison ===");
    println!("First:  {:?}", dir1);
    println!("Second: {:?}", dir2);

    for file in files1.difference(&files2) {
        println!("  + {file}");
    }
    for file in files2.difference(&files1) {
        println!("  - {file}");
    }
    for file in files1.intersection(&files2) {
        let content1 = fs::read(dir1.join(file)).unwrap();
        let content2 = fs::read(dir2.join(file)).unwrap();
        if content1 != content2 {
            println!("\n  File: {file}");
            println!("  --- First:\n{}", String::from_utf8_lossy(&content1));
            println!("  --- Second:\n{}", String::from_utf8_lossy(&content2));
        }
    }
    println!("=== End of Comparison ===\n");
}
