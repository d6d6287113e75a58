use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::atomic::{AtomicUsize, Ordering};

use once_cell::sync::OnceCell;

pub fn binary_path() -> String {
    let raw = PathBuf::from(env!("CARGO_BIN_EXE_greeter"));
    if raw.is_absolute() {
        return raw.to_string_lossy().to_string();
    }
    let from_manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(&raw);
    if from_manifest.exists() {
        return from_manifest.to_string_lossy().to_string();
    }
    raw.to_string_lossy().to_string()
}

static COUNTER: AtomicUsize = AtomicUsize::new(0);

pub fn make_temp_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "{prefix}-{}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    let _ = fs::create_dir_all(&dir);
    dir
}

pub fn run_in<S: AsRef<OsStr>>(dir: &Path, args: &[S]) -> Output {
    Command::new(binary_path())
        .current_dir(dir)
        .args(args)
        .output()
        .expect("failed to run binary")
}

pub fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Places a file that is not a shared object where a module is expected.
pub fn write_bogus_module(dir: &Path, rel: &str) {
    let path = dir.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "not an ELF file").unwrap();
}

pub fn write_config(dir: &Path, json: &str) {
    fs::write(dir.join("greeter.json"), json).unwrap();
}

pub fn read_log_contents(dir: &Path) -> Option<String> {
    let logs_dir = dir.join("logs");
    let mut entries = fs::read_dir(&logs_dir).ok()?;
    let entry = entries.find_map(|e| e.ok())?;
    fs::read_to_string(entry.path()).ok()
}

static PLUGIN_DIR: OnceCell<PathBuf> = OnceCell::new();

/// Builds the greeting modules once per test run, next to the binary under test.
pub fn plugin_build_dir() -> &'static Path {
    PLUGIN_DIR.get_or_init(|| {
        let out_dir = PathBuf::from(binary_path())
            .parent()
            .expect("binary has a parent dir")
            .to_path_buf();
        let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");

        let mut cmd = Command::new(option_env!("CARGO").unwrap_or("cargo"));
        cmd.args(["build", "--quiet", "-p", "eng", "-p", "chi", "-p", "swe"])
            .arg("--manifest-path")
            .arg(&manifest);
        if out_dir.ends_with("release") {
            cmd.arg("--release");
        }
        let status = cmd.status().expect("failed to run cargo");
        assert!(status.success(), "building the greeting modules failed");
        out_dir
    })
}

/// Copies the built modules to `eng/eng.so`, `chi/chi.so` and `swe/swe.so` under `dir`.
pub fn install_plugins(dir: &Path) {
    let ext = if cfg!(target_os = "macos") { "dylib" } else { "so" };
    let build_dir = plugin_build_dir();
    for name in ["eng", "chi", "swe"] {
        let target = dir.join(name);
        fs::create_dir_all(&target).unwrap();
        fs::copy(
            build_dir.join(format!("lib{name}.{ext}")),
            target.join(format!("{name}.so")),
        )
        .unwrap_or_else(|e| panic!("copying the {name} module failed: {e}"));
    }
}
