use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// What produced an artifact: the subcommand, its inputs, and its parameters.
pub struct Provenance {
    pub command: &'static str,
    pub inputs: Vec<String>,
    pub params: Value,
}

impl Provenance {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self {
            command,
            inputs: Vec::new(),
            params,
        }
    }

    pub fn input<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.inputs
            .push(path.as_ref().to_string_lossy().into_owned());
        self
    }

    /// JSON document describing this run; `outputs` lists the artifacts.
    pub fn to_json(&self, outputs: &[String]) -> Value {
        json!({
            "code_rev": current_git_rev(),
            "polyface": polyface::VERSION,
            "command": self.command,
            "inputs": self.inputs,
            "params": self.params,
            "outputs": outputs,
        })
    }
}

/// Write `<artifact stem>.provenance.json` next to `artifact`, recording the
/// callsite that produced it.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, prov: &Provenance) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let callsite = Location::caller();
    let path = sidecar_path(artifact);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating provenance dir {}", parent.display()))?;
        }
    }

    let mut doc = prov.to_json(&[artifact.to_string_lossy().into_owned()]);
    doc["callsite"] = json!({ "file": callsite.file(), "line": callsite.line() });
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Commit hash from `GIT_COMMIT` (build time, then run time) or `git`.
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
