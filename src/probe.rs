//! One-shot detection of alternate OS environments (WSL distributions).
//! The probe runs at most once per panel lifetime, never under the
//! automated-test harness, and a failure only means the category stays
//! hidden.

use crate::model::FavoriteEntry;
use std::env;

/// Set by the UI test harness; while present the probe is never invoked
/// and the extras category stays permanently absent.
pub const TEST_MODE_VAR: &str = "MICHI_UNDER_TEST";

pub fn suppressed() -> bool {
    env::var_os(TEST_MODE_VAR).is_some()
}

/// Whether the extras category should be shown at all.
#[cfg(windows)]
pub async fn detect() -> Result<bool, String> {
    Ok(!list_distributions().await?.is_empty())
}

#[cfg(not(windows))]
pub async fn detect() -> Result<bool, String> {
    Ok(false)
}

/// The detected environments as favorite entries, one per distribution.
#[cfg(windows)]
pub async fn environments() -> Vec<FavoriteEntry> {
    match list_distributions().await {
        Ok(names) => names
            .into_iter()
            .map(|name| {
                let path = format!(r"\\wsl$\{name}");
                FavoriteEntry::new(name, path, "network")
            })
            .collect(),
        Err(e) => {
            tracing::warn!("environment listing failed: {e}");
            Vec::new()
        }
    }
}

#[cfg(not(windows))]
pub async fn environments() -> Vec<FavoriteEntry> {
    Vec::new()
}

#[cfg(windows)]
async fn list_distributions() -> Result<Vec<String>, String> {
    let output = tokio::process::Command::new("wsl.exe")
        .args(["--list", "--quiet"])
        .output()
        .await
        .map_err(|e| format!("wsl.exe not runnable: {e}"))?;
    if !output.status.success() {
        return Err(format!("wsl.exe exited with {}", output.status));
    }
    // wsl.exe emits UTF-16LE.
    let units: Vec<u16> = output
        .stdout
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    let text = String::from_utf16_lossy(&units);
    Ok(text
        .lines()
        .map(|line| line.trim_matches('\0').trim().to_string())
        .filter(|line| !line.is_empty())
        .collect())
}
