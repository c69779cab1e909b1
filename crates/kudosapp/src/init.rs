//! # Context Initialization
//!
//! Builds the file-backed API used by the terminal client.
//!
//! ## Data Directory
//!
//! Resolved in priority order:
//! 1. An explicit path from the caller
//! 2. `KUDOS_DATA_DIR` environment variable
//! 3. The OS data directory for `kudos` (via the `directories` crate)
//!
//! The directory holds `cookies.json` (the jar) and the optional
//! `kudos.toml`. It is created on the first cookie write, not here.

use crate::api::KudosApi;
use crate::clock::SystemClock;
use crate::config::KudosConfig;
use crate::error::{KudosError, Result};
use crate::store::fs::FileJar;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::debug;

pub const DATA_DIR_ENV: &str = "KUDOS_DATA_DIR";

pub type FileApi = KudosApi<FileJar<SystemClock>, SystemClock>;

pub struct KudosContext {
    pub api: FileApi,
    pub config: KudosConfig,
    pub data_dir: PathBuf,
}

pub fn resolve_data_dir(explicit: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }

    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    ProjectDirs::from("com", "kudos", "kudos")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| KudosError::Config("Could not determine data directory".to_string()))
}

/// Loads configuration, opens the jar and runs the startup seeding.
pub fn initialize(data_dir: PathBuf) -> Result<KudosContext> {
    let config = KudosConfig::load(&data_dir)?;
    let jar = FileJar::new(data_dir.clone(), SystemClock);
    let mut api = KudosApi::new(jar, SystemClock, &config);
    let init = api.init();
    debug!(data_dir = %data_dir.display(), outcome = ?init.outcome, "context ready");

    Ok(KudosContext {
        api,
        config,
        data_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_dir_wins() {
        let dir = resolve_data_dir(Some(PathBuf::from("/tmp/somewhere"))).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/somewhere"));
    }

    #[test]
    fn initialize_seeds_jar_file() {
        let temp = TempDir::new().unwrap();
        let ctx = initialize(temp.path().to_path_buf()).unwrap();

        assert!(temp.path().join("cookies.json").exists());
        let v = ctx.api.render();
        assert_eq!((v.likes, v.dislikes), (0, 0));
    }

    #[test]
    fn state_persists_between_contexts() {
        let temp = TempDir::new().unwrap();
        {
            let mut ctx = initialize(temp.path().to_path_buf()).unwrap();
            ctx.api.like();
            ctx.api.set_input("from the first run");
            ctx.api.submit_comment();
        }

        let ctx = initialize(temp.path().to_path_buf()).unwrap();
        let v = ctx.api.render();
        assert_eq!(v.likes, 1);
        assert!(v.like_button.picked);
        assert_eq!(v.comments, vec!["from the first run"]);
        assert_eq!(v.input, "");
    }

    #[test]
    fn corrupt_jar_degrades_to_defaults() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("cookies.json"), "garbage").unwrap();

        let mut ctx = initialize(temp.path().to_path_buf()).unwrap();
        let v = ctx.api.render();
        assert_eq!((v.likes, v.dislikes), (0, 0));

        ctx.api.dislike();
        assert_eq!(ctx.api.render().dislikes, 1);
    }
}
