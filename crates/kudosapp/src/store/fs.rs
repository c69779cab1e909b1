use super::codec::CookieLine;
use super::CookieJar;
use crate::clock::Clock;
use crate::error::{KudosError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;
use uuid::Uuid;

pub const JAR_FILENAME: &str = "cookies.json";

/// Cookie jar persisted as a JSON array in `<root>/cookies.json`.
///
/// Every write rewrites the whole file through a temp file and a rename, so
/// a crash leaves either the old jar or the new one. Expired cookies are
/// pruned on write.
pub struct FileJar<C: Clock> {
    root: PathBuf,
    clock: C,
}

impl<C: Clock> FileJar<C> {
    pub fn new(root: PathBuf, clock: C) -> Self {
        Self { root, clock }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self) -> PathBuf {
        self.root.join(JAR_FILENAME)
    }

    fn load(&self) -> Result<Vec<CookieLine>> {
        let path = self.path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&path).map_err(KudosError::Io)?;
        let cookies: Vec<CookieLine> =
            serde_json::from_str(&content).map_err(KudosError::Serialization)?;
        Ok(cookies)
    }

    fn save(&self, cookies: &[CookieLine]) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(KudosError::Io)?;
        }
        let content = serde_json::to_string_pretty(cookies).map_err(KudosError::Serialization)?;

        let tmp_file = self.root.join(format!(".cookies-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(KudosError::Io)?;
        fs::rename(&tmp_file, self.path()).map_err(KudosError::Io)?;
        Ok(())
    }
}

impl<C: Clock> CookieJar for FileJar<C> {
    fn cookie_header(&self) -> Result<String> {
        let now = self.clock.now();
        Ok(self
            .load()?
            .iter()
            .filter(|c| !c.is_expired_at(now))
            .map(|c| format!("{}={}", c.name, c.value))
            .collect::<Vec<_>>()
            .join("; "))
    }

    fn set_cookie(&self, line: &str) -> Result<()> {
        let parsed = CookieLine::parse(line)
            .ok_or_else(|| KudosError::Store(format!("Invalid cookie line: {}", line)))?;

        let mut cookies = self.load().unwrap_or_else(|e| {
            warn!(path = %self.path().display(), error = %e, "discarding unreadable cookie jar");
            Vec::new()
        });

        let now = self.clock.now();
        let expired = parsed.is_expired_at(now);
        cookies.retain(|c| c.name != parsed.name && !c.is_expired_at(now));
        if !expired {
            cookies.push(parsed);
        }
        self.save(&cookies)
    }
}
