//! Filesystem infrastructure: implements the `LocalFs` port on the host.

use std::io::{ErrorKind, Write as _};
use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::LocalFs;

/// Mode for written unit files: root-writable, world-readable.
#[cfg(unix)]
const UNIT_FILE_MODE: u32 = 0o644;

/// Production filesystem implementation of `LocalFs`.
pub struct HostFs;

impl LocalFs for HostFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_executable(&self, path: &Path) -> bool {
        let Ok(meta) = std::fs::metadata(path) else {
            return false;
        };
        meta.is_file() && has_exec_bit(&meta)
    }

    fn read_optional(&self, path: &Path) -> Result<Option<String>> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).with_context(|| format!("reading file {}", path.display())),
        }
    }

    /// Writes to a temp file next to `path` and renames it into place, so a
    /// reader never sees a half-written unit.
    fn write(&self, path: &Path, content: &str) -> Result<()> {
        let dir = path
            .parent()
            .with_context(|| format!("{} has no parent directory", path.display()))?;
        let mut tmp = tempfile::Builder::new()
            .prefix(".minisiem-deploy")
            .tempfile_in(dir)
            .with_context(|| format!("creating temp file in {}", dir.display()))?;
        tmp.write_all(content.as_bytes())
            .with_context(|| format!("writing temp file for {}", path.display()))?;
        tmp.as_file()
            .sync_all()
            .with_context(|| format!("syncing temp file for {}", path.display()))?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(tmp.path(), std::fs::Permissions::from_mode(UNIT_FILE_MODE))
                .with_context(|| format!("setting permissions on {}", tmp.path().display()))?;
        }
        tmp.persist(path)
            .map_err(|e| e.error)
            .with_context(|| format!("writing file {}", path.display()))?;
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> Result<bool> {
        match std::fs::remove_file(path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e).with_context(|| format!("removing file {}", path.display())),
        }
    }
}

#[cfg(unix)]
fn has_exec_bit(meta: &std::fs::Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn has_exec_bit(_: &std::fs::Metadata) -> bool {
    true
}
