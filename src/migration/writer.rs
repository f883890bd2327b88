//! Backup-then-write file replacement.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

/// Sibling backup path: `App.tsx` + `.bak` -> `App.tsx.bak`.
pub fn backup_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

/// Replace the contents of `path` with `content`.
///
/// With a backup suffix, `original` is written to the backup path and synced
/// to disk before the target is touched, so the original survives a crash
/// between the two writes.
pub fn write_with_backup(
    path: &Path,
    original: &str,
    content: &str,
    backup_suffix: Option<&str>,
) -> Result<Option<PathBuf>> {
    let backup = match backup_suffix {
        Some(suffix) => {
            let backup = backup_path(path, suffix);
            write_synced(&backup, original)
                .with_context(|| format!("Failed to write backup: {}", backup.display()))?;
            Some(backup)
        }
        None => None,
    };

    write_synced(path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    Ok(backup)
}

fn write_synced(path: &Path, content: &str) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()
}

/// Read a whole file as UTF-8.
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use crate::migration::writer::*;

    #[test]
    fn test_backup_path() {
        assert_eq!(
            backup_path(Path::new("src/pages/Tasks.tsx"), ".bak"),
            PathBuf::from("src/pages/Tasks.tsx.bak")
        );
    }

    #[test]
    fn test_write_with_backup() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("App.tsx");
        fs::write(&path, "old").unwrap();

        let backup = write_with_backup(&path, "old", "new", Some(".bak")).unwrap();

        assert_eq!(backup, Some(dir.path().join("App.tsx.bak")));
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert_eq!(fs::read_to_string(dir.path().join("App.tsx.bak")).unwrap(), "old");
    }

    #[test]
    fn test_write_without_backup() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("App.tsx");
        fs::write(&path, "old").unwrap();

        let backup = write_with_backup(&path, "old", "new", None).unwrap();

        assert_eq!(backup, None);
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert!(!dir.path().join("App.tsx.bak").exists());
    }

    #[test]
    fn test_failed_backup_leaves_original() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("App.tsx");
        fs::write(&path, "old").unwrap();
        // A directory where the backup file should go makes the backup fail.
        fs::create_dir(dir.path().join("App.tsx.bak")).unwrap();

        let result = write_with_backup(&path, "old", "new", Some(".bak"));

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "old");
    }
}
