//! Database snapshots
//!
//! SQLite databases are snapshotted as plain file copies; Postgres goes
//! through `pg_dump`. Retention keeps the newest `keep` snapshots and
//! removes the rest. The `serve` command can run the whole cycle on a
//! timer via [`spawn_periodic`].

use crate::config::BackupConfig;
use anyhow::{bail, ensure, Context};
use chrono::Utc;
use sitekit::db::DbConfig;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;

/// Write one snapshot into the backup directory, then prune
pub async fn run(db: &DbConfig, cfg: &BackupConfig) -> anyhow::Result<PathBuf> {
    tokio::fs::create_dir_all(&cfg.dir)
        .await
        .with_context(|| format!("failed to create backup directory '{}'", cfg.dir.display()))?;

    let stamp = Utc::now().format("%Y%m%d-%H%M%S");
    let target = if db.is_sqlite() {
        let source = sqlite_file(&db.url)?;
        let target = cfg.dir.join(format!("siteworks-{stamp}.db"));
        tokio::fs::copy(&source, &target)
            .await
            .with_context(|| format!("failed to copy '{}'", source.display()))?;
        target
    } else if db.is_postgres() {
        let target = cfg.dir.join(format!("siteworks-{stamp}.sql"));
        let status = tokio::process::Command::new("pg_dump")
            .arg("--no-owner")
            .arg("--file")
            .arg(&target)
            .arg(&db.url)
            .status()
            .await
            .context("failed to spawn pg_dump")?;
        ensure!(status.success(), "pg_dump exited with {status}");
        target
    } else {
        bail!(
            "backups support sqlite:// and postgres:// urls, got '{}'",
            db.url
        );
    };

    let removed = prune(cfg).await?;
    tracing::info!(path = %target.display(), removed, "snapshot written");
    Ok(target)
}

/// Remove snapshots beyond the retention count, newest kept first
pub async fn prune(cfg: &BackupConfig) -> anyhow::Result<usize> {
    let mut entries = match tokio::fs::read_dir(&cfg.dir).await {
        Ok(entries) => entries,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(0),
        Err(error) => {
            return Err(error)
                .with_context(|| format!("failed to read '{}'", cfg.dir.display()))
        }
    };

    let mut snapshots = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };
        if is_snapshot_name(name) {
            snapshots.push(entry.path());
        }
    }

    // Timestamped names sort chronologically, so a name sort is enough.
    snapshots.sort();
    snapshots.reverse();

    let mut removed = 0;
    for path in snapshots.iter().skip(cfg.keep) {
        tokio::fs::remove_file(path)
            .await
            .with_context(|| format!("failed to remove '{}'", path.display()))?;
        removed += 1;
    }
    Ok(removed)
}

/// Snapshot on a timer until the token is cancelled
pub fn spawn_periodic(
    db: DbConfig,
    cfg: BackupConfig,
    cancel: CancellationToken,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let hours = cfg.interval_hours.max(1);
        let interval = std::time::Duration::from_secs(hours * 3600);
        tracing::info!(dir = %cfg.dir.display(), interval_hours = hours, "periodic snapshots enabled");
        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep(interval) => {
                    if let Err(error) = run(&db, &cfg).await {
                        tracing::error!(error = %error, "scheduled snapshot failed");
                    }
                }
            }
        }
    })
}

fn is_snapshot_name(name: &str) -> bool {
    name.starts_with("siteworks-") && (name.ends_with(".db") || name.ends_with(".sql"))
}

/// Resolve the file behind a `sqlite://` url; in-memory databases have none
fn sqlite_file(url: &str) -> anyhow::Result<PathBuf> {
    let rest = url
        .strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))
        .unwrap_or(url);
    let path = rest.split('?').next().unwrap_or(rest);
    if path.is_empty() || path == ":memory:" {
        bail!("in-memory sqlite databases cannot be snapshotted");
    }
    Ok(PathBuf::from(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn cfg(dir: &Path, keep: usize) -> BackupConfig {
        BackupConfig {
            enabled: false,
            dir: dir.to_path_buf(),
            interval_hours: 24,
            keep,
        }
    }

    #[test]
    fn sqlite_url_parsing() {
        assert_eq!(
            sqlite_file("sqlite://siteworks.db?mode=rwc").unwrap(),
            PathBuf::from("siteworks.db")
        );
        assert_eq!(
            sqlite_file("sqlite:data/app.db").unwrap(),
            PathBuf::from("data/app.db")
        );
        assert!(sqlite_file("sqlite::memory:").is_err());
    }

    #[tokio::test]
    async fn snapshot_copies_the_sqlite_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("live.db");
        tokio::fs::write(&source, b"not really a database").await.unwrap();

        let db = DbConfig {
            url: format!("sqlite://{}", source.display()),
            ..DbConfig::default()
        };
        let backups = dir.path().join("backups");
        let written = run(&db, &cfg(&backups, 5)).await.unwrap();

        assert!(written.starts_with(&backups));
        assert_eq!(
            tokio::fs::read(&written).await.unwrap(),
            b"not really a database"
        );
    }

    #[tokio::test]
    async fn prune_keeps_the_newest_snapshots() {
        let dir = tempfile::tempdir().unwrap();
        for stamp in [
            "20260101-000000",
            "20260102-000000",
            "20260103-000000",
            "20260104-000000",
        ] {
            std::fs::write(dir.path().join(format!("siteworks-{stamp}.db")), b"x").unwrap();
        }
        std::fs::write(dir.path().join("unrelated.txt"), b"x").unwrap();

        let removed = prune(&cfg(dir.path(), 2)).await.unwrap();

        assert_eq!(removed, 2);
        assert!(dir.path().join("siteworks-20260104-000000.db").exists());
        assert!(dir.path().join("siteworks-20260103-000000.db").exists());
        assert!(!dir.path().join("siteworks-20260102-000000.db").exists());
        assert!(!dir.path().join("siteworks-20260101-000000.db").exists());
        assert!(dir.path().join("unrelated.txt").exists());
    }

    #[tokio::test]
    async fn prune_of_a_missing_directory_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert_eq!(prune(&cfg(&missing, 3)).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn unsupported_scheme_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let db = DbConfig {
            url: "mysql://app@localhost/siteworks".to_string(),
            ..DbConfig::default()
        };
        assert!(run(&db, &cfg(dir.path(), 3)).await.is_err());
    }
}
