//! Dependency installation

use camino::Utf8Path;
use payload_templates_core::PackageManager;
use std::process::{Command, Stdio};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Pick the package manager for a fetched project
///
/// An explicit choice wins. Otherwise the first lockfile found in
/// `project_dir` decides, and pnpm is used when there is none.
pub fn detect_package_manager(
    project_dir: &Utf8Path,
    preferred: Option<PackageManager>,
) -> PackageManager {
    if let Some(pm) = preferred {
        debug!("Using configured package manager: {}", pm);
        return pm;
    }

    let detected = PackageManager::all().into_iter().find(|pm| {
        pm.lockfiles()
            .iter()
            .any(|lockfile| project_dir.join(lockfile).is_file())
    });

    match detected {
        Some(pm) => {
            debug!("Detected package manager from lockfile: {}", pm);
            pm
        }
        None => PackageManager::default(),
    }
}

/// Check whether the package manager's executable is on PATH
pub fn is_available(pm: PackageManager) -> bool {
    which::which(pm.as_str()).is_ok()
}

/// The install command line, e.g. `pnpm install`
pub fn install_command(pm: PackageManager) -> String {
    format!("{} install", pm.as_str())
}

/// Run `<pm> install` in `project_dir`
///
/// Standard input, output and error are inherited so the package manager's
/// own progress output reaches the terminal.
pub fn install_dependencies(project_dir: &Utf8Path, pm: PackageManager) -> Result<()> {
    let command_line = install_command(pm);

    let program = which::which(pm.as_str())
        .map_err(|_| Error::package_manager_not_found(pm.as_str()))?;

    info!("Running {} in {}", command_line, project_dir);
    let status = Command::new(program)
        .arg("install")
        .current_dir(project_dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| Error::install_failed(&command_line, e.to_string()))?;

    if !status.success() {
        let message = match status.code() {
            Some(code) => format!("exited with status {}", code),
            None => "terminated by signal".to_string(),
        };
        return Err(Error::install_failed(command_line, message));
    }

    info!("Dependencies installed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    fn project_dir() -> (TempDir, Utf8PathBuf) {
        let temp = TempDir::new().unwrap();
        let dir = Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("Invalid UTF-8 path");
        (temp, dir)
    }

    #[test]
    fn test_detect_defaults_to_pnpm() {
        let (_temp, dir) = project_dir();
        assert_eq!(detect_package_manager(&dir, None), PackageManager::Pnpm);
    }

    #[test]
    fn test_detect_from_lockfile() {
        let (_temp, dir) = project_dir();
        fs::write(dir.join("yarn.lock"), "").unwrap();
        assert_eq!(detect_package_manager(&dir, None), PackageManager::Yarn);

        let (_temp2, dir2) = project_dir();
        fs::write(dir2.join("bun.lock"), "").unwrap();
        assert_eq!(detect_package_manager(&dir2, None), PackageManager::Bun);
    }

    #[test]
    fn test_pnpm_lockfile_wins_over_npm() {
        let (_temp, dir) = project_dir();
        fs::write(dir.join("package-lock.json"), "{}").unwrap();
        fs::write(dir.join("pnpm-lock.yaml"), "").unwrap();
        assert_eq!(detect_package_manager(&dir, None), PackageManager::Pnpm);
    }

    #[test]
    fn test_preferred_overrides_lockfile() {
        let (_temp, dir) = project_dir();
        fs::write(dir.join("pnpm-lock.yaml"), "").unwrap();
        assert_eq!(
            detect_package_manager(&dir, Some(PackageManager::Npm)),
            PackageManager::Npm
        );
    }

    #[test]
    fn test_install_command() {
        assert_eq!(install_command(PackageManager::Pnpm), "pnpm install");
        assert_eq!(install_command(PackageManager::Bun), "bun install");
    }

    /// Puts a `pnpm` stub that exits with `code` first on PATH until dropped
    #[cfg(unix)]
    struct FakePnpm {
        _bin: TempDir,
        original_path: Option<std::ffi::OsString>,
    }

    #[cfg(unix)]
    impl FakePnpm {
        fn exiting_with(code: i32) -> Self {
            use std::os::unix::fs::PermissionsExt;

            let bin = TempDir::new().unwrap();
            let script = bin.path().join("pnpm");
            fs::write(&script, format!("#!/bin/sh\nexit {}\n", code)).unwrap();
            fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

            let original_path = std::env::var_os("PATH");
            std::env::set_var("PATH", bin.path());
            Self {
                _bin: bin,
                original_path,
            }
        }
    }

    #[cfg(unix)]
    impl Drop for FakePnpm {
        fn drop(&mut self) {
            match &self.original_path {
                Some(path) => std::env::set_var("PATH", path),
                None => std::env::remove_var("PATH"),
            }
        }
    }

    #[test]
    #[serial]
    #[cfg(unix)]
    fn test_install_failure_is_reported() {
        let _pnpm = FakePnpm::exiting_with(3);
        let (_temp, dir) = project_dir();

        assert!(is_available(PackageManager::Pnpm));
        let err = install_dependencies(&dir, PackageManager::Pnpm).unwrap_err();

        match err {
            Error::InstallFailed { command, message } => {
                assert_eq!(command, "pnpm install");
                assert_eq!(message, "exited with status 3");
            }
            other => panic!("expected InstallFailed, got {other:?}"),
        }
    }

    #[test]
    #[serial]
    #[cfg(unix)]
    fn test_install_success() {
        let _pnpm = FakePnpm::exiting_with(0);
        let (_temp, dir) = project_dir();

        install_dependencies(&dir, PackageManager::Pnpm).unwrap();
    }

    #[test]
    #[serial]
    #[cfg(unix)]
    fn test_missing_package_manager() {
        let _pnpm = FakePnpm::exiting_with(0);

        assert!(!is_available(PackageManager::Bun));
        let (_temp, dir) = project_dir();
        assert!(matches!(
            install_dependencies(&dir, PackageManager::Bun),
            Err(Error::PackageManagerNotFound { .. })
        ));
    }
}
