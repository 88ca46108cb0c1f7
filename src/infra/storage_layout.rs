use std::{env, fs, path::PathBuf};

use crate::infra::error::AppError;

const APP_DIR_NAME: &str = "everly";
const STATE_DIR_OVERRIDE: &str = "EVERLY_STATE_DIR";

/// On-disk locations owned by the console. Client data never lands here,
/// only logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    pub state_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl StorageLayout {
    pub fn resolve() -> Result<Self, AppError> {
        let state_dir = env::var_os(STATE_DIR_OVERRIDE)
            .map(PathBuf::from)
            .or_else(|| {
                dirs::state_dir()
                    .or_else(dirs::cache_dir)
                    .map(|base| base.join(APP_DIR_NAME))
            })
            .ok_or_else(|| AppError::StoragePathResolution {
                details: format!(
                    "unable to resolve state directory ({STATE_DIR_OVERRIDE}/XDG_STATE_HOME/HOME)"
                ),
            })?;

        let log_dir = state_dir.join("logs");

        Ok(Self { state_dir, log_dir })
    }

    pub fn ensure_dirs(&self) -> Result<(), AppError> {
        for dir in [&self.state_dir, &self.log_dir] {
            fs::create_dir_all(dir).map_err(|source| AppError::StorageDirCreate {
                path: dir.clone(),
                source,
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::env_lock;

    #[test]
    fn override_directory_hosts_logs() {
        let _guard = env_lock();
        let root = tempfile::tempdir().expect("temp dir should be creatable");
        let old = env::var_os(STATE_DIR_OVERRIDE);
        // SAFETY: env is guarded by process-wide test mutex.
        unsafe { env::set_var(STATE_DIR_OVERRIDE, root.path()) };

        let layout = StorageLayout::resolve().expect("layout should resolve");
        layout.ensure_dirs().expect("dirs should be created");

        assert_eq!(layout.state_dir, root.path());
        assert!(layout.log_dir.starts_with(&layout.state_dir));
        assert!(layout.log_dir.is_dir());

        match old {
            // SAFETY: restoring env while guard is held.
            Some(value) => unsafe { env::set_var(STATE_DIR_OVERRIDE, value) },
            // SAFETY: restoring env while guard is held.
            None => unsafe { env::remove_var(STATE_DIR_OVERRIDE) },
        }
    }
}
