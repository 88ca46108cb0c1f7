use std::sync::{Mutex, MutexGuard};

use crate::domain::client::ClientRecord;

static ENV_LOCK: Mutex<()> = Mutex::new(());

pub fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK.lock().expect("env lock should not be poisoned")
}

/// The seven-client demo directory.
pub fn sample_clients() -> Vec<ClientRecord> {
    crate::infra::fixtures::demo_clients()
}
