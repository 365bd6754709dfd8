use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    /// A thread panicked while holding the lock guarding `resource`
    #[error("Storage error: lock on {resource} is poisoned")]
    LockPoisoned { resource: String },
}
