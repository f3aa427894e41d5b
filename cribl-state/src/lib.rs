//! Cribl State Management
//!
//! Persists the observed state of managed Cribl objects between runs.
//!
//! - **StateFile**: every managed resource with its remote identifier and
//!   last known attributes
//! - **StateBackend**: storage for state files, with locking so only one
//!   apply or destroy runs at a time
//! - **LocalBackend**: a JSON file next to the document
//!
//! # Example
//!
//! ```ignore
//! use cribl_state::{LocalBackend, StateBackend, StateFile};
//!
//! let backend = LocalBackend::with_path("cribl.state.json".into());
//! let lock = backend.acquire_lock("apply").await?;
//! let mut state = backend.read_state().await?.unwrap_or_default();
//! // ... apply changes ...
//! state.increment_serial();
//! backend.write_state(&state).await?;
//! backend.release_lock(&lock).await?;
//! ```

pub mod backend;
pub mod backends;
pub mod lock;
pub mod state;

pub use backend::{BackendError, BackendResult, StateBackend};
pub use backends::LocalBackend;
pub use lock::LockInfo;
pub use state::{ResourceState, StateFile};
