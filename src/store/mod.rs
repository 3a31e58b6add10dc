// ABOUTME: Persistent store for the user's avatar selections
// Owned by the selection screens; the wizard only reads readiness from it

pub mod models;
pub mod selection_store;

pub use models::{Avatar, Companion, CompletedTasks};
pub use selection_store::{SelectionStore, StoreError, StoredReadiness};
