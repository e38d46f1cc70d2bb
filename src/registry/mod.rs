/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Lifecycle management for live vendor and customer workers.
//!
//! The [`WorkerRegistry`] spawns workers onto the current tokio runtime,
//! keeps a per-kind list of [`WorkerHandle`]s in spawn order and tears them
//! down again: all at once, or one at a time starting from the most recently
//! added. Identities come from an [`IdentityGenerator`] owned by the
//! registry, so they are scoped to one run and never reused within it.
//!
//! Dropping the registry drops every cancellation handle, which stops all
//! of its workers at their next suspension point.

pub mod core;
pub mod handle;
pub mod identity;

#[cfg(test)]
mod tests;

pub use self::core::WorkerRegistry;
pub use handle::WorkerHandle;
pub use identity::IdentityGenerator;
