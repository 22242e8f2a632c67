//! Contracts between the host server and the mod.
//!
//! The host calls the mod once, after its database has loaded. The mod asks
//! the host's [`ModContainer`] for the stamina table and a notification sink,
//! runs one adjustment pass and hands both back before returning. Nothing
//! obtained from the container outlives the call.

mod database;

pub use database::{DatabaseServer, MemoryHost};

use async_trait::async_trait;
use stamina_core::{NotificationSink, StaminaTable};

use crate::error::Result;
use crate::custom_stamina::ActivationOutcome;

/// Services borrowed from the host for the duration of one activation.
pub struct HostServices<'a> {
    pub table: Box<dyn StaminaTable + 'a>,
    pub notifications: &'a mut dyn NotificationSink,
}

/// Host-side registry the mod resolves its dependencies from.
pub trait ModContainer: Send {
    /// Borrows the stamina table and the notification sink.
    ///
    /// Fails with [`RuntimeError::TableUnavailable`](crate::RuntimeError::TableUnavailable)
    /// when the host has no stamina table to hand out.
    fn resolve(&mut self) -> Result<HostServices<'_>>;
}

/// Synchronous post-database-load hook.
pub trait PostDbLoadMod {
    fn post_db_load(&self, container: &mut dyn ModContainer) -> Result<ActivationOutcome>;
}

/// Asynchronous post-database-load hook.
///
/// Only configuration loading is awaited. The pass itself runs synchronously
/// once the table is borrowed, so no table borrow is held across an await.
#[async_trait]
pub trait PostDbLoadModAsync: Send + Sync {
    async fn post_db_load_async(
        &self,
        container: &mut dyn ModContainer,
    ) -> Result<ActivationOutcome>;
}
