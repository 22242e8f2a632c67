//! Host integration for the stamina adjustment mod.
//!
//! The host server drives the mod through one of two entry points, both
//! implemented by [`CustomStamina`]:
//! - [`PostDbLoadMod`] for hosts that call mods synchronously
//! - [`PostDbLoadModAsync`] for hosts running on a tokio runtime
//!
//! Modules are organized by responsibility:
//! - [`host`] defines the contracts and the containers mods resolve services from
//! - [`custom_stamina`] is the mod itself
//! - [`notify`] bridges adjustment notifications to `tracing`
pub mod custom_stamina;
pub mod error;
pub mod host;
pub mod notify;

pub use custom_stamina::{ActivationOutcome, ConfigSource, CustomStamina};
pub use error::{Result, RuntimeError};
pub use host::{
    DatabaseServer, HostServices, MemoryHost, ModContainer, PostDbLoadMod, PostDbLoadModAsync,
};
pub use notify::TracingSink;
