//! File formats and loaders for the stamina adjustment mod.
//!
//! This crate turns files on disk into the inputs of `stamina-core`:
//! - The user-facing mod configuration (JSON or TOML)
//! - The host's globals document, exposed as a [`StaminaTable`](stamina_core::StaminaTable)
//!
//! Parsing and validation errors are reported through `anyhow` with the
//! offending path attached. The adjustment logic itself stays in `stamina-core`.

#[cfg(feature = "serde")]
pub mod formats;

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "serde")]
pub use formats::{ConfigFile, FixedEntry};

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigFormat, ConfigLoader, GlobalsDocument, JsonStaminaTable, LoadResult, STAMINA_POINTER,
    read_field,
};
