//! The CustomStamina mod.
//!
//! Loads its configuration, borrows the stamina table from the host and runs
//! a single adjustment pass. A configuration that cannot be interpreted is
//! logged and the table is left untouched.

use std::path::PathBuf;

use async_trait::async_trait;
use stamina_content::{ConfigLoader, LoadResult};
use stamina_core::{
    AdjustmentReport, MOD_NAME, StaminaConfig, StaminaSchema, apply_stamina_adjustment,
};

use crate::error::Result;
use crate::host::{HostServices, ModContainer, PostDbLoadMod, PostDbLoadModAsync};

/// Where the mod reads its configuration from.
#[derive(Clone, Debug)]
pub enum ConfigSource {
    /// JSON or TOML file, read on every activation.
    File(PathBuf),
    /// Configuration supplied by the embedding host.
    Inline(StaminaConfig),
}

impl ConfigSource {
    pub fn load(&self) -> LoadResult<StaminaConfig> {
        match self {
            Self::File(path) => ConfigLoader::load(path),
            Self::Inline(config) => Self::check_inline(config),
        }
    }

    pub async fn load_async(&self) -> LoadResult<StaminaConfig> {
        match self {
            Self::File(path) => ConfigLoader::load_async(path).await,
            Self::Inline(config) => Self::check_inline(config),
        }
    }

    fn check_inline(config: &StaminaConfig) -> LoadResult<StaminaConfig> {
        if config.enabled {
            config.validate(&StaminaSchema::stamina())?;
        }
        Ok(config.clone())
    }
}

/// Result of one activation.
#[derive(Clone, Debug, PartialEq)]
pub enum ActivationOutcome {
    /// The pass ran (or stopped early because the mod is disabled).
    Completed(AdjustmentReport),
    /// The configuration could not be used; nothing was written.
    ConfigRejected { reason: String },
}

impl ActivationOutcome {
    pub fn report(&self) -> Option<&AdjustmentReport> {
        match self {
            Self::Completed(report) => Some(report),
            Self::ConfigRejected { .. } => None,
        }
    }
}

/// Stamina adjustment mod, usable through both host contracts.
#[derive(Clone, Debug)]
pub struct CustomStamina {
    source: ConfigSource,
}

impl CustomStamina {
    pub fn new(source: ConfigSource) -> Self {
        Self { source }
    }

    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self::new(ConfigSource::File(path.into()))
    }

    pub fn from_config(config: StaminaConfig) -> Self {
        Self::new(ConfigSource::Inline(config))
    }

    pub fn source(&self) -> &ConfigSource {
        &self.source
    }

    fn activate(
        &self,
        loaded: LoadResult<StaminaConfig>,
        container: &mut dyn ModContainer,
    ) -> Result<ActivationOutcome> {
        let config = match loaded {
            Ok(config) => config,
            Err(err) => {
                let reason = format!("{err:#}");
                tracing::error!(
                    target: "custom_stamina",
                    "{MOD_NAME}: configuration rejected, stamina left untouched: {reason}"
                );
                return Ok(ActivationOutcome::ConfigRejected { reason });
            }
        };

        tracing::debug!(
            enabled = config.enabled,
            method = %config.adjustment.method(),
            debug = config.debug,
            "configuration loaded"
        );

        let HostServices {
            mut table,
            notifications,
        } = container.resolve()?;
        let report = apply_stamina_adjustment(&config, table.as_mut(), notifications);

        tracing::debug!(
            written = report.written,
            changed = report.changed,
            skipped = report.skipped.len(),
            "stamina pass finished"
        );
        Ok(ActivationOutcome::Completed(report))
    }
}

impl PostDbLoadMod for CustomStamina {
    fn post_db_load(&self, container: &mut dyn ModContainer) -> Result<ActivationOutcome> {
        self.activate(self.source.load(), container)
    }
}

#[async_trait]
impl PostDbLoadModAsync for CustomStamina {
    async fn post_db_load_async(
        &self,
        container: &mut dyn ModContainer,
    ) -> Result<ActivationOutcome> {
        let loaded = self.source.load_async().await;
        self.activate(loaded, container)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::MemoryHost;
    use stamina_core::{AdjustmentEvent, AdjustmentStatus, FixedValues, StaminaParameters};

    fn host() -> MemoryHost {
        MemoryHost::new(StaminaParameters {
            capacity: 110.0,
            sprint_drain_rate: 4.3,
            jump_consumption: 14.0,
            stamina_exhaustion_rocks_camera: true,
            ..StaminaParameters::default()
        })
    }

    #[test]
    fn inline_unlimited_config_runs_the_pass() {
        let mut host = host();
        let outcome = CustomStamina::from_config(StaminaConfig::unlimited())
            .post_db_load(&mut host)
            .unwrap();

        let report = outcome.report().unwrap();
        assert_eq!(report.written, 31);
        assert_eq!(host.parameters.capacity, 500.0);
        assert_eq!(host.parameters.jump_consumption, 0.0);
        assert!(!host.parameters.stamina_exhaustion_rocks_camera);
        assert_eq!(host.events.len(), 1);
    }

    #[test]
    fn invalid_inline_config_is_rejected_without_writes() {
        let mut host = host();
        let before = host.parameters.clone();
        let config = StaminaConfig::fixed(FixedValues::new().with("Stamina", 1.0));

        let outcome = CustomStamina::from_config(config)
            .post_db_load(&mut host)
            .unwrap();

        assert!(matches!(outcome, ActivationOutcome::ConfigRejected { .. }));
        assert_eq!(host.parameters, before);
        assert!(host.events.is_empty());
    }

    #[test]
    fn disabled_inline_config_skips_validation() {
        let mut host = host();
        let config = StaminaConfig::percent(f64::NAN).with_enabled(false);

        let outcome = CustomStamina::from_config(config)
            .post_db_load(&mut host)
            .unwrap();

        assert_eq!(outcome.report().unwrap().status, AdjustmentStatus::Disabled);
        assert_eq!(host.events, vec![AdjustmentEvent::Disabled]);
    }

    #[tokio::test]
    async fn async_contract_matches_sync_contract() {
        let config = StaminaConfig::percent(20.0).with_debug(true);
        let mod_ = CustomStamina::from_config(config);

        let mut sync_host = host();
        let mut async_host = host();
        let sync_outcome = mod_.post_db_load(&mut sync_host).unwrap();
        let async_outcome = mod_.post_db_load_async(&mut async_host).await.unwrap();

        assert_eq!(sync_outcome, async_outcome);
        assert_eq!(sync_host.parameters, async_host.parameters);
        assert_eq!(sync_host.events, async_host.events);
        assert_eq!(async_host.parameters.capacity, 132.0);
    }
}
