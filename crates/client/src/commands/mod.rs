//! Subcommands of the `custom-stamina` binary.

mod apply;
mod fields;
mod init_config;

pub use apply::Apply;
pub use fields::Fields;
pub use init_config::InitConfig;

use stamina_core::AdjustmentMethod;

pub(crate) fn parse_method(value: &str) -> Result<AdjustmentMethod, String> {
    value.trim().parse().map_err(|_| {
        format!("unknown adjustment method '{value}' (expected unlimited, percent or fixed)")
    })
}
