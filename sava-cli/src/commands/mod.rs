//! Command implementations for the sava CLI

pub mod countdown;
pub mod watch;

use clap::Args;
use sava_core::SavaConfig;

/// Target selection shared by `countdown` and `watch`
#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Target date-time literal, YYYY-MM-DDTHH:MM:SS (overrides config)
    #[arg(long, value_name = "DATETIME")]
    pub target: Option<String>,

    /// Zone the target is read in: local, utc, or an IANA name
    #[arg(long = "tz", value_name = "ZONE")]
    pub timezone: Option<String>,
}

impl TargetArgs {
    /// Layer command-line values over the loaded config
    pub fn apply(&self, config: &mut SavaConfig) {
        if let Some(target) = &self.target {
            config.countdown.target = target.clone();
        }
        if let Some(timezone) = &self.timezone {
            config.countdown.timezone = timezone.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let mut config = SavaConfig::default();
        let args = TargetArgs {
            target: None,
            timezone: Some("utc".to_string()),
        };
        args.apply(&mut config);

        assert_eq!(config.countdown.timezone, "utc");
        assert_eq!(config.countdown.target, sava_core::DELIVERY_MILESTONE);
    }
}
