use serde::{Deserialize, Serialize};

use crate::spatial::ZoneSize;

/// Construction-time settings. JSON keys are camelCase:
/// `{ "zoneSize": 3, "perfMetrics": false }`, both optional.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LifeConfig {
    /// Zone edge length, odd and positive. Fixed for the life of a field.
    pub zone_size: i32,
    pub perf_metrics: bool,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            zone_size: ZoneSize::DEFAULT.get(),
            perf_metrics: false,
        }
    }
}

impl LifeConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: LifeConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<ZoneSize, String> {
        ZoneSize::new(self.zone_size)
    }
}
