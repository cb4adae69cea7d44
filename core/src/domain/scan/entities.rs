use std::fmt;

use serde::{Deserialize, Serialize};

/// Verdict on a photographed product or meal.
///
/// `is_safe` and `warning_level` come back from the same call and are kept
/// exactly as returned; neither is derived from the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub is_safe: bool,
    pub product_name: String,
    pub reasoning: String,
    #[serde(default)]
    pub nutritional_analysis: Option<String>,
    pub warning_level: WarningLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WarningLevel {
    Safe,
    Caution,
    Danger,
}

impl WarningLevel {
    pub const ALL: [WarningLevel; 3] = [WarningLevel::Safe, WarningLevel::Caution, WarningLevel::Danger];

    pub fn as_str(&self) -> &'static str {
        match self {
            WarningLevel::Safe => "Safe",
            WarningLevel::Caution => "Caution",
            WarningLevel::Danger => "Danger",
        }
    }
}

impl fmt::Display for WarningLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ScanResult {
    pub fn display_name(&self) -> &str {
        let name = self.product_name.trim();
        if name.is_empty() { "Unknown Product" } else { name }
    }

    /// Drops a blank analysis so "absent" has a single representation.
    pub(crate) fn normalized(mut self) -> Self {
        if self
            .nutritional_analysis
            .as_deref()
            .is_some_and(|text| text.trim().is_empty())
        {
            self.nutritional_analysis = None;
        }
        self
    }
}
