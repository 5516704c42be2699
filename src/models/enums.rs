use serde::{Deserialize, Serialize};

use crate::assistant::types::AssistantError;

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// Variants are declared in ascending order; the derived `Ord` follows it.
/// The literal is the serialized form; parsing ignores case.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = AssistantError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                $(
                    if trimmed.eq_ignore_ascii_case($s) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(AssistantError::InvalidEnum {
                    field: stringify!($name).into(),
                    value: s.into(),
                })
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(Severity {
    Mild => "mild",
    Moderate => "moderate",
    Severe => "severe",
});

str_enum!(AssessmentSeverity {
    Unknown => "unknown",
    Mild => "mild",
    Moderate => "moderate",
    Severe => "severe",
});

str_enum!(Gender {
    Male => "male",
    Female => "female",
    Other => "other",
});

str_enum!(HealthStatus {
    Poor => "Poor",
    Fair => "Fair",
    Good => "Good",
    Excellent => "Excellent",
});

impl From<Severity> for AssessmentSeverity {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Mild => Self::Mild,
            Severity::Moderate => Self::Moderate,
            Severity::Severe => Self::Severe,
        }
    }
}

impl HealthStatus {
    /// Status tier for a clamped score: 80+ excellent, 60+ good, 40+ fair.
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s >= 80 => Self::Excellent,
            s if s >= 60 => Self::Good,
            s if s >= 40 => Self::Fair,
            _ => Self::Poor,
        }
    }
}
