//! Hearing-loss severity profiles.
//!
//! Six fixed categories following the international audiometric
//! classification. Each category maps to the effect-chain parameters
//! that approximate how speech sounds at that degree of loss: the
//! lowpass cutoff models loss of high-frequency sensitivity, the
//! compression ratio models loudness recruitment, and the output gain
//! models overall audibility. The table is strictly monotonic in
//! severity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AudioError;

/// Hearing-loss severity category.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HearingLossCategory {
    /// 0-20 dB HL.
    Normal,
    /// 20-40 dB HL.
    Leve,
    /// 40-60 dB HL.
    Moderada,
    /// 60-80 dB HL.
    ModeradamenteSevera,
    /// 80-90 dB HL.
    Severa,
    /// >90 dB HL.
    Profunda,
}

impl HearingLossCategory {
    /// All categories, ordered from least to most severe.
    pub const ALL: [HearingLossCategory; 6] = [
        HearingLossCategory::Normal,
        HearingLossCategory::Leve,
        HearingLossCategory::Moderada,
        HearingLossCategory::ModeradamenteSevera,
        HearingLossCategory::Severa,
        HearingLossCategory::Profunda,
    ];

    /// Canonical string form of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            HearingLossCategory::Normal => "normal",
            HearingLossCategory::Leve => "leve",
            HearingLossCategory::Moderada => "moderada",
            HearingLossCategory::ModeradamenteSevera => "moderadamente_severa",
            HearingLossCategory::Severa => "severa",
            HearingLossCategory::Profunda => "profunda",
        }
    }

    /// Parses a category string, resolving unknown values to `Normal`.
    ///
    /// This lenient default is deliberate: simulator callers pass
    /// through user-selected strings and must never fail on them.
    /// Callers that want a loud failure should use `FromStr` instead.
    pub fn from_lenient(s: &str) -> Self {
        s.parse().unwrap_or(HearingLossCategory::Normal)
    }
}

impl fmt::Display for HearingLossCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HearingLossCategory {
    type Err = AudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HearingLossCategory::ALL
            .iter()
            .find(|c| c.as_str() == s)
            .copied()
            .ok_or_else(|| {
                AudioError::invalid_param("category", format!("unknown severity '{}'", s))
            })
    }
}

/// Effect-chain parameters and display metadata for one severity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HearingLossProfile {
    /// The severity this profile belongs to.
    pub category: HearingLossCategory,
    /// Display name.
    pub name: &'static str,
    /// Audiometric range in dB HL.
    pub range_db_hl: &'static str,
    /// Short description of the perceptual effect.
    pub description: &'static str,
    /// Lowpass cutoff in Hz.
    pub filter_cutoff_hz: f64,
    /// Compression ratio (n:1).
    pub compression_ratio: f64,
    /// Output gain in [0, 1].
    pub output_gain: f64,
    /// Distortion amount in [0, 1], applied in the offline chain only.
    pub distortion: f64,
}

const PROFILES: [HearingLossProfile; 6] = [
    HearingLossProfile {
        category: HearingLossCategory::Normal,
        name: "Audición Normal",
        range_db_hl: "0-20 dB HL",
        description: "Audición perfecta, no requiere intervención",
        filter_cutoff_hz: 8000.0,
        compression_ratio: 1.0,
        output_gain: 1.0,
        distortion: 0.0,
    },
    HearingLossProfile {
        category: HearingLossCategory::Leve,
        name: "Pérdida Leve",
        range_db_hl: "20-40 dB HL",
        description: "Dificultad con voces suaves y ambientes ruidosos",
        filter_cutoff_hz: 2000.0,
        compression_ratio: 2.0,
        output_gain: 0.7,
        distortion: 0.05,
    },
    HearingLossProfile {
        category: HearingLossCategory::Moderada,
        name: "Pérdida Moderada",
        range_db_hl: "40-60 dB HL",
        description: "Dificultad con conversación normal, pérdida de consonantes",
        filter_cutoff_hz: 1500.0,
        compression_ratio: 4.0,
        output_gain: 0.5,
        distortion: 0.15,
    },
    HearingLossProfile {
        category: HearingLossCategory::ModeradamenteSevera,
        name: "Pérdida Moderadamente Severa",
        range_db_hl: "60-80 dB HL",
        description: "Solo escucha voces muy fuertes, pérdida severa de consonantes",
        filter_cutoff_hz: 1000.0,
        compression_ratio: 8.0,
        output_gain: 0.3,
        distortion: 0.30,
    },
    HearingLossProfile {
        category: HearingLossCategory::Severa,
        name: "Pérdida Severa",
        range_db_hl: "80-90 dB HL",
        description: "Solo sonidos muy fuertes, dependencia de lectura labial",
        filter_cutoff_hz: 500.0,
        compression_ratio: 12.0,
        output_gain: 0.15,
        distortion: 0.50,
    },
    HearingLossProfile {
        category: HearingLossCategory::Profunda,
        name: "Pérdida Profunda",
        range_db_hl: ">90 dB HL",
        description: "Solo percibe vibraciones, no puede entender el habla",
        filter_cutoff_hz: 250.0,
        compression_ratio: 20.0,
        output_gain: 0.05,
        distortion: 0.70,
    },
];

/// Looks up the profile for a category.
pub fn profile_for(category: HearingLossCategory) -> &'static HearingLossProfile {
    &PROFILES[category as usize]
}

/// All profiles, ordered from least to most severe.
pub fn all_profiles() -> &'static [HearingLossProfile] {
    &PROFILES
}

/// Classifies an audiogram into a severity category.
///
/// Points are `(frequency_hz, loss_db_hl)` pairs; the category is
/// decided by the average loss across the measured frequencies. An
/// empty audiogram classifies as `Normal`.
pub fn classify_audiogram(points: &[(u32, f64)]) -> HearingLossCategory {
    if points.is_empty() {
        return HearingLossCategory::Normal;
    }
    let average = points.iter().map(|&(_, db)| db).sum::<f64>() / points.len() as f64;

    if average <= 20.0 {
        HearingLossCategory::Normal
    } else if average <= 40.0 {
        HearingLossCategory::Leve
    } else if average <= 60.0 {
        HearingLossCategory::Moderada
    } else if average <= 80.0 {
        HearingLossCategory::ModeradamenteSevera
    } else if average <= 90.0 {
        HearingLossCategory::Severa
    } else {
        HearingLossCategory::Profunda
    }
}

/// Returns a representative example audiogram for a category.
///
/// Seven standard audiometric frequencies from 125 Hz to 8 kHz.
pub fn example_audiogram(category: HearingLossCategory) -> [(u32, f64); 7] {
    const FREQS: [u32; 7] = [125, 250, 500, 1000, 2000, 4000, 8000];
    let losses: [f64; 7] = match category {
        HearingLossCategory::Normal => [10.0, 5.0, 0.0, 5.0, 10.0, 15.0, 20.0],
        HearingLossCategory::Leve => [15.0, 20.0, 25.0, 30.0, 35.0, 40.0, 45.0],
        HearingLossCategory::Moderada => [25.0, 30.0, 35.0, 40.0, 45.0, 50.0, 55.0],
        HearingLossCategory::ModeradamenteSevera => {
            [45.0, 50.0, 55.0, 60.0, 65.0, 70.0, 75.0]
        }
        HearingLossCategory::Severa => [65.0, 70.0, 75.0, 80.0, 85.0, 90.0, 95.0],
        HearingLossCategory::Profunda => [85.0, 90.0, 95.0, 100.0, 105.0, 110.0, 115.0],
    };
    let mut out = [(0u32, 0f64); 7];
    for (i, (&f, &l)) in FREQS.iter().zip(losses.iter()).enumerate() {
        out[i] = (f, l);
    }
    out
}
