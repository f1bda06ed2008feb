//! Health Score Calculator
//!
//! Maps three slider readings to a 0-10 health score:
//!
//! ```text
//! score = round(usage * 0.5 + (10 - ticket_load) * 0.3 + nps * 0.2, 1)
//! ```
//!
//! Usage carries the most weight, support friction comes second (inverted so
//! fewer tickets score higher) and sentiment third. With inputs in range the
//! result lies in [0.7, 10.0].

use serde::{Deserialize, Serialize};

/// Weight of product usage
pub const USAGE_WEIGHT: f64 = 0.5;
/// Weight of inverted support ticket load
pub const TICKET_WEIGHT: f64 = 0.3;
/// Weight of NPS
pub const NPS_WEIGHT: f64 = 0.2;

/// Lowest score reachable from in-range inputs
pub const MIN_SCORE: f64 = 0.7;
/// Highest score reachable from in-range inputs
pub const MAX_SCORE: f64 = 10.0;

/// Definition of one bounded input slider
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Slider {
    pub key: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
    pub caption: &'static str,
}

impl Slider {
    /// Snap a raw value into the slider's range
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

pub const USAGE: Slider = Slider {
    key: "usage",
    label: "Product Usage Level",
    min: 1.0,
    max: 10.0,
    default: 5.0,
    step: 0.1,
    caption: "How actively the customer uses the platform day-to-day (1 = barely using it, 10 = heavy, consistent usage).",
};

pub const TICKET_LOAD: Slider = Slider {
    key: "ticket_load",
    label: "Support Ticket Load (higher = worse)",
    min: 0.0,
    max: 10.0,
    default: 2.0,
    step: 0.1,
    caption: "How heavy their support demand is (0 = no issues, 10 = constant high-volume issues or escalations).",
};

pub const NPS: Slider = Slider {
    key: "nps",
    label: "NPS Score (1-10 simplified)",
    min: 1.0,
    max: 10.0,
    default: 7.0,
    step: 0.1,
    caption: "How likely they are to recommend the product (1 = very unhappy, 10 = strong promoter).",
};

/// All sliders in display order
pub fn sliders() -> [Slider; 3] {
    [USAGE, TICKET_LOAD, NPS]
}

/// One set of slider readings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HealthInputs {
    pub usage: f64,
    pub ticket_load: f64,
    pub nps: f64,
}

impl HealthInputs {
    pub fn new(usage: f64, ticket_load: f64, nps: f64) -> Self {
        Self {
            usage,
            ticket_load,
            nps,
        }
    }

    /// Copy with every reading snapped into its slider range
    pub fn clamped(&self) -> Self {
        Self {
            usage: USAGE.clamp(self.usage),
            ticket_load: TICKET_LOAD.clamp(self.ticket_load),
            nps: NPS.clamp(self.nps),
        }
    }

    /// Slider definitions whose range excludes the matching reading
    pub fn out_of_range(&self) -> Vec<&'static Slider> {
        let mut bad = Vec::new();
        if !USAGE.contains(self.usage) {
            bad.push(&USAGE);
        }
        if !TICKET_LOAD.contains(self.ticket_load) {
            bad.push(&TICKET_LOAD);
        }
        if !NPS.contains(self.nps) {
            bad.push(&NPS);
        }
        bad
    }

    /// Score for these readings
    pub fn score(&self) -> f64 {
        compute(self.usage, self.ticket_load, self.nps)
    }
}

impl Default for HealthInputs {
    fn default() -> Self {
        Self::new(USAGE.default, TICKET_LOAD.default, NPS.default)
    }
}

/// Compute a health score, rounded to one decimal place
///
/// Inputs are expected in range; callers clamp first.
pub fn compute(usage: f64, ticket_load: f64, nps: f64) -> f64 {
    let raw = usage * USAGE_WEIGHT + (10.0 - ticket_load) * TICKET_WEIGHT + nps * NPS_WEIGHT;
    round_tenths(raw)
}

/// Round the exact binary value to one decimal, ties to even
///
/// Scaling by ten first would round twice and drift on values such as
/// 4.05 (stored just below the tie).
fn round_tenths(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}
