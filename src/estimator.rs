//! Price estimation heuristics over the model's free-text description.
//!
//! The description is uncontrolled input, so everything here is best-effort
//! pattern matching: a capture that fails to parse counts as zero, a phrase
//! that never appears falls back to a default. The heuristics run in a fixed
//! order and later fallbacks only apply when earlier patterns found nothing.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

lazy_static! {
    static ref DIAMOND_CARAT_RE: Regex =
        Regex::new(r"(?i)diamond.*?(\d+\.?\d*)\s*carat").unwrap();
    static ref GOLD_RANGE_RE: Regex =
        Regex::new(r"(?i)gold.*?(\d+)\s*-\s*(\d+)\s*grams").unwrap();
    static ref GOLD_SINGLE_RE: Regex =
        Regex::new(r"(?i)gold.*?around\s*(\d+)\s*grams").unwrap();
    static ref GOLD_SUBSTANTIAL_RE: Regex =
        Regex::new(r"(?i)substantial amount of gold").unwrap();
    static ref GOLD_MINIMAL_RE: Regex =
        Regex::new(r"(?i)minimal gold").unwrap();
    static ref KARAT_RE: Regex =
        Regex::new(r"(?i)(\d{2})K\s*gold").unwrap();
}

/// Gold purity grade. Prices are INR per gram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Karat {
    K10,
    K12,
    K14,
    K16,
    K18,
    K20,
    K22,
    K24,
}

/// Karat assumed when the description names no grade.
pub const DEFAULT_KARAT: Karat = Karat::K22;

impl Karat {
    pub const ALL: [Karat; 8] = [
        Karat::K10,
        Karat::K12,
        Karat::K14,
        Karat::K16,
        Karat::K18,
        Karat::K20,
        Karat::K22,
        Karat::K24,
    ];

    pub fn price_per_gram_inr(self) -> u32 {
        match self {
            Karat::K10 => 3_598,
            Karat::K12 => 4_317,
            Karat::K14 => 5_037,
            Karat::K16 => 5_756,
            Karat::K18 => 6_476,
            Karat::K20 => 7_195,
            Karat::K22 => 7_915,
            Karat::K24 => 8_634,
        }
    }

    /// Parse the numeric part of a grade like "18" from "18K".
    pub fn from_label(label: &str) -> Option<Karat> {
        match label {
            "10" => Some(Karat::K10),
            "12" => Some(Karat::K12),
            "14" => Some(Karat::K14),
            "16" => Some(Karat::K16),
            "18" => Some(Karat::K18),
            "20" => Some(Karat::K20),
            "22" => Some(Karat::K22),
            "24" => Some(Karat::K24),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Karat::K10 => "10K",
            Karat::K12 => "12K",
            Karat::K14 => "14K",
            Karat::K16 => "16K",
            Karat::K18 => "18K",
            Karat::K20 => "20K",
            Karat::K22 => "22K",
            Karat::K24 => "24K",
        }
    }
}

impl fmt::Display for Karat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Diamond bracket prices, flat INR per stone weight bracket.
const DIAMOND_SMALL_INR: f64 = 35_000.0;
const DIAMOND_MEDIUM_INR: f64 = 50_000.0;
const DIAMOND_LARGE_INR: f64 = 70_000.0;
// Carats above the top bracket scale its price by carat / this reference.
const DIAMOND_SCALE_REFERENCE_CARAT: f64 = 2.5;

/// Everything the heuristics recovered from one description.
#[derive(Debug, Clone, PartialEq)]
pub struct Appraisal {
    pub diamond_carat: Option<f64>,
    pub gold_grams: f64,
    pub karat: Karat,
    pub total_inr: u64,
}

/// Diamond carat figure, if the description mentions one.
pub fn diamond_carat(text: &str) -> Option<f64> {
    DIAMOND_CARAT_RE
        .captures(text)
        .and_then(|cap| cap[1].parse::<f64>().ok())
}

/// Flat bracket price for a carat weight. Brackets are checked in order with
/// inclusive bounds, so exactly 2.1 lands in the middle bracket; weights in
/// no bracket (below 0.3, or in the 1.0–1.1 gap) price at zero.
pub fn diamond_price_inr(carat: f64) -> f64 {
    if (0.3..=1.0).contains(&carat) {
        DIAMOND_SMALL_INR
    } else if (1.1..=2.1).contains(&carat) {
        DIAMOND_MEDIUM_INR
    } else if (2.1..=3.0).contains(&carat) {
        DIAMOND_LARGE_INR
    } else if carat > 3.0 {
        DIAMOND_LARGE_INR * (carat / DIAMOND_SCALE_REFERENCE_CARAT)
    } else {
        0.0
    }
}

/// Gold weight in grams. A numeric range wins over a single "around" figure,
/// which wins over the qualitative phrases; 10 g when nothing matches.
pub fn gold_weight_grams(text: &str) -> f64 {
    if let Some(cap) = GOLD_RANGE_RE.captures(text) {
        return match (cap[1].parse::<f64>(), cap[2].parse::<f64>()) {
            (Ok(low), Ok(high)) => (low + high) / 2.0,
            _ => 0.0,
        };
    }
    if let Some(cap) = GOLD_SINGLE_RE.captures(text) {
        return cap[1].parse().unwrap_or(0.0);
    }
    if GOLD_SUBSTANTIAL_RE.is_match(text) {
        return 15.0;
    }
    if GOLD_MINIMAL_RE.is_match(text) {
        return 5.0;
    }
    10.0
}

/// Karat grade named in the description, or [`DEFAULT_KARAT`]. Grades outside
/// the known set (for example "13K") also fall back to the default.
pub fn gold_karat(text: &str) -> Karat {
    KARAT_RE
        .captures(text)
        .and_then(|cap| Karat::from_label(&cap[1]))
        .unwrap_or(DEFAULT_KARAT)
}

/// Run all heuristics over a description and total the contributions.
pub fn appraise_description(text: &str) -> Appraisal {
    let diamond_carat = diamond_carat(text);
    let diamond_inr = diamond_carat.map(diamond_price_inr).unwrap_or(0.0);

    let gold_grams = gold_weight_grams(text);
    let karat = gold_karat(text);
    let gold_inr = if gold_grams > 0.0 {
        gold_grams * f64::from(karat.price_per_gram_inr())
    } else {
        0.0
    };

    let appraisal = Appraisal {
        diamond_carat,
        gold_grams,
        karat,
        total_inr: (diamond_inr + gold_inr) as u64,
    };
    trace!(?appraisal, "appraised description");
    appraisal
}

/// Total estimated price in INR for a description.
pub fn estimate_price_inr(text: &str) -> u64 {
    appraise_description(text).total_inr
}
