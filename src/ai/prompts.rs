//! Instruction sent with every jewelry image.
//!
//! Kept in one place so the wording can be tuned without touching the
//! request plumbing. The estimator's patterns expect the numeric style this
//! prompt asks for (gram ranges, carat figures), so changes here usually
//! mean revisiting the heuristics too.

/// Fixed analysis instruction for the vision model.
pub const JEWELRY_ANALYSIS_PROMPT: &str = "Analyze this jewelry image. Assume the jewelry is always made of gold (it can be yellow gold, white gold, or rose gold). Provide a concise analysis. Tell me:\n1. What type of jewelry is it? (e.g., ring, earring, necklace, bracelet)\n2. Briefly describe the jewelry's materials and design.\n3. Estimate the approximate amount of gold used (in grams) and the total carat weight of diamonds (if any). Provide numerical ranges or single numbers if possible.\n\nRemember these are visual estimations and not precise measurements.";
