use gembot::estimator::{appraise_description, estimate_price_inr, Karat};

#[test]
fn range_weight_is_averaged() {
    let text = "The necklace contains gold, estimated 10 - 20 grams.";
    assert_eq!(estimate_price_inr(text), 15 * 7_915);
}

#[test]
fn single_weight_is_used() {
    let text = "The bangle's gold content is around 12 grams.";
    assert_eq!(estimate_price_inr(text), 12 * 7_915);
}

#[test]
fn substantial_gold_without_numbers() {
    let text = "The piece shows a substantial amount of gold throughout.";
    assert_eq!(estimate_price_inr(text), 15 * 7_915);
}

#[test]
fn minimal_gold_without_numbers() {
    let text = "A dainty chain with minimal gold.";
    assert_eq!(estimate_price_inr(text), 5 * 7_915);
}

#[test]
fn no_recognizable_phrases_uses_defaults() {
    // 10 g at the default 22K grade, no diamond contribution
    let text = "A beautiful piece of jewelry with intricate craftsmanship.";
    assert_eq!(estimate_price_inr(text), 10 * 7_915);
}

#[test]
fn realistic_description_combines_signals() {
    let text = "1. Type: Ring.\n\
                2. Materials: 18K gold with a brilliant-cut diamond.\n\
                3. Gold content: around 8 grams of gold. Diamond weight: approximately 1.5 carats.";
    let appraisal = appraise_description(text);
    assert_eq!(appraisal.karat, Karat::K18);
    assert_eq!(appraisal.gold_grams, 8.0);
    assert_eq!(appraisal.diamond_carat, Some(1.5));
    assert_eq!(appraisal.total_inr, 50_000 + 8 * 6_476);
}

#[test]
fn oversize_diamond_scales_top_bracket() {
    let text = "The pendant features a diamond of 5 carats, with minimal gold.";
    // 70000 * (5 / 2.5) for the stone plus 5 g of default-grade gold
    assert_eq!(estimate_price_inr(text), 140_000 + 5 * 7_915);
}

#[test]
fn unknown_karat_grade_falls_back() {
    let text = "Likely 13K gold, around 10 grams of gold.";
    assert_eq!(estimate_price_inr(text), 10 * 7_915);
}
