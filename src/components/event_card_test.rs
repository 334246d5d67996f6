use super::*;

// =============================================================
// Price display
// =============================================================

#[test]
fn zero_price_reads_free() {
    assert_eq!(price_label(0.0), "Free");
}

#[test]
fn positive_prices_carry_the_currency() {
    assert_eq!(price_label(1500.0), "LKR 1500");
    assert_eq!(price_label(99.5), "LKR 99.5");
}
