/// Reward points earned for a single purchase amount.
///
/// 2 points per whole dollar over $100, plus 1 point per whole dollar
/// between $50 and $100. Amounts at or below $50 earn nothing, and
/// garbage amounts (negative, NaN, infinite) earn nothing rather than
/// poisoning a customer's totals.
pub fn calculate_points(amount: f64) -> u64 {
    if !amount.is_finite() || amount < 0.0 {
        return 0;
    }

    let whole_dollars = amount.floor() as u64;

    if whole_dollars > 100 {
        // Saturate so absurdly large amounts cap out instead of wrapping.
        (whole_dollars - 100).saturating_mul(2).saturating_add(50)
    } else if whole_dollars > 50 {
        whole_dollars - 50
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_at_or_below_fifty_earn_nothing() {
        assert_eq!(calculate_points(0.0), 0);
        assert_eq!(calculate_points(25.0), 0);
        assert_eq!(calculate_points(50.0), 0);
        assert_eq!(calculate_points(50.99), 0);
    }

    #[test]
    fn one_point_per_dollar_between_fifty_and_one_hundred() {
        assert_eq!(calculate_points(51.0), 1);
        assert_eq!(calculate_points(75.0), 25);
        assert_eq!(calculate_points(100.0), 50);
    }

    #[test]
    fn two_points_per_dollar_above_one_hundred() {
        assert_eq!(calculate_points(101.0), 52);
        assert_eq!(calculate_points(120.0), 90);
        assert_eq!(calculate_points(200.0), 250);
    }

    #[test]
    fn fractional_cents_never_earn() {
        assert_eq!(calculate_points(120.75), 90);
        assert_eq!(calculate_points(100.99), 50);
        assert_eq!(calculate_points(101.01), 52);
    }

    #[test]
    fn enormous_amounts_saturate_instead_of_overflowing() {
        // 1e19 whole dollars would earn ~2e19 points, past u64::MAX.
        assert_eq!(calculate_points(1e19), u64::MAX);
        assert_eq!(calculate_points(f64::MAX), u64::MAX);
        assert!(calculate_points(1e18) < calculate_points(1e19));
    }

    #[test]
    fn points_never_decrease_as_amounts_grow() {
        let mut previous = calculate_points(0.0);
        for cents in 1..=30_000u64 {
            let current = calculate_points(cents as f64 / 100.0);
            assert!(current >= previous, "points dropped at ${}", cents as f64 / 100.0);
            previous = current;
        }
    }

    #[test]
    fn garbage_amounts_earn_nothing() {
        assert_eq!(calculate_points(-10.0), 0);
        assert_eq!(calculate_points(f64::NAN), 0);
        assert_eq!(calculate_points(f64::INFINITY), 0);
        assert_eq!(calculate_points(f64::NEG_INFINITY), 0);
    }
}
