// src/rounding.rs

/// Rounds `value` to `decimals` places, half away from zero.
///
/// A result of zero is always `+0.0` so JSON never shows `-0.0`.
#[inline]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    let rounded = (value * scale).round() / scale;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Cents.
#[inline]
pub fn round_price(value: f64) -> f64 {
    round_to(value, 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_requested_places() {
        assert_eq!(round_price(175.99164506), 175.99);
        assert_eq!(round_price(204.19514844), 204.2);
        assert_eq!(round_to(0.012_345_6, 4), 0.0123);
        assert_eq!(round_to(-0.012_355_6, 4), -0.0124);
    }

    #[test]
    fn negative_zero_is_normalized() {
        let r = round_to(-0.000_01, 4);
        assert_eq!(r, 0.0);
        assert!(r.is_sign_positive());
    }
}
