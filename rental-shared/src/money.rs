/// Round a monetary value to the nearest hundredth.
///
/// Applied exactly once, at a final computed value. Intermediate steps stay
/// unrounded so repeated rounding cannot drift a total.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_nearest_cent() {
        assert_eq!(round2(59.997), 60.0);
        assert_eq!(round2(19.999 * 3.0), 60.0);
        assert_eq!(round2(10.004), 10.0);
        assert_eq!(round2(10.006), 10.01);
    }

    #[test]
    fn exact_values_pass_through() {
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(42.5), 42.5);
    }
}
