/// Rounds to the nearest integer, with halves rounded towards positive
/// infinity.
///
/// Unlike [`f64::round`], which rounds halves away from zero, `-2.5` rounds
/// to `-2.0`. NaN and infinities are returned unchanged.
///
/// ## Example
/// ```
/// use numscript::util::num::round_half_up;
///
/// assert_eq!(round_half_up(2.5), 3.0);
/// assert_eq!(round_half_up(-2.5), -2.0);
/// assert_eq!(round_half_up(-2.6), -3.0);
/// ```
#[must_use]
pub fn round_half_up(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Rounds `value` to `decimals` decimal places.
///
/// `decimals` is itself rounded to a whole number first; a negative count
/// rounds to tens, hundreds and so on.
///
/// ## Example
/// ```
/// use numscript::util::num::round_to_decimals;
///
/// assert_eq!(round_to_decimals(3.14159, 2.0), 3.14);
/// assert_eq!(round_to_decimals(7.5, 0.0), 8.0);
/// ```
#[must_use]
pub fn round_to_decimals(value: f64, decimals: f64) -> f64 {
    let factor = 10f64.powf(round_half_up(decimals));
    round_half_up(value * factor) / factor
}

/// Returns the sign of `value`: `-1.0`, `0.0` or `1.0`.
///
/// Zero (of either sign) and NaN are returned unchanged, unlike
/// [`f64::signum`] which maps `0.0` to `1.0`.
///
/// ## Example
/// ```
/// use numscript::util::num::signum;
///
/// assert_eq!(signum(-42.0), -1.0);
/// assert_eq!(signum(0.0), 0.0);
/// assert!(signum(f64::NAN).is_nan());
/// ```
#[must_use]
pub fn signum(value: f64) -> f64 {
    if value == 0.0 || value.is_nan() { value } else { value.signum() }
}

/// The logarithm of `value` in an arbitrary `base`.
///
/// Bases 2 and 10 use the dedicated `f64` functions, so exact powers of
/// those bases give exact results; any other base goes through the change
/// of base formula.
///
/// ## Example
/// ```
/// use numscript::util::num::log_base;
///
/// assert_eq!(log_base(8.0, 2.0), 3.0);
/// assert_eq!(log_base(1000.0, 10.0), 3.0);
/// assert!((log_base(81.0, 3.0) - 4.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn log_base(value: f64, base: f64) -> f64 {
    if base == 2.0 {
        value.log2()
    } else if base == 10.0 {
        value.log10()
    } else {
        value.ln() / base.ln()
    }
}
