//! Standard normal distribution functions.
//!
//! Generic over `T: Float` so the kernels stay usable with any
//! floating-point representation.

use num_traits::Float;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Complementary error function via the Abramowitz and Stegun 7.1.26
/// polynomial, maximum error 1.5e-7 over the real line.
fn erfc_approx<T: Float>(x: T) -> T {
    let one = T::one();
    let abs_x = x.abs();

    let a1 = T::from(0.254829592).unwrap();
    let a2 = T::from(-0.284496736).unwrap();
    let a3 = T::from(1.421413741).unwrap();
    let a4 = T::from(-1.453152027).unwrap();
    let a5 = T::from(1.061405429).unwrap();
    let p = T::from(0.3275911).unwrap();

    let t = one / (one + p * abs_x);
    let poly = a1 + t * (a2 + t * (a3 + t * (a4 + t * a5)));
    let erfc_abs = t * poly * (-abs_x * abs_x).exp();

    // erfc(-x) = 2 - erfc(x)
    if x < T::zero() {
        T::from(2.0).unwrap() - erfc_abs
    } else {
        erfc_abs
    }
}

/// Standard normal cumulative distribution function.
///
/// Phi(x) = erfc(-x / sqrt(2)) / 2, accurate to about 1e-7 for all
/// finite inputs.
///
/// # Examples
///
/// ```
/// use horizon_pricing::analytics::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// ```
pub fn norm_cdf<T: Float>(x: T) -> T {
    let sqrt_2 = T::from(std::f64::consts::SQRT_2).unwrap();
    let half = T::from(0.5).unwrap();
    half * erfc_approx(-x / sqrt_2)
}

/// Standard normal probability density function.
pub fn norm_pdf<T: Float>(x: T) -> T {
    let c = T::from(FRAC_1_SQRT_2PI).unwrap();
    let half = T::from(0.5).unwrap();
    c * (-half * x * x).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cdf_known_values() {
        assert_relative_eq!(norm_cdf(0.0_f64), 0.5, epsilon = 1e-7);
        assert_relative_eq!(norm_cdf(1.0_f64), 0.841344746, epsilon = 1e-6);
        assert_relative_eq!(norm_cdf(-1.0_f64), 0.158655254, epsilon = 1e-6);
        assert_relative_eq!(norm_cdf(1.96_f64), 0.975002105, epsilon = 1e-6);
    }

    #[test]
    fn test_cdf_symmetry() {
        for &x in &[0.1_f64, 0.7, 1.3, 2.9] {
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0, epsilon = 1e-7);
        }
    }

    #[test]
    fn test_pdf_peak_and_symmetry() {
        assert_relative_eq!(norm_pdf(0.0_f64), 0.398942280, epsilon = 1e-9);
        assert_relative_eq!(norm_pdf(1.5_f64), norm_pdf(-1.5_f64), epsilon = 1e-15);
    }

    #[test]
    fn test_cdf_tails() {
        assert!(norm_cdf(8.0_f64) > 0.9999);
        assert!(norm_cdf(-8.0_f64) < 1e-4);
    }
}
