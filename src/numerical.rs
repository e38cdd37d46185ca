/// Center of the natural rating scale.
pub const NATURAL_CENTER: f64 = 1500.;

/// Scale factor between the natural scale and Glicko-2's internal one,
/// 400 / ln(10). Conversions must go through this constant in both
/// directions so the two representations stay interchangeable.
pub const GLICKO2_SCALE: f64 = 173.7178;

/// Logistic slope of the natural scale: ln(10) / 400. On the internal
/// scale the slope is 1.
pub const GLICKO_Q: f64 = std::f64::consts::LN_10 / 400.;

pub const NEWTON_TOLERANCE: f64 = 1e-6;
pub const NEWTON_MAX_ITERS: usize = 100;

pub fn to_internal_scale(mu: f64) -> f64 {
    (mu - NATURAL_CENTER) / GLICKO2_SCALE
}

pub fn to_natural_scale(mu: f64) -> f64 {
    mu * GLICKO2_SCALE + NATURAL_CENTER
}

/// Newton-Raphson on a twice-differentiable objective, where `f` maps a
/// query point to (value, derivative) of the function whose zero we
/// want. Terminates when successive iterates stabilize within
/// `NEWTON_TOLERANCE`; returns `None` if the cap is hit first, rather
/// than looping on a non-converging float sequence.
pub fn solve_newton_capped(mut x0: f64, f: impl Fn(f64) -> (f64, f64)) -> Option<f64> {
    for _ in 0..NEWTON_MAX_ITERS {
        let (val, val_prime) = f(x0);
        let x1 = x0 - val / val_prime;
        if (x1 - x0).abs() < NEWTON_TOLERANCE {
            return Some(x1);
        }
        x0 = x1;
    }
    tracing::warn!(
        "Newton iteration failed to stabilize within {} steps @ {}",
        NEWTON_MAX_ITERS,
        x0
    );
    None
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_scale_round_trip() {
        for mu in [30.5, 612.3, 1500., 1463.998, 2837.2, -411.] {
            let there_and_back = to_natural_scale(to_internal_scale(mu));
            assert_relative_eq!(there_and_back, mu, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_scale_center_and_slope() {
        assert_relative_eq!(to_internal_scale(NATURAL_CENTER), 0.);
        assert_relative_eq!(
            to_internal_scale(NATURAL_CENTER + GLICKO2_SCALE),
            1.,
            max_relative = 1e-12
        );
        assert_relative_eq!(GLICKO_Q * GLICKO2_SCALE, 1., max_relative = 1e-6);
    }

    #[test]
    fn test_newton_finds_simple_root() {
        // x^2 - 2 = 0, starting right of the positive root
        let root = solve_newton_capped(2., |x| (x * x - 2., 2. * x)).unwrap();
        assert_relative_eq!(root, 2f64.sqrt(), max_relative = 1e-9);
    }

    #[test]
    fn test_newton_caps_out() {
        // Derivative of the wrong sign pushes the iterate away from the
        // root forever; the cap must fire instead of spinning.
        assert!(solve_newton_capped(1., |x| (x.exp(), -1.)).is_none());
    }
}
