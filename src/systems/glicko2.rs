//! Glicko-2 system details: http://www.glicko.net/glicko/glicko2.pdf
//!
//! Runs on the internal scale, where the logistic slope is 1; players
//! convert in on entry and back out before the result is committed.

use super::{Outcome, Player, Rating, RatingError, RatingSystem, check_series, round_stats};
use crate::numerical::{NEWTON_MAX_ITERS, solve_newton_capped};

#[derive(Debug)]
pub struct Glicko2 {
    /// Damps how fast volatility itself can move; smaller values drift
    /// slower. Deployments typically stay within 0.3 to 1.2, though
    /// values outside that range are accepted as given.
    pub tau: f64,
}

impl Default for Glicko2 {
    fn default() -> Self {
        Self { tau: 0.5 }
    }
}

impl Glicko2 {
    /// Solves for the period's new volatility: the zero of the
    /// volatility objective in x = ln(sigma'^2), found by Newton
    /// iteration from the current volatility. All arguments are on the
    /// internal scale.
    fn solve_volatility(
        &self,
        mu: f64,
        v: f64,
        delta: f64,
        vol: f64,
    ) -> Result<f64, RatingError> {
        let a = (vol * vol).ln();
        let tau_sq = self.tau * self.tau;
        let x = solve_newton_capped(a, |x| {
            let d = mu * mu + v + x.exp();
            let h1 = -(x - a) / tau_sq - 0.5 * x.exp() / d + 0.5 * x.exp() * (delta / d).powi(2);
            let h2 = -tau_sq.recip() - 0.5 * x.exp() * (mu * mu + v) / (d * d)
                + 0.5 * delta * delta * x.exp() * (mu * mu + v - x.exp()) / d.powi(3);
            (h1, h2)
        })
        .ok_or(RatingError::NumericalNonConvergence(NEWTON_MAX_ITERS))?;
        Ok((0.5 * x).exp())
    }
}

impl RatingSystem for Glicko2 {
    fn decay_inactive(&self, player: &mut Player) {
        // Volatility lives on the internal scale, so the inflation
        // happens there. No ceiling, unlike Glicko-1.
        let decayed = player.rating.to_internal().with_noise(player.vol);
        player.rating = decayed.to_natural();
    }

    fn round_update(
        &self,
        player: &mut Player,
        opponents: &[Rating],
        outcomes: &[Outcome],
    ) -> Result<(), RatingError> {
        check_series(opponents, outcomes)?;

        let me = player.rating.to_internal();
        let foes: Vec<Rating> = opponents.iter().map(|r| r.to_internal()).collect();
        let stats = round_stats(1., me, &foes, outcomes);
        let v = stats.info.recip();
        let delta = v * stats.surplus;

        let vol = self.solve_volatility(me.mu, v, delta, player.vol)?;
        // Period-onset deviation uses the *new* volatility, then the
        // games' information shrinks it.
        let sig_pre = me.sig.hypot(vol);
        let sig = (sig_pre.powi(-2) + v.recip()).recip().sqrt();
        let mu = me.mu + sig * sig * stats.surplus;

        player.rating = Rating { mu, sig }.to_natural();
        player.vol = vol;
        Ok(())
    }
}
