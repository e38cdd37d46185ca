//! Glicko system details: http://www.glicko.net/glicko/glicko.pdf

use super::{Outcome, Player, Rating, RatingError, RatingSystem, check_series, round_stats};
use crate::numerical::GLICKO_Q;

/// Deviation floor, so established ratings can still move appreciably.
pub const SIG_FLOOR: f64 = 30.;
/// Deviation ceiling: the deviation of a player who never competed.
pub const SIG_CEIL: f64 = 350.;

#[derive(Debug)]
pub struct Glicko {
    /// Per-period deviation drift for a player who sits out a period.
    pub c: f64,
}

impl Default for Glicko {
    fn default() -> Self {
        Self { c: 63.2 }
    }
}

impl Glicko {
    fn decayed(&self, rating: Rating) -> Rating {
        let sig = rating.sig.hypot(self.c).clamp(SIG_FLOOR, SIG_CEIL);
        Rating {
            mu: rating.mu,
            sig,
        }
    }
}

impl RatingSystem for Glicko {
    fn decay_inactive(&self, player: &mut Player) {
        player.rating = self.decayed(player.rating);
    }

    fn round_update(
        &self,
        player: &mut Player,
        opponents: &[Rating],
        outcomes: &[Outcome],
    ) -> Result<(), RatingError> {
        check_series(opponents, outcomes)?;

        // Period-onset deviation, then shrink by the games' information.
        let me = self.decayed(player.rating);
        let stats = round_stats(GLICKO_Q, me, opponents, outcomes);
        let info = GLICKO_Q * GLICKO_Q * stats.info;
        let sig = (me.sig.powi(-2) + info).recip().sqrt();
        let mu = me.mu + GLICKO_Q * sig * sig * stats.surplus;
        player.rating = Rating { mu, sig };
        Ok(())
    }
}
