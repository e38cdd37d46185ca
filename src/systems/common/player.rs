use super::Rating;
use crate::numerical::NATURAL_CENTER;
use serde::{Deserialize, Serialize};

/// Deviation assigned to a player with no rated history.
pub const SIG_NEWBIE: f64 = 200.;

/// Volatility assigned to a player with no rated history (Glicko-2).
pub const VOL_NEWBIE: f64 = 0.06;

/// One rated entity. The rating is kept on the natural 1500-centered
/// scale; `vol` only participates in Glicko-2 updates and is carried
/// unchanged by Glicko-1. Exactly one of the two period operations may
/// be applied per rating period.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub rating: Rating,
    pub vol: f64,
}

impl Player {
    pub fn with_rating(mu: f64, sig: f64, vol: f64) -> Self {
        Self {
            rating: Rating { mu, sig },
            vol,
        }
    }

    pub fn unrated() -> Self {
        Self::with_rating(NATURAL_CENTER, SIG_NEWBIE, VOL_NEWBIE)
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::unrated()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::numerical::GLICKO2_SCALE;
    use approx::assert_relative_eq;

    #[test]
    fn test_unrated_defaults() {
        let player = Player::unrated();
        assert_relative_eq!(player.rating.mu, 1500.);
        assert_relative_eq!(player.rating.sig, 200.);
        assert_relative_eq!(player.vol, 0.06);

        // On the internal scale the newbie sits at the origin.
        let internal = player.rating.to_internal();
        assert_relative_eq!(internal.mu, 0.);
        assert_relative_eq!(internal.sig, 200. / GLICKO2_SCALE);
    }
}
