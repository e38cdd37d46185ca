mod player;

use crate::numerical::{GLICKO2_SCALE, to_internal_scale, to_natural_scale};
use itertools::izip;
pub use player::Player;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub mu: f64,
    pub sig: f64,
}

impl Rating {
    pub fn with_noise(self, sig_noise: f64) -> Self {
        Self {
            mu: self.mu,
            sig: self.sig.hypot(sig_noise),
        }
    }

    /// Converts onto Glicko-2's internal scale.
    pub fn to_internal(self) -> Self {
        Self {
            mu: to_internal_scale(self.mu),
            sig: self.sig / GLICKO2_SCALE,
        }
    }

    /// Converts back onto the natural 1500-centered scale.
    pub fn to_natural(self) -> Self {
        Self {
            mu: to_natural_scale(self.mu),
            sig: self.sig * GLICKO2_SCALE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Loss,
    Draw,
    Win,
}

impl Outcome {
    pub fn score(self) -> f64 {
        match self {
            Self::Loss => 0.,
            Self::Draw => 0.5,
            Self::Win => 1.,
        }
    }

    pub fn from_score(score: f64) -> Option<Self> {
        if score == 0. {
            Some(Self::Loss)
        } else if score == 0.5 {
            Some(Self::Draw)
        } else if score == 1. {
            Some(Self::Win)
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RatingError {
    #[error("got {opponents} opponents but {outcomes} outcomes")]
    InputMismatch { opponents: usize, outcomes: usize },
    #[error("rating update requires at least one opponent")]
    EmptyOpponentSet,
    #[error("volatility solver failed to converge within {0} iterations")]
    NumericalNonConvergence(usize),
}

/// One rating period's worth of games, either variant's view of them.
pub trait RatingSystem: std::fmt::Debug {
    /// Rating-deviation inflation for a player who sat out the period.
    /// Rating and volatility are untouched. Call once per idle period;
    /// it is the caller's job not to stack calls within one period.
    fn decay_inactive(&self, player: &mut Player);

    /// Full rating-period update against pre-period opponent snapshots.
    /// `opponents` and `outcomes` are parallel; outcomes are from the
    /// updating player's point of view. On error the player is
    /// untouched, and on success all fields commit together.
    fn round_update(
        &self,
        player: &mut Player,
        opponents: &[Rating],
        outcomes: &[Outcome],
    ) -> Result<(), RatingError>;
}

pub(crate) fn check_series(
    opponents: &[Rating],
    outcomes: &[Outcome],
) -> Result<(), RatingError> {
    if opponents.len() != outcomes.len() {
        return Err(RatingError::InputMismatch {
            opponents: opponents.len(),
            outcomes: outcomes.len(),
        });
    }
    if opponents.is_empty() {
        return Err(RatingError::EmptyOpponentSet);
    }
    Ok(())
}

/// Sums over one period's games, shared by both variants.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RoundStats {
    /// Σ g(sig_j)² E_j (1 - E_j): the information carried by the games.
    /// Its reciprocal is Glicko-2's v; Glicko-1's d² also divides by q².
    pub info: f64,
    /// Σ g(sig_j) (outcome_j - E_j): how far results beat expectations.
    pub surplus: f64,
}

/// Impact-reduction factor g for an opponent of deviation `sig`,
/// discounting games against uncertain opponents. `q` is the logistic
/// slope of the scale in use. Requires `sig >= 0`.
pub(crate) fn impact(q: f64, sig: f64) -> f64 {
    let pi = std::f64::consts::PI;
    (1. + 3. * (q * sig / pi).powi(2)).sqrt().recip()
}

/// Expected score of a player at `mu` against `foe`, in (0, 1) for
/// finite inputs.
pub(crate) fn expected_score(q: f64, mu: f64, foe: Rating) -> f64 {
    (1. + (-impact(q, foe.sig) * q * (mu - foe.mu)).exp()).recip()
}

/// Both sums are commutative; accumulation order doesn't matter.
pub(crate) fn round_stats(
    q: f64,
    me: Rating,
    opponents: &[Rating],
    outcomes: &[Outcome],
) -> RoundStats {
    let mut info = 0.;
    let mut surplus = 0.;
    for (&foe, &outcome) in izip!(opponents, outcomes) {
        let g = impact(q, foe.sig);
        let e = expected_score(q, me.mu, foe);
        info += g * g * e * (1. - e);
        surplus += g * (outcome.score() - e);
    }
    RoundStats { info, surplus }
}
