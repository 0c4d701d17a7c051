use super::TOLERANCE;
use super::utility::utility;
use crate::Chips;
use crate::Probability;
use crate::Utility;
use serde::Deserialize;
use serde::Serialize;

/// Inputs for weighing CALL against a fold baseline of zero: the decision
/// is one-shot, and a call runs straight to showdown with no further
/// betting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CallDecision {
    /// Current pot, the opponent's bet included.
    pub pot: Chips,
    /// What a call costs.
    pub to_call: Chips,
    pub win_prob: Probability,
    pub tie_prob: Probability,
    /// 0 risk-neutral, > 0 cautious, < 0 risk-seeking.
    pub risk_factor: f64,
}

impl CallDecision {
    pub fn new(pot: Chips, to_call: Chips, win_prob: Probability) -> Self {
        Self {
            pot,
            to_call,
            win_prob,
            tie_prob: 0.0,
            risk_factor: 0.0,
        }
    }

    pub fn lose_prob(&self) -> Probability {
        (1.0 - self.win_prob - self.tie_prob).clamp(0.0, 1.0)
    }

    /// Outcome deltas relative to folding: win takes the pot, a tie takes
    /// half the pot less half the call, a loss forfeits the call.
    fn deltas(&self) -> (Chips, Chips, Chips) {
        (
            self.pot,
            0.5 * self.pot - 0.5 * self.to_call,
            -self.to_call,
        )
    }

    /// Chip-linear expected value of calling.
    pub fn ev_chips(&self) -> Chips {
        let (win, tie, lose) = self.deltas();
        self.win_prob * win + self.tie_prob * tie + self.lose_prob() * lose
    }

    /// Risk-adjusted expected utility of calling.
    pub fn ev_utility(&self) -> Utility {
        let (win, tie, lose) = self.deltas();
        let scale = self.to_call.max(1.0);
        self.win_prob * utility(win, self.risk_factor, scale)
            + self.tie_prob * utility(tie, self.risk_factor, scale)
            + self.lose_prob() * utility(lose, self.risk_factor, scale)
    }

    pub fn recommend(&self) -> CallAdvice {
        let eu = self.ev_utility();
        if eu > TOLERANCE {
            CallAdvice::Call(eu)
        } else if eu < -TOLERANCE {
            CallAdvice::Fold(eu)
        } else {
            CallAdvice::Close(eu)
        }
    }
}

/// Call-or-fold recommendation, carrying the expected utility it is
/// based on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CallAdvice {
    Call(Utility),
    Fold(Utility),
    Close(Utility),
}

impl CallAdvice {
    pub fn eu(&self) -> Utility {
        match self {
            CallAdvice::Call(eu) | CallAdvice::Fold(eu) | CallAdvice::Close(eu) => *eu,
        }
    }
}

impl std::fmt::Display for CallAdvice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            CallAdvice::Call(eu) => write!(f, "CALL (EU = {:.3})", eu),
            CallAdvice::Fold(eu) => write!(f, "FOLD (EU = {:.3})", eu),
            CallAdvice::Close(eu) => write!(f, "CLOSE DECISION (EU ≈ {:.3})", eu),
        }
    }
}
