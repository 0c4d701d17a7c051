use super::TOLERANCE;
use super::utility::utility;
use crate::Chips;
use crate::Probability;
use crate::Utility;
use serde::Deserialize;
use serde::Serialize;

/// Inputs for weighing BET/RAISE against a check/fold baseline of zero.
/// The opponent folds with fold_prob and takes us to showdown otherwise;
/// no betting follows the call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RaiseDecision {
    /// Current pot before our bet.
    pub pot: Chips,
    /// What we already owe before raising.
    pub to_call: Chips,
    /// Our new bet or raise.
    pub bet_size: Chips,
    /// Probability every opponent folds to the bet.
    pub fold_prob: Probability,
    /// Outcome probabilities conditioned on being called.
    pub win_prob_call: Probability,
    pub tie_prob_call: Probability,
    /// 0 risk-neutral, > 0 cautious, < 0 risk-seeking.
    pub risk_factor: f64,
    /// Pot-share multiplier when more than one opponent calls.
    pub expected_callers_when_called: f64,
}

impl RaiseDecision {
    pub fn new(
        pot: Chips,
        to_call: Chips,
        bet_size: Chips,
        fold_prob: Probability,
        win_prob_call: Probability,
    ) -> Self {
        Self {
            pot,
            to_call,
            bet_size,
            fold_prob,
            win_prob_call,
            tie_prob_call: 0.0,
            risk_factor: 0.0,
            expected_callers_when_called: 1.0,
        }
    }

    pub fn lose_prob_call(&self) -> Probability {
        (1.0 - self.win_prob_call - self.tie_prob_call).clamp(0.0, 1.0)
    }

    fn callers(&self) -> f64 {
        self.expected_callers_when_called.max(1.0)
    }

    /// Outcome deltas relative to check/fold when the bet gets called.
    fn deltas(&self) -> (Chips, Chips, Chips) {
        let k = self.callers();
        (
            self.pot + k * self.bet_size,
            0.5 * self.pot + 0.5 * (k - 1.0) * self.bet_size - 0.5 * self.to_call,
            -self.bet_size - self.to_call,
        )
    }

    /// Chip-linear expected value of betting/raising.
    pub fn ev_chips(&self) -> Chips {
        let (win, tie, lose) = self.deltas();
        let if_called = self.win_prob_call * win
            + self.tie_prob_call * tie
            + self.lose_prob_call() * lose;
        self.fold_prob * self.pot + (1.0 - self.fold_prob) * if_called
    }

    /// Risk-adjusted expected utility of betting/raising.
    pub fn ev_utility(&self) -> Utility {
        let (win, tie, lose) = self.deltas();
        let scale = (self.to_call + self.bet_size).max(1.0);
        let folded = utility(self.pot, self.risk_factor, scale);
        let if_called = self.win_prob_call * utility(win, self.risk_factor, scale)
            + self.tie_prob_call * utility(tie, self.risk_factor, scale)
            + self.lose_prob_call() * utility(lose, self.risk_factor, scale);
        self.fold_prob * folded + (1.0 - self.fold_prob) * if_called
    }

    pub fn recommend(&self) -> RaiseAdvice {
        let eu = self.ev_utility();
        if eu > TOLERANCE {
            RaiseAdvice::Raise(eu)
        } else if eu < -TOLERANCE {
            RaiseAdvice::Stand(eu)
        } else {
            RaiseAdvice::Close(eu)
        }
    }
}

/// Raise-or-stand-pat recommendation, carrying the expected utility it is
/// based on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RaiseAdvice {
    Raise(Utility),
    Stand(Utility),
    Close(Utility),
}

impl RaiseAdvice {
    pub fn eu(&self) -> Utility {
        match self {
            RaiseAdvice::Raise(eu) | RaiseAdvice::Stand(eu) | RaiseAdvice::Close(eu) => *eu,
        }
    }
}

impl std::fmt::Display for RaiseAdvice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            RaiseAdvice::Raise(eu) => write!(f, "RAISE/BET (EU = {:.3})", eu),
            RaiseAdvice::Stand(eu) => write!(f, "NO RAISE (EU = {:.3})", eu),
            RaiseAdvice::Close(eu) => write!(f, "CLOSE DECISION (EU ≈ {:.3})", eu),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn certain_fold_banks_the_pot() {
        let decision = RaiseDecision::new(100.0, 0.0, 50.0, 1.0, 0.0);
        assert_eq!(decision.ev_chips(), 100.0);
    }

    #[test]
    fn never_folded_always_beaten_loses_bet_and_call() {
        let decision = RaiseDecision::new(100.0, 20.0, 50.0, 0.0, 0.0);
        assert_eq!(decision.ev_chips(), -70.0);
    }

    #[test]
    fn called_win_takes_pot_plus_bet() {
        let decision = RaiseDecision::new(100.0, 0.0, 50.0, 0.0, 1.0);
        assert_eq!(decision.ev_chips(), 150.0);
    }

    #[test]
    fn multiway_callers_scale_the_winnings() {
        let decision = RaiseDecision {
            expected_callers_when_called: 2.0,
            ..RaiseDecision::new(100.0, 0.0, 50.0, 0.0, 1.0)
        };
        assert_eq!(decision.ev_chips(), 200.0);
    }

    #[test]
    fn callers_below_one_are_clamped() {
        let clamped = RaiseDecision {
            expected_callers_when_called: 0.25,
            ..RaiseDecision::new(100.0, 0.0, 50.0, 0.0, 1.0)
        };
        let unit = RaiseDecision::new(100.0, 0.0, 50.0, 0.0, 1.0);
        assert_eq!(clamped.ev_chips(), unit.ev_chips());
    }

    #[test]
    fn risk_neutral_eu_equals_ev() {
        let decision = RaiseDecision {
            tie_prob_call: 0.05,
            ..RaiseDecision::new(100.0, 20.0, 50.0, 0.3, 0.45)
        };
        assert!((decision.ev_utility() - decision.ev_chips()).abs() < 1e-12);
    }

    #[test]
    fn recommendation_bands() {
        let raise = RaiseDecision::new(100.0, 0.0, 50.0, 1.0, 0.0).recommend();
        assert!(matches!(raise, RaiseAdvice::Raise(_)));
        let stand = RaiseDecision::new(100.0, 20.0, 50.0, 0.0, 0.0).recommend();
        assert!(matches!(stand, RaiseAdvice::Stand(_)));
        let close = RaiseDecision::new(0.0, 0.0, 0.0, 0.0, 0.0).recommend();
        assert!(matches!(close, RaiseAdvice::Close(_)));
    }

    #[test]
    fn advice_displays_like_the_ui_expects() {
        let advice = RaiseDecision::new(100.0, 0.0, 50.0, 1.0, 0.0).recommend();
        assert_eq!(advice.to_string(), "RAISE/BET (EU = 100.000)");
    }
}
