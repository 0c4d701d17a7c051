use super::call::CallDecision;
use super::raise::RaiseDecision;
use crate::Chips;
use crate::Utility;
use serde::Deserialize;
use serde::Serialize;

/// The three candidate actions, fold fixed at zero EV/EU by definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Fold,
    Call,
    Raise,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Fold => write!(f, "FOLD"),
            Action::Call => write!(f, "CALL"),
            Action::Raise => write!(f, "RAISE"),
        }
    }
}

/// One row of the fold/call/raise table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub action: Action,
    pub ev: Chips,
    pub eu: Utility,
}

/// Side-by-side EV and EU for folding, calling, and raising, with the
/// recommended action taken as the EU argmax (fold wins exact ties).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub rows: [Row; 3],
}

impl Comparison {
    pub fn new(call: CallDecision, raise: RaiseDecision) -> Self {
        Self {
            rows: [
                Row {
                    action: Action::Fold,
                    ev: 0.0,
                    eu: 0.0,
                },
                Row {
                    action: Action::Call,
                    ev: call.ev_chips(),
                    eu: call.ev_utility(),
                },
                Row {
                    action: Action::Raise,
                    ev: raise.ev_chips(),
                    eu: raise.ev_utility(),
                },
            ],
        }
    }

    pub fn best(&self) -> Row {
        self.rows
            .iter()
            .copied()
            .fold(self.rows[0], |best, row| if row.eu > best.eu { row } else { best })
    }
}

impl std::fmt::Display for Comparison {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{:<8} {:>12} {:>12}", "action", "EV (chips)", "EU")?;
        for row in self.rows.iter() {
            writeln!(f, "{:<8} {:>12.3} {:>12.3}", row.action, row.ev, row.eu)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strong_call_beats_the_table() {
        let call = CallDecision::new(100.0, 50.0, 1.0);
        let raise = RaiseDecision::new(100.0, 50.0, 50.0, 0.0, 0.0);
        let comparison = Comparison::new(call, raise);
        assert_eq!(comparison.best().action, Action::Call);
        assert_eq!(comparison.best().eu, 100.0);
    }

    #[test]
    fn hopeless_spot_folds() {
        let call = CallDecision::new(100.0, 50.0, 0.0);
        let raise = RaiseDecision::new(100.0, 50.0, 50.0, 0.0, 0.0);
        let comparison = Comparison::new(call, raise);
        assert_eq!(comparison.best().action, Action::Fold);
        assert_eq!(comparison.best().eu, 0.0);
    }

    #[test]
    fn fold_wins_exact_ties() {
        let call = CallDecision::new(100.0, 50.0, 1.0 / 3.0);
        let raise = RaiseDecision::new(0.0, 0.0, 0.0, 0.0, 0.0);
        let comparison = Comparison::new(call, raise);
        assert_eq!(comparison.best().action, Action::Fold);
    }

    #[test]
    fn fold_row_is_always_zero() {
        let call = CallDecision::new(1.0, 1.0, 0.5);
        let raise = RaiseDecision::new(1.0, 1.0, 1.0, 0.5, 0.5);
        let comparison = Comparison::new(call, raise);
        assert_eq!(comparison.rows[0].ev, 0.0);
        assert_eq!(comparison.rows[0].eu, 0.0);
    }
}
