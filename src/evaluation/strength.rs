use super::evaluator::Evaluator;
use super::kicks::Kickers;
use super::ranking::Ranking;
use crate::cards::card::Card;
use crate::cards::set::CardSet;
use crate::cards::sets::SetIterator;
use crate::error::Error;
use crate::error::Result;
use crate::evaluation::category::Category;
use serde::Deserialize;
use serde::Serialize;
use std::cmp::Ordering;

/// A hand's full strength: the ranking plus its kicker ranks. Derived Ord
/// compares ranking first, kickers second. Equal strengths are genuinely
/// tied hands — a split pot.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Strength {
    ranking: Ranking,
    kickers: Kickers,
}

impl Strength {
    pub fn ranking(&self) -> Ranking {
        self.ranking
    }
    pub fn kickers(&self) -> Kickers {
        self.kickers
    }
    pub fn category(&self) -> Category {
        self.ranking.category()
    }

    /// Score exactly 5 distinct cards.
    pub fn evaluate_5(cards: &[Card]) -> Result<Self> {
        let set = CardSet::from(cards);
        if cards.len() != 5 || set.size() != 5 {
            return Err(Error::InvalidHandSize { n: cards.len() });
        }
        Ok(Self::from(Evaluator::from(set)))
    }

    /// The best 5-card strength among 5 or more cards: every 5-card
    /// subset is scored and the maximum kept. Exact by construction —
    /// 21 subsets for 7 cards, no lookup tables, no shortcuts.
    pub fn evaluate_best(cards: &[Card]) -> Result<Self> {
        let set = CardSet::from(cards);
        match set.size() {
            n if n < 5 => Err(Error::TooFewCards { n }),
            5 => Ok(Self::from(Evaluator::from(set))),
            _ => Ok(SetIterator::subsets(5, set)
                .map(|subset| Self::from(Evaluator::from(subset)))
                .max()
                .expect("a 6+ card set has 5-card subsets")),
        }
    }

    /// Total-order comparison of two 5-7 card hands.
    pub fn compare(ours: &[Card], theirs: &[Card]) -> Result<Ordering> {
        let ours = Self::evaluate_best(ours)?;
        let theirs = Self::evaluate_best(theirs)?;
        Ok(ours.cmp(&theirs))
    }
}

impl From<Evaluator> for Strength {
    fn from(evaluator: Evaluator) -> Self {
        let ranking = evaluator.ranking();
        let kickers = evaluator.kickers(ranking);
        Self { ranking, kickers }
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((ranking, kickers): (Ranking, Kickers)) -> Self {
        Self { ranking, kickers }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18} {}", self.ranking, self.kickers)
    }
}
