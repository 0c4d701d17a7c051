use super::category::Category;
use crate::cards::rank::Rank;
use serde::Deserialize;
use serde::Serialize;

/// A hand's value: one tagged variant per category, carrying the ranks
/// that define it. Variant order and field order make the derived Ord
/// identical to category-then-tiebreaker comparison; the remaining
/// tiebreaker ranks live in Kickers.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Ranking {
    HighCard(Rank),        // 4 kickers
    OnePair(Rank),         // 3 kickers
    TwoPair(Rank, Rank),   // 1 kicker
    Trips(Rank),           // 2 kickers
    Straight(Rank),        // 0 kickers
    Flush(Rank),           // 4 kickers
    FullHouse(Rank, Rank), // 0 kickers
    Quads(Rank),           // 1 kicker
    StraightFlush(Rank),   // 0 kickers
}

impl Ranking {
    pub fn category(&self) -> Category {
        match self {
            Ranking::HighCard(_) => Category::HighCard,
            Ranking::OnePair(_) => Category::OnePair,
            Ranking::TwoPair(..) => Category::TwoPair,
            Ranking::Trips(_) => Category::Trips,
            Ranking::Straight(_) => Category::Straight,
            Ranking::Flush(_) => Category::Flush,
            Ranking::FullHouse(..) => Category::FullHouse,
            Ranking::Quads(_) => Category::Quads,
            Ranking::StraightFlush(_) => Category::StraightFlush,
        }
    }

    /// How many kicker ranks complete this ranking's 5-rank tiebreaker.
    pub(crate) fn n_kickers(&self) -> usize {
        match self {
            Ranking::HighCard(_) | Ranking::Flush(_) => 4,
            Ranking::OnePair(_) => 3,
            Ranking::Trips(_) => 2,
            Ranking::TwoPair(..) | Ranking::Quads(_) => 1,
            _ => 0,
        }
    }

    /// Rank bits to exclude when collecting kickers from the hand.
    pub(crate) fn mask(&self) -> u16 {
        match *self {
            Ranking::TwoPair(hi, lo) => !(u16::from(hi) | u16::from(lo)),
            Ranking::HighCard(hi)
            | Ranking::OnePair(hi)
            | Ranking::Trips(hi)
            | Ranking::Flush(hi)
            | Ranking::Quads(hi) => !u16::from(hi),
            Ranking::FullHouse(..) | Ranking::Straight(..) | Ranking::StraightFlush(..) => {
                unreachable!("no kickers")
            }
        }
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Ranking::FullHouse(r1, r2) => write!(f, "FullHouse     {}{}", r1, r2),
            Ranking::TwoPair(r1, r2) => write!(f, "TwoPair       {}{}", r1, r2),
            Ranking::HighCard(r) => write!(f, "HighCard      {} ", r),
            Ranking::OnePair(r) => write!(f, "OnePair       {} ", r),
            Ranking::Trips(r) => write!(f, "ThreeOfAKind  {} ", r),
            Ranking::Straight(r) => write!(f, "Straight      {} ", r),
            Ranking::Quads(r) => write!(f, "FourOfAKind   {} ", r),
            Ranking::Flush(r) => write!(f, "Flush         {} ", r),
            Ranking::StraightFlush(r) => write!(f, "StraightFlush {} ", r),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_dominate_ranks() {
        assert!(Ranking::OnePair(Rank::Ace) < Ranking::TwoPair(Rank::Two, Rank::Three));
        assert!(Ranking::Straight(Rank::Ace) < Ranking::Flush(Rank::Seven));
        assert!(Ranking::Flush(Rank::Ace) < Ranking::FullHouse(Rank::Two, Rank::Three));
    }

    #[test]
    fn fields_break_ties_in_order() {
        assert!(Ranking::TwoPair(Rank::Ace, Rank::Two) > Ranking::TwoPair(Rank::King, Rank::Queen));
        assert!(
            Ranking::FullHouse(Rank::King, Rank::Ace) > Ranking::FullHouse(Rank::Queen, Rank::Two)
        );
        assert!(
            Ranking::FullHouse(Rank::King, Rank::Ace) < Ranking::FullHouse(Rank::Ace, Rank::Two)
        );
    }

    #[test]
    fn wheel_straight_loses_to_six_high() {
        assert!(Ranking::Straight(Rank::Five) < Ranking::Straight(Rank::Six));
        assert!(Ranking::StraightFlush(Rank::Five) < Ranking::StraightFlush(Rank::Six));
    }
}
