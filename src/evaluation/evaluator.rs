use super::kicks::Kickers;
use super::ranking::Ranking;
use crate::cards::rank::Rank;
use crate::cards::set::CardSet;
use crate::cards::suit::Suit;

/// A-5-4-3-2 as a rank mask; the wheel counts as a straight with high
/// card Five, below the six-high straight.
const WHEEL: u16 = 0b_1000000001111;
const WHEEL_HIGH: Rank = Rank::Five;

/// Scores an exactly-5-card set. Probes run most specific first over the
/// compact bit representation; the first category that matches wins.
/// Callers gate the 5-card precondition, see Strength::evaluate_5.
pub(crate) struct Evaluator(CardSet);

impl From<CardSet> for Evaluator {
    fn from(set: CardSet) -> Self {
        Self(set)
    }
}

impl Evaluator {
    pub fn ranking(&self) -> Ranking {
        None.or_else(|| self.find_straight_flush())
            .or_else(|| self.find_quads())
            .or_else(|| self.find_full_house())
            .or_else(|| self.find_flush())
            .or_else(|| self.find_straight())
            .or_else(|| self.find_trips())
            .or_else(|| self.find_two_pair())
            .or_else(|| self.find_one_pair())
            .or_else(|| self.find_high_card())
            .expect("at least one card in the set")
    }

    pub fn kickers(&self, ranking: Ranking) -> Kickers {
        match ranking.n_kickers() {
            0 => Kickers::none(),
            n => {
                let mut bits = self.0.rank_mask() & ranking.mask();
                while n < bits.count_ones() as usize {
                    bits &= bits - 1;
                }
                Kickers::from(bits)
            }
        }
    }

    ///

    fn find_high_card(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(1, None).map(Ranking::HighCard)
    }
    fn find_one_pair(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2, None).map(Ranking::OnePair)
    }
    fn find_two_pair(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(2, None).and_then(|hi| {
            self.find_rank_of_n_oak(2, Some(hi))
                .map(|lo| Ranking::TwoPair(hi, lo))
        })
    }
    fn find_trips(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3, None).map(Ranking::Trips)
    }
    fn find_full_house(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(3, None).and_then(|trips| {
            self.find_rank_of_n_oak(2, Some(trips))
                .map(|pair| Ranking::FullHouse(trips, pair))
        })
    }
    fn find_quads(&self) -> Option<Ranking> {
        self.find_rank_of_n_oak(4, None).map(Ranking::Quads)
    }
    fn find_straight(&self) -> Option<Ranking> {
        Self::find_rank_of_straight(self.0.rank_mask()).map(Ranking::Straight)
    }
    fn find_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush().map(|suit| {
            let bits = self.0.of(&suit).rank_mask();
            Ranking::Flush(Rank::from(bits))
        })
    }
    fn find_straight_flush(&self) -> Option<Ranking> {
        self.find_suit_of_flush().and_then(|suit| {
            Self::find_rank_of_straight(self.0.of(&suit).rank_mask()).map(Ranking::StraightFlush)
        })
    }

    /// Five consecutive rank bits, or the wheel. Returns the high card of
    /// the run.
    fn find_rank_of_straight(ranks: u16) -> Option<Rank> {
        let mut bits = ranks;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        if bits > 0 {
            Some(Rank::from(bits))
        } else if WHEEL == (WHEEL & ranks) {
            Some(WHEEL_HIGH)
        } else {
            None
        }
    }

    fn find_suit_of_flush(&self) -> Option<Suit> {
        Suit::all()
            .into_iter()
            .find(|suit| self.0.of(suit).size() >= 5)
    }

    /// Highest rank held at least n times, scanning nibbles from the ace
    /// down, optionally skipping one rank.
    fn find_rank_of_n_oak(&self, n: usize, skip: Option<Rank>) -> Option<Rank> {
        let mut nibble = u64::from(Rank::Ace) << 4;
        while nibble > 0 {
            nibble >>= 4;
            if let Some(skip) = skip {
                if nibble & u64::from(skip) != 0 {
                    continue;
                }
            }
            let held = u64::from(self.0) & nibble;
            if held.count_ones() as usize >= n {
                return Some(Rank::from((nibble.trailing_zeros() / 4) as u8));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(s: &str) -> Evaluator {
        Evaluator::from(CardSet::from(
            s.split_whitespace()
                .map(|c| crate::cards::card::Card::parse(c).unwrap())
                .collect::<Vec<_>>(),
        ))
    }

    #[rustfmt::skip]
    #[test]
    fn high_card() {
        let eval = eval("As Kh Qd Jc 9s");
        let ranking = eval.ranking();
        let kickers = eval.kickers(ranking);
        assert_eq!(ranking, Ranking::HighCard(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack, Rank::Nine]));
    }

    #[rustfmt::skip]
    #[test]
    fn one_pair() {
        let eval = eval("As Ah Kd Qc Js");
        let ranking = eval.ranking();
        let kickers = eval.kickers(ranking);
        assert_eq!(ranking, Ranking::OnePair(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack]));
    }

    #[test]
    fn two_pair() {
        let eval = eval("As Ah Kd Kc Qs");
        let ranking = eval.ranking();
        let kickers = eval.kickers(ranking);
        assert_eq!(ranking, Ranking::TwoPair(Rank::Ace, Rank::King));
        assert_eq!(kickers, Kickers::from(vec![Rank::Queen]));
    }

    #[test]
    fn trips() {
        let eval = eval("As Ah Ad Kc Qs");
        let ranking = eval.ranking();
        let kickers = eval.kickers(ranking);
        assert_eq!(ranking, Ranking::Trips(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King, Rank::Queen]));
    }

    #[test]
    fn straight() {
        let eval = eval("Ts Jh Qd Kc As");
        let ranking = eval.ranking();
        assert_eq!(ranking, Ranking::Straight(Rank::Ace));
        assert_eq!(eval.kickers(ranking), Kickers::none());
    }

    #[test]
    fn flush_keeps_all_five_ranks() {
        let eval = eval("As Ks Qs Js 9s");
        let ranking = eval.ranking();
        let kickers = eval.kickers(ranking);
        assert_eq!(ranking, Ranking::Flush(Rank::Ace));
        assert_eq!(
            kickers,
            Kickers::from(vec![Rank::King, Rank::Queen, Rank::Jack, Rank::Nine])
        );
    }

    #[test]
    fn full_house() {
        let eval = eval("2s 2h 2d 3c 3s");
        let ranking = eval.ranking();
        assert_eq!(ranking, Ranking::FullHouse(Rank::Two, Rank::Three));
        assert_eq!(eval.kickers(ranking), Kickers::none());
    }

    #[test]
    fn quads() {
        let eval = eval("As Ah Ad Ac Ks");
        let ranking = eval.ranking();
        let kickers = eval.kickers(ranking);
        assert_eq!(ranking, Ranking::Quads(Rank::Ace));
        assert_eq!(kickers, Kickers::from(vec![Rank::King]));
    }

    #[test]
    fn straight_flush() {
        let eval = eval("Ts Js Qs Ks As");
        assert_eq!(eval.ranking(), Ranking::StraightFlush(Rank::Ace));
    }

    #[test]
    fn wheel_straight() {
        let eval = eval("As 2h 3d 4c 5s");
        assert_eq!(eval.ranking(), Ranking::Straight(Rank::Five));
    }

    #[test]
    fn wheel_straight_flush() {
        let eval = eval("As 2s 3s 4s 5s");
        assert_eq!(eval.ranking(), Ranking::StraightFlush(Rank::Five));
    }

    #[test]
    fn flush_beats_straight_in_probe_order() {
        let eval = eval("4h 6h 7h 8h 9h");
        assert_eq!(eval.ranking(), Ranking::Flush(Rank::Nine));
    }

    #[test]
    fn full_house_beats_flush_in_probe_order() {
        // not constructible in one 5-card hand; ordering is pinned by the
        // Ranking variant order instead
        assert!(Ranking::Flush(Rank::Ace) < Ranking::FullHouse(Rank::Two, Rank::Three));
    }

    #[test]
    fn two_pair_orders_pairs_high_low() {
        let eval = eval("Ks Kh 2d 2c Qs");
        assert_eq!(eval.ranking(), Ranking::TwoPair(Rank::King, Rank::Two));
    }
}
