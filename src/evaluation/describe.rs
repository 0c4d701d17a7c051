use super::ranking::Ranking;
use super::strength::Strength;
use crate::cards::card::Card;
use crate::cards::rank::Rank;
use crate::error::Result;

impl Strength {
    /// Canonical human-readable phrase for this strength, e.g.
    /// "Full house, Aces over Tens" or "Royal flush".
    pub fn describe(&self) -> String {
        let kickers = self.kickers().ranks();
        match self.ranking() {
            Ranking::StraightFlush(high) => match high {
                Rank::Ace => "Royal flush".to_string(),
                Rank::Five => "Five-high straight flush".to_string(),
                _ => format!("{}-high straight flush", high.word()),
            },
            Ranking::Quads(quad) => match kickers.first() {
                Some(kicker) => format!(
                    "Four of a kind, {} with {} kicker",
                    quad.plural(),
                    kicker.word()
                ),
                None => format!("Four of a kind, {}", quad.plural()),
            },
            Ranking::FullHouse(trips, pair) => {
                format!("Full house, {} over {}", trips.plural(), pair.plural())
            }
            Ranking::Flush(high) => {
                let words = std::iter::once(high)
                    .chain(kickers)
                    .map(|r| r.word())
                    .collect::<Vec<_>>()
                    .join(" ");
                format!("Flush, {}", words)
            }
            Ranking::Straight(high) => match high {
                Rank::Five => "Five-high straight".to_string(),
                _ => format!("{}-high straight", high.word()),
            },
            Ranking::Trips(trips) => match kickers.len() {
                0 => format!("Three of a kind, {}", trips.plural()),
                _ => format!(
                    "Three of a kind, {} with {} kickers",
                    trips.plural(),
                    Self::listed(&kickers)
                ),
            },
            Ranking::TwoPair(hi, lo) => match kickers.first() {
                Some(kicker) => format!(
                    "Two pair, {} and {} with {} kicker",
                    hi.plural(),
                    lo.plural(),
                    kicker.word()
                ),
                None => format!("Two pair, {} and {}", hi.plural(), lo.plural()),
            },
            Ranking::OnePair(pair) => match kickers.len() {
                0 => format!("Pair of {}", pair.plural()),
                _ => format!(
                    "Pair of {} with {} kickers",
                    pair.plural(),
                    Self::listed(&kickers)
                ),
            },
            Ranking::HighCard(high) => {
                let all = std::iter::once(high).chain(kickers).collect::<Vec<_>>();
                format!("{}-high ({})", high.word(), Self::listed(&all))
            }
        }
    }

    fn listed(ranks: &[Rank]) -> String {
        ranks.iter().map(|r| r.word()).collect::<Vec<_>>().join(", ")
    }
}

/// Score the best 5-card hand among the given cards and describe it.
pub fn describe_best_hand(cards: &[Card]) -> Result<String> {
    Ok(Strength::evaluate_best(cards)?.describe())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn describe(s: &str) -> String {
        describe_best_hand(
            &s.split_whitespace()
                .map(|c| Card::parse(c).unwrap())
                .collect::<Vec<_>>(),
        )
        .unwrap()
    }

    #[test]
    fn royal_and_wheel_straight_flushes() {
        assert_eq!(describe("Ts Js Qs Ks As"), "Royal flush");
        assert_eq!(describe("As 2s 3s 4s 5s"), "Five-high straight flush");
        assert_eq!(describe("5h 6h 7h 8h 9h"), "Nine-high straight flush");
    }

    #[test]
    fn straights() {
        assert_eq!(describe("Ah 2s 3d 4c 5s"), "Five-high straight");
        assert_eq!(describe("8h 9s Td Jc Qs"), "Queen-high straight");
    }

    #[test]
    fn full_house_aces_over_kings() {
        assert_eq!(describe("Ac Ad Ah Kc Ks"), "Full house, Aces over Kings");
    }

    #[test]
    fn kings_over_aces_from_seven_cards() {
        assert_eq!(
            describe("As Kd Ah Kh Kc 2s 3d"),
            "Full house, Kings over Aces"
        );
    }

    #[test]
    fn quads_and_trips_and_pairs() {
        assert_eq!(
            describe("9c 9d 9h 9s Ac"),
            "Four of a kind, Nines with Ace kicker"
        );
        assert_eq!(
            describe("Ac Ad Ah Kc Qs"),
            "Three of a kind, Aces with King, Queen kickers"
        );
        assert_eq!(
            describe("Ac Ad Kc Ks Qh"),
            "Two pair, Aces and Kings with Queen kicker"
        );
        assert_eq!(
            describe("Ac Ad Kc Qs Jh"),
            "Pair of Aces with King, Queen, Jack kickers"
        );
    }

    #[test]
    fn flush_lists_all_five_ranks() {
        assert_eq!(describe("Ah Kh 9h 7h 2h"), "Flush, Ace King Nine Seven Two");
    }

    #[test]
    fn high_card_lists_all_five_ranks() {
        assert_eq!(
            describe("Ah Ks 9d 7c 2h"),
            "Ace-high (Ace, King, Nine, Seven, Two)"
        );
    }
}
