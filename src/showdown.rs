use crate::cards::card::Card;
use crate::error::Error;
use crate::error::Origin;
use crate::error::Result;
use crate::evaluation::strength::Strength;
use serde::Deserialize;
use serde::Serialize;
use std::collections::HashMap;

/// The outcome of comparing every player's best hand against the board:
/// the indices holding the maximum strength (more than one means a split
/// pot) plus each player's strength.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Showdown {
    pub winners: Vec<usize>,
    pub strengths: Vec<Strength>,
}

impl Showdown {
    pub fn is_split(&self) -> bool {
        self.winners.len() > 1
    }
    pub fn winning_strength(&self) -> Strength {
        self.strengths[self.winners[0]]
    }
}

/// Verify that no physical card appears twice across the players' hole
/// cards and the board. Scans players in index order, then the board;
/// the first collision fails with both origins named.
pub fn validate_unique(hole_hands: &[Vec<Card>], board: &[Card]) -> Result<()> {
    let mut seen: HashMap<Card, Origin> = HashMap::new();
    let holes = hole_hands
        .iter()
        .enumerate()
        .flat_map(|(player, hole)| hole.iter().map(move |c| (Origin::Hole { player }, *c)));
    let board = board
        .iter()
        .enumerate()
        .map(|(index, c)| (Origin::Board { index }, *c));
    for (origin, card) in holes.chain(board) {
        if let Some(first) = seen.get(&card) {
            return Err(Error::DuplicateCard {
                card,
                first: *first,
                second: origin,
            });
        }
        seen.insert(card, origin);
    }
    Ok(())
}

/// Resolve the winning player(s) for a set of hole hands and a board.
/// Every player's best hand over hole + board is evaluated; all players
/// attaining the maximum strength win (ties inclusive).
pub fn determine_winners(hole_hands: &[Vec<Card>], board: &[Card]) -> Result<Showdown> {
    if hole_hands.is_empty() {
        return Err(Error::NoPlayers);
    }
    validate_unique(hole_hands, board)?;
    for (player, hole) in hole_hands.iter().enumerate() {
        if hole.len() < 2 {
            return Err(Error::TooFewHoleCards { player });
        }
    }
    let strengths = hole_hands
        .iter()
        .map(|hole| {
            let mut cards = hole.clone();
            cards.extend_from_slice(board);
            Strength::evaluate_best(&cards)
        })
        .collect::<Result<Vec<Strength>>>()?;
    let best = *strengths.iter().max().expect("at least one player");
    let winners = strengths
        .iter()
        .enumerate()
        .filter(|(_, s)| **s == best)
        .map(|(i, _)| i)
        .collect();
    Ok(Showdown { winners, strengths })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::rank::Rank;
    use crate::evaluation::ranking::Ranking;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace()
            .map(|c| Card::parse(c).unwrap())
            .collect()
    }

    #[test]
    fn sole_winner() {
        let holes = vec![cards("As Ah"), cards("Ks Kh")];
        let board = cards("Qs Qh 2c 3d 4h");
        let showdown = determine_winners(&holes, &board).unwrap();
        assert_eq!(showdown.winners, vec![0]);
        assert!(!showdown.is_split());
        assert_eq!(
            showdown.strengths[0].ranking(),
            Ranking::TwoPair(Rank::Ace, Rank::Queen)
        );
        assert_eq!(
            showdown.strengths[1].ranking(),
            Ranking::TwoPair(Rank::King, Rank::Queen)
        );
    }

    #[test]
    fn board_plays_and_splits() {
        let holes = vec![cards("2s 3h"), cards("2d 3c")];
        let board = cards("As Ks Qs Js Ts");
        let showdown = determine_winners(&holes, &board).unwrap();
        assert_eq!(showdown.winners, vec![0, 1]);
        assert!(showdown.is_split());
        assert_eq!(
            showdown.winning_strength().ranking(),
            Ranking::StraightFlush(Rank::Ace)
        );
    }

    #[test]
    fn duplicate_across_players() {
        let holes = vec![cards("As Kd"), cards("As Qh")];
        let err = determine_winners(&holes, &[]).unwrap_err();
        assert_eq!(
            err,
            Error::DuplicateCard {
                card: Card::parse("As").unwrap(),
                first: Origin::Hole { player: 0 },
                second: Origin::Hole { player: 1 },
            }
        );
    }

    #[test]
    fn duplicate_against_board_names_both_origins() {
        let holes = vec![cards("As Kd")];
        let board = cards("Qh Jh Kd");
        let err = validate_unique(&holes, &board).unwrap_err();
        assert_eq!(
            err,
            Error::DuplicateCard {
                card: Card::parse("Kd").unwrap(),
                first: Origin::Hole { player: 0 },
                second: Origin::Board { index: 2 },
            }
        );
        assert_eq!(
            err.to_string(),
            "duplicate card K♦: appears in board[2] and player 0 hole"
        );
    }

    #[test]
    fn first_collision_wins_the_report() {
        let holes = vec![cards("As Kd"), cards("As Qh"), cards("Kd Jh")];
        let err = validate_unique(&holes, &[]).unwrap_err();
        assert!(matches!(
            err,
            Error::DuplicateCard {
                second: Origin::Hole { player: 1 },
                ..
            }
        ));
    }

    #[test]
    fn empty_table_refused() {
        assert_eq!(determine_winners(&[], &[]), Err(Error::NoPlayers));
    }

    #[test]
    fn short_hole_hand_names_the_player() {
        let holes = vec![cards("As Kd"), cards("Qh")];
        assert_eq!(
            determine_winners(&holes, &cards("2c 3c 4c 5d 6d")),
            Err(Error::TooFewHoleCards { player: 1 })
        );
    }
}
