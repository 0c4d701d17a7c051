use super::card::Card;
use super::rank::Rank;
use super::set::CardSet;
use super::suit::Suit;
use crate::error::Error;
use crate::error::Result;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Deserialize;
use serde::Serialize;

/// An ordered, mutable draw pile. Draws remove from the back of the
/// sequence; the size only decreases until the deck is rebuilt. The
/// shuffle RNG is caller-owned so simulations stay seedable and workers
/// never share a generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck(Vec<Card>);

impl Deck {
    /// The full 52-card set in deterministic suit-major generation order
    /// (clubs 2..A, then diamonds, hearts, spades). Not shuffled.
    pub fn new() -> Self {
        Self(
            Suit::all()
                .iter()
                .flat_map(|suit| Rank::all().map(|rank| Card::new(rank, *suit)))
                .collect(),
        )
    }

    /// The full deck minus every card in `known`. Used to build the
    /// remaining deck for a simulation trial.
    pub fn without(known: CardSet) -> Self {
        Self(
            Self::new()
                .0
                .into_iter()
                .filter(|card| !known.contains(*card))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Uniformly random permutation of the remaining cards.
    pub fn shuffle(&mut self, rng: &mut impl Rng) {
        self.0.shuffle(rng);
    }

    /// Remove and return the card at the back.
    pub fn draw(&mut self) -> Result<Card> {
        self.0.pop().ok_or(Error::DeckExhausted)
    }

    /// Remove and return `n` cards atomically, in the same per-card order
    /// as repeated draw().
    pub fn draw_many(&mut self, n: usize) -> Result<Vec<Card>> {
        if n > self.0.len() {
            return Err(Error::InsufficientCards {
                requested: n,
                remaining: self.0.len(),
            });
        }
        Ok((0..n).map(|_| self.0.pop().expect("length checked")).collect())
    }

    /// The last `n` cards without removing them. Lenient read: when `n`
    /// exceeds the deck size, every remaining card is returned.
    pub fn peek(&self, n: usize) -> Vec<Card> {
        self.0[self.0.len().saturating_sub(n)..].to_vec()
    }

    /// Defensive snapshot copy of the remaining cards.
    pub fn remaining(&self) -> Vec<Card> {
        self.0.clone()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// a reduced deck from caller-supplied cards; uniqueness is the caller's
/// contract, the deck itself performs no check
impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Deck({} cards)", self.0.len())
    }
}
