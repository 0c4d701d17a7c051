use crate::cards::card::Card;
use crate::cards::deck::Deck;
use crate::cards::street::Street;
use crate::error::Error;
use crate::error::Result;
use rand::Rng;

/// A single hand being dealt street by street: a shuffled deck, the
/// hero's hole cards, and the board so far. One card is burned before
/// each of the flop, turn, and river. The value owns all of its state
/// and is discarded with the hand; nothing persists.
#[derive(Debug, Clone)]
pub struct Table {
    deck: Deck,
    hero: Vec<Card>,
    board: Vec<Card>,
}

impl Table {
    /// Shuffle a fresh deck and deal the hero two hole cards.
    pub fn deal(rng: &mut impl Rng) -> Self {
        let mut deck = Deck::new();
        deck.shuffle(rng);
        let hero = deck.draw_many(2).expect("a fresh deck holds 52 cards");
        log::debug!("dealt new hand: {} {}", hero[0], hero[1]);
        Self {
            deck,
            hero,
            board: Vec::with_capacity(5),
        }
    }

    pub fn hero(&self) -> &[Card] {
        &self.hero
    }
    pub fn board(&self) -> &[Card] {
        &self.board
    }
    pub fn street(&self) -> Street {
        Street::of(self.board.len()).expect("board only grows by whole streets")
    }

    /// Burn one and turn three.
    pub fn flop(&mut self) -> Result<&[Card]> {
        self.reveal(Street::Flop)
    }
    /// Burn one and turn one.
    pub fn turn(&mut self) -> Result<&[Card]> {
        self.reveal(Street::Turn)
    }
    /// Burn one and turn one.
    pub fn river(&mut self) -> Result<&[Card]> {
        self.reveal(Street::River)
    }

    fn reveal(&mut self, attempted: Street) -> Result<&[Card]> {
        let found = self.street();
        if found.next() != Some(attempted) {
            return Err(Error::OutOfTurn { attempted, found });
        }
        self.deck.draw().expect("deck holds enough for every street");
        let dealt = self
            .deck
            .draw_many(attempted.deals())
            .expect("deck holds enough for every street");
        self.board.extend(dealt);
        Ok(&self.board[found.revealed()..])
    }
}
