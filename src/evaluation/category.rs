use serde::Deserialize;
use serde::Serialize;

/// The nine hand categories in ranking order. The u8 value is the
/// category's strength.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    Trips = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    Quads = 7,
    StraightFlush = 8,
}

impl From<Category> for u8 {
    fn from(c: Category) -> u8 {
        c as u8
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Category::HighCard => write!(f, "High card"),
            Category::OnePair => write!(f, "One pair"),
            Category::TwoPair => write!(f, "Two pair"),
            Category::Trips => write!(f, "Three of a kind"),
            Category::Straight => write!(f, "Straight"),
            Category::Flush => write!(f, "Flush"),
            Category::FullHouse => write!(f, "Full house"),
            Category::Quads => write!(f, "Four of a kind"),
            Category::StraightFlush => write!(f, "Straight flush"),
        }
    }
}
