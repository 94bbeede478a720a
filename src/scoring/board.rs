use crate::Arbitrary;
use crate::cards::card::Card;
use crate::cards::deck::Deck;
use crate::error::Error;

/// A player's complete three row board for one deal.
///
/// Pure value type: built per evaluation call, no identity beyond it.
/// Row sizes are checked when rows are evaluated, not at construction,
/// and the no-duplicate-cards invariant is the caller's contract.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Board {
    /// Five card bottom row, must end up the strongest.
    pub back: Vec<Card>,
    /// Five card middle row.
    pub middle: Vec<Card>,
    /// Three card top row, must end up the weakest.
    pub front: Vec<Card>,
}

impl From<(Vec<Card>, Vec<Card>, Vec<Card>)> for Board {
    fn from((back, middle, front): (Vec<Card>, Vec<Card>, Vec<Card>)) -> Self {
        Self {
            back,
            middle,
            front,
        }
    }
}

/// str isomorphism
/// "Ks Kd 9d 3h 8h / 5s 5d Ac 7h 3d / 3d 3c 8c"
impl TryFrom<&str> for Board {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.split('/').collect::<Vec<_>>().as_slice() {
            [back, middle, front] => Ok(Self::from((
                Card::parse(back)?,
                Card::parse(middle)?,
                Card::parse(front)?,
            ))),
            _ => Err(Error::MalformedInput(s.to_string())),
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let join = |row: &[Card]| {
            row.iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        };
        write!(
            f,
            "{} / {} / {}",
            join(&self.back),
            join(&self.middle),
            join(&self.front)
        )
    }
}

/// deal 5/5/3 from a fresh shuffled deck
impl Arbitrary for Board {
    fn random() -> Self {
        let mut deck = Deck::new();
        Self::from((deck.row(5), deck.row(5), deck.row(3)))
    }
}
