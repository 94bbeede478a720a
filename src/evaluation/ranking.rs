/// A hand category, weakest to strongest.
///
/// Discriminants match the category indices of the standard five card
/// lookup evaluators (1 = high card .. 9 = straight flush). Three card
/// front rows only ever produce 1, 2, or 4; keeping the five card numbering
/// means categories stay comparable across row sizes, so a middle straight
/// still outranks a front three of a kind.
#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    serde::Serialize,
    serde::Deserialize,
)]
pub enum Ranking {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOAK = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOAK = 8,
    StraightFlush = 9,
}

impl Ranking {
    /// Display label, spelled the way the lookup evaluators spell it.
    pub const fn name(&self) -> &'static str {
        match self {
            Ranking::HighCard => "high card",
            Ranking::OnePair => "one pair",
            Ranking::TwoPair => "two pair",
            Ranking::ThreeOAK => "three of a kind",
            Ranking::Straight => "straight",
            Ranking::Flush => "flush",
            Ranking::FullHouse => "full house",
            Ranking::FourOAK => "four of a kind",
            Ranking::StraightFlush => "straight flush",
        }
    }
}

/// u8 injection
impl From<Ranking> for u8 {
    fn from(r: Ranking) -> u8 {
        r as u8
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_order_weakest_to_strongest() {
        assert!(Ranking::HighCard < Ranking::OnePair);
        assert!(Ranking::OnePair < Ranking::TwoPair);
        assert!(Ranking::TwoPair < Ranking::ThreeOAK);
        assert!(Ranking::ThreeOAK < Ranking::Straight);
        assert!(Ranking::Straight < Ranking::Flush);
        assert!(Ranking::Flush < Ranking::FullHouse);
        assert!(Ranking::FullHouse < Ranking::FourOAK);
        assert!(Ranking::FourOAK < Ranking::StraightFlush);
    }

    #[test]
    fn indices_match_lookup_categories() {
        assert_eq!(u8::from(Ranking::HighCard), 1);
        assert_eq!(u8::from(Ranking::ThreeOAK), 4);
        assert_eq!(u8::from(Ranking::StraightFlush), 9);
    }
}
