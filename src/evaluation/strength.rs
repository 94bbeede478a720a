use super::ranking::Ranking;
use crate::cards::rank::Rank;

/// A fully-evaluated row strength for comparison.
///
/// Combines a [`Ranking`] (hand category) with a numeric tie-break that
/// orders rows within the category. Ordering is lexicographic: ranking
/// first, then tie-break. Two strengths compare equal exactly when the
/// rows they came from push against each other.
#[derive(
    Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct Strength {
    ranking: Ranking,
    tiebreak: u32,
}

impl Strength {
    /// The hand category.
    pub fn ranking(&self) -> Ranking {
        self.ranking
    }
    /// The within-category tie-break value.
    pub fn tiebreak(&self) -> u32 {
        self.tiebreak
    }
    /// Human-readable category label.
    pub fn label(&self) -> &'static str {
        self.ranking.name()
    }
}

impl From<(Ranking, u32)> for Strength {
    fn from((ranking, tiebreak): (Ranking, u32)) -> Self {
        Self { ranking, tiebreak }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<16}", self.ranking)
    }
}

/// Packs ranks into base-13 digits, most significant first, over 1-based
/// rank values (deuce = 1 .. ace = 13). Strictly monotonic in the
/// lexicographic order of its input, which is the only property the
/// tie-break contract requires; the 1-based values keep the arithmetic
/// identical to the reference evaluator's encodings.
pub(crate) fn digits(ranks: &[Rank]) -> u32 {
    ranks
        .iter()
        .fold(0, |acc, r| acc * 13 + u8::from(*r) as u32 + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_dominates_tiebreak() {
        let pair = Strength::from((Ranking::OnePair, u32::MAX));
        let trips = Strength::from((Ranking::ThreeOAK, 0));
        assert!(trips > pair);
    }

    #[test]
    fn tiebreak_breaks_equal_categories() {
        let low = Strength::from((Ranking::Flush, 100));
        let high = Strength::from((Ranking::Flush, 101));
        assert!(high > low);
        assert!(low == Strength::from((Ranking::Flush, 100)));
    }

    #[test]
    fn digits_are_lexicographic() {
        assert_eq!(digits(&[Rank::Four, Rank::Two]), 13 * 3 + 1);
        assert!(digits(&[Rank::Ace, Rank::Two]) > digits(&[Rank::King, Rank::Ace]));
        assert!(digits(&[Rank::Ace, Rank::King, Rank::Two]) > digits(&[Rank::Ace, Rank::Queen, Rank::Ace]));
    }
}
