use crate::cards::card::Card;
use crate::cards::hand::Hand;
use crate::cards::rank::Rank;
use crate::error::Error;
use crate::evaluation::evaluator::Evaluate;
use crate::evaluation::evaluator::Evaluator;
use crate::evaluation::ranking::Ranking;
use crate::evaluation::strength::Strength;
use crate::evaluation::strength::digits;

/// The scoring engine: row evaluation, foul detection, and settlement.
///
/// Generic over the five card evaluation capability so the delegated
/// evaluator can be swapped out; `Scorer::new()` uses the bundled
/// [`Evaluator`].
#[derive(Debug, Default, Clone, Copy)]
pub struct Scorer<E = Evaluator> {
    evaluator: E,
}

impl Scorer<Evaluator> {
    /// A scorer over the bundled evaluator.
    pub fn new() -> Self {
        Self {
            evaluator: Evaluator,
        }
    }
}

impl<E: Evaluate> Scorer<E> {
    /// Builds a scorer around the given five card evaluator.
    pub fn with(evaluator: E) -> Self {
        Self { evaluator }
    }

    /// Evaluates a five card back row.
    pub fn eval_back(&self, row: &[Card]) -> Result<Strength, Error> {
        self.sized(row, 5)?;
        self.evaluator.evaluate(Hand::from(row))
    }

    /// Evaluates a five card middle row.
    ///
    /// Value-identical to [`Self::eval_back`]: both slots use the same
    /// category table.
    pub fn eval_middle(&self, row: &[Card]) -> Result<Strength, Error> {
        self.eval_back(row)
    }

    /// Evaluates a three card front row.
    ///
    /// Front rows have their own restricted ranking: three of a kind, one
    /// pair, or high card, with arithmetic tie-breaks over the sorted
    /// ranks (pair rank then kicker for pairs; all three ranks, highest
    /// first, for high cards).
    pub fn eval_front(&self, row: &[Card]) -> Result<Strength, Error> {
        self.sized(row, 3)?;
        let ranks = sorted(row);
        let (r0, r1, r2) = (ranks[0], ranks[1], ranks[2]);
        if r0 == r2 {
            Ok(Strength::from((Ranking::ThreeOAK, digits(&[r0]))))
        } else if r0 == r1 {
            Ok(Strength::from((Ranking::OnePair, digits(&[r0, r2]))))
        } else if r1 == r2 {
            Ok(Strength::from((Ranking::OnePair, digits(&[r1, r0]))))
        } else {
            Ok(Strength::from((Ranking::HighCard, digits(&[r2, r1, r0]))))
        }
    }

    fn sized(&self, row: &[Card], expected: usize) -> Result<(), Error> {
        match row.len() {
            found if found == expected => Ok(()),
            found => Err(Error::WrongCardCount { expected, found }),
        }
    }
}

/// Row ranks sorted ascending, the view every tie-break rule is written
/// against.
pub(crate) fn sorted(row: &[Card]) -> Vec<Rank> {
    let mut ranks = row.iter().map(Card::rank).collect::<Vec<_>>();
    ranks.sort();
    ranks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(s: &str) -> Vec<Card> {
        Card::parse(s).unwrap()
    }

    #[test]
    fn middle_matches_back() {
        let scorer = Scorer::new();
        let cards = row("As Ks Qs Js Ts");
        assert_eq!(
            scorer.eval_back(&cards).unwrap(),
            scorer.eval_middle(&cards).unwrap()
        );
    }

    #[test]
    fn back_requires_five_cards() {
        let scorer = Scorer::new();
        assert_eq!(
            scorer.eval_back(&row("As Kh Ac 7d")),
            Err(Error::WrongCardCount {
                expected: 5,
                found: 4
            })
        );
    }

    #[test]
    fn front_requires_three_cards() {
        let scorer = Scorer::new();
        assert_eq!(
            scorer.eval_front(&row("As Kh Ac 7d")),
            Err(Error::WrongCardCount {
                expected: 3,
                found: 4
            })
        );
        assert_eq!(
            scorer.eval_front(&[]),
            Err(Error::WrongCardCount {
                expected: 3,
                found: 0
            })
        );
    }

    #[test]
    fn front_recognizes_three_of_a_kind() {
        let eval = Scorer::new().eval_front(&row("4d 4s 4h")).unwrap();
        assert_eq!(eval.ranking(), Ranking::ThreeOAK);
        assert_eq!(eval.tiebreak(), 3);
        assert_eq!(eval.label(), "three of a kind");
    }

    #[test]
    fn front_recognizes_pair() {
        let eval = Scorer::new().eval_front(&row("4d 4s 2h")).unwrap();
        assert_eq!(eval.ranking(), Ranking::OnePair);
        assert_eq!(eval.tiebreak(), 13 * 3 + 1);
        assert_eq!(eval.label(), "one pair");
    }

    #[test]
    fn front_pair_finds_kicker_on_either_side() {
        let scorer = Scorer::new();
        let low = scorer.eval_front(&row("4d 4s 2h")).unwrap();
        let high = scorer.eval_front(&row("Ad 4s 4h")).unwrap();
        assert_eq!(low.ranking(), high.ranking());
        assert!(high > low);
    }

    #[test]
    fn front_ranks_high_card_with_kickers() {
        let scorer = Scorer::new();
        let akq = scorer.eval_front(&row("As Ks Qs")).unwrap();
        let akj = scorer.eval_front(&row("Ad Kd Jd")).unwrap();
        assert_eq!(akq.ranking(), Ranking::HighCard);
        assert_eq!(akq.ranking(), akj.ranking());
        assert!(akq > akj);
    }

    #[test]
    fn front_trips_order_by_rank() {
        let scorer = Scorer::new();
        let tens = scorer.eval_front(&row("Td Ts Th")).unwrap();
        let queens = scorer.eval_front(&row("Qd Qs Qh")).unwrap();
        assert_eq!(tens.ranking(), queens.ranking());
        assert!(queens.tiebreak() > tens.tiebreak());
    }

    #[test]
    fn front_pair_tiebreak_monotonic_in_kicker() {
        let scorer = Scorer::new();
        let mut last = 0;
        for kicker in ["2h", "3h", "5h", "9h", "Th", "Ah"] {
            let eval = scorer
                .eval_front(&row(&format!("4d 4s {}", kicker)))
                .unwrap();
            assert!(eval.tiebreak() > last);
            last = eval.tiebreak();
        }
    }
}
