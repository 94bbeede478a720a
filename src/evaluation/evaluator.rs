use std::sync::LazyLock;

use super::ranking::Ranking;
use super::strength::Strength;
use super::strength::digits;
use crate::cards::hand::Hand;
use crate::cards::rank::Rank;
use crate::cards::suit::Suit;
use crate::error::Error;

const WHEEL: u16 = 0b_1000000001111;

/// Straight high ranks for every 13-bit rank mask.
///
/// Built once, read-only afterwards, shared by any number of concurrent
/// evaluations. The wheel (A2345) maps to Five. `LazyLock` guarantees the
/// build runs exactly once even under concurrent first use.
static STRAIGHTS: LazyLock<[Option<Rank>; 8192]> = LazyLock::new(|| {
    let mut table = [None; 8192];
    for mask in 0..8192u16 {
        let mut bits = mask;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        bits &= bits << 1;
        if bits > 0 {
            table[mask as usize] = Some(Rank::from(bits));
        } else if mask & WHEEL == WHEEL {
            table[mask as usize] = Some(Rank::Five);
        }
    }
    table
});

/// Five card evaluation as an injectable capability.
///
/// The scoring engine is generic over this seam, so the bundled
/// [`Evaluator`] can be swapped for a stub when testing foul and
/// settlement logic in isolation.
pub trait Evaluate {
    /// Evaluates exactly five cards into a comparable [`Strength`].
    fn evaluate(&self, hand: Hand) -> Result<Strength, Error>;
}

/// The bundled five card evaluator.
///
/// Classification walks categories from strongest to weakest over the
/// hand's bitstring: per-suit masks answer flush questions, the straights
/// table answers straight questions, and per-rank nibble popcounts answer
/// n-of-a-kind questions. Tie-breaks are base-13 digit strings, so
/// ordering within a category is lexicographic over (principal ranks,
/// kickers descending).
#[derive(Debug, Default, Clone, Copy)]
pub struct Evaluator;

impl Evaluator {
    /// Forces the straights table to build now.
    ///
    /// Evaluation works without this; call it when startup should pay the
    /// one-time cost instead of the first evaluation.
    pub fn init() {
        LazyLock::force(&STRAIGHTS);
    }
}

impl Evaluate for Evaluator {
    fn evaluate(&self, hand: Hand) -> Result<Strength, Error> {
        None.or_else(|| self.straight_flush(hand))
            .or_else(|| self.four_oak(hand))
            .or_else(|| self.full_house(hand))
            .or_else(|| self.flush(hand))
            .or_else(|| self.straight(hand))
            .or_else(|| self.three_oak(hand))
            .or_else(|| self.two_pair(hand))
            .or_else(|| self.one_pair(hand))
            .or_else(|| self.high_card(hand))
            .ok_or(Error::InvalidHand)
    }
}

impl Evaluator {
    fn straight_flush(&self, hand: Hand) -> Option<Strength> {
        self.suited(hand)
            .and_then(|suit| self.straight_high(hand.of(&suit)))
            .map(|high| Strength::from((Ranking::StraightFlush, digits(&[high]))))
    }
    fn four_oak(&self, hand: Hand) -> Option<Strength> {
        self.n_oak(hand, 4, None).map(|quads| {
            let kickers = self.descending(hand, &[quads]);
            Strength::from((Ranking::FourOAK, digits(&[quads, kickers[0]])))
        })
    }
    fn full_house(&self, hand: Hand) -> Option<Strength> {
        self.n_oak(hand, 3, None).and_then(|trips| {
            self.n_oak(hand, 2, Some(trips))
                .map(|pair| Strength::from((Ranking::FullHouse, digits(&[trips, pair]))))
        })
    }
    fn flush(&self, hand: Hand) -> Option<Strength> {
        self.suited(hand)
            .map(|_| Strength::from((Ranking::Flush, digits(&self.descending(hand, &[])))))
    }
    fn straight(&self, hand: Hand) -> Option<Strength> {
        self.straight_high(hand)
            .map(|high| Strength::from((Ranking::Straight, digits(&[high]))))
    }
    fn three_oak(&self, hand: Hand) -> Option<Strength> {
        self.n_oak(hand, 3, None).map(|trips| {
            let kickers = self.descending(hand, &[trips]);
            Strength::from((Ranking::ThreeOAK, digits(&[trips, kickers[0], kickers[1]])))
        })
    }
    fn two_pair(&self, hand: Hand) -> Option<Strength> {
        self.n_oak(hand, 2, None).and_then(|hi| {
            self.n_oak(hand, 2, Some(hi)).map(|lo| {
                let kickers = self.descending(hand, &[hi, lo]);
                Strength::from((Ranking::TwoPair, digits(&[hi, lo, kickers[0]])))
            })
        })
    }
    fn one_pair(&self, hand: Hand) -> Option<Strength> {
        self.n_oak(hand, 2, None).map(|pair| {
            let kickers = self.descending(hand, &[pair]);
            Strength::from((
                Ranking::OnePair,
                digits(&[pair, kickers[0], kickers[1], kickers[2]]),
            ))
        })
    }
    fn high_card(&self, hand: Hand) -> Option<Strength> {
        match hand.size() {
            0 => None,
            _ => Some(Strength::from((
                Ranking::HighCard,
                digits(&self.descending(hand, &[])),
            ))),
        }
    }

    fn suited(&self, hand: Hand) -> Option<Suit> {
        Suit::all().into_iter().find(|s| hand.of(s).size() >= 5)
    }
    fn straight_high(&self, hand: Hand) -> Option<Rank> {
        STRAIGHTS[u16::from(hand) as usize]
    }
    fn n_oak(&self, hand: Hand, n: usize, skip: Option<Rank>) -> Option<Rank> {
        let mut high = u64::from(Rank::Ace) << 4;
        while high > 0 {
            high >>= 4;
            if let Some(skip) = skip {
                if u64::from(skip) & high != 0 {
                    continue;
                }
            }
            if (u64::from(hand) & high).count_ones() >= n as u32 {
                return Some(Rank::lo(high));
            }
        }
        None
    }
    /// Ranks present in the hand, highest first, with the principal ranks
    /// filtered out. What remains are the kickers.
    fn descending(&self, hand: Hand, skip: &[Rank]) -> Vec<Rank> {
        let mut ranks = hand
            .into_iter()
            .map(|c| c.rank())
            .filter(|r| !skip.contains(r))
            .collect::<Vec<_>>();
        ranks.reverse();
        ranks
    }
}
