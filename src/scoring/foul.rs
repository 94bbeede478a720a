use std::cmp::Ordering;

use super::rows::Scorer;
use super::rows::sorted;
use crate::cards::card::Card;
use crate::cards::rank::Rank;
use crate::error::Error;
use crate::evaluation::evaluator::Evaluate;
use crate::evaluation::ranking::Ranking;

impl<E: Evaluate> Scorer<E> {
    /// Decides whether a board fouls.
    ///
    /// A legal board is ordered back >= middle >= front, where back must
    /// beat middle strictly (even a tie fouls) and middle must be at least
    /// as strong as front. When middle and front share a category the
    /// verdict falls to category-specific comparisons over the raw ranks,
    /// since a five card tie-break value and a three card one do not share
    /// an encoding.
    pub fn is_foul(
        &self,
        back: &[Card],
        middle: &[Card],
        front: &[Card],
    ) -> Result<bool, Error> {
        let b = self.eval_back(back)?;
        let m = self.eval_middle(middle)?;
        let f = self.eval_front(front)?;
        if b.ranking() < m.ranking() {
            return Ok(true);
        }
        if b.ranking() == m.ranking() && b.tiebreak() <= m.tiebreak() {
            return Ok(true);
        }
        if m.ranking() < f.ranking() {
            return Ok(true);
        }
        if m.ranking() > f.ranking() {
            return Ok(false);
        }
        let mids = sorted(middle);
        let fronts = sorted(front);
        let foul = match m.ranking() {
            Ranking::HighCard => Self::high_cards(&mids, &fronts),
            Ranking::OnePair => Self::pairs(&mids, &fronts)?,
            Ranking::ThreeOAK => Self::trips(&mids, &fronts)?,
            _ => return Err(Error::ImpossibleState),
        };
        log::trace!("middle/front {} tie-break: foul = {}", m.ranking(), foul);
        Ok(foul)
    }

    /// Middle's top three ranks against front's three, highest first.
    /// First difference decides; a full tie is not a foul, since middle
    /// still holds two extra cards.
    fn high_cards(mids: &[Rank], fronts: &[Rank]) -> bool {
        for (m, f) in mids.iter().rev().zip(fronts.iter().rev()) {
            if m < f {
                return true;
            }
            if m > f {
                return false;
            }
        }
        false
    }

    /// Pair ranks decide; equal pairs fall to middle's best kicker
    /// against front's kicker.
    fn pairs(mids: &[Rank], fronts: &[Rank]) -> Result<bool, Error> {
        let mid = Self::paired(mids).ok_or(Error::ImpossibleState)?;
        let front = Self::paired(fronts).ok_or(Error::ImpossibleState)?;
        if mid != front {
            return Ok(mid < front);
        }
        let kicker = |ranks: &[Rank], pair: Rank| ranks.iter().rev().find(|&&r| r != pair).copied();
        match (kicker(mids, mid), kicker(fronts, front)) {
            (Some(m), Some(f)) => Ok(m < f),
            _ => Err(Error::ImpossibleState),
        }
    }

    /// Triple ranks compare directly. Equal triples cannot happen with a
    /// single deck; that is an upstream invariant violation, not a verdict.
    fn trips(mids: &[Rank], fronts: &[Rank]) -> Result<bool, Error> {
        let mid = mids[2]; // the middle of five sorted cards always sits in the triple
        let front = fronts[0];
        match mid.cmp(&front) {
            Ordering::Less => Ok(true),
            Ordering::Greater => Ok(false),
            Ordering::Equal => Err(Error::ImpossibleState),
        }
    }

    /// The repeated rank of a sorted row, if any.
    fn paired(ranks: &[Rank]) -> Option<Rank> {
        ranks.windows(2).find(|w| w[0] == w[1]).map(|w| w[0])
    }
}
