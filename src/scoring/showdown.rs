use std::cmp::Ordering;

use super::board::Board;
use super::rows::Scorer;
use crate::Score;
use crate::cards::card::Card;
use crate::error::Error;
use crate::evaluation::evaluator::Evaluate;

/// Points for sweeping all three rows: one per row plus the scoop bonus.
const SWEEP: Score = 6;
/// Bonus for winning all three rows.
const SCOOP: Score = 3;

impl<E: Evaluate> Scorer<E> {
    /// Settles two back rows: +1, 0, or -1 from the first row's side.
    pub fn settle_back(&self, a: &[Card], b: &[Card]) -> Result<Score, Error> {
        Ok(Self::points(self.eval_back(a)?.cmp(&self.eval_back(b)?)))
    }

    /// Settles two middle rows: +1, 0, or -1 from the first row's side.
    pub fn settle_mid(&self, a: &[Card], b: &[Card]) -> Result<Score, Error> {
        Ok(Self::points(self.eval_middle(a)?.cmp(&self.eval_middle(b)?)))
    }

    /// Settles two front rows: +1, 0, or -1 from the first row's side.
    /// Pair ties fall to the kicker; equal pair and kicker pushes.
    pub fn settle_front(&self, a: &[Card], b: &[Card]) -> Result<Score, Error> {
        Ok(Self::points(self.eval_front(a)?.cmp(&self.eval_front(b)?)))
    }

    /// Settles a full match from the first board's perspective.
    ///
    /// A fouled board loses every row to a clean opponent, scoop bonus
    /// included; two fouled boards push. Between clean boards each row is
    /// settled independently, and sweeping all three earns the scoop
    /// bonus on top.
    pub fn settle(&self, a: &Board, b: &Board) -> Result<Score, Error> {
        let fouls = (
            self.is_foul(&a.back, &a.middle, &a.front)?,
            self.is_foul(&b.back, &b.middle, &b.front)?,
        );
        let score = match fouls {
            (true, true) => 0,
            (true, false) => -SWEEP,
            (false, true) => SWEEP,
            (false, false) => {
                let rows = self.settle_back(&a.back, &b.back)?
                    + self.settle_mid(&a.middle, &b.middle)?
                    + self.settle_front(&a.front, &b.front)?;
                if rows == SCOOP {
                    SWEEP
                } else if rows == -SCOOP {
                    -SWEEP
                } else {
                    rows
                }
            }
        };
        log::debug!("settled [{}] vs [{}] fouls {:?} -> {:+}", a, b, fouls, score);
        Ok(score)
    }

    fn points(order: Ordering) -> Score {
        match order {
            Ordering::Greater => 1,
            Ordering::Equal => 0,
            Ordering::Less => -1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    fn row(s: &str) -> Vec<Card> {
        Card::parse(s).unwrap()
    }

    fn board(s: &str) -> Board {
        Board::try_from(s).unwrap()
    }

    #[test]
    fn back_full_house_beats_trips() {
        let scorer = Scorer::new();
        let boat = row("7s 7d 7h 2d 2c");
        let trips = row("As Ad Ah 2d 4c");
        assert_eq!(scorer.settle_back(&boat, &trips), Ok(1));
        assert_eq!(scorer.settle_back(&trips, &boat), Ok(-1));
    }

    #[test]
    fn back_better_full_house_wins() {
        let scorer = Scorer::new();
        assert_eq!(
            scorer.settle_back(&row("7s 7d 7h 2d 2c"), &row("6d 6c 6h 4d 4c")),
            Ok(1)
        );
    }

    #[test]
    fn mid_settles_like_back() {
        let scorer = Scorer::new();
        let boat = row("7s 7d 7h 2d 2c");
        let trips = row("As Ad Ah 2d 4c");
        assert_eq!(scorer.settle_mid(&boat, &trips), Ok(1));
        assert_eq!(scorer.settle_mid(&trips, &boat), Ok(-1));
    }

    #[test]
    fn front_pushes_same_pair_and_kicker() {
        let scorer = Scorer::new();
        assert_eq!(
            scorer.settle_front(&row("7s 7c Ah"), &row("7h 7d Ac")),
            Ok(0)
        );
    }

    #[test]
    fn front_kicker_decides_equal_pairs() {
        let scorer = Scorer::new();
        assert_eq!(
            scorer.settle_front(&row("7s 7c Ah"), &row("7h 7d Kc")),
            Ok(1)
        );
        assert_eq!(
            scorer.settle_front(&row("7s 7c Kh"), &row("7h 7d Ac")),
            Ok(-1)
        );
    }

    #[test]
    fn two_fouled_boards_push() {
        let fouled = board("4s 4d 7h 9d Jc / 5d 5h Ts 9h Ac / Qh Ah 9c");
        assert_eq!(Scorer::new().settle(&fouled, &fouled.clone()), Ok(0));
    }

    #[test]
    fn clean_board_sweeps_fouled_opponent() {
        let clean = board("4s 5s 6s 7s 8s / 3d 5d Td Jd 4d / Qh Qd Qs");
        let fouled = board("4s 4d 7h 9d Jc / 5d 5h Ts 9h Ac / Qh Ah 9c");
        assert_eq!(Scorer::new().settle(&clean, &fouled), Ok(6));
        assert_eq!(Scorer::new().settle(&fouled, &clean), Ok(-6));
    }

    #[test]
    fn winning_every_row_earns_the_scoop_bonus() {
        let a = board("As Ks Qs Js Ts / 7s 7d 7h 2d 2c / Qd Qh 9c");
        let b = board("9h 8h 7c 6d 5s / Ah Ad Kc 7h 3c / Kd Qc 8s");
        assert_eq!(Scorer::new().settle(&a, &b), Ok(6));
        assert_eq!(Scorer::new().settle(&b, &a), Ok(-6));
    }

    #[test]
    fn split_rows_sum_without_bonus() {
        // a loses back to the full house, wins the middle, pushes the front
        let a = board("As Ad Ah Kc Qs / Ks Kd 9d 3h 8h / Qd Jh 8c");
        let b = board("7s 7d 7h 2d 2c / 5s 5d Ac 7h 3d / Qh Js 8d");
        assert_eq!(Scorer::new().settle(&a, &b), Ok(0));

        // same boards, but now a also takes the front by one kicker
        let b = board("7s 7d 7h 2d 2c / 5s 5d Ac 7h 3d / Qh Js 7c");
        assert_eq!(Scorer::new().settle(&a, &b), Ok(1));
        assert_eq!(Scorer::new().settle(&b, &a), Ok(-1));
    }

    #[test]
    fn settlement_is_antisymmetric() {
        let scorer = Scorer::new();
        for _ in 0..128 {
            let a = Board::random();
            let b = Board::random();
            let ab = scorer.settle(&a, &b).unwrap();
            let ba = scorer.settle(&b, &a).unwrap();
            assert_eq!(ab, -ba);
            assert!([-6, -3, -2, -1, 0, 1, 2, 3, 6].contains(&ab));
        }
    }

    #[test]
    fn settling_against_yourself_pushes() {
        let scorer = Scorer::new();
        for _ in 0..128 {
            let x = Board::random();
            assert_eq!(scorer.settle(&x, &x.clone()), Ok(0));
        }
    }
}
