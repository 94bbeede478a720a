/// Contract violations raised by the scoring core.
///
/// Every variant is a caller error, raised synchronously at the point of
/// detection and propagated unchanged. Nothing here is transient; there is
/// no recovery or retry path.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input does not have the shape of a board (three rows).
    #[error("malformed board: {0}")]
    MalformedInput(String),
    /// A token that does not decode to a card.
    #[error("unknown card: {0}")]
    UnknownCard(String),
    /// A row whose size does not match its slot.
    #[error("row must have {expected} cards, found {found}")]
    WrongCardCount {
        /// Cards required by the slot (5 back/middle, 3 front).
        expected: usize,
        /// Cards actually supplied.
        found: usize,
    },
    /// The five card evaluator recognized no category.
    #[error("unrecognized five card hand")]
    InvalidHand,
    /// A tie that cannot occur with a single deck, e.g. two rows holding
    /// three of a kind of the same rank.
    #[error("impossible tie between rows")]
    ImpossibleState,
}
