/// Represents all errors that can occur during tokenization.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// No token pattern matches at the current position.
    #[error("Invalid character '{character}' at position {position}.")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Zero-based character index in the whitespace-stripped input.
        position:  usize,
    },
}
