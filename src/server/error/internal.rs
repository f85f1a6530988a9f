use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored dice holds a face count outside the supported dice types.
    ///
    /// Only reachable when the database was written by something other than
    /// this application. Results in a 500 Internal Server Error with a generic
    /// message returned to client.
    #[error("Dice {id} has unsupported stored type {value}")]
    InvalidDiceType {
        /// Identifier of the dice record
        id: i32,
        /// The stored face count
        value: i32,
    },
}
