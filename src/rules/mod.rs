//! Game rules: who leads and when the final round ends.
//!
//! - `leader`: first player holding the top score
//! - `check_winner`: final-round resolution (upset or cycle completion)

pub mod final_round;

pub use final_round::{check_winner, leader, FinalRound};
