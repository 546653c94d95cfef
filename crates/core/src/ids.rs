//! Generated string identifiers for users and submissions.
//!
//! The random source is supplied by the caller so tests can use a seeded
//! generator. Collision handling (regenerate and retry against the unique
//! index) lives in the repositories, not here.

use rand::Rng;

/// Length of the random token in a submission id (`SUB` + 8 letters).
pub const SUBMISSION_TOKEN_LEN: usize = 8;

/// Number of digits in a user id (`USER` + 4 digits).
pub const USER_ID_DIGITS: usize = 4;

/// Generate a submission id of the form `SUBABCDEFGH`.
pub fn new_submission_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let token: String = (0..SUBMISSION_TOKEN_LEN)
        .map(|_| (rng.random_range(0..26u8) + b'A') as char)
        .collect();
    format!("SUB{token}")
}

/// Generate a user id of the form `USER1234`.
pub fn new_user_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let digits: String = (0..USER_ID_DIGITS)
        .map(|_| (rng.random_range(0..10u8) + b'0') as char)
        .collect();
    format!("USER{digits}")
}
