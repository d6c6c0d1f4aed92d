//! String-processing drills.
//!
//! - `cipher` — Caesar and Vigenère ciphers
//! - `luhn` — card-number checksum
//! - `case` — camel/Pascal case to snake case
//! - `password` — constrained password generator

pub mod case;
pub mod cipher;
pub mod luhn;
pub mod password;
