//! Caesar and Vigenère substitution ciphers over the lowercase ASCII alphabet.
//!
//! Both ciphers lowercase their input first. Characters outside `a-z`
//! (spaces, digits, punctuation, non-ASCII letters) pass through unchanged.

use crate::error::{DrillError, Result};
use crate::types::CipherDirection;

const ALPHABET_LEN: i32 = 26;

/// Shift one lowercase ASCII letter by `offset` positions, wrapping around.
fn shift_letter(letter: char, offset: i32) -> char {
    let index = letter as i32 - 'a' as i32;
    let shifted = (index + offset).rem_euclid(ALPHABET_LEN);
    // rem_euclid keeps the value in 0..26
    char::from(b'a' + shifted as u8)
}

/// Encrypt a message by shifting every letter by the same offset.
///
/// Negative offsets shift backwards, so `caesar(&caesar(m, n), -n)` recovers
/// the lowercased message.
pub fn caesar(message: &str, offset: i32) -> String {
    message
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_lowercase() { shift_letter(c, offset) } else { c })
        .collect()
}

/// Normalize a Vigenère key to lowercase letters, rejecting anything else.
fn key_offsets(key: &str) -> Result<Vec<i32>> {
    if key.is_empty() {
        return Err(DrillError::validation("Vigenère key cannot be empty"));
    }
    key.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                Ok(c.to_ascii_lowercase() as i32 - 'a' as i32)
            } else {
                Err(DrillError::validation(format!(
                    "Vigenère key may only contain ASCII letters, found '{}'",
                    c
                )))
            }
        })
        .collect()
}

/// Shift each letter by the alphabet index of the next key letter.
///
/// The key position only advances on letters, so spaces and punctuation do
/// not consume key material.
pub fn vigenere(message: &str, key: &str, direction: CipherDirection) -> Result<String> {
    let offsets = key_offsets(key)?;
    let sign = direction.sign();
    let mut key_index = 0usize;

    let output = message
        .to_lowercase()
        .chars()
        .map(|c| {
            if !c.is_ascii_lowercase() {
                return c;
            }
            let offset = offsets[key_index % offsets.len()];
            key_index += 1;
            shift_letter(c, offset * sign)
        })
        .collect();

    Ok(output)
}

/// Vigenère encryption
pub fn encrypt(message: &str, key: &str) -> Result<String> {
    vigenere(message, key, CipherDirection::Encrypt)
}

/// Vigenère decryption
pub fn decrypt(message: &str, key: &str) -> Result<String> {
    vigenere(message, key, CipherDirection::Decrypt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caesar_shifts_and_wraps() {
        assert_eq!(caesar("Hello World", 3), "khoor zruog");
        assert_eq!(caesar("xyz", 3), "abc");
        assert_eq!(caesar("abc", -1), "zab");
    }

    #[test]
    fn test_caesar_passes_non_letters_through() {
        assert_eq!(caesar("a-b, c!", 1), "b-c, d!");
        assert_eq!(caesar("2 + 2", 5), "2 + 2");
    }

    #[test]
    fn test_caesar_large_offsets() {
        assert_eq!(caesar("abc", 27), "bcd");
        assert_eq!(caesar("abc", -53), "zab");
    }

    #[test]
    fn test_vigenere_known_values() {
        let encrypted = encrypt("mrttaqrhknsw ih puggrur", "happycoding").unwrap();
        assert_eq!(encrypted, "triiysfksayd iw esiuuce");
        let decrypted = decrypt("mrttaqrhknsw ih puggrur", "happycoding").unwrap();
        assert_eq!(decrypted, "freecodecamp is awesome");
    }

    #[test]
    fn test_vigenere_round_trip_keeps_punctuation() {
        let message = "Attack at dawn, 5 o'clock!";
        let encrypted = encrypt(message, "Lemon").unwrap();
        assert_eq!(decrypt(&encrypted, "lemon").unwrap(), message.to_lowercase());
    }

    #[test]
    fn test_vigenere_rejects_bad_keys() {
        assert!(matches!(encrypt("abc", ""), Err(DrillError::Validation(_))));
        assert!(matches!(encrypt("abc", "k3y"), Err(DrillError::Validation(_))));
    }
}
