//! Identifier and clock helpers.
//!
//! Ids are 9 random base-36 characters. Uniqueness is probabilistic, which is
//! fine at single-user scale; nothing here is collision-proof.

use chrono::{DateTime, Utc};
use rand::Rng;

const ID_LEN: usize = 9;
const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generates a short random base-36 id.
pub fn gen_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Today's date (UTC) as `YYYY-MM-DD`.
pub fn today() -> String {
    date_of(Utc::now())
}

/// Current instant as an RFC 3339 timestamp.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339()
}

pub fn date_of(instant: DateTime<Utc>) -> String {
    instant.date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashSet;

    #[test]
    fn test_gen_id_is_base36() {
        let id = gen_id();
        assert_eq!(id.len(), ID_LEN);
        assert!(id
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_gen_id_rarely_repeats() {
        let ids: HashSet<String> = (0..1000).map(|_| gen_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_date_of_formats_iso_date() {
        let instant = Utc.with_ymd_and_hms(2026, 3, 7, 23, 59, 0).unwrap();
        assert_eq!(date_of(instant), "2026-03-07");
    }
}
