// src/modules/store/ids.rs

use rand::Rng;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
const ID_LEN: usize = 13;

/// Short pseudo-random record id for the local persisted store. Collision
/// probability is deliberately ignored: the store is single-user.
pub fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LEN)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_id_shape() {
        let id = generate_id();
        assert_eq!(id.len(), 13);
        assert!(id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(generate_id(), generate_id());
    }
}
