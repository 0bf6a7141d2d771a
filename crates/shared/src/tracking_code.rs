//! Customer tracking code generation.

use rand::Rng;

/// Length of a generated tracking code.
pub const TRACKING_CODE_LENGTH: usize = 8;

/// Base-36 alphabet, lowercase.
const CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a random 8-character base-36 tracking code.
///
/// Codes are opaque and carry no information about the booking they belong to.
/// Uniqueness is not guaranteed here; callers check against the store.
pub fn generate_tracking_code() -> String {
    let mut rng = rand::thread_rng();

    (0..TRACKING_CODE_LENGTH)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Returns true if `code` has the shape of a generated tracking code.
pub fn is_valid_tracking_code(code: &str) -> bool {
    code.len() == TRACKING_CODE_LENGTH
        && code
            .bytes()
            .all(|b| b.is_ascii_digit() || b.is_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_tracking_code_length() {
        let code = generate_tracking_code();
        assert_eq!(code.len(), TRACKING_CODE_LENGTH);
    }

    #[test]
    fn test_generate_tracking_code_charset() {
        for _ in 0..50 {
            let code = generate_tracking_code();
            assert!(
                code.chars()
                    .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()),
                "Invalid char in code: {}",
                code
            );
        }
    }

    #[test]
    fn test_generate_tracking_code_uniqueness() {
        let codes: Vec<String> = (0..100).map(|_| generate_tracking_code()).collect();
        let unique_codes: std::collections::HashSet<_> = codes.iter().collect();
        // 36^8 possible codes, duplicates in 100 draws are vanishingly rare
        assert!(unique_codes.len() >= 99);
    }

    #[test]
    fn test_is_valid_tracking_code() {
        assert!(is_valid_tracking_code("a1b2c3d4"));
        assert!(is_valid_tracking_code(&generate_tracking_code()));
        assert!(!is_valid_tracking_code("A1B2C3D4"));
        assert!(!is_valid_tracking_code("short"));
        assert!(!is_valid_tracking_code("toolong123"));
        assert!(!is_valid_tracking_code("ab-cd-ef"));
    }
}
