//! Request signing for the catalog API
//!
//! Every request carries `ts`, `apikey` and `hash`, where
//! `hash = md5(ts + private_key + public_key)` as lowercase hex.

use md5::{Digest, Md5};

/// Compute the request hash for a timestamp and key pair
pub fn sign(ts: &str, private_key: &str, public_key: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(ts.as_bytes());
    hasher.update(private_key.as_bytes());
    hasher.update(public_key.as_bytes());

    hasher
        .finalize()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

/// Public/private key pair for the catalog API
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub public_key: String,
    pub private_key: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

impl Credentials {
    pub fn new(public_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            private_key: private_key.into(),
        }
    }

    /// Query parameters authenticating a request made at `ts`
    pub fn query_params(&self, ts: &str) -> [(&'static str, String); 3] {
        [
            ("apikey", self.public_key.clone()),
            ("ts", ts.to_string()),
            ("hash", sign(ts, &self.private_key, &self.public_key)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sign_known_vector() {
        // ts=1, private=abcd, public=1234 hashes "1abcd1234"
        assert_eq!(sign("1", "abcd", "1234"), "ffd275c5130566a2916217b101f26150");
    }

    #[test]
    fn test_sign_empty_input() {
        assert_eq!(sign("", "", ""), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn test_query_params() {
        let creds = Credentials::new("1234", "abcd");
        let params = creds.query_params("1");
        assert_eq!(params[0], ("apikey", "1234".to_string()));
        assert_eq!(params[1], ("ts", "1".to_string()));
        assert_eq!(
            params[2],
            ("hash", "ffd275c5130566a2916217b101f26150".to_string())
        );
    }

    #[test]
    fn test_debug_hides_private_key() {
        let creds = Credentials::new("public", "very-secret");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("public"));
        assert!(!debug.contains("very-secret"));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_sign_is_32_lowercase_hex(
            ts in "[0-9]{1,12}",
            private_key in "[a-f0-9]{0,40}",
            public_key in "[a-f0-9]{0,32}"
        ) {
            let hash = sign(&ts, &private_key, &public_key);
            prop_assert_eq!(hash.len(), 32);
            prop_assert!(hash.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        }

        #[test]
        fn prop_sign_depends_on_concatenation_only(
            a in "[a-z]{0,8}",
            b in "[a-z]{0,8}",
            c in "[a-z]{0,8}"
        ) {
            // Hash is over the plain concatenation, so shifting boundaries is invisible
            let joined = format!("{}{}{}", a, b, c);
            prop_assert_eq!(sign(&a, &b, &c), sign(&joined, "", ""));
        }
    }
}
