use rand::RngCore;
use serde::Serialize;

use crate::merkle_sum_tree::asset::{
    combine_same_coin, first_negative, render_balances,
};
use crate::merkle_sum_tree::utils::sha256;
use crate::merkle_sum_tree::{AssetBalance, Node, TreeError};

/// Canonical leaf preimage. Field order matches the alphabetical key order
/// required of the serialized form; serde_json emits compact output with no
/// inter-token whitespace.
#[derive(Serialize)]
struct LeafPreimage<'a> {
    balance: String,
    salt: String,
    user_id: &'a str,
}

/// One user's snapshot entry: identifier, canonical balance list, and a
/// per-record 32-byte salt. Immutable once created; a balance change means a
/// fresh record in a fresh snapshot.
///
/// The salt guards the leaf hash against dictionary attacks on user data and
/// must never be reused across users or rebuilds.
#[derive(Clone, Debug)]
pub struct UserRecord {
    user_id: String,
    balances: Vec<AssetBalance>,
    salt: [u8; 32],
}

impl UserRecord {
    /// Validates and canonicalizes the balance list (coin-wise combination,
    /// sorted by coin) and draws a fresh salt from `rng`. Pass
    /// `rand::rngs::OsRng` in production; tests inject a seeded generator.
    pub fn new(
        user_id: impl Into<String>,
        balances: Vec<AssetBalance>,
        rng: &mut impl RngCore,
    ) -> Result<Self, TreeError> {
        let mut salt = [0u8; 32];
        rng.fill_bytes(&mut salt);
        Self::with_salt(user_id, balances, salt)
    }

    /// Builds a record with an explicit salt. Used by a proof holder
    /// re-verifying against the salt the exchange handed them.
    pub fn with_salt(
        user_id: impl Into<String>,
        balances: Vec<AssetBalance>,
        salt: [u8; 32],
    ) -> Result<Self, TreeError> {
        if let Some(asset) = first_negative(&balances) {
            return Err(TreeError::NegativeAmount(asset.coin.clone()));
        }

        Ok(UserRecord {
            user_id: user_id.into(),
            balances: combine_same_coin(balances),
            salt,
        })
    }

    /// Encodes this record into its committed leaf: SHA-256 over the
    /// canonical preimage, alongside the record's own balance list.
    pub fn compute_leaf(&self) -> Node {
        let preimage = LeafPreimage {
            balance: render_balances(&self.balances),
            salt: hex::encode(self.salt),
            user_id: &self.user_id,
        };
        let bytes =
            serde_json::to_vec(&preimage).expect("leaf preimage serialization is infallible");

        Node {
            hash: sha256(&bytes),
            balances: self.balances.clone(),
        }
    }

    // Getters
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn balances(&self) -> &[AssetBalance] {
        &self.balances
    }

    pub fn salt(&self) -> &[u8; 32] {
        &self.salt
    }
}

#[cfg(test)]
impl UserRecord {
    /// Test-only: injects a corrupted amount past the validated
    /// constructors, so integrity-abort paths can be exercised.
    pub(crate) fn corrupt_amount(&mut self, coin: &str, amount: &str) {
        for asset in &mut self.balances {
            if asset.coin == coin {
                asset.amount = amount.parse().unwrap();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::merkle_sum_tree::asset::parse_balances;

    #[test]
    fn test_leaf_preimage_is_canonical() {
        let record = UserRecord::with_salt(
            "Alice",
            parse_balances("ETH:10.12,BTC:20.33").unwrap(),
            [0xab; 32],
        )
        .unwrap();

        // balances sorted by coin, salt lowercase hex, keys alphabetical
        let expected = format!(
            "{{\"balance\":\"BTC:20.33,ETH:10.12\",\"salt\":\"{}\",\"user_id\":\"Alice\"}}",
            "ab".repeat(32)
        );
        let preimage = LeafPreimage {
            balance: render_balances(record.balances()),
            salt: hex::encode(record.salt()),
            user_id: record.user_id(),
        };
        assert_eq!(serde_json::to_string(&preimage).unwrap(), expected);

        // the committed digest is sha256 over exactly those canonical bytes,
        // so any implementation hashing the same string gets the same leaf
        assert_eq!(record.compute_leaf().hash, sha256(expected.as_bytes()));

        // same logical record, same salt: byte-identical digest
        let again = UserRecord::with_salt(
            "Alice",
            parse_balances("BTC:20.33,ETH:10.12").unwrap(),
            [0xab; 32],
        )
        .unwrap();
        assert_eq!(record.compute_leaf().hash, again.compute_leaf().hash);
    }

    #[test]
    fn test_salt_separates_identical_balances() {
        let mut rng = StdRng::seed_from_u64(7);
        let balances = parse_balances("BTC:1").unwrap();
        let a = UserRecord::new("Carol", balances.clone(), &mut rng).unwrap();
        let b = UserRecord::new("Carol", balances, &mut rng).unwrap();

        assert_ne!(a.salt(), b.salt());
        assert_ne!(a.compute_leaf().hash, b.compute_leaf().hash);
    }

    #[test]
    fn test_rejects_negative_balance() {
        let negative = AssetBalance {
            coin: "BTC".to_string(),
            amount: "-1".parse().unwrap(),
        };
        let mut rng = StdRng::seed_from_u64(0);
        assert!(UserRecord::new("Mallory", vec![negative], &mut rng).is_err());
    }
}
