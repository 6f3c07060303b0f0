use std::fmt;
use std::str::FromStr;

use bigdecimal::{BigDecimal, Zero};
use itertools::Itertools;

use crate::merkle_sum_tree::TreeError;

/// A single coin position, e.g. `BTC:20.33`. The amount is an
/// arbitrary-precision decimal; validated constructors reject negatives, but
/// the type itself admits them so the combiner's integrity check can catch
/// corrupted data.
#[derive(Clone, Debug, PartialEq)]
pub struct AssetBalance {
    pub coin: String,
    pub amount: BigDecimal,
}

impl AssetBalance {
    pub fn new(coin: &str, amount: BigDecimal) -> Result<Self, TreeError> {
        if coin.is_empty()
            || !coin
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(TreeError::InvalidCoin(coin.to_string()));
        }
        if amount < BigDecimal::zero() {
            return Err(TreeError::NegativeAmount(coin.to_string()));
        }

        Ok(AssetBalance {
            coin: coin.to_string(),
            amount,
        })
    }
}

impl fmt::Display for AssetBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.coin, self.amount)
    }
}

impl FromStr for AssetBalance {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (coin, amount) = s
            .split_once(':')
            .ok_or_else(|| TreeError::MalformedBalance(s.to_string()))?;
        AssetBalance::new(coin.trim(), amount.trim().parse()?)
    }
}

/// Parses a comma-joined `coin:amount` list, e.g. `"BTC:20.33,ETH:10.12"`.
pub fn parse_balances(s: &str) -> Result<Vec<AssetBalance>, TreeError> {
    if s.trim().is_empty() {
        return Ok(vec![]);
    }
    s.split(',').map(|part| part.trim().parse()).collect()
}

/// Groups balances by coin symbol and sums the amounts per group. The result
/// is sorted by coin with exactly one entry per coin, which makes the
/// operation idempotent: combining an already-canonical list returns the
/// same list.
pub fn combine_same_coin(balances: Vec<AssetBalance>) -> Vec<AssetBalance> {
    let mut balances = balances;
    balances.sort_by(|a, b| a.coin.cmp(&b.coin));

    let groups = balances.into_iter().group_by(|asset| asset.coin.clone());

    let mut combined = Vec::new();
    for (coin, group) in &groups {
        let amount = group.fold(BigDecimal::zero(), |acc, asset| acc + asset.amount);
        combined.push(AssetBalance { coin, amount });
    }
    combined
}

/// Vacuously true for an empty list.
pub fn is_all_non_negative(balances: &[AssetBalance]) -> bool {
    balances.iter().all(|asset| asset.amount >= BigDecimal::zero())
}

pub(crate) fn first_negative(balances: &[AssetBalance]) -> Option<&AssetBalance> {
    balances.iter().find(|asset| asset.amount < BigDecimal::zero())
}

/// Renders a balance list as `coin:amount` entries joined by commas, the
/// form used inside every hashed preimage.
pub(crate) fn render_balances(balances: &[AssetBalance]) -> String {
    balances.iter().map(ToString::to_string).join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(coin: &str, amount: &str) -> AssetBalance {
        AssetBalance::new(coin, amount.parse().unwrap()).unwrap()
    }

    #[test]
    fn test_combine_same_coin() {
        let combined = combine_same_coin(vec![
            asset("ETH", "10.12"),
            asset("BTC", "20.33"),
            asset("BTC", "0.2"),
            asset("ETH", "11.3"),
        ]);

        assert_eq!(
            combined,
            vec![asset("BTC", "20.53"), asset("ETH", "21.42")]
        );

        // idempotent on an already-canonical list
        assert_eq!(combine_same_coin(combined.clone()), combined);
        assert_eq!(combine_same_coin(vec![]), vec![]);
    }

    #[test]
    fn test_non_negative_checks() {
        // vacuously true
        assert!(is_all_non_negative(&[]));
        assert!(is_all_non_negative(&[asset("BTC", "0"), asset("ETH", "1.5")]));

        let negative = AssetBalance {
            coin: "BTC".to_string(),
            amount: "-1".parse().unwrap(),
        };
        assert!(!is_all_non_negative(&[asset("ETH", "2"), negative.clone()]));
        assert_eq!(first_negative(&[negative.clone()]), Some(&negative));
    }

    #[test]
    fn test_validated_construction() {
        assert!(AssetBalance::new("BTC", "-0.01".parse().unwrap()).is_err());
        assert!(AssetBalance::new("", "1".parse().unwrap()).is_err());
        assert!(AssetBalance::new("B TC", "1".parse().unwrap()).is_err());
        assert!("BTC".parse::<AssetBalance>().is_err());
        assert!("BTC:abc".parse::<AssetBalance>().is_err());
    }

    #[test]
    fn test_render_preserves_scale() {
        let balances = vec![asset("BTC", "20.33"), asset("ETH", "10.12")];
        assert_eq!(render_balances(&balances), "BTC:20.33,ETH:10.12");
        assert_eq!(render_balances(&[]), "");
    }
}
