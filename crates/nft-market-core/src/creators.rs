//! Top creator ranking
//!
//! Always computed from the snapshot so an active search never changes the
//! leaderboard.

use std::collections::HashMap;

use crate::model::Nft;

#[derive(Debug, Clone, PartialEq)]
pub struct CreatorAggregate {
    pub seller: String,
    /// Sum of listing prices for this seller
    pub sum: f64,
    /// 1-based position on the leaderboard
    pub rank: usize,
}

/// Group listings by seller, total their prices, and rank by total descending.
/// Sellers with equal totals keep the order in which they first appear.
pub fn top_creators(snapshot: &[Nft]) -> Vec<CreatorAggregate> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut totals: Vec<(&str, f64)> = Vec::new();

    for nft in snapshot {
        match index.get(nft.seller.as_str()) {
            Some(&i) => totals[i].1 += nft.price,
            None => {
                index.insert(nft.seller.as_str(), totals.len());
                totals.push((nft.seller.as_str(), nft.price));
            }
        }
    }

    totals.sort_by(|a, b| b.1.total_cmp(&a.1));

    totals
        .into_iter()
        .enumerate()
        .map(|(i, (seller, sum))| CreatorAggregate {
            seller: seller.to_string(),
            sum,
            rank: i + 1,
        })
        .collect()
}

/// Shorten a wallet address to `0x123...abcd`
pub fn shorten_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 9 {
        return address.to_string();
    }
    let head: String = chars[..5].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Map a rank onto one of `slots` avatar images (1-based), wrapping around
/// when the leaderboard is longer than the image set.
pub fn creator_image_slot(rank: usize, slots: usize) -> usize {
    let slots = slots.max(1);
    (rank.saturating_sub(1) % slots) + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::nft;

    #[test]
    fn test_groups_and_ranks_by_sum() {
        let snapshot = vec![
            nft(1, 1.0, "0xa", "One"),
            nft(2, 5.0, "0xb", "Two"),
            nft(3, 2.5, "0xa", "Three"),
            nft(4, 0.5, "0xc", "Four"),
        ];
        let ranked = top_creators(&snapshot);
        assert_eq!(
            ranked,
            vec![
                CreatorAggregate { seller: "0xb".into(), sum: 5.0, rank: 1 },
                CreatorAggregate { seller: "0xa".into(), sum: 3.5, rank: 2 },
                CreatorAggregate { seller: "0xc".into(), sum: 0.5, rank: 3 },
            ]
        );
    }

    #[test]
    fn test_ties_keep_first_appearance() {
        let snapshot = vec![nft(1, 2.0, "0xz", "A"), nft(2, 2.0, "0xy", "B")];
        let sellers: Vec<String> = top_creators(&snapshot).into_iter().map(|c| c.seller).collect();
        assert_eq!(sellers, vec!["0xz", "0xy"]);
    }

    #[test]
    fn test_empty_snapshot() {
        assert!(top_creators(&[]).is_empty());
    }

    #[test]
    fn test_shorten_address() {
        assert_eq!(shorten_address("0x1234567890abcdef"), "0x123...cdef");
        assert_eq!(shorten_address("0xabc"), "0xabc");
    }

    #[test]
    fn test_image_slot_wraps() {
        assert_eq!(creator_image_slot(1, 10), 1);
        assert_eq!(creator_image_slot(10, 10), 10);
        assert_eq!(creator_image_slot(11, 10), 1);
        assert_eq!(creator_image_slot(3, 0), 1);
    }
}
