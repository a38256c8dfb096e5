//! Sort criteria for the listing grid

use crate::model::Nft;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortCriterion {
    /// Newest token first
    #[default]
    RecentlyAdded,
    PriceLowToHigh,
    PriceHighToLow,
    /// Anything the dropdown doesn't know about leaves the order alone
    Unsorted,
}

impl SortCriterion {
    /// Criteria offered in the sort dropdown, in display order
    pub fn selectable() -> &'static [SortCriterion] {
        &[
            SortCriterion::RecentlyAdded,
            SortCriterion::PriceLowToHigh,
            SortCriterion::PriceHighToLow,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortCriterion::RecentlyAdded => "Recently Added",
            SortCriterion::PriceLowToHigh => "Price (low to high)",
            SortCriterion::PriceHighToLow => "Price (high to low)",
            SortCriterion::Unsorted => "Unsorted",
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label {
            "Recently Added" => SortCriterion::RecentlyAdded,
            "Price (low to high)" => SortCriterion::PriceLowToHigh,
            "Price (high to low)" => SortCriterion::PriceHighToLow,
            _ => SortCriterion::Unsorted,
        }
    }
}

/// Return a re-ordered copy of `listings`. Ties keep their input order.
pub fn sort_listings(listings: &[Nft], criterion: SortCriterion) -> Vec<Nft> {
    let mut sorted = listings.to_vec();
    match criterion {
        SortCriterion::PriceLowToHigh => sorted.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortCriterion::PriceHighToLow => sorted.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortCriterion::RecentlyAdded => sorted.sort_by(|a, b| b.token_id.cmp(&a.token_id)),
        SortCriterion::Unsorted => {}
    }
    sorted
}
