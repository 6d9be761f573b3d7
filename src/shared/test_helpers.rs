use chrono::{NaiveDate, NaiveDateTime};

use crate::features::listings::{Listing, PricingTier};

/// Listing with only an id, as served in the NOTOP collection
pub fn plain_listing(id: &str) -> Listing {
    Listing {
        id: id.to_string(),
        name: None,
        phone: None,
        email: None,
        nationality: None,
        country: None,
        department: None,
        city: None,
        locality: None,
        title: Some(format!("Listing {}", id)),
        description: None,
        images: Vec::new(),
        videos: Vec::new(),
        status: None,
        rejection_reason: None,
        pricing: None,
        selected_time: None,
        transaction_date: None,
        transaction_time: None,
        transaction_id: None,
        is_top: false,
        extra: serde_json::Map::new(),
    }
}

/// Paid listing with raw placement fields as the backend stores them
pub fn top_listing(
    id: &str,
    transaction_date: &str,
    transaction_time: &str,
    selected_time: &str,
    days: &str,
    hours: &str,
) -> Listing {
    Listing {
        pricing: Some(PricingTier {
            days: Some(days.to_string()),
            hours: Some(hours.to_string()),
            price: None,
        }),
        selected_time: Some(selected_time.to_string()),
        transaction_date: Some(transaction_date.to_string()),
        transaction_time: Some(transaction_time.to_string()),
        transaction_id: Some(format!("tx-{}", id)),
        is_top: true,
        ..plain_listing(id)
    }
}

/// Marketplace-local instant in October 2026
pub fn local_time(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}
