use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Lowest id the allocator hands out.
pub const PRODUCT_ID_MIN: i32 = 100_000;

/// Highest id the allocator hands out; the range is exhausted once the
/// tracker reaches it.
pub const PRODUCT_ID_MAX: i32 = 999_999;

/// Identity of the singleton tracker row.
pub const TRACKER_ID: i32 = 1;

/// Tracker seed value, one below the allocatable floor.
pub const TRACKER_SEED: i32 = PRODUCT_ID_MIN - 1;

/// Largest stock adjustment accepted per request.
pub const STOCK_ADJUST_MAX: i32 = 100_000;

/// A catalog product.
///
/// `id` is assigned by the allocator and immutable afterwards. `quantity`
/// is the on-hand stock level; decrements are not floored at zero, so the
/// level can legitimately read negative (oversold).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Allocator-assigned identifier in [100000, 999999]
    pub id: i32,
    /// Product name
    pub name: String,
    /// On-hand stock quantity
    pub quantity: i32,
    /// Unit price, two fractional digits
    #[schema(value_type = String, example = "1299.99")]
    pub price: Decimal,
    /// Optional free-text description
    pub description: Option<String>,
}

impl Product {
    /// Build a product from a validated draft and an allocated id.
    pub fn from_draft(id: i32, draft: ProductDraft) -> Self {
        Self {
            id,
            name: draft.name,
            quantity: draft.quantity,
            price: draft.price,
            description: draft.description,
        }
    }
}

/// Request payload for creating or fully updating a product.
///
/// Updates carry the same shape as creates: every mutable field is
/// overwritten, the id never is.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ProductDraft {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(range(min = 1, max = 100_000))]
    pub quantity: i32,
    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = String, example = "1299.99")]
    pub price: Decimal,
    #[validate(length(min = 5, max = 500))]
    pub description: Option<String>,
}

/// Request payload for a stock increment or decrement.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct StockAdjustment {
    /// Number of units to add or remove
    #[validate(range(min = 1, max = 100_000))]
    pub quantity: i32,
}

/// The persisted allocator state: a single row holding the last id issued.
///
/// Seeded once at provisioning time with `last_id = 99999`; only the
/// allocator mutates it, and only upwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdTracker {
    pub id: i32,
    pub last_id: i32,
}

impl IdTracker {
    pub fn seeded() -> Self {
        Self {
            id: TRACKER_ID,
            last_id: TRACKER_SEED,
        }
    }

    /// Whether the id space still has room.
    pub fn has_capacity(&self) -> bool {
        self.last_id < PRODUCT_ID_MAX
    }
}

/// Price must lie in [1, 9999999.99] with at most two fractional digits.
fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    let min = Decimal::ONE;
    let max = Decimal::new(999_999_999, 2);

    if *price < min || *price > max {
        return Err(ValidationError::new("price_out_of_range"));
    }

    if price.round_dp(2) != *price {
        return Err(ValidationError::new("price_scale_too_fine"));
    }

    Ok(())
}
