use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Heaviest weight (grams, inclusive) still handled as a standard-size parcel.
pub const STANDARD_SIZE_MAX_WEIGHT_GRAMS: Decimal = dec!(12000);

/// Size token for parcels up to [`STANDARD_SIZE_MAX_WEIGHT_GRAMS`].
pub const STANDARD_SIZE_TOKEN: &str = "Standard Size";

/// Size token for parcels above [`STANDARD_SIZE_MAX_WEIGHT_GRAMS`].
pub const HEAVY_BULKY_TOKEN: &str = "Heavy & Bulky";

// "Other Fees" sub-types as written in the rate sheet
pub const PICK_AND_PACK_FEE_TYPE: &str = "Pick & Pack Fee";
pub const STORAGE_FEE_TYPE: &str = "Storage Fee";
pub const REMOVAL_FEE_TYPE: &str = "Removal Fees";

// "Applicable On" descriptors
pub const PICK_AND_PACK_STANDARD: &str = "Standard Size";
pub const PICK_AND_PACK_OVERSIZE: &str = "Oversize/Heavy & Bulky";
pub const STORAGE_ALL_CATEGORIES: &str = "All Categories";

/// Currency symbols stripped from rate-sheet money cells.
pub const CURRENCY_SYMBOLS: &[&str] = &["₹", "Rs.", "Rs", "INR", "$"];
