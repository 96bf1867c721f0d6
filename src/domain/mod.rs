//! Inventory entry model and the price conversion behind it.

pub mod app_state;
pub mod draft;
pub mod entities;
pub mod pricing;

pub use app_state::AppState;
#[allow(unused_imports)]
pub use draft::{EntryDraft, EntryError, FormField};
#[allow(unused_imports)]
pub use entities::{
    ConversionResult, PackagingRatios, PriceEntry, SoldIn, SubmittedEntry, Unit,
};
#[allow(unused_imports)]
pub use pricing::{convert, format_price, parse_amount, parse_quantity, parse_ratio};
