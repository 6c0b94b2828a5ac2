#![deny(unsafe_code)]

pub mod extract;
pub mod filter;
pub mod normalize;
pub mod outfits;
pub mod pick;
pub mod picker;
pub mod resolve;

pub use extract::extract_record;
pub use filter::filter_rows;
pub use normalize::{CIVITAI_URN_PREFIX, normalize_identifier, normalize_identifier_with_prefix};
pub use outfits::{collect_outfit_pool, sample_outfits};
pub use pick::pick_row;
pub use picker::Picker;
pub use resolve::resolve_column;
