pub mod error;
pub mod feature_flags;

pub mod title_search;
pub mod validation;
pub mod watchlist;

pub use error::*;
pub use feature_flags::*;
pub use title_search::*;
pub use watchlist::*;
