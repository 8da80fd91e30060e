//! Item selection ahead of listing and graph building

mod filter;

pub use filter::ItemFilter;
