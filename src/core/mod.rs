pub mod filter;
pub mod loader;
pub mod logic;
pub mod stats;
