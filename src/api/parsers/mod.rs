pub mod filters;

pub use filters::{non_empty, player_filters};
