pub mod client;

pub use client::RestClient;
