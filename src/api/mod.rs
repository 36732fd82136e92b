pub mod auth;
pub mod handlers;
pub mod models;
pub mod parsers;
pub mod routes;
pub mod supabase_client;
