//! VSL script editor: a fixed five-step sales letter template with
//! per-project slide content, server-rendered with actix-web and askama.

pub mod audit;
pub mod auth;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod templates_structs;
pub mod vsl;
