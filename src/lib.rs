//! Client library for the ExpatHome rental marketplace backend:
//! the wire data model, the REST client, and the client-side
//! filter/search engine over the fetched property list.

pub mod api;
pub mod catalog;
pub mod filter;
pub mod models;
