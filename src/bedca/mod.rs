//! Client for the BEDCA (Spanish food composition database) query service.
//!
//! Queries are XML documents rendered from request templates and POSTed to a
//! single endpoint. `list_foods` walks the alphabetical index and
//! `get_nutrition_facts` fetches one food's nutrient values.

mod client;
mod detail;
mod error;
mod index;
mod xml;

pub use client::{BedcaClient, DEFAULT_BASE_URL};
pub use error::BedcaError;
