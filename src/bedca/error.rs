//! Errors raised while talking to the BEDCA query endpoint.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BedcaError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Received HTTP {0}")]
    UnexpectedStatus(u16),

    #[error("Invalid XML response: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Response is missing a <{0}> element")]
    MissingElement(&'static str),

    #[error("Invalid number in <{field}>: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("There are duplicated food IDs: {}", join_ids(.0))]
    DuplicateFoodIds(Vec<i64>),
}

fn join_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
