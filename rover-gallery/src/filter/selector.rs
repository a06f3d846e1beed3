///! Temporal selector: exactly one of sol or earth date

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use super::model::Filter;

/// Which time axis a query runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporalSelector {
    Sol(u32),
    EarthDate(NaiveDate),
}

/// Why a filter cannot be submitted as a search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("fill in only sol OR earth date, not both")]
    BothSet,
    #[error("fill in sol OR earth date to search")]
    NoneSet,
}

impl TemporalSelector {
    /// Selector a fetch actually sends. Earth date wins when both are present.
    pub fn from_filter(filter: &Filter) -> Self {
        match filter.earth_date {
            Some(date) => TemporalSelector::EarthDate(date),
            None => TemporalSelector::Sol(filter.sol),
        }
    }

    /// Query parameter name and value
    pub fn query_pair(&self) -> (&'static str, String) {
        match self {
            TemporalSelector::Sol(sol) => ("sol", sol.to_string()),
            TemporalSelector::EarthDate(date) => ("earth_date", api_date(date)),
        }
    }
}

/// Gate for submitting a search: a positive sol or a date, never both
pub fn validate_selector(filter: &Filter) -> Result<TemporalSelector, SelectorError> {
    match (filter.sol > 0, filter.earth_date) {
        (true, Some(_)) => Err(SelectorError::BothSet),
        (false, None) => Err(SelectorError::NoneSet),
        (true, None) => Ok(TemporalSelector::Sol(filter.sol)),
        (false, Some(date)) => Ok(TemporalSelector::EarthDate(date)),
    }
}

/// `YYYY-M-D` without zero padding, the form the upstream accepts
pub fn api_date(date: &NaiveDate) -> String {
    format!("{}-{}-{}", date.year(), date.month(), date.day())
}

/// `DD/MM/YYYY` for display
pub fn display_date(date: &NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Parse user input in `YYYY-MM-DD` form
pub fn parse_earth_date(input: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
}
