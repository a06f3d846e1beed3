///! Filter model and search validation

pub mod model;
pub mod selector;

pub use model::{DEFAULT_SOL, Filter, FilterUpdate};
pub use selector::{
    SelectorError, TemporalSelector, api_date, display_date, parse_earth_date, validate_selector,
};
