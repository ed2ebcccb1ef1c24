//! Company state: the record every transition reads and returns.

pub mod fields;
pub mod types;

pub use fields::CompanyField;
pub use types::*;
