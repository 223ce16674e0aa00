pub mod common;
pub mod errors;
pub mod interview;
pub mod pagination;
pub mod records;
pub mod transcripts;

pub use errors::Result;
