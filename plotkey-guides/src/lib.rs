pub mod error;
pub mod label;
pub mod legend;
