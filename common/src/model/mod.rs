pub mod field;
pub mod form;
pub mod number;
pub mod prediction;
