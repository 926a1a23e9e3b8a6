pub mod rescale;
pub mod rolling;
pub mod y_formatter;
