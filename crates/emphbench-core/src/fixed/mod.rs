pub mod ops;
pub mod qfmt;

pub use qfmt::QFormat;
