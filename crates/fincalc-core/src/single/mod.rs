pub mod fixed_deposit;
pub mod lumpsum;
