pub mod emi;
pub mod inverse;
