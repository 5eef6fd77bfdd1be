pub mod function;
pub mod trace;
