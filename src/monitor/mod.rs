pub mod engine;
pub mod history;
pub mod payload;
pub mod stats;
