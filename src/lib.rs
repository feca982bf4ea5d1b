pub mod cache;
pub mod categories;
pub mod compare;
pub mod counter;
pub mod driver;
pub mod errors;
pub mod export;
pub mod information;
pub mod input;
pub mod output;
pub mod periods;
pub mod terms;
