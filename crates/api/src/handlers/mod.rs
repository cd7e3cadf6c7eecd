pub mod brands;
pub mod categories;
pub mod parfums;
pub mod stats;
