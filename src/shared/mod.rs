pub mod api;
pub mod concurrency;
pub mod patch;
pub mod validation;
