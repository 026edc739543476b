pub mod logging;
pub mod max_concurrency;
