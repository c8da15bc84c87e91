//! FakeReal library exports for testing

pub mod classifier;
pub mod core;
pub mod oneshot;
pub mod tui;

#[cfg(test)]
pub mod test_support;
