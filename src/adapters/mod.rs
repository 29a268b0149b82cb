//! Platform adapters that implement the [`ports`](crate::ports) traits.

pub mod time;
