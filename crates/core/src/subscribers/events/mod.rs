pub mod subscriber_failed;

pub use subscriber_failed::*;
