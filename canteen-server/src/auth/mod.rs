//! Staff access
//!
//! The order listing is gated by a single shared secret configured at
//! startup ([`Config::staff_key`](crate::core::Config::staff_key)).

mod staff_key;

pub use staff_key::StaffKey;
