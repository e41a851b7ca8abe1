//! Shared configuration types for the $SMS messenger SDK.

pub mod types;
