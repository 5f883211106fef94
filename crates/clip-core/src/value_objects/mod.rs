//! Value objects - small immutable domain types

mod money;
mod platform;

pub use money::UsdCents;
pub use platform::{Platform, PlatformParseError};
