//! Value objects - immutable types that represent domain concepts

mod preference;
mod snowflake;

pub use preference::{Preference, PreferenceAction};
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};
