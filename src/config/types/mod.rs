//! Configuration utility types.
//!
//! | Module      | Purpose                                      |
//! |-------------|----------------------------------------------|
//! | `error`     | Configuration error types and diagnostics    |
//! | `field`     | Field path type for diagnostics              |
//! | `handle`    | Shared snapshot with explicit reload         |
//! | `direction` | `dir` enum                                   |
//! | `count`     | Positive post counts                         |
//! | `margin`    | Scheduled post margin                        |
//! | `timezone`  | IANA timezone                                |

mod count;
mod direction;
mod error;
mod field;
pub mod handle;
mod margin;
mod timezone;

pub use count::PostCount;
pub use direction::Direction;
pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
pub use handle::ConfigHandle;
pub use margin::PostMargin;
pub use timezone::Timezone;
