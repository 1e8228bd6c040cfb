//! Configuration section definitions.
//!
//! | Module | TOML Section  | Purpose                         |
//! |--------|---------------|---------------------------------|
//! | `edit` | `[editPost]`  | "Edit this post" link settings  |

mod edit;

pub use edit::EditPostConfig;
