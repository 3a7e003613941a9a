//! Menu candidates from command output
//!
//! Turns raw command output into (label, value) pairs for a selection menu,
//! using a regular expression with capture groups and two small templates.
//! Pure and stateless: safe to call from any number of threads.
//!
//! ```
//! let candidates = termnorm_menu::extract(
//!     "upstream/pr-1\norigin/main",
//!     "(?P<remote>[a-z_]+)/(?P<branch>.*)",
//!     "{{ .branch }}",
//!     "Remote: {{ .remote }}",
//! )?;
//! assert_eq!(candidates[0].value, "pr-1");
//! assert_eq!(candidates[1].label, "Remote: origin");
//! # Ok::<(), termnorm_menu::ExtractError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod candidate;
mod error;
mod template;

pub use candidate::{Candidate, Extractor, extract};
pub use error::{ExtractError, TemplateError};
pub use template::Template;
