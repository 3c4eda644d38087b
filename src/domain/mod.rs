//! Domain layer for the alternatives dialogs.
//!
//! This module contains the core domain types and the seam to the external
//! alternatives backend, independent of any presentation toolkit. It follows
//! domain-driven design principles by keeping the entities and contracts
//! isolated from the dialog state machine that consumes them.
//!
//! # Organization
//!
//! - [`error`]: Error types and result alias
//! - [`alternative`]: Alternative group, choice, and status snapshots
//! - [`source`]: The [`AlternativeSource`] backend trait
//!
//! # Examples
//!
//! ```
//! use alternatives_ui::domain::{AlternativeGroup, Choice, Status};
//!
//! let group = AlternativeGroup::new(
//!     "pager",
//!     "/usr/bin/less",
//!     Status::Automatic,
//!     vec![Choice::new("/usr/bin/less", 77, "pager.1.gz /usr/share/man/man1/less.1.gz")],
//! );
//! assert!(!group.is_empty());
//! ```

pub mod alternative;
pub mod error;
pub mod source;

pub use alternative::{AlternativeGroup, Choice, Status};
pub use error::{AlternativesError, Result};
pub use source::AlternativeSource;
