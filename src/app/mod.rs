//! Application layer coordinating state, events, and actions.
//!
//! This module defines the dialog state machine, sitting between the
//! presentation shell and the domain layer. It implements the event-driven
//! architecture that powers the interactive dialogs.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──── refreshed group snapshots ───┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`filter`]: Group filter criteria and predicates for the listing screen
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`screens`]: Listing/edit screen state machine types
//! - [`state`]: Session state container and view model computation
//!
//! # Examples
//!
//! ```
//! use alternatives_ui::{handle_event, AppState, Event};
//!
//! let mut state = AppState::new(vec![]);
//! let (redraw, actions) = handle_event(&mut state, &Event::CursorDown)?;
//! assert!(redraw);
//! assert!(actions.is_empty());
//! # Ok::<(), alternatives_ui::AlternativesError>(())
//! ```

pub mod actions;
pub mod filter;
pub mod handler;
pub mod screens;
pub mod state;

pub use actions::{Action, DialogResult};
pub use filter::{filtered_groups, FilterCriteria};
pub use handler::{handle_event, Event};
pub use screens::{EditState, Screen};
pub use state::AppState;
