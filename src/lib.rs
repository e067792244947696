// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Test modules unwrap freely
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::wildcard_imports))]

//! View model for a toolbar control that switches a 3D camera between
//! perspective and orthographic projection.
//!
//! The crate owns no rendering. It holds the observable state a UI binds to
//! (drop-down visibility, tooltips, the active projection) and performs the
//! switch by installing a fresh frustum on the host camera.
//!
//! # Key entry points
//!
//! - [`picker::ProjectionPicker`] - the view model and its actions
//! - [`picker::command::PickerCommand`] - the action vocabulary
//! - [`camera::host::SceneHost`] - what a host scene must provide
//! - [`options::PickerOptions`] - tooltip labels passed at construction
//!
//! ```
//! use viso_projection_picker::camera::core::Scene;
//! use viso_projection_picker::picker::ProjectionPicker;
//!
//! let mut picker = ProjectionPicker::new(Scene::new(800, 600));
//! picker.switch_to_orthographic();
//! assert!(picker.is_orthographic());
//! assert_eq!(picker.selected_tooltip(), "Orthographic Projection");
//! ```

pub mod camera;
pub mod error;
pub mod observable;
pub mod options;
pub mod picker;

pub use error::PickerError;
pub use picker::command::PickerCommand;
pub use picker::ProjectionPicker;
