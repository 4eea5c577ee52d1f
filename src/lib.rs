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
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
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

//! Touch and mouse camera controller for interactive 3D scenes.
//!
//! Hovercam turns raw pointer input (one-finger or mouse drags, two-finger
//! pinches, idle frames) into camera rotation, pans, zoom, idle re-leveling,
//! rotation momentum, and a gentle hover bob. It owns no renderer and no
//! window; the host hands it one [`input::InputSample`] and a mutable
//! [`camera::CameraPose`] per frame.
//!
//! # Key entry points
//!
//! - [`camera::CameraController`] - the per-frame controller
//! - [`input::InputTracker`] - folds platform events into per-frame samples
//! - [`options::Options`] - tuning parameters with TOML presets
//! - [`replay::ReplayScript`] - scripted sessions for tuning and regression
//!
//! # Frame order
//!
//! Within [`camera::CameraController::update`] the gesture branch
//! (single-contact drag, pinch, or idle stabilization) runs first, then
//! rotation momentum, then the hover bob. Each step reads the pose the
//! previous one wrote.

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod replay;
pub mod util;

pub use camera::{CameraController, CameraPose};
pub use error::HovercamError;
pub use input::{InputSample, InputTracker};
pub use options::Options;
pub use util::frame_timing::{FrameClock, FrameTime};
