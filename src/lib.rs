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
// Complexity limits
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

//! Hand-tracking gesture controls for 3D cameras and scene objects.
//!
//! Handcam turns per-frame hand-tracking samples (palm and fingertip
//! positions) into incremental rotate, zoom/scale and pan transforms. It
//! neither tracks hands nor renders: the sensor runtime supplies
//! [`frame::Frame`]s and the host scene owns the [`camera::Camera`] and
//! [`object::SceneObject`] being moved.
//!
//! # Key entry points
//!
//! - [`camera::CameraControls`] - orbit a camera around a target point
//! - [`object::ObjectControls`] - rotate, scale and pan an object relative
//!   to a camera
//! - [`gesture::GestureChannel`] - per-channel matching and delta mapping
//! - [`options::Options`] - TOML-backed gesture mapping presets
//!
//! # Update cycle
//!
//! Each controller's `update` runs its channels in a fixed order (rotate,
//! zoom/scale, pan). A channel acts when it is enabled and the frame's hand
//! and finger counts satisfy its constraints. Deltas are measured against
//! the previous matching frame, so the first frame of a gesture only sets
//! the baseline. Engaging one channel discards the others' baselines.
//!
//! ```
//! use glam::Vec3;
//! use handcam::camera::{Camera, CameraControls};
//! use handcam::frame::{Frame, Hand, Pointable};
//!
//! let mut camera = Camera::looking_at(Vec3::new(0.0, 0.0, 100.0), Vec3::ZERO);
//! let mut controls = CameraControls::new(&camera);
//!
//! // one hand, four fingers: zoom
//! let pose = |z: f32| {
//!     Frame::new(
//!         vec![Hand::new(Vec3::new(0.0, 150.0, z))],
//!         vec![Pointable::new(Vec3::ZERO); 4],
//!     )
//! };
//! controls.update(&pose(0.0), &mut camera);
//! controls.update(&pose(40.0), &mut camera);
//! assert!(camera.position.z < 100.0);
//! ```

pub mod camera;
pub mod error;
pub mod frame;
pub mod gesture;
pub mod object;
pub mod options;

pub use error::HandcamError;
