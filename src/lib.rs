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
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Animation math compares against exact committed values (0.0, 1.0) and
// step indices are cast into f32 coordinates / signed traversal offsets.
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

//! Tap-driven animated step widget.
//!
//! Draws a vertical column of five step positions, each a mirrored pair of
//! right triangles that rotate open and fill in a staggered two-phase
//! animation. A tap starts one fill (or unfill) sweep on the active step;
//! when the sweep settles, the active step advances along the column,
//! reversing at either end. Exactly one step animates per tap.
//!
//! # Key entry points
//!
//! - [`renderer::Renderer`] - the per-frame orchestrator
//! - [`canvas::Canvas`] - the 2D surface abstraction hosts implement
//! - [`options::Options`] - style and timing configuration
//! - [`animation`] - the fill state machine and frame clock
//!
//! # Architecture
//!
//! The crate is platform-agnostic: it never opens a window or touches a GPU.
//! A host event loop feeds [`input::InputEvent`]s into
//! [`renderer::Renderer::handle_event`] and calls
//! [`renderer::Renderer::render`] against any [`canvas::Canvas`]
//! implementation, scheduling frames according to the returned
//! [`renderer::Redraw`] request.

pub mod animation;
pub mod canvas;
pub mod easing;
pub mod error;
pub mod input;
pub mod options;
pub mod renderer;
pub mod sequence;
pub mod shape;
