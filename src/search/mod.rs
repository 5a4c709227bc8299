//! Query surfaces over a built suffix array
//!
//! Both surfaces are thin: they reduce to binary search over the array
//! plus slicing of the text itself.
//!
//! - `locate`: binary-search locator reporting a single occurrence
//! - `kwic`: keyword-in-context scanner emitting every occurrence with
//!   its surrounding text window

pub mod kwic;
pub mod locate;

pub use kwic::{KwicMatch, KwicScanner};
pub use locate::locate;
