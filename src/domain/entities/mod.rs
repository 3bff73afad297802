//! Core domain entities.
//!
//! - [`RedirectRecord`] - A short path mapped to a destination URL and hit counter

pub mod redirect;

pub use redirect::RedirectRecord;
