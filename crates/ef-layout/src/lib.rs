//! `ef-layout` — the venue floor plan.
//!
//! # Crate layout
//!
//! | Module         | Contents                                            |
//! |----------------|-----------------------------------------------------|
//! | [`layout`]     | `Layout`, `BuffetStation`                           |
//! | [`validate`]   | `validate` — minimum-element gate                   |
//! | [`loader`]     | JSON loading from strings, readers, and files       |
//! | [`error`]      | `LayoutError`, `LayoutResult<T>`                    |

pub mod error;
pub mod layout;
pub mod loader;
pub mod validate;


pub use error::{LayoutError, LayoutResult};
pub use layout::{BuffetStation, Layout};
pub use loader::{load_layout_path, load_layout_reader, load_layout_str};
pub use validate::validate;
