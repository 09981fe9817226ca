//! TUI view components
//!
//! Each component renders one part of the interface from borrowed state.

mod confirmation;
mod error;
mod help;
pub mod helpers;
mod navigator;
mod status_bar;
mod viewer;

pub use confirmation::*;
pub use error::*;
pub use help::*;
pub use navigator::*;
pub use status_bar::*;
pub use viewer::*;
