//! Frame composition module
//!
//! Arranges the four decoded tiles of one navigation step into a captioned
//! 2x2 mosaic.

mod caption;
mod mosaic;


pub use caption::{Caption, CaptionStyle};
pub use mosaic::{compose, Mosaic, PreviousFrame};
