//! Form rendering module
//!
//! - `field_renderer`: a single input with its inline errors
//! - `wizard_form`: the current step and its navigation buttons
//! - `confirmation`: the screen shown after a successful submission

mod confirmation;
mod field_renderer;
mod wizard_form;

pub use confirmation::draw as draw_confirmation;
pub use wizard_form::draw as draw_wizard;
