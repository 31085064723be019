//! Request handlers, one module per resource.

pub mod cakes;
pub mod customization;
pub mod options;
pub mod orders;
