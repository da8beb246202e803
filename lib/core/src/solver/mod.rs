pub use api::*;
pub use types::*;

mod api;
mod types;
