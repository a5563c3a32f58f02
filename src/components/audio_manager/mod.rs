//! Audio Manager - owns the playback state machine and keeps the media
//! element in step with it, outside of the component render cycle.

mod controller;
mod playback_api;
mod state;
#[cfg(target_arch = "wasm32")]
mod web_helpers;

pub use controller::*;
pub use playback_api::*;
pub use state::*;
