//! Testing utilities.
//!
//! In-memory stand-ins for the host capabilities, so recording and replay
//! can be exercised without a window or an input device:
//!
//! - `HeadlessSurface` - a sized surface that counts focus and resize calls
//! - `RecordingSink` - an input sink that remembers every call

mod headless;
mod sink;

pub use headless::{HeadlessConfig, HeadlessSurface};
pub use sink::{RecordingSink, SinkCall};
