// src/lib.rs

//! Print text on eInk framebuffer devices (Kobo/Kindle).
//!
//! The crate talks straight to the Linux framebuffer: it probes the device
//! geometry, maps the buffer, rasterizes text with a scaled 8x8 bitmap font,
//! and drives the mxcfb EPDC ioctls to get the pixels onto the panel.
//!
//! Entry point is [`Session`]: open it over a device, then call
//! [`Session::print`] or [`Session::refresh`]. A session is not synchronized;
//! concurrent use requires external locking.
//!
//! ```no_run
//! use inkfb::{Config, PrintConfig, Session};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut session = Session::open(&Config::default())?;
//! let config = PrintConfig {
//!     row: 1,
//!     centered: true,
//!     ..PrintConfig::default()
//! };
//! session.print("Hello World!", &config)?;
//! # Ok(())
//! # }
//! ```

pub mod color;
pub mod config;
pub mod font;
pub mod framebuffer;
pub mod geometry;
pub mod mxcfb;
pub mod refresh;
mod render;

pub use config::{Config, DeviceFamily, PrintConfig};
pub use framebuffer::Session;
pub use geometry::Rect;
pub use mxcfb::WaveformMode;

/// The library version, as baked in at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
