// src/config.rs

//! Configuration structures for the library and the CLI.
//!
//! `PrintConfig` is the immutable per-print option bundle; a print call never
//! mutates it beyond local working copies of the coordinates. `Config` groups
//! the process-level settings (device path, controller family). Both
//! serialize so a host application can persist them; the CLI just fills them
//! in from flags.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Placement and appearance options for a single print operation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PrintConfig {
    /// Target row; negative values count back from the bottom edge.
    pub row: i16,
    /// Target column; negative values count back from the right edge.
    pub col: i16,
    /// Print white-on-black instead of black-on-white.
    pub inverted: bool,
    /// Ask the controller for a full, flashing refresh of the region.
    pub flashing: bool,
    /// Clear the whole screen (honoring `inverted`) before printing.
    pub cleared: bool,
    /// Dynamically center the text on each line.
    pub centered: bool,
    /// Pad the text with blanks up to the available width.
    pub padded: bool,
}

/// eInk controller families with diverging update-descriptor ABIs.
///
/// The family picks the `DeviceProfile` strategy at session init; see
/// `crate::refresh`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DeviceFamily {
    /// mxcfb with EPDC flag bits in the update descriptor (Kobo and
    /// compatible imx EPDC devices).
    #[default]
    Kobo,
    /// mxcfb with history waveform fields and the split Carta/Pearl
    /// wait-for-completion generations (Kindle).
    Kindle,
}

impl DeviceFamily {
    /// Guesses the controller family from the running system.
    ///
    /// Kindles expose their serial through `/proc/usid`; nothing else does.
    pub fn detect() -> Self {
        if std::path::Path::new("/proc/usid").exists() {
            DeviceFamily::Kindle
        } else {
            DeviceFamily::Kobo
        }
    }
}

/// Process-level settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Framebuffer device node.
    pub device: PathBuf,
    /// Controller family; `None` means detect at session init.
    pub family: Option<DeviceFamily>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            device: PathBuf::from("/dev/fb0"),
            family: None,
        }
    }
}
