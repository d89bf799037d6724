// src/mxcfb.rs

//! mxcfb EPDC ioctl ABI: update descriptors, waveform/update mode codes, and
//! the ioctl wrappers themselves.
//!
//! The two supported controller families share the `'F'` ioctl group and the
//! 0x2E/0x2F command numbers but disagree on the descriptor layout, so each
//! family gets its own repr(C) struct and its own generated ioctl. Which one
//! a session uses is decided by the `DeviceProfile` in `crate::refresh`.

use nix::{ioctl_readwrite, ioctl_write_ptr};

/// Rectangle in the layout the EPDC expects.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct MxcfbRect {
    pub top: u32,
    pub left: u32,
    pub width: u32,
    pub height: u32,
}

/// Secondary buffer descriptor. Unused by this crate; always zeroed.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct MxcfbAltBufferData {
    pub virt_addr: *mut libc::c_void,
    pub phys_addr: u32,
    pub width: u32,
    pub height: u32,
    pub alt_update_region: MxcfbRect,
}

impl Default for MxcfbAltBufferData {
    fn default() -> Self {
        MxcfbAltBufferData {
            virt_addr: std::ptr::null_mut(),
            phys_addr: 0,
            width: 0,
            height: 0,
            alt_update_region: MxcfbRect::default(),
        }
    }
}

/// Update descriptor for imx EPDC kernels with flag-based AAD control
/// (Kobo and compatibles).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct KoboUpdateData {
    pub update_region: MxcfbRect,
    pub waveform_mode: u32,
    pub update_mode: u32,
    pub update_marker: u32,
    pub temp: i32,
    pub flags: u32,
    pub alt_buffer_data: MxcfbAltBufferData,
}

/// Update descriptor for Kindle kernels, which carry the extra history
/// waveform hint fields.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct KindleUpdateData {
    pub update_region: MxcfbRect,
    pub waveform_mode: u32,
    pub update_mode: u32,
    pub update_marker: u32,
    pub hist_bw_waveform_mode: u32,
    pub hist_gray_waveform_mode: u32,
    pub temp: i32,
    pub flags: u32,
    pub alt_buffer_data: MxcfbAltBufferData,
}

/// Completion token for the Carta-generation Kindle wait ioctl.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct MxcfbUpdateMarkerData {
    pub update_marker: u32,
    pub collision_test: u32,
}

/// Ask the EPDC to use the panel's ambient temperature reading.
pub const TEMP_USE_AMBIENT: i32 = 0x1000;

/// Waveform selection, by name. Each `DeviceProfile` translates a mode into
/// the numeric code its kernel generation understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WaveformMode {
    /// Let the EPDC pick based on update content.
    #[default]
    Auto,
    /// Direct update, 1bit, fast.
    Du,
    /// Full 16-level grayscale.
    Gc16,
    Gc4,
    /// 1bit, even faster than DU, leaves more ghosting.
    A2,
    Gl16,
    /// Regal, reduced-ghosting partial updates.
    Reagl,
    /// Regal with dithering.
    Reagld,
    // Kindle-only modes, exposed through that family's name parser.
    Gc16Fast,
    Gl16Fast,
    Du4,
    Gl4,
    Gl16Inv,
}

/// Partial vs. full update semantics, shared by both families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum UpdateMode {
    Partial = 0,
    Full = 1,
}

bitflags::bitflags! {
    /// EPDC update flags (Kobo descriptor only; Kindle updates always
    /// submit with no flags set).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct EpdcFlags: u32 {
        const ENABLE_INVERSION = 0x01;
        const FORCE_MONOCHROME = 0x02;
        const USE_CMAP = 0x04;
        const USE_ALT_BUFFER = 0x100;
        /// AAD processing, required by REAGLD on Kobo.
        const USE_AAD = 0x1000;
    }
}

const MXCFB_IOC_MAGIC: u8 = b'F';

ioctl_write_ptr!(send_update_kobo, MXCFB_IOC_MAGIC, 0x2E, KoboUpdateData);
ioctl_write_ptr!(wait_for_update_kobo, MXCFB_IOC_MAGIC, 0x2F, u32);

ioctl_write_ptr!(send_update_kindle, MXCFB_IOC_MAGIC, 0x2E, KindleUpdateData);
// Carta kernels grew a read-write wait carrying collision info; Pearl-era
// kernels still use the plain marker write.
ioctl_readwrite!(
    wait_for_update_carta,
    MXCFB_IOC_MAGIC,
    0x2F,
    MxcfbUpdateMarkerData
);
ioctl_write_ptr!(wait_for_update_pearl, MXCFB_IOC_MAGIC, 0x2F, u32);
