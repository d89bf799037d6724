// src/framebuffer/mod.rs

//! Framebuffer device session: open, probe, map, write, tear down.
//!
//! A `Session` owns the device handle, the geometry probed from it, and the
//! memory mapping of the buffer itself. The mapping is created lazily on the
//! first draw so that a probe-only caller never touches `mmap` at all.
//! Printing and refreshing are implemented on `Session` in `crate::render`
//! and `crate::refresh`.

pub mod pixel;

use anyhow::{bail, Context, Result};
use log::{debug, info, warn};
use nix::sys::mman::{self, MapFlags, ProtFlags};
use std::fs::{File, OpenOptions};
use std::num::NonZeroUsize;
use std::os::fd::{AsRawFd, RawFd};
use std::ptr::NonNull;

use crate::config::{Config, DeviceFamily};
use crate::geometry::{DeviceGeometry, FontMetrics};
use crate::refresh::{profile_for, DeviceProfile};
use pixel::Canvas;

// Linux fbdev ABI. Only the fields the probe consumes are named
// individually; the rest exist to keep the struct sizes honest.

#[repr(C)]
#[derive(Debug, Clone, Copy)]
#[allow(dead_code)]
struct FbBitfield {
    offset: u32,
    length: u32,
    msb_right: u32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
#[allow(dead_code)]
struct FbVarScreenInfo {
    xres: u32,
    yres: u32,
    xres_virtual: u32,
    yres_virtual: u32,
    xoffset: u32,
    yoffset: u32,
    bits_per_pixel: u32,
    grayscale: u32,
    red: FbBitfield,
    green: FbBitfield,
    blue: FbBitfield,
    transp: FbBitfield,
    nonstd: u32,
    activate: u32,
    height: u32,
    width: u32,
    accel_flags: u32,
    pixclock: u32,
    left_margin: u32,
    right_margin: u32,
    upper_margin: u32,
    lower_margin: u32,
    hsync_len: u32,
    vsync_len: u32,
    sync: u32,
    vmode: u32,
    rotate: u32,
    colorspace: u32,
    reserved: [u32; 4],
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
#[allow(dead_code)]
struct FbFixScreenInfo {
    id: [u8; 16],
    smem_start: libc::c_ulong,
    smem_len: u32,
    fb_type: u32,
    type_aux: u32,
    visual: u32,
    xpanstep: u16,
    ypanstep: u16,
    ywrapstep: u16,
    line_length: u32,
    mmio_start: libc::c_ulong,
    mmio_len: u32,
    accel: u32,
    capabilities: u16,
    reserved: [u16; 2],
}

const FBIOGET_VSCREENINFO: libc::c_ulong = 0x4600;
const FBIOGET_FSCREENINFO: libc::c_ulong = 0x4602;

nix::ioctl_read_bad!(fb_get_var_screeninfo, FBIOGET_VSCREENINFO, FbVarScreenInfo);
nix::ioctl_read_bad!(fb_get_fix_screeninfo, FBIOGET_FSCREENINFO, FbFixScreenInfo);

/// A live `mmap` of the framebuffer.
struct Mapping {
    ptr: NonNull<libc::c_void>,
    len: usize,
}

/// Backing storage for the drawable buffer.
enum FbMemory {
    /// Probed but not yet mapped.
    Unmapped,
    Mapped(Mapping),
    /// Heap-backed stand-in, used by tests.
    #[allow(dead_code)]
    Owned(Vec<u8>),
}

pub struct Session {
    device: Option<File>,
    pub(crate) geo: DeviceGeometry,
    pub(crate) metrics: FontMetrics,
    memory: FbMemory,
    pub(crate) profile: Box<dyn DeviceProfile>,
}

impl Session {
    /// Opens the framebuffer device and probes its geometry.
    pub fn open(config: &Config) -> Result<Self> {
        let device = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&config.device)
            .with_context(|| format!("opening framebuffer device {}", config.device.display()))?;

        let family = config.family.unwrap_or_else(DeviceFamily::detect);
        info!(
            "opened {} as a {:?}-family device",
            config.device.display(),
            family
        );

        let mut session = Session {
            device: Some(device),
            geo: DeviceGeometry {
                xres: 0,
                yres: 0,
                bits_per_pixel: 0,
                line_length: 0,
                mem_len: 0,
                rotate: 0,
            },
            metrics: FontMetrics::from_resolution(0, 0),
            memory: FbMemory::Unmapped,
            profile: profile_for(family),
        };
        session.probe()?;
        Ok(session)
    }

    /// Like [`open`](Session::open), but with the controller family pinned
    /// instead of detected.
    pub fn open_with(config: &Config, family: DeviceFamily) -> Result<Self> {
        let mut config = config.clone();
        config.family = Some(family);
        Self::open(&config)
    }

    /// Re-reads the device geometry and rederives the font metrics.
    ///
    /// Any existing mapping is dropped first, since a rotation can change
    /// the buffer length out from under it.
    pub fn probe(&mut self) -> Result<()> {
        let fd = self.fd()?;
        self.unmap();

        // Zeroed is a valid initial state for both fbdev structs; the
        // kernel overwrites every field on success.
        let mut var: FbVarScreenInfo = unsafe { std::mem::zeroed() };
        unsafe { fb_get_var_screeninfo(fd, &mut var) }
            .context("FBIOGET_VSCREENINFO ioctl failed")?;

        let mut fix: FbFixScreenInfo = unsafe { std::mem::zeroed() };
        unsafe { fb_get_fix_screeninfo(fd, &mut fix) }
            .context("FBIOGET_FSCREENINFO ioctl failed")?;

        match var.bits_per_pixel {
            8 | 16 | 24 | 32 => {}
            bpp => bail!("unsupported framebuffer depth {bpp}bpp"),
        }

        self.geo = DeviceGeometry {
            xres: var.xres,
            yres: var.yres,
            bits_per_pixel: var.bits_per_pixel,
            line_length: fix.line_length,
            mem_len: fix.smem_len,
            rotate: var.rotate,
        };
        self.metrics = FontMetrics::from_resolution(var.xres, var.yres);

        info!(
            "probed {}x{} @ {}bpp, stride {}, rotation {}",
            self.geo.xres, self.geo.yres, self.geo.bits_per_pixel, self.geo.line_length,
            self.geo.rotate
        );
        debug!(
            "font: {}x{} cells ({} cols x {} rows, perfect fit: {})",
            self.metrics.cell_width,
            self.metrics.cell_height,
            self.metrics.max_cols,
            self.metrics.max_rows,
            self.metrics.perfect_fit
        );
        Ok(())
    }

    pub fn geometry(&self) -> &DeviceGeometry {
        &self.geo
    }

    pub fn metrics(&self) -> &FontMetrics {
        &self.metrics
    }

    pub(crate) fn fd(&self) -> Result<RawFd> {
        match &self.device {
            Some(f) => Ok(f.as_raw_fd()),
            None => bail!("session has no device handle"),
        }
    }

    /// Maps the framebuffer if it is not mapped yet.
    pub fn ensure_mapped(&mut self) -> Result<()> {
        if !matches!(self.memory, FbMemory::Unmapped) {
            return Ok(());
        }
        let file = self
            .device
            .as_ref()
            .context("session has no device handle")?;
        let len = NonZeroUsize::new(self.geo.mem_len as usize)
            .context("framebuffer reports zero-length memory")?;
        let ptr = unsafe {
            mman::mmap(
                None,
                len,
                ProtFlags::PROT_READ | ProtFlags::PROT_WRITE,
                MapFlags::MAP_SHARED,
                file,
                0,
            )
        }
        .context("mmap of framebuffer memory failed")?;
        debug!("mapped {} bytes of framebuffer memory", len);
        self.memory = FbMemory::Mapped(Mapping {
            ptr,
            len: len.get(),
        });
        Ok(())
    }

    /// A drawable view of the buffer, mapping it first if needed.
    pub(crate) fn canvas(&mut self) -> Result<Canvas<'_>> {
        self.ensure_mapped()?;
        let geo = self.geo;
        let buf: &mut [u8] = match &mut self.memory {
            FbMemory::Mapped(m) => unsafe {
                std::slice::from_raw_parts_mut(m.ptr.as_ptr().cast::<u8>(), m.len)
            },
            FbMemory::Owned(v) => v.as_mut_slice(),
            FbMemory::Unmapped => bail!("framebuffer memory is not mapped"),
        };
        Ok(Canvas::new(buf, geo))
    }

    fn unmap(&mut self) {
        if !matches!(self.memory, FbMemory::Mapped(_)) {
            return;
        }
        if let FbMemory::Mapped(m) = std::mem::replace(&mut self.memory, FbMemory::Unmapped) {
            if let Err(err) = unsafe { mman::munmap(m.ptr, m.len) } {
                warn!("munmap of framebuffer memory failed: {err}");
            }
        }
    }

    /// Unmaps and closes the device. `Drop` does the same; this exists for
    /// callers that want the errors surfaced.
    pub fn teardown(mut self) -> Result<()> {
        if let FbMemory::Mapped(m) = std::mem::replace(&mut self.memory, FbMemory::Unmapped) {
            unsafe { mman::munmap(m.ptr, m.len) }.context("munmap of framebuffer memory failed")?;
        }
        self.device.take();
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn for_tests(geo: DeviceGeometry, family: DeviceFamily) -> Self {
        Session {
            device: None,
            geo,
            metrics: FontMetrics::from_resolution(geo.xres, geo.yres),
            memory: FbMemory::Owned(vec![0u8; geo.mem_len as usize]),
            profile: profile_for(family),
        }
    }

    #[cfg(test)]
    pub(crate) fn buffer(&self) -> &[u8] {
        match &self.memory {
            FbMemory::Owned(v) => v.as_slice(),
            _ => panic!("test buffer only exists on owned-memory sessions"),
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.unmap();
    }
}
