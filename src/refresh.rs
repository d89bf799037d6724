// src/refresh.rs

//! EPDC refresh planning and submission.
//!
//! A refresh is planned family-independently (`RefreshPlan`), then handed to
//! the session's `DeviceProfile`, which knows the descriptor layout and the
//! waveform numbering of its kernel generation. The plan/profile split keeps
//! everything up to the final ioctl testable off-device.

use anyhow::{Context, Result};
use log::{debug, warn};
use std::os::fd::RawFd;

use crate::config::DeviceFamily;
use crate::framebuffer::Session;
use crate::geometry::Rect;
use crate::mxcfb::{
    self, EpdcFlags, KindleUpdateData, KoboUpdateData, MxcfbRect, MxcfbUpdateMarkerData,
    UpdateMode, WaveformMode, TEMP_USE_AMBIENT,
};

/// Marker used when the process id is 0 and therefore unusable. Some EPDC
/// firmware wedges on a zero marker.
const FALLBACK_MARKER: u32 = 362;

/// Family-independent description of one refresh request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshPlan {
    pub waveform: WaveformMode,
    pub update_mode: UpdateMode,
    pub marker: u32,
}

/// Plans a refresh for the given waveform and flash request.
///
/// Flashing forces a FULL update. Flashing with AUTO is upgraded to GC16:
/// some kernels silently drop the flash when asked to pick the waveform
/// themselves.
pub(crate) fn plan_refresh(waveform: WaveformMode, flashing: bool) -> RefreshPlan {
    let waveform = if flashing && waveform == WaveformMode::Auto {
        WaveformMode::Gc16
    } else {
        waveform
    };
    let pid = nix::unistd::getpid().as_raw();
    let marker = if pid > 0 { pid as u32 } else { FALLBACK_MARKER };
    RefreshPlan {
        waveform,
        update_mode: if flashing {
            UpdateMode::Full
        } else {
            UpdateMode::Partial
        },
        marker,
    }
}

fn to_mxcfb_rect(rect: Rect) -> MxcfbRect {
    MxcfbRect {
        top: rect.top,
        left: rect.left,
        width: rect.width,
        height: rect.height,
    }
}

/// Names every family understands.
fn parse_common_waveform(name: &str) -> Option<WaveformMode> {
    match name.to_ascii_uppercase().as_str() {
        "DU" => Some(WaveformMode::Du),
        "GC16" => Some(WaveformMode::Gc16),
        "GC4" => Some(WaveformMode::Gc4),
        "A2" => Some(WaveformMode::A2),
        "GL16" => Some(WaveformMode::Gl16),
        "REAGL" => Some(WaveformMode::Reagl),
        "REAGLD" => Some(WaveformMode::Reagld),
        "AUTO" => Some(WaveformMode::Auto),
        _ => None,
    }
}

/// Per-family update strategy.
pub trait DeviceProfile {
    fn name(&self) -> &'static str;
    /// Parses a waveform name, case-insensitively. Names this family does
    /// not know fall back to AUTO rather than failing.
    fn parse_waveform(&self, name: &str) -> WaveformMode {
        parse_common_waveform(name).unwrap_or_else(|| {
            warn!("unknown waveform mode {name:?}, using AUTO");
            WaveformMode::Auto
        })
    }
    /// Numeric waveform code for this kernel generation.
    fn waveform_code(&self, waveform: WaveformMode) -> u32;
    fn submit(&self, fd: RawFd, region: MxcfbRect, plan: &RefreshPlan) -> Result<()>;
    fn wait(&self, fd: RawFd, marker: u32) -> Result<()>;
}

pub(crate) fn profile_for(family: DeviceFamily) -> Box<dyn DeviceProfile> {
    match family {
        DeviceFamily::Kobo => Box::new(KoboProfile),
        DeviceFamily::Kindle => Box::new(KindleProfile),
    }
}

pub(crate) struct KoboProfile;

impl KoboProfile {
    /// Flag bits implied by the waveform choice on this family.
    fn flags_for(waveform: WaveformMode) -> EpdcFlags {
        match waveform {
            // REAGLD needs the AAD pipeline switched on explicitly.
            WaveformMode::Reagld => EpdcFlags::USE_AAD,
            WaveformMode::A2 => EpdcFlags::FORCE_MONOCHROME,
            _ => EpdcFlags::empty(),
        }
    }

    fn descriptor(region: MxcfbRect, plan: &RefreshPlan) -> KoboUpdateData {
        KoboUpdateData {
            update_region: region,
            waveform_mode: KoboProfile.waveform_code(plan.waveform),
            update_mode: plan.update_mode as u32,
            update_marker: plan.marker,
            temp: TEMP_USE_AMBIENT,
            flags: Self::flags_for(plan.waveform).bits(),
            ..KoboUpdateData::default()
        }
    }
}

impl DeviceProfile for KoboProfile {
    fn name(&self) -> &'static str {
        "kobo"
    }

    fn waveform_code(&self, waveform: WaveformMode) -> u32 {
        match waveform {
            WaveformMode::Du | WaveformMode::Du4 => 1,
            WaveformMode::Gc16 | WaveformMode::Gc16Fast => 2,
            WaveformMode::Gc4 | WaveformMode::Gl4 => 3,
            WaveformMode::A2 => 4,
            WaveformMode::Gl16 | WaveformMode::Gl16Fast | WaveformMode::Gl16Inv => 5,
            WaveformMode::Reagl => 6,
            WaveformMode::Reagld => 7,
            WaveformMode::Auto => 257,
        }
    }

    fn submit(&self, fd: RawFd, region: MxcfbRect, plan: &RefreshPlan) -> Result<()> {
        let data = Self::descriptor(region, plan);
        unsafe { mxcfb::send_update_kobo(fd, &data) }.context("MXCFB_SEND_UPDATE failed")?;
        Ok(())
    }

    fn wait(&self, fd: RawFd, marker: u32) -> Result<()> {
        unsafe { mxcfb::wait_for_update_kobo(fd, &marker) }
            .context("MXCFB_WAIT_FOR_UPDATE_COMPLETE failed")?;
        Ok(())
    }
}

pub(crate) struct KindleProfile;

impl KindleProfile {
    fn descriptor(region: MxcfbRect, plan: &RefreshPlan) -> KindleUpdateData {
        KindleUpdateData {
            update_region: region,
            waveform_mode: KindleProfile.waveform_code(plan.waveform),
            update_mode: plan.update_mode as u32,
            update_marker: plan.marker,
            // History hints: DU for the 1bit passes, GC16_FAST for
            // grayscale.
            hist_bw_waveform_mode: 1,
            hist_gray_waveform_mode: 3,
            temp: TEMP_USE_AMBIENT,
            // This family drives everything through the waveform fields.
            flags: 0,
            ..KindleUpdateData::default()
        }
    }
}

impl DeviceProfile for KindleProfile {
    fn name(&self) -> &'static str {
        "kindle"
    }

    fn parse_waveform(&self, name: &str) -> WaveformMode {
        match name.to_ascii_uppercase().as_str() {
            "GC16_FAST" => WaveformMode::Gc16Fast,
            "GL16_FAST" => WaveformMode::Gl16Fast,
            "DU4" => WaveformMode::Du4,
            "GL4" => WaveformMode::Gl4,
            "GL16_INV" => WaveformMode::Gl16Inv,
            _ => parse_common_waveform(name).unwrap_or_else(|| {
                warn!("unknown waveform mode {name:?}, using AUTO");
                WaveformMode::Auto
            }),
        }
    }

    fn waveform_code(&self, waveform: WaveformMode) -> u32 {
        match waveform {
            WaveformMode::Du => 1,
            WaveformMode::Gc16 => 2,
            WaveformMode::Gc16Fast => 3,
            WaveformMode::Gl16 => 5,
            WaveformMode::A2 | WaveformMode::Gl16Fast => 6,
            WaveformMode::Du4 => 7,
            WaveformMode::Reagl => 8,
            WaveformMode::Reagld => 9,
            WaveformMode::Gc4 | WaveformMode::Gl4 => 0x0A,
            WaveformMode::Gl16Inv => 0x0B,
            WaveformMode::Auto => 257,
        }
    }

    fn submit(&self, fd: RawFd, region: MxcfbRect, plan: &RefreshPlan) -> Result<()> {
        let data = Self::descriptor(region, plan);
        unsafe { mxcfb::send_update_kindle(fd, &data) }.context("MXCFB_SEND_UPDATE failed")?;
        Ok(())
    }

    fn wait(&self, fd: RawFd, marker: u32) -> Result<()> {
        // Carta kernels take a marker struct and report collisions; Pearl
        // kernels predate that and take the bare marker. Probe the new form
        // first and drop back once on failure.
        let mut token = MxcfbUpdateMarkerData {
            update_marker: marker,
            collision_test: 0,
        };
        match unsafe { mxcfb::wait_for_update_carta(fd, &mut token) } {
            Ok(_) => Ok(()),
            Err(err) => {
                warn!("carta-style wait failed ({err}), retrying with the legacy form");
                unsafe { mxcfb::wait_for_update_pearl(fd, &marker) }
                    .context("MXCFB_WAIT_FOR_UPDATE_COMPLETE failed")?;
                Ok(())
            }
        }
    }
}

impl Session {
    /// Refreshes an arbitrary screen region.
    ///
    /// `waveform_name` is matched case-insensitively against the known mode
    /// names; anything unrecognized means AUTO.
    pub fn refresh(&self, rect: Rect, waveform_name: &str, flashing: bool) -> Result<()> {
        let waveform = self.profile.parse_waveform(waveform_name);
        self.request_refresh(rect, waveform, flashing)
    }

    pub(crate) fn request_refresh(
        &self,
        rect: Rect,
        waveform: WaveformMode,
        flashing: bool,
    ) -> Result<()> {
        let plan = plan_refresh(waveform, flashing);
        debug!(
            "refresh {:?} on {}: waveform {:?}, {:?}, marker {}",
            rect,
            self.profile.name(),
            plan.waveform,
            plan.update_mode,
            plan.marker
        );
        let fd = self.fd()?;
        self.profile.submit(fd, to_mxcfb_rect(rect), &plan)?;
        if flashing {
            self.profile.wait(fd, plan.marker)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn flashing_forces_full_updates() {
        assert_eq!(
            plan_refresh(WaveformMode::Du, true).update_mode,
            UpdateMode::Full
        );
        assert_eq!(
            plan_refresh(WaveformMode::Du, false).update_mode,
            UpdateMode::Partial
        );
    }

    #[test_log::test]
    fn flashing_auto_upgrades_to_gc16() {
        assert_eq!(
            plan_refresh(WaveformMode::Auto, true).waveform,
            WaveformMode::Gc16
        );
        // Explicit waveforms survive the flash.
        assert_eq!(
            plan_refresh(WaveformMode::A2, true).waveform,
            WaveformMode::A2
        );
        // Non-flashing AUTO stays AUTO.
        assert_eq!(
            plan_refresh(WaveformMode::Auto, false).waveform,
            WaveformMode::Auto
        );
    }

    #[test_log::test]
    fn marker_is_never_zero() {
        assert_ne!(plan_refresh(WaveformMode::Auto, false).marker, 0);
    }

    #[test_log::test]
    fn kobo_flags_follow_waveform() {
        assert_eq!(
            KoboProfile::flags_for(WaveformMode::Reagld),
            EpdcFlags::USE_AAD
        );
        assert_eq!(
            KoboProfile::flags_for(WaveformMode::A2),
            EpdcFlags::FORCE_MONOCHROME
        );
        assert_eq!(
            KoboProfile::flags_for(WaveformMode::Gc16),
            EpdcFlags::empty()
        );
    }

    #[test_log::test]
    fn waveform_codes_differ_by_family() {
        let kobo = KoboProfile;
        let kindle = KindleProfile;
        assert_eq!(kobo.waveform_code(WaveformMode::A2), 4);
        assert_eq!(kindle.waveform_code(WaveformMode::A2), 6);
        assert_eq!(kobo.waveform_code(WaveformMode::Reagl), 6);
        assert_eq!(kindle.waveform_code(WaveformMode::Reagl), 8);
        // AUTO is shared.
        assert_eq!(kobo.waveform_code(WaveformMode::Auto), 257);
        assert_eq!(kindle.waveform_code(WaveformMode::Auto), 257);
    }

    #[test_log::test]
    fn kobo_descriptor_carries_flags_and_ambient_temp() {
        let plan = RefreshPlan {
            waveform: WaveformMode::Reagld,
            update_mode: UpdateMode::Full,
            marker: 42,
        };
        let region = MxcfbRect {
            top: 8,
            left: 16,
            width: 120,
            height: 24,
        };
        let d = KoboProfile::descriptor(region, &plan);
        assert_eq!(d.waveform_mode, 7);
        assert_eq!(d.update_mode, 1);
        assert_eq!(d.update_marker, 42);
        assert_eq!(d.temp, TEMP_USE_AMBIENT);
        assert_eq!(d.flags, EpdcFlags::USE_AAD.bits());
        assert_eq!(d.update_region.width, 120);
    }

    #[test_log::test]
    fn kindle_descriptor_has_history_hints_and_no_flags() {
        let plan = RefreshPlan {
            waveform: WaveformMode::A2,
            update_mode: UpdateMode::Partial,
            marker: 7,
        };
        let d = KindleProfile::descriptor(MxcfbRect::default(), &plan);
        assert_eq!(d.waveform_mode, 6);
        assert_eq!(d.update_mode, 0);
        assert_eq!(d.flags, 0);
        assert_eq!(d.hist_bw_waveform_mode, 1);
        assert_eq!(d.hist_gray_waveform_mode, 3);
    }

    #[test_log::test]
    fn waveform_names_parse_case_insensitively() {
        let kobo = KoboProfile;
        assert_eq!(kobo.parse_waveform("reagl"), WaveformMode::Reagl);
        assert_eq!(kobo.parse_waveform("Gc16"), WaveformMode::Gc16);
    }

    #[test_log::test]
    fn unknown_waveform_names_default_to_auto() {
        assert_eq!(
            KoboProfile.parse_waveform("SPARKLE"),
            WaveformMode::Auto
        );
        assert_eq!(KindleProfile.parse_waveform(""), WaveformMode::Auto);
    }

    #[test_log::test]
    fn extra_waveform_names_are_family_specific() {
        assert_eq!(KindleProfile.parse_waveform("DU4"), WaveformMode::Du4);
        assert_eq!(
            KindleProfile.parse_waveform("gl16_inv"),
            WaveformMode::Gl16Inv
        );
        // The other family has no such mode and falls back.
        assert_eq!(KoboProfile.parse_waveform("DU4"), WaveformMode::Auto);
    }
}
