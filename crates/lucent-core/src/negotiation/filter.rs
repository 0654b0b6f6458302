// Copyright 2025 the Lucent authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Combo filter: rejects combos that cannot satisfy a `Preserve` policy
//! exactly.

use crate::catalog::CapabilityCombo;
use crate::device::{DeviceConfig, VertexProcessing};
use crate::negotiation::policy::{MatchOption, MatchPolicy};

/// Returns `false` for any combo that fails a `Preserve` requirement of
/// the policy. The structural windowed-vs-desktop-format rejection happens
/// in the selection loop before this runs.
pub(crate) fn combo_passes_preserve(
    combo: &CapabilityCombo,
    requested: &DeviceConfig,
    policy: &MatchPolicy,
) -> bool {
    if policy.adapter_ordinal == MatchOption::Preserve
        && combo.adapter_ordinal != requested.adapter_ordinal
    {
        return false;
    }

    if policy.device_kind == MatchOption::Preserve && combo.device_kind != requested.device_kind {
        return false;
    }

    if policy.windowed == MatchOption::Preserve && combo.windowed != requested.windowed {
        return false;
    }

    if policy.adapter_format == MatchOption::Preserve
        && combo.adapter_format != requested.adapter_format
    {
        return false;
    }

    // A preserved hardware-VP request can only be served by a device with
    // hardware transform and light.
    if policy.vertex_processing == MatchOption::Preserve
        && requested
            .vertex_processing
            .contains(VertexProcessing::HARDWARE)
        && !combo.caps.hardware_transform_and_light
    {
        return false;
    }

    if policy.resolution == MatchOption::Preserve {
        let found = combo
            .display_modes
            .iter()
            .any(|mode| mode.width == requested.width && mode.height == requested.height);
        if !found {
            return false;
        }
    }

    if policy.back_buffer_format == MatchOption::Preserve
        && combo.back_buffer_format != requested.back_buffer_format
    {
        return false;
    }

    // No capability data exists for back-buffer count, swap effect, or
    // present flags, so Preserve on those never rejects.

    if policy.multisample == MatchOption::Preserve {
        let found = combo.multisample.iter().any(|(kind, quality_levels)| {
            *kind == requested.multisample && *quality_levels >= requested.multisample_quality
        });
        if !found {
            return false;
        }
    }

    if let Some(format) = requested.depth_stencil {
        if policy.depth_format == MatchOption::Preserve
            && policy.stencil_format == MatchOption::Preserve
            && !combo.depth_stencil_formats.contains(&format)
        {
            return false;
        }

        if policy.depth_format == MatchOption::Preserve {
            let found = combo
                .depth_stencil_formats
                .iter()
                .any(|fmt| fmt.depth_bits() == format.depth_bits());
            if !found {
                return false;
            }
        }

        if policy.stencil_format == MatchOption::Preserve {
            let found = combo
                .depth_stencil_formats
                .iter()
                .any(|fmt| fmt.stencil_bits() == format.stencil_bits());
            if !found {
                return false;
            }
        }
    }

    if policy.refresh_rate == MatchOption::Preserve {
        let found = combo
            .display_modes
            .iter()
            .any(|mode| mode.refresh_hz == requested.refresh_hz);
        if !found {
            return false;
        }
    }

    if policy.present_interval == MatchOption::Preserve
        && !combo.present_intervals.contains(&requested.present_interval)
    {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DeviceCaps;
    use crate::device::{
        DepthStencilFormat, DeviceKind, DisplayMode, MultisampleKind, PresentInterval,
        SurfaceFormat,
    };

    fn combo() -> CapabilityCombo {
        CapabilityCombo {
            adapter_ordinal: 0,
            device_kind: DeviceKind::Hardware,
            adapter_format: SurfaceFormat::X8R8G8B8,
            back_buffer_format: SurfaceFormat::X8R8G8B8,
            windowed: true,
            display_modes: vec![
                DisplayMode {
                    width: 800,
                    height: 600,
                    refresh_hz: 60,
                    format: SurfaceFormat::X8R8G8B8,
                },
                DisplayMode {
                    width: 1024,
                    height: 768,
                    refresh_hz: 75,
                    format: SurfaceFormat::X8R8G8B8,
                },
            ],
            multisample: vec![
                (MultisampleKind::None, 1),
                (MultisampleKind::FourSamples, 2),
            ],
            depth_stencil_formats: vec![DepthStencilFormat::D16, DepthStencilFormat::D24S8],
            present_intervals: vec![PresentInterval::Immediate, PresentInterval::Default],
            caps: DeviceCaps {
                hardware_transform_and_light: true,
            },
        }
    }

    fn preserve(field: impl FnOnce(&mut MatchPolicy)) -> MatchPolicy {
        let mut policy = MatchPolicy::default();
        field(&mut policy);
        policy
    }

    #[test]
    fn preserve_back_buffer_format_rejects_mismatch() {
        let requested = DeviceConfig {
            back_buffer_format: SurfaceFormat::A2R10G10B10,
            ..DeviceConfig::default()
        };
        let policy = preserve(|p| p.back_buffer_format = MatchOption::Preserve);
        assert!(!combo_passes_preserve(&combo(), &requested, &policy));

        let matching = DeviceConfig {
            back_buffer_format: SurfaceFormat::X8R8G8B8,
            ..DeviceConfig::default()
        };
        assert!(combo_passes_preserve(&combo(), &matching, &policy));
    }

    #[test]
    fn preserve_resolution_requires_exact_mode() {
        let policy = preserve(|p| p.resolution = MatchOption::Preserve);
        let exact = DeviceConfig {
            width: 1024,
            height: 768,
            ..DeviceConfig::default()
        };
        assert!(combo_passes_preserve(&combo(), &exact, &policy));

        let odd = DeviceConfig {
            width: 1000,
            height: 700,
            ..DeviceConfig::default()
        };
        assert!(!combo_passes_preserve(&combo(), &odd, &policy));
    }

    #[test]
    fn preserve_multisample_needs_enough_quality_levels() {
        let policy = preserve(|p| p.multisample = MatchOption::Preserve);
        let ok = DeviceConfig {
            multisample: MultisampleKind::FourSamples,
            multisample_quality: 2,
            ..DeviceConfig::default()
        };
        assert!(combo_passes_preserve(&combo(), &ok, &policy));

        let too_high = DeviceConfig {
            multisample: MultisampleKind::FourSamples,
            multisample_quality: 3,
            ..DeviceConfig::default()
        };
        assert!(!combo_passes_preserve(&combo(), &too_high, &policy));

        let unsupported = DeviceConfig {
            multisample: MultisampleKind::TwoSamples,
            multisample_quality: 0,
            ..DeviceConfig::default()
        };
        assert!(!combo_passes_preserve(&combo(), &unsupported, &policy));
    }

    #[test]
    fn preserve_hardware_vp_needs_hardware_tnl() {
        let policy = preserve(|p| p.vertex_processing = MatchOption::Preserve);
        let requested = DeviceConfig {
            vertex_processing: VertexProcessing::HARDWARE,
            ..DeviceConfig::default()
        };
        assert!(combo_passes_preserve(&combo(), &requested, &policy));

        let mut no_tnl = combo();
        no_tnl.caps.hardware_transform_and_light = false;
        assert!(!combo_passes_preserve(&no_tnl, &requested, &policy));

        // A software request does not care about hardware T&L.
        let software = DeviceConfig {
            vertex_processing: VertexProcessing::SOFTWARE,
            ..DeviceConfig::default()
        };
        assert!(combo_passes_preserve(&no_tnl, &software, &policy));
    }

    #[test]
    fn preserve_depth_and_stencil_checks() {
        let requested = DeviceConfig {
            depth_stencil: Some(DepthStencilFormat::D24X4S4),
            ..DeviceConfig::default()
        };

        // Depth-only preserve: D24S8 shares the 24-bit depth, passes.
        let depth_only = preserve(|p| p.depth_format = MatchOption::Preserve);
        assert!(combo_passes_preserve(&combo(), &requested, &depth_only));

        // Stencil-only preserve: no 4-bit stencil format in the combo.
        let stencil_only = preserve(|p| p.stencil_format = MatchOption::Preserve);
        assert!(!combo_passes_preserve(&combo(), &requested, &stencil_only));

        // Both preserved: the exact format must be listed.
        let both = preserve(|p| {
            p.depth_format = MatchOption::Preserve;
            p.stencil_format = MatchOption::Preserve;
        });
        assert!(!combo_passes_preserve(&combo(), &requested, &both));
        let listed = DeviceConfig {
            depth_stencil: Some(DepthStencilFormat::D24S8),
            ..DeviceConfig::default()
        };
        assert!(combo_passes_preserve(&combo(), &listed, &both));

        // Disabled depth/stencil has nothing to preserve.
        let disabled = DeviceConfig {
            depth_stencil: None,
            ..DeviceConfig::default()
        };
        assert!(combo_passes_preserve(&combo(), &disabled, &both));
    }

    #[test]
    fn preserve_refresh_and_present_interval() {
        let refresh = preserve(|p| p.refresh_rate = MatchOption::Preserve);
        let at_75 = DeviceConfig {
            refresh_hz: 75,
            ..DeviceConfig::default()
        };
        assert!(combo_passes_preserve(&combo(), &at_75, &refresh));
        let at_120 = DeviceConfig {
            refresh_hz: 120,
            ..DeviceConfig::default()
        };
        assert!(!combo_passes_preserve(&combo(), &at_120, &refresh));

        let interval = preserve(|p| p.present_interval = MatchOption::Preserve);
        let vsync4 = DeviceConfig {
            present_interval: PresentInterval::Four,
            ..DeviceConfig::default()
        };
        assert!(!combo_passes_preserve(&combo(), &vsync4, &interval));
    }
}
