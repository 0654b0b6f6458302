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

//! Configuration resolver: turns the winning combo into a concrete
//! configuration with every attribute verifiably supported.

use crate::catalog::{AdapterInfo, CapabilityCombo};
use crate::device::{
    DepthStencilFormat, DeviceConfig, MultisampleKind, PresentFlags, PresentInterval, SwapEffect,
    VertexProcessing, DEFAULT_HEIGHT, DEFAULT_WIDTH,
};
use crate::error::NegotiationError;
use crate::negotiation::policy::{MatchOption, MatchPolicy};

/// Resolves every attribute of the final configuration from the winning
/// combo, the request, and the policy.
pub(crate) fn resolve(
    combo: &CapabilityCombo,
    adapter: &AdapterInfo,
    requested: &DeviceConfig,
    policy: &MatchPolicy,
) -> Result<DeviceConfig, NegotiationError> {
    let vertex_processing = resolve_vertex_processing(combo, requested, policy);
    let (width, height) = resolve_resolution(combo, adapter, requested, policy)?;
    let back_buffer_count = resolve_back_buffer_count(requested, policy);
    let swap_effect = resolve_swap_effect(requested, policy);
    let (multisample, multisample_quality) =
        resolve_multisample(combo, requested, policy, swap_effect);
    let depth_stencil = resolve_depth_stencil(combo, requested, policy);
    let present_flags = resolve_present_flags(requested, policy, depth_stencil.is_some());
    let refresh_hz = resolve_refresh_rate(combo, adapter, requested, policy, width, height);
    let present_interval = resolve_present_interval(combo, requested, policy);

    Ok(DeviceConfig {
        adapter_ordinal: combo.adapter_ordinal,
        device_kind: combo.device_kind,
        windowed: combo.windowed,
        adapter_format: combo.adapter_format,
        vertex_processing,
        width,
        height,
        back_buffer_format: combo.back_buffer_format,
        back_buffer_count,
        multisample,
        multisample_quality,
        swap_effect,
        depth_stencil,
        present_flags,
        refresh_hz,
        present_interval,
    })
}

fn resolve_vertex_processing(
    combo: &CapabilityCombo,
    requested: &DeviceConfig,
    policy: &MatchPolicy,
) -> VertexProcessing {
    let hardware_tnl = combo.caps.hardware_transform_and_light;
    match policy.vertex_processing {
        MatchOption::Preserve => requested.vertex_processing,
        MatchOption::Ignore => {
            if hardware_tnl {
                VertexProcessing::HARDWARE
            } else {
                VertexProcessing::SOFTWARE
            }
        }
        MatchOption::ClosestToInput => {
            let mut flags = requested.vertex_processing;
            // Downgrade hardware or mixed processing to software when the
            // device cannot transform and light in hardware.
            if !hardware_tnl
                && flags.intersects(VertexProcessing::HARDWARE | VertexProcessing::MIXED)
            {
                flags.remove(VertexProcessing::HARDWARE | VertexProcessing::MIXED);
                flags.insert(VertexProcessing::SOFTWARE);
            }
            if !flags.intersects(
                VertexProcessing::HARDWARE | VertexProcessing::MIXED | VertexProcessing::SOFTWARE,
            ) {
                if hardware_tnl {
                    flags.insert(VertexProcessing::HARDWARE);
                } else {
                    flags.insert(VertexProcessing::SOFTWARE);
                }
            }
            flags
        }
    }
}

fn resolve_resolution(
    combo: &CapabilityCombo,
    adapter: &AdapterInfo,
    requested: &DeviceConfig,
    policy: &MatchPolicy,
) -> Result<(u32, u32), NegotiationError> {
    if policy.resolution == MatchOption::Preserve {
        // The caller took responsibility for the exact size by preserving
        // it; the filter already required some matching mode.
        return Ok((requested.width, requested.height));
    }

    let (target_width, target_height) = if policy.resolution == MatchOption::ClosestToInput
        && requested.width != 0
        && requested.height != 0
    {
        (requested.width, requested.height)
    } else if combo.windowed {
        (DEFAULT_WIDTH, DEFAULT_HEIGHT)
    } else {
        (adapter.desktop_mode.width, adapter.desktop_mode.height)
    };

    if combo.windowed {
        // Windowed sizes are not tied to display modes; just keep the
        // window inside the usable desktop work area.
        let width = target_width.min(adapter.work_area_width);
        let height = target_height.min(adapter.work_area_height);
        return Ok((width, height));
    }

    // Full screen needs a real display mode: nearest by Manhattan
    // distance over (width, height), first exact match wins immediately.
    let mut best: Option<(u32, u32)> = None;
    let mut best_distance = u32::MAX;
    for mode in &combo.display_modes {
        let distance =
            mode.width.abs_diff(target_width) + mode.height.abs_diff(target_height);
        if distance < best_distance {
            best = Some((mode.width, mode.height));
            best_distance = distance;
            if best_distance == 0 {
                break;
            }
        }
    }
    best.ok_or(NegotiationError::NoCompatibleConfiguration)
}

fn resolve_back_buffer_count(requested: &DeviceConfig, policy: &MatchPolicy) -> u32 {
    match policy.back_buffer_count {
        MatchOption::Preserve => requested.back_buffer_count,
        MatchOption::Ignore => 2,
        MatchOption::ClosestToInput => requested.back_buffer_count.clamp(1, 3),
    }
}

fn resolve_swap_effect(requested: &DeviceConfig, policy: &MatchPolicy) -> SwapEffect {
    match policy.swap_effect {
        MatchOption::Preserve | MatchOption::ClosestToInput => requested.swap_effect,
        MatchOption::Ignore => SwapEffect::Discard,
    }
}

fn resolve_multisample(
    combo: &CapabilityCombo,
    requested: &DeviceConfig,
    policy: &MatchPolicy,
    swap_effect: SwapEffect,
) -> (MultisampleKind, u32) {
    // Multisampling is incompatible with non-discard swap effects.
    if swap_effect != SwapEffect::Discard {
        return (MultisampleKind::None, 0);
    }

    match policy.multisample {
        MatchOption::Preserve => (requested.multisample, requested.multisample_quality),
        MatchOption::Ignore => (MultisampleKind::None, 0),
        MatchOption::ClosestToInput => {
            let mut best = MultisampleKind::None;
            let mut best_quality = 0;
            for &(kind, quality_levels) in &combo.multisample {
                let distance = kind.samples().abs_diff(requested.multisample.samples());
                let best_distance = best.samples().abs_diff(requested.multisample.samples());
                if distance < best_distance {
                    best = kind;
                    best_quality =
                        quality_levels.saturating_sub(1).min(requested.multisample_quality);
                }
            }
            (best, best_quality)
        }
    }
}

fn resolve_depth_stencil(
    combo: &CapabilityCombo,
    requested: &DeviceConfig,
    policy: &MatchPolicy,
) -> Option<DepthStencilFormat> {
    // Mismatches under Preserve are ruled out rather than merely
    // penalized; the filter already guaranteed a zero-penalty candidate
    // exists when one was demanded.
    const PRESERVE_PENALTY: u32 = 10_000;

    let input_depth_bits = requested.depth_stencil.map_or(0, |f| f.depth_bits());
    let input_stencil_bits = requested.depth_stencil.map_or(0, |f| f.stencil_bits());
    let back_buffer_bits = combo.back_buffer_format.color_bits();

    let mut best: Option<DepthStencilFormat> = None;
    let mut best_penalty = u32::MAX;
    for &format in &combo.depth_stencil_formats {
        let depth_penalty = match policy.depth_format {
            MatchOption::Preserve => {
                if format.depth_bits() == input_depth_bits {
                    0
                } else {
                    PRESERVE_PENALTY
                }
            }
            MatchOption::Ignore => format.depth_bits().abs_diff(back_buffer_bits * 4),
            MatchOption::ClosestToInput => format.depth_bits().abs_diff(input_depth_bits),
        };

        let stencil_penalty = match policy.stencil_format {
            MatchOption::Preserve => {
                if format.stencil_bits() == input_stencil_bits {
                    0
                } else {
                    PRESERVE_PENALTY
                }
            }
            MatchOption::Ignore => format.stencil_bits(),
            MatchOption::ClosestToInput => format.stencil_bits().abs_diff(input_stencil_bits),
        };

        let penalty = depth_penalty + stencil_penalty;
        if penalty < best_penalty {
            best = Some(format);
            best_penalty = penalty;
        }
    }
    best
}

fn resolve_present_flags(
    requested: &DeviceConfig,
    policy: &MatchPolicy,
    depth_stencil_enabled: bool,
) -> PresentFlags {
    match policy.present_flags {
        MatchOption::Preserve => requested.present_flags,
        MatchOption::Ignore => {
            if depth_stencil_enabled {
                PresentFlags::DISCARD_DEPTH_STENCIL
            } else {
                PresentFlags::EMPTY
            }
        }
        MatchOption::ClosestToInput => {
            let mut flags = requested.present_flags;
            if depth_stencil_enabled {
                flags.insert(PresentFlags::DISCARD_DEPTH_STENCIL);
            }
            flags
        }
    }
}

fn resolve_refresh_rate(
    combo: &CapabilityCombo,
    adapter: &AdapterInfo,
    requested: &DeviceConfig,
    policy: &MatchPolicy,
    width: u32,
    height: u32,
) -> u32 {
    if combo.windowed {
        return 0;
    }

    if policy.refresh_rate == MatchOption::Preserve {
        return requested.refresh_hz;
    }

    let target = match policy.refresh_rate {
        MatchOption::ClosestToInput => requested.refresh_hz,
        _ => adapter.desktop_mode.refresh_hz,
    };
    if target == 0 {
        return 0;
    }

    let mut best = 0;
    let mut best_distance = u32::MAX;
    for mode in &combo.display_modes {
        if mode.width != width || mode.height != height {
            continue;
        }
        let distance = mode.refresh_hz.abs_diff(target);
        if distance < best_distance {
            best = mode.refresh_hz;
            best_distance = distance;
            if best_distance == 0 {
                break;
            }
        }
    }
    best
}

fn resolve_present_interval(
    combo: &CapabilityCombo,
    requested: &DeviceConfig,
    policy: &MatchPolicy,
) -> PresentInterval {
    let default = if combo.windowed {
        PresentInterval::Immediate
    } else {
        PresentInterval::Default
    };
    match policy.present_interval {
        MatchOption::Preserve => requested.present_interval,
        MatchOption::Ignore => default,
        MatchOption::ClosestToInput => {
            if combo.present_intervals.contains(&requested.present_interval) {
                requested.present_interval
            } else {
                default
            }
        }
    }
}
