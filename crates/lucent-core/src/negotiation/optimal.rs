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

//! Target builder: turns a request plus policy into the fully-populated
//! "optimal" configuration that ranking measures combos against.

use crate::catalog::CapabilityCatalog;
use crate::device::{
    DepthStencilFormat, DeviceConfig, DeviceKind, DisplayMode, MultisampleKind, PresentFlags,
    PresentInterval, SurfaceFormat, SwapEffect, VertexProcessing, DEFAULT_HEIGHT, DEFAULT_WIDTH,
};
use crate::negotiation::policy::{MatchOption, MatchPolicy};

/// Builds the optimal configuration. `Ignore` attributes get domain
/// defaults; everything else copies the request. The result is a ranking
/// target only and may not correspond to any real combo.
pub(crate) fn build_optimal<C>(
    requested: &DeviceConfig,
    policy: &MatchPolicy,
    catalog: &C,
) -> DeviceConfig
where
    C: CapabilityCatalog + ?Sized,
{
    let mut optimal = DeviceConfig::default();

    optimal.adapter_ordinal = match policy.adapter_ordinal {
        MatchOption::Ignore => 0,
        _ => requested.adapter_ordinal,
    };

    optimal.device_kind = match policy.device_kind {
        MatchOption::Ignore => DeviceKind::Hardware,
        _ => requested.device_kind,
    };

    optimal.windowed = match policy.windowed {
        MatchOption::Ignore => true,
        _ => requested.windowed,
    };

    let desktop = desktop_mode(catalog, optimal.adapter_ordinal);

    optimal.adapter_format = match policy.adapter_format {
        MatchOption::Ignore => {
            // Windowed surfaces must match the desktop format anyway.
            // Full-screen keeps the desktop format when it is at least
            // 32-bit, for a quick mode change; otherwise prefers X8R8G8B8.
            if optimal.windowed || desktop.format.color_bits() >= 8 {
                desktop.format
            } else {
                SurfaceFormat::X8R8G8B8
            }
        }
        _ => requested.adapter_format,
    };

    optimal.vertex_processing = match policy.vertex_processing {
        MatchOption::Ignore => VertexProcessing::HARDWARE,
        _ => requested.vertex_processing,
    };

    match policy.resolution {
        MatchOption::Ignore => {
            if optimal.windowed {
                optimal.width = DEFAULT_WIDTH;
                optimal.height = DEFAULT_HEIGHT;
            } else {
                optimal.width = desktop.width;
                optimal.height = desktop.height;
            }
        }
        _ => {
            optimal.width = requested.width;
            optimal.height = requested.height;
        }
    }

    optimal.back_buffer_format = match policy.back_buffer_format {
        MatchOption::Ignore => optimal.adapter_format,
        _ => requested.back_buffer_format,
    };

    optimal.back_buffer_count = match policy.back_buffer_count {
        MatchOption::Ignore => 2,
        _ => requested.back_buffer_count,
    };

    match policy.multisample {
        MatchOption::Ignore => {
            optimal.multisample = MultisampleKind::None;
            optimal.multisample_quality = 0;
        }
        _ => {
            optimal.multisample = requested.multisample;
            optimal.multisample_quality = requested.multisample_quality;
        }
    }

    optimal.swap_effect = match policy.swap_effect {
        MatchOption::Ignore => SwapEffect::Discard,
        _ => requested.swap_effect,
    };

    optimal.depth_stencil = if policy.depth_format == MatchOption::Ignore
        && policy.stencil_format == MatchOption::Ignore
    {
        if optimal.back_buffer_format.color_bits() >= 8 {
            Some(DepthStencilFormat::D32)
        } else {
            Some(DepthStencilFormat::D16)
        }
    } else {
        requested.depth_stencil
    };

    optimal.present_flags = match policy.present_flags {
        MatchOption::Ignore => PresentFlags::DISCARD_DEPTH_STENCIL,
        _ => requested.present_flags,
    };

    optimal.refresh_hz = match policy.refresh_rate {
        MatchOption::Ignore => 0,
        _ => requested.refresh_hz,
    };

    optimal.present_interval = match policy.present_interval {
        MatchOption::Ignore => {
            if optimal.windowed {
                PresentInterval::Immediate
            } else {
                PresentInterval::Default
            }
        }
        _ => requested.present_interval,
    };

    optimal
}

/// Desktop mode of the adapter with the given ordinal, or an empty mode
/// when the catalog knows no such adapter.
pub(crate) fn desktop_mode<C>(catalog: &C, ordinal: u32) -> DisplayMode
where
    C: CapabilityCatalog + ?Sized,
{
    catalog
        .adapters()
        .iter()
        .find(|adapter| adapter.ordinal == ordinal)
        .map(|adapter| adapter.desktop_mode)
        .unwrap_or_default()
}
