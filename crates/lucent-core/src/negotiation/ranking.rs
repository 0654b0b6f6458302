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

//! Combo ranker: scores a combo against the optimal configuration with
//! fixed per-attribute weights.

use crate::catalog::CapabilityCombo;
use crate::device::{DeviceConfig, DeviceKind, DisplayMode, SurfaceFormat, VertexProcessing};

// Weights give lexicographic-like preference to the adapter ordinal,
// device kind, and windowed flag over the per-attribute closeness scores.
const ADAPTER_ORDINAL_WEIGHT: f32 = 1000.0;
const DEVICE_KIND_WEIGHT: f32 = 100.0;
const WINDOWED_WEIGHT: f32 = 10.0;
const ADAPTER_FORMAT_WEIGHT: f32 = 1.0;
const VERTEX_PROCESSING_WEIGHT: f32 = 1.0;
const RESOLUTION_WEIGHT: f32 = 1.0;
const BACK_BUFFER_FORMAT_WEIGHT: f32 = 1.0;
const MULTISAMPLE_WEIGHT: f32 = 1.0;
const DEPTH_STENCIL_WEIGHT: f32 = 1.0;
const REFRESH_RATE_WEIGHT: f32 = 1.0;
const PRESENT_INTERVAL_WEIGHT: f32 = 1.0;

/// Partial credit for a format mismatch, by per-channel bit-depth
/// distance. An exact match earns the full weight instead.
fn format_closeness(a: SurfaceFormat, b: SurfaceFormat) -> f32 {
    let delta = a.color_bits().abs_diff(b.color_bits()) as f32;
    (0.9 - delta * 0.2).max(0.0)
}

/// Scores `combo` against the optimal configuration. Higher is better;
/// the selection loop keeps the first strictly-greater maximum, so
/// enumeration order breaks ties.
pub(crate) fn rank_combo(
    combo: &CapabilityCombo,
    optimal: &DeviceConfig,
    desktop_mode: &DisplayMode,
) -> f32 {
    let mut ranking = 0.0f32;

    if combo.adapter_ordinal == optimal.adapter_ordinal {
        ranking += ADAPTER_ORDINAL_WEIGHT;
    }

    if combo.device_kind == optimal.device_kind {
        ranking += DEVICE_KIND_WEIGHT;
    }
    if combo.device_kind == DeviceKind::Hardware {
        ranking += 0.1;
    }

    if combo.windowed == optimal.windowed {
        ranking += WINDOWED_WEIGHT;
    }

    if combo.adapter_format == optimal.adapter_format {
        ranking += ADAPTER_FORMAT_WEIGHT;
    } else {
        ranking += format_closeness(combo.adapter_format, optimal.adapter_format)
            * ADAPTER_FORMAT_WEIGHT;
    }

    if !combo.windowed {
        // Full-screen slightly prefers the desktop format, or X8R8G8B8
        // when the desktop is shallower than 32-bit.
        let optimal_adapter_format = if desktop_mode.format.color_bits() >= 8 {
            desktop_mode.format
        } else {
            SurfaceFormat::X8R8G8B8
        };
        if combo.adapter_format == optimal_adapter_format {
            ranking += 0.1;
        }
    }

    if optimal
        .vertex_processing
        .intersects(VertexProcessing::HARDWARE | VertexProcessing::MIXED)
        && combo.caps.hardware_transform_and_light
    {
        ranking += VERTEX_PROCESSING_WEIGHT;
    }
    if combo.caps.hardware_transform_and_light {
        ranking += 0.1;
    }

    let resolution_found = combo
        .display_modes
        .iter()
        .any(|mode| mode.width == optimal.width && mode.height == optimal.height);
    if resolution_found {
        ranking += RESOLUTION_WEIGHT;
    }

    if combo.back_buffer_format == optimal.back_buffer_format {
        ranking += BACK_BUFFER_FORMAT_WEIGHT;
    } else {
        ranking += format_closeness(combo.back_buffer_format, optimal.back_buffer_format)
            * BACK_BUFFER_FORMAT_WEIGHT;
    }
    if combo.back_buffer_format == combo.adapter_format {
        ranking += 0.1;
    }

    let multisample_found = combo.multisample.iter().any(|(kind, quality_levels)| {
        *kind == optimal.multisample && *quality_levels >= optimal.multisample_quality
    });
    if multisample_found {
        ranking += MULTISAMPLE_WEIGHT;
    }

    if let Some(format) = optimal.depth_stencil {
        if combo.depth_stencil_formats.contains(&format) {
            ranking += DEPTH_STENCIL_WEIGHT;
        }
    }

    let refresh_found = combo
        .display_modes
        .iter()
        .any(|mode| mode.refresh_hz == optimal.refresh_hz);
    if refresh_found {
        ranking += REFRESH_RATE_WEIGHT;
    }

    if combo.present_intervals.contains(&optimal.present_interval) {
        ranking += PRESENT_INTERVAL_WEIGHT;
    }

    ranking
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    use crate::catalog::DeviceCaps;
    use crate::device::{
        DepthStencilFormat, MultisampleKind, PresentInterval,
    };

    fn base_combo() -> CapabilityCombo {
        CapabilityCombo {
            adapter_ordinal: 0,
            device_kind: DeviceKind::Hardware,
            adapter_format: SurfaceFormat::X8R8G8B8,
            back_buffer_format: SurfaceFormat::X8R8G8B8,
            windowed: true,
            display_modes: vec![DisplayMode {
                width: 640,
                height: 480,
                refresh_hz: 0,
                format: SurfaceFormat::X8R8G8B8,
            }],
            multisample: vec![(MultisampleKind::None, 1)],
            depth_stencil_formats: vec![DepthStencilFormat::D32],
            present_intervals: vec![PresentInterval::Immediate],
            caps: DeviceCaps {
                hardware_transform_and_light: true,
            },
        }
    }

    fn desktop() -> DisplayMode {
        DisplayMode {
            width: 1920,
            height: 1080,
            refresh_hz: 60,
            format: SurfaceFormat::X8R8G8B8,
        }
    }

    fn windowed_optimal() -> DeviceConfig {
        DeviceConfig {
            adapter_format: SurfaceFormat::X8R8G8B8,
            vertex_processing: VertexProcessing::HARDWARE,
            width: 640,
            height: 480,
            back_buffer_format: SurfaceFormat::X8R8G8B8,
            back_buffer_count: 2,
            depth_stencil: Some(DepthStencilFormat::D32),
            present_interval: PresentInterval::Immediate,
            ..DeviceConfig::default()
        }
    }

    #[test]
    fn perfect_windowed_combo_scores_all_weights() {
        let score = rank_combo(&base_combo(), &windowed_optimal(), &desktop());
        // 1000 + 100.1 + 10 + 1 + 1.1 + 1 + 1.1 + 1 + 1 + 1 + 1
        assert_relative_eq!(score, 1118.3, epsilon = 1e-3);
    }

    #[test]
    fn format_closeness_partial_credit() {
        assert_relative_eq!(
            format_closeness(SurfaceFormat::R5G6B5, SurfaceFormat::X8R8G8B8),
            0.3,
            epsilon = 1e-6
        );
        assert_relative_eq!(
            format_closeness(SurfaceFormat::A4R4G4B4, SurfaceFormat::A2R10G10B10),
            0.0,
            epsilon = 1e-6
        );
        // Different formats with equal bit depth still earn 0.9.
        assert_relative_eq!(
            format_closeness(SurfaceFormat::A8R8G8B8, SurfaceFormat::X8R8G8B8),
            0.9,
            epsilon = 1e-6
        );
    }

    #[test]
    fn hardware_device_beats_reference_on_otherwise_equal_combos() {
        let hardware = base_combo();
        let mut reference = base_combo();
        reference.device_kind = DeviceKind::Reference;

        // The optimal deliberately names neither kind, so the full
        // device-kind weight goes to neither and the 0.1 bonus decides.
        let optimal = DeviceConfig {
            device_kind: DeviceKind::Software,
            ..windowed_optimal()
        };
        let hw = rank_combo(&hardware, &optimal, &desktop());
        let refr = rank_combo(&reference, &optimal, &desktop());
        assert!(hw > refr);
        assert_relative_eq!(hw - refr, 0.1, epsilon = 1e-3);
    }

    #[test]
    fn desktop_format_bonus_is_full_screen_only() {
        let mut fullscreen = base_combo();
        fullscreen.windowed = false;
        let mut optimal = windowed_optimal();
        optimal.windowed = false;

        let with_bonus = rank_combo(&fullscreen, &optimal, &desktop());

        let other_desktop = DisplayMode {
            format: SurfaceFormat::A2R10G10B10,
            ..desktop()
        };
        let without_bonus = rank_combo(&fullscreen, &optimal, &other_desktop);
        assert_relative_eq!(with_bonus - without_bonus, 0.1, epsilon = 1e-3);

        // Windowed combos never receive the desktop bonus.
        let windowed_a = rank_combo(&base_combo(), &windowed_optimal(), &desktop());
        let windowed_b = rank_combo(&base_combo(), &windowed_optimal(), &other_desktop);
        assert_relative_eq!(windowed_a, windowed_b, epsilon = 1e-6);
    }

    #[test]
    fn ranking_is_pure() {
        let combo = base_combo();
        let optimal = windowed_optimal();
        let first = rank_combo(&combo, &optimal, &desktop());
        let second = rank_combo(&combo, &optimal, &desktop());
        assert_eq!(first, second);
    }
}
