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

//! End-to-end negotiation scenarios over hand-built catalogs.

use lucent_core::catalog::{AdapterInfo, CapabilityCombo, DeviceCaps, DeviceInfo, StaticCatalog};
use lucent_core::device::{
    DepthStencilFormat, DeviceConfig, DeviceKind, DisplayMode, MultisampleKind, PresentInterval,
    SurfaceFormat, SwapEffect, VertexProcessing,
};
use lucent_core::{negotiate, MatchOption, MatchPolicy, NegotiationError};

fn mode(width: u32, height: u32, refresh_hz: u32) -> DisplayMode {
    DisplayMode {
        width,
        height,
        refresh_hz,
        format: SurfaceFormat::X8R8G8B8,
    }
}

fn hardware_combo(windowed: bool) -> CapabilityCombo {
    CapabilityCombo {
        adapter_ordinal: 0,
        device_kind: DeviceKind::Hardware,
        adapter_format: SurfaceFormat::X8R8G8B8,
        back_buffer_format: SurfaceFormat::X8R8G8B8,
        windowed,
        display_modes: vec![mode(800, 600, 60), mode(1024, 768, 60), mode(1024, 768, 85)],
        multisample: vec![
            (MultisampleKind::None, 1),
            (MultisampleKind::TwoSamples, 2),
            (MultisampleKind::FourSamples, 4),
        ],
        depth_stencil_formats: vec![DepthStencilFormat::D16, DepthStencilFormat::D24S8],
        present_intervals: vec![PresentInterval::Immediate, PresentInterval::Default],
        caps: DeviceCaps {
            hardware_transform_and_light: true,
        },
    }
}

fn single_device_catalog(combos: Vec<CapabilityCombo>) -> StaticCatalog {
    let kind = combos.first().map_or(DeviceKind::Hardware, |c| c.device_kind);
    let caps = combos.first().map_or(DeviceCaps::default(), |c| c.caps);
    StaticCatalog::new(vec![AdapterInfo {
        ordinal: 0,
        desktop_mode: mode(1280, 1024, 60),
        work_area_width: 1280,
        work_area_height: 984,
        devices: vec![DeviceInfo { kind, caps, combos }],
    }])
}

#[test]
fn preserve_is_absolute() {
    // A preserved attribute either survives verbatim or negotiation
    // fails; it is never silently adjusted.
    let catalog = single_device_catalog(vec![hardware_combo(true)]);
    let requested = DeviceConfig {
        back_buffer_format: SurfaceFormat::X8R8G8B8,
        ..DeviceConfig::default()
    };
    let policy = MatchPolicy {
        back_buffer_format: MatchOption::Preserve,
        ..MatchPolicy::default()
    };
    let resolved = negotiate(&requested, &policy, &catalog).unwrap();
    assert_eq!(resolved.back_buffer_format, SurfaceFormat::X8R8G8B8);

    let refresh_policy = MatchPolicy {
        refresh_rate: MatchOption::Preserve,
        windowed: MatchOption::Preserve,
        ..MatchPolicy::default()
    };
    let fullscreen_catalog = single_device_catalog(vec![hardware_combo(false)]);
    let requested = DeviceConfig {
        windowed: false,
        refresh_hz: 85,
        ..DeviceConfig::default()
    };
    let resolved = negotiate(&requested, &refresh_policy, &fullscreen_catalog).unwrap();
    assert_eq!(resolved.refresh_hz, 85);
}

#[test]
fn ignore_defaults_are_deterministic() {
    // Identical inputs under an all-Ignore policy give identical
    // outputs.
    let catalog = single_device_catalog(vec![hardware_combo(true)]);
    let requested = DeviceConfig::default();
    let first = negotiate(&requested, &MatchPolicy::default(), &catalog).unwrap();
    let second = negotiate(&requested, &MatchPolicy::default(), &catalog).unwrap();
    assert_eq!(first, second);
}

#[test]
fn closest_never_resolves_unsupported_values() {
    // Under ClosestToInput the resolved value is always drawn from
    // the winning combo's supported set (or depth/stencil is disabled).
    let combo = hardware_combo(false);
    let catalog = single_device_catalog(vec![combo.clone()]);
    let requested = DeviceConfig {
        windowed: false,
        width: 999,
        height: 701,
        multisample: MultisampleKind::SixteenSamples,
        multisample_quality: 9,
        depth_stencil: Some(DepthStencilFormat::D32),
        refresh_hz: 90,
        present_interval: PresentInterval::Three,
        ..DeviceConfig::default()
    };
    let policy = MatchPolicy {
        windowed: MatchOption::Preserve,
        ..MatchPolicy::all_closest()
    };
    let resolved = negotiate(&requested, &policy, &catalog).unwrap();

    assert!(combo
        .display_modes
        .iter()
        .any(|m| m.width == resolved.width && m.height == resolved.height));
    assert!(combo
        .multisample
        .iter()
        .any(|(kind, _)| *kind == resolved.multisample));
    match resolved.depth_stencil {
        Some(format) => assert!(combo.depth_stencil_formats.contains(&format)),
        None => {}
    }
    assert!(
        resolved.refresh_hz == 0
            || combo
                .display_modes
                .iter()
                .any(|m| m.refresh_hz == resolved.refresh_hz)
    );
    assert!(combo.present_intervals.contains(&resolved.present_interval));
}

#[test]
fn multisample_is_off_unless_swap_effect_discards() {
    // The gate applies to the resolved swap effect, not the requested one.
    let catalog = single_device_catalog(vec![hardware_combo(true)]);
    let requested = DeviceConfig {
        swap_effect: SwapEffect::Copy,
        multisample: MultisampleKind::FourSamples,
        multisample_quality: 1,
        ..DeviceConfig::default()
    };
    let policy = MatchPolicy {
        swap_effect: MatchOption::Preserve,
        multisample: MatchOption::Preserve,
        ..MatchPolicy::default()
    };
    let resolved = negotiate(&requested, &policy, &catalog).unwrap();
    assert_eq!(resolved.swap_effect, SwapEffect::Copy);
    assert_eq!(resolved.multisample, MultisampleKind::None);
    assert_eq!(resolved.multisample_quality, 0);

    // A requested non-discard effect that the policy ignores resolves to
    // discard, which leaves multisampling available.
    let ignored_swap = MatchPolicy {
        multisample: MatchOption::Preserve,
        ..MatchPolicy::default()
    };
    let resolved = negotiate(&requested, &ignored_swap, &catalog).unwrap();
    assert_eq!(resolved.swap_effect, SwapEffect::Discard);
    assert_eq!(resolved.multisample, MultisampleKind::FourSamples);
}

#[test]
fn windowed_configs_match_the_desktop_format() {
    // A windowed combo with a non-desktop adapter format is rejected
    // structurally, so the winner always matches the desktop.
    let mut off_desktop = hardware_combo(true);
    off_desktop.adapter_format = SurfaceFormat::R5G6B5;
    off_desktop.back_buffer_format = SurfaceFormat::R5G6B5;
    let catalog = single_device_catalog(vec![off_desktop, hardware_combo(true)]);

    let resolved = negotiate(&DeviceConfig::default(), &MatchPolicy::default(), &catalog).unwrap();
    assert!(resolved.windowed);
    assert_eq!(resolved.adapter_format, SurfaceFormat::X8R8G8B8);
}

#[test]
fn ranking_picks_the_strictly_better_combo() {
    // Adding closeness on one weighted attribute flips the winner;
    // equal scores keep the first combo in enumeration order.
    let mut no_multisample = hardware_combo(true);
    no_multisample.multisample = vec![(MultisampleKind::None, 1)];
    let with_multisample = hardware_combo(true);

    let requested = DeviceConfig {
        multisample: MultisampleKind::FourSamples,
        multisample_quality: 0,
        ..DeviceConfig::default()
    };
    let policy = MatchPolicy {
        multisample: MatchOption::ClosestToInput,
        ..MatchPolicy::default()
    };

    let catalog = single_device_catalog(vec![no_multisample.clone(), with_multisample.clone()]);
    let resolved = negotiate(&requested, &policy, &catalog).unwrap();
    assert_eq!(resolved.multisample, MultisampleKind::FourSamples);

    // Two identical combos: the first one wins, observable through the
    // deterministic result of repeated runs.
    let catalog = single_device_catalog(vec![with_multisample.clone(), with_multisample]);
    let first = negotiate(&requested, &policy, &catalog).unwrap();
    let second = negotiate(&requested, &policy, &catalog).unwrap();
    assert_eq!(first, second);
}

#[test]
fn lone_combo_resolves_to_defaults() {
    // One windowed combo, everything ignored.
    let combo = CapabilityCombo {
        display_modes: vec![mode(800, 600, 0)],
        multisample: vec![(MultisampleKind::None, 1)],
        depth_stencil_formats: vec![DepthStencilFormat::D16],
        ..hardware_combo(true)
    };
    let catalog = single_device_catalog(vec![combo]);

    let resolved = negotiate(&DeviceConfig::default(), &MatchPolicy::default(), &catalog).unwrap();
    assert_eq!(resolved.adapter_ordinal, 0);
    assert_eq!(resolved.device_kind, DeviceKind::Hardware);
    assert!(resolved.windowed);
    assert_eq!((resolved.width, resolved.height), (640, 480));
    assert_eq!(resolved.depth_stencil, Some(DepthStencilFormat::D16));
    assert_eq!(resolved.swap_effect, SwapEffect::Discard);
    assert_eq!(resolved.back_buffer_count, 2);
    assert_eq!(resolved.refresh_hz, 0);
}

#[test]
fn unobtainable_preserved_format_fails() {
    let catalog = single_device_catalog(vec![hardware_combo(true)]);
    let requested = DeviceConfig {
        back_buffer_format: SurfaceFormat::A2R10G10B10,
        ..DeviceConfig::default()
    };
    let policy = MatchPolicy {
        back_buffer_format: MatchOption::Preserve,
        ..MatchPolicy::default()
    };
    assert_eq!(
        negotiate(&requested, &policy, &catalog),
        Err(NegotiationError::NoCompatibleConfiguration)
    );
}

#[test]
fn hardware_device_wins_ties_against_reference() {
    // Identical combos except the device kind; the requested
    // kind matches neither, so the hardware preference bonus decides.
    let mut reference = hardware_combo(true);
    reference.device_kind = DeviceKind::Reference;
    let hardware = hardware_combo(true);

    let catalog = StaticCatalog::new(vec![AdapterInfo {
        ordinal: 0,
        desktop_mode: mode(1280, 1024, 60),
        work_area_width: 1280,
        work_area_height: 984,
        devices: vec![
            DeviceInfo {
                kind: DeviceKind::Reference,
                caps: reference.caps,
                combos: vec![reference],
            },
            DeviceInfo {
                kind: DeviceKind::Hardware,
                caps: hardware.caps,
                combos: vec![hardware],
            },
        ],
    }]);

    let requested = DeviceConfig {
        device_kind: DeviceKind::Software,
        ..DeviceConfig::default()
    };
    let policy = MatchPolicy {
        device_kind: MatchOption::ClosestToInput,
        ..MatchPolicy::default()
    };
    let resolved = negotiate(&requested, &policy, &catalog).unwrap();
    assert_eq!(resolved.device_kind, DeviceKind::Hardware);
}

#[test]
fn closest_swap_effect_keeps_any_valid_effect() {
    // Swap effects carry no capability data, so closest-match
    // validation is against the enum itself and "copy" passes through.
    let catalog = single_device_catalog(vec![hardware_combo(true)]);
    let requested = DeviceConfig {
        swap_effect: SwapEffect::Copy,
        ..DeviceConfig::default()
    };
    let policy = MatchPolicy {
        swap_effect: MatchOption::ClosestToInput,
        ..MatchPolicy::default()
    };
    let resolved = negotiate(&requested, &policy, &catalog).unwrap();
    assert_eq!(resolved.swap_effect, SwapEffect::Copy);
}

#[test]
fn empty_catalog_finds_nothing() {
    let catalog = StaticCatalog::new(Vec::new());
    assert_eq!(
        negotiate(&DeviceConfig::default(), &MatchPolicy::default(), &catalog),
        Err(NegotiationError::NoCompatibleConfiguration)
    );
}

#[test]
fn second_adapter_is_reachable_under_preserved_ordinal() {
    let mut remote = hardware_combo(true);
    remote.adapter_ordinal = 1;
    let catalog = StaticCatalog::new(vec![
        AdapterInfo {
            ordinal: 0,
            desktop_mode: mode(1280, 1024, 60),
            work_area_width: 1280,
            work_area_height: 984,
            devices: vec![DeviceInfo {
                kind: DeviceKind::Hardware,
                caps: DeviceCaps {
                    hardware_transform_and_light: true,
                },
                combos: vec![hardware_combo(true)],
            }],
        },
        AdapterInfo {
            ordinal: 1,
            desktop_mode: mode(1280, 1024, 60),
            work_area_width: 1280,
            work_area_height: 984,
            devices: vec![DeviceInfo {
                kind: DeviceKind::Hardware,
                caps: remote.caps,
                combos: vec![remote],
            }],
        },
    ]);

    let requested = DeviceConfig {
        adapter_ordinal: 1,
        ..DeviceConfig::default()
    };
    let policy = MatchPolicy {
        adapter_ordinal: MatchOption::Preserve,
        ..MatchPolicy::default()
    };
    let resolved = negotiate(&requested, &policy, &catalog).unwrap();
    assert_eq!(resolved.adapter_ordinal, 1);
}

#[test]
fn resolved_vertex_processing_downgrades_on_software_devices() {
    let mut soft = hardware_combo(true);
    soft.caps.hardware_transform_and_light = false;
    let catalog = StaticCatalog::new(vec![AdapterInfo {
        ordinal: 0,
        desktop_mode: mode(1280, 1024, 60),
        work_area_width: 1280,
        work_area_height: 984,
        devices: vec![DeviceInfo {
            kind: DeviceKind::Hardware,
            caps: soft.caps,
            combos: vec![soft],
        }],
    }]);

    let requested = DeviceConfig {
        vertex_processing: VertexProcessing::HARDWARE,
        ..DeviceConfig::default()
    };
    let policy = MatchPolicy {
        vertex_processing: MatchOption::ClosestToInput,
        ..MatchPolicy::default()
    };
    let resolved = negotiate(&requested, &policy, &catalog).unwrap();
    assert_eq!(resolved.vertex_processing, VertexProcessing::SOFTWARE);
}
