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

//! The capability catalog: an immutable snapshot of what the machine's
//! adapters and devices can actually do.
//!
//! Negotiation only ever *reads* a catalog. How the data is enumerated is
//! the embedder's business; [`StaticCatalog`] covers the common case of
//! enumerating once up front.

use serde::{Deserialize, Serialize};

use crate::device::{
    DepthStencilFormat, DeviceKind, DisplayMode, MultisampleKind, PresentInterval, SurfaceFormat,
};

/// Capability flags reported by a device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeviceCaps {
    /// Whether the device can transform and light vertices in hardware.
    pub hardware_transform_and_light: bool,
}

/// One realizable combination of adapter format, back-buffer format,
/// device kind, and windowed mode, together with everything supported
/// under that combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapabilityCombo {
    /// Ordinal of the adapter this combo belongs to.
    pub adapter_ordinal: u32,
    /// Kind of the device this combo belongs to.
    pub device_kind: DeviceKind,
    /// The adapter (display) format of the combo.
    pub adapter_format: SurfaceFormat,
    /// The back-buffer format of the combo.
    pub back_buffer_format: SurfaceFormat,
    /// Whether the combo is windowed or exclusive full-screen.
    pub windowed: bool,
    /// Display modes of the adapter whose format matches
    /// `adapter_format`, in enumeration order.
    pub display_modes: Vec<DisplayMode>,
    /// Supported multisample kinds paired with the number of quality
    /// levels available for each, in enumeration order.
    pub multisample: Vec<(MultisampleKind, u32)>,
    /// Depth/stencil formats compatible with the combo. Empty means the
    /// combo cannot carry a depth/stencil buffer.
    pub depth_stencil_formats: Vec<DepthStencilFormat>,
    /// Present intervals the combo supports.
    pub present_intervals: Vec<PresentInterval>,
    /// Capabilities of the owning device.
    pub caps: DeviceCaps,
}

impl CapabilityCombo {
    /// Quality levels available for `kind`, or `None` when the kind is
    /// unsupported.
    pub fn multisample_quality_levels(&self, kind: MultisampleKind) -> Option<u32> {
        self.multisample
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, levels)| *levels)
    }
}

/// A device enumerated on an adapter, with its capability combos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// The kind of the device.
    pub kind: DeviceKind,
    /// Capabilities of the device.
    pub caps: DeviceCaps,
    /// The device's realizable combos, in enumeration order.
    pub combos: Vec<CapabilityCombo>,
}

/// A display adapter and everything enumerated on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdapterInfo {
    /// Zero-based adapter ordinal.
    pub ordinal: u32,
    /// The current desktop display mode of the adapter.
    pub desktop_mode: DisplayMode,
    /// Usable desktop work-area width, for windowed size clamping.
    pub work_area_width: u32,
    /// Usable desktop work-area height, for windowed size clamping.
    pub work_area_height: u32,
    /// Devices available on the adapter, in enumeration order.
    pub devices: Vec<DeviceInfo>,
}

/// Read access to the enumerated capabilities of a machine.
///
/// Implementations must present a stable snapshot for the duration of a
/// negotiation; the adapter, device, and combo orderings decide which of
/// several equally-ranked combos wins.
pub trait CapabilityCatalog {
    /// All enumerated adapters, in ordinal order.
    fn adapters(&self) -> &[AdapterInfo];
}

/// A catalog backed by a plain vector, for embedders that enumerate up
/// front and for tests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticCatalog {
    adapters: Vec<AdapterInfo>,
}

impl StaticCatalog {
    /// Creates a catalog from pre-enumerated adapters.
    pub fn new(adapters: Vec<AdapterInfo>) -> Self {
        Self { adapters }
    }
}

impl CapabilityCatalog for StaticCatalog {
    fn adapters(&self) -> &[AdapterInfo] {
        &self.adapters
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multisample_quality_lookup() {
        let combo = CapabilityCombo {
            adapter_ordinal: 0,
            device_kind: DeviceKind::Hardware,
            adapter_format: SurfaceFormat::X8R8G8B8,
            back_buffer_format: SurfaceFormat::X8R8G8B8,
            windowed: true,
            display_modes: Vec::new(),
            multisample: vec![
                (MultisampleKind::None, 1),
                (MultisampleKind::FourSamples, 4),
            ],
            depth_stencil_formats: Vec::new(),
            present_intervals: Vec::new(),
            caps: DeviceCaps::default(),
        };
        assert_eq!(
            combo.multisample_quality_levels(MultisampleKind::FourSamples),
            Some(4)
        );
        assert_eq!(
            combo.multisample_quality_levels(MultisampleKind::TwoSamples),
            None
        );
    }
}
