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

//! The device configuration value consumed and produced by negotiation.

use serde::{Deserialize, Serialize};

use crate::device::{
    DepthStencilFormat, DeviceKind, MultisampleKind, PresentFlags, PresentInterval, SurfaceFormat,
    SwapEffect, VertexProcessing,
};

/// Default back-buffer width used when a windowed request leaves the
/// resolution unconstrained.
pub const DEFAULT_WIDTH: u32 = 640;

/// Default back-buffer height used when a windowed request leaves the
/// resolution unconstrained.
pub const DEFAULT_HEIGHT: u32 = 480;

/// A complete description of a display device configuration.
///
/// The same type serves as the *requested* configuration handed to
/// [`negotiate`](crate::negotiate) and the *resolved* configuration it
/// returns. Resolution never mutates its input; it always produces a
/// fresh value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeviceConfig {
    /// Zero-based ordinal of the display adapter.
    pub adapter_ordinal: u32,
    /// The kind of device to create on that adapter.
    pub device_kind: DeviceKind,
    /// Windowed (`true`) or exclusive full-screen (`false`).
    pub windowed: bool,
    /// The display/adapter surface format.
    pub adapter_format: SurfaceFormat,
    /// Vertex processing behavior flags.
    pub vertex_processing: VertexProcessing,
    /// Back-buffer width in pixels.
    pub width: u32,
    /// Back-buffer height in pixels.
    pub height: u32,
    /// Back-buffer pixel format.
    pub back_buffer_format: SurfaceFormat,
    /// Number of back buffers in the swap chain.
    pub back_buffer_count: u32,
    /// Multisample antialiasing scheme.
    pub multisample: MultisampleKind,
    /// Quality level within the multisample scheme.
    pub multisample_quality: u32,
    /// How presented frames reach the screen.
    pub swap_effect: SwapEffect,
    /// Depth/stencil buffer format, `None` when depth/stencil is disabled.
    pub depth_stencil: Option<DepthStencilFormat>,
    /// Presentation behavior flags.
    pub present_flags: PresentFlags,
    /// Full-screen refresh rate in Hz, 0 for adapter default. Always 0
    /// when windowed.
    pub refresh_hz: u32,
    /// Presentation/vsync interval.
    pub present_interval: PresentInterval,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            adapter_ordinal: 0,
            device_kind: DeviceKind::Hardware,
            windowed: true,
            adapter_format: SurfaceFormat::Unknown,
            vertex_processing: VertexProcessing::HARDWARE,
            width: 0,
            height: 0,
            back_buffer_format: SurfaceFormat::Unknown,
            back_buffer_count: 0,
            multisample: MultisampleKind::None,
            multisample_quality: 0,
            swap_effect: SwapEffect::Discard,
            depth_stencil: None,
            present_flags: PresentFlags::EMPTY,
            refresh_hz: 0,
            present_interval: PresentInterval::Default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_survives_serialization() {
        let config = DeviceConfig {
            windowed: false,
            adapter_format: SurfaceFormat::X8R8G8B8,
            width: 1024,
            height: 768,
            back_buffer_format: SurfaceFormat::X8R8G8B8,
            back_buffer_count: 2,
            multisample: MultisampleKind::FourSamples,
            depth_stencil: Some(DepthStencilFormat::D24S8),
            present_flags: PresentFlags::DISCARD_DEPTH_STENCIL,
            refresh_hz: 60,
            ..DeviceConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let restored: DeviceConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }
}
