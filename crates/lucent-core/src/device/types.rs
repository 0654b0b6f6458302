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

//! Device attribute enumerations and the display-mode value type.

use serde::{Deserialize, Serialize};

use crate::lucent_bitflags;
use crate::device::SurfaceFormat;

/// The kind of device driving a display adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DeviceKind {
    /// Hardware rasterization, the normal case.
    #[default]
    Hardware,
    /// The slow but exact reference rasterizer.
    Reference,
    /// A pluggable software rasterizer.
    Software,
}

/// How the contents of the back buffer reach the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SwapEffect {
    /// Back-buffer contents are discarded after presentation.
    #[default]
    Discard,
    /// Back buffers rotate through a flip chain.
    Flip,
    /// Contents are copied to the front buffer.
    Copy,
}

/// How presentation is synchronized with the display refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PresentInterval {
    /// Present as soon as possible, ignoring vertical sync.
    Immediate,
    /// The platform's default synchronization, usually one vsync.
    #[default]
    Default,
    /// Wait for one vertical sync.
    One,
    /// Wait for two vertical syncs.
    Two,
    /// Wait for three vertical syncs.
    Three,
    /// Wait for four vertical syncs.
    Four,
}

/// The multisample antialiasing scheme of a render target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MultisampleKind {
    /// No multisampling.
    #[default]
    None,
    /// Quality-level based antialiasing without a fixed sample count.
    NonMaskable,
    /// 2x multisampling.
    TwoSamples,
    /// 3x multisampling.
    ThreeSamples,
    /// 4x multisampling.
    FourSamples,
    /// 5x multisampling.
    FiveSamples,
    /// 6x multisampling.
    SixSamples,
    /// 7x multisampling.
    SevenSamples,
    /// 8x multisampling.
    EightSamples,
    /// 9x multisampling.
    NineSamples,
    /// 10x multisampling.
    TenSamples,
    /// 11x multisampling.
    ElevenSamples,
    /// 12x multisampling.
    TwelveSamples,
    /// 13x multisampling.
    ThirteenSamples,
    /// 14x multisampling.
    FourteenSamples,
    /// 15x multisampling.
    FifteenSamples,
    /// 16x multisampling.
    SixteenSamples,
}

impl MultisampleKind {
    /// Numeric position of the kind, used as the distance metric when the
    /// resolver searches for the closest supported type.
    pub fn samples(self) -> u32 {
        match self {
            MultisampleKind::None => 0,
            MultisampleKind::NonMaskable => 1,
            MultisampleKind::TwoSamples => 2,
            MultisampleKind::ThreeSamples => 3,
            MultisampleKind::FourSamples => 4,
            MultisampleKind::FiveSamples => 5,
            MultisampleKind::SixSamples => 6,
            MultisampleKind::SevenSamples => 7,
            MultisampleKind::EightSamples => 8,
            MultisampleKind::NineSamples => 9,
            MultisampleKind::TenSamples => 10,
            MultisampleKind::ElevenSamples => 11,
            MultisampleKind::TwelveSamples => 12,
            MultisampleKind::ThirteenSamples => 13,
            MultisampleKind::FourteenSamples => 14,
            MultisampleKind::FifteenSamples => 15,
            MultisampleKind::SixteenSamples => 16,
        }
    }
}

lucent_bitflags! {
    /// Where vertex processing runs for a device.
    #[derive(Serialize, Deserialize)]
    pub struct VertexProcessing: u32 {
        /// Vertices are transformed on the CPU.
        const SOFTWARE = 1 << 0;
        /// Vertices are transformed by the GPU.
        const HARDWARE = 1 << 1;
        /// Per-call switching between software and hardware.
        const MIXED = 1 << 2;
        /// Hardware-only, no software fallback state kept.
        const PURE = 1 << 3;
    }
}

lucent_bitflags! {
    /// Behavior flags for the presentation chain.
    #[derive(Serialize, Deserialize)]
    pub struct PresentFlags: u32 {
        /// The depth/stencil buffer may be discarded after presenting.
        const DISCARD_DEPTH_STENCIL = 1 << 0;
        /// The back buffer must stay CPU-lockable.
        const LOCKABLE_BACK_BUFFER = 1 << 1;
        /// The swap chain carries video content.
        const VIDEO = 1 << 2;
    }
}

/// One display mode supported by an adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct DisplayMode {
    /// Horizontal resolution in pixels.
    pub width: u32,
    /// Vertical resolution in pixels.
    pub height: u32,
    /// Refresh rate in Hz, 0 when unknown or adapter default.
    pub refresh_hz: u32,
    /// Pixel format of the mode.
    pub format: SurfaceFormat,
}
