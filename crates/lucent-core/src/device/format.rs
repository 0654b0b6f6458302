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

//! Pixel formats for display surfaces and depth/stencil buffers.

use serde::{Deserialize, Serialize};

/// The memory format of pixels in a display surface or back buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SurfaceFormat {
    /// 24-bit RGB, 8 bits per channel.
    R8G8B8,
    /// 32-bit ARGB, 8 bits per color channel.
    A8R8G8B8,
    /// 32-bit RGB, 8 bits per color channel, high byte unused.
    X8R8G8B8,
    /// 16-bit RGB, 5-6-5 bit split.
    R5G6B5,
    /// 16-bit RGB, 5 bits per color channel, high bit unused.
    X1R5G5B5,
    /// 16-bit ARGB, 5 bits per color channel, 1 alpha bit.
    A1R5G5B5,
    /// 16-bit ARGB, 4 bits per channel.
    A4R4G4B4,
    /// 32-bit ARGB, 10 bits per color channel, 2 alpha bits.
    A2R10G10B10,
    /// 32-bit ABGR, 10 bits per color channel, 2 alpha bits.
    A2B10G10R10,
    /// An unknown or unspecified format.
    #[default]
    Unknown,
}

impl SurfaceFormat {
    /// Number of bits per color channel.
    ///
    /// This drives the partial-credit closeness rule used by the combo
    /// ranker and the depth-precision default in the target builder.
    pub fn color_bits(self) -> u32 {
        match self {
            SurfaceFormat::R8G8B8 | SurfaceFormat::A8R8G8B8 | SurfaceFormat::X8R8G8B8 => 8,
            SurfaceFormat::R5G6B5 | SurfaceFormat::X1R5G5B5 | SurfaceFormat::A1R5G5B5 => 5,
            SurfaceFormat::A4R4G4B4 => 4,
            SurfaceFormat::A2R10G10B10 | SurfaceFormat::A2B10G10R10 => 10,
            SurfaceFormat::Unknown => 0,
        }
    }
}

/// The format of a depth/stencil buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DepthStencilFormat {
    /// 16-bit depth, no stencil.
    D16,
    /// 15-bit depth, 1-bit stencil.
    D15S1,
    /// 24-bit depth, 8 unused bits.
    D24X8,
    /// 24-bit depth, 8-bit stencil.
    D24S8,
    /// 24-bit depth, 4-bit stencil, 4 unused bits.
    D24X4S4,
    /// 32-bit depth, no stencil.
    D32,
}

impl DepthStencilFormat {
    /// Number of depth bits in the format.
    pub fn depth_bits(self) -> u32 {
        match self {
            DepthStencilFormat::D16 => 16,
            DepthStencilFormat::D15S1 => 15,
            DepthStencilFormat::D24X8
            | DepthStencilFormat::D24S8
            | DepthStencilFormat::D24X4S4 => 24,
            DepthStencilFormat::D32 => 32,
        }
    }

    /// Number of stencil bits in the format.
    pub fn stencil_bits(self) -> u32 {
        match self {
            DepthStencilFormat::D16 | DepthStencilFormat::D24X8 | DepthStencilFormat::D32 => 0,
            DepthStencilFormat::D15S1 => 1,
            DepthStencilFormat::D24X4S4 => 4,
            DepthStencilFormat::D24S8 => 8,
        }
    }
}
