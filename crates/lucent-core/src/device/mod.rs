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

//! The display-device data model: surface and depth/stencil formats,
//! device attributes, display modes, and the [`DeviceConfig`] value that
//! negotiation consumes and produces.

mod config;
mod format;
mod types;

pub use config::{DeviceConfig, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use format::{DepthStencilFormat, SurfaceFormat};
pub use types::{
    DeviceKind, DisplayMode, MultisampleKind, PresentFlags, PresentInterval, SwapEffect,
    VertexProcessing,
};
