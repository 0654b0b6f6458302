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

//! Per-attribute match policies governing how strictly a requested value
//! must be honored.

use serde::{Deserialize, Serialize};

/// How strictly one attribute of the request must be honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MatchOption {
    /// Use a domain default, irrespective of the requested value.
    #[default]
    Ignore,
    /// The resolved value must equal the requested value exactly, or the
    /// combo is rejected.
    Preserve,
    /// Use the requested value as a hint; accept the nearest supported
    /// value.
    ClosestToInput,
}

/// One [`MatchOption`] per negotiable attribute.
///
/// `Default` is all-`Ignore`. The named constructors cover the policies
/// the lifecycle layer uses at its standard call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchPolicy {
    /// Policy for the adapter ordinal.
    pub adapter_ordinal: MatchOption,
    /// Policy for the device kind.
    pub device_kind: MatchOption,
    /// Policy for the windowed flag.
    pub windowed: MatchOption,
    /// Policy for the adapter format.
    pub adapter_format: MatchOption,
    /// Policy for the vertex-processing flags.
    pub vertex_processing: MatchOption,
    /// Policy for the back-buffer resolution.
    pub resolution: MatchOption,
    /// Policy for the back-buffer format.
    pub back_buffer_format: MatchOption,
    /// Policy for the back-buffer count.
    pub back_buffer_count: MatchOption,
    /// Policy for the multisample kind and quality.
    pub multisample: MatchOption,
    /// Policy for the swap effect.
    pub swap_effect: MatchOption,
    /// Policy for the depth-bit width of the depth/stencil format.
    pub depth_format: MatchOption,
    /// Policy for the stencil-bit width of the depth/stencil format.
    pub stencil_format: MatchOption,
    /// Policy for the present flags.
    pub present_flags: MatchOption,
    /// Policy for the full-screen refresh rate.
    pub refresh_rate: MatchOption,
    /// Policy for the present interval.
    pub present_interval: MatchOption,
}

impl MatchPolicy {
    /// A policy with the same option for every attribute.
    pub fn uniform(option: MatchOption) -> Self {
        Self {
            adapter_ordinal: option,
            device_kind: option,
            windowed: option,
            adapter_format: option,
            vertex_processing: option,
            resolution: option,
            back_buffer_format: option,
            back_buffer_count: option,
            multisample: option,
            swap_effect: option,
            depth_format: option,
            stencil_format: option,
            present_flags: option,
            refresh_rate: option,
            present_interval: option,
        }
    }

    /// `ClosestToInput` for every attribute.
    pub fn all_closest() -> Self {
        Self::uniform(MatchOption::ClosestToInput)
    }

    /// Policy for the very first negotiation: defaults everywhere, but the
    /// caller's adapter, device kind, and windowed choice are binding.
    pub fn initial() -> Self {
        Self {
            adapter_ordinal: MatchOption::Preserve,
            device_kind: MatchOption::Preserve,
            windowed: MatchOption::Preserve,
            ..Self::default()
        }
    }

    /// Policy for re-negotiating from an existing configuration: stay as
    /// close as possible to what is already in use, on the same adapter
    /// and in the same windowed mode.
    pub fn renegotiate() -> Self {
        Self {
            adapter_ordinal: MatchOption::Preserve,
            windowed: MatchOption::Preserve,
            ..Self::all_closest()
        }
    }

    /// Policy for recovering from desktop-format drift while a windowed
    /// device is lost: the corrected adapter format is binding, everything
    /// else follows the current configuration as closely as possible.
    pub fn format_drift() -> Self {
        Self {
            adapter_ordinal: MatchOption::Preserve,
            device_kind: MatchOption::Preserve,
            windowed: MatchOption::Preserve,
            adapter_format: MatchOption::Preserve,
            ..Self::all_closest()
        }
    }
}
