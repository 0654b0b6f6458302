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

//! Process exit codes for top-level failure categories.

use crate::error::FrameworkError;

/// Small integer codes a host process can surface for each top-level
/// failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Clean shutdown.
    Success = 0,
    /// A failure outside the named categories.
    Generic = 1,
    /// No compatible device configuration was found.
    NoCompatibleConfiguration = 3,
    /// Creating the device failed.
    CreatingDevice = 6,
    /// Resetting the device failed.
    ResettingDevice = 7,
    /// A subscriber failed to create its device objects.
    CreatingDeviceObjects = 8,
    /// A subscriber failed to reset its device objects.
    ResettingDeviceObjects = 9,
}

impl ExitCode {
    /// The raw code to hand to the host process.
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl From<&FrameworkError> for ExitCode {
    fn from(err: &FrameworkError) -> Self {
        match err {
            FrameworkError::Negotiation(_) => ExitCode::NoCompatibleConfiguration,
            FrameworkError::CreatingDevice(_) => ExitCode::CreatingDevice,
            FrameworkError::ResettingDevice(_) => ExitCode::ResettingDevice,
            FrameworkError::CreatingDeviceObjects(_) => ExitCode::CreatingDeviceObjects,
            FrameworkError::ResettingDeviceObjects(_) => ExitCode::ResettingDeviceObjects,
            FrameworkError::Presenting(_) | FrameworkError::Reentered => ExitCode::Generic,
        }
    }
}
