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

//! The device realization interface the framework drives.
//!
//! A realizer is the platform backend that can actually create, reset,
//! and present on a device for a resolved configuration. The framework
//! never touches a platform API directly; everything goes through this
//! trait.

use std::fmt;

use lucent_core::DeviceConfig;

/// Whether a lost device can be worked with again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CooperativeLevel {
    /// The device is fine and can render.
    Operational,
    /// The device is lost and cannot be reset yet; keep waiting.
    Lost,
    /// The device is lost but ready to be reset.
    ResetReady,
}

/// Failures raised by a [`DeviceRealizer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RealizeError {
    /// The device was lost; recoverable by waiting and resetting.
    DeviceLost,
    /// The driver failed internally; the framework attempts a reset as
    /// if the device were lost.
    DriverInternalError,
    /// Device construction failed outright.
    CreationFailed(String),
}

impl fmt::Display for RealizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RealizeError::DeviceLost => write!(f, "the device has been lost"),
            RealizeError::DriverInternalError => write!(f, "internal driver error"),
            RealizeError::CreationFailed(reason) => {
                write!(f, "failed to create the device: {reason}")
            }
        }
    }
}

impl std::error::Error for RealizeError {}

/// Platform backend that realizes resolved configurations into devices.
pub trait DeviceRealizer {
    /// The platform device handle.
    type Device;

    /// Creates a new device for the configuration.
    fn create(&mut self, config: &DeviceConfig) -> Result<Self::Device, RealizeError>;

    /// Resets an existing device in place to the configuration.
    fn reset(&mut self, device: &mut Self::Device, config: &DeviceConfig)
        -> Result<(), RealizeError>;

    /// Polls whether a device is usable, still lost, or ready for reset.
    fn cooperative_level(&mut self, device: &Self::Device) -> CooperativeLevel;

    /// Presents the rendered frame.
    fn present(&mut self, device: &mut Self::Device) -> Result<(), RealizeError>;
}
