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

//! Error types for the lifecycle framework.

use std::fmt;

use lucent_core::NegotiationError;

use crate::realize::RealizeError;
use crate::subscriber::SubscriberError;

/// Failures surfaced by [`DeviceFramework`](crate::DeviceFramework)
/// operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameworkError {
    /// Capability negotiation found no realizable configuration.
    Negotiation(NegotiationError),
    /// The realizer failed to construct a device.
    CreatingDevice(RealizeError),
    /// An in-place reset failed for a non-loss reason and the recovery
    /// recreation failed as well.
    ResettingDevice(RealizeError),
    /// A subscriber failed while building its device-bound objects.
    CreatingDeviceObjects(SubscriberError),
    /// A subscriber failed while rebuilding its swap-chain objects.
    ResettingDeviceObjects(SubscriberError),
    /// Presentation failed for a reason other than device loss.
    Presenting(RealizeError),
    /// A lifecycle operation was entered while another was in progress.
    Reentered,
}

impl fmt::Display for FrameworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameworkError::Negotiation(err) => write!(f, "negotiation failed: {err}"),
            FrameworkError::CreatingDevice(err) => write!(f, "creating the device failed: {err}"),
            FrameworkError::ResettingDevice(err) => {
                write!(f, "resetting the device failed: {err}")
            }
            FrameworkError::CreatingDeviceObjects(err) => {
                write!(f, "creating device objects failed: {err}")
            }
            FrameworkError::ResettingDeviceObjects(err) => {
                write!(f, "resetting device objects failed: {err}")
            }
            FrameworkError::Presenting(err) => write!(f, "presentation failed: {err}"),
            FrameworkError::Reentered => {
                write!(f, "a lifecycle operation was reentered while one was in progress")
            }
        }
    }
}

impl std::error::Error for FrameworkError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FrameworkError::Negotiation(err) => Some(err),
            FrameworkError::CreatingDevice(err)
            | FrameworkError::ResettingDevice(err)
            | FrameworkError::Presenting(err) => Some(err),
            FrameworkError::CreatingDeviceObjects(err)
            | FrameworkError::ResettingDeviceObjects(err) => Some(err),
            FrameworkError::Reentered => None,
        }
    }
}

impl From<NegotiationError> for FrameworkError {
    fn from(err: NegotiationError) -> Self {
        FrameworkError::Negotiation(err)
    }
}
