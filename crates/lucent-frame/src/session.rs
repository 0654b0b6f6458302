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

//! The live device session.

use lucent_core::DeviceConfig;

/// A realized device together with the configuration that produced it.
///
/// At most one session is live per framework instance. A session is
/// replaced on full recreation, never mutated into a different device.
#[derive(Debug)]
pub struct DeviceSession<D> {
    pub(crate) device: D,
    pub(crate) config: DeviceConfig,
    /// Subscribers have successfully built their device-bound objects.
    pub(crate) objects_created: bool,
    /// Subscribers have successfully rebuilt their swap-chain objects.
    pub(crate) objects_reset: bool,
}

impl<D> DeviceSession<D> {
    pub(crate) fn new(device: D, config: DeviceConfig) -> Self {
        Self {
            device,
            config,
            objects_created: false,
            objects_reset: false,
        }
    }

    /// The live device handle.
    pub fn device(&self) -> &D {
        &self.device
    }

    /// Mutable access to the live device handle.
    pub fn device_mut(&mut self) -> &mut D {
        &mut self.device
    }

    /// The resolved configuration the device was realized from.
    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }
}
