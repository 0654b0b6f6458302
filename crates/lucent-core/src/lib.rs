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

//! # Lucent Core
//!
//! Foundational crate with the display-device data model, the capability
//! catalog contract, and the negotiation engine that turns a requested
//! configuration plus a per-attribute match policy into a configuration
//! that is guaranteed realizable on the machine's enumerated hardware.

#![warn(missing_docs)]

pub mod catalog;
pub mod device;
pub mod error;
pub mod negotiation;
pub mod utils;

pub use catalog::{AdapterInfo, CapabilityCatalog, CapabilityCombo, DeviceInfo, StaticCatalog};
pub use device::{DeviceConfig, DisplayMode};
pub use error::NegotiationError;
pub use negotiation::{negotiate, MatchOption, MatchPolicy};
