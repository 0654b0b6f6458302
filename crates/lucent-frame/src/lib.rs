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

//! # Lucent Frame
//!
//! The device lifecycle driver. [`DeviceFramework`] owns the single live
//! [`DeviceSession`], decides between in-place reset and full recreation
//! when a new configuration is adopted, recovers lost devices from the
//! render loop, and delivers ordered lifecycle notifications to
//! registered subscribers.

#![warn(missing_docs)]

pub mod error;
pub mod exit;
pub mod lifecycle;
pub mod pause;
pub mod realize;
pub mod session;
pub mod subscriber;

pub use error::FrameworkError;
pub use exit::ExitCode;
pub use lifecycle::{DeviceFramework, FrameOutcome};
pub use pause::PauseState;
pub use realize::{CooperativeLevel, DeviceRealizer, RealizeError};
pub use session::DeviceSession;
pub use subscriber::{DeviceEventSubscriber, SubscriberError, SubscriberSet};
