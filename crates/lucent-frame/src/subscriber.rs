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

//! Ordered lifecycle notifications for device-dependent resources.
//!
//! Resource owners (texture caches, font atlases, effect pools) register
//! a subscriber and get told, in registration order, when the device is
//! created, reset, lost, or about to be destroyed.

use std::fmt;

use lucent_core::DeviceConfig;

/// A failure inside a lifecycle notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriberError {
    message: String,
}

impl SubscriberError {
    /// Creates an error carrying a description of what failed.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for SubscriberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for SubscriberError {}

/// Recipient of device lifecycle events.
///
/// `on_created` allocates device-bound resources, `on_reset` rebuilds
/// whatever depends on the swap chain, `on_lost` releases those again
/// before a reset or loss, and `on_destroying` releases everything
/// before the device goes away.
pub trait DeviceEventSubscriber<D> {
    /// The device was created with the given configuration.
    fn on_created(&mut self, device: &mut D, config: &DeviceConfig) -> Result<(), SubscriberError>;

    /// The device was (re)reset and swap-chain resources must be rebuilt.
    fn on_reset(&mut self, device: &mut D, config: &DeviceConfig) -> Result<(), SubscriberError>;

    /// The device was lost; release swap-chain resources.
    fn on_lost(&mut self, device: &mut D) -> Result<(), SubscriberError>;

    /// The device is about to be destroyed; release everything.
    fn on_destroying(&mut self, device: &mut D) -> Result<(), SubscriberError>;
}

/// An explicit, ordered list of lifecycle subscribers.
///
/// Registration order is delivery order for every notification. The
/// build-up notifications (`created`, `reset`) stop at the first failing
/// subscriber and report it; the teardown notifications (`lost`,
/// `destroying`) are delivered to everyone, with failures logged, so a
/// misbehaving subscriber cannot keep the device alive.
#[derive(Default)]
pub struct SubscriberSet<D> {
    subscribers: Vec<Box<dyn DeviceEventSubscriber<D>>>,
}

impl<D> SubscriberSet<D> {
    /// An empty subscriber set.
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    /// Appends a subscriber at the end of the delivery order.
    pub fn register(&mut self, subscriber: Box<dyn DeviceEventSubscriber<D>>) {
        self.subscribers.push(subscriber);
    }

    /// Number of registered subscribers.
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Whether no subscriber is registered.
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    pub(crate) fn notify_created(
        &mut self,
        device: &mut D,
        config: &DeviceConfig,
    ) -> Result<(), SubscriberError> {
        for subscriber in &mut self.subscribers {
            subscriber.on_created(device, config)?;
        }
        Ok(())
    }

    pub(crate) fn notify_reset(
        &mut self,
        device: &mut D,
        config: &DeviceConfig,
    ) -> Result<(), SubscriberError> {
        for subscriber in &mut self.subscribers {
            subscriber.on_reset(device, config)?;
        }
        Ok(())
    }

    pub(crate) fn notify_lost(&mut self, device: &mut D) {
        for subscriber in &mut self.subscribers {
            if let Err(err) = subscriber.on_lost(device) {
                log::warn!("A lifecycle subscriber failed while handling device loss: {err}");
            }
        }
    }

    pub(crate) fn notify_destroying(&mut self, device: &mut D) {
        for subscriber in &mut self.subscribers {
            if let Err(err) = subscriber.on_destroying(device) {
                log::warn!("A lifecycle subscriber failed during device teardown: {err}");
            }
        }
    }
}

impl<D> fmt::Debug for SubscriberSet<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriberSet")
            .field("len", &self.subscribers.len())
            .finish()
    }
}
