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

//! The device lifecycle state machine.
//!
//! Adopting a new resolved configuration either resets the live device
//! in place (same adapter, device kind, and vertex processing) or tears
//! the session down and recreates it, with lifecycle notifications in a
//! fixed order: `lost` before `destroying` on teardown, `created` before
//! `reset` on build-up. The render-loop entry point owns lost-device
//! recovery, including windowed desktop-format drift.

use lucent_core::device::SurfaceFormat;
use lucent_core::{negotiate, CapabilityCatalog, DeviceConfig, MatchPolicy};

use crate::error::FrameworkError;
use crate::pause::PauseState;
use crate::realize::{CooperativeLevel, DeviceRealizer, RealizeError};
use crate::session::DeviceSession;
use crate::subscriber::{DeviceEventSubscriber, SubscriberSet};

/// Smallest windowed back-buffer width; keeps the window and the back
/// buffer the same size.
pub const MIN_WINDOW_WIDTH: u32 = 200;

/// Smallest windowed back-buffer height.
pub const MIN_WINDOW_HEIGHT: u32 = 200;

/// What a render-loop tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The frame was rendered and presented.
    Rendered,
    /// Rendering is paused; nothing was drawn.
    Paused,
    /// No device session exists.
    NoDevice,
    /// The device is lost and not yet resettable; call again later.
    WaitingForDevice,
    /// Recovery changed the device; the frame was not rendered.
    DeviceChanged,
}

/// Owns the single live device session and drives its lifecycle.
pub struct DeviceFramework<R: DeviceRealizer> {
    realizer: R,
    subscribers: SubscriberSet<R::Device>,
    pause: PauseState,
    session: Option<DeviceSession<R::Device>>,
    lost: bool,
    in_transition: bool,
}

impl<R: DeviceRealizer> DeviceFramework<R> {
    /// Creates a framework around a realizer, with no device yet.
    pub fn new(realizer: R) -> Self {
        Self {
            realizer,
            subscribers: SubscriberSet::new(),
            pause: PauseState::new(),
            session: None,
            lost: false,
            in_transition: false,
        }
    }

    /// Registers a lifecycle subscriber at the end of the delivery order.
    pub fn register_subscriber(&mut self, subscriber: Box<dyn DeviceEventSubscriber<R::Device>>) {
        self.subscribers.register(subscriber);
    }

    /// The resolved configuration of the live session, if any.
    pub fn current_config(&self) -> Option<&DeviceConfig> {
        self.session.as_ref().map(DeviceSession::config)
    }

    /// The live session, if any.
    pub fn session(&self) -> Option<&DeviceSession<R::Device>> {
        self.session.as_ref()
    }

    /// Whether the device is currently lost.
    pub fn is_lost(&self) -> bool {
        self.lost
    }

    /// The pause counters.
    pub fn pause_state(&self) -> &PauseState {
        &self.pause
    }

    /// Raises the selected pause counters.
    pub fn pause(&mut self, time: bool, rendering: bool) {
        self.pause.pause(time, rendering);
    }

    /// Lowers the selected pause counters, clamping at zero.
    pub fn resume(&mut self, time: bool, rendering: bool) {
        self.pause.resume(time, rendering);
    }

    /// Adopts a resolved configuration: resets the live device in place
    /// when it is compatible, otherwise tears down and recreates.
    ///
    /// An `external_device` is adopted instead of created; it always
    /// forces the teardown path, as does `force_recreate`. A failed
    /// in-place reset marks the device lost and returns `Ok`; the render
    /// loop recovers it. Creation and notification failures roll back
    /// the partial session and surface the error.
    ///
    /// The whole operation is bracketed by pausing time and rendering.
    ///
    /// Creating a device can change what the machine reports as
    /// realizable. The framework only ever reads the catalog as a
    /// snapshot, so re-enumerating after a successful creation is the
    /// embedder's responsibility.
    pub fn change_device(
        &mut self,
        config: DeviceConfig,
        external_device: Option<R::Device>,
        force_recreate: bool,
    ) -> Result<(), FrameworkError> {
        if self.in_transition {
            return Err(FrameworkError::Reentered);
        }
        self.in_transition = true;
        self.pause.pause(true, true);

        let result = self.change_device_inner(config, external_device, force_recreate);

        self.pause.resume(true, true);
        self.in_transition = false;
        result
    }

    fn change_device_inner(
        &mut self,
        mut config: DeviceConfig,
        external_device: Option<R::Device>,
        force_recreate: bool,
    ) -> Result<(), FrameworkError> {
        if config.windowed {
            config.width = config.width.max(MIN_WINDOW_WIDTH);
            config.height = config.height.max(MIN_WINDOW_HEIGHT);
        }

        let can_reset = !force_recreate
            && external_device.is_none()
            && self.session.as_ref().is_some_and(|session| {
                session.config.adapter_ordinal == config.adapter_ordinal
                    && session.config.device_kind == config.device_kind
                    && session.config.vertex_processing == config.vertex_processing
            });

        if can_reset {
            log::debug!("Adopting configuration via in-place reset");
            match self.reset_in_place(config) {
                Ok(()) => Ok(()),
                Err(FrameworkError::ResettingDevice(err)) => {
                    // The device would not reset; it is lost until the
                    // render loop brings it back.
                    log::warn!("In-place reset failed, device is lost: {err}");
                    self.lost = true;
                    Ok(())
                }
                Err(other) => Err(other),
            }
        } else {
            log::debug!("Adopting configuration via teardown and recreation");
            if let Some(mut old) = self.session.take() {
                Self::teardown_session(&mut self.subscribers, &mut old);
            }

            let device = match external_device {
                Some(device) => device,
                None => self
                    .realizer
                    .create(&config)
                    .map_err(FrameworkError::CreatingDevice)?,
            };
            let mut session = DeviceSession::new(device, config);

            if let Err(err) = self
                .subscribers
                .notify_created(&mut session.device, &session.config)
            {
                // Subscribers before the failing one may hold partial
                // state; give everyone the destroying notification.
                self.subscribers.notify_destroying(&mut session.device);
                return Err(FrameworkError::CreatingDeviceObjects(err));
            }
            session.objects_created = true;

            if let Err(err) = self
                .subscribers
                .notify_reset(&mut session.device, &session.config)
            {
                self.subscribers.notify_destroying(&mut session.device);
                return Err(FrameworkError::ResettingDeviceObjects(err));
            }
            session.objects_reset = true;

            self.session = Some(session);
            self.lost = false;
            Ok(())
        }
    }

    /// Resets the live session's device to `config`. Lost notifications
    /// go out before the reset, reset notifications after it.
    fn reset_in_place(&mut self, config: DeviceConfig) -> Result<(), FrameworkError> {
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };

        if session.objects_reset {
            self.subscribers.notify_lost(&mut session.device);
            session.objects_reset = false;
        }

        // Commit the target configuration before attempting the reset:
        // a lost reset is absorbed, and the render-loop recovery must
        // retry against the adopted configuration, not the old one.
        session.config = config;

        self.realizer
            .reset(&mut session.device, &config)
            .map_err(FrameworkError::ResettingDevice)?;

        self.subscribers
            .notify_reset(&mut session.device, &session.config)
            .map_err(FrameworkError::ResettingDeviceObjects)?;
        session.objects_reset = true;
        self.lost = false;
        Ok(())
    }

    /// Runs one render-loop tick: recovers a lost device if possible,
    /// then invokes `frame` and presents the result.
    ///
    /// Device loss during presentation is absorbed: the tick still
    /// reports [`FrameOutcome::Rendered`] and recovery starts on the
    /// next call. The catalog is consulted only for windowed
    /// desktop-format drift during recovery.
    pub fn render_frame<C>(
        &mut self,
        catalog: &C,
        frame: &mut dyn FnMut(&mut R::Device) -> Result<(), RealizeError>,
    ) -> Result<FrameOutcome, FrameworkError>
    where
        C: CapabilityCatalog + ?Sized,
    {
        if self.in_transition {
            return Err(FrameworkError::Reentered);
        }
        if self.session.is_none() {
            return Ok(FrameOutcome::NoDevice);
        }
        if self.pause.rendering_paused() {
            return Ok(FrameOutcome::Paused);
        }

        if self.lost {
            if let Some(outcome) = self.recover_lost_device(catalog)? {
                return Ok(outcome);
            }
        }

        let Some(session) = self.session.as_mut() else {
            return Ok(FrameOutcome::NoDevice);
        };
        let rendered = frame(&mut session.device)
            .and_then(|()| self.realizer.present(&mut session.device));
        if let Err(err) = rendered {
            match err {
                RealizeError::DeviceLost | RealizeError::DriverInternalError => {
                    // Never fail the current frame hard on loss; the next
                    // tick starts recovery.
                    log::warn!("Device lost during presentation: {err}");
                    self.lost = true;
                }
                other => return Err(FrameworkError::Presenting(other)),
            }
        }
        Ok(FrameOutcome::Rendered)
    }

    /// Lost-device recovery. Returns `Some(outcome)` when the tick is
    /// finished without rendering, `None` when the device is usable
    /// again and the frame should proceed.
    fn recover_lost_device<C>(
        &mut self,
        catalog: &C,
    ) -> Result<Option<FrameOutcome>, FrameworkError>
    where
        C: CapabilityCatalog + ?Sized,
    {
        let Some(session) = self.session.as_mut() else {
            return Ok(Some(FrameOutcome::NoDevice));
        };

        match self.realizer.cooperative_level(&session.device) {
            CooperativeLevel::Operational => {
                self.lost = false;
                return Ok(None);
            }
            CooperativeLevel::Lost => return Ok(Some(FrameOutcome::WaitingForDevice)),
            CooperativeLevel::ResetReady => {}
        }

        let current = session.config;

        // The desktop bit depth can change while the device is lost; a
        // windowed surface must follow it before any reset can succeed.
        if current.windowed {
            let desktop_format = desktop_format(catalog, current.adapter_ordinal);
            if desktop_format != SurfaceFormat::Unknown
                && desktop_format != current.adapter_format
            {
                log::info!(
                    "Desktop format drifted to {:?} while lost, re-negotiating",
                    desktop_format
                );
                let request = DeviceConfig {
                    adapter_format: desktop_format,
                    ..current
                };
                let resolved = negotiate(&request, &MatchPolicy::format_drift(), catalog)?;
                self.change_device(resolved, None, false)?;
                return Ok(Some(FrameOutcome::DeviceChanged));
            }
        }

        match self.reset_in_place(current) {
            Ok(()) => Ok(None),
            Err(FrameworkError::ResettingDevice(RealizeError::DeviceLost)) => {
                // Lost again mid-reset; keep waiting.
                Ok(Some(FrameOutcome::WaitingForDevice))
            }
            Err(FrameworkError::ResettingDevice(err)) => {
                // A non-loss reset failure; recreating from scratch is
                // the last resort.
                log::warn!("Reset failed ({err}), attempting full recreation");
                match self.change_device(current, None, true) {
                    Ok(()) => Ok(Some(FrameOutcome::DeviceChanged)),
                    Err(FrameworkError::CreatingDevice(create_err)) => {
                        log::error!("Recreation after failed reset also failed: {create_err}");
                        Err(FrameworkError::ResettingDevice(create_err))
                    }
                    Err(other) => Err(other),
                }
            }
            Err(other) => Err(other),
        }
    }

    /// Tears down the live session with lost and destroying
    /// notifications, leaving the framework deviceless.
    pub fn shutdown(&mut self) {
        if let Some(mut session) = self.session.take() {
            Self::teardown_session(&mut self.subscribers, &mut session);
        }
        self.lost = false;
    }

    fn teardown_session(
        subscribers: &mut SubscriberSet<R::Device>,
        session: &mut DeviceSession<R::Device>,
    ) {
        if session.objects_reset {
            subscribers.notify_lost(&mut session.device);
            session.objects_reset = false;
        }
        if session.objects_created {
            subscribers.notify_destroying(&mut session.device);
            session.objects_created = false;
        }
    }
}

impl<R: DeviceRealizer> Drop for DeviceFramework<R> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Current desktop format of the given adapter, or `Unknown` when the
/// catalog does not list it.
fn desktop_format<C>(catalog: &C, ordinal: u32) -> SurfaceFormat
where
    C: CapabilityCatalog + ?Sized,
{
    catalog
        .adapters()
        .iter()
        .find(|adapter| adapter.ordinal == ordinal)
        .map(|adapter| adapter.desktop_mode.format)
        .unwrap_or(SurfaceFormat::Unknown)
}
