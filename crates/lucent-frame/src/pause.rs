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

//! Reentrant pause counters for time and rendering.

/// Two independent reentrant pause counters.
///
/// Pausing can be layered: overlapping operations each pause and resume,
/// and the respective activity restarts only when its counter returns to
/// zero. Resuming below zero clamps at zero instead of going negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PauseState {
    time_count: u32,
    rendering_count: u32,
}

impl PauseState {
    /// A fully-unpaused state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the selected counters by one.
    pub fn pause(&mut self, time: bool, rendering: bool) {
        if time {
            self.time_count += 1;
        }
        if rendering {
            self.rendering_count += 1;
        }
    }

    /// Lowers the selected counters by one, clamping at zero.
    pub fn resume(&mut self, time: bool, rendering: bool) {
        if time {
            self.time_count = self.time_count.saturating_sub(1);
        }
        if rendering {
            self.rendering_count = self.rendering_count.saturating_sub(1);
        }
    }

    /// Whether time is currently paused.
    pub fn time_paused(&self) -> bool {
        self.time_count > 0
    }

    /// Whether rendering is currently paused.
    pub fn rendering_paused(&self) -> bool {
        self.rendering_count > 0
    }
}
