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

//! The capability negotiation engine.
//!
//! Negotiation is a pure computation in four stages: build the optimal
//! target from the request and policy, filter the catalog's combos
//! against the hard `Preserve` constraints, rank the survivors against
//! the target, and resolve every attribute of the winning combo into a
//! concrete, realizable configuration.

mod filter;
mod optimal;
mod policy;
mod ranking;
mod resolve;

pub use policy::{MatchOption, MatchPolicy};

use crate::catalog::CapabilityCatalog;
use crate::device::DeviceConfig;
use crate::error::NegotiationError;

/// Negotiates the closest realizable configuration to `requested` under
/// `policy`, over the combos enumerated in `catalog`.
///
/// Ties in ranking resolve to the first maximum in enumeration order
/// (adapter-major, then device, then combo-list order). Fails with
/// [`NegotiationError::NoCompatibleConfiguration`] when no combo
/// survives the `Preserve` filter.
pub fn negotiate<C>(
    requested: &DeviceConfig,
    policy: &MatchPolicy,
    catalog: &C,
) -> Result<DeviceConfig, NegotiationError>
where
    C: CapabilityCatalog + ?Sized,
{
    let optimal = optimal::build_optimal(requested, policy, catalog);

    let mut best = None;
    let mut best_ranking = -1.0f32;
    let mut rejected = 0usize;
    let mut ranked = 0usize;

    for adapter in catalog.adapters() {
        let desktop_mode = adapter.desktop_mode;
        for device in &adapter.devices {
            for combo in &device.combos {
                // Windowed surfaces must share the desktop pixel format.
                if combo.windowed && combo.adapter_format != desktop_mode.format {
                    rejected += 1;
                    continue;
                }
                if !filter::combo_passes_preserve(combo, requested, policy) {
                    rejected += 1;
                    continue;
                }

                ranked += 1;
                let ranking = ranking::rank_combo(combo, &optimal, &desktop_mode);
                if ranking > best_ranking {
                    best = Some((combo, adapter));
                    best_ranking = ranking;
                }
            }
        }
    }

    log::debug!(
        "Negotiation ranked {} combo(s), rejected {} against the policy",
        ranked,
        rejected
    );

    let (combo, adapter) = best.ok_or(NegotiationError::NoCompatibleConfiguration)?;
    log::debug!(
        "Winning combo (score {:.1}): adapter {}, {:?}, {:?}/{:?}, windowed={}",
        best_ranking,
        combo.adapter_ordinal,
        combo.device_kind,
        combo.adapter_format,
        combo.back_buffer_format,
        combo.windowed
    );

    resolve::resolve(combo, adapter, requested, policy)
}
