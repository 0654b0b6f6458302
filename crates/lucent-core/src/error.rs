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

//! Error types for capability negotiation.

use std::fmt;

/// Errors surfaced by [`negotiate`](crate::negotiate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NegotiationError {
    /// No enumerated combo survived the preserve filter, so no
    /// configuration can honor the request under the given policy.
    NoCompatibleConfiguration,
}

impl fmt::Display for NegotiationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NegotiationError::NoCompatibleConfiguration => {
                write!(f, "no enumerated device combination is compatible with the request")
            }
        }
    }
}

impl std::error::Error for NegotiationError {}
