// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

/*! ABI of the Counter Application */

use async_graphql::{Request, Response};
use linera_sdk::linera_base_types::{ContractAbi, ServiceAbi};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub struct CounterAbi;

impl ContractAbi for CounterAbi {
    type Operation = CounterOperation;
    type Response = u64;
}

impl ServiceAbi for CounterAbi {
    type Query = Request;
    type QueryResponse = Response;
}

/// The calls accepted by the counter contract. Each one responds with the resulting count.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum CounterOperation {
    /// Adds one to the count.
    Increment,
    /// Subtracts one from the count.
    Decrement,
    /// Reads the count without changing it.
    Get,
}

impl CounterOperation {
    /// Returns `true` if executing this operation never writes to the application state.
    pub fn is_read_only(&self) -> bool {
        matches!(self, CounterOperation::Get)
    }

    /// Computes the count that results from applying this operation to `count`.
    pub fn apply(&self, count: u64) -> Result<u64, CounterError> {
        match self {
            CounterOperation::Increment => count
                .checked_add(1)
                .ok_or(CounterError::ArithmeticOverflow),
            CounterOperation::Decrement => count
                .checked_sub(1)
                .ok_or(CounterError::ArithmeticUnderflow),
            CounterOperation::Get => Ok(count),
        }
    }
}

/// An error that aborts a counter operation.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum CounterError {
    /// The count is already at `u64::MAX`.
    #[error("Counter overflow: the count is already at its maximum value")]
    ArithmeticOverflow,

    /// The count is already zero.
    #[error("Counter underflow: the count is already zero")]
    ArithmeticUnderflow,
}
