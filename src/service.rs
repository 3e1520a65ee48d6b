// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(target_arch = "wasm32", no_main)]

mod state;

use std::sync::Arc;

use async_graphql::{EmptySubscription, Object, Request, Response, Schema};
use counter::{CounterAbi, CounterOperation};
use linera_sdk::{linera_base_types::WithServiceAbi, views::View, Service, ServiceRuntime};

use self::state::CounterState;

pub struct CounterService {
    state: CounterState,
    runtime: Arc<ServiceRuntime<Self>>,
}

linera_sdk::service!(CounterService);

impl WithServiceAbi for CounterService {
    type Abi = CounterAbi;
}

impl Service for CounterService {
    type Parameters = ();

    async fn new(runtime: ServiceRuntime<Self>) -> Self {
        let state = CounterState::load(runtime.root_view_storage_context())
            .await
            .expect("Failed to load state");
        CounterService {
            state,
            runtime: Arc::new(runtime),
        }
    }

    async fn handle_query(&self, request: Request) -> Response {
        log::trace!("Handling query");
        let schema = Schema::build(
            QueryRoot {
                count: *self.state.count.get(),
            },
            MutationRoot {
                runtime: self.runtime.clone(),
            },
            EmptySubscription,
        )
        .finish();
        schema.execute(request).await
    }
}

struct QueryRoot {
    count: u64,
}

#[Object]
impl QueryRoot {
    /// The current count, as stored in the application state.
    async fn count(&self) -> u64 {
        self.count
    }

    /// Reads the current count.
    async fn get_counter(&self) -> u64 {
        self.count
    }
}

struct MutationRoot {
    runtime: Arc<ServiceRuntime<CounterService>>,
}

#[Object]
impl MutationRoot {
    /// Schedules an operation that adds one to the count.
    async fn incr_counter(&self) -> [u8; 0] {
        self.runtime.schedule_operation(&CounterOperation::Increment);
        []
    }

    /// Schedules an operation that subtracts one from the count.
    async fn decr_counter(&self) -> [u8; 0] {
        self.runtime.schedule_operation(&CounterOperation::Decrement);
        []
    }
}
