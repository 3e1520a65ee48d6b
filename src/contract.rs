// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(target_arch = "wasm32", no_main)]

mod state;

use counter::{CounterAbi, CounterOperation};
use linera_sdk::{
    linera_base_types::WithContractAbi,
    views::{RootView, View},
    Contract, ContractRuntime,
};

use self::state::CounterState;

pub struct CounterContract {
    state: CounterState,
    runtime: ContractRuntime<Self>,
}

linera_sdk::contract!(CounterContract);

impl WithContractAbi for CounterContract {
    type Abi = CounterAbi;
}

impl Contract for CounterContract {
    type Message = ();
    type InstantiationArgument = ();
    type Parameters = ();
    type EventValue = ();

    async fn load(runtime: ContractRuntime<Self>) -> Self {
        let state = CounterState::load(runtime.root_view_storage_context())
            .await
            .expect("Failed to load state");
        CounterContract { state, runtime }
    }

    async fn instantiate(&mut self, _argument: ()) {
        log::trace!("Instantiating");
        // Validate that the application parameters were configured correctly.
        self.runtime.application_parameters();

        self.state.count.set(0);
    }

    async fn execute_operation(&mut self, operation: CounterOperation) -> u64 {
        log::trace!("Handling operation {:?}", operation);
        let count = *self.state.count.get();
        // A panic rejects the whole block, so nothing below is committed on failure.
        let new_count = operation
            .apply(count)
            .unwrap_or_else(|error| panic!("{error}"));

        if !operation.is_read_only() {
            self.state.count.set(new_count);
        }
        new_count
    }

    async fn execute_message(&mut self, _message: ()) {
        panic!("Counter application doesn't support any cross-chain messages");
    }

    async fn store(mut self) {
        self.state.save().await.expect("Failed to save state");
    }
}
