// Copyright 2026 the Xilem Authors
// SPDX-License-Identifier: Apache-2.0

use futures::task::{LocalFutureObj, LocalSpawn, SpawnError};

/// Runs tasks on the browser's microtask queue.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct WasmSpawner;

impl LocalSpawn for WasmSpawner {
    fn spawn_local_obj(&self, future: LocalFutureObj<'static, ()>) -> Result<(), SpawnError> {
        wasm_bindgen_futures::spawn_local(future);
        Ok(())
    }
}
