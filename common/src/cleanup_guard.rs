// SimpleDB Rust Library for Amazon SimpleDB
// Copyright 2026 The simpledb-rs Authors
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

use simpledb::sdb::SdbClient;
use simpledb::sdb::types::SdbApi;

/// Cleanup guard that deletes the domain when it is dropped
pub struct CleanupGuard {
    client: SdbClient,
    domain_name: String,
}

impl CleanupGuard {
    pub fn new<S: Into<String>>(client: SdbClient, domain_name: S) -> Self {
        Self {
            client,
            domain_name: domain_name.into(),
        }
    }
}

impl Drop for CleanupGuard {
    fn drop(&mut self) {
        if let Err(e) = self.client.delete_domain(&self.domain_name).build().send() {
            eprintln!("Error removing domain '{}':\n{e}", self.domain_name);
        }
    }
}
