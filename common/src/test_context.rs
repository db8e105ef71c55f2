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

use crate::cleanup_guard::CleanupGuard;
use crate::utils::rand_domain_name;
use simpledb::sdb::SdbClient;
use simpledb::sdb::SdbClientBuilder;
use simpledb::sdb::creds::StaticProvider;
use simpledb::sdb::http::{BaseUrl, Region};
use simpledb::sdb::types::SdbApi;

#[derive(Clone, Debug)]
pub struct TestContext {
    pub client: SdbClient,
    pub base_url: BaseUrl,
    pub access_key: String,
}

impl TestContext {
    /// Builds a client from `AWS_ACCESS_KEY_ID` and `AWS_SECRET_ACCESS_KEY`.
    ///
    /// The endpoint is taken from `SDB_ENDPOINT` when set, otherwise from the
    /// region in `SDB_REGION` (default `eu-west-1`). Exits the process with
    /// status 1 when either credential variable is missing.
    pub fn new_from_env() -> Self {
        let access_key = require_env("AWS_ACCESS_KEY_ID");
        let secret_key = require_env("AWS_SECRET_ACCESS_KEY");
        log::debug!("AWS_ACCESS_KEY_ID={access_key}");
        log::debug!("AWS_SECRET_ACCESS_KEY=*****");

        let base_url: BaseUrl = match std::env::var("SDB_ENDPOINT") {
            Ok(endpoint) => endpoint.parse().unwrap(),
            Err(_) => {
                let region: Region = std::env::var("SDB_REGION")
                    .map(|r| r.parse().unwrap())
                    .unwrap_or_default();
                BaseUrl::from(region)
            }
        };
        log::debug!("endpoint={base_url}");

        let client = SdbClientBuilder::new(base_url.clone())
            .provider(StaticProvider::new(&access_key, &secret_key))
            .app_info(Some(("simpledb-tests".into(), env!("CARGO_PKG_VERSION").into())))
            .build()
            .unwrap();

        Self {
            client,
            base_url,
            access_key,
        }
    }

    /// Creates a temporary domain with an automatic cleanup guard.
    ///
    /// The domain is deleted when the returned guard is dropped.
    pub fn create_domain_helper(&self) -> (String, CleanupGuard) {
        let domain_name = rand_domain_name();
        let _resp = self
            .client
            .create_domain(&domain_name)
            .build()
            .send()
            .unwrap();
        let guard = CleanupGuard::new(self.client.clone(), &domain_name);
        (domain_name, guard)
    }
}

fn require_env(name: &str) -> String {
    match std::env::var(name) {
        Ok(v) if !v.is_empty() => v,
        _ => {
            eprintln!("{name} must be set to run tests against SimpleDB");
            std::process::exit(1);
        }
    }
}
