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

use crate::sdb::builders::{CreateDomain, CreateDomainBldr};
use crate::sdb::client::SdbClient;

impl SdbClient {
    /// Creates a [`CreateDomain`] request builder.
    ///
    /// To execute the request, call [`CreateDomain::send()`](crate::sdb::types::SdbApi::send),
    /// which returns a [`Result`] containing a [`CreateDomainResponse`](crate::sdb::response::CreateDomainResponse).
    /// Creating an existing domain succeeds.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use simpledb::sdb::SdbClient;
    /// use simpledb::sdb::http::Region;
    /// use simpledb::sdb::response::CreateDomainResponse;
    /// use simpledb::sdb::response_traits::{HasDomain, HasResponseMetadata};
    /// use simpledb::sdb::types::SdbApi;
    ///
    /// let client = SdbClient::new("ACCESS_KEY", "SECRET_KEY", Region::EuWest1).unwrap();
    /// let resp: CreateDomainResponse = client.create_domain("logs").build().send().unwrap();
    /// println!("domain '{}' created (box usage {})", resp.domain(), resp.box_usage());
    /// ```
    pub fn create_domain<S: Into<String>>(&self, domain: S) -> CreateDomainBldr {
        CreateDomain::builder().client(self.clone()).domain(domain)
    }
}
