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

use crate::sdb::builders::{ListDomains, ListDomainsBldr};
use crate::sdb::client::SdbClient;

impl SdbClient {
    /// Creates a [`ListDomains`] request builder.
    ///
    /// To execute the request, call [`ListDomains::send()`](crate::sdb::types::SdbApi::send),
    /// which returns a [`Result`] containing a [`ListDomainsResponse`](crate::sdb::response::ListDomainsResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use simpledb::sdb::SdbClient;
    /// use simpledb::sdb::http::Region;
    /// use simpledb::sdb::response::ListDomainsResponse;
    /// use simpledb::sdb::types::SdbApi;
    ///
    /// let client = SdbClient::new("ACCESS_KEY", "SECRET_KEY", Region::EuWest1).unwrap();
    /// let resp: ListDomainsResponse = client.list_domains().build().send().unwrap();
    /// for name in resp.domain_names() {
    ///     println!("{name}");
    /// }
    /// ```
    pub fn list_domains(&self) -> ListDomainsBldr {
        ListDomains::builder().client(self.clone())
    }
}
