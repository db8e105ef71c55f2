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

use crate::sdb::builders::{GetAttributes, GetAttributesBldr};
use crate::sdb::client::SdbClient;

impl SdbClient {
    /// Creates a [`GetAttributes`] request builder.
    ///
    /// To execute the request, call [`GetAttributes::send()`](crate::sdb::types::SdbApi::send),
    /// which returns a [`Result`] containing a [`GetAttributesResponse`](crate::sdb::response::GetAttributesResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use simpledb::sdb::SdbClient;
    /// use simpledb::sdb::http::Region;
    /// use simpledb::sdb::response::GetAttributesResponse;
    /// use simpledb::sdb::types::SdbApi;
    ///
    /// let client = SdbClient::new("ACCESS_KEY", "SECRET_KEY", Region::EuWest1).unwrap();
    /// let resp: GetAttributesResponse = client
    ///     .get_attributes("users", "user-1")
    ///     .consistent_read(true)
    ///     .build()
    ///     .send()
    ///     .unwrap();
    /// for attr in resp.attributes() {
    ///     println!("{} = {}", attr.name, attr.value);
    /// }
    /// ```
    pub fn get_attributes<S1: Into<String>, S2: Into<String>>(
        &self,
        domain: S1,
        item: S2,
    ) -> GetAttributesBldr {
        GetAttributes::builder()
            .client(self.clone())
            .domain(domain)
            .item(item)
    }
}
