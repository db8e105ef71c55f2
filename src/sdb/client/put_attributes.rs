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

use crate::sdb::builders::{PutAttributes, PutAttributesBldr};
use crate::sdb::client::SdbClient;
use crate::sdb::types::Item;

impl SdbClient {
    /// Creates a [`PutAttributes`] request builder storing the attributes of one item.
    ///
    /// To execute the request, call [`PutAttributes::send()`](crate::sdb::types::SdbApi::send),
    /// which returns a [`Result`] containing a [`PutAttributesResponse`](crate::sdb::response::PutAttributesResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use simpledb::sdb::SdbClient;
    /// use simpledb::sdb::http::Region;
    /// use simpledb::sdb::types::{Item, SdbApi};
    ///
    /// let client = SdbClient::new("ACCESS_KEY", "SECRET_KEY", Region::EuWest1).unwrap();
    /// let mut item = Item::new("user-1");
    /// item.add_attribute("name", "Ada");
    /// item.add_attribute("role", "admin");
    /// client.put_attributes("users", item).build().send().unwrap();
    /// ```
    pub fn put_attributes<S: Into<String>>(&self, domain: S, item: Item) -> PutAttributesBldr {
        PutAttributes::builder()
            .client(self.clone())
            .domain(domain)
            .item(item)
    }
}
