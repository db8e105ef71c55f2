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

use crate::sdb::builders::{BatchPutAttributes, BatchPutAttributesBldr};
use crate::sdb::client::SdbClient;
use crate::sdb::types::Item;

impl SdbClient {
    /// Creates a [`BatchPutAttributes`] request builder storing several items in one call.
    ///
    /// To execute the request, call [`BatchPutAttributes::send()`](crate::sdb::types::SdbApi::send),
    /// which returns a [`Result`] containing a [`BatchPutAttributesResponse`](crate::sdb::response::BatchPutAttributesResponse).
    /// The batch either succeeds as a whole or fails with one error.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use simpledb::sdb::SdbClient;
    /// use simpledb::sdb::http::Region;
    /// use simpledb::sdb::types::{Item, SdbApi};
    ///
    /// let client = SdbClient::new("ACCESS_KEY", "SECRET_KEY", Region::EuWest1).unwrap();
    /// let items: Vec<Item> = (0..3)
    ///     .map(|i| {
    ///         let mut item = Item::new(format!("item-{i}"));
    ///         item.add_attribute("n", i.to_string());
    ///         item
    ///     })
    ///     .collect();
    /// client.batch_put_attributes("numbers", items).build().send().unwrap();
    /// ```
    pub fn batch_put_attributes<S: Into<String>>(
        &self,
        domain: S,
        items: Vec<Item>,
    ) -> BatchPutAttributesBldr {
        BatchPutAttributes::builder()
            .client(self.clone())
            .domain(domain)
            .items(items)
    }
}
