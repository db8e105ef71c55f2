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

use crate::sdb::builders::{DeleteAttributes, DeleteAttributesBldr};
use crate::sdb::client::SdbClient;

impl SdbClient {
    /// Creates a [`DeleteAttributes`] request builder.
    ///
    /// To execute the request, call [`DeleteAttributes::send()`](crate::sdb::types::SdbApi::send),
    /// which returns a [`Result`] containing a [`DeleteAttributesResponse`](crate::sdb::response::DeleteAttributesResponse).
    /// Set `attributes` to delete only those values; left empty, the whole item is deleted.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use simpledb::sdb::SdbClient;
    /// use simpledb::sdb::http::Region;
    /// use simpledb::sdb::types::{Attribute, SdbApi};
    ///
    /// let client = SdbClient::new("ACCESS_KEY", "SECRET_KEY", Region::EuWest1).unwrap();
    /// client
    ///     .delete_attributes("users", "user-1")
    ///     .attributes(vec![Attribute::new("role", "admin")])
    ///     .build()
    ///     .send()
    ///     .unwrap();
    /// ```
    pub fn delete_attributes<S1: Into<String>, S2: Into<String>>(
        &self,
        domain: S1,
        item: S2,
    ) -> DeleteAttributesBldr {
        DeleteAttributes::builder()
            .client(self.clone())
            .domain(domain)
            .item(item)
    }

    /// Creates a [`DeleteAttributes`] request builder that deletes a whole item.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use simpledb::sdb::SdbClient;
    /// use simpledb::sdb::http::Region;
    /// use simpledb::sdb::types::SdbApi;
    ///
    /// let client = SdbClient::new("ACCESS_KEY", "SECRET_KEY", Region::EuWest1).unwrap();
    /// client.delete_item("users", "user-1").build().send().unwrap();
    /// ```
    pub fn delete_item<S1: Into<String>, S2: Into<String>>(
        &self,
        domain: S1,
        item: S2,
    ) -> DeleteAttributesBldr {
        self.delete_attributes(domain, item)
    }
}
