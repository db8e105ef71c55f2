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

use crate::sdb::client::SdbClient;
use crate::sdb::multimap_ext::{Multimap, MultimapExt};
use crate::sdb::response::GetAttributesResponse;
use crate::sdb::types::{Action, SdbApi, SdbRequest, ToSdbRequest};
use typed_builder::TypedBuilder;

/// Argument builder for the [`GetAttributes`](https://docs.aws.amazon.com/AmazonSimpleDB/latest/DeveloperGuide/SDB_API_GetAttributes.html) SimpleDB API operation.
///
/// This struct constructs the parameters required for the [`SdbClient::get_attributes`](crate::sdb::client::SdbClient::get_attributes) method.
#[derive(Clone, Debug, TypedBuilder)]
pub struct GetAttributes {
    #[builder(!default)] // force required
    client: SdbClient,
    #[builder(setter(into))] // force required + accept Into<String>
    domain: String,
    #[builder(setter(into))] // force required + accept Into<String>
    item: String,
    /// Restricts the response to these attribute names; empty returns all attributes.
    #[builder(default)]
    attribute_names: Vec<String>,
    #[builder(default)]
    consistent_read: bool,
}

pub type GetAttributesBldr = GetAttributesBuilder<((SdbClient,), (String,), (String,), (), ())>;

impl SdbApi for GetAttributes {
    type SdbResponse = GetAttributesResponse;
}

impl ToSdbRequest for GetAttributes {
    fn to_sdb_request(self) -> SdbRequest {
        let mut params = Multimap::new();
        params.add("DomainName", self.domain);
        params.add("ItemName", self.item);
        for (i, name) in self.attribute_names.into_iter().enumerate() {
            params.add(format!("AttributeName.{}", i + 1), name);
        }
        if self.consistent_read {
            params.add("ConsistentRead", "true");
        }

        SdbRequest::builder()
            .client(self.client)
            .action(Action::GetAttributes)
            .params(params)
            .build()
    }
}
