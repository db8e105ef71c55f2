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

use crate::sdb::builders::add_indexed_attributes;
use crate::sdb::client::SdbClient;
use crate::sdb::multimap_ext::{Multimap, MultimapExt};
use crate::sdb::response::PutAttributesResponse;
use crate::sdb::types::{Action, Item, SdbApi, SdbRequest, ToSdbRequest};
use typed_builder::TypedBuilder;

/// Argument builder for the [`PutAttributes`](https://docs.aws.amazon.com/AmazonSimpleDB/latest/DeveloperGuide/SDB_API_PutAttributes.html) SimpleDB API operation.
///
/// This struct constructs the parameters required for the [`SdbClient::put_attributes`](crate::sdb::client::SdbClient::put_attributes) method.
#[derive(Clone, Debug, TypedBuilder)]
pub struct PutAttributes {
    #[builder(!default)] // force required
    client: SdbClient,
    #[builder(setter(into))] // force required + accept Into<String>
    domain: String,
    #[builder(!default)]
    item: Item,
}

pub type PutAttributesBldr = PutAttributesBuilder<((SdbClient,), (String,), (Item,))>;

impl SdbApi for PutAttributes {
    type SdbResponse = PutAttributesResponse;
}

impl ToSdbRequest for PutAttributes {
    fn to_sdb_request(self) -> SdbRequest {
        let mut params = Multimap::new();
        params.add("DomainName", self.domain);
        params.add("ItemName", self.item.name);
        add_indexed_attributes(&mut params, "", &self.item.attributes);

        SdbRequest::builder()
            .client(self.client)
            .action(Action::PutAttributes)
            .params(params)
            .build()
    }
}
