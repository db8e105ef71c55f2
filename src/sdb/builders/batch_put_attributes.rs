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
use crate::sdb::response::BatchPutAttributesResponse;
use crate::sdb::types::{Action, Item, SdbApi, SdbRequest, ToSdbRequest};
use typed_builder::TypedBuilder;

/// Argument builder for the [`BatchPutAttributes`](https://docs.aws.amazon.com/AmazonSimpleDB/latest/DeveloperGuide/SDB_API_BatchPutAttributes.html) SimpleDB API operation.
///
/// This struct constructs the parameters required for the [`SdbClient::batch_put_attributes`](crate::sdb::client::SdbClient::batch_put_attributes) method.
///
/// The service accepts at most 25 items per call; larger batches are
/// rejected by the service, not split here.
#[derive(Clone, Debug, TypedBuilder)]
pub struct BatchPutAttributes {
    #[builder(!default)] // force required
    client: SdbClient,
    #[builder(setter(into))] // force required + accept Into<String>
    domain: String,
    #[builder(!default)]
    items: Vec<Item>,
}

pub type BatchPutAttributesBldr =
    BatchPutAttributesBuilder<((SdbClient,), (String,), (Vec<Item>,))>;

impl SdbApi for BatchPutAttributes {
    type SdbResponse = BatchPutAttributesResponse;
}

impl ToSdbRequest for BatchPutAttributes {
    fn to_sdb_request(self) -> SdbRequest {
        let mut params = Multimap::new();
        params.add("DomainName", self.domain);
        for (i, item) in self.items.iter().enumerate() {
            let prefix = format!("Item.{}.", i + 1);
            params.add(format!("{prefix}ItemName"), &item.name);
            add_indexed_attributes(&mut params, &prefix, &item.attributes);
        }

        SdbRequest::builder()
            .client(self.client)
            .action(Action::BatchPutAttributes)
            .params(params)
            .build()
    }
}
