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
use crate::sdb::response::DeleteAttributesResponse;
use crate::sdb::types::{Action, Attribute, SdbApi, SdbRequest, ToSdbRequest};
use typed_builder::TypedBuilder;

/// Argument builder for the [`DeleteAttributes`](https://docs.aws.amazon.com/AmazonSimpleDB/latest/DeveloperGuide/SDB_API_DeleteAttributes.html) SimpleDB API operation.
///
/// This struct constructs the parameters required for the [`SdbClient::delete_attributes`](crate::sdb::client::SdbClient::delete_attributes)
/// and [`SdbClient::delete_item`](crate::sdb::client::SdbClient::delete_item) methods.
/// Without attributes the whole item is deleted.
#[derive(Clone, Debug, TypedBuilder)]
pub struct DeleteAttributes {
    #[builder(!default)] // force required
    client: SdbClient,
    #[builder(setter(into))] // force required + accept Into<String>
    domain: String,
    #[builder(setter(into))] // force required + accept Into<String>
    item: String,
    #[builder(default)]
    attributes: Vec<Attribute>,
}

pub type DeleteAttributesBldr = DeleteAttributesBuilder<((SdbClient,), (String,), (String,), ())>;

impl SdbApi for DeleteAttributes {
    type SdbResponse = DeleteAttributesResponse;
}

impl ToSdbRequest for DeleteAttributes {
    fn to_sdb_request(self) -> SdbRequest {
        let mut params = Multimap::new();
        params.add("DomainName", self.domain);
        params.add("ItemName", self.item);
        add_indexed_attributes(&mut params, "", &self.attributes);

        SdbRequest::builder()
            .client(self.client)
            .action(Action::DeleteAttributes)
            .params(params)
            .build()
    }
}
