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
use crate::sdb::response::CreateDomainResponse;
use crate::sdb::types::{Action, SdbApi, SdbRequest, ToSdbRequest};
use typed_builder::TypedBuilder;

/// Argument builder for the [`CreateDomain`](https://docs.aws.amazon.com/AmazonSimpleDB/latest/DeveloperGuide/SDB_API_CreateDomain.html) SimpleDB API operation.
///
/// This struct constructs the parameters required for the [`SdbClient::create_domain`](crate::sdb::client::SdbClient::create_domain) method.
#[derive(Clone, Debug, TypedBuilder)]
pub struct CreateDomain {
    #[builder(!default)] // force required
    client: SdbClient,
    #[builder(setter(into))] // force required + accept Into<String>
    domain: String,
}

pub type CreateDomainBldr = CreateDomainBuilder<((SdbClient,), (String,))>;

impl SdbApi for CreateDomain {
    type SdbResponse = CreateDomainResponse;
}

impl ToSdbRequest for CreateDomain {
    fn to_sdb_request(self) -> SdbRequest {
        let mut params = Multimap::new();
        params.add("DomainName", self.domain);

        SdbRequest::builder()
            .client(self.client)
            .action(Action::CreateDomain)
            .params(params)
            .build()
    }
}
