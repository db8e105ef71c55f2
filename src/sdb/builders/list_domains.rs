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
use crate::sdb::response::ListDomainsResponse;
use crate::sdb::types::{Action, SdbApi, SdbRequest, ToSdbRequest};
use typed_builder::TypedBuilder;

/// Argument builder for the [`ListDomains`](https://docs.aws.amazon.com/AmazonSimpleDB/latest/DeveloperGuide/SDB_API_ListDomains.html) SimpleDB API operation.
///
/// This struct constructs the parameters required for the [`SdbClient::list_domains`](crate::sdb::client::SdbClient::list_domains) method.
#[derive(Clone, Debug, TypedBuilder)]
pub struct ListDomains {
    #[builder(!default)] // force required
    client: SdbClient,
}

pub type ListDomainsBldr = ListDomainsBuilder<((SdbClient,),)>;

impl SdbApi for ListDomains {
    type SdbResponse = ListDomainsResponse;
}

impl ToSdbRequest for ListDomains {
    fn to_sdb_request(self) -> SdbRequest {
        SdbRequest::builder()
            .client(self.client)
            .action(Action::ListDomains)
            .build()
    }
}
