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
use crate::sdb::response::SelectResponse;
use crate::sdb::types::{Action, SdbApi, SdbRequest, ToSdbRequest};
use typed_builder::TypedBuilder;

/// Argument builder for the [`Select`](https://docs.aws.amazon.com/AmazonSimpleDB/latest/DeveloperGuide/SDB_API_Select.html) SimpleDB API operation.
///
/// This struct constructs the parameters required for the [`SdbClient::select`](crate::sdb::client::SdbClient::select) method.
/// The expression is sent as given; it is neither validated nor escaped beyond form encoding.
#[derive(Clone, Debug, TypedBuilder)]
pub struct Select {
    #[builder(!default)] // force required
    client: SdbClient,
    #[builder(setter(into))] // force required + accept Into<String>
    expression: String,
    #[builder(default)]
    consistent_read: bool,
}

pub type SelectBldr = SelectBuilder<((SdbClient,), (String,), ())>;

impl SdbApi for Select {
    type SdbResponse = SelectResponse;
}

impl ToSdbRequest for Select {
    fn to_sdb_request(self) -> SdbRequest {
        let mut params = Multimap::new();
        params.add("SelectExpression", self.expression);
        if self.consistent_read {
            params.add("ConsistentRead", "true");
        }

        SdbRequest::builder()
            .client(self.client)
            .action(Action::Select)
            .params(params)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdb::builders::test_support::offline_client;

    #[test]
    fn test_expression_is_not_rewritten() {
        let q = "select * from `my domain` where a = 'x + y'";
        let req = Select::builder()
            .client(offline_client())
            .expression(q)
            .build()
            .to_sdb_request();
        assert_eq!(req.params().get("SelectExpression").unwrap(), q);
    }
}
