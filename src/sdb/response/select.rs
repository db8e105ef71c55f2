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

use crate::sdb::error::Error;
use crate::sdb::response::get_result;
use crate::sdb::types::{Item, ResponseMetadata, SdbRequest};
use crate::sdb::utils::{get_children, parse_xml};
use crate::{impl_from_sdb_response, impl_has_sdb_fields};
use bytes::Bytes;

/// Response of
/// [select()](crate::sdb::client::SdbClient::select)
/// API
///
/// Only the first page of results is decoded; a `NextToken` is ignored.
#[derive(Clone, Debug)]
pub struct SelectResponse {
    request: SdbRequest,
    body: Bytes,
    metadata: ResponseMetadata,
    items: Vec<Item>,
}

impl_from_sdb_response!(SelectResponse);
impl_has_sdb_fields!(SelectResponse);

impl SelectResponse {
    fn decode(request: SdbRequest, body: Bytes) -> Result<Self, Error> {
        let root = parse_xml(&body)?;
        let items = get_children(get_result(&root, "SelectResult")?, "Item")
            .map(Item::from_xml)
            .collect();
        let metadata = ResponseMetadata::from_xml(&root)?;

        Ok(Self {
            request,
            body,
            metadata,
            items,
        })
    }

    /// Returns the matching items.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}
