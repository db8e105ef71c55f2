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
use crate::sdb::response_traits::{HasDomain, HasItem};
use crate::sdb::types::{Attribute, ResponseMetadata, SdbRequest};
use crate::sdb::utils::{get_children, parse_xml};
use crate::{impl_from_sdb_response, impl_has_sdb_fields};
use bytes::Bytes;

/// Response of
/// [get_attributes()](crate::sdb::client::SdbClient::get_attributes)
/// API
#[derive(Clone, Debug)]
pub struct GetAttributesResponse {
    request: SdbRequest,
    body: Bytes,
    metadata: ResponseMetadata,
    attributes: Vec<Attribute>,
}

impl_from_sdb_response!(GetAttributesResponse);
impl_has_sdb_fields!(GetAttributesResponse);

impl HasDomain for GetAttributesResponse {}
impl HasItem for GetAttributesResponse {}

impl GetAttributesResponse {
    fn decode(request: SdbRequest, body: Bytes) -> Result<Self, Error> {
        let root = parse_xml(&body)?;
        let attributes = get_children(get_result(&root, "GetAttributesResult")?, "Attribute")
            .map(Attribute::from_xml)
            .collect();
        let metadata = ResponseMetadata::from_xml(&root)?;

        Ok(Self {
            request,
            body,
            metadata,
            attributes,
        })
    }

    /// Returns the attributes of the item. An unknown item has none.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }
}
