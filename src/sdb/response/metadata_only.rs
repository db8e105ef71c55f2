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

//! Responses of actions that return nothing but response metadata.

use crate::sdb::error::Error;
use crate::sdb::response_traits::{HasDomain, HasItem};
use crate::sdb::types::{ResponseMetadata, SdbRequest};
use crate::sdb::utils::parse_xml;
use crate::{impl_from_sdb_response, impl_has_sdb_fields};
use bytes::Bytes;

macro_rules! metadata_only_response {
    ($($(#[$doc:meta])* $ty:ident),* $(,)?) => {
        $(
            $(#[$doc])*
            #[derive(Clone, Debug)]
            pub struct $ty {
                request: SdbRequest,
                body: Bytes,
                metadata: ResponseMetadata,
            }

            impl $ty {
                fn decode(request: SdbRequest, body: Bytes) -> Result<Self, Error> {
                    let root = parse_xml(&body)?;
                    let metadata = ResponseMetadata::from_xml(&root)?;
                    Ok(Self { request, body, metadata })
                }
            }

            impl_from_sdb_response!($ty);
            impl_has_sdb_fields!($ty);
            impl HasDomain for $ty {}
        )*
    };
}

metadata_only_response!(
    /// Response of [create_domain()](crate::sdb::client::SdbClient::create_domain) API
    CreateDomainResponse,
    /// Response of [delete_domain()](crate::sdb::client::SdbClient::delete_domain) API
    DeleteDomainResponse,
    /// Response of [put_attributes()](crate::sdb::client::SdbClient::put_attributes) API
    PutAttributesResponse,
    /// Response of [batch_put_attributes()](crate::sdb::client::SdbClient::batch_put_attributes) API
    BatchPutAttributesResponse,
    /// Response of [delete_attributes()](crate::sdb::client::SdbClient::delete_attributes) API
    DeleteAttributesResponse,
);

impl HasItem for PutAttributesResponse {}
impl HasItem for DeleteAttributesResponse {}
