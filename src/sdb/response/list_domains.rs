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
use crate::sdb::types::{ResponseMetadata, SdbRequest};
use crate::sdb::utils::{get_children, parse_xml};
use crate::{impl_from_sdb_response, impl_has_sdb_fields};
use bytes::Bytes;

/// Response of
/// [list_domains()](crate::sdb::client::SdbClient::list_domains)
/// API
#[derive(Clone, Debug)]
pub struct ListDomainsResponse {
    request: SdbRequest,
    body: Bytes,
    metadata: ResponseMetadata,
    domain_names: Vec<String>,
}

impl_from_sdb_response!(ListDomainsResponse);
impl_has_sdb_fields!(ListDomainsResponse);

impl ListDomainsResponse {
    fn decode(request: SdbRequest, body: Bytes) -> Result<Self, Error> {
        let root = parse_xml(&body)?;
        let result = get_result(&root, "ListDomainsResult")?;
        let domain_names = get_children(result, "DomainName")
            .map(|e| e.get_text().unwrap_or_default().to_string())
            .collect();
        let metadata = ResponseMetadata::from_xml(&root)?;

        Ok(Self {
            request,
            body,
            metadata,
            domain_names,
        })
    }

    /// Returns the names of all domains, in the order the service listed them.
    pub fn domain_names(&self) -> &[String] {
        &self.domain_names
    }
}
