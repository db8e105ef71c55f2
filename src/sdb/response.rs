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

//! Responses for [SdbClient](crate::sdb::client::SdbClient) APIs

mod domain_metadata;
mod get_attributes;
mod list_domains;
mod metadata_only;
mod select;

pub use domain_metadata::DomainMetadataResponse;
pub use get_attributes::GetAttributesResponse;
pub use list_domains::ListDomainsResponse;
pub use metadata_only::{
    BatchPutAttributesResponse, CreateDomainResponse, DeleteAttributesResponse,
    DeleteDomainResponse, PutAttributesResponse,
};
pub use select::SelectResponse;

use crate::sdb::error::DecodeErr;
use xmltree::Element;

/// Returns the action result element, which every data-carrying response must have.
pub(crate) fn get_result<'a>(root: &'a Element, tag: &str) -> Result<&'a Element, DecodeErr> {
    root.get_child(tag)
        .ok_or_else(|| DecodeErr::XmlError(format!("<{tag}> tag not found")))
}
