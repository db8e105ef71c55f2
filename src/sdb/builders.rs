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

//! Argument builders for [SdbClient](crate::sdb::client::SdbClient) APIs

mod batch_put_attributes;
mod create_domain;
mod delete_attributes;
mod delete_domain;
mod domain_metadata;
mod get_attributes;
mod list_domains;
mod put_attributes;
mod select;

pub use batch_put_attributes::*;
pub use create_domain::*;
pub use delete_attributes::*;
pub use delete_domain::*;
pub use domain_metadata::*;
pub use get_attributes::*;
pub use list_domains::*;
pub use put_attributes::*;
pub use select::*;

use crate::sdb::multimap_ext::{Multimap, MultimapExt};
use crate::sdb::types::Attribute;

/// Adds `<prefix>Attribute.<n>.Name` and `<prefix>Attribute.<n>.Value` for each
/// attribute, numbered from 1. The replace flag is not sent.
pub(crate) fn add_indexed_attributes(params: &mut Multimap, prefix: &str, attributes: &[Attribute]) {
    for (j, a) in attributes.iter().enumerate() {
        let n = j + 1;
        params.add(format!("{prefix}Attribute.{n}.Name"), &a.name);
        params.add(format!("{prefix}Attribute.{n}.Value"), &a.value);
    }
}
