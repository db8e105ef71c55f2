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

//! Core types and traits for SimpleDB request and response handling.

use crate::sdb::client::SdbClient;
use crate::sdb::error::{DecodeErr, Error};
use crate::sdb::multimap_ext::Multimap;
use crate::sdb::utils::{get_children, get_number_default, get_text_default};
use bytes::Bytes;
use std::fmt;
use typed_builder::TypedBuilder;
use xmltree::Element;

/// Actions of the SimpleDB query API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    ListDomains,
    DomainMetadata,
    CreateDomain,
    DeleteDomain,
    PutAttributes,
    BatchPutAttributes,
    GetAttributes,
    DeleteAttributes,
    Select,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::ListDomains => "ListDomains",
            Action::DomainMetadata => "DomainMetadata",
            Action::CreateDomain => "CreateDomain",
            Action::DeleteDomain => "DeleteDomain",
            Action::PutAttributes => "PutAttributes",
            Action::BatchPutAttributes => "BatchPutAttributes",
            Action::GetAttributes => "GetAttributes",
            Action::DeleteAttributes => "DeleteAttributes",
            Action::Select => "Select",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A name/value pair attached to an [`Item`].
///
/// `replace` asks the service to overwrite existing values instead of adding
/// another one. It is carried on the value only; the write actions do not
/// send it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
    pub replace: bool,
}

impl Attribute {
    pub fn new<N: Into<String>, V: Into<String>>(name: N, value: V) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            replace: false,
        }
    }

    pub fn replace(mut self, replace: bool) -> Self {
        self.replace = replace;
        self
    }

    pub(crate) fn from_xml(element: &Element) -> Self {
        Self::new(
            get_text_default(element, "Name"),
            get_text_default(element, "Value"),
        )
    }
}

/// A named record of a domain.
///
/// Attribute names need not be unique; a repeated name is a multi-valued attribute.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Item {
    pub name: String,
    pub attributes: Vec<Attribute>,
}

impl Item {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    /// Appends an attribute and returns it for further changes.
    pub fn add_attribute<N: Into<String>, V: Into<String>>(
        &mut self,
        name: N,
        value: V,
    ) -> &mut Attribute {
        self.attributes.push(Attribute::new(name, value));
        let last = self.attributes.len() - 1;
        &mut self.attributes[last]
    }

    /// Removes every attribute whose name matches `name` or whose value
    /// matches `value`; returns the last one removed.
    ///
    /// A match on either field is enough, so `remove_attribute("color", "red")`
    /// also drops `("size", "red")`.
    pub fn remove_attribute(&mut self, name: &str, value: &str) -> Option<Attribute> {
        let mut removed = None;
        let attributes = std::mem::take(&mut self.attributes);
        for attr in attributes {
            if attr.name == name || attr.value == value {
                removed = Some(attr);
            } else {
                self.attributes.push(attr);
            }
        }
        removed
    }

    pub(crate) fn from_xml(element: &Element) -> Self {
        Self {
            name: get_text_default(element, "Name"),
            attributes: get_children(element, "Attribute")
                .map(Attribute::from_xml)
                .collect(),
        }
    }
}

/// Per-call metadata returned with every successful response.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResponseMetadata {
    pub request_id: String,
    pub box_usage: f64,
}

impl ResponseMetadata {
    /// Reads `<ResponseMetadata>` under given root; absent metadata decodes as default.
    pub fn from_xml(root: &Element) -> Result<Self, DecodeErr> {
        match root.get_child("ResponseMetadata") {
            None => Ok(Self::default()),
            Some(m) => Ok(Self {
                request_id: get_text_default(m, "RequestId"),
                box_usage: get_number_default(m, "BoxUsage")?,
            }),
        }
    }
}

/// Storage statistics of a domain.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DomainMetadata {
    pub item_count: i64,
    pub item_names_size_bytes: i64,
    pub attribute_name_count: i64,
    pub attribute_names_size_bytes: i64,
    pub attribute_value_count: i64,
    pub attribute_values_size_bytes: i64,
    /// Seconds since the epoch at which the statistics were computed.
    pub timestamp: i64,
}

impl DomainMetadata {
    pub(crate) fn from_xml(result: &Element) -> Result<Self, DecodeErr> {
        Ok(Self {
            item_count: get_number_default(result, "ItemCount")?,
            item_names_size_bytes: get_number_default(result, "ItemNamesSizeBytes")?,
            attribute_name_count: get_number_default(result, "AttributeNameCount")?,
            attribute_names_size_bytes: get_number_default(result, "AttributeNamesSizeBytes")?,
            attribute_value_count: get_number_default(result, "AttributeValueCount")?,
            attribute_values_size_bytes: get_number_default(result, "AttributeValuesSizeBytes")?,
            timestamp: get_number_default(result, "Timestamp")?,
        })
    }
}

#[derive(Clone, Debug, TypedBuilder)]
/// Generic SimpleDB request: one action plus its action-specific fields
pub struct SdbRequest {
    #[builder(!default)] // force required
    pub(crate) client: SdbClient,

    #[builder(!default)] // force required
    action: Action,

    #[builder(default)]
    params: Multimap,
}

impl SdbRequest {
    pub fn action(&self) -> Action {
        self.action
    }

    /// Action-specific fields; protocol fields are added when the request is executed.
    pub fn params(&self) -> &Multimap {
        &self.params
    }

    /// Execute the request, returning the body of a 200 response. Only used in [`SdbApi::send()`]
    pub fn execute(&self) -> Result<Bytes, Error> {
        self.client.execute(self.action, &self.params)
    }
}

/// Trait for converting a request builder into a concrete [`SdbRequest`].
pub trait ToSdbRequest: Sized {
    /// Consumes this request builder and returns a [`SdbRequest`].
    fn to_sdb_request(self) -> SdbRequest;
}

/// Trait for decoding the body of a successful response into a typed response.
///
/// Implemented by every response type; the decode target of an action is
/// chosen at compile time through [`SdbApi::SdbResponse`].
pub trait FromSdbResponse: Sized {
    /// Converts the outcome of [`SdbRequest::execute`] into a typed response.
    fn from_sdb_response(request: SdbRequest, response: Result<Bytes, Error>)
    -> Result<Self, Error>;
}

/// Trait that defines a common interface for all SimpleDB request builders.
pub trait SdbApi: ToSdbRequest {
    /// The response type associated with this request builder.
    type SdbResponse: FromSdbResponse;

    /// Sends the request and returns the corresponding typed response.
    ///
    /// Signing, transport and decoding happen in one blocking round trip;
    /// failures are returned as they occur and never retried.
    fn send(self) -> Result<Self::SdbResponse, Error> {
        let req: SdbRequest = self.to_sdb_request();
        let resp: Result<Bytes, Error> = req.execute();
        Self::SdbResponse::from_sdb_response(req, resp)
    }
}
