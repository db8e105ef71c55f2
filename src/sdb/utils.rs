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

//! Various utility and helper functions

use crate::sdb::error::DecodeErr;
use base64::engine::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use bytes::{Buf, Bytes};
use chrono::{DateTime, Utc};
use std::str::FromStr;
use xmltree::Element;

pub use urlencoding::decode as urldecode;
pub use urlencoding::encode as urlencode;

/// Date and time with UTC timezone
pub type UtcTime = DateTime<Utc>;

/// Encodes data using base64 algorithm
pub fn b64encode<T: AsRef<[u8]>>(input: T) -> String {
    BASE64.encode(input)
}

/// Gets current UTC time
pub fn utc_now() -> UtcTime {
    chrono::offset::Utc::now()
}

/// Gets the request timestamp value of given time, e.g. `2026-10-17T09:30:00+00:00`
pub fn to_sdb_timestamp(time: UtcTime) -> String {
    time.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
}

/// Parses an XML document from a response body.
pub fn parse_xml(body: &Bytes) -> Result<Element, DecodeErr> {
    Element::parse(body.clone().reader()).map_err(DecodeErr::from)
}

/// Gets optional text value of given XML element for given tag.
pub fn get_text_option(element: &Element, tag: &str) -> Option<String> {
    element
        .get_child(tag)
        .map(|v| v.get_text().unwrap_or_default().to_string())
}

/// Gets default text value of given XML element for given tag.
pub fn get_text_default(element: &Element, tag: &str) -> String {
    get_text_option(element, tag).unwrap_or_default()
}

/// Parses the numeric text of given tag; a missing tag yields the default value.
pub fn get_number_default<T>(element: &Element, tag: &str) -> Result<T, DecodeErr>
where
    T: FromStr + Default,
{
    match get_text_option(element, tag) {
        None => Ok(T::default()),
        Some(v) => {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                return Ok(T::default());
            }
            trimmed.parse::<T>().map_err(|_| DecodeErr::InvalidNumber {
                tag: tag.to_string(),
                value: v.clone(),
            })
        }
    }
}

/// Returns all child elements with given tag name, in document order.
pub fn get_children<'a>(element: &'a Element, tag: &'a str) -> impl Iterator<Item = &'a Element> {
    element
        .children
        .iter()
        .filter_map(|node| node.as_element())
        .filter(move |e| e.name == tag)
}
