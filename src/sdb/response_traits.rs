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

//! Accessors shared by all SimpleDB responses.

use crate::sdb::types::{ResponseMetadata, SdbRequest};
use bytes::Bytes;

#[macro_export]
/// Implements the `FromSdbResponse` trait for the specified types.
///
/// Each type provides `fn decode(request: SdbRequest, body: Bytes) -> Result<Self, Error>`;
/// a failed request is passed through unchanged.
macro_rules! impl_from_sdb_response {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::sdb::types::FromSdbResponse for $ty {
                fn from_sdb_response(
                    request: $crate::sdb::types::SdbRequest,
                    response: Result<bytes::Bytes, $crate::sdb::error::Error>,
                ) -> Result<Self, $crate::sdb::error::Error> {
                    let body: bytes::Bytes = response?;
                    Self::decode(request, body)
                }
            }
        )*
    };
}

#[macro_export]
/// Implements the `HasSdbFields` and `HasResponseMetadata` traits for the specified types.
macro_rules! impl_has_sdb_fields {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::sdb::response_traits::HasSdbFields for $ty {
                /// The request that was sent to the SimpleDB API.
                fn request(&self) -> &$crate::sdb::types::SdbRequest {
                    &self.request
                }

                /// The raw XML body of the response.
                fn body(&self) -> &bytes::Bytes {
                    &self.body
                }
            }

            impl $crate::sdb::response_traits::HasResponseMetadata for $ty {
                fn metadata(&self) -> &$crate::sdb::types::ResponseMetadata {
                    &self.metadata
                }
            }
        )*
    };
}

pub trait HasSdbFields {
    /// The request that was sent to the SimpleDB API.
    fn request(&self) -> &SdbRequest;
    /// The raw XML body of the response.
    fn body(&self) -> &Bytes;
}

/// Per-call metadata found in every successful response.
pub trait HasResponseMetadata: HasSdbFields {
    fn metadata(&self) -> &ResponseMetadata;

    /// Returns the request id assigned by the service.
    #[inline]
    fn request_id(&self) -> &str {
        &self.metadata().request_id
    }

    /// Returns the box usage charged for the call.
    #[inline]
    fn box_usage(&self) -> f64 {
        self.metadata().box_usage
    }
}

/// Returns the domain name the request was sent for.
pub trait HasDomain: HasSdbFields {
    #[inline]
    fn domain(&self) -> &str {
        self.request()
            .params()
            .get("DomainName")
            .map(String::as_str)
            .unwrap_or_default()
    }
}

/// Returns the item name the request was sent for.
pub trait HasItem: HasSdbFields {
    #[inline]
    fn item(&self) -> &str {
        self.request()
            .params()
            .get("ItemName")
            .map(String::as_str)
            .unwrap_or_default()
    }
}
