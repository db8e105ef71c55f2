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

//! # SimpleDB Rust SDK (`simpledb`)
//!
//! This crate provides a strongly-typed, blocking interface to the Amazon SimpleDB
//! HTTP+XML API: domain management and item-level attribute operations.
//!
//! Each supported action has a corresponding request builder (e.g., [`sdb::builders::CreateDomain`],
//! [`sdb::builders::PutAttributes`], [`sdb::builders::Select`]), which allows users to configure
//! request parameters using a fluent builder pattern.
//!
//! All request builders implement the [`sdb::types::SdbApi`] trait, which provides the
//! [`send`](crate::sdb::types::SdbApi::send) method to sign and execute the request and
//! return a typed response.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use simpledb::sdb::SdbClient;
//! use simpledb::sdb::http::Region;
//! use simpledb::sdb::types::SdbApi;
//! use simpledb::sdb::response::ListDomainsResponse;
//!
//! let client = SdbClient::new("ACCESS_KEY", "SECRET_KEY", Region::EuWest1).unwrap();
//!
//! let resp: ListDomainsResponse = client
//!     .list_domains()
//!     .build()
//!     .send()
//!     .expect("request failed");
//!
//! println!("domains: {:?}", resp.domain_names());
//! ```
//!
//! ## Design
//! - Each API method on the [`sdb::client::SdbClient`] returns a builder struct
//! - Builders implement [`sdb::types::ToSdbRequest`] for request conversion and [`sdb::types::SdbApi`] for execution
//! - Responses implement [`sdb::types::FromSdbResponse`] for consistent XML decoding
//! - Every failure is returned as `Result<T, Error>`; nothing is retried

#![allow(clippy::result_large_err)]
pub mod sdb;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
