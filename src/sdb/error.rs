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

//! Error definitions for SimpleDB operations
//!
//! Failures fall into three families that callers may branch on:
//! [`Error::Network`] for transport problems, [`Error::Decode`] for response
//! bodies that are not the expected XML, and [`Error::SdbServer`] for
//! structured errors reported by the service itself.

use crate::sdb::sdb_error_response::SdbErrorResponse;
use thiserror::Error;

/// Errors raised while configuring a client, before any request is sent.
#[derive(Error, Debug)]
pub enum ValidationErr {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("unknown SimpleDB region: {0}")]
    InvalidRegion(String),

    #[error("no credential provider configured")]
    MissingCredentials,

    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    IOError(#[from] std::io::Error),
}

/// Transport level failures.
#[derive(Error, Debug)]
pub enum NetworkError {
    /// Connection, TLS, DNS or body read failure.
    #[error("HTTP request failed: {0}")]
    ReqwestError(#[from] reqwest::Error),

    /// Non-200 response whose error envelope carried no entries.
    #[error("server failed with HTTP status {status} {status_text}")]
    ServerError { status: u16, status_text: String },
}

/// Response bodies that could not be decoded.
#[derive(Error, Debug)]
pub enum DecodeErr {
    #[error("XML parse error: {0}")]
    XmlParseError(#[from] xmltree::ParseError),

    #[error("{0}")]
    XmlError(String),

    #[error("invalid number in <{tag}>: {value}")]
    InvalidNumber { tag: String, value: String },

    /// The body of a non-200 response was not a readable error envelope.
    #[error("unable to decode error response for HTTP status {status}: {source}")]
    ErrorEnvelope {
        status: u16,
        #[source]
        source: xmltree::ParseError,
    },
}

/// Structured errors reported by SimpleDB.
#[derive(Error, Debug)]
pub enum SdbServerError {
    #[error("SimpleDB error: {0}")]
    SdbError(Box<SdbErrorResponse>),
}

/// Error definitions
#[derive(Error, Debug)]
pub enum Error {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationErr),

    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    #[error("decode error: {0}")]
    Decode(#[from] DecodeErr),

    #[error("{0}")]
    SdbServer(#[from] SdbServerError),
}

impl Error {
    /// Returns the structured service error, if this is one.
    pub fn as_sdb_error(&self) -> Option<&SdbErrorResponse> {
        match self {
            Error::SdbServer(SdbServerError::SdbError(e)) => Some(e),
            _ => None,
        }
    }
}

impl From<SdbErrorResponse> for Error {
    fn from(err: SdbErrorResponse) -> Self {
        Error::SdbServer(SdbServerError::SdbError(Box::new(err)))
    }
}
