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

//! Error envelope returned by SimpleDB for failed requests
//!
//! ```xml
//! <Response>
//!   <Errors>
//!     <Error><Code>InvalidParameterValue</Code><Message>...</Message><BoxUsage>0.0000219907</BoxUsage></Error>
//!   </Errors>
//!   <RequestID>e1d1a53b-...</RequestID>
//! </Response>
//! ```

use crate::sdb::utils::{get_children, get_text_default, get_text_option};
use bytes::{Buf, Bytes};
use std::convert::Infallible;
use std::str::FromStr;
use xmltree::Element;

/// Error codes as returned by SimpleDB.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SdbErrorCode {
    /// Access to the resource is denied
    AccessFailure,
    /// AWS was not able to validate the provided access credentials
    AuthFailure,
    /// AWS was not able to authenticate the request: access credentials are missing
    AuthMissingFailure,
    /// The item name was specified more than once in a batch
    DuplicateItemName,
    /// The requested feature is no longer supported
    FeatureDeprecated,
    /// Request could not be completed because of an internal error
    InternalError,
    /// Too many value tests in a single predicate
    InvalidNumberValueTests,
    /// The specified next token is not valid
    InvalidNextToken,
    /// A parameter value is empty or not valid
    InvalidParameterValue,
    /// The query expression is not valid
    InvalidQueryExpression,
    /// The request signature does not match the one computed by the service
    SignatureDoesNotMatch,
    /// The request timestamp is outside the accepted window
    RequestExpired,
    /// A required parameter is missing
    MissingParameter,
    /// The specified domain does not exist
    NoSuchDomain,
    /// Too many domains exist for this account
    NumberDomainsExceeded,
    /// Too many attributes for this item
    NumberItemAttributesExceeded,
    /// The service is temporarily unavailable
    ServiceUnavailable,
    /// The request took too long to complete
    RequestTimeout,
    /// The access key id does not exist
    InvalidClientTokenId,
    /// The conditional check of a write failed
    ConditionalCheckFailed,
    /// An attribute referenced by a condition does not exist
    AttributeDoesNotExist,

    #[default]
    NoError,

    OtherError(String), // This is a catch-all for any error code not explicitly defined
}

#[allow(dead_code)]
const ALL_SDB_ERROR_CODE: &[SdbErrorCode] = &[
    SdbErrorCode::AccessFailure,
    SdbErrorCode::AuthFailure,
    SdbErrorCode::AuthMissingFailure,
    SdbErrorCode::DuplicateItemName,
    SdbErrorCode::FeatureDeprecated,
    SdbErrorCode::InternalError,
    SdbErrorCode::InvalidNumberValueTests,
    SdbErrorCode::InvalidNextToken,
    SdbErrorCode::InvalidParameterValue,
    SdbErrorCode::InvalidQueryExpression,
    SdbErrorCode::SignatureDoesNotMatch,
    SdbErrorCode::RequestExpired,
    SdbErrorCode::MissingParameter,
    SdbErrorCode::NoSuchDomain,
    SdbErrorCode::NumberDomainsExceeded,
    SdbErrorCode::NumberItemAttributesExceeded,
    SdbErrorCode::ServiceUnavailable,
    SdbErrorCode::RequestTimeout,
    SdbErrorCode::InvalidClientTokenId,
    SdbErrorCode::ConditionalCheckFailed,
    SdbErrorCode::AttributeDoesNotExist,
    SdbErrorCode::NoError,
];

impl FromStr for SdbErrorCode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Infallible> {
        match s {
            "AccessFailure" => Ok(SdbErrorCode::AccessFailure),
            "AuthFailure" => Ok(SdbErrorCode::AuthFailure),
            "AuthMissingFailure" => Ok(SdbErrorCode::AuthMissingFailure),
            "DuplicateItemName" => Ok(SdbErrorCode::DuplicateItemName),
            "FeatureDeprecated" => Ok(SdbErrorCode::FeatureDeprecated),
            "InternalError" => Ok(SdbErrorCode::InternalError),
            "InvalidNumberValueTests" => Ok(SdbErrorCode::InvalidNumberValueTests),
            "InvalidNextToken" => Ok(SdbErrorCode::InvalidNextToken),
            "InvalidParameterValue" => Ok(SdbErrorCode::InvalidParameterValue),
            "InvalidQueryExpression" => Ok(SdbErrorCode::InvalidQueryExpression),
            "SignatureDoesNotMatch" => Ok(SdbErrorCode::SignatureDoesNotMatch),
            "RequestExpired" => Ok(SdbErrorCode::RequestExpired),
            "MissingParameter" => Ok(SdbErrorCode::MissingParameter),
            "NoSuchDomain" => Ok(SdbErrorCode::NoSuchDomain),
            "NumberDomainsExceeded" => Ok(SdbErrorCode::NumberDomainsExceeded),
            "NumberItemAttributesExceeded" => Ok(SdbErrorCode::NumberItemAttributesExceeded),
            "ServiceUnavailable" => Ok(SdbErrorCode::ServiceUnavailable),
            "RequestTimeout" => Ok(SdbErrorCode::RequestTimeout),
            "InvalidClientTokenId" => Ok(SdbErrorCode::InvalidClientTokenId),
            "ConditionalCheckFailed" => Ok(SdbErrorCode::ConditionalCheckFailed),
            "AttributeDoesNotExist" => Ok(SdbErrorCode::AttributeDoesNotExist),
            "" | "NoError" => Ok(SdbErrorCode::NoError),
            v => Ok(SdbErrorCode::OtherError(v.to_owned())),
        }
    }
}

impl std::fmt::Display for SdbErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SdbErrorCode::AccessFailure => "AccessFailure",
            SdbErrorCode::AuthFailure => "AuthFailure",
            SdbErrorCode::AuthMissingFailure => "AuthMissingFailure",
            SdbErrorCode::DuplicateItemName => "DuplicateItemName",
            SdbErrorCode::FeatureDeprecated => "FeatureDeprecated",
            SdbErrorCode::InternalError => "InternalError",
            SdbErrorCode::InvalidNumberValueTests => "InvalidNumberValueTests",
            SdbErrorCode::InvalidNextToken => "InvalidNextToken",
            SdbErrorCode::InvalidParameterValue => "InvalidParameterValue",
            SdbErrorCode::InvalidQueryExpression => "InvalidQueryExpression",
            SdbErrorCode::SignatureDoesNotMatch => "SignatureDoesNotMatch",
            SdbErrorCode::RequestExpired => "RequestExpired",
            SdbErrorCode::MissingParameter => "MissingParameter",
            SdbErrorCode::NoSuchDomain => "NoSuchDomain",
            SdbErrorCode::NumberDomainsExceeded => "NumberDomainsExceeded",
            SdbErrorCode::NumberItemAttributesExceeded => "NumberItemAttributesExceeded",
            SdbErrorCode::ServiceUnavailable => "ServiceUnavailable",
            SdbErrorCode::RequestTimeout => "RequestTimeout",
            SdbErrorCode::InvalidClientTokenId => "InvalidClientTokenId",
            SdbErrorCode::ConditionalCheckFailed => "ConditionalCheckFailed",
            SdbErrorCode::AttributeDoesNotExist => "AttributeDoesNotExist",
            SdbErrorCode::NoError => "NoError",
            SdbErrorCode::OtherError(msg) => msg,
        };
        f.write_str(s)
    }
}

/// SdbErrorResponse is the typed error returned by all API operations.
#[derive(Clone, Debug)]
pub struct SdbErrorResponse {
    status: u16,
    code: SdbErrorCode,
    message: String,
    request_id: String,
    box_usage: Option<f64>,
}

impl SdbErrorResponse {
    pub fn new(
        status: u16,
        code: SdbErrorCode,
        message: impl Into<String>,
        request_id: impl Into<String>,
    ) -> Self {
        Self {
            status,
            code,
            message: message.into(),
            request_id: request_id.into(),
            box_usage: None,
        }
    }

    /// HTTP status of the response that carried this error.
    pub fn status(&self) -> u16 {
        self.status
    }
    pub fn code(&self) -> SdbErrorCode {
        self.code.clone()
    }
    pub fn message(&self) -> &str {
        &self.message
    }
    pub fn request_id(&self) -> &str {
        &self.request_id
    }
    pub fn box_usage(&self) -> Option<f64> {
        self.box_usage
    }
}

impl std::fmt::Display for SdbErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} (status: {}, request_id: {})",
            self.code, self.message, self.status, self.request_id
        )
    }
}

impl std::error::Error for SdbErrorResponse {}

/// All error entries of one failed response, in document order.
#[derive(Clone, Debug, Default)]
pub struct SdbErrorEnvelope {
    pub errors: Vec<SdbErrorResponse>,
    pub request_id: String,
}

impl SdbErrorEnvelope {
    /// Decodes the error envelope of a response with given HTTP status.
    ///
    /// An entry without its own request id takes the envelope's `RequestID`.
    pub fn parse(status: u16, body: &Bytes) -> Result<Self, xmltree::ParseError> {
        let root = Element::parse(body.clone().reader())?;
        let request_id = get_text_option(&root, "RequestID")
            .or_else(|| get_text_option(&root, "RequestId"))
            .unwrap_or_default();

        let mut errors = Vec::new();
        for group in get_children(&root, "Errors") {
            for e in get_children(group, "Error") {
                let Ok(code) = SdbErrorCode::from_str(&get_text_default(e, "Code"));
                errors.push(SdbErrorResponse {
                    status,
                    code,
                    message: get_text_default(e, "Message"),
                    request_id: get_text_option(e, "RequestId")
                        .unwrap_or_else(|| request_id.clone()),
                    box_usage: get_text_option(e, "BoxUsage").and_then(|v| v.trim().parse().ok()),
                });
            }
        }

        Ok(Self { errors, request_id })
    }

    /// Takes the first error entry; later entries are not reported.
    pub fn into_first(self) -> Option<SdbErrorResponse> {
        self.errors.into_iter().next()
    }
}
