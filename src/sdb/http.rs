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

//! Endpoint handling: SimpleDB regions and base URLs

use crate::sdb::error::ValidationErr;
use http::Uri;
use std::fmt;
use std::str::FromStr;

/// SimpleDB regional endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Region {
    UsEast1,
    UsWest1,
    UsWest2,
    #[default]
    EuWest1,
    ApSoutheast1,
    ApSoutheast2,
    ApNortheast1,
    SaEast1,
}

impl Region {
    /// Returns the region identifier, e.g. `eu-west-1`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::UsEast1 => "us-east-1",
            Region::UsWest1 => "us-west-1",
            Region::UsWest2 => "us-west-2",
            Region::EuWest1 => "eu-west-1",
            Region::ApSoutheast1 => "ap-southeast-1",
            Region::ApSoutheast2 => "ap-southeast-2",
            Region::ApNortheast1 => "ap-northeast-1",
            Region::SaEast1 => "sa-east-1",
        }
    }

    /// Returns the endpoint host of this region.
    pub fn host(&self) -> &'static str {
        match self {
            Region::UsEast1 => "sdb.amazonaws.com",
            Region::UsWest1 => "sdb.us-west-1.amazonaws.com",
            Region::UsWest2 => "sdb.us-west-2.amazonaws.com",
            Region::EuWest1 => "sdb.eu-west-1.amazonaws.com",
            Region::ApSoutheast1 => "sdb.ap-southeast-1.amazonaws.com",
            Region::ApSoutheast2 => "sdb.ap-southeast-2.amazonaws.com",
            Region::ApNortheast1 => "sdb.ap-northeast-1.amazonaws.com",
            Region::SaEast1 => "sdb.sa-east-1.amazonaws.com",
        }
    }
}

impl FromStr for Region {
    type Err = ValidationErr;

    fn from_str(s: &str) -> Result<Self, ValidationErr> {
        match s {
            "us-east-1" => Ok(Region::UsEast1),
            "us-west-1" => Ok(Region::UsWest1),
            "us-west-2" => Ok(Region::UsWest2),
            "eu-west-1" => Ok(Region::EuWest1),
            "ap-southeast-1" => Ok(Region::ApSoutheast1),
            "ap-southeast-2" => Ok(Region::ApSoutheast2),
            "ap-northeast-1" => Ok(Region::ApNortheast1),
            "sa-east-1" => Ok(Region::SaEast1),
            _ => Err(ValidationErr::InvalidRegion(s.to_string())),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Base URL of the SimpleDB service; requests always go to its root path
pub struct BaseUrl {
    pub https: bool,
    pub host: String,
    pub port: u16,
}

impl BaseUrl {
    /// Value of the `Host` header, which is also the host signed in the string-to-sign.
    pub fn host_header_value(&self) -> String {
        if self.port > 0 {
            return format!("{}:{}", self.host, self.port);
        }
        self.host.clone()
    }
}

impl From<Region> for BaseUrl {
    fn from(region: Region) -> Self {
        Self {
            https: true,
            host: region.host().to_string(),
            port: 0,
        }
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.https {
            f.write_str("https://")?;
        } else {
            f.write_str("http://")?;
        }
        f.write_str(&self.host_header_value())?;
        f.write_str("/")
    }
}

impl FromStr for BaseUrl {
    type Err = ValidationErr;

    /// Convert a string to a BaseUrl.
    ///
    /// # Examples
    ///
    /// ```
    /// use simpledb::sdb::http::BaseUrl;
    ///
    /// // Get base URL from host name; https is assumed
    /// let base_url: BaseUrl = "sdb.eu-west-1.amazonaws.com".parse().unwrap();
    /// // Get base URL of a local endpoint
    /// let base_url: BaseUrl = "http://127.0.0.1:8080".parse().unwrap();
    /// ```
    fn from_str(s: &str) -> Result<Self, ValidationErr> {
        let url = s
            .parse::<Uri>()
            .map_err(|e| ValidationErr::InvalidBaseUrl(e.to_string()))?;

        let https = match url.scheme() {
            None => true,
            Some(scheme) => match scheme.as_str() {
                "http" => false,
                "https" => true,
                _ => {
                    return Err(ValidationErr::InvalidBaseUrl(
                        "scheme must be http or https".into(),
                    ));
                }
            },
        };

        let mut host = match url.host() {
            Some(h) => h.to_string(),
            _ => {
                return Err(ValidationErr::InvalidBaseUrl(
                    "valid host must be provided".into(),
                ));
            }
        };

        if host.parse::<std::net::Ipv6Addr>().is_ok() {
            host = format!("[{host}]");
        }

        let mut port = match url.port() {
            Some(p) => p.as_u16(),
            _ => 0u16,
        };

        if (https && port == 443) || (!https && port == 80) {
            port = 0u16;
        }

        if url.path() != "/" && !url.path().is_empty() {
            return Err(ValidationErr::InvalidBaseUrl(
                "path must be empty for base URL".into(),
            ));
        }

        if url.query().is_some() {
            return Err(ValidationErr::InvalidBaseUrl(
                "query must be none for base URL".into(),
            ));
        }

        Ok(BaseUrl {
            https,
            host: host.to_lowercase(),
            port,
        })
    }
}
