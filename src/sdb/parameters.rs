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

//! Request parameter accumulation for a single action call

use crate::sdb::multimap_ext::{Multimap, MultimapExt};
use crate::sdb::types::Action;
use crate::sdb::utils::{UtcTime, to_sdb_timestamp, utc_now};

pub const AWS_ACCESS_KEY_ID: &str = "AWSAccessKeyId";
pub const SIGNATURE_METHOD: &str = "SignatureMethod";
pub const SIGNATURE_VERSION: &str = "SignatureVersion";
pub const VERSION: &str = "Version";
pub const TIMESTAMP: &str = "Timestamp";
pub const ACTION: &str = "Action";
pub const SIGNATURE: &str = "Signature";

pub const HMAC_SHA256: &str = "HmacSHA256";
pub const SIGNATURE_VERSION_2: &str = "2";
pub const API_VERSION: &str = "2009-04-15";

/// Form fields of one in-flight action.
///
/// A value is seeded with the protocol-fixed fields on creation and on every
/// [`reset`](Self::reset); any signature computed earlier is dropped with it.
#[derive(Clone, Debug)]
pub struct Parameters {
    access_key: String,
    values: Multimap,
}

impl Parameters {
    /// Returns freshly seeded parameters for given access key id.
    pub fn new(access_key: impl Into<String>) -> Self {
        let mut p = Self {
            access_key: access_key.into(),
            values: Multimap::new(),
        };
        p.reset();
        p
    }

    /// Clears all parameters and seeds the fixed fields with the current time.
    pub fn reset(&mut self) {
        self.reset_at(utc_now());
    }

    /// Clears all parameters and seeds the fixed fields with given time.
    pub fn reset_at(&mut self, time: UtcTime) {
        self.values = Multimap::new();
        self.values.add(AWS_ACCESS_KEY_ID, self.access_key.clone());
        self.values.add(SIGNATURE_METHOD, HMAC_SHA256);
        self.values.add(SIGNATURE_VERSION, SIGNATURE_VERSION_2);
        self.values.add(VERSION, API_VERSION);
        self.values.add(TIMESTAMP, to_sdb_timestamp(time));
    }

    /// Adds a value for given key; an existing key gets an additional value.
    pub fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.values.add(key, value);
    }

    pub fn set_action(&mut self, action: Action) {
        self.values.add(ACTION, action.as_str());
    }

    pub fn add_multimap(&mut self, other: Multimap) {
        self.values.add_multimap(other);
    }

    /// Returns the first value of given key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn values(&self) -> &Multimap {
        &self.values
    }

    pub fn get_canonical_query_string(&self) -> String {
        self.values.get_canonical_query_string()
    }
}
