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

//! Signature Version 2 for the SimpleDB query API

use crate::sdb::parameters::{Parameters, SIGNATURE};
use crate::sdb::utils::b64encode;
#[cfg(not(feature = "ring"))]
use hmac::{Hmac, Mac};
#[cfg(feature = "ring")]
use ring::hmac;
#[cfg(not(feature = "ring"))]
use sha2::Sha256;

/// The only HTTP method the query API is signed for.
pub const SIGNED_METHOD: &str = "POST";

/// The only path the query API is signed for.
pub const SIGNED_PATH: &str = "/";

/// Returns HMAC-SHA256 hash for given key and data
#[cfg(not(feature = "ring"))]
pub fn hmac_hash(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut hasher = Hmac::<Sha256>::new_from_slice(key).expect("HMAC can take key of any size");
    hasher.update(data);
    hasher.finalize().into_bytes().to_vec()
}

/// Returns HMAC-SHA256 hash for given key and data
#[cfg(feature = "ring")]
pub fn hmac_hash(key: &[u8], data: &[u8]) -> Vec<u8> {
    let key = hmac::Key::new(hmac::HMAC_SHA256, key);
    hmac::sign(&key, data).as_ref().to_vec()
}

/// Returns string-to-sign value of given host and canonical query string
pub fn get_string_to_sign(host: &str, canonical_query_string: &str) -> String {
    // StringToSign =
    //   HTTPVerb + '\n' +
    //   ValueOfHostHeaderInLowercase + '\n' +
    //   HTTPRequestURI + '\n' +
    //   CanonicalizedQueryString
    format!(
        "{}\n{}\n{}\n{}",
        SIGNED_METHOD,
        host.to_lowercase(),
        SIGNED_PATH,
        canonical_query_string
    )
}

/// Returns base64 encoded signature value for given secret key and string-to-sign
pub fn get_signature(secret_key: &str, string_to_sign: &str) -> String {
    b64encode(hmac_hash(secret_key.as_bytes(), string_to_sign.as_bytes()))
}

/// Signs given parameters and returns the request body to transmit.
///
/// The `Signature` field is added to `params`; the returned body is the
/// canonical query string of the signed parameters.
pub fn sign_v2(host: &str, params: &mut Parameters, secret_key: &str) -> String {
    let string_to_sign = get_string_to_sign(host, &params.get_canonical_query_string());
    let signature = get_signature(secret_key, &string_to_sign);
    params.add(SIGNATURE, signature);
    params.get_canonical_query_string()
}
