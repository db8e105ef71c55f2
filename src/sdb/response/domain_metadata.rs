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

use crate::sdb::error::Error;
use crate::sdb::response::get_result;
use crate::sdb::response_traits::HasDomain;
use crate::sdb::types::{DomainMetadata, ResponseMetadata, SdbRequest};
use crate::sdb::utils::parse_xml;
use crate::{impl_from_sdb_response, impl_has_sdb_fields};
use bytes::Bytes;

/// Response of
/// [domain_metadata()](crate::sdb::client::SdbClient::domain_metadata)
/// API
#[derive(Clone, Debug)]
pub struct DomainMetadataResponse {
    request: SdbRequest,
    body: Bytes,
    metadata: ResponseMetadata,
    domain_metadata: DomainMetadata,
}

impl_from_sdb_response!(DomainMetadataResponse);
impl_has_sdb_fields!(DomainMetadataResponse);

impl HasDomain for DomainMetadataResponse {}

impl DomainMetadataResponse {
    fn decode(request: SdbRequest, body: Bytes) -> Result<Self, Error> {
        let root = parse_xml(&body)?;
        let domain_metadata = DomainMetadata::from_xml(get_result(&root, "DomainMetadataResult")?)?;
        let metadata = ResponseMetadata::from_xml(&root)?;

        Ok(Self {
            request,
            body,
            metadata,
            domain_metadata,
        })
    }

    /// Returns the storage statistics of the domain.
    pub fn domain_metadata(&self) -> &DomainMetadata {
        &self.domain_metadata
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdb::builders::test_support::offline_client;
    use crate::sdb::error::DecodeErr;
    use crate::sdb::types::{Action, FromSdbResponse};

    fn request() -> SdbRequest {
        SdbRequest::builder()
            .client(offline_client())
            .action(Action::DomainMetadata)
            .build()
    }

    #[test]
    fn test_decode() {
        let body = Bytes::from_static(
            b"<DomainMetadataResponse><DomainMetadataResult>\
              <ItemCount>195078</ItemCount><ItemNamesSizeBytes>2586634</ItemNamesSizeBytes>\
              <AttributeNameCount>12</AttributeNameCount><AttributeNamesSizeBytes>120</AttributeNamesSizeBytes>\
              <AttributeValueCount>3690416</AttributeValueCount><AttributeValuesSizeBytes>50149756</AttributeValuesSizeBytes>\
              <Timestamp>1225486466</Timestamp></DomainMetadataResult>\
              <ResponseMetadata><RequestId>b1e8f1f7</RequestId><BoxUsage>0.0000071759</BoxUsage>\
              </ResponseMetadata></DomainMetadataResponse>",
        );
        let resp = DomainMetadataResponse::from_sdb_response(request(), Ok(body)).unwrap();
        let m = resp.domain_metadata();
        assert_eq!(m.item_count, 195078);
        assert_eq!(m.attribute_name_count, 12);
        assert_eq!(m.attribute_values_size_bytes, 50149756);
        assert_eq!(m.timestamp, 1225486466);
    }

    #[test]
    fn test_non_numeric_count_is_decode_error() {
        let body = Bytes::from_static(
            b"<DomainMetadataResponse><DomainMetadataResult><ItemCount>many</ItemCount>\
              </DomainMetadataResult></DomainMetadataResponse>",
        );
        let err = DomainMetadataResponse::from_sdb_response(request(), Ok(body)).unwrap_err();
        assert!(matches!(
            err,
            Error::Decode(DecodeErr::InvalidNumber { ref tag, .. }) if tag == "ItemCount"
        ));
    }
}
