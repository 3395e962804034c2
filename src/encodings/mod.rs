// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::errors::{Error, Result};

/// The closed set of value encodings the format defines.
///
/// Each variant carries a stable on-wire code used in page headers. The set
/// is fixed: adding an encoding is a format change, never configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[allow(non_camel_case_types)]
pub enum Encoding {
    /// Default byte encoding.
    /// - BOOLEAN - 1 bit per value, 0 is false; 1 is true.
    /// - NUMBER - fixed width per value, byte order dependent.
    /// - BYTE_ARRAY - 4 byte length prefix, followed by bytes.
    PLAIN,

    /// Deprecated dictionary encoding carrying the dictionary inline.
    PLAIN_DICTIONARY,

    /// Run-length / bit-packed hybrid encoding.
    ///
    /// Mixes repeated-value runs with densely bit-packed literal runs; run
    /// headers use the unsigned varint convention. Also the fixed encoding
    /// for definition and repetition levels.
    RLE,

    /// Bit-packed only, deprecated in favour of the hybrid scheme.
    BIT_PACKED,

    /// Delta encoding for integers, either INT32 or INT64.
    /// Works best on sorted data.
    DELTA_BINARY_PACKED,

    /// Encoding for byte arrays to separate the length values and the data.
    ///
    /// The lengths are encoded using DELTA_BINARY_PACKED encoding.
    DELTA_LENGTH_BYTE_ARRAY,

    /// Incremental encoding for byte arrays.
    ///
    /// Prefix lengths are encoded using DELTA_BINARY_PACKED encoding.
    /// Suffixes are stored using DELTA_LENGTH_BYTE_ARRAY encoding.
    DELTA_BYTE_ARRAY,

    /// Dictionary encoding.
    ///
    /// The ids are encoded using the RLE encoding.
    RLE_DICTIONARY,

    /// Byte-level split of floating point values for better compression.
    BYTE_STREAM_SPLIT,
}

impl Encoding {
    /// The stable wire code carried in page headers. Never renumbered.
    pub fn code(&self) -> i32 {
        match self {
            Encoding::PLAIN => 0,
            Encoding::PLAIN_DICTIONARY => 2,
            Encoding::RLE => 3,
            Encoding::BIT_PACKED => 4,
            Encoding::DELTA_BINARY_PACKED => 5,
            Encoding::DELTA_LENGTH_BYTE_ARRAY => 6,
            Encoding::DELTA_BYTE_ARRAY => 7,
            Encoding::RLE_DICTIONARY => 8,
            Encoding::BYTE_STREAM_SPLIT => 9,
        }
    }

    /// The fixed encoding for definition and repetition levels in v1 data
    /// pages. A format convention, not a choice.
    pub fn levels() -> Encoding {
        Encoding::RLE
    }

    /// Whether this encoding is valid for definition/repetition levels.
    pub fn supports_levels(&self) -> bool {
        matches!(self, Encoding::RLE | Encoding::BIT_PACKED)
    }
}

impl TryFrom<i32> for Encoding {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self> {
        Ok(match code {
            0 => Encoding::PLAIN,
            2 => Encoding::PLAIN_DICTIONARY,
            3 => Encoding::RLE,
            4 => Encoding::BIT_PACKED,
            5 => Encoding::DELTA_BINARY_PACKED,
            6 => Encoding::DELTA_LENGTH_BYTE_ARRAY,
            7 => Encoding::DELTA_BYTE_ARRAY,
            8 => Encoding::RLE_DICTIONARY,
            9 => Encoding::BYTE_STREAM_SPLIT,
            other => return Err(Error::UnknownEncoding(other)),
        })
    }
}
