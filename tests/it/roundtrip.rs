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

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use pagepack::read::{BinaryBufferReader, BinaryReader};
use pagepack::write::{BinaryBufferWriter, BinaryWriter};
use pagepack::ByteOrder;

const ORDERS: [ByteOrder; 2] = [ByteOrder::LittleEndian, ByteOrder::BigEndian];

fn reader_for(writer: BinaryBufferWriter, byte_order: ByteOrder) -> BinaryBufferReader {
    BinaryBufferReader::new(writer.into_inner(), byte_order)
}

#[test]
fn ints32_boundaries() {
    let values = vec![0, 1, -1, i32::MIN, i32::MAX];
    for byte_order in ORDERS {
        let mut writer = BinaryBufferWriter::new(byte_order);
        writer.write_ints32(&values);

        let mut reader = reader_for(writer, byte_order);
        assert_eq!(reader.read_ints32(values.len()).unwrap(), values);
        assert_eq!(reader.remaining(), 0);
    }
}

#[test]
fn ints64_boundaries() {
    let values = vec![0, 1, -1, i64::MIN, i64::MAX];
    for byte_order in ORDERS {
        let mut writer = BinaryBufferWriter::new(byte_order);
        writer.write_ints64(&values);

        let mut reader = reader_for(writer, byte_order);
        assert_eq!(reader.read_ints64(values.len()).unwrap(), values);
    }
}

#[test]
fn floats_and_doubles() {
    let doubles = vec![0.0, -0.0, 1.5, -123.25, f64::MIN, f64::MAX, f64::INFINITY];
    let floats = vec![0.0, -0.0, 1.5f32, f32::MIN, f32::MAX, f32::NEG_INFINITY];

    for byte_order in ORDERS {
        let mut writer = BinaryBufferWriter::new(byte_order);
        writer.write_doubles(&doubles);
        writer.write_floats(&floats);

        let mut reader = reader_for(writer, byte_order);
        assert_eq!(reader.read_doubles(doubles.len()).unwrap(), doubles);
        assert_eq!(reader.read_floats(floats.len()).unwrap(), floats);
    }
}

#[test]
fn booleans_across_byte_boundaries() {
    for byte_order in ORDERS {
        for count in [0usize, 1, 7, 8, 9, 64, 1000] {
            let values: Vec<bool> = (0..count).map(|i| i % 3 == 0).collect();

            let mut writer = BinaryBufferWriter::new(byte_order);
            writer.write_booleans(&values);
            assert_eq!(writer.length().bytes() as usize, (count + 7) / 8);

            let mut reader = reader_for(writer, byte_order);
            assert_eq!(reader.read_booleans(count).unwrap(), values);
        }
    }
}

#[test]
fn strings_including_empty_and_multibyte() {
    let values = ["", "a", "pagepack", "zażółć", "日本語"];
    for byte_order in ORDERS {
        let mut writer = BinaryBufferWriter::new(byte_order);
        writer.write_strings(&values);

        let mut reader = reader_for(writer, byte_order);
        assert_eq!(reader.read_strings(values.len()).unwrap(), values);
    }
}

#[test]
fn var_ints32_boundaries() {
    let values = vec![0, 1, 127, 128, 16383, 16384, u32::MAX - 1, u32::MAX];
    let mut writer = BinaryBufferWriter::new(ByteOrder::LittleEndian);
    writer.write_var_ints32(&values);

    let mut reader = reader_for(writer, ByteOrder::LittleEndian);
    assert_eq!(reader.read_var_ints32(values.len()).unwrap(), values);
    assert_eq!(reader.remaining(), 0);
}

#[test]
fn decimals_scale_back_exactly() {
    let values = vec![0.0, 12.34, -12.34, 999.99, -0.01];
    for byte_order in ORDERS {
        let mut writer = BinaryBufferWriter::new(byte_order);
        writer.write_decimals(&values, 8, 18, 2).unwrap();

        let mut reader = reader_for(writer, byte_order);
        assert_eq!(reader.read_decimals(values.len(), 8, 2).unwrap(), values);
    }
}

#[test]
fn randomized_mixed_pages() {
    let mut rng = StdRng::seed_from_u64(42);

    for byte_order in ORDERS {
        for _ in 0..20 {
            let ints32: Vec<i32> = (0..rng.gen_range(0..200)).map(|_| rng.gen()).collect();
            let ints64: Vec<i64> = (0..rng.gen_range(0..200)).map(|_| rng.gen()).collect();
            let doubles: Vec<f64> = (0..rng.gen_range(0..200)).map(|_| rng.gen()).collect();
            let varints: Vec<u32> = (0..rng.gen_range(0..200)).map(|_| rng.gen()).collect();
            let booleans: Vec<bool> = (0..rng.gen_range(0..200)).map(|_| rng.gen()).collect();

            let mut writer = BinaryBufferWriter::new(byte_order);
            writer.write_ints32(&ints32);
            writer.write_ints64(&ints64);
            writer.write_doubles(&doubles);
            writer.write_var_ints32(&varints);
            writer.write_booleans(&booleans);
            assert_eq!(writer.length().bytes() as usize, writer.buffer().len());

            let mut reader = reader_for(writer, byte_order);
            assert_eq!(reader.read_ints32(ints32.len()).unwrap(), ints32);
            assert_eq!(reader.read_ints64(ints64.len()).unwrap(), ints64);
            assert_eq!(reader.read_doubles(doubles.len()).unwrap(), doubles);
            assert_eq!(reader.read_var_ints32(varints.len()).unwrap(), varints);
            assert_eq!(reader.read_booleans(booleans.len()).unwrap(), booleans);
            assert_eq!(reader.remaining(), 0);
        }
    }
}
