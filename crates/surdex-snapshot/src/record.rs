//! Snapshot record format.
//!
//! Record format on disk, repeated until end of stream with no count header:
//! - first_name_len: 8 bytes (u64 LE)
//! - first_name: first_name_len bytes of UTF-8
//! - last_name_len: 8 bytes (u64 LE)
//! - last_name: last_name_len bytes of UTF-8
//! - customer_id: 4 bytes (i32 LE)

use crate::constants::{CUSTOMER_ID_SIZE, LENGTH_PREFIX_SIZE, MAX_FIELD_LEN};
use bytes::{Buf, BufMut, Bytes, BytesMut};
use surdex_common::{CustomerId, Record, Result, SurdexError};

/// Returns the encoded size of a record.
pub fn encoded_len(record: &Record) -> usize {
    2 * LENGTH_PREFIX_SIZE + record.first_name.len() + record.last_name.len() + CUSTOMER_ID_SIZE
}

/// Appends the encoding of `record` to `buf`.
pub fn encode_record(record: &Record, buf: &mut BytesMut) {
    buf.reserve(encoded_len(record));

    buf.put_u64_le(record.first_name.len() as u64);
    buf.put_slice(record.first_name.as_bytes());

    buf.put_u64_le(record.last_name.len() as u64);
    buf.put_slice(record.last_name.as_bytes());

    buf.put_i32_le(record.customer_id.0);
}

/// Serializes a sequence of records into one buffer.
pub fn encode_all<'a>(records: impl IntoIterator<Item = &'a Record>) -> Bytes {
    let mut buf = BytesMut::new();
    for record in records {
        encode_record(record, &mut buf);
    }
    buf.freeze()
}

/// Decodes the record at the front of `data`.
///
/// `offset` is the stream position of `data[0]` and only feeds error
/// messages. On error `data` may be partially consumed; the caller must
/// stop reading.
pub fn decode_record(data: &mut Bytes, offset: u64) -> Result<Record> {
    let start = data.remaining();

    let first_name = decode_name(data, offset, "first name")?;
    let consumed = (start - data.remaining()) as u64;
    let last_name = decode_name(data, offset + consumed, "last name")?;

    if data.remaining() < CUSTOMER_ID_SIZE {
        return Err(SurdexError::SnapshotCorrupted {
            offset: offset + (start - data.remaining()) as u64,
            reason: "truncated customer id".to_string(),
        });
    }
    let customer_id = CustomerId(data.get_i32_le());

    Ok(Record {
        first_name,
        last_name,
        customer_id,
    })
}

fn decode_name(data: &mut Bytes, offset: u64, field: &str) -> Result<String> {
    if data.remaining() < LENGTH_PREFIX_SIZE {
        return Err(SurdexError::SnapshotCorrupted {
            offset,
            reason: format!("truncated {} length", field),
        });
    }

    let len = data.get_u64_le();
    if len > MAX_FIELD_LEN as u64 {
        return Err(SurdexError::SnapshotCorrupted {
            offset,
            reason: format!("{} length {} exceeds {}", field, len, MAX_FIELD_LEN),
        });
    }

    let len = len as usize;
    if data.remaining() < len {
        return Err(SurdexError::SnapshotCorrupted {
            offset,
            reason: format!(
                "truncated {}: need {} bytes, {} left",
                field,
                len,
                data.remaining()
            ),
        });
    }

    let raw = data.copy_to_bytes(len);
    String::from_utf8(raw.to_vec()).map_err(|e| SurdexError::SnapshotCorrupted {
        offset,
        reason: format!("{} is not UTF-8: {}", field, e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoded_layout() {
        let record = Record::new("Ann", "Lee", 1000);
        let bytes = encode_all([&record]);

        assert_eq!(bytes.len(), encoded_len(&record));
        assert_eq!(bytes.len(), 8 + 3 + 8 + 3 + 4);
        assert_eq!(&bytes[0..8], &3u64.to_le_bytes());
        assert_eq!(&bytes[8..11], b"Ann");
        assert_eq!(&bytes[11..19], &3u64.to_le_bytes());
        assert_eq!(&bytes[19..22], b"Lee");
        assert_eq!(&bytes[22..26], &1000i32.to_le_bytes());
    }

    #[test]
    fn test_decode_single_record() {
        let record = Record::new("Émile", "Zoë", 1234);
        let mut data = encode_all([&record]);
        let decoded = decode_record(&mut data, 0).unwrap();
        assert_eq!(decoded, record);
        assert_eq!(data.remaining(), 0);
    }

    #[test]
    fn test_decode_empty_names() {
        let record = Record::new("", "", -1);
        let mut data = encode_all([&record]);
        assert_eq!(data.len(), crate::constants::MIN_RECORD_SIZE);
        assert_eq!(decode_record(&mut data, 0).unwrap(), record);
    }

    #[test]
    fn test_decode_truncated_id() {
        let record = Record::new("Ann", "Lee", 1000);
        let full = encode_all([&record]);
        let mut data = full.slice(..full.len() - 2);
        let err = decode_record(&mut data, 0).unwrap_err();
        assert!(err.to_string().contains("truncated customer id"));
    }

    #[test]
    fn test_decode_truncated_last_name() {
        let record = Record::new("Ann", "Leeson", 1000);
        let full = encode_all([&record]);
        let mut data = full.slice(..22);
        let err = decode_record(&mut data, 100).unwrap_err();
        match err {
            SurdexError::SnapshotCorrupted { offset, reason } => {
                assert_eq!(offset, 111);
                assert!(reason.contains("truncated last name"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_decode_oversized_length() {
        let mut buf = BytesMut::new();
        buf.put_u64_le(u64::MAX);
        let mut data = buf.freeze();
        let err = decode_record(&mut data, 0).unwrap_err();
        assert!(err.to_string().contains("exceeds"));
    }

    #[test]
    fn test_decode_invalid_utf8() {
        let mut buf = BytesMut::new();
        buf.put_u64_le(2);
        buf.put_slice(&[0xff, 0xfe]);
        let mut data = buf.freeze();
        let err = decode_record(&mut data, 0).unwrap_err();
        assert!(err.to_string().contains("not UTF-8"));
    }
}
