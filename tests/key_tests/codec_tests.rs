//! Codec Tests
//!
//! Tests for composite key encoding/decoding.

use grantkey::key::{
    decode, encode, encoded_len, GrantKey, GRANT_PREFIX, MAX_IDENTIFIER_LEN, MIN_KEY_LEN,
};
use grantkey::GrantKeyError;

const PREFIX: u8 = GRANT_PREFIX;

// =============================================================================
// Encoding Tests
// =============================================================================

#[test]
fn test_encode_all_empty() {
    let key = encode(PREFIX, &[], &[], b"").unwrap();
    assert_eq!(key, vec![PREFIX, 0x00, 0x00]);
}

#[test]
fn test_encode_layout() {
    let key = encode(PREFIX, &[0xAA, 0xBB], &[0xCC], b"tx").unwrap();
    assert_eq!(key, vec![PREFIX, 0x02, 0xAA, 0xBB, 0x01, 0xCC, b't', b'x']);
}

#[test]
fn test_encode_uses_given_prefix() {
    let key = encode(0x7F, &[0x01], &[0x02], b"l").unwrap();
    assert_eq!(key[0], 0x7F);
}

#[test]
fn test_encoded_len_matches_output() {
    let primary = [0x11u8; 20];
    let secondary = [0x22u8; 32];
    let label = b"/cosmos.bank.v1beta1.MsgSend";

    let key = encode(PREFIX, &primary, &secondary, label).unwrap();
    assert_eq!(key.len(), encoded_len(&primary, &secondary, label));
    assert_eq!(key.len(), 3 + 20 + 32 + label.len());
}

#[test]
fn test_encode_max_length_identifiers() {
    let primary = vec![0xAB; MAX_IDENTIFIER_LEN];
    let secondary = vec![0xCD; MAX_IDENTIFIER_LEN];

    let key = encode(PREFIX, &primary, &secondary, b"").unwrap();
    assert_eq!(key[1], 0xFF);
    assert_eq!(key[2 + 255], 0xFF);
    assert_eq!(key.len(), 3 + 255 + 255);
}

#[test]
fn test_encode_primary_too_long() {
    let primary = vec![0u8; 256];
    let result = encode(PREFIX, &primary, &[], b"");

    assert_eq!(
        result,
        Err(GrantKeyError::InvalidIdentifierLength {
            field: "primary",
            len: 256
        })
    );
}

#[test]
fn test_encode_secondary_too_long() {
    let secondary = vec![0u8; 1000];
    let result = encode(PREFIX, &[0x01], &secondary, b"");

    assert_eq!(
        result,
        Err(GrantKeyError::InvalidIdentifierLength {
            field: "secondary",
            len: 1000
        })
    );
}

#[test]
fn test_encode_long_label_accepted() {
    let label = vec![b'x'; 64 * 1024];
    let key = encode(PREFIX, &[0x01], &[0x02], &label).unwrap();
    assert_eq!(key.len(), 5 + label.len());
}

// =============================================================================
// Decoding Tests
// =============================================================================

#[test]
fn test_decode_layout() {
    let bytes = [PREFIX, 0x02, 0xAA, 0xBB, 0x01, 0xCC, b't', b'x'];
    let decoded = decode(&bytes).unwrap();

    assert_eq!(decoded.prefix, PREFIX);
    assert_eq!(decoded.primary, &[0xAA, 0xBB]);
    assert_eq!(decoded.secondary, &[0xCC]);
    assert_eq!(decoded.label, b"tx");
    assert_eq!(decoded.label_str(), Some("tx"));
}

#[test]
fn test_decode_all_empty() {
    let decoded = decode(&[PREFIX, 0x00, 0x00]).unwrap();

    assert!(decoded.primary.is_empty());
    assert!(decoded.secondary.is_empty());
    assert!(decoded.label.is_empty());
}

#[test]
fn test_decode_returns_views_into_input() {
    let bytes = encode(PREFIX, b"granter", b"grantee", b"msg").unwrap();
    let decoded = decode(&bytes).unwrap();

    let range = bytes.as_ptr_range();
    assert!(range.contains(&decoded.primary.as_ptr()));
    assert!(range.contains(&decoded.secondary.as_ptr()));
    assert!(range.contains(&decoded.label.as_ptr()));
}

#[test]
fn test_decode_does_not_check_prefix() {
    let decoded = decode(&[0xEE, 0x01, 0xAA, 0x00]).unwrap();

    assert_eq!(decoded.prefix, 0xEE);
    assert_eq!(decoded.primary, &[0xAA]);
    assert!(decoded.secondary.is_empty());
}

#[test]
fn test_decode_binary_label() {
    let label: Vec<u8> = vec![0x00, 0xFF, 0x00, 0x01, 0x80];
    let bytes = encode(PREFIX, &[0x00], &[0x00], &label).unwrap();
    let decoded = decode(&bytes).unwrap();

    assert_eq!(decoded.label, label.as_slice());
    assert_eq!(decoded.label_str(), None);
}

#[test]
fn test_decode_label_that_looks_like_lengths() {
    // Label bytes are never interpreted
    let label = [0x05, 0x05, 0x05];
    let bytes = encode(PREFIX, &[0x01], &[], &label).unwrap();
    let decoded = decode(&bytes).unwrap();

    assert_eq!(decoded.primary, &[0x01]);
    assert!(decoded.secondary.is_empty());
    assert_eq!(decoded.label, &label);
}

// =============================================================================
// Truncation Tests
// =============================================================================

#[test]
fn test_decode_empty_input() {
    assert_eq!(
        decode(&[]),
        Err(GrantKeyError::TruncatedKey {
            needed: MIN_KEY_LEN,
            actual: 0
        })
    );
}

#[test]
fn test_decode_single_byte() {
    assert_eq!(
        decode(&[PREFIX]),
        Err(GrantKeyError::TruncatedKey {
            needed: MIN_KEY_LEN,
            actual: 1
        })
    );
}

#[test]
fn test_decode_primary_overruns_buffer() {
    // Claims a 3-byte primary but only 2 bytes follow before the next length byte
    let bytes = [PREFIX, 0x03, 0xAA, 0xBB, 0x01];
    assert_eq!(
        decode(&bytes),
        Err(GrantKeyError::TruncatedKey {
            needed: 6,
            actual: 5
        })
    );
}

#[test]
fn test_decode_missing_secondary_length_byte() {
    // Primary fits exactly but there is no room for L2
    let bytes = [PREFIX, 0x02, 0xAA, 0xBB];
    assert!(matches!(
        decode(&bytes),
        Err(GrantKeyError::TruncatedKey { .. })
    ));
}

#[test]
fn test_decode_empty_primary_missing_secondary_length() {
    assert!(matches!(
        decode(&[PREFIX, 0x00]),
        Err(GrantKeyError::TruncatedKey {
            needed: 3,
            actual: 2
        })
    ));
}

#[test]
fn test_decode_secondary_overruns_buffer() {
    let bytes = [PREFIX, 0x01, 0xAA, 0x04, 0xCC, 0xDD];
    assert_eq!(
        decode(&bytes),
        Err(GrantKeyError::TruncatedKey {
            needed: 8,
            actual: 6
        })
    );
}

#[test]
fn test_decode_max_declared_lengths_on_short_buffer() {
    let bytes = [PREFIX, 0xFF, 0x00, 0x00];
    assert!(matches!(
        decode(&bytes),
        Err(GrantKeyError::TruncatedKey { .. })
    ));
}

#[test]
fn test_decode_every_truncation_of_valid_key() {
    let bytes = encode(PREFIX, &[0x01, 0x02, 0x03], &[0x04, 0x05], b"").unwrap();

    // Every strict prefix that cuts into the identifiers must fail
    for len in 0..bytes.len() {
        assert!(
            matches!(decode(&bytes[..len]), Err(GrantKeyError::TruncatedKey { .. })),
            "prefix of length {} should be truncated",
            len
        );
    }
    assert!(decode(&bytes).is_ok());
}

// =============================================================================
// Key Type Tests
// =============================================================================

#[test]
fn test_grant_key_encode_decode() {
    let key = GrantKey::new(PREFIX, vec![0xAA, 0xBB], vec![0xCC], "tx");
    let bytes = key.encode().unwrap();

    assert_eq!(bytes.len(), key.encoded_len());
    assert_eq!(decode(&bytes).unwrap().to_owned_key(), key);
    assert_eq!(GrantKey::from(decode(&bytes).unwrap()), key);
}

#[test]
fn test_grant_key_as_key_ref() {
    let key = GrantKey::new(PREFIX, b"a".to_vec(), b"b".to_vec(), "c");
    let view = key.as_key_ref();
    let bytes = key.encode().unwrap();

    assert_eq!(view, decode(&bytes).unwrap());
}

#[test]
fn test_grant_key_invalid_identifier() {
    let key = GrantKey::new(PREFIX, vec![0u8; 300], vec![], "");
    assert!(matches!(
        key.encode(),
        Err(GrantKeyError::InvalidIdentifierLength { field: "primary", len: 300 })
    ));
}

#[test]
fn test_error_messages() {
    let err = GrantKeyError::InvalidIdentifierLength {
        field: "primary",
        len: 256,
    };
    assert_eq!(
        err.to_string(),
        "Invalid primary identifier length: 256 bytes (max 255)"
    );

    let err = GrantKeyError::TruncatedKey {
        needed: 6,
        actual: 5,
    };
    assert_eq!(
        err.to_string(),
        "Truncated key: need at least 6 bytes, got 5"
    );
}
