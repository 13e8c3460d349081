// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Round-trip integration tests.
//!
//! Tests cover:
//! - decode(encode(b)) == b for every codec that guarantees it
//! - The deliberate exceptions: unicode (decode ignores non-escape text)
//!   and unixtime (sub-second precision is lost)

use transcodec::{global_registry, Codec};

// ============================================================================
// Test Fixtures
// ============================================================================

fn codec(name: &str) -> &'static dyn Codec {
    global_registry()
        .get(name)
        .unwrap_or_else(|| panic!("codec {name} not registered"))
}

/// Encode then decode through one codec and expect the original bytes back.
fn assert_round_trip(name: &str, input: &[u8]) {
    let c = codec(name);
    let encoded = c.encode(input).expect("encode failed");
    let decoded = c.decode(encoded.as_bytes()).expect("decode failed");
    assert_eq!(
        decoded, input,
        "{name} round trip mangled {input:?} (via {encoded:?})"
    );
}

/// Inputs that exercise binary content, not just ASCII text.
fn binary_samples() -> Vec<Vec<u8>> {
    vec![
        vec![0x00],
        vec![0xff, 0x00, 0x80, 0x7f],
        (0u8..=255).collect(),
        b"text with\nnewlines and\ttabs".to_vec(),
    ]
}

/// UTF-8 inputs for text-interpreting codecs.
fn text_samples() -> Vec<&'static str> {
    vec![
        "plain ascii",
        "reserved &<>\"'% characters",
        "caf\u{e9} \u{20ac} \u{1f600}",
        "line\nbreaks\r\nand tabs\t",
    ]
}

// ============================================================================
// Byte-Oriented Codecs
// ============================================================================

#[test]
fn test_round_trip_base64_binary() {
    for input in binary_samples() {
        assert_round_trip("base64", &input);
    }
}

#[test]
fn test_round_trip_hex_binary() {
    for input in binary_samples() {
        assert_round_trip("hex", &input);
    }
}

// ============================================================================
// Text-Oriented Codecs
// ============================================================================

#[test]
fn test_round_trip_uri() {
    for input in text_samples() {
        assert_round_trip("uri", input.as_bytes());
    }
}

#[test]
fn test_round_trip_html() {
    for input in text_samples() {
        assert_round_trip("html", input.as_bytes());
    }
}

#[test]
fn test_round_trip_json() {
    for input in text_samples() {
        assert_round_trip("json", input.as_bytes());
    }
}

#[test]
fn test_round_trip_char_code() {
    for input in ["A", "0", "\u{e9}", "\u{20ac}", "\u{1f600}"] {
        assert_round_trip("char code", input.as_bytes());
    }
}

// ============================================================================
// Deliberate Exceptions
// ============================================================================

#[test]
fn test_unicode_round_trips_escape_only_text() {
    // all-escape output round trips even though the codec does not promise it
    assert_round_trip("unicode", "abc".as_bytes());
    assert_round_trip("unicode", "\u{1f600}\u{20ac}".as_bytes());
}

#[test]
fn test_unixtime_round_trip_is_lossy() {
    let c = codec("unixtime");
    let encoded = c.encode(b"1700000000.5").unwrap();
    let decoded = c.decode(encoded.as_bytes()).unwrap();
    // fractional seconds do not survive
    assert_eq!(decoded, b"1700000000");
}

#[test]
fn test_unixtime_whole_seconds_round_trip() {
    let c = codec("unixtime");
    let encoded = c.encode(b"1700000000").unwrap();
    let decoded = c.decode(encoded.as_bytes()).unwrap();
    assert_eq!(decoded, b"1700000000");
}
