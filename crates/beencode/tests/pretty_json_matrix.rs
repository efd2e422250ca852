use beencode::{decode, BencodeEncoder, ByteString, JsonConversionError, Node, TextEncoding};
use serde_json::json;

const TORRENT: &[u8] = b"d8:announce23:http://tracker.test/ann4:infod6:lengthi1024e4:name8:file.bin6:pieces4:\x00\x01\xfe\xffee";

#[test]
fn pretty_prints_decoded_torrent() {
    let node = decode(TORRENT).unwrap();
    let expected = "\
{
  \"announce\" => \"http://tracker.test/ann\"
  \"info\" => {
    \"length\" => 1024
    \"name\" => \"file.bin\"
    \"pieces\" => <binary: 4 bytes>
  }
}";
    assert_eq!(node.to_pretty_string(), expected);
    assert_eq!(format!("{node}"), expected);
}

#[test]
fn pretty_prints_integers_and_strings() {
    assert_eq!(decode(b"i13e").unwrap().to_string(), "13");
    assert_eq!(decode(b"i-1337e").unwrap().to_string(), "-1337");
    assert_eq!(decode(b"0:").unwrap().to_string(), "\"\"");
    assert_eq!(
        decode(b"l1:ali1eee").unwrap().to_string(),
        "[\n  \"a\"\n  [\n    1\n  ]\n]"
    );
}

#[test]
fn torrent_to_json() {
    let node = decode(TORRENT).unwrap();
    assert_eq!(
        node.to_json(),
        json!({
            "announce": "http://tracker.test/ann",
            "info": {
                "length": 1024,
                "name": "file.bin",
                "pieces": "data:application/octet-stream;base64,AAH+/w==",
            }
        })
    );
}

#[test]
fn json_into_bencode() {
    let mut encoder = BencodeEncoder::new();
    let bytes = encoder
        .encode_json(&json!({"peers": [{"ip": "10.0.0.1", "port": 6881}], "interval": 900}))
        .unwrap();
    assert_eq!(
        bytes,
        b"d8:intervali900e5:peersld2:ip8:10.0.0.14:porti6881eeee"
    );

    assert_eq!(
        encoder.encode_json(&json!({"ok": false})),
        Err(JsonConversionError::Unrepresentable("boolean"))
    );
    assert_eq!(
        Node::try_from(json!(-5)).unwrap(),
        Node::Integer(-5)
    );
}

#[test]
fn text_encodings_map_to_bytes() {
    let utf16 = ByteString::from_text("hi", TextEncoding::Utf16Le).unwrap();
    assert_eq!(utf16.as_bytes(), b"h\x00i\x00");
    assert_eq!(utf16.to_text(TextEncoding::Utf16Le).unwrap(), "hi");

    let latin1 = ByteString::from_text("café", TextEncoding::Latin1).unwrap();
    assert_eq!(latin1.as_bytes(), b"caf\xe9");
    assert!(ByteString::from_text("€", TextEncoding::Latin1).is_err());

    let node = Node::from(latin1);
    assert_eq!(node.to_string(), "<binary: 4 bytes>");
}
