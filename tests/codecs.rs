// This is a part of recode.
// See README.md and LICENSE.txt for details.

//! Cross-codec behavior of the built-in encodings, through the public
//! label-based interface.

fn round_trip(label: &str, text: &str) {
    let bytes = recode::encode(text, label).unwrap();
    assert_eq!(recode::decode(&bytes, label).unwrap(), text, "{}", label);
}

#[test]
fn shift_jis_text() {
    let bytes = recode::encode("\u{3053}\u{3093}\u{306b}\u{3061}\u{306f}", "shift-jis").unwrap();
    assert_eq!(
        recode::decode(&bytes, "shift-jis").unwrap(),
        "\u{3053}\u{3093}\u{306b}\u{3061}\u{306f}"
    );
    // halfwidth katakana are single bytes
    assert_eq!(recode::decode(&[0xb1, 0xb2], "sjis").unwrap(), "\u{ff71}\u{ff72}");
}

#[test]
fn shift_jis_yen_sign_is_asymmetric() {
    // the yen sign encodes into the backslash slot, which still decodes
    // as a backslash
    assert_eq!(recode::encode("\u{a5}", "shift-jis").unwrap(), b"\\");
    assert_eq!(recode::decode(b"\\", "shift-jis").unwrap(), "\\");
    assert_eq!(recode::encode("\u{203e}", "shift-jis").unwrap(), b"~");
}

#[test]
fn euc_jp_three_byte_plane() {
    assert_eq!(recode::decode(&[0x8f, 0xcb, 0xc6], "euc-jp").unwrap(), "\u{736c}");
    assert_eq!(recode::encode("\u{736c}", "euc-jp").unwrap(), [0x8f, 0xcb, 0xc6]);
    round_trip("euc-jp", "\u{65e5}\u{672c}\u{8a9e} abc");
}

#[test]
fn gbk_layers_additions_over_cp936() {
    // the addition table assigns 0xA8BC, which cp936 leaves undefined
    assert_eq!(recode::decode(&[0xa8, 0xbc], "gbk").unwrap(), "\u{1e3f}");
    assert_eq!(recode::decode(&[0xa8, 0xbc], "cp936").unwrap(), "\u{fffd}\u{fffd}");
    round_trip("gbk", "\u{4e2d}\u{534e}\u{4eba}\u{6c11}\u{5171}\u{548c}\u{56fd}");
}

#[test]
fn euro_sign_placement() {
    // cp936 and gbk prefer the one-byte euro; gb18030 prefers 0xA2E3 but
    // still decodes the one-byte form
    assert_eq!(recode::encode("\u{20ac}", "gbk").unwrap(), [0x80]);
    assert_eq!(recode::encode("\u{20ac}", "gb18030").unwrap(), [0xa2, 0xe3]);
    assert_eq!(recode::decode(&[0x80], "gb18030").unwrap(), "\u{20ac}");
    assert_eq!(recode::decode(&[0xa2, 0xe3], "gb18030").unwrap(), "\u{20ac}");
}

#[test]
fn gb18030_four_byte_sequences() {
    // pointer 0 is U+0080
    assert_eq!(
        recode::decode(&[0x81, 0x30, 0x81, 0x30], "gb18030").unwrap(),
        "\u{80}"
    );
    assert_eq!(
        recode::encode("\u{a0}", "gb18030").unwrap(),
        [0x81, 0x30, 0x84, 0x32]
    );
    // the supplementary plane starts at 90 30 81 30
    assert_eq!(
        recode::encode("\u{10000}", "gb18030").unwrap(),
        [0x90, 0x30, 0x81, 0x30]
    );
    assert_eq!(
        recode::decode(&[0x90, 0x30, 0x81, 0x30], "gb18030").unwrap(),
        "\u{10000}"
    );
    round_trip("gb18030", "\u{10400}\u{4e2d}\u{80}");
}

#[test]
fn gb18030_four_byte_split_at_every_boundary() {
    let bytes = [0x41, 0x81, 0x30, 0x81, 0x30, 0x90, 0x30, 0x81, 0x30, 0x42];
    let expected = "A\u{80}\u{10000}B";
    for cut in 0..=bytes.len() {
        let mut d = recode::decoder_for("gb18030").unwrap();
        let mut got = d.write(&bytes[..cut]);
        got.push_str(&d.write(&bytes[cut..]));
        got.push_str(&d.end());
        assert_eq!(got, expected, "split at {}", cut);
    }
}

#[test]
fn gb18030_truncated_four_byte_tail() {
    let mut d = recode::decoder_for("gb18030").unwrap();
    assert_eq!(d.write(&[0x81, 0x30, 0x81]), "");
    // the head byte becomes a replacement; 0x30 retries as ASCII and the
    // final 0x81 is another dangling lead
    assert_eq!(d.end(), "\u{fffd}0\u{fffd}");
}

#[test]
fn big5_hkscs_sequences() {
    assert_eq!(recode::decode(&[0x88, 0x62], "big5").unwrap(), "\u{ca}\u{304}");
    assert_eq!(recode::decode(&[0x88, 0x63], "big5").unwrap(), "\u{ca}");
    assert_eq!(recode::encode("\u{ca}\u{304}", "big5").unwrap(), [0x88, 0x62]);
    assert_eq!(recode::encode("\u{ea}\u{30c}", "big5").unwrap(), [0x88, 0xa5]);
    // the standalone base letter is the sequence root's default
    assert_eq!(recode::encode("\u{ca}Z", "big5").unwrap(), [0x88, 0x63, b'Z']);
    assert_eq!(recode::encode("\u{ca}", "big5").unwrap(), [0x88, 0x63]);
}

#[test]
fn big5_double_mapping_prefers_ideograph() {
    // U+5341 decodes from both 0xA2CC and 0xA451 but always encodes to
    // the ideograph slot
    assert_eq!(recode::decode(&[0xa2, 0xcc], "big5").unwrap(), "\u{5341}");
    assert_eq!(recode::decode(&[0xa4, 0x51], "big5").unwrap(), "\u{5341}");
    assert_eq!(recode::encode("\u{5341}", "big5").unwrap(), [0xa4, 0x51]);
}

#[test]
fn windows_1252_and_latin1() {
    assert_eq!(recode::encode("caf\u{e9}", "windows-1252").unwrap(), b"caf\xe9");
    assert_eq!(
        recode::decode(b"\x93ok\x94", "cp1252").unwrap(),
        "\u{201c}ok\u{201d}"
    );
    // latin-1 decodes 0x80-0x9F as control characters
    assert_eq!(recode::decode(&[0x93], "latin1").unwrap(), "\u{93}");
}

#[test]
fn utf16_auto_detection() {
    assert_eq!(
        recode::decode(&[0xff, 0xfe, 0x42, 0x30], "utf-16").unwrap(),
        "\u{3042}"
    );
    assert_eq!(
        recode::decode(&[0xfe, 0xff, 0x30, 0x42], "utf-16").unwrap(),
        "\u{3042}"
    );
    // no BOM: heuristic picks big-endian from the NUL pattern
    let be: Vec<u8> = "plain text".bytes().flat_map(|b| [0, b]).collect();
    assert_eq!(recode::decode(&be, "utf-16").unwrap(), "plain text");
}

#[test]
fn utf7_via_labels() {
    assert_eq!(recode::encode("1 + 1", "utf-7").unwrap(), b"1 +- 1");
    assert_eq!(recode::decode(b"+Jjo-", "utf-7").unwrap(), "\u{263a}");
    assert_eq!(
        recode::decode(b"&ZeVnLIqe-", "utf-7-imap").unwrap(),
        "\u{65e5}\u{672c}\u{8a9e}"
    );
}

#[test]
fn unmappable_input_never_fails() {
    // encode: unmappable characters become the default byte
    assert_eq!(recode::encode("\u{0391}", "shift-jis").unwrap(), b"?");
    // decode: invalid bytes become replacement characters
    assert_eq!(recode::decode(&[0xff, 0xff], "shift-jis").unwrap(), "\u{fffd}\u{fffd}");
}
