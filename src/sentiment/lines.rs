use std::borrow::Cow;

/// Split raw text into trimmed, non-empty lines, keeping their order.
///
/// Splits on `\n` only; trimming also removes the `\r` of CRLF endings.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Decoded file contents and whether invalid UTF-8 had to be replaced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub lossy: bool,
}

/// Decode file bytes as UTF-8, replacing invalid sequences.
pub fn decode_text(bytes: &[u8]) -> DecodedText {
    match String::from_utf8_lossy(bytes) {
        Cow::Borrowed(text) => DecodedText {
            text: text.to_string(),
            lossy: false,
        },
        Cow::Owned(text) => DecodedText { text, lossy: true },
    }
}
