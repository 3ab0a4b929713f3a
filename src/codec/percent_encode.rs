use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode, percent_encode};

use super::charset::Charset;

/// Form-urlencoded component set.
/// Everything except ASCII alphanumerics and `-`, `_`, `.`, `*` is escaped.
/// Space is left out of the set so the writer can emit it as `+`.
pub const QUERY_COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'*')
    .remove(b' ');

/// Decode one query token.
///
/// Without a charset the token is returned as is: no `%XX` or `+` handling.
/// With a charset, `+` becomes a space and every run of consecutive `%XX`
/// escapes is turned into bytes and decoded with the charset. Literal
/// characters are copied through untouched. A `%` that does not start a valid
/// escape is kept literally, and so is an escape run whose bytes are not valid
/// in the charset.
pub fn decode(token: &str, charset: Option<Charset>) -> Cow<'_, str> {
    let Some(charset) = charset else {
        return Cow::Borrowed(token);
    };
    if memchr::memchr2(b'+', b'%', token.as_bytes()).is_none() {
        return Cow::Borrowed(token);
    }

    let mut result = String::with_capacity(token.len());
    let mut rest = token;
    while let Some(pos) = memchr::memchr2(b'+', b'%', rest.as_bytes()) {
        result.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        if tail.starts_with('+') {
            result.push(' ');
            rest = &tail[1..];
            continue;
        }

        let run_len = escape_run_len(tail.as_bytes());
        if run_len == 0 {
            result.push('%');
            rest = &tail[1..];
            continue;
        }

        let run = &tail[..run_len];
        let raw: Cow<'_, [u8]> = percent_decode(run.as_bytes()).into();
        match charset
            .encoding()
            .decode_without_bom_handling_and_without_replacement(&raw)
        {
            Some(text) => result.push_str(&text),
            None => {
                tracing::trace!(run, charset = charset.name(), "escape run kept undecoded");
                result.push_str(run);
            }
        }
        rest = &tail[run_len..];
    }
    result.push_str(rest);
    Cow::Owned(result)
}

/// Length of the run of well-formed `%XX` escapes at the start of `bytes`.
fn escape_run_len(bytes: &[u8]) -> usize {
    let mut len = 0;
    while let [b'%', hi, lo, ..] = &bytes[len..] {
        if !hi.is_ascii_hexdigit() || !lo.is_ascii_hexdigit() {
            break;
        }
        len += 3;
    }
    len
}

/// Encode one query token.
///
/// Without a charset the token is returned as is. With a charset, the token is
/// transcoded and every byte outside [`QUERY_COMPONENT_SET`]'s safe characters
/// is written as `%XX`; spaces are written as `+`.
pub fn encode(token: &str, charset: Option<Charset>) -> Cow<'_, str> {
    if charset.is_none() {
        return Cow::Borrowed(token);
    }
    let mut buffer = String::with_capacity(token.len());
    encode_into(&mut buffer, token, charset);
    Cow::Owned(buffer)
}

/// Write an encoded token directly to buffer
pub fn encode_into(buffer: &mut String, token: &str, charset: Option<Charset>) {
    let Some(charset) = charset else {
        buffer.push_str(token);
        return;
    };

    let (bytes, _, _) = charset.encoding().encode(token);
    buffer.reserve(bytes.len());

    for chunk in percent_encode(&bytes, QUERY_COMPONENT_SET) {
        if memchr::memchr(b' ', chunk.as_bytes()).is_some() {
            buffer.extend(chunk.chars().map(|c| if c == ' ' { '+' } else { c }));
        } else {
            buffer.push_str(chunk);
        }
    }
}
