//! The properties text format.
//!
//! Parsing follows the `java.util.Properties` line grammar: `#` and `!`
//! comments, `=`, `:` or whitespace between key and value, backslash line
//! continuations and `\uXXXX` escapes. Output escapes everything outside
//! printable ASCII, so a stored file is plain ASCII.

use std::fmt;
use std::io::{self, Write};

use crate::error::{ConfigurationError, Result};
use crate::properties::Properties;

const HEX: &[u8; 16] = b"0123456789ABCDEF";

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

/// Parses properties text. A later duplicate key replaces the earlier value.
///
/// # Errors
///
/// Returns a parse error for a malformed `\uXXXX` escape.
pub fn parse(input: &str) -> Result<Properties> {
    let mut properties = Properties::new();
    for (line, logical) in logical_lines(input) {
        let (key, value) = split_entry(&logical);
        properties.set(unescape(key, line)?, unescape(value, line)?);
    }
    Ok(properties)
}

/// Writes `properties` in text form, preceded by `comments` as `#` lines.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn store<W: Write>(
    properties: &Properties,
    writer: &mut W,
    comments: Option<&str>,
) -> io::Result<()> {
    if let Some(comments) = comments {
        write_comments(writer, comments)?;
    }
    let mut entries = String::new();
    write_entries(properties, &mut entries).map_err(io::Error::other)?;
    writer.write_all(entries.as_bytes())
}

/// Writes one escaped `key=value` line per entry, in key order.
///
/// # Errors
///
/// Returns any error from the underlying formatter.
pub fn write_entries<W: fmt::Write>(properties: &Properties, out: &mut W) -> fmt::Result {
    for (key, value) in properties.iter() {
        writeln!(out, "{}={}", escape(key, true), escape(value, false))?;
    }
    Ok(())
}

/// Escapes a key (`escape_space` set) or a value for output.
///
/// Values only escape a leading space; keys escape every space.
#[must_use]
pub fn escape(s: &str, escape_space: bool) -> String {
    let mut out = String::with_capacity(s.len() * 2);
    for (i, c) in s.chars().enumerate() {
        match c {
            '\\' => out.push_str("\\\\"),
            ' ' if i == 0 || escape_space => out.push_str("\\ "),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\x0c' => out.push_str("\\f"),
            '=' | ':' | '#' | '!' => {
                out.push('\\');
                out.push(c);
            }
            ' '..='~' => out.push(c),
            _ => push_unicode_escape(&mut out, c),
        }
    }
    out
}

fn push_unicode_escape(out: &mut String, c: char) {
    let mut units = [0u16; 2];
    for unit in c.encode_utf16(&mut units) {
        out.push_str("\\u");
        for shift in [12, 8, 4, 0] {
            out.push(char::from(HEX[usize::from((*unit >> shift) & 0xF)]));
        }
    }
}

fn write_comments<W: Write>(writer: &mut W, comments: &str) -> io::Result<()> {
    let mut out = String::from("#");
    let mut chars = comments.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' | '\n' => {
                if c == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push('\n');
                if !matches!(chars.peek(), Some('#' | '!')) {
                    out.push('#');
                }
            }
            ' '..='~' | '\t' => out.push(c),
            _ => push_unicode_escape(&mut out, c),
        }
    }
    out.push('\n');
    writer.write_all(out.as_bytes())
}

/// Splits input into physical lines on `\n`, `\r` or `\r\n`.
fn physical_lines(input: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = input;
    while !rest.is_empty() {
        if let Some(pos) = rest.find(['\r', '\n']) {
            lines.push(&rest[..pos]);
            let skip = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
            rest = &rest[pos + skip..];
        } else {
            lines.push(rest);
            break;
        }
    }
    lines
}

fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

/// Joins continuation lines and drops comments and blank lines. Each item
/// carries the 1-indexed line where the entry starts.
fn logical_lines(input: &str) -> Vec<(usize, String)> {
    let mut entries = Vec::new();
    let mut physical = physical_lines(input).into_iter().enumerate();
    while let Some((index, line)) = physical.next() {
        let trimmed = line.trim_start_matches(is_blank);
        if trimmed.is_empty() || trimmed.starts_with(['#', '!']) {
            continue;
        }

        let mut logical = trimmed.to_string();
        while ends_with_continuation(&logical) {
            logical.pop();
            match physical.next() {
                Some((_, next)) => logical.push_str(next.trim_start_matches(is_blank)),
                None => break,
            }
        }
        entries.push((index + 1, logical));
    }
    entries
}

/// Splits a logical line into its raw (still escaped) key and value.
fn split_entry(line: &str) -> (&str, &str) {
    let mut key_end = line.len();
    let mut value_start = line.len();
    let mut has_separator = false;
    let mut escaped = false;

    for (i, c) in line.char_indices() {
        if !escaped && (c == '=' || c == ':') {
            key_end = i;
            value_start = i + 1;
            has_separator = true;
            break;
        }
        if !escaped && is_blank(c) {
            key_end = i;
            value_start = i + 1;
            break;
        }
        escaped = c == '\\' && !escaped;
    }

    let rest = &line[value_start..];
    let mut skip = 0;
    for (i, c) in rest.char_indices() {
        if is_blank(c) {
            skip = i + 1;
        } else if !has_separator && (c == '=' || c == ':') {
            has_separator = true;
            skip = i + 1;
        } else {
            break;
        }
    }

    (&line[..key_end], &rest[skip..])
}

fn unescape(raw: &str, line: usize) -> Result<String> {
    let mut units: Vec<u16> = Vec::with_capacity(raw.len());
    let mut buf = [0u16; 2];
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        let decoded = if c == '\\' {
            match chars.next() {
                Some('u') => {
                    units.push(read_hex_unit(&mut chars, line)?);
                    continue;
                }
                Some('t') => '\t',
                Some('n') => '\n',
                Some('r') => '\r',
                Some('f') => '\x0c',
                Some(other) => other,
                None => break,
            }
        } else {
            c
        };
        units.extend_from_slice(decoded.encode_utf16(&mut buf));
    }

    Ok(String::from_utf16_lossy(&units))
}

fn read_hex_unit(chars: &mut std::str::Chars<'_>, line: usize) -> Result<u16> {
    let mut value: u16 = 0;
    for _ in 0..4 {
        let digit = chars
            .next()
            .and_then(|c| c.to_digit(16))
            .and_then(|d| u16::try_from(d).ok())
            .ok_or_else(|| ConfigurationError::parse(line, "malformed \\uxxxx encoding"))?;
        value = (value << 4) | digit;
    }
    Ok(value)
}
