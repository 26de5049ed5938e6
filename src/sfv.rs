//! Decoder for the structured-field grammar carried by the `Sec-CH-UA*`
//! headers: quoted strings, `?0`/`?1` booleans, numbers, `;key=value`
//! parameters and comma-separated lists.
//!
//! This is deliberately narrower than the full structured-field-values
//! grammar. Bare tokens, byte sequences and inner lists never appear in the
//! hint headers and are rejected as malformed.

use indexmap::IndexMap;

use crate::error::{Error, Result};

/// A primitive structured-field value.
#[derive(Debug, Clone, PartialEq)]
pub enum BareItem {
    String(String),
    Boolean(bool),
    Integer(i64),
    Decimal(f64),
}

impl BareItem {
    /// The string content, or `None` for non-string items.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The boolean value, or `None` for non-boolean items.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

/// One structured-field item: a bare value plus its `;key=value` parameters.
///
/// Parameter keys are unique and keep their insertion order; a duplicated key
/// replaces the earlier value.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub value: BareItem,
    pub params: IndexMap<String, BareItem>,
}

/// An ordered sequence of parameterized items, in header-text order.
pub type List = Vec<Item>;

/// Decode a header value holding a single item.
///
/// Empty input is the "header absent" case and yields `Ok(None)`; callers
/// substitute their own default. Non-empty input must parse as exactly one
/// item with no trailing text.
pub fn parse_item(input: &str) -> Result<Option<Item>> {
    let input = input.trim_matches(|c: char| c == ' ' || c == '\t');
    if input.is_empty() {
        return Ok(None);
    }

    let mut cur = Cursor::new(input);
    let item = cur.read_item()?;
    if !cur.at_end() {
        return Err(Error::malformed("trailing characters after item"));
    }
    Ok(Some(item))
}

/// Decode a header value holding a list of items.
///
/// Empty input yields an empty list, not an error. Any malformed member
/// fails the whole decode.
pub fn parse_list(input: &str) -> Result<List> {
    let input = input.trim_matches(|c: char| c == ' ' || c == '\t');
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let mut cur = Cursor::new(input);
    let mut members = Vec::new();
    loop {
        members.push(cur.read_item()?);
        cur.skip_ows();
        if cur.at_end() {
            return Ok(members);
        }
        if !cur.eat(b',') {
            return Err(Error::malformed("expected comma between list members"));
        }
        cur.skip_ows();
        if cur.at_end() {
            return Err(Error::malformed("list ends with a trailing comma"));
        }
    }
}

/// Byte scanner over one header value. The grammar is ASCII, so all
/// positions are byte positions.
struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input: input.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Skip spaces, allowed after a `;` parameter separator.
    fn skip_spaces(&mut self) {
        while self.peek() == Some(b' ') {
            self.pos += 1;
        }
    }

    /// Skip optional whitespace around list separators.
    fn skip_ows(&mut self) {
        while matches!(self.peek(), Some(b' ') | Some(b'\t')) {
            self.pos += 1;
        }
    }

    fn slice_from(&self, start: usize) -> Result<&'a str> {
        std::str::from_utf8(&self.input[start..self.pos])
            .map_err(|_| Error::malformed("non-ASCII bytes in field value"))
    }

    fn read_item(&mut self) -> Result<Item> {
        let value = self.read_bare_item()?;
        let params = self.read_params()?;
        Ok(Item { value, params })
    }

    fn read_bare_item(&mut self) -> Result<BareItem> {
        match self.peek() {
            Some(b'"') => self.read_string().map(BareItem::String),
            Some(b'?') => self.read_boolean().map(BareItem::Boolean),
            Some(b'-') | Some(b'0'..=b'9') => self.read_number(),
            Some(c) => Err(Error::malformed(format!(
                "unexpected character {:?} at start of item",
                c as char
            ))),
            None => Err(Error::malformed("expected an item, found end of input")),
        }
    }

    fn read_string(&mut self) -> Result<String> {
        self.pos += 1; // opening quote
        let mut out = String::new();
        loop {
            match self.bump() {
                Some(b'"') => return Ok(out),
                Some(b'\\') => match self.bump() {
                    Some(c @ (b'"' | b'\\')) => out.push(c as char),
                    Some(c) => {
                        return Err(Error::malformed(format!(
                            "invalid escape {:?} in string",
                            c as char
                        )))
                    }
                    None => return Err(Error::malformed("unterminated string")),
                },
                // Visible ASCII and space only; quote and backslash handled above.
                Some(c) if (0x20..=0x7e).contains(&c) => out.push(c as char),
                Some(_) => return Err(Error::malformed("invalid character in string")),
                None => return Err(Error::malformed("unterminated string")),
            }
        }
    }

    fn read_boolean(&mut self) -> Result<bool> {
        self.pos += 1; // '?'
        match self.bump() {
            Some(b'0') => Ok(false),
            Some(b'1') => Ok(true),
            _ => Err(Error::malformed("boolean must be ?0 or ?1")),
        }
    }

    fn read_number(&mut self) -> Result<BareItem> {
        let start = self.pos;
        self.eat(b'-');

        let int_start = self.pos;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        let int_digits = self.pos - int_start;
        if int_digits == 0 {
            return Err(Error::malformed("number is missing digits"));
        }

        if !self.eat(b'.') {
            if int_digits > 15 {
                return Err(Error::malformed("integer has too many digits"));
            }
            let value = self
                .slice_from(start)?
                .parse()
                .map_err(|_| Error::malformed("integer out of range"))?;
            return Ok(BareItem::Integer(value));
        }

        if int_digits > 12 {
            return Err(Error::malformed("decimal has too many integer digits"));
        }
        let frac_start = self.pos;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        let frac_digits = self.pos - frac_start;
        if frac_digits == 0 || frac_digits > 3 {
            return Err(Error::malformed(
                "decimal fraction must be one to three digits",
            ));
        }
        let value = self
            .slice_from(start)?
            .parse()
            .map_err(|_| Error::malformed("decimal out of range"))?;
        Ok(BareItem::Decimal(value))
    }

    fn read_params(&mut self) -> Result<IndexMap<String, BareItem>> {
        let mut params = IndexMap::new();
        while self.eat(b';') {
            self.skip_spaces();
            let key = self.read_key()?;
            // A key with no `=value` means boolean true.
            let value = if self.eat(b'=') {
                self.read_bare_item()?
            } else {
                BareItem::Boolean(true)
            };
            params.insert(key, value);
        }
        Ok(params)
    }

    fn read_key(&mut self) -> Result<String> {
        let start = self.pos;
        match self.peek() {
            Some(b'a'..=b'z') | Some(b'*') => self.pos += 1,
            _ => {
                return Err(Error::malformed(
                    "parameter key must start with a lowercase letter or *",
                ))
            }
        }
        while matches!(
            self.peek(),
            Some(b'a'..=b'z' | b'0'..=b'9' | b'_' | b'-' | b'.' | b'*')
        ) {
            self.pos += 1;
        }
        Ok(self.slice_from(start)?.to_string())
    }
}
