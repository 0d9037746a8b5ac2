//! PNM (Portable Any Map) header support
//!
//! Handles the P1-P6 variants. The header is a magic number followed by
//! whitespace-separated width and height, with `#` comments allowed
//! anywhere up to the end of their line.

use crate::{IoError, IoResult};

/// Iterator over header tokens, skipping whitespace and comments
struct HeaderTokens<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Iterator for HeaderTokens<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let &b = self.data.get(self.pos)?;
            if b == b'#' {
                while self.data.get(self.pos).is_some_and(|&c| c != b'\n') {
                    self.pos += 1;
                }
            } else if b.is_ascii_whitespace() {
                self.pos += 1;
            } else {
                break;
            }
        }
        let start = self.pos;
        while self
            .data
            .get(self.pos)
            .is_some_and(|c| !c.is_ascii_whitespace() && *c != b'#')
        {
            self.pos += 1;
        }
        Some(&self.data[start..self.pos])
    }
}

fn parse_dimension(token: Option<&[u8]>, what: &str) -> IoResult<u32> {
    let token = token.ok_or_else(|| IoError::InvalidData(format!("PNM header missing {}", what)))?;
    std::str::from_utf8(token)
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .filter(|&v| v > 0)
        .ok_or_else(|| IoError::InvalidData(format!("invalid PNM {}", what)))
}

/// Read PNM dimensions from the text header
pub fn read_dimensions_pnm(data: &[u8]) -> IoResult<(u32, u32)> {
    let mut tokens = HeaderTokens { data, pos: 0 };
    match tokens.next() {
        Some([b'P', b'1'..=b'6']) => {}
        _ => return Err(IoError::InvalidData("bad PNM magic".to_string())),
    }
    let width = parse_dimension(tokens.next(), "width")?;
    let height = parse_dimension(tokens.next(), "height")?;
    Ok((width, height))
}
