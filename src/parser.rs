use crate::{v4, v6, Error, Ip, Version};

//Appends the group being accumulated to `octets`, resetting the accumulator.
//
//A group must have at least one digit, fit into an octet and there may be at
//most 6 of them.
const fn close_group(octets: &mut [u8; 6], groups: &mut usize, value: &mut u16, digits: &mut u8) -> Option<Error> {
    if *digits == 0 || *value > 255 || *groups == 6 {
        return Some(Error::InvalidFormat);
    }

    octets[*groups] = *value as u8;
    *groups += 1;
    *value = 0;
    *digits = 0;
    None
}

///Parses strict dotted decimal text: dot separated groups of 1 to 3 decimal
///digits, each group no greater than 255.
///
///Exactly 4 groups make a classic address and exactly 6 groups make an
///extended one, any other shape is refused.
pub(crate) const fn parse_dots(text: &str) -> Result<Ip, Error> {
    let text = text.as_bytes();

    let mut octets = [0u8; 6];
    let mut groups = 0usize;
    let mut value = 0u16;
    let mut digits = 0u8;

    let mut idx = 0;
    while idx < text.len() {
        let ch = text[idx];
        if ch.is_ascii_digit() {
            if digits == 3 {
                return Err(Error::InvalidFormat);
            }
            value = value * 10 + (ch - b'0') as u16;
            digits += 1;
        } else if ch == b'.' {
            if let Some(error) = close_group(&mut octets, &mut groups, &mut value, &mut digits) {
                return Err(error);
            }
        } else {
            return Err(Error::InvalidFormat);
        }

        idx += 1;
    }

    if let Some(error) = close_group(&mut octets, &mut groups, &mut value, &mut digits) {
        return Err(error);
    }

    match groups {
        4 => Ok(Ip::V4(v4::Addr::new([octets[0], octets[1], octets[2], octets[3]]))),
        6 => Ok(Ip::V6Ext(v6::Addr::new(octets))),
        _ => Err(Error::InvalidFormat),
    }
}

//Counts dot separated groups of 1 to 3 decimal digits.
//
//Only the shape is inspected, group values are not range checked.
pub(crate) const fn dot_group_count(text: &str) -> Option<usize> {
    let text = text.as_bytes();

    let mut groups = 0usize;
    let mut digits = 0u8;

    let mut idx = 0;
    while idx < text.len() {
        let ch = text[idx];
        if ch.is_ascii_digit() {
            if digits == 3 {
                return None;
            }
            digits += 1;
        } else if ch == b'.' {
            if digits == 0 {
                return None;
            }
            groups += 1;
            digits = 0;
        } else {
            return None;
        }

        idx += 1;
    }

    if digits == 0 {
        None
    } else {
        Some(groups + 1)
    }
}

pub(crate) struct Subnet<'a> {
    pub addr: &'a str,
    pub prefix_text: &'a str,
    pub prefix: u8,
    pub version: Version,
}

//Splits `<address>/<prefix>` text, tolerating ASCII whitespace around the
//separator.
//
//The address part is shape checked only, because subnet containment compares
//canonical text against the address exactly as it was given.
pub(crate) fn split_subnet(text: &str) -> Result<Subnet<'_>, Error> {
    let (addr, prefix_text) = match text.split_once('/') {
        Some((addr, prefix_text)) => (addr.trim_end(), prefix_text.trim_start()),
        None => return Err(Error::InvalidSubnet),
    };

    let version = match dot_group_count(addr) {
        Some(4) => Version::V4,
        Some(6) => Version::V6Ext,
        _ => return Err(Error::InvalidSubnet),
    };

    if prefix_text.is_empty() || prefix_text.len() > 2 {
        return Err(Error::InvalidSubnet);
    }
    let prefix = match prefix_text.parse() {
        Ok(prefix) => prefix,
        Err(_) => return Err(Error::InvalidSubnet),
    };

    Ok(Subnet {
        addr,
        prefix_text,
        prefix,
        version,
    })
}
