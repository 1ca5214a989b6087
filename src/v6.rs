//!Extended six octet module
//!
//!The 48 bit dotted form ("1.2.3.4.5.6"). This is NOT RFC 4291 IPv6, which
//!this crate deliberately does not model.

use crate::base;

pub(crate) const BITS_LEN: u8 = Addr::BITS;

///Six octet, 48 bit dotted address
pub type Addr = base::Dots<6>;
