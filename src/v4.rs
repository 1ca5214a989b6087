//!Classic four octet module

use crate::base;

pub(crate) const BITS_LEN: u8 = Addr::BITS;

///Four octet, 32 bit dotted address
pub type Addr = base::Dots<4>;
