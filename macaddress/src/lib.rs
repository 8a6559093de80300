mod error;
mod macaddress;
mod parse;

pub use error::OctetCountError;
pub use macaddress::{Kind, MacAddress};
pub use parse::{parse_mac_address, ParseError};
