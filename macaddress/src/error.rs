#[derive(thiserror::Error, Clone, Copy, Debug, Eq, PartialEq)]
#[error("Invalid MAC address; expecting 6 octets, found {0}")]
pub struct OctetCountError(pub usize);
