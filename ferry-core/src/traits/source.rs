//! Status line transport

use heapless::String;

use ferry_protocol::MAX_STATUS_LEN;

/// Trait for fetching raw status lines
///
/// Implementations own the transport (HTTP over Wi-Fi, serial bridge, ...).
/// The core only ever asks for the latest line when a refresh is due.
pub trait StatusSource {
    /// Transport failure
    type Error;

    /// Fetch the latest status line from the server
    fn fetch(&mut self) -> Result<String<MAX_STATUS_LEN>, Self::Error>;
}
