//! The raw message handed to the mailer.

/// A fully rendered RFC 822 message plus its envelope recipients.
///
/// The mailer treats `data` as opaque bytes: it is base64 encoded and sent as
/// `RawMessage.Data`. Destinations are sent in order as
/// `Destinations.member.1`, `Destinations.member.2`, ...
///
/// # Examples
///
/// ```
/// use integrations_ses_mailer::types::RawMessage;
///
/// let message = RawMessage::new("From: a@example.com\r\nTo: b@example.com\r\n\r\nHi")
///     .with_destination("b@example.com")
///     .with_destination("c@example.com");
///
/// assert_eq!(message.destinations(), ["b@example.com", "c@example.com"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMessage {
    data: Vec<u8>,
    destinations: Vec<String>,
}

impl RawMessage {
    /// Create a message from its raw bytes with no destinations.
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            destinations: Vec::new(),
        }
    }

    /// Append one destination address.
    pub fn with_destination(mut self, address: impl Into<String>) -> Self {
        self.destinations.push(address.into());
        self
    }

    /// Append several destination addresses, keeping their order.
    pub fn with_destinations<I, S>(mut self, addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.destinations
            .extend(addresses.into_iter().map(Into::into));
        self
    }

    /// The raw message bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The destination addresses in send order.
    pub fn destinations(&self) -> &[String] {
        &self.destinations
    }

    /// Whether the message has no content.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
