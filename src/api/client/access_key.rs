use std::fmt::{self, Debug, Formatter};

use zeroize::{Zeroize, ZeroizeOnDrop};

/// The bearer credential used against the API. Held separately from the client configuration so
/// the secret is wiped from memory when the client goes away and never shows up in debug output.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub(crate) struct AccessKey(String);

impl AccessKey {
    pub(crate) fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub(crate) fn reveal(&self) -> &str {
        &self.0
    }
}

impl Debug for AccessKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("AccessKey(*redacted*)")
    }
}
