use std::fmt;

use paste::paste;

/// The result code of an OPC UA operation.
///
/// The top two bits hold the severity: `00` good, `01` uncertain, `10` bad.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StatusCode(u32);

const SEVERITY_MASK: u32 = 0xC000_0000;
const SEVERITY_UNCERTAIN: u32 = 0x4000_0000;
const SEVERITY_BAD: u32 = 0x8000_0000;

macro_rules! status_codes {
    ($($name:ident = $code:literal),* $(,)?) => {
        paste! {
            impl StatusCode {
                $(
                    pub const [<$name:snake:upper>]: StatusCode = StatusCode($code);
                )*

                /// The symbolic name of well known codes
                pub fn name(&self) -> Option<&'static str> {
                    match self.0 {
                        $($code => Some(stringify!($name)),)*
                        _ => None,
                    }
                }
            }
        }
    };
}

status_codes!(
    Good = 0x0000_0000,
    BadUnexpectedError = 0x8001_0000,
    BadInternalError = 0x8002_0000,
    BadCommunicationError = 0x8005_0000,
    BadTimeout = 0x800A_0000,
    BadServiceUnsupported = 0x800B_0000,
    BadUserAccessDenied = 0x801F_0000,
    BadIdentityTokenInvalid = 0x8020_0000,
    BadIdentityTokenRejected = 0x8021_0000,
    BadNonceInvalid = 0x8024_0000,
    BadSessionIdInvalid = 0x8025_0000,
    BadSessionClosed = 0x8026_0000,
    BadSessionNotActivated = 0x8027_0000,
    BadRequestCancelledByClient = 0x802C_0000,
    BadTooManySessions = 0x8056_0000,
    BadSecureChannelClosed = 0x8086_0000,
);

impl StatusCode {
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    pub const fn bits(&self) -> u32 {
        self.0
    }

    pub fn is_good(&self) -> bool {
        self.0 & SEVERITY_MASK == 0
    }

    pub fn is_uncertain(&self) -> bool {
        self.0 & SEVERITY_MASK == SEVERITY_UNCERTAIN
    }

    pub fn is_bad(&self) -> bool {
        self.0 & SEVERITY_BAD != 0
    }
}

impl From<u32> for StatusCode {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<StatusCode> for u32 {
    fn from(value: StatusCode) -> Self {
        value.0
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name} ({:#010x})", self.0),
            None => write!(f, "{:#010x}", self.0),
        }
    }
}

impl fmt::Debug for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
