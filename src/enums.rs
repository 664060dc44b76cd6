use bitflags::bitflags;

bitflags! {
    /// HTTP method bitmask. Bit layout is fixed by the wire contract this
    /// crate is a Rust port of; do not renumber.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    pub struct Methods: u32 {
        const GET     = 1 << 0;
        const POST    = 1 << 1;
        const PUT     = 1 << 2;
        const DELETE  = 1 << 3;
        const PATCH   = 1 << 4;
        const HEAD    = 1 << 5;
        const OPTIONS = 1 << 6;
        const CONNECT = 1 << 7;
        const TRACE   = 1 << 8;
        const ALL     = 0xFFFF_FFFF;
    }
}

impl Default for Methods {
    fn default() -> Self {
        Methods::ALL
    }
}

/// Which of the four route families produced a match.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum MatchFamily {
    Exact = 1,
    Prefix = 2,
    Param = 3,
    Regex = 4,
}
