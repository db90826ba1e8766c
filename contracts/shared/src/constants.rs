//! Election limits and storage lifetimes
//!
//! Tally cost is O(ballots x proposals), so both dimensions are capped at
//! construction. At the caps a tally touches 64 ballot entries and performs
//! 4096 score additions, well inside a single invocation's budget.

// ===== Size Limits =====

/// Maximum proposals per election. Ranked ballots are checked with a `u64`
/// bitmask, so this cannot exceed 64.
pub const MAX_PROPOSALS: u32 = 64;

/// Maximum distinct managers per election
pub const MAX_MANAGERS: u32 = 64;

/// Maximum proposal label length in bytes
pub const MAX_LABEL_LEN: u32 = 64;

// ===== Time Constants (in seconds) =====

/// One day in seconds (86400)
pub const ONE_DAY_SECONDS: u64 = 86_400;

/// Longest accepted proposal or voting lifetime (365 days)
pub const MAX_LIFETIME_SECONDS: u64 = 365 * ONE_DAY_SECONDS;

// ===== Ledger TTL =====
// ~5s per ledger: 30 days ≈ 518,400 ledgers.

/// Entries are bumped to live this many ledgers when touched
pub const ELECTION_TTL_LEDGERS: u32 = 1_036_800;

/// Entries are bumped once their TTL drops below this many ledgers
pub const ELECTION_TTL_THRESHOLD: u32 = 518_400;
