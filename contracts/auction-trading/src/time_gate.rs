//! Expiry checks against the ledger clock.
//!
//! `now` must always come from `env.ledger().timestamp()`, never from a
//! caller-supplied value.

use crate::types::Auction;

/// An auction is expired once the clock reaches its end time.
pub fn is_expired(auction: &Auction, now: u64) -> bool {
    now >= auction.end_time
}
