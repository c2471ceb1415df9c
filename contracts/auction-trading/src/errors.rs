use soroban_sdk::contracterror;

/// Error codes for the auction trading contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Contract has not been initialized
    NotInitialized = 2,
    /// Auction duration must be over one day and at most ten days
    DurationOutOfRange = 3,
    /// No auction stored under the requested id
    AuctionNotFound = 4,
    /// Bidding window has closed
    AuctionExpired = 5,
    /// Auction has not reached its end time yet
    AuctionActive = 6,
    /// Auction was already settled
    AlreadySettled = 7,
    /// Bid does not strictly improve on both the minimum price and the best bid
    BidTooLow = 8,
    /// Minimum price must not be negative
    InvalidMinPrice = 9,
}

impl Error {
    /// Reject reason shown to callers. The duration, lookup, expiry, bid and
    /// settlement strings are kept byte-for-byte as existing clients match on
    /// them, leading spaces included.
    pub const fn message(self) -> &'static str {
        match self {
            Error::AlreadyInitialized => "already initialized",
            Error::NotInitialized => "not initialized",
            Error::DurationOutOfRange => " _duration must be in the range of 1 day to 10 days",
            Error::AuctionNotFound => "auction doesnt exist",
            Error::AuctionExpired => "auction has ended",
            Error::AuctionActive => "auction is active",
            Error::AlreadySettled => "auction already settled",
            Error::BidTooLow => " Bid must be bigger than min Bid And bigger than best Bid",
            Error::InvalidMinPrice => "min price must not be negative",
        }
    }
}
