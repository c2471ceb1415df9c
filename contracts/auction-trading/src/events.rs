use soroban_sdk::{contractevent, Address};

/// Event emitted when a seller lists a new auction
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreatedEventData {
    #[topic]
    pub auction_id: u64,
    pub seller: Address,
    pub min_price: i128,
    pub end_time: u64,
}

/// Event emitted when a bid is accepted and its funds escrowed
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlacedEventData {
    #[topic]
    pub auction_id: u64,
    pub bid_id: u64,
    pub buyer: Address,
    pub amount: i128,
}

/// Event emitted when an outbid bidder's escrow is returned
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidRefundedEventData {
    #[topic]
    pub auction_id: u64,
    pub bidder: Address,
    pub amount: i128,
}

/// Event emitted when an auction is settled. `sold` is false when the
/// auction closed with no bids and no funds moved.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionSettledEventData {
    #[topic]
    pub auction_id: u64,
    pub seller: Address,
    pub amount: i128,
    pub sold: bool,
}
