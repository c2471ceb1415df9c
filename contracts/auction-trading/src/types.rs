use soroban_sdk::{contracttype, Address, String};

/// A listed item. `end_time` is fixed at creation and never mutated;
/// `settled` flips false -> true exactly once, in `trade_auction`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    pub id: u64,
    pub seller: Address,
    pub name: String,
    pub description: String,
    pub min_price: i128,
    pub created_at: u64,
    pub end_time: u64,
    pub settled: bool,
    /// Highest-amount bid recorded so far, None until the first accepted bid.
    pub best_bid_id: Option<u64>,
}

/// A recorded bid. Bid ids come from one global counter, not a per-auction
/// one. Bids are immutable and never removed, only superseded as best by a
/// strictly higher one.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bid {
    pub id: u64,
    pub auction_id: u64,
    pub buyer: Address,
    pub amount: i128,
    pub created_at: u64,
}

/// Storage keys for the auction trading contract.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Token all bids are escrowed in
    PaymentToken,
    /// Last allocated auction id
    AuctionCounter,
    /// Last allocated bid id
    BidCounter,
    /// Auction record by id
    Auction(u64),
    /// Bid record by id
    Bid(u64),
    /// All auction ids in creation order
    AuctionIndex,
    /// Auction ids listed by a seller, creation order
    SellerAuctions(Address),
    /// Bid ids placed by a buyer, creation order
    BuyerBids(Address),
    /// Funds held for a bidder on an auction
    Escrow(u64, Address),
}
