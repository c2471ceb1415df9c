use crate::types::{Auction, Bid, DataKey};
use soroban_sdk::{Address, Env, Vec};

pub fn get_payment_token(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::PaymentToken)
}

pub fn set_payment_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::PaymentToken, token);
}

pub fn has_payment_token(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::PaymentToken)
}

pub fn increment_auction_counter(env: &Env) -> u64 {
    let counter: u64 = env
        .storage()
        .instance()
        .get(&DataKey::AuctionCounter)
        .unwrap_or(0u64)
        + 1;
    env.storage()
        .instance()
        .set(&DataKey::AuctionCounter, &counter);
    counter
}

pub fn increment_bid_counter(env: &Env) -> u64 {
    let counter: u64 = env
        .storage()
        .instance()
        .get(&DataKey::BidCounter)
        .unwrap_or(0u64)
        + 1;
    env.storage().instance().set(&DataKey::BidCounter, &counter);
    counter
}

pub fn get_auction(env: &Env, auction_id: u64) -> Option<Auction> {
    env.storage().persistent().get(&DataKey::Auction(auction_id))
}

pub fn save_auction(env: &Env, auction: &Auction) {
    env.storage()
        .persistent()
        .set(&DataKey::Auction(auction.id), auction);
}

pub fn get_bid(env: &Env, bid_id: u64) -> Option<Bid> {
    env.storage().persistent().get(&DataKey::Bid(bid_id))
}

pub fn save_bid(env: &Env, bid: &Bid) {
    env.storage().persistent().set(&DataKey::Bid(bid.id), bid);
}

pub fn auction_index(env: &Env) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::AuctionIndex)
        .unwrap_or(Vec::new(env))
}

pub fn add_auction_to_index(env: &Env, auction_id: u64) {
    let mut index = auction_index(env);
    index.push_back(auction_id);
    env.storage().persistent().set(&DataKey::AuctionIndex, &index);
}

pub fn seller_auctions(env: &Env, seller: &Address) -> Vec<u64> {
    let key = DataKey::SellerAuctions(seller.clone());
    env.storage().persistent().get(&key).unwrap_or(Vec::new(env))
}

pub fn add_auction_to_seller(env: &Env, seller: &Address, auction_id: u64) {
    let key = DataKey::SellerAuctions(seller.clone());
    let mut index = seller_auctions(env, seller);
    index.push_back(auction_id);
    env.storage().persistent().set(&key, &index);
}

pub fn buyer_bids(env: &Env, buyer: &Address) -> Vec<u64> {
    let key = DataKey::BuyerBids(buyer.clone());
    env.storage().persistent().get(&key).unwrap_or(Vec::new(env))
}

pub fn add_bid_to_buyer(env: &Env, buyer: &Address, bid_id: u64) {
    let key = DataKey::BuyerBids(buyer.clone());
    let mut index = buyer_bids(env, buyer);
    index.push_back(bid_id);
    env.storage().persistent().set(&key, &index);
}

pub fn get_escrow(env: &Env, auction_id: u64, bidder: &Address) -> i128 {
    let key = DataKey::Escrow(auction_id, bidder.clone());
    env.storage().persistent().get(&key).unwrap_or(0)
}

pub fn set_escrow(env: &Env, auction_id: u64, bidder: &Address, amount: i128) {
    let key = DataKey::Escrow(auction_id, bidder.clone());
    env.storage().persistent().set(&key, &amount);
}

pub fn remove_escrow(env: &Env, auction_id: u64, bidder: &Address) {
    let key = DataKey::Escrow(auction_id, bidder.clone());
    env.storage().persistent().remove(&key);
}
