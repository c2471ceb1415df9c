#![no_std]

mod errors;
mod events;
mod storage;
mod time_gate;
mod types;

use soroban_sdk::{contract, contractimpl, token, Address, Env, String, Vec};

pub use errors::Error;
use events::{
    AuctionCreatedEventData, AuctionSettledEventData, BidPlacedEventData, BidRefundedEventData,
};
use types::{Auction, Bid};

/// Shortest allowed auction duration in seconds, exclusive bound.
pub const ONE_DAY: u64 = 86_400;
/// Longest allowed auction duration in seconds, inclusive bound.
pub const TEN_DAYS: u64 = 10 * ONE_DAY;

#[contract]
pub struct AuctionTrading;

#[contractimpl]
impl AuctionTrading {
    /// Record the token all bids are escrowed in. One-shot.
    pub fn initialize(env: Env, token: Address) -> Result<(), Error> {
        if storage::has_payment_token(&env) {
            return Err(Error::AlreadyInitialized);
        }
        storage::set_payment_token(&env, &token);
        Ok(())
    }

    /// List an item for auction. Duration must be over one day and at most
    /// ten days; the end time is `created_at + duration_seconds` and never
    /// changes afterwards.
    pub fn create_auction(
        env: Env,
        seller: Address,
        name: String,
        description: String,
        min_price: i128,
        duration_seconds: u64,
    ) -> Result<u64, Error> {
        seller.require_auth();
        require_initialized(&env)?;

        if duration_seconds <= ONE_DAY || duration_seconds > TEN_DAYS {
            return Err(Error::DurationOutOfRange);
        }
        if min_price < 0 {
            return Err(Error::InvalidMinPrice);
        }

        let created_at = env.ledger().timestamp();
        let auction_id = storage::increment_auction_counter(&env);

        let auction = Auction {
            id: auction_id,
            seller: seller.clone(),
            name,
            description,
            min_price,
            created_at,
            end_time: created_at + duration_seconds,
            settled: false,
            best_bid_id: None,
        };

        storage::save_auction(&env, &auction);
        storage::add_auction_to_index(&env, auction_id);
        storage::add_auction_to_seller(&env, &seller, auction_id);

        AuctionCreatedEventData {
            auction_id,
            seller,
            min_price,
            end_time: auction.end_time,
        }
        .publish(&env);

        Ok(auction_id)
    }

    /// Place a bid, escrowing `amount` with the contract. A bid is accepted
    /// only while the auction is still open and only when it strictly
    /// improves on both the minimum price and the current best bid. The
    /// outbid bidder's escrow is returned in the same call.
    pub fn create_bid(
        env: Env,
        auction_id: u64,
        buyer: Address,
        amount: i128,
    ) -> Result<u64, Error> {
        buyer.require_auth();
        let token = require_initialized(&env)?;

        let mut auction =
            storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;

        let now = env.ledger().timestamp();
        if time_gate::is_expired(&auction, now) {
            return Err(Error::AuctionExpired);
        }

        let best = best_bid_of(&env, &auction);
        let best_amount = best.as_ref().map(|b| b.amount).unwrap_or(0);
        if amount <= auction.min_price || amount <= best_amount {
            return Err(Error::BidTooLow);
        }

        if let Some(previous) = &best {
            refund_bidder(&env, &token, auction_id, &previous.buyer);
        }

        let token_client = token::TokenClient::new(&env, &token);
        token_client.transfer(&buyer, &env.current_contract_address(), &amount);
        storage::set_escrow(&env, auction_id, &buyer, amount);

        let bid_id = storage::increment_bid_counter(&env);
        let bid = Bid {
            id: bid_id,
            auction_id,
            buyer: buyer.clone(),
            amount,
            created_at: now,
        };
        storage::save_bid(&env, &bid);
        storage::add_bid_to_buyer(&env, &buyer, bid_id);

        auction.best_bid_id = Some(bid_id);
        storage::save_auction(&env, &auction);

        BidPlacedEventData {
            auction_id,
            bid_id,
            buyer,
            amount,
        }
        .publish(&env);

        Ok(bid_id)
    }

    /// Settle an expired auction: pay the best bid to the seller and close
    /// the auction for good. An auction that expired with no bids is closed
    /// unsold, with no transfer. Each auction settles exactly once.
    pub fn trade_auction(env: Env, auction_id: u64) -> Result<(), Error> {
        let token = require_initialized(&env)?;

        let mut auction =
            storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;

        let now = env.ledger().timestamp();
        if !time_gate::is_expired(&auction, now) {
            return Err(Error::AuctionActive);
        }
        if auction.settled {
            return Err(Error::AlreadySettled);
        }

        // The settled flag is persisted before any transfer so that a
        // reentrant call lands on the AlreadySettled check above.
        auction.settled = true;
        storage::save_auction(&env, &auction);

        let mut winning_amount = 0;
        if let Some(best) = best_bid_of(&env, &auction) {
            storage::remove_escrow(&env, auction_id, &best.buyer);
            let token_client = token::TokenClient::new(&env, &token);
            token_client.transfer(
                &env.current_contract_address(),
                &auction.seller,
                &best.amount,
            );
            winning_amount = best.amount;
        }

        AuctionSettledEventData {
            auction_id,
            seller: auction.seller,
            amount: winning_amount,
            sold: auction.best_bid_id.is_some(),
        }
        .publish(&env);

        Ok(())
    }

    pub fn get_auction(env: Env, auction_id: u64) -> Result<Auction, Error> {
        storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)
    }

    /// All auctions in creation order.
    pub fn get_all_auctions(env: Env) -> Vec<Auction> {
        let mut auctions = Vec::new(&env);
        for auction_id in storage::auction_index(&env).iter() {
            auctions.push_back(storage::get_auction(&env, auction_id).unwrap());
        }
        auctions
    }

    /// Auctions listed by `seller`, in creation order.
    pub fn get_user_auctions(env: Env, seller: Address) -> Vec<Auction> {
        let mut auctions = Vec::new(&env);
        for auction_id in storage::seller_auctions(&env, &seller).iter() {
            auctions.push_back(storage::get_auction(&env, auction_id).unwrap());
        }
        auctions
    }

    /// Bids placed by `buyer`, in creation order, across all auctions.
    pub fn get_user_bids(env: Env, buyer: Address) -> Vec<Bid> {
        let mut bids = Vec::new(&env);
        for bid_id in storage::buyer_bids(&env, &buyer).iter() {
            bids.push_back(storage::get_bid(&env, bid_id).unwrap());
        }
        bids
    }

    /// Highest-amount bid recorded for an auction, None when no bid was
    /// ever accepted.
    pub fn best_bid(env: Env, auction_id: u64) -> Result<Option<Bid>, Error> {
        let auction =
            storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;
        Ok(best_bid_of(&env, &auction))
    }
}

fn require_initialized(env: &Env) -> Result<Address, Error> {
    storage::get_payment_token(env).ok_or(Error::NotInitialized)
}

fn best_bid_of(env: &Env, auction: &Auction) -> Option<Bid> {
    auction
        .best_bid_id
        .map(|bid_id| storage::get_bid(env, bid_id).unwrap())
}

fn refund_bidder(env: &Env, token: &Address, auction_id: u64, bidder: &Address) {
    let escrowed_amount = storage::get_escrow(env, auction_id, bidder);
    if escrowed_amount > 0 {
        let token_client = token::TokenClient::new(env, token);
        token_client.transfer(&env.current_contract_address(), bidder, &escrowed_amount);
        storage::remove_escrow(env, auction_id, bidder);

        BidRefundedEventData {
            auction_id,
            bidder: bidder.clone(),
            amount: escrowed_amount,
        }
        .publish(env);
    }
}

#[cfg(test)]
mod test;
