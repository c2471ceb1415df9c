
use crate::{AuctionTrading, AuctionTradingClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env, String,
};

pub fn setup_test() -> (
    Env,
    AuctionTradingClient<'static>,
    Address,
    Address,
    Address,
    token::TokenClient<'static>,
) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(AuctionTrading, ());
    let client = AuctionTradingClient::new(&env, &contract_id);

    let seller = Address::generate(&env);
    let buyer1 = Address::generate(&env);
    let buyer2 = Address::generate(&env);

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin.clone());
    let token_address = token_contract.address();
    let token_client = token::TokenClient::new(&env, &token_address);
    let token_admin_client = token::StellarAssetClient::new(&env, &token_address);

    token_admin_client.mint(&buyer1, &1_000_000);
    token_admin_client.mint(&buyer2, &1_000_000);

    client.initialize(&token_address);

    (env, client, seller, buyer1, buyer2, token_client)
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| {
        li.timestamp += seconds;
    });
}

pub fn create_default_auction(env: &Env, client: &AuctionTradingClient, seller: &Address) -> u64 {
    client.create_auction(
        seller,
        &String::from_str(env, "auction1"),
        &String::from_str(env, "Selling item1"),
        &10,
        &(crate::ONE_DAY + 1),
    )
}
