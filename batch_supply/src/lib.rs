#![no_std]

multiversx_sc::imports!();

pub use common_errors::*;
use common_proxies::proxy_comet;

/// Deposits several assets into a Comet-style money market in one
/// transaction, credited to the caller.
#[multiversx_sc::contract]
pub trait BatchSupply: common_config::ConfigModule + common_events::EventsModule {
    #[init]
    fn init(&self, comet: ManagedAddress) {
        require!(!comet.is_zero(), ERROR_COMET_ZERO_ADDRESS);
        self.comet().set(&comet);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Supplies every declared (asset, amount) pair to the market.
    ///
    /// The attached payments must match the declared pairs positionally; the
    /// multi-transfer takes the place of the allowance a caller would grant
    /// before a pull-based deposit. Either every deposit lands or the whole
    /// call fails with no state change.
    ///
    /// # Arguments
    /// - `assets`: Token identifiers to supply, in order.
    /// - `amounts`: Amounts to supply, zipped positionally with `assets`.
    #[payable("*")]
    #[endpoint(batchSupply)]
    fn batch_supply(
        &self,
        assets: ManagedVec<EgldOrEsdtTokenIdentifier>,
        amounts: ManagedVec<BigUint>,
    ) {
        require!(assets.len() == amounts.len(), ERROR_ARITY_MISMATCH);
        require!(!assets.is_empty(), ERROR_EMPTY_BATCH);

        for index in 0..assets.len() {
            require!(assets.get(index).is_valid(), ERROR_INVALID_ASSET);
            require!(
                *amounts.get(index) > BigUint::zero(),
                ERROR_INVALID_AMOUNT
            );
        }

        let payments = self.call_value().all_transfers();
        require!(payments.len() == assets.len(), ERROR_PAYMENT_MISMATCH);

        let caller = self.blockchain().get_caller();
        let comet = self.comet().get();

        for (index, payment) in payments.iter().enumerate() {
            require!(
                payment.token_identifier == *assets.get(index)
                    && payment.amount == *amounts.get(index),
                ERROR_PAYMENT_MISMATCH
            );

            self.tx()
                .to(&comet)
                .typed(proxy_comet::CometMockProxy)
                .deposit_on_behalf(&caller)
                .egld_or_single_esdt(&payment.token_identifier, 0, &payment.amount)
                .sync_call();
        }

        self.batch_supply_event(&caller, &assets, &amounts);
    }
}
