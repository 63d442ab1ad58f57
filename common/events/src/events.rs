#![no_std]

multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    /// Emitted after every deposit of a batch landed in the market.
    #[event("batch_supply")]
    fn batch_supply_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] assets: &ManagedVec<EgldOrEsdtTokenIdentifier>,
        #[indexed] amounts: &ManagedVec<BigUint>,
    );

    /// Emitted after a repayment and its collateral release both succeeded.
    #[event("safe_repay")]
    fn safe_repay_event(
        &self,
        #[indexed] caller: &ManagedAddress,
        #[indexed] repay_amount: &BigUint,
        #[indexed] collateral_released: &BigUint,
    );

    #[event("update_comet")]
    fn update_comet_event(
        &self,
        #[indexed] old_comet: &ManagedAddress,
        #[indexed] new_comet: &ManagedAddress,
    );

    #[event("update_manager")]
    fn update_manager_event(&self, #[indexed] manager: &ManagedAddress, #[indexed] enabled: bool);
}
