#![no_std]

multiversx_sc::imports!();

pub use common_errors::*;
use common_constants::{BPS, SAFETY_MARGIN_BPS, WAD};
use common_proxies::proxy_comet;

/// Repays debt in a Comet-style money market and withdraws exactly the
/// collateral needed to cover the repayment, padded by a safety margin so the
/// position never lands on the liquidation edge.
#[multiversx_sc::contract]
pub trait SafeRepay: common_config::ConfigModule + common_events::EventsModule {
    #[init]
    fn init(&self, comet: ManagedAddress) {
        require!(!comet.is_zero(), ERROR_COMET_ZERO_ADDRESS);
        self.comet().set(&comet);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Repays `repay_amount` of the caller's debt, then releases
    /// `repay_amount * 1.05 / price(collateral_asset)` collateral back to the
    /// caller. Both legs run in the same transaction; a failure in either
    /// leaves debt and collateral untouched.
    ///
    /// The attached payment funds the repayment and must be `repay_amount` of
    /// the market's base asset. Market state (borrow balance, price,
    /// collateral balance) is read here, right before the transfers - never
    /// carried over from an earlier transaction.
    ///
    /// # Arguments
    /// - `repay_amount`: Debt to repay, in base asset raw units.
    /// - `collateral_asset`: Collateral token to release.
    #[payable("*")]
    #[endpoint(safeRepay)]
    fn safe_repay(&self, repay_amount: BigUint, collateral_asset: EgldOrEsdtTokenIdentifier) {
        require!(repay_amount > BigUint::zero(), ERROR_INVALID_AMOUNT);
        require!(collateral_asset.is_valid(), ERROR_INVALID_ASSET);

        let payment = self.call_value().egld_or_single_esdt();
        let caller = self.blockchain().get_caller();
        let comet = self.comet().get();

        let base_asset = self
            .tx()
            .to(&comet)
            .typed(proxy_comet::CometMockProxy)
            .base_asset()
            .returns(ReturnsResult)
            .sync_call_readonly();
        require!(payment.token_identifier == base_asset, ERROR_WRONG_REPAY_TOKEN);
        require!(payment.amount == repay_amount, ERROR_PAYMENT_MISMATCH);

        let borrow_balance = self
            .tx()
            .to(&comet)
            .typed(proxy_comet::CometMockProxy)
            .borrow_balance_of(&caller)
            .returns(ReturnsResult)
            .sync_call_readonly();
        require!(repay_amount <= borrow_balance, ERROR_EXCEEDS_BORROW_BALANCE);

        let required_collateral = self.size_collateral_release(&comet, &repay_amount, &collateral_asset);

        let collateral_balance = self
            .tx()
            .to(&comet)
            .typed(proxy_comet::CometMockProxy)
            .collateral_balance_of(&caller, &collateral_asset)
            .returns(ReturnsResult)
            .sync_call_readonly();
        require!(
            required_collateral <= collateral_balance,
            ERROR_INSUFFICIENT_COLLATERAL
        );

        self.tx()
            .to(&comet)
            .typed(proxy_comet::CometMockProxy)
            .repay_on_behalf(&caller)
            .egld_or_single_esdt(&payment.token_identifier, 0, &payment.amount)
            .sync_call();

        self.tx()
            .to(&comet)
            .typed(proxy_comet::CometMockProxy)
            .withdraw_to(&caller, &collateral_asset, &required_collateral)
            .sync_call();

        self.safe_repay_event(&caller, &repay_amount, &required_collateral);
    }

    /// Collateral the market would release for a given repayment, at the
    /// current price. Same sizing `safeRepay` uses.
    #[view(requiredCollateral)]
    fn required_collateral(
        &self,
        repay_amount: BigUint,
        collateral_asset: EgldOrEsdtTokenIdentifier,
    ) -> BigUint {
        let comet = self.comet().get();
        self.size_collateral_release(&comet, &repay_amount, &collateral_asset)
    }

    /// `repay_amount * SAFETY_MARGIN_BPS / BPS * WAD / price`, floor rounded
    /// on both divisions. Floor never releases more than the margin allows;
    /// the dust it may leave behind stays as collateral.
    fn size_collateral_release(
        &self,
        comet: &ManagedAddress,
        repay_amount: &BigUint,
        collateral_asset: &EgldOrEsdtTokenIdentifier,
    ) -> BigUint {
        let price = self
            .tx()
            .to(comet)
            .typed(proxy_comet::CometMockProxy)
            .price_of(collateral_asset)
            .returns(ReturnsResult)
            .sync_call_readonly();

        let padded_value = repay_amount * &BigUint::from(SAFETY_MARGIN_BPS) / &BigUint::from(BPS);
        padded_value * &BigUint::from(WAD) / price
    }
}
