#![no_std]

multiversx_sc::imports!();

use common_errors::{
    ERROR_PRICE_NOT_SET, ERROR_REPAY_EXCEEDS_DEBT, ERROR_SUPPLY_CAP, ERROR_SUPPLY_PAUSED,
    ERROR_WITHDRAW_EXCEEDS_COLLATERAL, ERROR_WITHDRAW_PAUSED, ERROR_WRONG_REPAY_TOKEN,
};

/// Minimal Comet-style money market used to exercise the helper contracts.
/// Records balances verbatim, no interest accrual or reward indices.
#[multiversx_sc::contract]
pub trait CometMock {
    #[init]
    fn init(&self, base_asset: EgldOrEsdtTokenIdentifier) {
        self.base_asset().set(&base_asset);
    }

    #[upgrade]
    fn upgrade(&self) {}

    /// Credits the attached payment as collateral of `principal`.
    #[payable("*")]
    #[endpoint(depositOnBehalf)]
    fn deposit_on_behalf(&self, principal: ManagedAddress) {
        require!(!self.supply_paused().get(), ERROR_SUPPLY_PAUSED);

        let payment = self.call_value().egld_or_single_esdt();
        let cap_mapper = self.supply_cap(&payment.token_identifier);
        let balance_mapper = self.collateral_balance(&principal, &payment.token_identifier);
        let new_balance = balance_mapper.get() + &payment.amount;

        if !cap_mapper.is_empty() {
            require!(new_balance <= cap_mapper.get(), ERROR_SUPPLY_CAP);
        }

        balance_mapper.set(new_balance);
    }

    /// Burns the attached base-asset payment against `principal`'s debt.
    #[payable("*")]
    #[endpoint(repayOnBehalf)]
    fn repay_on_behalf(&self, principal: ManagedAddress) {
        let payment = self.call_value().egld_or_single_esdt();
        require!(
            payment.token_identifier == self.base_asset().get(),
            ERROR_WRONG_REPAY_TOKEN
        );

        let balance_mapper = self.borrow_balance(&principal);
        let balance = balance_mapper.get();
        require!(payment.amount <= balance, ERROR_REPAY_EXCEEDS_DEBT);

        balance_mapper.set(balance - payment.amount);
    }

    /// Debits `principal`'s collateral and sends the tokens out.
    #[endpoint(withdrawTo)]
    fn withdraw_to(
        &self,
        principal: ManagedAddress,
        asset: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
    ) {
        require!(!self.withdraw_paused().get(), ERROR_WITHDRAW_PAUSED);

        let balance_mapper = self.collateral_balance(&principal, &asset);
        let balance = balance_mapper.get();
        require!(amount <= balance, ERROR_WITHDRAW_EXCEEDS_COLLATERAL);

        balance_mapper.set(balance - &amount);

        let payment = EgldOrEsdtTokenPayment::new(asset, 0, amount);
        self.tx().to(&principal).payment(payment).transfer();
    }

    #[view(borrowBalanceOf)]
    fn borrow_balance_of(&self, principal: ManagedAddress) -> BigUint {
        self.borrow_balance(&principal).get()
    }

    #[view(collateralBalanceOf)]
    fn collateral_balance_of(
        &self,
        principal: ManagedAddress,
        asset: EgldOrEsdtTokenIdentifier,
    ) -> BigUint {
        self.collateral_balance(&principal, &asset).get()
    }

    /// Price of one whole unit of `asset`, WAD scaled, denominated in the
    /// base asset.
    #[view(priceOf)]
    fn price_of(&self, asset: EgldOrEsdtTokenIdentifier) -> BigUint {
        let price_mapper = self.price(&asset);
        require!(!price_mapper.is_empty(), ERROR_PRICE_NOT_SET);

        price_mapper.get()
    }

    // Test hooks to shape the market state directly.

    #[endpoint(setBorrowBalance)]
    fn set_borrow_balance(&self, principal: ManagedAddress, amount: BigUint) {
        self.borrow_balance(&principal).set(amount);
    }

    #[endpoint(setCollateralBalance)]
    fn set_collateral_balance(
        &self,
        principal: ManagedAddress,
        asset: EgldOrEsdtTokenIdentifier,
        amount: BigUint,
    ) {
        self.collateral_balance(&principal, &asset).set(amount);
    }

    #[endpoint(setPrice)]
    fn set_price(&self, asset: EgldOrEsdtTokenIdentifier, price: BigUint) {
        self.price(&asset).set(price);
    }

    #[endpoint(setSupplyCap)]
    fn set_supply_cap(&self, asset: EgldOrEsdtTokenIdentifier, cap: BigUint) {
        self.supply_cap(&asset).set(cap);
    }

    #[endpoint(setSupplyPaused)]
    fn set_supply_paused(&self, paused: bool) {
        self.supply_paused().set(paused);
    }

    #[endpoint(setWithdrawPaused)]
    fn set_withdraw_paused(&self, paused: bool) {
        self.withdraw_paused().set(paused);
    }

    #[view(getBaseAsset)]
    #[storage_mapper("base_asset")]
    fn base_asset(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    #[storage_mapper("borrow_balance")]
    fn borrow_balance(&self, principal: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("collateral_balance")]
    fn collateral_balance(
        &self,
        principal: &ManagedAddress,
        asset: &EgldOrEsdtTokenIdentifier,
    ) -> SingleValueMapper<BigUint>;

    #[storage_mapper("price")]
    fn price(&self, asset: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<BigUint>;

    #[storage_mapper("supply_cap")]
    fn supply_cap(&self, asset: &EgldOrEsdtTokenIdentifier) -> SingleValueMapper<BigUint>;

    #[storage_mapper("supply_paused")]
    fn supply_paused(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("withdraw_paused")]
    fn withdraw_paused(&self) -> SingleValueMapper<bool>;
}
