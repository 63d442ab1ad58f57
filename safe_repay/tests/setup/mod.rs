use crate::constants::*;
use common_proxies::{proxy_comet, proxy_safe_repay};

use multiversx_sc::types::{
    BigUint, EgldOrEsdtTokenIdentifier, ManagedAddress, ReturnsNewManagedAddress, ReturnsResult,
};
use multiversx_sc_scenario::{
    api::StaticApi,
    imports::{ExpectMessage, ReturnsLogs, TestAddress, TestTokenIdentifier},
    scenario_model::Log,
    ScenarioTxRun, ScenarioWorld,
};

pub fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(SAFE_REPAY_PATH, safe_repay::ContractBuilder);
    blockchain.register_contract(COMET_MOCK_PATH, comet_mock::ContractBuilder);

    blockchain
}

pub fn scaled(amount: u64) -> BigUint<StaticApi> {
    BigUint::from(amount) * BigUint::from(10u64).pow(TOKEN_DECIMALS)
}

pub struct SafeRepayTestState {
    pub world: ScenarioWorld,
    pub repay_sc: ManagedAddress<StaticApi>,
    pub comet_sc: ManagedAddress<StaticApi>,
}

impl SafeRepayTestState {
    pub fn new() -> Self {
        let mut world = world();
        world.account(OWNER_ADDRESS).nonce(1);

        let comet_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_comet::CometMockProxy)
            .init(EgldOrEsdtTokenIdentifier::esdt(
                WEGLD_TOKEN.to_token_identifier(),
            ))
            .code(COMET_MOCK_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        let repay_sc = world
            .tx()
            .from(OWNER_ADDRESS)
            .typed(proxy_safe_repay::SafeRepayProxy)
            .init(comet_sc.clone())
            .code(SAFE_REPAY_PATH)
            .returns(ReturnsNewManagedAddress)
            .run();

        Self {
            world,
            repay_sc,
            comet_sc,
        }
    }

    pub fn safe_repay(
        &mut self,
        from: &TestAddress,
        repay_amount: BigUint<StaticApi>,
        collateral_asset: TestTokenIdentifier,
        payment_token: TestTokenIdentifier,
        payment_amount: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.repay_sc.clone())
            .typed(proxy_safe_repay::SafeRepayProxy)
            .safe_repay(
                repay_amount,
                EgldOrEsdtTokenIdentifier::esdt(collateral_asset.to_token_identifier()),
            )
            .single_esdt(&payment_token.to_token_identifier(), 0, &payment_amount)
            .run();
    }

    pub fn safe_repay_with_logs(
        &mut self,
        from: &TestAddress,
        repay_amount: BigUint<StaticApi>,
        collateral_asset: TestTokenIdentifier,
        payment_token: TestTokenIdentifier,
        payment_amount: BigUint<StaticApi>,
    ) -> Vec<Log> {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.repay_sc.clone())
            .typed(proxy_safe_repay::SafeRepayProxy)
            .safe_repay(
                repay_amount,
                EgldOrEsdtTokenIdentifier::esdt(collateral_asset.to_token_identifier()),
            )
            .single_esdt(&payment_token.to_token_identifier(), 0, &payment_amount)
            .returns(ReturnsLogs)
            .run()
    }

    pub fn safe_repay_error(
        &mut self,
        from: &TestAddress,
        repay_amount: BigUint<StaticApi>,
        collateral_asset: TestTokenIdentifier,
        payment_token: TestTokenIdentifier,
        payment_amount: BigUint<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.repay_sc.clone())
            .typed(proxy_safe_repay::SafeRepayProxy)
            .safe_repay(
                repay_amount,
                EgldOrEsdtTokenIdentifier::esdt(collateral_asset.to_token_identifier()),
            )
            .single_esdt(&payment_token.to_token_identifier(), 0, &payment_amount)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    // Argument errors fire before the payment is inspected.
    pub fn safe_repay_no_payment_error(
        &mut self,
        from: &TestAddress,
        repay_amount: BigUint<StaticApi>,
        collateral_asset: &EgldOrEsdtTokenIdentifier<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.repay_sc.clone())
            .typed(proxy_safe_repay::SafeRepayProxy)
            .safe_repay(repay_amount, collateral_asset)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn required_collateral(
        &mut self,
        repay_amount: BigUint<StaticApi>,
        collateral_asset: TestTokenIdentifier,
    ) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.repay_sc.clone())
            .typed(proxy_safe_repay::SafeRepayProxy)
            .required_collateral(
                repay_amount,
                EgldOrEsdtTokenIdentifier::esdt(collateral_asset.to_token_identifier()),
            )
            .returns(ReturnsResult)
            .run()
    }

    pub fn borrow_balance(&mut self, principal: &TestAddress) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.comet_sc.clone())
            .typed(proxy_comet::CometMockProxy)
            .borrow_balance_of(principal.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn collateral_balance(
        &mut self,
        principal: &TestAddress,
        asset: TestTokenIdentifier,
    ) -> BigUint<StaticApi> {
        self.world
            .query()
            .to(self.comet_sc.clone())
            .typed(proxy_comet::CometMockProxy)
            .collateral_balance_of(
                principal.to_managed_address(),
                EgldOrEsdtTokenIdentifier::esdt(asset.to_token_identifier()),
            )
            .returns(ReturnsResult)
            .run()
    }

    pub fn set_borrow_balance(&mut self, principal: &TestAddress, amount: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.comet_sc.clone())
            .typed(proxy_comet::CometMockProxy)
            .set_borrow_balance(principal.to_managed_address(), amount)
            .run();
    }

    pub fn set_collateral_balance(
        &mut self,
        principal: &TestAddress,
        asset: TestTokenIdentifier,
        amount: BigUint<StaticApi>,
    ) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.comet_sc.clone())
            .typed(proxy_comet::CometMockProxy)
            .set_collateral_balance(
                principal.to_managed_address(),
                EgldOrEsdtTokenIdentifier::esdt(asset.to_token_identifier()),
                amount,
            )
            .run();
    }

    pub fn set_price(&mut self, asset: TestTokenIdentifier, price: BigUint<StaticApi>) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.comet_sc.clone())
            .typed(proxy_comet::CometMockProxy)
            .set_price(
                EgldOrEsdtTokenIdentifier::esdt(asset.to_token_identifier()),
                price,
            )
            .run();
    }

    pub fn set_withdraw_paused(&mut self, paused: bool) {
        self.world
            .tx()
            .from(OWNER_ADDRESS)
            .to(self.comet_sc.clone())
            .typed(proxy_comet::CometMockProxy)
            .set_withdraw_paused(paused)
            .run();
    }

    pub fn update_comet(&mut self, from: &TestAddress, new_comet: ManagedAddress<StaticApi>) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.repay_sc.clone())
            .typed(proxy_safe_repay::SafeRepayProxy)
            .update_comet(new_comet)
            .run();
    }

    pub fn update_comet_error(
        &mut self,
        from: &TestAddress,
        new_comet: ManagedAddress<StaticApi>,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.repay_sc.clone())
            .typed(proxy_safe_repay::SafeRepayProxy)
            .update_comet(new_comet)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn set_manager(&mut self, from: &TestAddress, manager: &TestAddress, enabled: bool) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.repay_sc.clone())
            .typed(proxy_safe_repay::SafeRepayProxy)
            .set_manager(manager.to_managed_address(), enabled)
            .run();
    }

    pub fn set_manager_error(
        &mut self,
        from: &TestAddress,
        manager: &TestAddress,
        enabled: bool,
        error_message: &[u8],
    ) {
        self.world
            .tx()
            .from(from.to_managed_address())
            .to(self.repay_sc.clone())
            .typed(proxy_safe_repay::SafeRepayProxy)
            .set_manager(manager.to_managed_address(), enabled)
            .returns(ExpectMessage(core::str::from_utf8(error_message).unwrap()))
            .run();
    }

    pub fn is_manager(&mut self, address: &TestAddress) -> bool {
        self.world
            .query()
            .to(self.repay_sc.clone())
            .typed(proxy_safe_repay::SafeRepayProxy)
            .is_manager(address.to_managed_address())
            .returns(ReturnsResult)
            .run()
    }

    pub fn get_comet(&mut self) -> ManagedAddress<StaticApi> {
        self.world
            .query()
            .to(self.repay_sc.clone())
            .typed(proxy_safe_repay::SafeRepayProxy)
            .comet()
            .returns(ReturnsResult)
            .run()
    }
}

// Borrower owes 50 WEGLD against 100 XEGLD collateral priced at 2 WEGLD each.
pub fn setup_borrower(state: &mut SafeRepayTestState, borrower: TestAddress) {
    state
        .world
        .account(borrower)
        .nonce(1)
        .esdt_balance(WEGLD_TOKEN, scaled(1_000))
        .esdt_balance(XEGLD_TOKEN, scaled(1_000));

    state
        .world
        .set_esdt_balance(state.comet_sc.clone(), &XEGLD_TOKEN.as_bytes(), scaled(1_000));

    state.set_borrow_balance(&borrower, scaled(50));
    state.set_collateral_balance(&borrower, XEGLD_TOKEN, scaled(100));
    state.set_price(XEGLD_TOKEN, scaled(2));
}
