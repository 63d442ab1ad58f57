#![no_std]

multiversx_sc::imports!();

use common_errors::ERROR_COMET_ZERO_ADDRESS;

/// Administrative surface shared by the helper contracts: which Comet market
/// they act against and who may repoint it.
#[multiversx_sc::module]
pub trait ConfigModule: common_events::EventsModule {
    /// Repoints the helper at another Comet market instance.
    ///
    /// Owner only; managers cannot repoint. The zero address is rejected.
    #[only_owner]
    #[endpoint(updateComet)]
    fn update_comet(&self, new_comet: ManagedAddress) {
        require!(!new_comet.is_zero(), ERROR_COMET_ZERO_ADDRESS);

        let old_comet = self.comet().get();
        self.comet().set(&new_comet);

        self.update_comet_event(&old_comet, &new_comet);
    }

    /// Grants or revokes manager rights for a principal.
    #[only_owner]
    #[endpoint(setManager)]
    fn set_manager(&self, manager: ManagedAddress, enabled: bool) {
        if enabled {
            self.managers().insert(manager.clone());
        } else {
            self.managers().swap_remove(&manager);
        }

        self.update_manager_event(&manager, enabled);
    }

    #[view(isManager)]
    fn is_manager(&self, address: ManagedAddress) -> bool {
        self.managers().contains(&address)
    }

    /// Comet market all operations are routed to. Set at deploy, never zero.
    #[view(getComet)]
    #[storage_mapper("comet")]
    fn comet(&self) -> SingleValueMapper<ManagedAddress>;

    /// Principals flagged as managers. A registry for off-chain tooling; it
    /// carries no extra authority on the endpoints here.
    #[view(getManagers)]
    #[storage_mapper("managers")]
    fn managers(&self) -> UnorderedSetMapper<ManagedAddress>;
}
