fn main() {
    multiversx_sc_meta_lib::cli_main::<batch_supply::AbiProvider>();
}
