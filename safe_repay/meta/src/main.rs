fn main() {
    multiversx_sc_meta_lib::cli_main::<safe_repay::AbiProvider>();
}
