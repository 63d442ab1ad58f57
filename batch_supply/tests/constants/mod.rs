use multiversx_sc::types::TestAddress;
use multiversx_sc_scenario::imports::{MxscPath, TestTokenIdentifier};

pub const WEGLD_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("WEGLD-abcdef");
pub const XEGLD_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("XEGLD-abcdef");
pub const SEGLD_TOKEN: TestTokenIdentifier = TestTokenIdentifier::new("SEGLD-abcdef");
pub const TOKEN_DECIMALS: u32 = 18;

pub const OWNER_ADDRESS: TestAddress = TestAddress::new("owner");

pub const BATCH_SUPPLY_PATH: MxscPath = MxscPath::new("output/batch-supply.mxsc.json");
pub const COMET_MOCK_PATH: MxscPath = MxscPath::new("../comet_mock/output/comet-mock.mxsc.json");
