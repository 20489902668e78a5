use proptest::prelude::*;

use zt_script::address::{MAINNET_P2PKH, TESTNET_P2PKH};
use zt_script::{address_to_script, is_valid_addr, memo_to_script, Address, Network, MAX_MEMO_LEN};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn address_prefix_is_network_exclusive(pkh in prop::array::uniform20(any::<u8>())) {
        let testnet = Address::from_public_key_hash(&pkh, Network::Testnet).to_string();
        let mainnet = Address::from_public_key_hash(&pkh, Network::Mainnet).to_string();

        prop_assert!(testnet.starts_with("tm"));
        prop_assert!(mainnet.starts_with("t1"));
        prop_assert!(is_valid_addr(&testnet, TESTNET_P2PKH));
        prop_assert!(!is_valid_addr(&testnet, MAINNET_P2PKH));
        prop_assert!(is_valid_addr(&mainnet, MAINNET_P2PKH));
        prop_assert!(!is_valid_addr(&mainnet, TESTNET_P2PKH));
    }

    #[test]
    fn address_script_embeds_key_hash(pkh in prop::array::uniform20(any::<u8>())) {
        let addr = Address::from_public_key_hash(&pkh, Network::Testnet);
        let script = address_to_script(&addr.to_string(), Network::Testnet).unwrap();
        prop_assert!(script.is_p2pkh());
        prop_assert_eq!(script.public_key_hash().unwrap(), pkh);
    }

    #[test]
    fn corrupted_checksum_never_validates(pkh in prop::array::uniform20(any::<u8>()), flip in 0usize..4) {
        let addr = Address::from_public_key_hash(&pkh, Network::Testnet).to_string();
        let mut payload = zt_primitives::base58::decode(&addr).unwrap();
        let idx = payload.len() - 1 - flip;
        payload[idx] ^= 0x01;
        let corrupted = zt_primitives::base58::encode(&payload);
        prop_assert!(!is_valid_addr(&corrupted, TESTNET_P2PKH));
    }

    #[test]
    fn memo_script_respects_length_limit(memo in "[ -~]{0,120}") {
        match memo_to_script(&memo) {
            Ok(script) => {
                prop_assert!(memo.len() <= MAX_MEMO_LEN);
                prop_assert_eq!(script.data_carrier_payload().unwrap(), memo.as_bytes().to_vec());
            }
            Err(_) => prop_assert!(memo.len() > MAX_MEMO_LEN),
        }
    }
}
