#![cfg(feature = "serde")]

use macaddress::MacAddress;

const JSON: &str = r#"{"eui":[18,52,86,171,205,239]}"#;

#[test]
fn serializes_octets_under_eui() {
    let mac: MacAddress = "12:34:56:AB:CD:EF".parse().unwrap();
    assert_eq!(serde_json::to_string(&mac).unwrap(), JSON);
}

#[test]
fn deserializes_octets_under_eui() {
    let mac: MacAddress = serde_json::from_str(JSON).unwrap();
    assert_eq!(mac, "12:34:56:AB:CD:EF".parse::<MacAddress>().unwrap());
}

#[test]
fn round_trips() {
    for mac in [
        MacAddress::ZERO,
        MacAddress::BROADCAST,
        MacAddress::from([0x01, 0x00, 0x5e, 0x00, 0x00, 0xfb]),
        MacAddress::from([0x12, 0x34, 0x56, 0xab, 0xcd, 0xef]),
    ] {
        let json = serde_json::to_string(&mac).unwrap();
        assert_eq!(serde_json::from_str::<MacAddress>(&json).unwrap(), mac);
    }
}

#[test]
fn ignores_unknown_fields() {
    let mac: MacAddress =
        serde_json::from_str(r#"{"eui":[18,52,86,171,205,239],"name":"eth0"}"#).unwrap();
    assert_eq!(mac.hex_format(), "12:34:56:ab:cd:ef");
}

#[test]
fn rejects_malformed_records() {
    let test_data = [
        r#"{}"#,
        r#"{"eui":null}"#,
        r#"{"eui":"12:34:56:ab:cd:ef"}"#,
        r#"{"eui":[18,52,86,171,205]}"#,
        r#"{"eui":[18,52,86,171,205,239,1]}"#,
        r#"{"eui":[18,52,86,171,205,256]}"#,
        r#"{"eui":[18,52,86,171,205,-1]}"#,
        r#"{"eui":[18,52,86,171,205,1.5]}"#,
        r#"[18,52,86,171,205,239]"#,
    ];

    for json in test_data {
        assert!(
            serde_json::from_str::<MacAddress>(json).is_err(),
            "accepted {}",
            json
        );
    }
}
