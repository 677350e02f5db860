//! Standard claim round-trip tests
//!
//! Every known claim is decoded from a single payload, checked through its
//! accessor, and checked again after one encode/decode cycle.

use chrono::{TimeZone, Utc};
use oidclaims::{accessors, AddressClaim, BirthdateClaim, ClaimSet};
use serde_json::{json, Value};

const A_LONG_LONG_TIME_AGO: i64 = 233431200;
const A_LONG_LONG_TIME_AGO_STRING: &str = "233431200";

fn stock_address() -> Value {
    json!({
        "formatted": "〒105-0011 東京都港区芝公園４丁目２−８",
        "street_address": "芝公園４丁目２−８",
        "locality": "港区",
        "region": "東京都",
        "postal_code": "105-0011",
        "country": "日本",
    })
}

fn assert_stock_address(address: Option<&AddressClaim>) {
    let address = address.expect("address should be present");
    assert_eq!(address.formatted(), "〒105-0011 東京都港区芝公園４丁目２−８");
    assert_eq!(address.street_address(), "芝公園４丁目２−８");
    assert_eq!(address.locality(), "港区");
    assert_eq!(address.region(), "東京都");
    assert_eq!(address.postal_code(), "105-0011");
    assert_eq!(address.country(), "日本");
}

fn stock_payload() -> Value {
    json!({
        "name": "jwx",
        "given_name": "jay",
        "middle_name": "weee",
        "family_name": "xi",
        "nickname": "jayweexi",
        "preferred_username": "jwx",
        "profile": "https://github.com/lestrrat-go/jwx",
        "picture": "https://avatars1.githubusercontent.com/u/36653903?s=400&amp;v=4",
        "website": "https://github.com/lestrrat-go/jwx",
        "email": "lestrrat+github@gmail.com",
        "email_verified": true,
        "gender": "n/a",
        "birthdate": "2015-11-04",
        "zoneinfo": "Asia/Tokyo",
        "locale": "ja_JP",
        "phone_number": "819012345678",
        "phone_number_verified": true,
        "address": stock_address(),
        "updated_at": A_LONG_LONG_TIME_AGO_STRING,
    })
}

fn assert_stock_claims(claims: &ClaimSet) {
    assert_eq!(accessors::name(claims), "jwx");
    assert_eq!(accessors::given_name(claims), "jay");
    assert_eq!(accessors::middle_name(claims), "weee");
    assert_eq!(accessors::family_name(claims), "xi");
    assert_eq!(accessors::nickname(claims), "jayweexi");
    assert_eq!(accessors::preferred_username(claims), "jwx");
    assert_eq!(
        accessors::profile(claims),
        "https://github.com/lestrrat-go/jwx"
    );
    assert_eq!(
        accessors::picture(claims),
        "https://avatars1.githubusercontent.com/u/36653903?s=400&amp;v=4"
    );
    assert_eq!(
        accessors::website(claims),
        "https://github.com/lestrrat-go/jwx"
    );
    assert_eq!(accessors::email(claims), "lestrrat+github@gmail.com");
    assert!(accessors::email_verified(claims));
    assert_eq!(accessors::gender(claims), "n/a");
    assert_eq!(
        accessors::birthdate(claims),
        Some(&BirthdateClaim::from_date_str("2015-11-04").unwrap())
    );
    assert_eq!(accessors::zoneinfo(claims), "Asia/Tokyo");
    assert_eq!(accessors::locale(claims), "ja_JP");
    assert_eq!(accessors::phone_number(claims), "819012345678");
    assert!(accessors::phone_number_verified(claims));
    assert_stock_address(accessors::address(claims));
    assert_eq!(
        accessors::updated_at(claims),
        Utc.timestamp_opt(A_LONG_LONG_TIME_AGO, 0).unwrap()
    );
}

#[test]
fn test_openid_claims() {
    let src = serde_json::to_vec(&stock_payload()).unwrap();
    let claims = ClaimSet::decode(&src).unwrap();
    assert_stock_claims(&claims);
    assert_eq!(claims.len(), 19);
    assert_eq!(claims.extension().count(), 0);
}

#[test]
fn test_openid_claims_round_trip() {
    let src = serde_json::to_vec(&stock_payload()).unwrap();
    let claims = ClaimSet::decode(&src).unwrap();

    let encoded = claims.encode().unwrap();
    let roundtrip = ClaimSet::decode(&encoded).unwrap();

    assert_eq!(roundtrip, claims);
    assert_stock_claims(&roundtrip);
}

#[test]
fn test_canonical_encoding() {
    let src = serde_json::to_vec(&stock_payload()).unwrap();
    let claims = ClaimSet::decode(&src).unwrap();
    let encoded: Value = serde_json::from_slice(&claims.encode().unwrap()).unwrap();

    // string seconds are an input convenience; output is always a number
    assert_eq!(encoded["updated_at"], json!(A_LONG_LONG_TIME_AGO));
    assert_eq!(encoded["birthdate"], json!("2015-11-04"));
    assert_eq!(encoded["address"], stock_address());
    assert_eq!(encoded["email_verified"], json!(true));
}

#[test]
fn test_each_claim_round_trips_alone() {
    let payload = stock_payload();
    for (name, value) in payload.as_object().unwrap() {
        let mut single = serde_json::Map::new();
        single.insert(name.clone(), value.clone());
        let src = serde_json::to_vec(&single).unwrap();

        let first = ClaimSet::decode(&src).unwrap();
        let second = ClaimSet::decode(&first.encode().unwrap()).unwrap();
        assert_eq!(first, second, "claim {name}");
        assert_eq!(first.keys(), vec![name.as_str()], "claim {name}");
    }
}

#[test]
fn test_address_claim() {
    let src = serde_json::to_string(&stock_address()).unwrap();
    let address: AddressClaim = serde_json::from_str(&src).unwrap();

    let buf = serde_json::to_vec(&address).unwrap();
    let roundtrip: AddressClaim = serde_json::from_slice(&buf).unwrap();

    for x in [&address, &roundtrip] {
        assert_stock_address(Some(x));
    }
}

#[test]
fn test_birthdate_claim() {
    const SRC: &str = r#""2015-11-04""#;
    let b: BirthdateClaim = serde_json::from_str(SRC).unwrap();
    assert_eq!(b.year(), 2015);
    assert_eq!(b.month(), 11);
    assert_eq!(b.day(), 4);

    let serialized = serde_json::to_string(&b).unwrap();
    assert_eq!(serialized, SRC);
}

#[test]
fn test_extension_claims_preserved() {
    let src = json!({
        "custom_key": 42,
        "email": "jwx@example.com",
        "groups": ["admin", "ops"],
        "tenant": {"id": "t-1", "tier": {"name": "gold", "seats": 12.5}},
        "flag": false,
        "nothing": null,
    });
    let claims = ClaimSet::decode(&serde_json::to_vec(&src).unwrap()).unwrap();
    let again = ClaimSet::decode(&claims.encode().unwrap()).unwrap();

    assert_eq!(again.get("custom_key"), Some(json!(42)));
    assert_eq!(again.get("groups"), Some(json!(["admin", "ops"])));
    assert_eq!(
        again.get("tenant"),
        Some(json!({"id": "t-1", "tier": {"name": "gold", "seats": 12.5}}))
    );
    assert_eq!(again.get("flag"), Some(json!(false)));
    assert_eq!(again.get("nothing"), Some(Value::Null));
    assert_eq!(again.to_value(), src);
}

#[test]
fn test_absent_claims_read_as_zero() {
    let claims = ClaimSet::decode(br#"{"custom_key": 42}"#).unwrap();

    assert_eq!(accessors::email(&claims), "");
    assert_eq!(accessors::locale(&claims), "");
    assert!(!accessors::email_verified(&claims));
    assert!(accessors::address(&claims).is_none());
    assert!(accessors::birthdate(&claims).is_none());
    assert_eq!(accessors::updated_at(&claims), chrono::DateTime::<Utc>::default());
    assert_eq!(claims.get("email"), None);
}
