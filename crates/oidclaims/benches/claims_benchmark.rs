//! Claim set benchmark
//!
//! Measures decode, encode and accessor throughput for a payload carrying
//! every standard claim plus a handful of extension claims.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use oidclaims::{accessors, ClaimSet};
use serde_json::json;

fn payload() -> Vec<u8> {
    serde_json::to_vec(&json!({
        "name": "jwx",
        "given_name": "jay",
        "middle_name": "weee",
        "family_name": "xi",
        "nickname": "jayweexi",
        "preferred_username": "jwx",
        "profile": "https://github.com/lestrrat-go/jwx",
        "picture": "https://avatars1.githubusercontent.com/u/36653903?s=400",
        "website": "https://github.com/lestrrat-go/jwx",
        "email": "lestrrat+github@gmail.com",
        "email_verified": true,
        "gender": "n/a",
        "birthdate": "2015-11-04",
        "zoneinfo": "Asia/Tokyo",
        "locale": "ja_JP",
        "phone_number": "819012345678",
        "phone_number_verified": true,
        "address": {
            "formatted": "〒105-0011 東京都港区芝公園４丁目２−８",
            "street_address": "芝公園４丁目２−８",
            "locality": "港区",
            "region": "東京都",
            "postal_code": "105-0011",
            "country": "日本",
        },
        "updated_at": "233431200",
        "iss": "https://issuer.example.com",
        "sub": "248289761001",
        "aud": ["client-a", "client-b"],
        "exp": 1311281970,
        "iat": 1311280970,
        "groups": ["admin", "ops", "billing"],
    }))
    .expect("payload serializes")
}

fn bench_decode(c: &mut Criterion) {
    let bytes = payload();
    c.bench_function("decode", |b| {
        b.iter(|| ClaimSet::decode(black_box(&bytes)).unwrap())
    });
}

fn bench_encode(c: &mut Criterion) {
    let claims = ClaimSet::decode(&payload()).unwrap();
    c.bench_function("encode", |b| b.iter(|| black_box(&claims).encode().unwrap()));
}

fn bench_round_trip(c: &mut Criterion) {
    let bytes = payload();
    c.bench_function("round_trip", |b| {
        b.iter(|| {
            let claims = ClaimSet::decode(black_box(&bytes)).unwrap();
            ClaimSet::decode(&claims.encode().unwrap()).unwrap()
        })
    });
}

fn bench_accessors(c: &mut Criterion) {
    let claims = ClaimSet::decode(&payload()).unwrap();
    c.bench_function("accessors", |b| {
        b.iter(|| {
            let claims = black_box(&claims);
            (
                accessors::email(claims).len(),
                accessors::email_verified(claims),
                accessors::address(claims).map(|a| a.country().len()),
                accessors::birthdate(claims).map(|d| d.year()),
                accessors::updated_at(claims).timestamp(),
                claims.get("groups"),
            )
        })
    });
}

criterion_group!(
    benches,
    bench_decode,
    bench_encode,
    bench_round_trip,
    bench_accessors
);
criterion_main!(benches);
