use super::*;
use curve::{ScalarField, WeierstrassPoint, from_decimal_str};
use num_bigint::BigUint;
use rand::SeedableRng;
use rand::rngs::StdRng;

const SIGNER_SK: &str = "0323dbbda9a5aff570d974d71c88334cf99ab9c0455e1d2546ca03ca069eb1e0";

const CANDIDATES: [&str; 4] = [
    "041941f5abe4f903af965d707182b688bd1fa725fd2cbc648fc435feb42a3794593275a2e9b4ad4bc0d2f3ecc8d23e3cf89da889d7aa35ce33f132d87b5bb5c393",
    "049ae9f2ec6a4db43f0e081a436f885b0d3f5753a45b00d2f2e3da38956848c4ff0205d89e14a2e36976bfe033407dbce6b48261d84d201277de0c3b82f08ddb09",
    "041052d6da0c3d7248e39e08912e2daa53c4e54cd9f2d96e3702fa15e77b199a501cd835bbddcc77134dc59dbbde2aa702183a68c90877906a31536eef972fac36",
    "044d9d03f3266f24777ac488f04ec579e1c4bea984398c9b98d99a9e31bc75ef0f13a19471a7297a6f2bf0126ed93d4c55b6e98ec286203e3d761c61922e3a4cda",
];

fn fixture_signature() -> Signature {
    Signature::from_hex(
        "00EF7145470CEC0B683C629CBA8ED58110000FFE657366F7D5A91F2D149DD8B5",
        "0370C60A23266F520C56DA088B4C4AFAAAF6BB1993A501980F6D8FB6F343984A",
    )
    .expect("hex")
}

fn candidates(hexes: &[&str]) -> Vec<VerifyingKey> {
    hexes
        .iter()
        .map(|h| VerifyingKey::from_hex_unchecked(h).expect("public key"))
        .collect()
}

fn decimal(s: &str) -> BigUint {
    s.parse().expect("decimal")
}

fn scalar(s: &str) -> ScalarField {
    ScalarField::from_biguint(&decimal(s))
}

fn signer_key() -> VerifyingKey {
    SigningKey::from_hex(SIGNER_SK).expect("sk").verifying_key()
}

#[test]
fn test_sign_verify() {
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&mut rng);
    let pk = sk.verifying_key();
    let msg_hash = ScalarField::from_u64(123);

    let sig = sk.sign(&mut rng, &msg_hash).expect("sign");
    let ok = pk.verify(&msg_hash, &sig).expect("verify");
    assert!(ok);
}

#[test]
fn test_verify_rejects_wrong_message() {
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&mut rng);
    let pk = sk.verifying_key();
    let sig = sk.sign(&mut rng, &ScalarField::from_u64(10)).expect("sign");

    let ok = pk.verify(&ScalarField::from_u64(11), &sig).expect("verify");
    assert!(!ok);
}

#[test]
fn test_verify_rejects_wrong_key() {
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&mut rng);
    let msg_hash = ScalarField::from_u64(21);
    let sig = sk.sign(&mut rng, &msg_hash).expect("sign");

    let wrong_pk = SigningKey::random(&mut rng).verifying_key();

    let ok = wrong_pk.verify(&msg_hash, &sig).expect("verify");
    assert!(!ok);
}

#[test]
fn test_derive_public_key_vectors() {
    let pk = signer_key();
    let expected = WeierstrassPoint::new(
        from_decimal_str(
            "7383369888919701441480368741745717804236448589785295824485316386504973064784",
        )
        .expect("x"),
        from_decimal_str(
            "13046769583748125084667126323794391074141340611556711664428099286902963678262",
        )
        .expect("y"),
    )
    .expect("on curve");
    assert_eq!(*pk.as_point(), expected);
}

#[test]
fn test_derive_public_key_reduces_modulo_order() {
    let sk = ScalarField::from_u64(77);
    let shifted = sk.to_biguint() + ScalarField::modulus();
    assert_eq!(
        SigningKey::from_biguint(&shifted).verifying_key(),
        SigningKey::from_scalar(sk).verifying_key()
    );
}

#[test]
fn test_verify_fixture_signatures_same_key() {
    let pk = signer_key();
    let fixtures = [
        (
            0u64,
            "00EF7145470CEC0B683C629CBA8ED58110000FFE657366F7D5A91F2D149DD8B5",
            "0370C60A23266F520C56DA088B4C4AFAAAF6BB1993A501980F6D8FB6F343984A",
        ),
        (
            1,
            "04BEF5B82A7637BBFF0D3C52DDB982A00C84FE8A386625369B511CF538CD3584",
            "00CA8ED01E70CEC6DE27C1B9F6735B52FB49E4521F50BEEDEED8E81459729E2E",
        ),
        (
            2,
            "05718D88F4B6B357D2D9D53708F1C3EFE61C38C6A8BD107B2779182D80E75665",
            "00906FA5864D2682981DA3B5BABBB5C3EA07E008335ED8266C55546D46B45A42",
        ),
    ];

    for (msg_hash, r, s) in fixtures {
        let sig = Signature::from_hex(r, s).expect("hex");
        assert!(
            pk.verify(&ScalarField::from_u64(msg_hash), &sig)
                .expect("verify"),
            "fixture with msg_hash {msg_hash}"
        );
    }
}

#[test]
fn test_verify_fixture_signatures_raw_point() {
    let pk = VerifyingKey::from_point(
        WeierstrassPoint::new(
            from_decimal_str(
                "3232533026113810378959142444695349421501562423203727069041340448447821565406",
            )
            .expect("x"),
            from_decimal_str(
                "2188348859066493967748283765357824083446977800414462976475976389468050954576",
            )
            .expect("y"),
        )
        .expect("on curve"),
    );

    let fixtures = [
        (
            "2946972996217835208449517111206100981106410880664713281589395314649921690550",
            "1840783889620414587148889492823509056116889771324083520524283336613943085117",
            "1739665441663252318720166579941834138245075960720774698623992586667777500452",
        ),
        (
            "959992042565662302991225573197761987736081061736836521396002216380900360528",
            "1856322010174419002598766346323954612142211502777436374084285602917776883052",
            "620220295126728043540210170239716626150792206560166734872758425758290398102",
        ),
    ];

    for (msg_hash, r, s) in fixtures {
        let sig = Signature::new(decimal(r), decimal(s));
        assert!(pk.verify(&scalar(msg_hash), &sig).expect("verify"));
    }
}

#[test]
fn test_sign_with_nonce_is_deterministic() {
    let sk = SigningKey::from_scalar(ScalarField::from_u64(99));
    let nonce = ScalarField::from_u64(0x1234_5678);
    let msg_hash = ScalarField::from_u64(5);

    let a = sk.sign_with_nonce(&nonce, &msg_hash).expect("sign");
    let b = sk.sign_with_nonce(&nonce, &msg_hash).expect("sign");
    assert_eq!(a, b);

    let nonce_point = recover_nonce_point(&a, &msg_hash, &sk.verifying_key()).expect("R");
    assert_eq!(nonce_point, derive_public_key(&nonce));
}

#[test]
fn test_zero_nonce_is_degenerate() {
    let sk = SigningKey::from_scalar(ScalarField::from_u64(99));
    assert_eq!(
        sk.sign_with_nonce(&ScalarField::ZERO, &ScalarField::ONE),
        Err(EcdsaError::DegenerateNonce)
    );
}

#[test]
fn test_malformed_signature_rejected() {
    let pk = signer_key();
    let n = ScalarField::modulus();
    let z = ScalarField::ZERO;
    let good = fixture_signature();

    let zero_r = Signature::new(BigUint::from(0u8), good.s.clone());
    assert_eq!(
        pk.verify(&z, &zero_r),
        Err(EcdsaError::MalformedSignature { component: "r" })
    );

    let s_at_order = Signature::new(good.r.clone(), n.clone());
    assert_eq!(
        pk.verify(&z, &s_at_order),
        Err(EcdsaError::MalformedSignature { component: "s" })
    );

    let r_above_order = Signature::new(n + 5u32, good.s);
    assert_eq!(
        recover_public_key_index(&r_above_order, &z, &[]),
        Err(EcdsaError::MalformedSignature { component: "r" })
    );
}

#[test]
fn test_verify_with_identity_key_is_false() {
    let pk = VerifyingKey::from_point(WeierstrassPoint::INFINITY);
    assert_eq!(pk.verify(&ScalarField::ZERO, &fixture_signature()), Ok(false));
}

#[test]
fn test_recover_public_key_index() {
    let keys = candidates(&CANDIDATES);
    let index = recover_public_key_index(&fixture_signature(), &ScalarField::ZERO, &keys);
    assert_eq!(index, Ok(2));
    assert_eq!(keys[2], signer_key());
}

#[test]
fn test_recover_signer_not_in_list() {
    let keys = candidates(&[CANDIDATES[0], CANDIDATES[1], CANDIDATES[3], CANDIDATES[3]]);
    assert_eq!(
        recover_public_key_index(&fixture_signature(), &ScalarField::ZERO, &keys),
        Err(EcdsaError::KeyNotFound)
    );
}

#[test]
fn test_recover_altered_signature_not_found() {
    let keys = candidates(&CANDIDATES);
    let sig = Signature::from_hex(
        "00EF7145470CEC0B683C629CBA8ED58110000FFE657366F7D5A91F2D149DD8B4",
        "0370C60A23266F520C56DA088B4C4AFAAAF6BB1993A501980F6D8FB6F343984A",
    )
    .expect("hex");
    assert_eq!(
        recover_public_key_index(&sig, &ScalarField::ZERO, &keys),
        Err(EcdsaError::KeyNotFound)
    );
}

#[test]
fn test_published_candidates_off_curve_do_not_verify() {
    let sig = fixture_signature();
    for index in [0, 1, 3] {
        assert!(matches!(
            VerifyingKey::from_hex(CANDIDATES[index]),
            Err(EcdsaError::Curve(curve::CurveError::InvalidEncoding(_)))
        ));

        let key = VerifyingKey::from_hex_unchecked(CANDIDATES[index]).expect("public key");
        assert!(!key.as_point().is_on_curve());
        assert_eq!(key.verify(&ScalarField::ZERO, &sig), Ok(false));
    }

    let off_curve = candidates(&[CANDIDATES[0], CANDIDATES[1], CANDIDATES[3]]);
    assert_eq!(
        recover_public_key_index_par(&sig, &ScalarField::ZERO, &off_curve),
        Err(EcdsaError::KeyNotFound)
    );
}

#[test]
fn test_parallel_recovery_on_published_keys() {
    let keys = candidates(&CANDIDATES);
    assert_eq!(
        recover_public_key_index_par(&fixture_signature(), &ScalarField::ZERO, &keys),
        Ok(2)
    );
}

#[test]
fn test_verify_off_curve_key_still_checks_signature_range() {
    let key = VerifyingKey::from_hex_unchecked(CANDIDATES[1]).expect("public key");
    let sig = Signature::new(BigUint::from(0u8), fixture_signature().s);
    assert_eq!(
        key.verify(&ScalarField::ZERO, &sig),
        Err(EcdsaError::MalformedSignature { component: "r" })
    );
}

#[test]
fn test_recover_empty_list() {
    assert_eq!(
        recover_public_key_index(&fixture_signature(), &ScalarField::ZERO, &[]),
        Err(EcdsaError::KeyNotFound)
    );
}

#[test]
fn test_recover_duplicates_report_lowest_index() {
    let keys = candidates(&[CANDIDATES[0], CANDIDATES[2], CANDIDATES[1], CANDIDATES[2]]);
    let sig = fixture_signature();
    assert_eq!(
        recover_public_key_index(&sig, &ScalarField::ZERO, &keys),
        Ok(1)
    );
    assert_eq!(
        recover_public_key_index_par(&sig, &ScalarField::ZERO, &keys),
        Ok(1)
    );
}

#[test]
fn test_parallel_recovery_matches_sequential() {
    let mut rng = StdRng::seed_from_u64(3);
    let keys: Vec<SigningKey> = (0..16).map(|_| SigningKey::random(&mut rng)).collect();
    let pks: Vec<VerifyingKey> = keys.iter().map(SigningKey::verifying_key).collect();
    let msg_hash = ScalarField::from_u64(2024);

    for signer in [0usize, 7, 15] {
        let sig = keys[signer].sign(&mut rng, &msg_hash).expect("sign");
        assert_eq!(
            recover_public_key_index_par(&sig, &msg_hash, &pks),
            recover_public_key_index(&sig, &msg_hash, &pks)
        );
        assert_eq!(
            recover_public_key_index_par(&sig, &msg_hash, &pks),
            Ok(signer)
        );
    }
}

#[test]
fn test_public_key_hex_roundtrip() {
    let pk = signer_key();
    let hex = pk.to_hex().expect("encode");
    assert_eq!(hex.len(), PK_HEX_LEN);
    assert_eq!(hex, CANDIDATES[2]);
    assert_eq!(VerifyingKey::from_hex(&hex), Ok(pk));
}

#[test]
fn test_signature_hex_roundtrip() {
    let sig = fixture_signature();
    let (r, s) = sig.to_hex();
    assert_eq!(r.len(), 2 * SIG_COMPONENT_SIZE);
    assert_eq!(
        r,
        "00ef7145470cec0b683c629cba8ed58110000ffe657366f7d5a91f2d149dd8b5"
    );
    assert_eq!(Signature::from_hex(&r, &s), Ok(sig));
}

#[test]
fn test_signing_key_bytes() {
    let sk = SigningKey::from_hex(SIGNER_SK).expect("sk");
    let bytes = sk.to_bytes();
    assert_eq!(bytes.len(), SK_SIZE);
    assert_eq!(hex::encode(bytes), SIGNER_SK);
}

#[test]
fn test_bincode_roundtrip() {
    let mut rng = StdRng::seed_from_u64(42);
    let sk = SigningKey::random(&mut rng);
    let vk = VerifyingKey::from(&sk);
    let msg_hash = ScalarField::from_u64(9);
    let sig = sk.sign(&mut rng, &msg_hash).expect("sign");

    let sk2: SigningKey = bincode::deserialize(&bincode::serialize(&sk).expect("ser"))
        .expect("deserialize sk");
    let vk2: VerifyingKey = bincode::deserialize(&bincode::serialize(&vk).expect("ser"))
        .expect("deserialize vk");
    let sig2: Signature = bincode::deserialize(&bincode::serialize(&sig).expect("ser"))
        .expect("deserialize sig");

    assert_eq!(sk2, sk);
    assert_eq!(vk2, vk);
    assert!(vk2.verify(&msg_hash, &sig2).expect("verify"));
}
