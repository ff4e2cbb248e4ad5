use curve25519_signal::{
    Config, Curve25519, Error, KeyKind, LowOrderPolicy, PrivateKey, PublicKey, calculate_agreement,
    get_public_from_private_key,
};

const ALICE_PRIVATE: &str = "77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a";
const ALICE_PUBLIC: &str = "8520f0098930a754748b7ddcb43ef75a0dbf3a0d26381af4eba4a98eaa9b4e6a";
const BOB_PRIVATE: &str = "5dab087e624a8a4b79e17f8b83800ee66f3bb1292618b6fd1c2f8b27ff88e0eb";
const BOB_PUBLIC: &str = "de9edb7d7b7dc1b4d35b61c2ece435373f8343c85b78674dadfc7e146f882b4f";
const SHARED: &str = "4a5d9d5ba4ce2de1728e3bf480350f25e07e21c947d19e3376f09b3c1e161742";

fn tagged(u: &[u8]) -> Vec<u8> {
    let mut out = vec![0x05];
    out.extend_from_slice(u);
    out
}

#[test]
fn test_x25519_rfc7748_public_keys() {
    let alice = get_public_from_private_key(&hex::decode(ALICE_PRIVATE).unwrap()).unwrap();
    let bob = get_public_from_private_key(&hex::decode(BOB_PRIVATE).unwrap()).unwrap();

    assert_eq!(hex::encode(alice.u_coordinate()), ALICE_PUBLIC);
    assert_eq!(hex::encode(bob.u_coordinate()), BOB_PUBLIC);
}

#[test]
fn test_x25519_rfc7748_agreement() {
    let alice_private = hex::decode(ALICE_PRIVATE).unwrap();
    let bob_private = hex::decode(BOB_PRIVATE).unwrap();
    let alice_public = tagged(&hex::decode(ALICE_PUBLIC).unwrap());
    let bob_public = tagged(&hex::decode(BOB_PUBLIC).unwrap());

    let alice_shared = calculate_agreement(&bob_public, &alice_private).unwrap();
    let bob_shared = calculate_agreement(&alice_public, &bob_private).unwrap();

    assert_eq!(hex::encode(alice_shared.as_bytes()), SHARED);
    assert_eq!(alice_shared, bob_shared);
}

#[test]
fn test_x25519_key_exchange() {
    let engine = Curve25519::default();
    let alice = engine.generate_key_pair().unwrap();
    let bob = engine.generate_key_pair().unwrap();

    let alice_shared = engine
        .calculate_agreement(&bob.public_key.serialize(), alice.private_key.as_bytes())
        .unwrap();
    let bob_shared = engine
        .calculate_agreement(&alice.public_key.serialize(), bob.private_key.as_bytes())
        .unwrap();

    assert_eq!(alice_shared, bob_shared);
}

#[test]
fn test_x25519_rejects_malformed_inputs() {
    let private_key = PrivateKey::from_random_bytes([3u8; 32]);
    let public_key = private_key.public_key().serialize();

    assert!(matches!(
        calculate_agreement(&public_key[1..], private_key.as_bytes()),
        Err(Error::InvalidLength {
            what: KeyKind::PublicKey,
            expected: 33,
            actual: 32
        })
    ));

    let mut wrong_tag = public_key;
    wrong_tag[0] = 0x04;
    assert!(matches!(
        calculate_agreement(&wrong_tag, private_key.as_bytes()),
        Err(Error::InvalidFormat { found: 0x04 })
    ));

    assert!(matches!(
        calculate_agreement(&public_key, &[0u8; 31]),
        Err(Error::InvalidLength {
            what: KeyKind::PrivateKey,
            expected: 32,
            actual: 31
        })
    ));
}

#[test]
fn test_x25519_low_order_policy() {
    let private_key = PrivateKey::from_random_bytes([9u8; 32]);
    // u = 0 has order 2 and u = 1 has order 4.
    for u in [0u8, 1] {
        let mut coordinate = [0u8; 32];
        coordinate[0] = u;
        let low_order = PublicKey::from_u_coordinate(coordinate).serialize();

        let shared = calculate_agreement(&low_order, private_key.as_bytes()).unwrap();
        assert_eq!(shared.as_bytes(), &[0u8; 32]);

        let strict =
            Curve25519::new(Config::default().with_low_order_policy(LowOrderPolicy::Reject));
        assert!(matches!(
            strict.calculate_agreement(&low_order, private_key.as_bytes()),
            Err(Error::LowOrderPoint)
        ));
    }
}
