use curve25519_signal::{
    Config, Curve25519, Error, KeyKind, PrivateKey, PublicKeyFormat, calculate_signature,
    verify_signature,
};
use sha2::{Digest, Sha256, Sha512};

fn private_key_from_label(label: u8) -> PrivateKey {
    let digest: [u8; 32] = Sha256::digest([label]).into();
    PrivateKey::from_random_bytes(digest)
}

#[test]
fn test_xeddsa_sign_and_verify() {
    let private_key = private_key_from_label(0);
    let public_key = private_key.public_key().serialize();

    let signature = calculate_signature(private_key.as_bytes(), b"hello world").unwrap();

    assert_eq!(
        hex::encode(signature.as_bytes()),
        "7481a3d9f52d50253ed7be237ef93b31c28896f7dc195fd8cb0c098d70434774\
         810bbeb1322a2ef955082ca5d5e2d9c2c7ae7671ab4c59cdc9a64f3178245a08"
    );
    assert!(verify_signature(&public_key, b"hello world", signature.as_bytes()).unwrap());
}

#[test]
fn test_xeddsa_signing_is_deterministic() {
    let private_key = private_key_from_label(1);

    let first = calculate_signature(private_key.as_bytes(), b"message").unwrap();
    let second = calculate_signature(private_key.as_bytes(), b"message").unwrap();
    let other = calculate_signature(private_key.as_bytes(), b"messages").unwrap();

    assert_eq!(first, second);
    assert_ne!(first, other);
}

#[test]
fn test_xeddsa_rejects_wrong_message_key_or_signature() {
    let private_key = private_key_from_label(2);
    let public_key = private_key.public_key().serialize();
    let stranger = private_key_from_label(3).public_key().serialize();

    let signature = calculate_signature(private_key.as_bytes(), b"message").unwrap();

    assert!(!verify_signature(&public_key, b"massage", signature.as_bytes()).unwrap());
    assert!(!verify_signature(&stranger, b"message", signature.as_bytes()).unwrap());

    let mut tampered = signature.to_bytes();
    tampered[10] ^= 0x40;
    assert!(!verify_signature(&public_key, b"message", &tampered).unwrap());

    let mut tampered = signature.to_bytes();
    tampered[40] ^= 0x01;
    assert!(!verify_signature(&public_key, b"message", &tampered).unwrap());
}

#[test]
fn test_xeddsa_empty_and_long_messages() {
    let private_key = private_key_from_label(4);
    let public_key = private_key.public_key().serialize();
    let long = vec![0x5a; 10_000];

    for message in [&b""[..], &long[..]] {
        let signature = calculate_signature(private_key.as_bytes(), message).unwrap();
        assert!(verify_signature(&public_key, message, signature.as_bytes()).unwrap());
    }
}

#[test]
fn test_xeddsa_input_lengths() {
    let private_key = private_key_from_label(5);
    let public_key = private_key.public_key().serialize();
    let signature = calculate_signature(private_key.as_bytes(), b"message").unwrap();

    assert!(matches!(
        calculate_signature(&[0u8; 33], b"message"),
        Err(Error::InvalidLength {
            what: KeyKind::PrivateKey,
            ..
        })
    ));
    assert!(matches!(
        verify_signature(&public_key, b"message", &signature.as_bytes()[..63]),
        Err(Error::InvalidLength {
            what: KeyKind::Signature,
            expected: 64,
            actual: 63
        })
    ));
    assert!(matches!(
        verify_signature(&public_key[1..], b"message", signature.as_bytes()),
        Err(Error::InvalidLength {
            what: KeyKind::PublicKey,
            ..
        })
    ));
}

#[test]
fn test_xeddsa_unprefixed_public_keys() {
    let private_key = private_key_from_label(6);
    let public_key = private_key.public_key();
    let signature = calculate_signature(private_key.as_bytes(), b"message").unwrap();

    let lenient =
        Curve25519::new(Config::default().with_public_key_format(PublicKeyFormat::AllowUnprefixed));

    assert!(
        lenient
            .verify_signature(public_key.u_coordinate(), b"message", signature.as_bytes())
            .unwrap()
    );
    assert!(
        lenient
            .verify_signature(&public_key.serialize(), b"message", signature.as_bytes())
            .unwrap()
    );
}

#[test]
fn test_xeddsa_explicit_digest() {
    let engine = Curve25519::default();
    let private_key = private_key_from_label(7);
    let public_key = private_key.public_key().serialize();

    let signature = engine
        .calculate_signature_with::<Sha512>(private_key.as_bytes(), b"message")
        .unwrap();

    assert_eq!(
        signature,
        engine
            .calculate_signature(private_key.as_bytes(), b"message")
            .unwrap()
    );
    assert!(
        engine
            .verify_signature_with::<Sha512>(&public_key, b"message", signature.as_bytes())
            .unwrap()
    );
}

#[test]
fn test_xeddsa_generated_key_pairs() {
    let a = curve25519_signal::generate_key_pair().unwrap();
    let b = curve25519_signal::generate_key_pair().unwrap();

    let signature = calculate_signature(a.private_key.as_bytes(), b"hello world").unwrap();

    assert!(
        verify_signature(&a.public_key.serialize(), b"hello world", signature.as_bytes()).unwrap()
    );
    assert!(
        !verify_signature(&b.public_key.serialize(), b"hello world", signature.as_bytes()).unwrap()
    );
}

#[test]
fn test_xeddsa_every_signature_bit_matters() {
    let private_key = private_key_from_label(8);
    let public_key = private_key.public_key().serialize();
    let signature = calculate_signature(private_key.as_bytes(), b"bits").unwrap();

    for bit in 0..512 {
        let mut tampered = signature.to_bytes();
        tampered[bit / 8] ^= 1 << (bit % 8);

        assert!(
            !verify_signature(&public_key, b"bits", &tampered).unwrap(),
            "bit {bit} was not checked"
        );
    }
}
