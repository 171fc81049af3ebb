use nebula_ecdsa::rng::Csprng;

use rand_core::RngCore;

#[test]
fn test_csprng_deterministic_from_seed() {
    let mut rng1 = Csprng::from_seed([0x42u8; 32]);
    let mut rng2 = Csprng::from_seed([0x42u8; 32]);

    let mut a = [0u8; 128];
    let mut b = [0u8; 128];

    rng1.fill_bytes(&mut a);
    rng2.fill_bytes(&mut b);

    assert_eq!(a, b);
}

#[test]
fn test_csprng_rekey_changes_output() {
    let mut rng = Csprng::from_seed([0xAAu8; 32]);

    let mut a = [0u8; 64];
    let mut b = [0u8; 64];

    rng.fill_bytes(&mut a);
    rng.fill_bytes(&mut b);

    assert_ne!(a, b);
}

#[test]
fn test_csprng_not_all_zero() {
    let mut rng = Csprng::from_seed([0u8; 32]);

    let mut out = [0u8; 64];
    rng.fill_bytes(&mut out);

    assert!(out.iter().any(|&b| b != 0));
}

#[test]
fn test_csprng_odd_lengths_are_filled() {
    let mut long = [0u8; 131];
    Csprng::from_seed([7u8; 32]).fill_bytes(&mut long);

    let mut short = [0u8; 128];
    Csprng::from_seed([7u8; 32]).fill_bytes(&mut short);

    assert_eq!(long[..128], short[..]);
}

#[test]
fn test_csprng_rngcore_interface() {
    let mut a = Csprng::from_seed([9u8; 32]);
    let mut b = Csprng::from_seed([9u8; 32]);

    assert_eq!(a.next_u64(), b.next_u64());
    assert_eq!(a.next_u32(), b.next_u32());

    let mut buf = [0u8; 16];
    assert!(RngCore::try_fill_bytes(&mut a, &mut buf).is_ok());
}

#[test]
fn test_csprng_from_os_differs() {
    let mut a = Csprng::from_os();
    let mut b = Csprng::new();

    let mut x = [0u8; 32];
    let mut y = [0u8; 32];

    a.fill_bytes(&mut x);
    b.fill_bytes(&mut y);

    assert_ne!(x, y);
}
