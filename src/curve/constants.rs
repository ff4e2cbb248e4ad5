//! Curve constants in the 51-bit limb representation.
//!
//! All values are residues modulo `p = 2²⁵⁵ − 19`.

use crate::arithmetic::field::FieldElement;

use super::edwards::EdwardsPoint;

/// Montgomery `a24 = (486662 − 2) / 4` used by the ladder.
pub(crate) const A24: u32 = 121_665;

/// The Curve25519 base point, `u = 9`.
pub(crate) const X25519_BASEPOINT: [u8; 32] = [
    9, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
];

/// Edwards curve constant `d = −121665 / 121666`.
pub(crate) const EDWARDS_D: FieldElement = FieldElement([
    0x0003_4dca_1359_78a3,
    0x0001_a828_3b15_6ebd,
    0x0005_e7a2_6001_c029,
    0x0007_39c6_63a0_3cbb,
    0x0005_2036_cee2_b6ff,
]);

/// `2·d`, used by the unified addition formula.
pub(crate) const EDWARDS_D2: FieldElement = FieldElement([
    0x0006_9b94_26b2_f159,
    0x0003_5050_762a_dd7a,
    0x0003_cf44_c003_8052,
    0x0006_738c_c740_7977,
    0x0002_406d_9dc5_6dff,
]);

/// The Ed25519 base point `B = (x, 4/5)` with `x` even, in extended
/// coordinates with `Z = 1`.
pub(crate) const ED25519_BASEPOINT: EdwardsPoint = EdwardsPoint {
    x: FieldElement([
        0x0006_2d60_8f25_d51a,
        0x0004_12a4_b4f6_592a,
        0x0007_5b71_71a4_b31d,
        0x0001_ff60_5271_18fe,
        0x0002_1693_6d3c_d6e5,
    ]),
    y: FieldElement([
        0x0006_6666_6666_6658,
        0x0004_cccc_cccc_cccc,
        0x0001_9999_9999_9999,
        0x0003_3333_3333_3333,
        0x0006_6666_6666_6666,
    ]),
    z: FieldElement::ONE,
    t: FieldElement([
        0x0006_8ab3_a5b7_dda3,
        0x0000_0eea_2a5e_adbb,
        0x0002_af8d_f483_c27e,
        0x0003_32b3_7527_4732,
        0x0006_7875_f0fd_78b7,
    ]),
};
