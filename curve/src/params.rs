// Baby Jubjub over the BN254 scalar field
// p = 21888242871839275222246405745257275088548364400416034343698204186575808495617
// Twisted Edwards:   168700*x^2 + y^2 = 1 + 168696*x^2*y^2
// Montgomery:        v^2 = u^3 + 168698*u^2 + u
// Short Weierstrass: y^2 = x^3 + A*x + B, A = (3 - 168698^2)/3, B = (2*168698^3 - 9*168698)/27
// Subgroup order n (251 bits): 2736030358979909402780800718157159386076813972158567259200215660948447373041
// Cofactor: 8
// Generator: circomlib Base8, which generates the order-n subgroup

use ark_ff::MontFp;

use crate::BaseField;

pub const COFACTOR: u64 = 8;

/// Twisted Edwards coefficient `a`.
pub const EDWARDS_A: BaseField = MontFp!("168700");

/// Twisted Edwards coefficient `d`.
pub const EDWARDS_D: BaseField = MontFp!("168696");

/// Montgomery coefficient `A`; the Montgomery `B` is 1.
pub const MONTGOMERY_A: BaseField = MontFp!("168698");

/// `A / 3`, the x-shift between the Montgomery and Weierstrass forms.
pub const MONTGOMERY_A_OVER_3: BaseField =
    MontFp!("7296080957279758407415468581752425029516121466805344781232734728858602888105");

pub const WEIERSTRASS_A: BaseField =
    MontFp!("7296080957279758407415468581752425029516121466805344781232734728849116493472");

pub const WEIERSTRASS_B: BaseField =
    MontFp!("16213513238399463127589930181672055621146936592900766180517188641980520820846");

pub(crate) const GENERATOR_X: BaseField =
    MontFp!("14414009007687342025526645003307639786191886886413750648631138442071909631647");

pub(crate) const GENERATOR_Y: BaseField =
    MontFp!("14577268218881899420966779687690205425227431577728659819975198491127179315626");

pub(crate) const EDWARDS_GENERATOR_X: BaseField =
    MontFp!("5299619240641551281634865583518297030282874472190772894086521144482721001553");

pub(crate) const EDWARDS_GENERATOR_Y: BaseField =
    MontFp!("16950150798460657717958625567821834550301663161624707787222815936182638968203");
