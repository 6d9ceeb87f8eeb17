//! Tests scientifiques (campagne) : propriétés algébriques + oracle.
//!
//! Oracle : num_bigint::BigInt. Sa division tronque vers zéro et son reste
//! prend le signe du dividende, exactement comme le noyau.
//! - entiers tirés de 1 à 60 chiffres (donc jusqu’à 7 limbs), signe aléatoire
//! - zéros de tête permis dans le texte tiré (le noyau doit les ignorer)

use num_bigint::BigInt;
use num_traits::{Signed, Zero};
use proptest::prelude::*;

use super::entier::{BigInteger, BASE};
use super::erreur::EvalError;
use super::eval::evaluate;

const NOMBRE: &str = "-?[0-9]{1,60}";

fn big(s: &str) -> BigInteger {
    BigInteger::from_decimal_string(s).unwrap_or_else(|e| panic!("{s:?}: {e}"))
}

/// Reconstruit la valeur depuis les limbs (indépendant du formatage du noyau).
fn vers_oracle(v: &BigInteger) -> BigInt {
    let base = BigInt::from(BASE);
    let mag = v
        .limbs()
        .iter()
        .rev()
        .fold(BigInt::zero(), |acc, &l| acc * &base + BigInt::from(l));
    if v.is_negative() {
        -mag
    } else {
        mag
    }
}

fn oracle(s: &str) -> BigInt {
    s.parse::<BigInt>()
        .unwrap_or_else(|e| panic!("oracle {s:?}: {e}"))
}

fn op_oracle(op: char, a: &BigInt, b: &BigInt) -> Option<BigInt> {
    match op {
        '+' => Some(a + b),
        '-' => Some(a - b),
        '*' => Some(a * b),
        _ if b.is_zero() => None,
        _ => Some(a / b),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /* ------------------------ Représentation ------------------------ */

    #[test]
    fn sci_aller_retour_texte(s in NOMBRE) {
        let v = big(&s);
        prop_assert_eq!(BigInteger::from_decimal_string(&v.to_decimal_string()), Ok(v.clone()));
        prop_assert_eq!(v.to_decimal_string(), oracle(&s).to_string());
        prop_assert_eq!(vers_oracle(&v), oracle(&s));
    }

    #[test]
    fn sci_invariants_de_forme(s in NOMBRE) {
        let v = big(&s);
        let limbs = v.limbs();
        prop_assert!(!limbs.is_empty());
        prop_assert!(limbs.iter().all(|&l| l < BASE));
        if v.is_zero() {
            prop_assert_eq!(limbs, &[0u32][..]);
            prop_assert!(!v.is_negative());
        } else {
            prop_assert_ne!(limbs.last().copied(), Some(0));
        }
    }

    #[test]
    fn sci_from_int_oracle(i in any::<i64>()) {
        prop_assert_eq!(vers_oracle(&BigInteger::from_int(i)), BigInt::from(i));
        prop_assert_eq!(BigInteger::from_int(i).to_string(), i.to_string());
    }

    /* ------------------------ Arithmétique vs oracle ------------------------ */

    #[test]
    fn sci_add_sub_mul_oracle(a in NOMBRE, b in NOMBRE) {
        let (x, y) = (big(&a), big(&b));
        let (ox, oy) = (oracle(&a), oracle(&b));

        prop_assert_eq!(vers_oracle(&x.add(&y)), &ox + &oy);
        prop_assert_eq!(vers_oracle(&x.subtract(&y)), &ox - &oy);
        prop_assert_eq!(vers_oracle(&x.multiply(&y)), &ox * &oy);
    }

    #[test]
    fn sci_div_rem_oracle(a in NOMBRE, b in NOMBRE) {
        let (x, y) = (big(&a), big(&b));
        prop_assume!(!y.is_zero());
        let (ox, oy) = (oracle(&a), oracle(&b));

        let (q, r) = x.div_rem(&y).unwrap();
        prop_assert_eq!(vers_oracle(&q), &ox / &oy);
        prop_assert_eq!(vers_oracle(&r), &ox % &oy);

        // a = q*b + r, |r| < |b|
        prop_assert_eq!(q.multiply(&y).add(&r), x.clone());
        prop_assert!(r.compare_magnitude(&y) == std::cmp::Ordering::Less);
    }

    #[test]
    fn sci_division_par_zero(a in NOMBRE) {
        prop_assert_eq!(big(&a).divide(&BigInteger::zero()), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn sci_ordre_oracle(a in NOMBRE, b in NOMBRE) {
        let (x, y) = (big(&a), big(&b));
        let (ox, oy) = (oracle(&a), oracle(&b));
        prop_assert_eq!(x.cmp(&y), ox.cmp(&oy));
        prop_assert_eq!(x.less_than(&y), ox < oy);
        prop_assert_eq!(x.equals(&y), ox == oy);
        prop_assert_eq!(x.compare_magnitude(&y), ox.abs().cmp(&oy.abs()));
    }

    /* ------------------------ Propriétés algébriques ------------------------ */

    #[test]
    fn sci_identite_et_inverse_additifs(s in NOMBRE) {
        let v = big(&s);
        let zero = BigInteger::from_int(0);
        prop_assert_eq!(v.add(&zero), v.clone());
        prop_assert!(v.add(&zero.subtract(&v)).is_zero());
    }

    #[test]
    fn sci_commutativite(a in NOMBRE, b in NOMBRE) {
        let (x, y) = (big(&a), big(&b));
        prop_assert_eq!(x.add(&y), y.add(&x));
        prop_assert_eq!(x.multiply(&y), y.multiply(&x));
    }

    #[test]
    fn sci_division_defait_multiplication(a in NOMBRE, b in NOMBRE) {
        let (x, y) = (big(&a), big(&b));
        prop_assume!(!y.is_zero());
        prop_assert_eq!(x.multiply(&y).divide(&y), Ok(x));
    }

    #[test]
    fn sci_petit_sur_grand(a in "[0-9]{1,30}", b in "[1-9][0-9]{30,50}", negatifs in any::<bool>()) {
        let (a, b) = if negatifs { (format!("-{a}"), format!("-{b}")) } else { (a, b) };
        prop_assert!(big(&b).compare_magnitude(&big(&a)) == std::cmp::Ordering::Greater);
        prop_assert!(big(&a).divide(&big(&b)).unwrap().is_zero());
    }

    #[test]
    fn sci_operandes_non_modifies(a in NOMBRE, b in NOMBRE) {
        let (x, y) = (big(&a), big(&b));
        let (x0, y0) = (x.clone(), y.clone());
        let _ = (x.add(&y), x.subtract(&y), x.multiply(&y), x.div_rem(&y));
        prop_assert_eq!(x, x0);
        prop_assert_eq!(y, y0);
    }

    /* ------------------------ Pipeline texte -> valeur ------------------------ */

    #[test]
    fn sci_pipeline_binaire(
        a in NOMBRE,
        b in NOMBRE,
        op in prop::sample::select(vec!['+', '-', '*', '/']),
        parentheses in any::<bool>(),
    ) {
        let texte = if parentheses {
            format!("({a}){op}({b})")
        } else {
            format!("{a}{op}{b}")
        };

        match op_oracle(op, &oracle(&a), &oracle(&b)) {
            Some(attendu) => prop_assert_eq!(evaluate(&texte).map(|v| vers_oracle(&v)), Ok(attendu)),
            None => prop_assert_eq!(evaluate(&texte), Err(EvalError::DivisionByZero)),
        }
    }

    #[test]
    fn sci_pipeline_precedence(a in NOMBRE, b in NOMBRE, c in NOMBRE) {
        let (oa, ob, oc) = (oracle(&a), oracle(&b), oracle(&c));

        // a - b * c  == a - (b*c)
        let r = evaluate(&format!("{a}-{b}*{c}")).map(|v| vers_oracle(&v));
        prop_assert_eq!(r, Ok(&oa - &ob * &oc));

        // a - b - c == (a-b)-c
        let r = evaluate(&format!("{a}-{b}-{c}")).map(|v| vers_oracle(&v));
        prop_assert_eq!(r, Ok(&oa - &ob - &oc));
    }
}

/* ------------------------ Cas limites fixes ------------------------ */

#[test]
fn sci_frontieres_de_limb() {
    let cas = [
        "999999999",
        "1000000000",
        "999999999999999999",
        "1000000000000000000",
        "-1000000000000000000000000000",
    ];
    for a in cas {
        for b in cas {
            let (x, y) = (big(a), big(b));
            let (ox, oy) = (oracle(a), oracle(b));
            assert_eq!(vers_oracle(&x.add(&y)), &ox + &oy, "{a} + {b}");
            assert_eq!(vers_oracle(&x.subtract(&y)), &ox - &oy, "{a} - {b}");
            assert_eq!(vers_oracle(&x.multiply(&y)), &ox * &oy, "{a} * {b}");
            assert_eq!(vers_oracle(&x.divide(&y).unwrap()), &ox / &oy, "{a} / {b}");
        }
    }
}

#[test]
fn sci_division_chiffre_de_quotient_maximal() {
    // chaque limb du quotient vaut 999999999 : la dichotomie doit atteindre le haut de l’intervalle
    let a = big(&"9".repeat(45));
    let b = big("1");
    assert_eq!(a.divide(&b).unwrap(), a);

    let a = big(&format!("{}0", "9".repeat(36)));
    let b = big("10");
    assert_eq!(a.divide(&b).unwrap().to_string(), "9".repeat(36));
}

#[test]
fn sci_factorielle_exacte() {
    // 50! par multiplications successives, comparée à l’oracle
    let mut v = BigInteger::from_int(1);
    let mut o = BigInt::from(1);
    for k in 1..=50i64 {
        v = v.multiply(&BigInteger::from_int(k));
        o *= k;
    }
    assert_eq!(vers_oracle(&v), o);
    assert_eq!(
        v.to_string(),
        "30414093201713378043612608166064768844377641568960512000000000000"
    );

    // et on redescend jusqu’à 1
    for k in (1..=50i64).rev() {
        v = v.divide(&BigInteger::from_int(k)).unwrap();
    }
    assert_eq!(v, BigInteger::from_int(1));
}
