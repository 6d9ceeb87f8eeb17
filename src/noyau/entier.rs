// src/noyau/entier.rs
//
// Grand entier signé exact, écrit à la main (pas de num-bigint dans le noyau).
// - signe + limbs en base 10^9, limb de poids faible en tête
// - au moins un limb ; aucun limb de tête nul, sauf pour zéro (= [0])
// - zéro n’est jamais négatif
// - valeurs immuables : chaque opération rend un nouvel entier
//
// Les primitives travaillent sur des tranches de magnitude (&[u32]) ;
// le signe est décidé une seule fois, à la construction du résultat.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use super::erreur::EvalError;

/// Base d’un limb.
pub const BASE: u32 = 1_000_000_000;

/// Chiffres décimaux par limb (10^9 => 9).
pub const CHIFFRES_PAR_LIMB: usize = 9;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BigInteger {
    negatif: bool,
    limbs: Vec<u32>,
}

impl BigInteger {
    pub fn zero() -> Self {
        Self {
            negatif: false,
            limbs: vec![0],
        }
    }

    /// Construction normalisée : coupe les limbs de tête nuls, zéro => positif.
    fn from_parts(negatif: bool, mut limbs: Vec<u32>) -> Self {
        trim(&mut limbs);
        let negatif = negatif && !is_zero_mag(&limbs);
        Self { negatif, limbs }
    }

    /// `-?[0-9]+` ; découpe la suite de chiffres en limbs depuis la fin.
    /// "0", "-0", "000" => zéro positif.
    pub fn from_decimal_string(s: &str) -> Result<Self, EvalError> {
        let (negatif, chiffres) = match s.strip_prefix('-') {
            Some(reste) => (true, reste),
            None => (false, s),
        };

        if chiffres.is_empty() || !chiffres.bytes().all(|b| b.is_ascii_digit()) {
            return Err(EvalError::MalformedNumber(s.to_string()));
        }

        let limbs = chiffres
            .as_bytes()
            .rchunks(CHIFFRES_PAR_LIMB)
            .map(|bloc| {
                bloc.iter()
                    .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'))
            })
            .collect();

        Ok(Self::from_parts(negatif, limbs))
    }

    pub fn from_int(i: i64) -> Self {
        let base = u64::from(BASE);
        let mut reste = i.unsigned_abs();
        let mut limbs = Vec::with_capacity(3);
        loop {
            limbs.push((reste % base) as u32);
            reste /= base;
            if reste == 0 {
                break;
            }
        }
        Self::from_parts(i < 0, limbs)
    }

    pub fn is_zero(&self) -> bool {
        is_zero_mag(&self.limbs)
    }

    pub fn is_negative(&self) -> bool {
        self.negatif
    }

    /// Limbs de la magnitude (poids faible en tête).
    pub fn limbs(&self) -> &[u32] {
        &self.limbs
    }

    pub fn abs(&self) -> Self {
        Self {
            negatif: false,
            limbs: self.limbs.clone(),
        }
    }

    /* ------------------------ Arithmétique ------------------------ */

    pub fn add(&self, other: &Self) -> Self {
        combine(self.negatif, &self.limbs, other.negatif, &other.limbs)
    }

    /// a - b = a + (-b) : on retourne le signe de b à l’appel, sans toucher b.
    pub fn subtract(&self, other: &Self) -> Self {
        combine(self.negatif, &self.limbs, !other.negatif, &other.limbs)
    }

    pub fn multiply(&self, other: &Self) -> Self {
        Self::from_parts(
            self.negatif != other.negatif,
            mul_magnitudes(&self.limbs, &other.limbs),
        )
    }

    /// Quotient tronqué vers zéro ; le reste est jeté.
    pub fn divide(&self, other: &Self) -> Result<Self, EvalError> {
        self.div_rem(other).map(|(q, _)| q)
    }

    /// (quotient, reste) avec a = q*b + r, |r| < |b|, r du signe de a.
    pub fn div_rem(&self, other: &Self) -> Result<(Self, Self), EvalError> {
        if other.is_zero() {
            return Err(EvalError::DivisionByZero);
        }

        if cmp_magnitudes(&self.limbs, &other.limbs) == Ordering::Less {
            return Ok((Self::zero(), self.clone()));
        }

        let (q, r) = divmod_magnitudes(&self.limbs, &other.limbs);
        Ok((
            Self::from_parts(self.negatif != other.negatif, q),
            Self::from_parts(self.negatif, r),
        ))
    }

    /* ------------------------ Comparaisons ------------------------ */

    /// Compare |a| et |b| (signe ignoré).
    pub fn compare_magnitude(&self, other: &Self) -> Ordering {
        cmp_magnitudes(&self.limbs, &other.limbs)
    }

    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }

    pub fn less_than(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Less
    }

    pub fn to_decimal_string(&self) -> String {
        self.to_string()
    }
}

/* ------------------------ Traits std ------------------------ */

impl Default for BigInteger {
    fn default() -> Self {
        Self::zero()
    }
}

impl FromStr for BigInteger {
    type Err = EvalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal_string(s)
    }
}

impl From<i64> for BigInteger {
    fn from(i: i64) -> Self {
        Self::from_int(i)
    }
}

/// Limb de tête sans zéros, les suivants sur 9 chiffres.
impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negatif {
            f.write_str("-")?;
        }
        let mut limbs = self.limbs.iter().rev();
        if let Some(tete) = limbs.next() {
            write!(f, "{tete}")?;
        }
        for limb in limbs {
            write!(f, "{limb:09}")?;
        }
        Ok(())
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negatif, other.negatif) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => cmp_magnitudes(&self.limbs, &other.limbs),
            (true, true) => cmp_magnitudes(&other.limbs, &self.limbs),
        }
    }
}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;

    fn neg(self) -> BigInteger {
        BigInteger::from_parts(!self.negatif, self.limbs.clone())
    }
}

impl Neg for BigInteger {
    type Output = BigInteger;

    fn neg(self) -> BigInteger {
        BigInteger::from_parts(!self.negatif, self.limbs)
    }
}

impl Add for &BigInteger {
    type Output = BigInteger;

    fn add(self, rhs: &BigInteger) -> BigInteger {
        BigInteger::add(self, rhs)
    }
}

impl Sub for &BigInteger {
    type Output = BigInteger;

    fn sub(self, rhs: &BigInteger) -> BigInteger {
        BigInteger::subtract(self, rhs)
    }
}

impl Mul for &BigInteger {
    type Output = BigInteger;

    fn mul(self, rhs: &BigInteger) -> BigInteger {
        BigInteger::multiply(self, rhs)
    }
}

/* ------------------------ Magnitudes (tranches de limbs) ------------------------ */

fn trim(limbs: &mut Vec<u32>) {
    while limbs.len() > 1 && limbs.last() == Some(&0) {
        limbs.pop();
    }
    if limbs.is_empty() {
        limbs.push(0);
    }
}

fn is_zero_mag(a: &[u32]) -> bool {
    a.iter().all(|&l| l == 0)
}

/// Suppose a et b normalisés (pas de limb de tête nul).
fn cmp_magnitudes(a: &[u32], b: &[u32]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

/// Addition signée ramenée à une seule addition ou une seule soustraction de magnitudes.
/// - même signe : |a| + |b|, signe commun
/// - signes opposés : la plus grande magnitude moins la plus petite, signe de la plus grande
fn combine(neg_a: bool, a: &[u32], neg_b: bool, b: &[u32]) -> BigInteger {
    if neg_a == neg_b {
        return BigInteger::from_parts(neg_a, add_magnitudes(a, b));
    }

    match cmp_magnitudes(a, b) {
        Ordering::Less => BigInteger::from_parts(neg_b, sub_magnitudes(b, a)),
        _ => BigInteger::from_parts(neg_a, sub_magnitudes(a, b)),
    }
}

fn add_magnitudes(a: &[u32], b: &[u32]) -> Vec<u32> {
    let (long, court) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let mut out = Vec::with_capacity(long.len() + 1);
    let mut retenue = 0u32;

    for (i, &x) in long.iter().enumerate() {
        // max: 2*(10^9 - 1) + 1 < 2^32
        let somme = x + court.get(i).copied().unwrap_or(0) + retenue;
        if somme >= BASE {
            out.push(somme - BASE);
            retenue = 1;
        } else {
            out.push(somme);
            retenue = 0;
        }
    }

    if retenue > 0 {
        out.push(retenue);
    }
    out
}

/// |a| - |b|, exige |a| >= |b|.
fn sub_magnitudes(a: &[u32], b: &[u32]) -> Vec<u32> {
    debug_assert!(cmp_magnitudes(a, b) != Ordering::Less);

    let mut out = Vec::with_capacity(a.len());
    let mut emprunt = 0u32;

    for (i, &x) in a.iter().enumerate() {
        let y = b.get(i).copied().unwrap_or(0) + emprunt;
        if x >= y {
            out.push(x - y);
            emprunt = 0;
        } else {
            out.push(x + BASE - y);
            emprunt = 1;
        }
    }

    trim(&mut out);
    out
}

/// Multiplication scolaire ; accumulation u64 par position.
fn mul_magnitudes(a: &[u32], b: &[u32]) -> Vec<u32> {
    if is_zero_mag(a) || is_zero_mag(b) {
        return vec![0];
    }

    let base = u64::from(BASE);
    let mut out = vec![0u32; a.len() + b.len()];

    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }

        let mut retenue = 0u64;
        for (j, &y) in b.iter().enumerate() {
            // max: (10^9-1) + (10^9-1)^2 + 10^9 < 2^64
            let cur = u64::from(out[i + j]) + u64::from(x) * u64::from(y) + retenue;
            out[i + j] = (cur % base) as u32;
            retenue = cur / base;
        }

        let mut k = i + b.len();
        while retenue > 0 {
            let cur = u64::from(out[k]) + retenue;
            out[k] = (cur % base) as u32;
            retenue = cur / base;
            k += 1;
        }
    }

    trim(&mut out);
    out
}

/// |a| * m pour un seul limb m.
fn mul_small(a: &[u32], m: u32) -> Vec<u32> {
    let base = u64::from(BASE);
    let mut out = Vec::with_capacity(a.len() + 1);
    let mut retenue = 0u64;

    for &x in a {
        let cur = u64::from(x) * u64::from(m) + retenue;
        out.push((cur % base) as u32);
        retenue = cur / base;
    }
    if retenue > 0 {
        out.push(retenue as u32);
    }

    trim(&mut out);
    out
}

/// Division longue limb par limb, du poids fort au poids faible.
/// Exige b != 0 et |a| >= |b|. Rend (quotient, reste) en magnitudes.
fn divmod_magnitudes(a: &[u32], b: &[u32]) -> (Vec<u32>, Vec<u32>) {
    let mut quotient = vec![0u32; a.len()];
    let mut courant: Vec<u32> = vec![0];

    for (pos, &limb) in a.iter().enumerate().rev() {
        // courant = courant * BASE + limb
        courant.insert(0, limb);
        trim(&mut courant);

        let x = plus_grand_multiple(b, &courant);
        if x > 0 {
            courant = sub_magnitudes(&courant, &mul_small(b, x));
        }
        quotient[pos] = x;
    }

    trim(&mut quotient);
    (quotient, courant)
}

/// Plus grand x dans [0, BASE) tel que diviseur * x <= courant (dichotomie).
/// Tient parce que courant < diviseur * BASE (le reste précédent est < diviseur).
fn plus_grand_multiple(diviseur: &[u32], courant: &[u32]) -> u32 {
    if cmp_magnitudes(diviseur, courant) == Ordering::Greater {
        return 0;
    }

    let (mut bas, mut haut) = (1u32, BASE - 1);
    while bas < haut {
        let milieu = bas + (haut - bas + 1) / 2;
        if cmp_magnitudes(&mul_small(diviseur, milieu), courant) == Ordering::Greater {
            haut = milieu - 1;
        } else {
            bas = milieu;
        }
    }
    bas
}
