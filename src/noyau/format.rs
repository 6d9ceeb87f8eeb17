// src/noyau/format.rs
//
// Sortie texte pour les collaborateurs (filtre stdin, UI).
// Toute erreur du noyau devient la même sentinelle.

use super::entier::BigInteger;
use super::erreur::EvalError;
use super::eval::parse_and_evaluate;

/// Ce qu’on affiche à la place d’un résultat quand l’évaluation échoue.
pub const SENTINELLE_ERREUR: &str = "[error]";

/// Texte décimal exact, '-' en tête si négatif (jamais "-0").
pub fn format(v: &BigInteger) -> String {
    v.to_decimal_string()
}

pub fn format_sortie(r: &Result<BigInteger, EvalError>) -> String {
    match r {
        Ok(v) => format(v),
        Err(_) => SENTINELLE_ERREUR.to_string(),
    }
}

/// Mode filtre : toute l’entrée = une expression.
/// Résultat suivi d’un saut de ligne, ou `[error]` seul (sans saut de ligne).
pub fn sortie_filtre(entree: &str) -> String {
    match parse_and_evaluate(entree) {
        Ok(v) => format!("{}\n", format(&v)),
        Err(e) => {
            log::info!("entrée refusée : {e}");
            SENTINELLE_ERREUR.to_string()
        }
    }
}

/// Nombre de chiffres décimaux (signe exclu).
pub fn nb_chiffres(v: &BigInteger) -> usize {
    let limbs = v.limbs();
    let tete = limbs.last().copied().unwrap_or(0);
    let chiffres_tete = tete.checked_ilog10().map_or(1, |l| l as usize + 1);
    chiffres_tete + limbs.len().saturating_sub(1) * super::entier::CHIFFRES_PAR_LIMB
}
