//! Noyau: évaluation (pipeline réel)
//!
//! texte -> jetons (paresseux) -> triage à deux piles -> BigInteger
//!
//! Pas de résultat partiel : soit une valeur complète, soit une erreur.

use super::entier::BigInteger;
use super::erreur::EvalError;
use super::format::format;
use super::jetons::{format_tokens, Jetons};
use super::triage::Evaluateur;

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub reductions: Vec<String>,
    pub note: String,
}

/// API publique : évalue une expression entière.
pub fn evaluate(texte: &str) -> Result<BigInteger, EvalError> {
    let s = texte.trim();

    let mut ev = Evaluateur::new();
    let resultat = Jetons::new(s)
        .try_for_each(|tok| ev.pousser(tok?))
        .and_then(|()| ev.terminer());

    match &resultat {
        Ok(v) => log::debug!("évaluation ok : {} limb(s)", v.limbs().len()),
        Err(e) => log::debug!("évaluation refusée : {e}"),
    }
    resultat
}

/// Point d’entrée des collaborateurs externes (filtre stdin, UI) : même contrat que `evaluate`.
pub fn parse_and_evaluate(texte: &str) -> Result<BigInteger, EvalError> {
    evaluate(texte)
}

/// Évalue puis formate (texte décimal, '-' en tête si négatif).
pub fn eval_expression(texte: &str) -> Result<String, EvalError> {
    evaluate(texte).map(|v| format(&v))
}

/// Comme `evaluate`, avec la démarche (jetons + replis) pour l’affichage.
pub fn eval_detaille(texte: &str) -> Result<(BigInteger, DemarcheNoyau), EvalError> {
    let s = texte.trim();

    // même ordre de lecture que `evaluate` : la première erreur rencontrée gagne
    let mut lus = Vec::new();
    let mut ev = Evaluateur::avec_journal();
    for tok in Jetons::new(s) {
        let tok = tok?;
        lus.push(tok.clone());
        ev.pousser(tok)?;
    }
    let (v, reductions) = ev.terminer_avec_journal()?;

    let d = DemarcheNoyau {
        jetons: format_tokens(&lus),
        reductions,
        note: "Pipeline: jetons → pile d’opérateurs + pile d’opérandes → repli → entier exact.".into(),
    };

    Ok((v, d))
}
