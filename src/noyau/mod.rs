//! Noyau exact: entiers de taille arbitraire
//!
//! Organisation interne :
//! - entier.rs   : BigInteger (signe + limbs base 10^9) et arithmétique
//! - jetons.rs   : tokenisation paresseuse (moins de littéral selon le contexte)
//! - triage.rs   : shunting-yard à deux piles, repli immédiat
//! - eval.rs     : pipeline complet + démarche
//! - format.rs   : sortie texte, sentinelle d’erreur
//! - erreur.rs   : EvalError

pub mod entier;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod triage;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use entier::BigInteger;
pub use erreur::EvalError;
pub use eval::{eval_detaille, eval_expression, evaluate, parse_and_evaluate, DemarcheNoyau};
pub use format::{format, format_sortie, sortie_filtre, SENTINELLE_ERREUR};
