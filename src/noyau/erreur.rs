// src/noyau/erreur.rs

use thiserror::Error;

/// Erreurs du noyau.
///
/// Le collaborateur externe les affiche toutes pareil (`[error]`), mais le
/// noyau les distingue pour que les tests puissent viser la bonne cause.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    /// Littéral sans chiffre (ex: "-" seul) ou avec autre chose que des chiffres.
    #[error("nombre mal formé : {0:?}")]
    MalformedNumber(String),

    /// Caractère hors alphabet (position = octet dans l’entrée sans espaces de bord).
    #[error("caractère inattendu : '{caractere}' (position {position})")]
    UnexpectedCharacter { caractere: char, position: usize },

    #[error("parenthèses non équilibrées")]
    UnbalancedParens,

    /// Piles incohérentes : opérande manquante, opérandes en trop, entrée vide.
    #[error("expression mal formée")]
    MalformedExpression,

    #[error("division par zéro")]
    DivisionByZero,
}
