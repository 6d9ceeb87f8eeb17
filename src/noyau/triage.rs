// src/noyau/triage.rs
//
// Shunting-yard à deux piles, sans passer par une RPN :
// - pile d’opérateurs (avec des marques '(' qui ne servent qu’à arrêter les dépilements)
// - pile d’opérandes (grands entiers)
// Chaque dépilement d’opérateur est “replié” tout de suite : b = pop, a = pop, push(a op b).
//
// Règles:
// - Num      : push opérande
// - Op(op)   : replie tant que sommet = opérateur de précédence >= op (associativité à gauche), puis push
// - '('      : push marque (avec la hauteur de la pile d’opérandes à l’ouverture)
// - ')'      : replie jusqu’à la marque, puis la retire (absente => parenthèses non équilibrées) ;
//              le groupe doit avoir laissé exactement une opérande de plus ("()" est refusé)
// - fin      : replie tout ; une marque restante => parenthèses non équilibrées ;
//              il doit rester exactement une opérande

use super::entier::BigInteger;
use super::erreur::EvalError;
use super::jetons::{Op, Tok};

/// Entrée de la pile d’opérateurs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Marque {
    Op(Op),
    // nombre d’opérandes empilées quand le '(' a été lu
    LPar(usize),
}

pub fn precedence(op: Op) -> u8 {
    match op {
        Op::Plus | Op::Minus => 1,
        Op::Star | Op::Slash => 2,
    }
}

/// Applique un opérateur binaire : a op b.
pub fn appliquer(op: Op, a: &BigInteger, b: &BigInteger) -> Result<BigInteger, EvalError> {
    match op {
        Op::Plus => Ok(a.add(b)),
        Op::Minus => Ok(a.subtract(b)),
        Op::Star => Ok(a.multiply(b)),
        Op::Slash => a.divide(b),
    }
}

#[derive(Debug, Default)]
pub struct Evaluateur {
    operateurs: Vec<Marque>,
    operandes: Vec<BigInteger>,

    // Démarche : une ligne "a op b = r" par repli (None => pas de journal)
    journal: Option<Vec<String>>,
}

impl Evaluateur {
    pub fn new() -> Self {
        Self::default()
    }

    /// Variante qui garde la trace de chaque repli.
    pub fn avec_journal() -> Self {
        Self {
            journal: Some(Vec::new()),
            ..Self::default()
        }
    }

    /// Consomme un jeton.
    pub fn pousser(&mut self, tok: Tok) -> Result<(), EvalError> {
        log::trace!(
            "jeton {tok} (opérateurs: {}, opérandes: {})",
            self.operateurs.len(),
            self.operandes.len()
        );

        match tok {
            Tok::Num(s) => {
                let v = BigInteger::from_decimal_string(&s)?;
                self.operandes.push(v);
            }

            Tok::Op(op) => {
                while let Some(Marque::Op(haut)) = self.operateurs.last() {
                    if precedence(*haut) < precedence(op) {
                        break;
                    }
                    self.replier()?;
                }
                self.operateurs.push(Marque::Op(op));
            }

            Tok::LPar => self.operateurs.push(Marque::LPar(self.operandes.len())),

            Tok::RPar => {
                while let Some(Marque::Op(_)) = self.operateurs.last() {
                    self.replier()?;
                }
                // sommet = '(' ou pile vide
                let Some(Marque::LPar(hauteur)) = self.operateurs.pop() else {
                    return Err(EvalError::UnbalancedParens);
                };
                if self.operandes.len() != hauteur + 1 {
                    return Err(EvalError::MalformedExpression);
                }
            }
        }

        Ok(())
    }

    /// Replie le sommet : pop op, pop b, pop a, push(a op b).
    fn replier(&mut self) -> Result<(), EvalError> {
        let op = match self.operateurs.pop() {
            Some(Marque::Op(op)) => op,
            // '(' ou rien : ne doit pas arriver avec les règles ci-dessus
            _ => return Err(EvalError::MalformedExpression),
        };

        let b = self.operandes.pop().ok_or(EvalError::MalformedExpression)?;
        let a = self.operandes.pop().ok_or(EvalError::MalformedExpression)?;

        let r = appliquer(op, &a, &b)?;

        log::debug!(
            "repli {op} : {} limb(s) {op} {} limb(s) => {} limb(s)",
            a.limbs().len(),
            b.limbs().len(),
            r.limbs().len()
        );
        if let Some(journal) = &mut self.journal {
            journal.push(format!("{a} {op} {b} = {r}"));
        }

        self.operandes.push(r);
        Ok(())
    }

    /// Fin d’entrée : replie tout ce qui reste et rend l’unique opérande.
    pub fn terminer(self) -> Result<BigInteger, EvalError> {
        self.terminer_avec_journal().map(|(v, _)| v)
    }

    /// Comme `terminer`, plus le journal des replis (vide si non demandé).
    pub fn terminer_avec_journal(mut self) -> Result<(BigInteger, Vec<String>), EvalError> {
        while let Some(marque) = self.operateurs.last() {
            if matches!(marque, Marque::LPar(_)) {
                return Err(EvalError::UnbalancedParens);
            }
            self.replier()?;
        }

        if self.operandes.len() != 1 {
            return Err(EvalError::MalformedExpression);
        }
        let v = self.operandes.pop().ok_or(EvalError::MalformedExpression)?;

        Ok((v, self.journal.unwrap_or_default()))
    }
}
