// src/noyau/jetons.rs

use std::fmt;

use super::erreur::EvalError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Minus,
    Star,
    Slash,
}

impl Op {
    fn depuis_char(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Plus),
            '-' => Some(Op::Minus),
            '*' => Some(Op::Star),
            '/' => Some(Op::Slash),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Minus => '-',
            Op::Star => '*',
            Op::Slash => '/',
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    // Littéral décimal brut (éventuellement "-..."), converti par l’évaluateur.
    Num(String),
    Op(Op),

    LPar,
    RPar,
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num(s) => f.write_str(s),
            Tok::Op(op) => write!(f, "{op}"),
            Tok::LPar => f.write_str("("),
            Tok::RPar => f.write_str(")"),
        }
    }
}

/// Un '-' ouvre un littéral négatif en début d’expression, après un opérateur ou après '('.
fn debut_de_litteral(precedent: Option<&Tok>) -> bool {
    matches!(precedent, None | Some(Tok::Op(_)) | Some(Tok::LPar))
}

fn longueur_chiffres(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

/// Lit le prochain jeton de `reste` (suffixe non consommé de l’expression).
///
/// Renvoie le jeton et le nombre d’octets consommés (espaces de tête compris),
/// ou `None` s’il ne reste que des espaces. La position d’une erreur
/// `UnexpectedCharacter` est relative à `reste`.
///
/// Les espaces séparent les jetons et n’ont pas d’autre sens ; ils sont
/// aussi tolérés entre un '-' de littéral et ses chiffres ("- 5" en tête = -5).
pub fn prochain_jeton(
    reste: &str,
    precedent: Option<&Tok>,
) -> Result<Option<(Tok, usize)>, EvalError> {
    let tete = reste.trim_start();
    let saut = reste.len() - tete.len();

    let Some(c) = tete.chars().next() else {
        return Ok(None);
    };

    let (tok, lu) = match c {
        '(' => (Tok::LPar, 1),
        ')' => (Tok::RPar, 1),

        // moins de littéral : les chiffres qui suivent (peut-être aucun => nombre mal formé plus loin)
        '-' if debut_de_litteral(precedent) => {
            let apres = tete[1..].trim_start();
            let espaces = tete.len() - 1 - apres.len();
            let n = longueur_chiffres(apres);
            (Tok::Num(format!("-{}", &apres[..n])), 1 + espaces + n)
        }

        // un espace termine le nombre : "1 2" fait deux littéraux (puis expression mal formée),
        // pas 12 comme le ferait un cumul de chiffres qui saute les blancs
        c if c.is_ascii_digit() => {
            let n = longueur_chiffres(tete);
            (Tok::Num(tete[..n].to_string()), n)
        }

        c => match Op::depuis_char(c) {
            Some(op) => (Tok::Op(op), 1),
            None => {
                return Err(EvalError::UnexpectedCharacter {
                    caractere: c,
                    position: saut,
                })
            }
        },
    };

    Ok(Some((tok, saut + lu)))
}

/// Tokenisation paresseuse : un jeton à la fois, arrêt à la première erreur.
pub struct Jetons<'a> {
    texte: &'a str,
    pos: usize,
    precedent: Option<Tok>,
    fini: bool,
}

impl<'a> Jetons<'a> {
    pub fn new(texte: &'a str) -> Self {
        Self {
            texte,
            pos: 0,
            precedent: None,
            fini: false,
        }
    }
}

impl Iterator for Jetons<'_> {
    type Item = Result<Tok, EvalError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.fini {
            return None;
        }

        match prochain_jeton(&self.texte[self.pos..], self.precedent.as_ref()) {
            Ok(Some((tok, lu))) => {
                self.pos += lu;
                self.precedent = Some(tok.clone());
                Some(Ok(tok))
            }
            Ok(None) => {
                self.fini = true;
                None
            }
            Err(EvalError::UnexpectedCharacter {
                caractere,
                position,
            }) => {
                self.fini = true;
                Some(Err(EvalError::UnexpectedCharacter {
                    caractere,
                    position: self.pos + position,
                }))
            }
            Err(e) => {
                self.fini = true;
                Some(Err(e))
            }
        }
    }
}

/// Tokenise toute la chaîne d’un coup.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, EvalError> {
    Jetons::new(s).collect()
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(Tok::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
