//! src/app/etat.rs
//!
//! État de la calculatrice, sans egui.
//!
//! L’évaluation elle-même vit dans le noyau ; ici on ne fait que ranger ce
//! qu’elle rend (texte du résultat, nombre de chiffres, erreur, démarche)
//! et appliquer les touches d’édition C / CLR / AC / DEL.

use calculatrice_entiers::noyau::DemarcheNoyau;

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub entree: String,

    /// Dernier résultat réussi, en décimal complet.
    pub resultat: String,
    pub nb_chiffres: usize,

    /// `[error] …` après un échec ; vide sinon.
    pub erreur: String,

    pub demarche: DemarcheNoyau,

    /// La vue redonne le focus au champ à la frame suivante.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            nb_chiffres: 0,
            erreur: String::new(),
            demarche: DemarcheNoyau::default(),
            focus_entree: true,
        }
    }
}

impl AppCalc {
    /// AC
    pub fn reset_total(&mut self) {
        *self = Self::default();
    }

    /// C : l’entrée seulement.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : résultat, erreur et démarche ; l’entrée reste.
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.nb_chiffres = 0;
        self.erreur.clear();
        self.demarche = DemarcheNoyau::default();
        self.focus_entree = true;
    }

    /// DEL : un symbole de moins, sans laisser d’espace pendant en fin d’entrée.
    pub fn backspace_entree(&mut self) {
        let coupe = self.entree.trim_end().len();
        self.entree.truncate(coupe);
        self.entree.pop();
        let coupe = self.entree.trim_end().len();
        self.entree.truncate(coupe);
        self.focus_entree = true;
    }

    /// Échec : le dernier résultat reste affiché, la démarche (incomplète) part.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = DemarcheNoyau::default();
        self.focus_entree = true;
    }

    pub fn set_resultats(
        &mut self,
        resultat: impl Into<String>,
        nb_chiffres: usize,
        demarche: DemarcheNoyau,
    ) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.nb_chiffres = nb_chiffres;
        self.demarche = demarche;
        self.focus_entree = true;
    }
}
