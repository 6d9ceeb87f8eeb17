// src/app/vue.rs
//
// Vue egui (natif + web) : saisie, pavé, résultat exact, démarche.
//
// Le pavé est une table de touches ; un clic passe par `appuyer`, qui ne
// dépend pas d’egui (testable sans fenêtre).

use eframe::egui;

use calculatrice_entiers::noyau::{eval_detaille, format, format::nb_chiffres, SENTINELLE_ERREUR};

use super::etat::AppCalc;

/// Rôle d’un texte inséré : décide des espaces autour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Genre {
    Chiffre,
    Operateur,
    Ouvrante,
    Fermante,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Touche {
    Saisie(&'static str, Genre),
    Effacer,
    ViderEntree,
    ViderResultats,
    ToutVider,
    Egal,
}

use Genre::*;
use Touche::*;

const PAVE: &[&[Touche]] = &[
    &[ViderEntree, ViderResultats, ToutVider, Effacer, Egal],
    &[
        Saisie("7", Chiffre),
        Saisie("8", Chiffre),
        Saisie("9", Chiffre),
        Saisie("(", Ouvrante),
        Saisie(")", Fermante),
    ],
    &[
        Saisie("4", Chiffre),
        Saisie("5", Chiffre),
        Saisie("6", Chiffre),
        Saisie("*", Operateur),
        Saisie("/", Operateur),
    ],
    &[
        Saisie("1", Chiffre),
        Saisie("2", Chiffre),
        Saisie("3", Chiffre),
        Saisie("+", Operateur),
        Saisie("-", Operateur),
    ],
    &[Saisie("0", Chiffre), Saisie("000", Chiffre)],
];

impl Touche {
    fn etiquette(self) -> &'static str {
        match self {
            Saisie(texte, _) => texte,
            Effacer => "DEL",
            ViderEntree => "C",
            ViderResultats => "CLR",
            ToutVider => "AC",
            Egal => "=",
        }
    }

    fn aide(self) -> Option<&'static str> {
        match self {
            Effacer => Some("Efface le dernier symbole"),
            ViderEntree => Some("Efface l’entrée (Échap)"),
            ViderResultats => Some("Efface résultat, erreur et démarche"),
            ToutVider => Some("Remise à zéro (Ctrl+Échap)"),
            Egal => Some("Évalue (Entrée)"),
            Saisie(..) => None,
        }
    }
}

impl AppCalc {
    /// Dessine toute la calculatrice ; appelée depuis `eframe::App::update`.
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice entière");
                self.ui_saisie(ui);
                ui.separator();
                self.ui_pave(ui);
                ui.separator();
                self.ui_resultat(ui);
                self.ui_demarche(ui);
            });
    }

    fn ui_saisie(&mut self, ui: &mut egui::Ui) {
        let champ = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .id_salt("entree")
                .desired_width(ui.available_width())
                .hint_text("(2+3)*4, -5+3, 999999999999999999*999999999999999999")
                .code_editor(),
        );

        if std::mem::take(&mut self.focus_entree) {
            champ.request_focus();
        }

        // un champ une ligne rend le focus sur Entrée
        if champ.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            self.appuyer(Egal);
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in PAVE {
                    for &touche in *rangee {
                        let mut resp =
                            ui.add_sized([52.0, 32.0], egui::Button::new(touche.etiquette()));
                        if let Some(aide) = touche.aide() {
                            resp = resp.on_hover_text(aide);
                        }
                        if resp.clicked() {
                            self.appuyer(touche);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.strong("Résultat");
            if !self.resultat.is_empty() {
                ui.weak(format!("{} chiffre(s)", self.nb_chiffres));
                if ui.small_button("Copier").clicked() {
                    ui.ctx().copy_text(self.resultat.clone());
                }
            }
        });
        cadre_monospace(ui, &self.resultat);

        if !self.erreur.is_empty() {
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        let d = &self.demarche;
        egui::CollapsingHeader::new(format!("Démarche ({} repli(s))", d.reductions.len()))
            .id_salt("demarche")
            .show(ui, |ui| {
                ui.label("Jetons :");
                cadre_monospace(ui, &d.jetons);

                egui::Grid::new("replis").striped(true).show(ui, |ui| {
                    for (i, r) in d.reductions.iter().enumerate() {
                        ui.monospace(format!("{}.", i + 1));
                        ui.add(
                            egui::Label::new(egui::RichText::new(r).monospace())
                                .wrap_mode(egui::TextWrapMode::Wrap),
                        );
                        ui.end_row();
                    }
                });

                if !d.note.is_empty() {
                    ui.weak(&d.note);
                }
            });
    }

    fn appuyer(&mut self, touche: Touche) {
        match touche {
            Saisie(texte, genre) => inserer(&mut self.entree, texte, genre),
            Effacer => self.backspace_entree(),
            ViderEntree => self.clear_entree(),
            ViderResultats => self.clear_resultats(),
            ToutVider => self.reset_total(),
            Egal => self.evaluer(),
        }
        self.focus_entree = true;
    }

    fn evaluer(&mut self) {
        match eval_detaille(&self.entree) {
            Ok((v, demarche)) => self.set_resultats(format(&v), nb_chiffres(&v), demarche),
            Err(e) => {
                log::info!("évaluation refusée : {e}");
                self.set_erreur(format!("{SENTINELLE_ERREUR} {e}"));
            }
        }
    }
}

/// Texte long en lecture seule : un grand entier n’a pas d’espace où couper.
fn cadre_monospace(ui: &mut egui::Ui, contenu: &str) {
    egui::Frame::group(ui.style())
        .fill(ui.visuals().extreme_bg_color)
        .show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.add(
                egui::Label::new(egui::RichText::new(contenu).monospace())
                    .wrap_mode(egui::TextWrapMode::Wrap),
            );
        });
}

/// Opérateurs entourés d’espaces, chiffres collés au nombre en cours.
fn inserer(entree: &mut String, texte: &str, genre: Genre) {
    let fin = entree.trim_end().len();
    let precedent = entree[..fin].chars().next_back();

    match genre {
        // un espace couperait le nombre en deux
        Chiffre if matches!(precedent, Some(c) if c.is_ascii_digit()) => entree.truncate(fin),
        Chiffre => {}
        Fermante => entree.truncate(fin),
        Operateur => {
            entree.truncate(fin);
            if precedent.is_some() {
                entree.push(' ');
            }
        }
        Ouvrante => {
            if matches!(precedent, Some(c) if c.is_ascii_digit() || c == ')') {
                entree.truncate(fin);
                entree.push(' ');
            }
        }
    }

    entree.push_str(texte);
    if genre == Operateur {
        entree.push(' ');
    }
}
