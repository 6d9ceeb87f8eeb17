// src/app.rs
//
// Coquille eframe commune au natif et au web : l’état (etat.rs), sa vue
// (vue.rs) et les raccourcis clavier globaux.

pub mod etat;
pub mod vue;

pub use etat::AppCalc;

use eframe::egui;

impl AppCalc {
    /// Échap vide l’entrée, Ctrl+Échap remet tout à zéro.
    /// Entrée est laissée au champ de saisie (vue.rs).
    fn raccourcis(&mut self, ctx: &egui::Context) {
        let (tout, entree) = ctx.input_mut(|i| {
            (
                i.consume_key(egui::Modifiers::COMMAND, egui::Key::Escape),
                i.consume_key(egui::Modifiers::NONE, egui::Key::Escape),
            )
        });

        if tout {
            self.reset_total();
        } else if entree {
            self.clear_entree();
        }
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.raccourcis(ctx);
        egui::CentralPanel::default().show(ctx, |ui| self.ui(ui));
    }
}
