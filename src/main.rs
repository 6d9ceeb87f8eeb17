// src/main.rs
//
// Calculatrice entière: point d’entrée NATIF + WEB (WASM)
// --------------------------------------------------------
// - NATIF : eframe::run_native, ou filtre stdin -> stdout avec `--stdin`
// - WEB (wasm32) : eframe::WebRunner sur <canvas id="the_canvas_id">
//
// Journalisation : `RUST_LOG=debug` (natif) montre chaque repli de l’évaluateur.

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice entière";

/// Drapeau du mode filtre (lit tout stdin, écrit le résultat ou `[error]`).
#[cfg(not(target_arch = "wasm32"))]
const DRAPEAU_STDIN: &str = "--stdin";

/* ------------------------ Style (natif + web) ------------------------ */

fn installer_style(ctx: &egui::Context) {
    // Monospace un peu plus grand : les résultats font vite des centaines de chiffres
    ctx.style_mut(|style| {
        style.text_styles.insert(
            egui::TextStyle::Monospace,
            egui::FontId::monospace(15.0),
        );
    });
}

/* ------------------------ Mode filtre (natif) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn filtre_stdin() -> std::io::Result<()> {
    use std::io::Write;

    let entree = std::io::read_to_string(std::io::stdin())?;
    let sortie = calculatrice_entiers::noyau::sortie_filtre(&entree);

    let mut out = std::io::stdout().lock();
    out.write_all(sortie.as_bytes())?;
    out.flush()
}

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::init();

    if std::env::args().skip(1).any(|a| a == DRAPEAU_STDIN) {
        if let Err(e) = filtre_stdin() {
            log::error!("mode filtre : {e}");
        }
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([520.0, 700.0])
            .with_min_inner_size([420.0, 560.0]),
        ..Default::default()
    };

    log::debug!("lancement de l’UI native");
    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(|cc| {
            installer_style(&cc.egui_ctx);
            Ok(Box::<AppCalc>::default())
        }),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

// En wasm32 le démarrage passe par `web::start` (wasm_bindgen) ; main reste vide.
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{installer_style, AppCalc, TITRE_APP};

    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::HtmlCanvasElement;

    /// `<canvas id="...">` attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Le canvas de la page, après avoir posé le titre de l’onglet.
    fn preparer_page() -> Result<HtmlCanvasElement, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("pas de document (hors navigateur ?)"))?;
        document.set_title(TITRE_APP);

        document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| JsValue::from_str(&format!("canvas #{CANVAS_ID} introuvable")))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str(&format!("#{CANVAS_ID} n’est pas un <canvas>")))
    }

    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), JsValue> {
        let canvas = preparer_page()?;
        log::debug!("lancement de l’UI web sur #{CANVAS_ID}");

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| {
                    installer_style(&cc.egui_ctx);
                    Ok(Box::<AppCalc>::default())
                }),
            )
            .await
    }
}
