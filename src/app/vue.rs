// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppTraceur (etat.rs) pour natif + wasm
// - Clavier : Enter trace, Backspace efface (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Canvas : grille + axes + polyligne, interrompue aux points ignorés
//   (on ne relie pas les deux rives d'un pôle)

use eframe::egui;

use crate::courbe::rendu::boite_englobante;
use crate::courbe::{analyser_saisie, echantillonner};
#[cfg(not(target_arch = "wasm32"))]
use crate::courbe::{rendu_csv, rendu_svg};

use super::etat::AppTraceur;

/// Hauteur du canvas de tracé.
const HAUTEUR_TRACE: f32 = 320.0;

impl AppTraceur {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Traceur multicourbes");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_trace(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Courbe :");

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: Y=sin(x), R=1+cos(theta), X=cos(t);Y=sin(t) :0,2*pi:")
                .id_source("entree_edit")
                .code_editor(),
        );

        // Si on a cliqué un bouton, on redonne le focus
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter trace (seulement si le champ est focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.tracer();
            self.focus_entree = true;
        }

        // --- Clavier : Backspace "token entier" (seulement si focus) ---
        let backspace = ui.input(|i| i.key_pressed(egui::Key::Backspace));
        if resp.has_focus() && backspace {
            self.backspace_entree();
            self.focus_entree = true;
        }

        ui.add_space(6.0);

        // Actions + paramètres
        ui.horizontal(|ui| {
            // Contrat : C = saisie seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement la saisie", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface courbe + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            // marque décimale : n'affecte QUE le lexage des littéraux
            ui.checkbox(&mut self.virgule_decimale, "virgule décimale (3,14)");

            ui.separator();

            ui.label("Échantillons :");
            let mut n = self.echantillons as u32;
            let resp = ui.add(egui::DragValue::new(&mut n).speed(16).range(2..=20_000));
            if resp.changed() {
                self.set_echantillons(n as usize);
            }
        });

        ui.add_space(8.0);

        // Touches rapides + "Tracer"
        ui.horizontal_wrapped(|ui| {
            self.bouton_insert(ui, "Y=", "Y=", InsertKind::Prefixe);
            self.bouton_insert(ui, "R=", "R=", InsertKind::Prefixe);
            self.bouton_insert(ui, "R**2=", "R**2=", InsertKind::Prefixe);
            self.bouton_insert(ui, "X=;Y=", "X= ; Y=", InsertKind::Prefixe);

            ui.separator();

            self.bouton_insert(ui, "(", "(", InsertKind::OpenParen);
            self.bouton_insert(ui, ")", ")", InsertKind::CloseParen);

            self.bouton_insert(ui, "+", "+", InsertKind::Op);
            self.bouton_insert(ui, "-", "-", InsertKind::Op);
            self.bouton_insert(ui, "*", "*", InsertKind::Op);
            self.bouton_insert(ui, "/", "/", InsertKind::Op);
            self.bouton_insert(ui, "^", "^", InsertKind::Op);

            ui.separator();

            self.bouton_insert(ui, "pi", "pi", InsertKind::Word);
            self.bouton_insert(ui, "e", "e", InsertKind::Word);
            self.bouton_insert(ui, "sqrt", "sqrt(", InsertKind::Func);
            self.bouton_insert(ui, "sin", "sin(", InsertKind::Func);
            self.bouton_insert(ui, "cos", "cos(", InsertKind::Func);
            self.bouton_insert(ui, "tan", "tan(", InsertKind::Func);
            self.bouton_insert(ui, "log", "log(", InsertKind::Func);
            self.bouton_insert(ui, "abs", "abs(", InsertKind::Func);

            ui.separator();

            // Une seule variable par expression (x OU theta OU t)
            self.bouton_insert(ui, "x", "x", InsertKind::Word);
            self.bouton_insert(ui, "theta", "theta", InsertKind::Word);
            self.bouton_insert(ui, "t", "t", InsertKind::Word);

            ui.add_space(10.0);

            let eq = ui.add_sized([80.0, 32.0], egui::Button::new("Tracer"));
            if eq.clicked() {
                self.tracer();
                self.focus_entree = true;
            }
        });

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    /* ------------------------ Canvas de tracé ------------------------ */

    fn ui_trace(&mut self, ui: &mut egui::Ui) {
        let largeur = ui.available_width();
        let (reponse, peintre) =
            ui.allocate_painter(egui::vec2(largeur, HAUTEUR_TRACE), egui::Sense::hover());
        let cadre = reponse.rect;

        peintre.rect_filled(cadre, egui::CornerRadius::same(4), egui::Color32::WHITE);

        let donnees = match &self.donnees {
            Some(d) => d,
            None => {
                peintre.text(
                    cadre.center(),
                    egui::Align2::CENTER_CENTER,
                    "Aucune courbe — Enter ou bouton Tracer",
                    egui::TextStyle::Body.resolve(ui.style()),
                    egui::Color32::GRAY,
                );
                return;
            }
        };

        let (minx, maxx, miny, maxy) = boite_englobante(&donnees.points);
        let plage_x = maxx - minx;
        let plage_y = maxy - miny;

        let zone = cadre.shrink(14.0);
        let en_pos = |x: f64, y: f64| -> egui::Pos2 {
            egui::pos2(
                zone.left() + (((x - minx) / plage_x) as f32) * zone.width(),
                zone.bottom() - (((y - miny) / plage_y) as f32) * zone.height(),
            )
        };

        // grille majeure (pas de 1.0), seulement si elle reste lisible
        let trait_grille = egui::Stroke::new(1.0, egui::Color32::from_gray(224));
        if plage_x <= 60.0 {
            let mut ix = minx.floor();
            while ix <= maxx.ceil() {
                if ix >= minx && ix <= maxx {
                    peintre.line_segment([en_pos(ix, miny), en_pos(ix, maxy)], trait_grille);
                }
                ix += 1.0;
            }
        }
        if plage_y <= 60.0 {
            let mut iy = miny.floor();
            while iy <= maxy.ceil() {
                if iy >= miny && iy <= maxy {
                    peintre.line_segment([en_pos(minx, iy), en_pos(maxx, iy)], trait_grille);
                }
                iy += 1.0;
            }
        }

        // axes x=0 / y=0 s'ils traversent la boîte
        let trait_axe = egui::Stroke::new(2.0, egui::Color32::from_gray(128));
        if minx <= 0.0 && maxx >= 0.0 {
            peintre.line_segment([en_pos(0.0, miny), en_pos(0.0, maxy)], trait_axe);
        }
        if miny <= 0.0 && maxy >= 0.0 {
            peintre.line_segment([en_pos(minx, 0.0), en_pos(maxx, 0.0)], trait_axe);
        }

        // polyligne, interrompue quand un point sort de la boîte
        let trait_courbe = egui::Stroke::new(2.0, egui::Color32::from_rgb(0x00, 0x66, 0xcc));
        let mut segment: Vec<egui::Pos2> = Vec::new();
        for &(x, y) in &donnees.points {
            let dans_la_boite = x.is_finite()
                && y.is_finite()
                && x >= minx
                && x <= maxx
                && y >= miny
                && y <= maxy;

            if dans_la_boite {
                segment.push(en_pos(x, y));
            } else if segment.len() > 1 {
                peintre.add(egui::Shape::line(std::mem::take(&mut segment), trait_courbe));
            } else {
                segment.clear();
            }
        }
        if segment.len() > 1 {
            peintre.add(egui::Shape::line(segment, trait_courbe));
        }

        // bilan points ignorés + exports
        // (le bilan est formaté AVANT la ligne de boutons : exporter() reprend
        // &mut self, il ne faut plus tenir de référence sur self.donnees)
        let bilan = format!(
            "{} points tracés, {} ignorés (sur {})",
            donnees.points.len(),
            donnees.ignores,
            donnees.n_demandes
        );
        ui.horizontal(|ui| {
            ui.label(bilan);

            #[cfg(not(target_arch = "wasm32"))]
            {
                ui.separator();
                if ui.button("Exporter CSV").clicked() {
                    self.exporter("courbe.csv", rendu_csv);
                }
                if ui.button("Exporter SVG").clicked() {
                    let titre = self.titre_courbe.clone();
                    self.exporter("courbe.svg", move |d| rendu_svg(d, &titre, 800, 600));
                }
            }
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn exporter(
        &mut self,
        chemin: &str,
        rendu: impl FnOnce(&crate::courbe::DonneesCourbe) -> String,
    ) {
        let Some(donnees) = &self.donnees else {
            return;
        };
        let contenu = rendu(donnees);
        if let Err(e) = std::fs::write(chemin, contenu) {
            self.set_erreur(format!("export {chemin} impossible : {e}"));
        }
    }

    /* ------------------------ Démarche ------------------------ */

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.monospace(contenu);
                });
            });
    }

    /* ------------------------ Saisie : backspace "intelligent" ------------------------ */

    /// Retire d'un coup les motifs utiles ("sin(", "theta", "pi", etc.).
    fn backspace_entree(&mut self) {
        if self.entree.is_empty() {
            return;
        }

        while self.entree.ends_with(' ') {
            self.entree.pop();
        }

        for motif in [
            "sqrt(", "sin(", "cos(", "tan(", "log(", "abs(", "theta", "pi", "R**2=", "Y=", "R=",
            "X=",
        ] {
            if self.entree.ends_with(motif) {
                for _ in 0..motif.chars().count() {
                    self.entree.pop();
                }
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                return;
            }
        }

        self.entree.pop();
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
    }

    /* ------------------------ Boutons ------------------------ */

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, to_insert: &str, kind: InsertKind) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if !resp.clicked() || to_insert.is_empty() {
            return;
        }

        match kind {
            InsertKind::CloseParen => {
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                self.entree.push_str(to_insert);
            }
            InsertKind::OpenParen | InsertKind::Func => {
                if !self.entree.is_empty() {
                    let dernier = self.entree.chars().rev().find(|c| !c.is_whitespace());
                    if let Some(c) = dernier {
                        if c.is_ascii_digit() || c.is_ascii_alphabetic() || c == ')' {
                            self.entree.push(' ');
                        }
                    }
                }
                self.entree.push_str(to_insert);
            }
            InsertKind::Op => {
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                if !self.entree.is_empty() {
                    self.entree.push(' ');
                }
                self.entree.push_str(to_insert);
                self.entree.push(' ');
            }
            InsertKind::Word => {
                // mots : espace si juste avant c'est un chiffre ou ')'
                if !self.entree.is_empty() && !self.entree.ends_with(char::is_whitespace) {
                    let dernier = self.entree.chars().rev().find(|c| !c.is_whitespace());
                    if let Some(c) = dernier {
                        if c.is_ascii_digit() || c == ')' {
                            self.entree.push(' ');
                        }
                    }
                }
                self.entree.push_str(to_insert);
            }
            InsertKind::Prefixe => {
                // un préfixe se place en tête : on ne l'ajoute qu'à une saisie vide
                if self.entree.trim().is_empty() {
                    self.entree.clear();
                    self.entree.push_str(to_insert);
                }
            }
        }

        self.focus_entree = true;
    }

    /* ------------------------ Pipeline ------------------------ */

    /// Analyse la saisie, échantillonne via le noyau, dépose le résultat dans l'état.
    fn tracer(&mut self) {
        let saisie = self.entree.trim().to_string();
        if saisie.is_empty() {
            self.set_erreur("entrée vide");
            self.focus_entree = true;
            return;
        }

        let courbe = match analyser_saisie(&saisie) {
            Ok(c) => c,
            Err(e) => {
                self.set_erreur(e.to_string());
                return;
            }
        };

        match echantillonner(&courbe, self.locale(), self.echantillons) {
            Ok((donnees, demarche)) => self.set_courbe(donnees, demarche, saisie),
            Err(e) => self.set_erreur(e.to_string()),
        }
        self.focus_entree = true;
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
}

#[derive(Clone, Copy, Debug)]
enum InsertKind {
    Word,
    Func,
    Op,
    OpenParen,
    CloseParen,
    Prefixe,
}
