//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l'état du traceur (saisie, locale, nombre d'échantillons,
//! dernière courbe tracée, erreur, démarche) et offrir des opérations simples
//! (C/CLR/AC) sans logique d'affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas d'échantillonnage).
//! - Actions déterministes, sans effet de bord caché.
//! - Garde-fous : bornes sur le nombre d'échantillons.

use crate::courbe::{DemarcheCourbe, DonneesCourbe};
use crate::noyau::Locale;

/// Nombre d'échantillons par défaut.
const ECHANTILLONS_DEFAUT: usize = 512;

/// Garde-fous : bornes du nombre d'échantillons (anti-abus / anti-gel).
const ECHANTILLONS_MIN: usize = 2;
const ECHANTILLONS_MAX: usize = 20_000;

#[derive(Clone, Debug)]
pub struct AppTraceur {
    // --- saisie utilisateur ---
    pub entree: String,

    // --- paramètres ---
    /// true = virgule décimale (3,14), false = point (3.14).
    pub virgule_decimale: bool,
    pub echantillons: usize,

    // --- sorties ---
    pub donnees: Option<DonneesCourbe>,
    pub titre_courbe: String,
    pub erreur: String,

    // --- démarche (panneau d'explication) ---
    pub demarche: DemarcheCourbe,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l'entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppTraceur {
    fn default() -> Self {
        Self {
            entree: String::new(),
            virgule_decimale: false,
            echantillons: ECHANTILLONS_DEFAUT,
            donnees: None,
            titre_courbe: String::new(),
            erreur: String::new(),
            demarche: DemarcheCourbe::default(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppTraceur {
    /// Locale effective pour le lexage, dérivée du réglage UI.
    pub fn locale(&self) -> Locale {
        if self.virgule_decimale {
            Locale::Virgule
        } else {
            Locale::Point
        }
    }

    /* ------------------------ Actions "boutons" (état seulement) ------------------------ */

    /// AC : remise à zéro totale (saisie + résultats + paramètres par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.virgule_decimale = false;
        self.echantillons = ECHANTILLONS_DEFAUT;
        self.focus_entree = true;
    }

    /// C : effacer seulement la saisie (sans toucher à la courbe).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer courbe + erreur + démarche (sans toucher à la saisie).
    pub fn clear_resultats(&mut self) {
        self.donnees = None;
        self.titre_courbe.clear();
        self.erreur.clear();
        self.demarche = DemarcheCourbe::default();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX : on CONSERVE la dernière courbe tracée pour ne pas "effacer
    /// l'écran" sur une faute de frappe ; seule la démarche est coupée.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = DemarcheCourbe::default();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer une courbe fraîchement échantillonnée.
    pub fn set_courbe(
        &mut self,
        donnees: DonneesCourbe,
        demarche: DemarcheCourbe,
        titre: impl Into<String>,
    ) {
        self.erreur.clear();
        self.donnees = Some(donnees);
        self.demarche = demarche;
        self.titre_courbe = titre.into();
        self.focus_entree = true;
    }

    /// Garde-fou : borne le nombre d'échantillons.
    pub fn set_echantillons(&mut self, n: usize) {
        self.echantillons = n.clamp(ECHANTILLONS_MIN, ECHANTILLONS_MAX);
        self.focus_entree = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garde_fou_echantillons() {
        let mut app = AppTraceur::default();
        app.set_echantillons(0);
        assert_eq!(app.echantillons, ECHANTILLONS_MIN);
        app.set_echantillons(1_000_000);
        assert_eq!(app.echantillons, ECHANTILLONS_MAX);
    }

    #[test]
    fn erreur_conserve_la_courbe() {
        let mut app = AppTraceur::default();
        app.set_courbe(
            DonneesCourbe {
                points: vec![(0.0, 0.0)],
                ignores: 0,
                n_demandes: 1,
            },
            DemarcheCourbe::default(),
            "y = x",
        );
        app.set_erreur("erreur de syntaxe");
        assert!(app.donnees.is_some());
        assert_eq!(app.erreur, "erreur de syntaxe");
    }

    #[test]
    fn clr_coupe_les_resultats_pas_la_saisie() {
        let mut app = AppTraceur::default();
        app.entree = "Y=sin(x)".into();
        app.erreur = "quelconque".into();
        app.clear_resultats();
        assert_eq!(app.entree, "Y=sin(x)");
        assert!(app.erreur.is_empty());
        assert!(app.donnees.is_none());
    }
}
