//! Couche courbes : de la saisie utilisateur aux points à dessiner.
//!
//! Glu mince au-dessus du noyau :
//! - saisie.rs      : préfixes Y= / R= / R**2= / X=, intervalle ":C,D:"
//! - echantillon.rs : compile une fois, évalue N fois, (x,t) -> (x,y)
//! - rendu.rs       : exports CSV et SVG

pub mod echantillon;
pub mod rendu;
pub mod saisie;

pub use echantillon::{echantillonner, DemarcheCourbe, DonneesCourbe, ErreurCourbe};
pub use rendu::{rendu_csv, rendu_svg};
pub use saisie::{analyser_saisie, Courbe, ErreurSaisie, TypeCourbe};
