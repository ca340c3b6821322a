// src/courbe/echantillon.rs
//
// Boucle d'échantillonnage : compile chaque expression UNE fois, puis évalue
// point par point sur [C, D] et convertit (t, f(t)) en cartésien selon le
// type de courbe.
//
// Contrat d'erreurs :
// - erreur de compilation => toute la courbe est rejetée ;
// - erreur d'évaluation ponctuelle => le point est ignoré, la courbe continue.

use std::error::Error;
use std::fmt;

use super::saisie::{intervalle_defaut, Courbe, TypeCourbe};
use crate::noyau::{compiler, ErreurCompile, Locale};

/// Points cartésiens prêts à rendre, plus le bilan des points ignorés.
#[derive(Clone, Debug, Default)]
pub struct DonneesCourbe {
    pub points: Vec<(f64, f64)>,
    /// Points sautés (erreur d'évaluation, rayon² négatif…).
    pub ignores: usize,
    pub n_demandes: usize,
}

/// Démarche de compilation (jetons + RPN en texte), pour l'affichage.
#[derive(Clone, Debug, Default)]
pub struct DemarcheCourbe {
    pub jetons: String,
    pub rpn: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErreurCourbe {
    /// Première expression rejetée par le moteur.
    Expression1(ErreurCompile),
    /// Deuxième expression (paramétrique) rejetée.
    Expression2(ErreurCompile),
}

impl fmt::Display for ErreurCourbe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErreurCourbe::Expression1(e) => write!(f, "première expression : {e}"),
            ErreurCourbe::Expression2(e) => write!(f, "deuxième expression : {e}"),
        }
    }
}

impl Error for ErreurCourbe {}

/// Échantillonne une courbe : n points régulièrement espacés sur [C, D].
/// Rend les données + la démarche de la (des) expression(s) compilée(s).
pub fn echantillonner(
    courbe: &Courbe,
    locale: Locale,
    n: usize,
) -> Result<(DonneesCourbe, DemarcheCourbe), ErreurCourbe> {
    let n = n.max(2);

    // Intervalle [C, D] ; en polaire, les bornes sont des multiples de π.
    let (mut c, mut d) = courbe
        .intervalle
        .unwrap_or_else(|| intervalle_defaut(courbe.genre));
    let polaire = matches!(courbe.genre, TypeCourbe::PolaireR | TypeCourbe::PolaireR2);
    if polaire {
        c *= std::f64::consts::PI;
        d *= std::f64::consts::PI;
    }

    // Compilation : une seule fois, quel que soit n.
    let ec1 = compiler(&courbe.expr1, locale).map_err(ErreurCourbe::Expression1)?;
    let ec2 = match &courbe.expr2 {
        Some(expr2) => Some(compiler(expr2, locale).map_err(ErreurCourbe::Expression2)?),
        None => None,
    };

    let mut demarche = DemarcheCourbe {
        jetons: ec1.jetons_txt().to_string(),
        rpn: ec1.rpn_txt().to_string(),
    };
    if let Some(ec2) = &ec2 {
        demarche.jetons = format!("{}  ;  {}", demarche.jetons, ec2.jetons_txt());
        demarche.rpn = format!("{}  ;  {}", demarche.rpn, ec2.rpn_txt());
    }

    let mut donnees = DonneesCourbe {
        points: Vec::with_capacity(n),
        ignores: 0,
        n_demandes: n,
    };

    let pas = (d - c) / (n - 1) as f64;

    for i in 0..n {
        let t = c + i as f64 * pas;

        let v1 = match ec1.evaluer(t) {
            Ok(v) => v,
            Err(_) => {
                // "point ignoré", jamais une raison d'abandonner la courbe
                donnees.ignores += 1;
                continue;
            }
        };

        let point = match courbe.genre {
            TypeCourbe::Cartesienne => (t, v1),

            TypeCourbe::PolaireR => (v1 * t.cos(), v1 * t.sin()),

            TypeCourbe::PolaireR2 => {
                // r² = f(t) : pas de rayon réel si f(t) < 0
                if v1 < 0.0 {
                    donnees.ignores += 1;
                    continue;
                }
                let r = v1.sqrt();
                (r * t.cos(), r * t.sin())
            }

            TypeCourbe::Parametrique => {
                let ec2 = match &ec2 {
                    Some(ec2) => ec2,
                    None => {
                        donnees.ignores += 1;
                        continue;
                    }
                };
                match ec2.evaluer(t) {
                    Ok(v2) => (v1, v2),
                    Err(_) => {
                        donnees.ignores += 1;
                        continue;
                    }
                }
            }
        };

        donnees.points.push(point);
    }

    Ok((donnees, demarche))
}
