// src/courbe/saisie.rs
//
// Analyse de la saisie utilisateur -> Courbe.
//
// Forme acceptée :
//   [préfixe]expression[;expression2][:C,D:]
// - Préfixes (insensibles à la casse) : Y= cartésien, R= polaire,
//   R**2= polaire au carré, X= paramétrique (première d'une paire).
//   Sans préfixe : cartésien.
// - Deux expressions séparées par ';' ou un saut de ligne => paramétrique.
// - Intervalle optionnel ":C,D:" en fin de saisie. C et D sont de petites
//   expressions constantes (pi, -pi, 2*pi, 1/2, e, nombres) évaluées par le
//   moteur lui-même — toujours sous Locale::Point puisque ',' y sépare C de D.

use std::error::Error;
use std::fmt;

use crate::noyau::{compiler, Locale};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypeCourbe {
    /// y = f(x)
    Cartesienne,
    /// r = f(theta), converti en (r·cos θ, r·sin θ)
    PolaireR,
    /// r² = f(theta) : rayon = sqrt(f), points à f < 0 ignorés
    PolaireR2,
    /// x = f(t) ; y = g(t)
    Parametrique,
}

/// Saisie analysée, pas encore compilée.
#[derive(Clone, Debug, PartialEq)]
pub struct Courbe {
    pub genre: TypeCourbe,
    pub expr1: String,
    /// Deuxième expression (paramétrique seulement).
    pub expr2: Option<String>,
    /// Intervalle [C, D] explicite ; sinon les défauts par type s'appliquent.
    pub intervalle: Option<(f64, f64)>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErreurSaisie {
    EntreeVide,
    /// ":C,D:" présent mais bornes inexploitables.
    IntervalleInvalide,
    /// "X=" seul, sans deuxième expression.
    ExpressionManquante,
}

impl fmt::Display for ErreurSaisie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErreurSaisie::EntreeVide => write!(f, "entrée vide"),
            ErreurSaisie::IntervalleInvalide => write!(f, "intervalle \":C,D:\" invalide"),
            ErreurSaisie::ExpressionManquante => {
                write!(f, "courbe paramétrique : il faut deux expressions (X= ; Y=)")
            }
        }
    }
}

impl Error for ErreurSaisie {}

/// Intervalles par défaut (programme ZX81 d'origine).
/// Les bornes polaires sont en multiples de π, appliqués à l'échantillonnage.
pub fn intervalle_defaut(genre: TypeCourbe) -> (f64, f64) {
    match genre {
        TypeCourbe::Cartesienne => (-10.0, 10.0),
        TypeCourbe::PolaireR | TypeCourbe::PolaireR2 => (0.004, 2.0),
        TypeCourbe::Parametrique => (0.0, 2.0),
    }
}

/// Évalue une borne d'intervalle via le moteur (constantes seulement).
fn evaluer_borne(texte: &str) -> Option<f64> {
    let ec = compiler(texte.trim(), Locale::Point).ok()?;
    if ec.variable().is_some() {
        return None;
    }
    ec.evaluer(0.0).ok().filter(|v| v.is_finite())
}

/// Extrait un ":C,D:" final. Rend (reste, Some((C,D))) si trouvé.
fn extraire_intervalle(texte: &str) -> Result<(&str, Option<(f64, f64)>), ErreurSaisie> {
    let s = texte.trim_end();
    if !s.ends_with(':') {
        return Ok((texte, None));
    }

    let sans_fin = &s[..s.len() - 1];
    let debut = match sans_fin.rfind(':') {
        Some(i) => i,
        None => return Ok((texte, None)),
    };

    let interieur = &sans_fin[debut + 1..];
    let (c_txt, d_txt) = interieur
        .split_once(',')
        .ok_or(ErreurSaisie::IntervalleInvalide)?;

    let c = evaluer_borne(c_txt).ok_or(ErreurSaisie::IntervalleInvalide)?;
    let d = evaluer_borne(d_txt).ok_or(ErreurSaisie::IntervalleInvalide)?;

    Ok((&sans_fin[..debut], Some((c, d))))
}

/// Détecte le type par préfixe et rend l'expression nettoyée.
fn detecter_type(texte: &str) -> (TypeCourbe, String) {
    let s = texte.trim();
    let minuscule = s.to_lowercase();

    // "r**2=" d'abord : "r=" en est un préfixe
    for (prefixe, genre) in [
        ("y=", TypeCourbe::Cartesienne),
        ("r**2=", TypeCourbe::PolaireR2),
        ("r=", TypeCourbe::PolaireR),
        ("x=", TypeCourbe::Parametrique),
    ] {
        if minuscule.starts_with(prefixe) {
            return (genre, s[prefixe.len()..].to_string());
        }
    }

    // sans préfixe : cartésien
    (TypeCourbe::Cartesienne, s.to_string())
}

/// Analyse la saisie complète (préfixe + expressions + intervalle optionnel).
pub fn analyser_saisie(texte: &str) -> Result<Courbe, ErreurSaisie> {
    if texte.trim().is_empty() {
        return Err(ErreurSaisie::EntreeVide);
    }

    let (reste, intervalle) = extraire_intervalle(texte)?;

    // séparation éventuelle en deux expressions
    let (brut1, brut2) = match reste.split_once(|c| matches!(c, ';' | '\n' | '\r')) {
        Some((a, b)) => (a, Some(b)),
        None => (reste, None),
    };

    let (genre1, expr1) = detecter_type(brut1);

    let courbe = match brut2 {
        None => {
            if genre1 == TypeCourbe::Parametrique {
                // "X=" seul : il manque la deuxième moitié de la paire
                return Err(ErreurSaisie::ExpressionManquante);
            }
            Courbe {
                genre: genre1,
                expr1,
                expr2: None,
                intervalle,
            }
        }
        Some(brut2) => {
            let (genre2, expr2) = detecter_type(brut2);

            // deux expressions = paramétrique ; si "X=" est en deuxième
            // position, on remet la paire dans l'ordre (X puis Y)
            let (premiere, seconde) = if genre2 == TypeCourbe::Parametrique
                && genre1 != TypeCourbe::Parametrique
            {
                (expr2, expr1)
            } else {
                (expr1, expr2)
            };

            Courbe {
                genre: TypeCourbe::Parametrique,
                expr1: premiere,
                expr2: Some(seconde),
                intervalle,
            }
        }
    };

    if courbe.expr1.trim().is_empty() {
        return Err(ErreurSaisie::EntreeVide);
    }
    Ok(courbe)
}
