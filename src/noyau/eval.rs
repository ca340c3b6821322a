// src/noyau/eval.rs
//
// Évaluateur RPN : machine à pile explicite, sans récursion.
// - Lecture seule sur la suite RPN : réutilisable pour autant de liaisons
//   de variable qu'on veut (compiler une fois, évaluer N fois).
// - Exactement UNE valeur résiduelle exigée en fin de parcours.
//
// Politique de domaine (première erreur gagne, arrêt immédiat) :
// - diviseur exactement nul        => DivisionParZero
//   (les diviseurs quasi nuls passent : on échantillonne près des pôles,
//    la couche de présentation écrête)
// - sqrt/log/log10 d'un négatif,
//   asin/acos hors [-1,1]          => Domaine
// - log(0) / log10(0)              => -inf propagé, PAS d'erreur (choix assumé)
// - NaN, ou infini produit depuis des opérandes finies (overflow, forme
//   indéterminée)                  => Math. Un infini déjà présent se propage.

use super::erreurs::ErreurEval;
use super::jetons::{Fonction, Jeton};

/// Évalue une suite RPN avec une liaison pour la variable libre.
/// Pure et sans effet de bord : la même RPN peut servir à chaque échantillon.
pub fn evaluer_rpn(rpn: &[Jeton], valeur_variable: f64) -> Result<f64, ErreurEval> {
    let mut pile: Vec<f64> = Vec::with_capacity(16);

    for jeton in rpn.iter().copied() {
        match jeton {
            Jeton::Nombre(v) => pile.push(v),
            Jeton::Variable(_) => pile.push(valeur_variable),
            Jeton::Constante(c) => pile.push(c.valeur()),

            Jeton::Plus | Jeton::Moins | Jeton::Fois | Jeton::Division | Jeton::Puissance => {
                // le plus récemment empilé est l'opérande droite
                let droite = pile.pop().ok_or(ErreurEval::Pile)?;
                let gauche = pile.pop().ok_or(ErreurEval::Pile)?;

                let r = match jeton {
                    Jeton::Plus => gauche + droite,
                    Jeton::Moins => gauche - droite,
                    Jeton::Fois => gauche * droite,
                    Jeton::Division => {
                        if droite == 0.0 {
                            return Err(ErreurEval::DivisionParZero);
                        }
                        gauche / droite
                    }
                    Jeton::Puissance => gauche.powf(droite),
                    _ => unreachable!(),
                };

                pile.push(controler(r, gauche.is_finite() && droite.is_finite())?);
            }

            Jeton::Fonction(f) => {
                let x = pile.pop().ok_or(ErreurEval::Pile)?;
                pile.push(appliquer_fonction(f, x)?);
            }

            // ne peut pas sortir de en_rpn, mais on se défend quand même
            Jeton::ParOuvrante | Jeton::ParFermante => return Err(ErreurEval::Pile),
        }
    }

    if pile.len() != 1 {
        return Err(ErreurEval::Pile);
    }
    Ok(pile[0])
}

/// Contrôle du résultat d'une opération :
/// - NaN => Math (forme indéterminée)
/// - infini issu d'opérandes toutes finies => Math (overflow)
/// - infini déjà en entrée => propagation silencieuse
fn controler(r: f64, operandes_finies: bool) -> Result<f64, ErreurEval> {
    if r.is_nan() {
        return Err(ErreurEval::Math);
    }
    if r.is_infinite() && operandes_finies {
        return Err(ErreurEval::Math);
    }
    Ok(r)
}

/// Application d'une fonction unaire, avec sa garde de domaine.
/// Étendre le langage = ajouter un bras ici (avec la ligne de TABLE_NOMS).
fn appliquer_fonction(f: Fonction, x: f64) -> Result<f64, ErreurEval> {
    let r = match f {
        Fonction::Sin => x.sin(),
        Fonction::Cos => x.cos(),
        Fonction::Tan => x.tan(),
        Fonction::Abs => x.abs(),

        Fonction::Sqrt => {
            if x < 0.0 {
                return Err(ErreurEval::Domaine);
            }
            x.sqrt()
        }

        Fonction::Log => {
            if x < 0.0 {
                return Err(ErreurEval::Domaine);
            }
            if x == 0.0 {
                // choix assumé : log(0) propage -inf au lieu d'échouer
                return Ok(f64::NEG_INFINITY);
            }
            x.ln()
        }
        Fonction::Log10 => {
            if x < 0.0 {
                return Err(ErreurEval::Domaine);
            }
            if x == 0.0 {
                return Ok(f64::NEG_INFINITY);
            }
            x.log10()
        }

        Fonction::Exp => x.exp(),
        Fonction::Sinh => x.sinh(),
        Fonction::Cosh => x.cosh(),
        Fonction::Tanh => x.tanh(),

        Fonction::Asin => {
            if !(-1.0..=1.0).contains(&x) {
                return Err(ErreurEval::Domaine);
            }
            x.asin()
        }
        Fonction::Acos => {
            if !(-1.0..=1.0).contains(&x) {
                return Err(ErreurEval::Domaine);
            }
            x.acos()
        }
        Fonction::Atan => x.atan(),

        Fonction::Ceil => x.ceil(),
        Fonction::Floor => x.floor(),
        Fonction::Frac => x.fract(),
    };

    controler(r, x.is_finite())
}
