// src/noyau/erreurs.rs
//
// Erreurs classifiées du noyau, un étage par frontière du pipeline :
// - ErreurCompile : lexeur + traduction RPN (toute l'expression est rejetée)
// - ErreurEval    : une évaluation ponctuelle (la RPN reste valide et réutilisable)
//
// Contrat : pas de résultat partiel, pas de récupération implicite.
// La couche d'échantillonnage traite une ErreurEval comme "point ignoré".

use std::error::Error;
use std::fmt;

/// Erreurs de compilation (lexeur + shunting-yard).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErreurCompile {
    /// Identifiant inconnu suivi d'une parenthèse ouvrante.
    FonctionInconnue(String),
    /// Identifiant inconnu en position de valeur.
    VariableInconnue(String),
    /// Deux identités de variables distinctes dans la même expression.
    VariablesMelangees,
    /// Caractère inattendu, littéral malformé, parenthèses déséquilibrées, entrée vide.
    Syntaxe,
}

impl fmt::Display for ErreurCompile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErreurCompile::FonctionInconnue(nom) => write!(f, "fonction inconnue : {nom}"),
            ErreurCompile::VariableInconnue(nom) => write!(f, "variable inconnue : {nom}"),
            ErreurCompile::VariablesMelangees => {
                write!(f, "variables mélangées (ne pas combiner x, theta, t)")
            }
            ErreurCompile::Syntaxe => write!(f, "erreur de syntaxe"),
        }
    }
}

impl Error for ErreurCompile {}

/// Erreurs d'évaluation (machine à pile).
/// Mutuellement exclusives : la première rencontrée gagne et stoppe l'évaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErreurEval {
    /// RPN malformée : pile vide au pop, ou autre chose qu'une valeur résiduelle.
    Pile,
    /// Diviseur exactement nul.
    DivisionParZero,
    /// Opérande hors du domaine mathématique (sqrt/log négatif, asin hors [-1,1]).
    Domaine,
    /// NaN, ou infini produit à partir d'opérandes finies (overflow, forme indéterminée).
    Math,
}

impl fmt::Display for ErreurEval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErreurEval::Pile => write!(f, "erreur de pile (expression malformée)"),
            ErreurEval::DivisionParZero => write!(f, "division par zéro"),
            ErreurEval::Domaine => write!(f, "domaine invalide"),
            ErreurEval::Math => write!(f, "erreur mathématique (overflow/NaN)"),
        }
    }
}

impl Error for ErreurEval {}
