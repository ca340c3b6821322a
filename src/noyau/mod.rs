//! Noyau : moteur d'expressions à une variable.
//!
//! Pipeline strictement linéaire : lexer -> RPN -> (évaluer × N échantillons).
//!
//! Organisation interne :
//! - jetons.rs  : taxonomie (Jeton, identités, table de noms)
//! - lexeur.rs  : tokenisation, marque décimale explicite (Locale)
//! - rpn.rs     : shunting-yard, moins unaire par zéro injecté
//! - eval.rs    : machine à pile f64 + politique de domaine
//! - erreurs.rs : classifications compilation / évaluation
//! - compile.rs : façade "compiler une fois, évaluer N fois"

pub mod compile;
pub mod erreurs;
pub mod eval;
pub mod jetons;
pub mod lexeur;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use compile::{compiler, ExpressionCompilee};
pub use erreurs::{ErreurCompile, ErreurEval};
pub use lexeur::Locale;
