// src/noyau/jetons.rs
//
// Taxonomie des jetons.
// - Jeton : unité atomique classifiée (opérateur, littéral, variable, constante, fonction)
// - Variable / Constante / Fonction : identités fermées, résolues par la table de noms
//
// Extensibilité : ajouter une fonction = une variante + une ligne dans TABLE_NOMS
// + un bras dans eval::appliquer_fonction. Rien d'autre ne change.

/// Variables reconnues. Une expression en référence AU PLUS une (voir lexeur).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Variable {
    X,
    Theta,
    T,
}

impl Variable {
    pub fn nom(self) -> &'static str {
        match self {
            Variable::X => "x",
            Variable::Theta => "theta",
            Variable::T => "t",
        }
    }
}

/// Constantes reconnues (valeurs fixes à l'évaluation).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constante {
    Pi,
    E,
}

impl Constante {
    pub fn nom(self) -> &'static str {
        match self {
            Constante::Pi => "pi",
            Constante::E => "e",
        }
    }

    pub fn valeur(self) -> f64 {
        match self {
            Constante::Pi => std::f64::consts::PI,
            Constante::E => std::f64::consts::E,
        }
    }
}

/// Fonctions unaires reconnues.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Abs,
    Sqrt,
    Log,
    Log10,
    Exp,
    Sinh,
    Cosh,
    Tanh,
    Asin,
    Acos,
    Atan,
    Ceil,
    Floor,
    Frac,
}

impl Fonction {
    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Abs => "abs",
            Fonction::Sqrt => "sqrt",
            Fonction::Log => "log",
            Fonction::Log10 => "log10",
            Fonction::Exp => "exp",
            Fonction::Sinh => "sinh",
            Fonction::Cosh => "cosh",
            Fonction::Tanh => "tanh",
            Fonction::Asin => "asin",
            Fonction::Acos => "acos",
            Fonction::Atan => "atan",
            Fonction::Ceil => "ceil",
            Fonction::Floor => "floor",
            Fonction::Frac => "frac",
        }
    }
}

/// Jeton : immuable une fois produit par le lexeur.
/// La charge numérique n'existe que pour Nombre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Jeton {
    Nombre(f64),
    Variable(Variable),
    Constante(Constante),
    Fonction(Fonction),

    Plus,
    Moins,
    Fois,
    Division,
    Puissance, // ^

    ParOuvrante,
    ParFermante,
}

/// Identité portée par un nom (résultat de la table).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Identite {
    Var(Variable),
    Const(Constante),
    Fonc(Fonction),
}

/// Table de résolution nom → identité.
/// Étendre le langage = ajouter une ligne ici (les consommateurs de jetons
/// classifient par variante, jamais par nom).
pub const TABLE_NOMS: &[(&str, Identite)] = &[
    // variables
    ("x", Identite::Var(Variable::X)),
    ("theta", Identite::Var(Variable::Theta)),
    ("t", Identite::Var(Variable::T)),
    // constantes
    ("pi", Identite::Const(Constante::Pi)),
    ("e", Identite::Const(Constante::E)),
    // fonctions
    ("sin", Identite::Fonc(Fonction::Sin)),
    ("cos", Identite::Fonc(Fonction::Cos)),
    ("tan", Identite::Fonc(Fonction::Tan)),
    ("abs", Identite::Fonc(Fonction::Abs)),
    ("sqrt", Identite::Fonc(Fonction::Sqrt)),
    ("log", Identite::Fonc(Fonction::Log)),
    ("log10", Identite::Fonc(Fonction::Log10)),
    ("exp", Identite::Fonc(Fonction::Exp)),
    ("sinh", Identite::Fonc(Fonction::Sinh)),
    ("cosh", Identite::Fonc(Fonction::Cosh)),
    ("tanh", Identite::Fonc(Fonction::Tanh)),
    ("asin", Identite::Fonc(Fonction::Asin)),
    ("acos", Identite::Fonc(Fonction::Acos)),
    ("atan", Identite::Fonc(Fonction::Atan)),
    ("ceil", Identite::Fonc(Fonction::Ceil)),
    ("floor", Identite::Fonc(Fonction::Floor)),
    ("frac", Identite::Fonc(Fonction::Frac)),
];

/// Résolution exacte (le lexeur normalise déjà en minuscules).
pub fn resoudre_nom(nom: &str) -> Option<Identite> {
    TABLE_NOMS
        .iter()
        .find(|(n, _)| *n == nom)
        .map(|(_, ident)| *ident)
}

/// Format utilitaire (debug/"démarche") : liste de jetons en texte.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    let mut out = Vec::with_capacity(jetons.len());
    for j in jetons {
        let s = match j {
            Jeton::Nombre(v) => format!("{v}"),
            Jeton::Variable(var) => var.nom().to_string(),
            Jeton::Constante(c) => c.nom().to_string(),
            Jeton::Fonction(f) => f.nom().to_string(),

            Jeton::Plus => "+".to_string(),
            Jeton::Moins => "-".to_string(),
            Jeton::Fois => "*".to_string(),
            Jeton::Division => "/".to_string(),
            Jeton::Puissance => "^".to_string(),

            Jeton::ParOuvrante => "(".to_string(),
            Jeton::ParFermante => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
