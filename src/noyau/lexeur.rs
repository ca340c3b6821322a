// src/noyau/lexeur.rs
//
// Lexeur : chaîne brute -> suite ordonnée de jetons.
// - Marque décimale configurable (point ou virgule), passée EXPLICITEMENT
//   à chaque appel : pas d'état global, lexages concurrents sûrs.
// - Littéraux gloutons : partie entière + marque + partie fractionnaire,
//   pas de notation exposant.
// - Identifiants gloutons [a-z]+ (normalisés en minuscules), résolus par la
//   table de noms — identifiant inconnu = échec.
// - Invariant d'exclusivité : AU PLUS une identité de variable par expression,
//   vérifié au fil de l'eau (pas de post-passe).
//
// Tout-ou-rien : aucune suite partielle ne sort en cas d'erreur.

use super::erreurs::ErreurCompile;
use super::jetons::{resoudre_nom, Identite, Jeton, Variable};

/// Convention de marque décimale pour les littéraux.
/// N'affecte QUE le lexage, jamais la traduction ni l'évaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    /// 3.14 (convention C/EN)
    #[default]
    Point,
    /// 3,14 (FR, PT-BR, DE)
    Virgule,
}

impl Locale {
    pub fn marque(self) -> char {
        match self {
            Locale::Point => '.',
            Locale::Virgule => ',',
        }
    }
}

/// Tokenize une expression en jetons.
pub fn lexer(texte: &str, locale: Locale) -> Result<Vec<Jeton>, ErreurCompile> {
    let marque = locale.marque();
    let chars: Vec<char> = texte.chars().collect();
    let mut out: Vec<Jeton> = Vec::new();
    let mut i: usize = 0;

    // Exclusivité : la première variable rencontrée "verrouille" l'expression.
    let mut variable_liee: Option<Variable> = None;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Opérateurs et parenthèses (un caractère chacun)
        match c {
            '(' => {
                out.push(Jeton::ParOuvrante);
                i += 1;
                continue;
            }
            ')' => {
                out.push(Jeton::ParFermante);
                i += 1;
                continue;
            }
            '+' => {
                out.push(Jeton::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Jeton::Moins);
                i += 1;
                continue;
            }
            '*' => {
                out.push(Jeton::Fois);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Jeton::Division);
                i += 1;
                continue;
            }
            '^' => {
                out.push(Jeton::Puissance);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Littéral numérique : chiffres, puis au plus une marque, puis chiffres.
        if c.is_ascii_digit() || c == marque {
            let mut brut = String::new();

            while i < chars.len() && chars[i].is_ascii_digit() {
                brut.push(chars[i]);
                i += 1;
            }
            if i < chars.len() && chars[i] == marque {
                brut.push('.');
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    brut.push(chars[i]);
                    i += 1;
                }
            }

            // Marque seule ("." ou ",") : littéral malformé.
            if brut == "." {
                return Err(ErreurCompile::Syntaxe);
            }

            let valeur: f64 = brut.parse().map_err(|_| ErreurCompile::Syntaxe)?;
            out.push(Jeton::Nombre(valeur));
            continue;
        }

        // Identifiant : suite alphabétique maximale, minuscules, puis chiffres
        // autorisés en fin de nom (log10).
        if c.is_ascii_alphabetic() {
            let debut = i;
            i += 1;
            while i < chars.len() && chars[i].is_ascii_alphanumeric() {
                i += 1;
            }
            let mot: String = chars[debut..i].iter().collect::<String>().to_lowercase();

            match resoudre_nom(&mot) {
                Some(Identite::Var(v)) => {
                    // Exclusivité, vérifiée incrémentalement.
                    match variable_liee {
                        None => variable_liee = Some(v),
                        Some(deja) if deja != v => {
                            return Err(ErreurCompile::VariablesMelangees)
                        }
                        Some(_) => {}
                    }
                    out.push(Jeton::Variable(v));
                }
                Some(Identite::Const(cst)) => out.push(Jeton::Constante(cst)),
                Some(Identite::Fonc(f)) => out.push(Jeton::Fonction(f)),
                None => {
                    // Classification de l'inconnu : suivi d'une '(' => fonction.
                    let mut k = i;
                    while k < chars.len() && chars[k].is_whitespace() {
                        k += 1;
                    }
                    return if k < chars.len() && chars[k] == '(' {
                        Err(ErreurCompile::FonctionInconnue(mot))
                    } else {
                        Err(ErreurCompile::VariableInconnue(mot))
                    };
                }
            }
            continue;
        }

        // Tout autre caractère : échec.
        return Err(ErreurCompile::Syntaxe);
    }

    Ok(out)
}
