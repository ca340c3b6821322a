// src/noyau/rpn.rs
//
// Shunting-yard : suite infixe -> suite postfixe (RPN).
//
// Règles :
// - Précédence (croissante) : + - (gauche)  <  * / (gauche)  <  ^ (droite).
// - Fonction : reste sur la pile, "collée" à son argument parenthésé,
//   sortie juste après la parenthèse fermante correspondante.
// - Moins unaire : si '-' arrive quand on n'attend PAS une valeur, on injecte
//   un zéro : "-x" => "0 x -", et le moins est empilé sans dépiler (le zéro
//   est son opérande gauche adjacent). Conséquence assumée et verrouillée par
//   test : le moins unaire reste SOUS * / ^, donc -2^2 == -(2^2) == -4.
//
// La sortie ne contient jamais de parenthèse. Un opérateur sans opérande
// ("2+", "*2") est rejeté ICI, à la traduction : prec_valeur doit être vrai
// à l'arrivée d'un opérateur binaire et en fin de suite. Les arrangements de
// valeurs adjacentes qui survivent (ex: "2 3") sont rattrapés par le contrôle
// de pile de l'évaluateur.

use super::erreurs::ErreurCompile;
use super::jetons::Jeton;

fn precedence(j: &Jeton) -> i32 {
    match j {
        Jeton::Plus | Jeton::Moins => 1,
        Jeton::Fois | Jeton::Division => 2,
        Jeton::Puissance => 3,
        _ => 0,
    }
}

fn associative_droite(j: &Jeton) -> bool {
    matches!(j, Jeton::Puissance)
}

/// Dépile vers `sortie` tant que la précédence l'exige.
/// S'arrête sur '(' et ne traverse jamais une fonction.
fn depiler_selon_precedence(ops: &mut Vec<Jeton>, sortie: &mut Vec<Jeton>, jeton: &Jeton) {
    while let Some(sommet) = ops.last() {
        if matches!(sommet, Jeton::ParOuvrante | Jeton::Fonction(_)) {
            break;
        }

        let p_sommet = precedence(sommet);
        let p_jeton = precedence(jeton);

        let doit_sortir = if associative_droite(jeton) {
            p_sommet > p_jeton
        } else {
            p_sommet >= p_jeton
        };

        if !doit_sortir {
            break;
        }
        // sommet existe : le pop ne peut pas échouer
        sortie.push(ops.pop().unwrap());
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple :
///   jetons : [sin, (, pi, /, 2, )]
///   rpn    : [pi, 2, /, sin]
pub fn en_rpn(jetons: &[Jeton]) -> Result<Vec<Jeton>, ErreurCompile> {
    if jetons.is_empty() {
        return Err(ErreurCompile::Syntaxe);
    }

    let mut sortie: Vec<Jeton> = Vec::with_capacity(jetons.len());
    let mut ops: Vec<Jeton> = Vec::new();

    // "valeur" = un atome ou une expression fermée.
    // Sert à détecter le moins unaire.
    let mut prec_valeur = false;

    for jeton in jetons.iter().copied() {
        match jeton {
            Jeton::Nombre(_) | Jeton::Variable(_) | Jeton::Constante(_) => {
                sortie.push(jeton);
                prec_valeur = true;
            }

            Jeton::Fonction(_) => {
                ops.push(jeton);
                prec_valeur = false;
            }

            Jeton::ParOuvrante => {
                ops.push(jeton);
                prec_valeur = false;
            }

            Jeton::ParFermante => {
                // dépile jusqu'à la '(' correspondante
                let mut ouvrante_trouvee = false;
                while let Some(sommet) = ops.pop() {
                    if matches!(sommet, Jeton::ParOuvrante) {
                        ouvrante_trouvee = true;
                        break;
                    }
                    sortie.push(sommet);
                }
                if !ouvrante_trouvee {
                    return Err(ErreurCompile::Syntaxe);
                }

                // si une fonction est au sommet, elle sort avec son argument
                if let Some(Jeton::Fonction(_)) = ops.last() {
                    sortie.push(ops.pop().unwrap());
                }

                prec_valeur = true;
            }

            Jeton::Moins => {
                if prec_valeur {
                    // moins binaire : traitement normal
                    depiler_selon_precedence(&mut ops, &mut sortie, &jeton);
                } else {
                    // moins unaire : injecte 0 comme opérande gauche, SANS dépiler
                    // (le zéro est adjacent, rien ne doit s'intercaler avant lui)
                    sortie.push(Jeton::Nombre(0.0));
                }
                ops.push(jeton);
                prec_valeur = false;
            }

            Jeton::Plus | Jeton::Fois | Jeton::Division | Jeton::Puissance => {
                // opérande gauche manquante ("*2", "2+*3") : rejet immédiat
                if !prec_valeur {
                    return Err(ErreurCompile::Syntaxe);
                }
                depiler_selon_precedence(&mut ops, &mut sortie, &jeton);
                ops.push(jeton);
                prec_valeur = false;
            }
        }
    }

    // opérande droite manquante ("2+", "sin(") : la suite ne se termine pas
    // sur une valeur
    if !prec_valeur {
        return Err(ErreurCompile::Syntaxe);
    }

    // vide la pile : une '(' restante = parenthèses non fermées
    while let Some(op) = ops.pop() {
        if matches!(op, Jeton::ParOuvrante) {
            return Err(ErreurCompile::Syntaxe);
        }
        sortie.push(op);
    }

    Ok(sortie)
}
