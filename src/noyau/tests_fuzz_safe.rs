//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - sur entrée arbitraire : une valeur OU une erreur classifiée, jamais de panique
//! - invariants clés : RPN sans parenthèse, compile-une-fois == recompiler,
//!   la locale ne change jamais la valeur

use std::time::{Duration, Instant};

use super::jetons::Jeton;
use super::lexeur::lexer;
use super::rpn::en_rpn;
use super::{compiler, Locale};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(debut: Instant, max: Duration) {
    if debut.elapsed() > max {
        panic!("budget temps dépassé: {max:?}");
    }
}

/* ------------------------ Génération d'expressions valides (bornée) ------------------------ */

const FONCTIONS: &[&str] = &[
    "sin", "cos", "tan", "abs", "sqrt", "log", "exp", "atan", "floor",
];

fn gen_atome(rng: &mut Rng, variable: &str) -> String {
    match rng.pick(5) {
        0 => variable.to_string(),
        1 => "pi".to_string(),
        2 => "e".to_string(),
        3 => format!("{}", rng.pick(10)),
        _ => format!("{}.{}", rng.pick(10), rng.pick(100)),
    }
}

fn gen_expr(rng: &mut Rng, variable: &str, profondeur: u32) -> String {
    if profondeur == 0 {
        return gen_atome(rng, variable);
    }

    match rng.pick(4) {
        0 => gen_atome(rng, variable),
        1 => {
            let f = FONCTIONS[rng.pick(FONCTIONS.len() as u32) as usize];
            format!("{f}({})", gen_expr(rng, variable, profondeur - 1))
        }
        2 => {
            let op = ['+', '-', '*', '/', '^'][rng.pick(5) as usize];
            format!(
                "{}{op}{}",
                gen_expr(rng, variable, profondeur - 1),
                gen_expr(rng, variable, profondeur - 1)
            )
        }
        _ => {
            let interieur = gen_expr(rng, variable, profondeur - 1);
            if rng.coin() {
                format!("-({interieur})")
            } else {
                format!("({interieur})")
            }
        }
    }
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_expressions_valides_jamais_de_panique() {
    let debut = Instant::now();
    let mut rng = Rng::new(0xC0FFEE);

    for tour in 0..600 {
        let variable = ["x", "theta", "t"][(tour % 3) as usize];
        let expr = gen_expr(&mut rng, variable, 4);

        // la grammaire générée est valide : la compilation doit réussir
        let ec = compiler(&expr, Locale::Point)
            .unwrap_or_else(|e| panic!("expr générée {expr:?} rejetée: {e}"));

        // RPN : jamais de parenthèse en sortie
        let jetons = lexer(&expr, Locale::Point).unwrap();
        let rpn = en_rpn(&jetons).unwrap();
        assert!(!rpn
            .iter()
            .any(|j| matches!(j, Jeton::ParOuvrante | Jeton::ParFermante)));

        // valeur ou erreur classifiée, jamais de panique
        for i in 0..8 {
            let v = f64::from(i) * 0.7 - 2.0;
            let _ = ec.evaluer(v);
        }

        budget(debut, Duration::from_secs(20));
    }
}

#[test]
fn fuzz_compile_une_fois_deterministe() {
    let debut = Instant::now();
    let mut rng = Rng::new(42);

    for _ in 0..200 {
        let expr = gen_expr(&mut rng, "x", 3);
        let une_fois = compiler(&expr, Locale::Point).unwrap();

        for i in 0..5 {
            let v = f64::from(i) - 2.0;
            let fraiche = compiler(&expr, Locale::Point).unwrap();
            let (a, b) = (une_fois.evaluer(v), fraiche.evaluer(v));
            match (a, b) {
                (Ok(x), Ok(y)) => assert!(
                    x == y || (x.is_nan() && y.is_nan()),
                    "expr={expr:?} v={v}: {x} != {y}"
                ),
                (Err(ea), Err(eb)) => assert_eq!(ea, eb, "expr={expr:?} v={v}"),
                _ => panic!("expr={expr:?} v={v}: résultats divergents {a:?} / {b:?}"),
            }
        }

        budget(debut, Duration::from_secs(20));
    }
}

#[test]
fn fuzz_locale_equivalente_par_reecriture() {
    let debut = Instant::now();
    let mut rng = Rng::new(7);

    for _ in 0..200 {
        let point = gen_expr(&mut rng, "x", 3);
        let virgule = point.replace('.', ",");

        let p = compiler(&point, Locale::Point).unwrap();
        let v = compiler(&virgule, Locale::Virgule).unwrap();
        assert_eq!(p.rpn_txt(), v.rpn_txt(), "expr={point:?}");

        for i in 0..5 {
            let x = f64::from(i) * 0.43 - 1.0;
            assert_eq!(p.evaluer(x), v.evaluer(x), "expr={point:?} x={x}");
        }

        budget(debut, Duration::from_secs(20));
    }
}

#[test]
fn fuzz_entrees_arbitraires_sans_panique() {
    let debut = Instant::now();
    let mut rng = Rng::new(0xDEAD_BEEF);

    // soupe de caractères : le lexeur/traducteur doit rejeter proprement
    const SOUPE: &[char] = &[
        'x', 't', 'a', 'z', '1', '9', '0', '+', '-', '*', '/', '^', '(', ')', '.', ',', ' ', '%',
        'é',
    ];

    for _ in 0..2000 {
        let long = rng.pick(24) as usize;
        let entree: String = (0..long)
            .map(|_| SOUPE[rng.pick(SOUPE.len() as u32) as usize])
            .collect();

        // valeur ou erreur classifiée ; surtout : pas de panique
        if let Ok(ec) = compiler(&entree, Locale::Point) {
            let _ = ec.evaluer(1.0);
        }

        budget(debut, Duration::from_secs(20));
    }
}
