// src/noyau/compile.rs
//
// Façade du pipeline : lexer -> en_rpn, une seule fois par expression.
// Le résultat (ExpressionCompilee) se réévalue ensuite à volonté, une liaison
// de variable par appel — c'est tout l'intérêt de séparer compilation et
// évaluation quand on échantillonne des milliers de points.

use super::erreurs::{ErreurCompile, ErreurEval};
use super::eval::evaluer_rpn;
use super::jetons::{format_jetons, Jeton, Variable};
use super::lexeur::{lexer, Locale};
use super::rpn::en_rpn;

/// Expression compilée : RPN + variable libre + textes de démarche.
#[derive(Clone, Debug)]
pub struct ExpressionCompilee {
    rpn: Vec<Jeton>,
    variable: Option<Variable>,
    jetons_txt: String,
    rpn_txt: String,
}

/// Compile une expression : tout-ou-rien, aucune suite partielle en erreur.
pub fn compiler(texte: &str, locale: Locale) -> Result<ExpressionCompilee, ErreurCompile> {
    let jetons = lexer(texte, locale)?;
    let jetons_txt = format_jetons(&jetons);

    // Le lexeur garantit déjà l'exclusivité : première occurrence = identité liée.
    let variable = jetons.iter().find_map(|j| match j {
        Jeton::Variable(v) => Some(*v),
        _ => None,
    });

    let rpn = en_rpn(&jetons)?;
    let rpn_txt = format_jetons(&rpn);

    Ok(ExpressionCompilee {
        rpn,
        variable,
        jetons_txt,
        rpn_txt,
    })
}

impl ExpressionCompilee {
    /// Évalue avec une liaison pour la variable libre (ignorée si l'expression
    /// n'en a pas). Pure : appelable autant de fois qu'on veut.
    pub fn evaluer(&self, valeur: f64) -> Result<f64, ErreurEval> {
        evaluer_rpn(&self.rpn, valeur)
    }

    /// Variable libre de l'expression, s'il y en a une.
    pub fn variable(&self) -> Option<Variable> {
        self.variable
    }

    /// Démarche : jetons en texte (affichage UI).
    pub fn jetons_txt(&self) -> &str {
        &self.jetons_txt
    }

    /// Démarche : RPN en texte (affichage UI).
    pub fn rpn_txt(&self) -> &str {
        &self.rpn_txt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_et_evalue() {
        let ec = compiler("sin(x)*2+x", Locale::Point).unwrap();
        assert_eq!(ec.variable(), Some(Variable::X));
        assert_eq!(ec.rpn_txt(), "x sin 2 * x +");
        assert!((ec.evaluer(1.0).unwrap() - 2.682_941_969_615_793).abs() < 1e-9);
    }

    #[test]
    fn sans_variable() {
        let ec = compiler("2+3*4", Locale::Point).unwrap();
        assert_eq!(ec.variable(), None);
        assert_eq!(ec.evaluer(0.0).unwrap(), 14.0);
        assert_eq!(ec.evaluer(1000.0).unwrap(), 14.0);
    }

    #[test]
    fn compilation_en_erreur_ne_rend_rien() {
        assert!(compiler("", Locale::Point).is_err());
        assert!(compiler("sin(x))", Locale::Point).is_err());
        assert!(compiler("x+theta", Locale::Point).is_err());
        // opérateur en bout de suite : erreur de compilation, pas d'éval
        assert!(compiler("2+", Locale::Point).is_err());
    }

    #[test]
    fn transparence_compile_une_fois() {
        // compiler une fois + évaluer N fois == recompiler à chaque liaison
        let une_fois = compiler("x^2 - 3*x + 1/x", Locale::Point).unwrap();
        for i in 1..=20 {
            let v = f64::from(i) * 0.37;
            let fraiche = compiler("x^2 - 3*x + 1/x", Locale::Point).unwrap();
            assert_eq!(une_fois.evaluer(v), fraiche.evaluer(v));
        }
    }

    #[test]
    fn locale_ne_change_que_le_lexage() {
        let p = compiler("2.5*x+1.75", Locale::Point).unwrap();
        let v = compiler("2,5*x+1,75", Locale::Virgule).unwrap();
        assert_eq!(p.rpn_txt(), v.rpn_txt());
        for i in 0..10 {
            let x = f64::from(i) * 0.5 - 2.0;
            assert_eq!(p.evaluer(x), v.evaluer(x));
        }
    }
}
