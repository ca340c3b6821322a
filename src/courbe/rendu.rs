// src/courbe/rendu.rs
//
// Rendus texte : CSV et SVG.
// Le SVG reprend la mise en page du traceur d'origine : fond blanc, grille
// majeure au pas de 1.0, tics mineurs au pas de 0.2, axes x=0/y=0 mis en
// valeur quand ils sont visibles, polyligne bleue.
//
// Les coordonnées non finies ou énormes (pôles traversés) sont exclues de la
// boîte englobante ET de la polyligne : c'est ici que la présentation écrête
// ce que l'évaluateur a volontairement laissé passer.

use std::fmt::Write;

use super::echantillon::DonneesCourbe;

const COULEUR_FOND: &str = "#ffffff";
const COULEUR_GRILLE_MAJEURE: &str = "#d0d0d0";
const COULEUR_GRILLE_MINEURE: &str = "#e8e8e8";
const COULEUR_AXES: &str = "#808080";
const COULEUR_COURBE: &str = "#0066cc";

/// Coordonnée exploitable pour l'affichage.
const COORD_MAX: f64 = 1e6;

/// Au-delà de cette plage, la grille au pas de 1.0 (et les tics à 0.2)
/// deviennent illisibles et font exploser la taille du fichier : on les saute.
/// Même seuil que le canvas egui.
const PLAGE_GRILLE_MAX: f64 = 60.0;

fn exploitable(x: f64, y: f64) -> bool {
    x.is_finite() && y.is_finite() && x.abs() <= COORD_MAX && y.abs() <= COORD_MAX
}

/// Boîte englobante des points exploitables : (minx, maxx, miny, maxy).
/// Plages dégénérées gonflées à 1.0 pour garder une transformation saine.
pub(crate) fn boite_englobante(points: &[(f64, f64)]) -> (f64, f64, f64, f64) {
    let mut minx = f64::INFINITY;
    let mut maxx = f64::NEG_INFINITY;
    let mut miny = f64::INFINITY;
    let mut maxy = f64::NEG_INFINITY;

    for &(x, y) in points {
        if !exploitable(x, y) {
            continue;
        }
        minx = minx.min(x);
        maxx = maxx.max(x);
        miny = miny.min(y);
        maxy = maxy.max(y);
    }

    // aucun point exploitable : boîte unité
    if minx > maxx {
        return (0.0, 1.0, 0.0, 1.0);
    }

    if maxx - minx < 0.01 {
        maxx = minx + 1.0;
    }
    if maxy - miny < 0.01 {
        maxy = miny + 1.0;
    }
    (minx, maxx, miny, maxy)
}

/// CSV : en-tête "x,y" puis un point par ligne (6 décimales).
pub fn rendu_csv(donnees: &DonneesCourbe) -> String {
    let mut out = String::from("x,y\n");
    for &(x, y) in &donnees.points {
        let _ = writeln!(out, "{x:.6},{y:.6}");
    }
    out
}

/// SVG autonome (chaîne complète), largeur × hauteur en pixels.
pub fn rendu_svg(donnees: &DonneesCourbe, titre: &str, largeur: u32, hauteur: u32) -> String {
    let canvas_l = f64::from(largeur);
    let canvas_h = f64::from(hauteur);

    // zone de tracé : 80 % du canvas, marges symétriques
    let trace_l = canvas_l * 0.8;
    let trace_h = canvas_h * 0.8;
    let marge_x = (canvas_l - trace_l) / 2.0;
    let marge_y = (canvas_h - trace_h) / 2.0;

    let (minx, maxx, miny, maxy) = boite_englobante(&donnees.points);
    let plage_x = maxx - minx;
    let plage_y = maxy - miny;

    // transformation affine données -> pixels (y inversé)
    let en_px = |x: f64| marge_x + (x - minx) * trace_l / plage_x;
    let en_py = |y: f64| (canvas_h - marge_y) - (y - miny) * trace_h / plage_y;

    let mut svg = String::new();
    let _ = writeln!(svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{largeur}" height="{hauteur}">"#
    );

    if !titre.is_empty() {
        let _ = writeln!(svg, "  <title>{}</title>", echapper(titre));
    }

    let _ = writeln!(
        svg,
        r#"  <rect width="{largeur}" height="{hauteur}" fill="{COULEUR_FOND}"/>"#
    );

    // grille majeure (pas de 1.0)
    let _ = writeln!(
        svg,
        r#"  <g stroke="{COULEUR_GRILLE_MAJEURE}" stroke-width="1">"#
    );
    if plage_x <= PLAGE_GRILLE_MAX {
        let mut ix = minx.floor();
        while ix <= maxx.ceil() {
            let _ = writeln!(
                svg,
                r#"    <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}"/>"#,
                en_px(ix),
                en_py(miny),
                en_px(ix),
                en_py(maxy)
            );
            ix += 1.0;
        }
    }
    if plage_y <= PLAGE_GRILLE_MAX {
        let mut iy = miny.floor();
        while iy <= maxy.ceil() {
            let _ = writeln!(
                svg,
                r#"    <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}"/>"#,
                en_px(minx),
                en_py(iy),
                en_px(maxx),
                en_py(iy)
            );
            iy += 1.0;
        }
    }
    let _ = writeln!(svg, "  </g>");

    // tics mineurs (pas de 0.2, en sautant les multiples de 1.0)
    let _ = writeln!(
        svg,
        r#"  <g stroke="{COULEUR_GRILLE_MINEURE}" stroke-width="0.5">"#
    );
    if plage_x <= PLAGE_GRILLE_MAX {
        let mut xt = (minx / 0.2).ceil() * 0.2;
        while xt <= maxx + 0.01 {
            if (xt - xt.round()).abs() >= 0.01 {
                let _ = writeln!(
                    svg,
                    r#"    <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}"/>"#,
                    en_px(xt),
                    en_py(miny),
                    en_px(xt),
                    en_py(maxy)
                );
            }
            xt += 0.2;
        }
    }
    if plage_y <= PLAGE_GRILLE_MAX {
        let mut yt = (miny / 0.2).ceil() * 0.2;
        while yt <= maxy + 0.01 {
            if (yt - yt.round()).abs() >= 0.01 {
                let _ = writeln!(
                    svg,
                    r#"    <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}"/>"#,
                    en_px(minx),
                    en_py(yt),
                    en_px(maxx),
                    en_py(yt)
                );
            }
            yt += 0.2;
        }
    }
    let _ = writeln!(svg, "  </g>");

    // axes mis en valeur s'ils traversent la boîte
    let axe_y_visible = minx <= 0.0 && maxx >= 0.0;
    let axe_x_visible = miny <= 0.0 && maxy >= 0.0;
    if axe_x_visible || axe_y_visible {
        let _ = writeln!(svg, r#"  <g stroke="{COULEUR_AXES}" stroke-width="2">"#);
        if axe_y_visible {
            let _ = writeln!(
                svg,
                r#"    <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}"/>"#,
                en_px(0.0),
                en_py(miny),
                en_px(0.0),
                en_py(maxy)
            );
        }
        if axe_x_visible {
            let _ = writeln!(
                svg,
                r#"    <line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}"/>"#,
                en_px(minx),
                en_py(0.0),
                en_px(maxx),
                en_py(0.0)
            );
        }
        let _ = writeln!(svg, "  </g>");
    }

    // la courbe elle-même
    let _ = write!(
        svg,
        r#"  <polyline fill="none" stroke="{COULEUR_COURBE}" stroke-width="2" points=""#
    );
    for &(x, y) in &donnees.points {
        if !exploitable(x, y) || x < minx || x > maxx || y < miny || y > maxy {
            continue;
        }
        let _ = write!(svg, "{:.2},{:.2} ", en_px(x), en_py(y));
    }
    let _ = writeln!(svg, r#""/>"#);

    let _ = writeln!(svg, "</svg>");
    svg
}

fn echapper(texte: &str) -> String {
    texte
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
