//! Equations sidebar for the orbital figure
//!
//! Lists the formulas evaluated for the displayed cross-section.

use egui::{Color32, Context, FontFamily, FontId, RichText};

/// Equation entry with label and formula
pub struct Equation {
    pub name: &'static str,
    pub formula: &'static str,
    pub description: &'static str,
}

/// Draw a styled equation sidebar
pub fn draw_equations_sidebar(
    ctx: &Context,
    title: &str,
    equations: &[Equation],
    variables: &[(&str, &str)],
) {
    egui::SidePanel::right("equations_panel")
        .min_width(260.0)
        .max_width(340.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(RichText::new(title).color(Color32::from_rgb(100, 200, 255)));
            });

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(5.0);

            ui.label(RichText::new("Equations").strong().color(Color32::from_rgb(255, 200, 100)));
            ui.add_space(5.0);

            for eq in equations {
                draw_equation(ui, eq);
                ui.add_space(8.0);
            }

            ui.add_space(10.0);
            ui.separator();
            ui.add_space(5.0);

            ui.label(RichText::new("Variables").strong().color(Color32::from_rgb(255, 200, 100)));
            ui.add_space(5.0);

            for (symbol, meaning) in variables {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(*symbol)
                            .color(Color32::from_rgb(150, 255, 150))
                            .font(FontId::new(14.0, FontFamily::Monospace)),
                    );
                    ui.label(RichText::new("=").color(Color32::GRAY));
                    ui.label(RichText::new(*meaning).color(Color32::LIGHT_GRAY));
                });
            }
        });
}

fn draw_equation(ui: &mut egui::Ui, eq: &Equation) {
    ui.group(|ui| {
        ui.label(RichText::new(eq.name).strong().color(Color32::WHITE));
        ui.label(
            RichText::new(eq.formula)
                .font(FontId::new(15.0, FontFamily::Monospace))
                .color(Color32::from_rgb(200, 220, 255)),
        );
        ui.label(RichText::new(eq.description).small().color(Color32::GRAY));
    });
}

pub const ORBITAL_EQUATIONS: &[Equation] = &[
    Equation {
        name: "Cross-section",
        formula: "ψ(x,z) = R_nl(r) Y_l^m(θ, 0)",
        description: "Evaluated in the x-z plane, φ = 0",
    },
    Equation {
        name: "Radial Part",
        formula: "R_nl = N e^(-ρ/2) ρ^l L_(n-l-1)^(2l+1)(ρ)",
        description: "ρ = 2r / (n a₀), generalized Laguerre",
    },
    Equation {
        name: "Radial Normalization",
        formula: "N = √((2/na₀)³ (n-l-1)! / (2n (n+l)!))",
        description: "∫ R² r² dr = 1",
    },
    Equation {
        name: "Angular Part",
        formula: "Y = (-1)^m K P_l^m(cos θ) cos(mφ)",
        description: "Real projection of e^(imφ)",
    },
    Equation {
        name: "Angular Normalization",
        formula: "K = √((2l+1)(l-|m|)! / (4π (l+|m|)!))",
        description: "Spherical harmonic constant",
    },
    Equation {
        name: "Probability Density",
        formula: "P = |ψ|², shown as √P",
        description: "Square root compresses the range",
    },
];

pub const ORBITAL_VARIABLES: &[(&str, &str)] = &[
    ("n", "Principal quantum number"),
    ("l", "Secondary quantum number (0 to n-1)"),
    ("m", "Magnetic quantum number (-l to l)"),
    ("r", "√(x² + z²)"),
    ("θ", "atan(z / x)"),
    ("a₀", "Scaled Bohr radius (pm)"),
];
