//! # Pricing Cards
//!
//! Three-tier pricing grid with the monthly/yearly billing toggle. Prices
//! are converted into the selected display currency at the fixed demo
//! rates. Selecting the free tier applies immediately; the paid tiers
//! stage a checkout intent and hand off to the checkout screen.

use crate::app::{App, AppState, PaidPlan};
use crate::ui::theme::{SamaColors, Theme};
use crate::ui::widgets::forms;
use egui;
use shared::dto::UserRole;

struct PlanCard {
    name: &'static str,
    blurb: &'static str,
    role: UserRole,
    plan: Option<PaidPlan>,
    features: &'static [&'static str],
    cta: &'static str,
    highlight: bool,
}

const PLANS: [PlanCard; 3] = [
    PlanCard {
        name: "Free",
        blurb: "Kick the tires on a single vehicle.",
        role: UserRole::Free,
        plan: None,
        features: &[
            "5 scans per month",
            "Standard damage grading",
            "7-day scan history",
            "Community support",
        ],
        cta: "Get started",
        highlight: false,
    },
    PlanCard {
        name: "Pro",
        blurb: "For body shops and appraisers.",
        role: UserRole::Pro,
        plan: Some(PaidPlan::Pro),
        features: &[
            "Unlimited scans",
            "Priority processing",
            "Export-ready reports",
            "Email support",
        ],
        cta: "Upgrade to Pro",
        highlight: true,
    },
    PlanCard {
        name: "Expert",
        blurb: "Fleet-scale auditing and APIs.",
        role: UserRole::Expert,
        plan: Some(PaidPlan::Expert),
        features: &[
            "Everything in Pro",
            "Fleet audit workflows",
            "Full API access",
            "Dedicated specialist",
        ],
        cta: "Go Expert",
        highlight: false,
    },
];

/// Render the pricing section body: cadence toggle plus the plan grid
pub fn render_pricing(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let colors = Theme::sama_colors();

    let mut yearly = state.billing_yearly;
    if ui.checkbox(&mut yearly, "Bill yearly (2 months free)").changed() {
        app.state.write().billing_yearly = yearly;
    }
    ui.add_space(16.0);

    ui.columns(3, |columns| {
        for (column, card) in columns.iter_mut().zip(PLANS.iter()) {
            render_plan_card(column, state, app, card, yearly, &colors);
        }
    });
}

fn render_plan_card(
    ui: &mut egui::Ui,
    state: &AppState,
    app: &mut App,
    card: &PlanCard,
    yearly: bool,
    colors: &SamaColors,
) {
    let stroke = if card.highlight {
        egui::Stroke::new(1.5, colors.accent_soft)
    } else {
        egui::Stroke::new(1.0, colors.border)
    };

    egui::Frame::group(ui.style())
        .fill(colors.surface)
        .stroke(stroke)
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.set_min_height(300.0);
            ui.vertical(|ui| {
                if card.highlight {
                    forms::render_eyebrow(ui, "Most popular", colors);
                }
                ui.label(egui::RichText::new(card.name).size(20.0).strong());
                forms::render_hint(ui, card.blurb, colors);
                ui.add_space(8.0);

                let usd = card.plan.map(|plan| plan.price_usd(yearly)).unwrap_or(0.0);
                let cadence = if yearly { "/yr" } else { "/mo" };
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(state.prefs.currency.format_amount(usd))
                            .size(28.0)
                            .strong(),
                    );
                    ui.label(egui::RichText::new(cadence).color(colors.text_dim));
                });

                ui.add_space(8.0);
                for feature in card.features {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new("•").color(colors.accent_soft));
                        ui.label(egui::RichText::new(*feature).size(13.0));
                    });
                }
                ui.add_space(12.0);

                let is_current = state
                    .session
                    .as_ref()
                    .map(|profile| profile.role == card.role)
                    .unwrap_or(false);
                if is_current {
                    ui.add_enabled(
                        false,
                        egui::Button::new("Current plan").min_size(egui::vec2(150.0, 32.0)),
                    );
                    return;
                }

                let clicked = if card.highlight {
                    forms::render_primary_button(ui, card.cta, colors, Some(egui::vec2(150.0, 32.0)))
                        .clicked()
                } else {
                    ui.add(egui::Button::new(card.cta).min_size(egui::vec2(150.0, 32.0)))
                        .clicked()
                };
                if clicked {
                    match card.plan {
                        Some(plan) => app.handle_checkout_start(plan, yearly),
                        None => app.handle_plan_upgrade(card.role, yearly),
                    }
                }
            });
        });
}
