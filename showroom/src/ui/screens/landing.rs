//! # Landing Screen
//!
//! The marketing page: hero, sponsor strip, pricing, and the
//! device-agnostic capture section with its fleet-audit quote card.
//!
//! This screen consumes the staged deferred-scroll target. When the
//! pricing timer matures the screen scrolls itself to the pricing heading
//! on its next frame.

use crate::app::{App, AppState, SectionAnchor};
use crate::ui::theme::{SamaColors, Theme};
use crate::ui::widgets::{forms, pricing};
use egui;
use shared::dto::{Language, TextDirection};

/// Fleet brands on the sponsor strip
const SPONSORS: [&str; 6] = [
    "EuroFleet",
    "Northwind Logistics",
    "Apex Rentals",
    "DriveSure",
    "VeloMotors",
    "TransContinental",
];

/// Localized copy for the device-agnostic section. Only four languages
/// carry translations here; the rest fall back to English, same as the
/// marketing site.
struct TechCopy {
    heading: &'static str,
    body: &'static str,
    bullets: [&'static str; 4],
}

fn tech_copy(language: Language) -> TechCopy {
    match language {
        Language::Arabic => TechCopy {
            heading: "ذكاء مستقل عن الجهاز",
            body: "سواء كنت تستخدم هاتفًا ذكيًا أو نظارات ميتا أو مستشعرات الواقع المعزز الصناعية، فإن خط معالجة التقاط SAMA يجرد الأجهزة. الذكاء الاصطناعي هو الثابت، وجهازك هو العدسة.",
            bullets: [
                "تحليل عمق الإطار تلو الإطار آليًا",
                "تراكبات أضرار في الوقت الفعلي لأجهزة AR",
                "كشف الخدوش بدقة تحت المليمتر",
                "مزامنة سحابية فورية عبر الأنظمة",
            ],
        },
        Language::Amharic => TechCopy {
            heading: "ከመሣሪያ ነፃ የሆነ ብልህነት",
            body: "ስማርትፎን ፣ ሜታ ግላስ ወይም የኢንዱስትሪ ኤአር ሴንሰሮችን እየተጠቀሙ ይሁኑ ፣ የ SAMA ቀረጻ ሂደት መሣሪያውን ነፃ ያደርገዋል። AI ቋሚ ነው ፣ መሣሪያዎ ሌንሱ ነው።",
            bullets: [
                "አውቶማቲክ የክፈፍ-በ-ክፈፍ ጥልቀት ትንተና",
                "ለኤአር መሣሪያዎች የእውነተኛ ጊዜ ጉዳት ተደራቢዎች",
                "ከሚሊሜትር በታች የጭረት ምርመራ",
                "ፈጣን የደመና ማመሳሰል",
            ],
        },
        Language::Chinese => TechCopy {
            heading: "独立于设备的智能",
            body: "无论您使用的是智能手机、Meta眼镜还是工业增强现实传感器，SAMA的采集流水线都能抽离硬件。AI是核心，您的设备只是镜头。",
            bullets: [
                "自动逐帧深度分析",
                "AR设备的实时损坏叠加",
                "亚毫米级划痕检测",
                "即时跨平台云同步",
            ],
        },
        Language::Italian => TechCopy {
            heading: "Intelligenza Indipendente dal Dispositivo",
            body: "Che tu stia utilizzando uno smartphone, occhiali Meta o sensori AR industriali, la pipeline di acquisizione di SAMA astrae l'hardware. L'AI è la costante, il tuo dispositivo è l'obiettivo.",
            bullets: [
                "Analisi automatica della profondità frame per frame",
                "Overlay dei danni in tempo reale per dispositivi AR",
                "Rilevamento graffi sub-millimetrico",
                "Sincronizzazione cloud istantanea tra piattaforme",
            ],
        },
        _ => TechCopy {
            heading: "Device-Agnostic Intelligence",
            body: "Whether you're using a smartphone, Meta Glass, or industrial AR sensors, SAMA's capture pipeline abstracts the hardware. AI is the constant, your device is the lens.",
            bullets: [
                "Automated frame-by-frame depth analysis",
                "Real-time damage overlays for AR devices",
                "Sub-millimeter scratch detection",
                "Instant cross-platform cloud synchronization",
            ],
        },
    }
}

/// Render the landing page
pub fn render(ui: &mut egui::Ui, state: &AppState, app: &mut App) {
    let colors = Theme::sama_colors();
    let rtl = state.prefs.language.direction() == TextDirection::RightToLeft;
    let scroll_target = app.take_pending_scroll();

    render_hero(ui, app, &colors);

    ui.add_space(40.0);
    render_sponsor_strip(ui, &colors);
    ui.add_space(40.0);
    ui.separator();
    ui.add_space(24.0);

    // Pricing section; the heading doubles as the deferred-scroll anchor
    let heading = ui
        .vertical_centered(|ui| {
            forms::render_eyebrow(ui, "Pricing", &colors);
            ui.label(
                egui::RichText::new("Plans for every fleet")
                    .size(30.0)
                    .strong(),
            )
        })
        .inner;
    if scroll_target == Some(SectionAnchor::Pricing) {
        heading.scroll_to_me(Some(egui::Align::Min));
    }
    ui.add_space(12.0);
    pricing::render_pricing(ui, state, app);

    ui.add_space(40.0);
    ui.separator();
    ui.add_space(24.0);

    render_tech_section(ui, state, rtl, &colors);
    ui.add_space(48.0);
}

fn render_hero(ui: &mut egui::Ui, app: &mut App, colors: &SamaColors) {
    ui.add_space(56.0);
    ui.vertical_centered(|ui| {
        forms::render_eyebrow(ui, "AI vehicle inspection", colors);
        ui.add_space(6.0);
        ui.label(
            egui::RichText::new("Scan damage in seconds,")
                .size(40.0)
                .strong(),
        );
        ui.label(
            egui::RichText::new("not days.")
                .size(40.0)
                .strong()
                .color(colors.accent_soft),
        );
        ui.add_space(12.0);
        ui.label(
            egui::RichText::new(
                "Point any camera at a vehicle. SAMA grades the damage, writes the findings, and files the report.",
            )
            .size(15.0)
            .color(colors.text_dim),
        );
        ui.add_space(20.0);

        // Gated: signed-out visitors get the sign-in modal instead
        if forms::render_primary_button(ui, "Start scanning", colors, Some(egui::vec2(180.0, 42.0)))
            .clicked()
        {
            app.handle_navigate(crate::app::Screen::Capture);
        }
        ui.add_space(6.0);
        if forms::render_ghost_button(ui, "See pricing", colors).clicked() {
            app.handle_navigate_to_pricing();
        }
    });
}

fn render_sponsor_strip(ui: &mut egui::Ui, colors: &SamaColors) {
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new("TRUSTED ACROSS THE FLEET INDUSTRY")
                .size(10.0)
                .strong()
                .color(colors.text_dim),
        );
        ui.add_space(10.0);
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 28.0;
            for sponsor in SPONSORS {
                ui.label(
                    egui::RichText::new(sponsor)
                        .size(15.0)
                        .strong()
                        .color(colors.text_dim),
                );
            }
        });
    });
}

fn render_tech_section(ui: &mut egui::Ui, state: &AppState, rtl: bool, colors: &SamaColors) {
    let copy = tech_copy(state.prefs.language);
    let align = if rtl { egui::Align::Max } else { egui::Align::Min };

    ui.columns(2, |columns| {
        let (text_col, card_col) = if rtl { (1, 0) } else { (0, 1) };

        columns[text_col].with_layout(egui::Layout::top_down(align), |ui| {
            ui.label(egui::RichText::new(copy.heading).size(28.0).strong());
            ui.add_space(10.0);
            ui.label(egui::RichText::new(copy.body).size(14.0).color(colors.text_dim));
            ui.add_space(14.0);
            for bullet in copy.bullets {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("⚡").color(colors.accent_soft));
                    ui.label(egui::RichText::new(bullet).size(14.0).strong());
                });
            }
        });

        columns[card_col].with_layout(egui::Layout::top_down(align), |ui| {
            egui::Frame::group(ui.style())
                .fill(colors.surface)
                .stroke(egui::Stroke::new(1.0, colors.border))
                .corner_radius(egui::CornerRadius::same(14))
                .inner_margin(egui::Margin::same(18))
                .show(ui, |ui| {
                    ui.set_max_width(340.0);
                    forms::render_eyebrow(ui, "SAMA core API", colors);
                    ui.add_space(6.0);
                    ui.label(
                        egui::RichText::new("\"99.8% consistency across fleet audits.\"")
                            .size(17.0)
                            .strong()
                            .italics(),
                    );
                    ui.add_space(4.0);
                    forms::render_hint(ui, "Chief Logistics Officer, EuroFleet", colors);
                });
        });
    });
}
