//! # Navigation Localization
//!
//! Static string tables for the navigation chrome in all eight supported
//! languages. Screen body copy is mostly English; the nav bar, back control,
//! and profile dropdown are fully localized, and a handful of Arabic strings
//! are inlined where the chrome flips to right-to-left.

use shared::dto::Language;

/// Localized strings for the navigation chrome
pub struct NavStrings {
    pub platform: &'static str,
    pub enterprise: &'static str,
    pub api: &'static str,
    pub resources: &'static str,
    pub sign_in: &'static str,
    pub sign_out: &'static str,
    pub switch_profile: &'static str,
    pub overview: &'static str,
    pub back: &'static str,
}

const ENGLISH: NavStrings = NavStrings {
    platform: "Platform",
    enterprise: "Enterprise",
    api: "API",
    resources: "Resources",
    sign_in: "Sign In",
    sign_out: "Sign out",
    switch_profile: "Sign in with a different profile",
    overview: "Overview",
    back: "Back",
};

const ARABIC: NavStrings = NavStrings {
    platform: "المنصة",
    enterprise: "المؤسسات",
    api: "البرمجة",
    resources: "المصادر",
    sign_in: "دخول",
    sign_out: "تسجيل الخروج",
    switch_profile: "الدخول بملف شخصي مختلف",
    overview: "نظرة عامة",
    back: "رجوع",
};

const FRENCH: NavStrings = NavStrings {
    platform: "Plateforme",
    enterprise: "Entreprise",
    api: "API",
    resources: "Ressources",
    sign_in: "Connexion",
    sign_out: "Déconnexion",
    switch_profile: "Changer de profil",
    overview: "Aperçu",
    back: "Retour",
};

const SPANISH: NavStrings = NavStrings {
    platform: "Plataforma",
    enterprise: "Empresa",
    api: "API",
    resources: "Recursos",
    sign_in: "Entrar",
    sign_out: "Cerrar sesión",
    switch_profile: "Cambiar de perfil",
    overview: "Resumen",
    back: "Volver",
};

const GERMAN: NavStrings = NavStrings {
    platform: "Plattform",
    enterprise: "Unternehmen",
    api: "API",
    resources: "Ressourcen",
    sign_in: "Anmelden",
    sign_out: "Abmelden",
    switch_profile: "Profil wechseln",
    overview: "Übersicht",
    back: "Zurück",
};

const AMHARIC: NavStrings = NavStrings {
    platform: "መድረክ",
    enterprise: "ድርጅት",
    api: "ኤፒአይ",
    resources: "ምንጮች",
    sign_in: "ግባ",
    sign_out: "ውጣ",
    switch_profile: "በሌላ መገለጫ ይግቡ",
    overview: "አጠቃላይ እይታ",
    back: "ተመለስ",
};

const CHINESE: NavStrings = NavStrings {
    platform: "平台",
    enterprise: "企业",
    api: "API接口",
    resources: "资源",
    sign_in: "登录",
    sign_out: "登出",
    switch_profile: "使用其他账号登录",
    overview: "总览",
    back: "返回",
};

const ITALIAN: NavStrings = NavStrings {
    platform: "Piattaforma",
    enterprise: "Azienda",
    api: "API",
    resources: "Risorse",
    sign_in: "Accedi",
    sign_out: "Disconnetti",
    switch_profile: "Cambia profilo",
    overview: "Panoramica",
    back: "Indietro",
};

/// Look up the nav string table for a language
pub const fn nav_strings(language: Language) -> &'static NavStrings {
    match language {
        Language::English => &ENGLISH,
        Language::Arabic => &ARABIC,
        Language::French => &FRENCH,
        Language::Spanish => &SPANISH,
        Language::German => &GERMAN,
        Language::Amharic => &AMHARIC,
        Language::Chinese => &CHINESE,
        Language::Italian => &ITALIAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_a_complete_table() {
        for language in Language::all() {
            let t = nav_strings(language);
            for s in [
                t.platform,
                t.enterprise,
                t.api,
                t.resources,
                t.sign_in,
                t.sign_out,
                t.switch_profile,
                t.overview,
                t.back,
            ] {
                assert!(!s.is_empty(), "empty nav string for {language:?}");
            }
        }
    }

    #[test]
    fn selected_translations() {
        assert_eq!(nav_strings(Language::Arabic).back, "رجوع");
        assert_eq!(nav_strings(Language::German).overview, "Übersicht");
        assert_eq!(nav_strings(Language::Chinese).api, "API接口");
        assert_eq!(nav_strings(Language::English).switch_profile, "Sign in with a different profile");
    }
}
