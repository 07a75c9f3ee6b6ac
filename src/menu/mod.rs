//! Static partner menu: callback identifier → screen.
//!
//! Nothing here touches Telegram; handlers turn a [`Screen`] into an inline
//! keyboard and decide whether to send or edit.

mod texts;

pub const CB_MAIN_MENU: &str = "main_menu";
pub const CB_ABOUT: &str = "menu_about";
pub const CB_CONDITIONS: &str = "menu_conditions";
pub const CB_CONDITIONS_CPA: &str = "conditions_cpa";
pub const CB_CONDITIONS_RS: &str = "conditions_rs";
pub const CB_CONDITIONS_HYBRID: &str = "conditions_hybrid";
pub const CB_CONTACTS: &str = "menu_contacts";
pub const CB_MATERIALS: &str = "menu_materials";
pub const CB_LANDINGS: &str = "materials_landings";
pub const CB_DEMOS: &str = "landings_demos";
pub const CB_FAQ: &str = "menu_faq";
pub const CB_STATS_30: &str = "stats_30";
pub const CB_STATS_7: &str = "stats_7";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuId {
    Main,
    About,
    Conditions,
    ConditionsCpa,
    ConditionsRs,
    ConditionsHybrid,
    Contacts,
    Materials,
    Landings,
    Demos,
    Faq,
    Stats30,
    Stats7,
}

impl MenuId {
    pub const ALL: [MenuId; 13] = [
        MenuId::Main,
        MenuId::About,
        MenuId::Conditions,
        MenuId::ConditionsCpa,
        MenuId::ConditionsRs,
        MenuId::ConditionsHybrid,
        MenuId::Contacts,
        MenuId::Materials,
        MenuId::Landings,
        MenuId::Demos,
        MenuId::Faq,
        MenuId::Stats30,
        MenuId::Stats7,
    ];

    pub fn from_callback(data: &str) -> Option<Self> {
        MenuId::ALL.into_iter().find(|id| id.callback() == data)
    }

    pub fn callback(self) -> &'static str {
        match self {
            MenuId::Main => CB_MAIN_MENU,
            MenuId::About => CB_ABOUT,
            MenuId::Conditions => CB_CONDITIONS,
            MenuId::ConditionsCpa => CB_CONDITIONS_CPA,
            MenuId::ConditionsRs => CB_CONDITIONS_RS,
            MenuId::ConditionsHybrid => CB_CONDITIONS_HYBRID,
            MenuId::Contacts => CB_CONTACTS,
            MenuId::Materials => CB_MATERIALS,
            MenuId::Landings => CB_LANDINGS,
            MenuId::Demos => CB_DEMOS,
            MenuId::Faq => CB_FAQ,
            MenuId::Stats30 => CB_STATS_30,
            MenuId::Stats7 => CB_STATS_7,
        }
    }

    pub fn screen(self) -> Screen {
        match self {
            MenuId::Main => main_screen(texts::MAIN_FROM_CALLBACK),
            MenuId::About => Screen::html(texts::ABOUT)
                .without_preview()
                .row(back("◀️ Back", CB_MAIN_MENU)),
            MenuId::Conditions => Screen::html(texts::CONDITIONS)
                .row(nav("💰 CPA", CB_CONDITIONS_CPA))
                .row(nav("📊 RS", CB_CONDITIONS_RS))
                .row(nav("🔄 Hybrid", CB_CONDITIONS_HYBRID))
                .row(back("◀️ Back", CB_MAIN_MENU)),
            MenuId::ConditionsCpa => Screen::html(texts::CONDITIONS_CPA)
                .row(back("◀️ Back to terms", CB_CONDITIONS)),
            MenuId::ConditionsRs => with_manager_deeplinks(Screen::html(texts::CONDITIONS_RS))
                .row(back("◀️ Back to terms", CB_CONDITIONS)),
            MenuId::ConditionsHybrid => {
                with_manager_deeplinks(Screen::html(texts::CONDITIONS_HYBRID))
                    .row(back("◀️ Back to terms", CB_CONDITIONS))
            }
            MenuId::Contacts => Screen::plain(texts::CONTACTS)
                .row(link("🚀 Message @makswincraft", "https://t.me/makswincraft"))
                .row(link("💼 Message @dosiTG", "https://t.me/dosiTG"))
                .row(link("🌟 Message @hugewinaffs", "https://t.me/hugewinaffs"))
                .row(back("◀️ Back", CB_MAIN_MENU)),
            MenuId::Materials => Screen::plain(texts::MATERIALS)
                .row(nav("🔗 Landings", CB_LANDINGS))
                .row(back("◀️ Back", CB_MAIN_MENU)),
            MenuId::Landings => Screen::plain(texts::LANDINGS)
                .row(link("🏠 Home (EN)", "https://wincraft.casino/"))
                .row(link("🇫🇷 Home (FR)", "https://www.wincraft.casino/fr"))
                .row(link("🎯 Sign up", "https://wincraft.casino/?modal=signup"))
                .row(link("🎰 Popular slots", "https://wincraft.casino/categories/games/popular"))
                .row(link("🎁 Promo / Bonuses", "https://wincraft.casino/promotions"))
                .row(link("🎡 Wheel of Fortune", "https://wincraft.casino/wheel-of-fortune"))
                .row(link("👧 Wheel of Fortune (Girl)", "https://wincraft.casino/wheel-of-fortune-girl"))
                .row(nav("🎮 Demo games", CB_DEMOS))
                .row(back("◀️ Back to materials", CB_MATERIALS)),
            MenuId::Demos => Screen::plain(texts::DEMOS)
                .row(link("📖 Book of Dead", "https://wincraft.casino/casino/games/12406?demo=true"))
                .row(link("⛰️ Gates of Olympus", "https://wincraft.casino/casino/games/20502?demo=true"))
                .row(link("⚔️ Zeus vs Hades", "https://wincraft.casino/casino/games/14475?demo=true"))
                .row(link("🏡 The Dog House", "https://wincraft.casino/casino/games/9535?demo=true"))
                .row(link("🍬 Sweet Bonanza", "https://wincraft.casino/casino/games/20504?demo=true"))
                .row(link("✋ Hand of Midas", "https://wincraft.casino/casino/games/20709?demo=true"))
                .row(back("◀️ Back to landings", CB_LANDINGS)),
            MenuId::Faq => Screen::plain(texts::FAQ).row(back("◀️ Back", CB_MAIN_MENU)),
            MenuId::Stats30 => Screen::html(texts::STATS_30).row(back("◀️ Back", CB_MAIN_MENU)),
            MenuId::Stats7 => Screen::html(texts::STATS_7).row(back("◀️ Back", CB_MAIN_MENU)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ButtonAction {
    Callback(&'static str),
    Url(&'static str),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub action: ButtonAction,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Screen {
    pub text: &'static str,
    pub html: bool,
    pub link_preview: bool,
    pub rows: Vec<Vec<Button>>,
}

impl Screen {
    fn plain(text: &'static str) -> Self {
        Self {
            text,
            html: false,
            link_preview: true,
            rows: Vec::new(),
        }
    }

    fn html(text: &'static str) -> Self {
        Self {
            html: true,
            ..Self::plain(text)
        }
    }

    fn without_preview(mut self) -> Self {
        self.link_preview = false;
        self
    }

    fn row(mut self, row: Vec<Button>) -> Self {
        self.rows.push(row);
        self
    }

    /// Every button that leads to another screen.
    #[cfg(test)]
    pub fn callbacks(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rows.iter().flatten().filter_map(|button| match button.action {
            ButtonAction::Callback(data) => Some(data),
            ButtonAction::Url(_) => None,
        })
    }
}

fn nav(label: &'static str, data: &'static str) -> Vec<Button> {
    vec![Button {
        label,
        action: ButtonAction::Callback(data),
    }]
}

fn back(label: &'static str, data: &'static str) -> Vec<Button> {
    nav(label, data)
}

fn link(label: &'static str, url: &'static str) -> Vec<Button> {
    vec![Button {
        label,
        action: ButtonAction::Url(url),
    }]
}

fn main_screen(text: &'static str) -> Screen {
    Screen::plain(text)
        .row(nav("📋 About the platform", CB_ABOUT))
        .row(nav("💼 Terms of cooperation", CB_CONDITIONS))
        .row(nav("📞 Support contacts", CB_CONTACTS))
        .row(nav("📚 Useful materials", CB_MATERIALS))
        .row(nav("❓ FAQ", CB_FAQ))
        .row(vec![
            Button {
                label: "📊 Stats: 30 days",
                action: ButtonAction::Callback(CB_STATS_30),
            },
            Button {
                label: "📈 Stats: 7 days",
                action: ButtonAction::Callback(CB_STATS_7),
            },
        ])
}

fn with_manager_deeplinks(screen: Screen) -> Screen {
    screen
        .row(link("💬 Message @makswincraft", "tg://resolve?domain=makswincraft"))
        .row(link("💬 Message @dosiTG", "tg://resolve?domain=dosiTG"))
        .row(link("💬 Message @hugewinaffs", "tg://resolve?domain=hugewinaffs"))
}

/// Main menu as sent in reply to `/start`.
pub fn start_screen() -> Screen {
    main_screen(texts::MAIN)
}

/// Screen for a menu callback; unknown identifiers get the fallback screen.
pub fn resolve(data: &str) -> Screen {
    match MenuId::from_callback(data) {
        Some(id) => id.screen(),
        None => unrecognized(),
    }
}

pub fn unrecognized() -> Screen {
    Screen::plain(texts::UNRECOGNIZED).row(back("🏠 Main menu", CB_MAIN_MENU))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_callback_ids_round_trip() {
        for id in MenuId::ALL {
            assert_eq!(MenuId::from_callback(id.callback()), Some(id));
        }
    }

    #[test]
    fn test_every_button_leads_to_a_known_screen() {
        let mut screens: Vec<Screen> = MenuId::ALL.iter().map(|id| id.screen()).collect();
        screens.push(start_screen());
        screens.push(unrecognized());

        for screen in &screens {
            for data in screen.callbacks() {
                assert!(
                    MenuId::from_callback(data).is_some(),
                    "dangling callback {:?} on screen {:?}",
                    data,
                    screen.text
                );
            }
        }
    }

    #[test]
    fn test_every_screen_but_main_has_a_way_back() {
        for id in MenuId::ALL.into_iter().filter(|id| *id != MenuId::Main) {
            assert!(id.screen().callbacks().count() > 0, "{:?} is a dead end", id);
        }
    }

    #[test]
    fn test_back_targets() {
        let last_callback = |id: MenuId| id.screen().callbacks().last();
        assert_eq!(last_callback(MenuId::ConditionsCpa), Some(CB_CONDITIONS));
        assert_eq!(last_callback(MenuId::Demos), Some(CB_LANDINGS));
        assert_eq!(last_callback(MenuId::Landings), Some(CB_MATERIALS));
        assert_eq!(last_callback(MenuId::Faq), Some(CB_MAIN_MENU));
    }

    #[test]
    fn test_unknown_callback_gets_fallback() {
        assert_eq!(resolve("no_such_screen"), unrecognized());
        assert_eq!(resolve(""), unrecognized());
        assert_eq!(resolve(CB_FAQ), MenuId::Faq.screen());
    }

    #[test]
    fn test_start_and_callback_main_share_buttons() {
        assert_eq!(start_screen().rows, MenuId::Main.screen().rows);
        assert_ne!(start_screen().text, MenuId::Main.screen().text);
    }

    #[test]
    fn test_about_disables_preview() {
        let about = MenuId::About.screen();
        assert!(about.html);
        assert!(!about.link_preview);
    }
}
