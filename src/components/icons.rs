//! Icon constants, resolved against the theme selected in `config.rs`.

use icondata::Icon;

use crate::config::IconTheme;

mod lucide {
    pub use icondata::LuMenu as Menu;
}

mod bootstrap {
    pub use icondata::BsList as Menu;
}

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(MENU, Menu);
