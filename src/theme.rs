use crate::storage;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Theme {
        if value == "dark" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

pub fn load_theme() -> Theme {
    match storage::read(storage::THEME_KEY) {
        Some(value) => Theme::from_str(&value),
        None => Theme::Light,
    }
}

// persists the choice and flips the `dark` class the stylesheet keys off
pub fn apply_theme(theme: Theme) {
    storage::write(storage::THEME_KEY, theme.as_str());
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let Some(root) = document.document_element() {
                let class_list = root.class_list();
                let _ = match theme {
                    Theme::Dark => class_list.add_1("dark"),
                    Theme::Light => class_list.remove_1("dark"),
                };
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_round_trips_through_storage_strings() {
        assert_eq!(Theme::from_str(Theme::Light.as_str()), Theme::Light);
        assert_eq!(Theme::from_str(Theme::Dark.as_str()), Theme::Dark);
    }

    #[test]
    fn unknown_values_fall_back_to_light() {
        assert_eq!(Theme::from_str(""), Theme::Light);
        assert_eq!(Theme::from_str("solarized"), Theme::Light);
    }

    #[test]
    fn toggling_alternates() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }
}
