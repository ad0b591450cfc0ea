#[cfg(test)]
mod tests {
    use crate::app_theme::*;
    use crate::user_settings::ThemeMode;
    use iced::widget::button;
    use iced::{Background, Color, Theme};

    #[test]
    fn test_get_theme_dark_mode() {
        let theme = get_theme(&ThemeMode::Dark);
        let palette = theme.palette();

        assert_eq!(palette.background, Color::from_rgb(0.0, 0.0, 0.0));
        assert_eq!(palette.text, Color::from_rgb(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_get_theme_light_mode() {
        let theme = get_theme(&ThemeMode::Light);
        let palette = theme.palette();

        assert_eq!(palette.background, Color::from_rgb(0.95, 0.95, 0.97));
        assert_eq!(palette.text, Color::from_rgb(0.1, 0.1, 0.1));
    }

    #[test]
    fn test_primary_button_style_active_has_green_background() {
        let theme = Theme::Dark;
        let style = primary_button_style(&theme, button::Status::Active);

        if let Some(Background::Color(color)) = style.background {
            assert_eq!(color, Color::from_rgb(0.098, 0.529, 0.329));
        } else {
            panic!("Expected background color");
        }

        assert_eq!(style.text_color, Color::WHITE);
    }

    #[test]
    fn test_primary_button_style_hovered_is_lighter_green() {
        let theme = Theme::Dark;
        let style = primary_button_style(&theme, button::Status::Hovered);

        if let Some(Background::Color(color)) = style.background {
            assert_eq!(color, Color::from_rgb(0.122, 0.655, 0.408));
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn test_danger_button_style_active_has_red_background() {
        let theme = Theme::Dark;
        let style = danger_button_style(&theme, button::Status::Active);

        if let Some(Background::Color(color)) = style.background {
            assert_eq!(color, Color::from_rgb(0.9, 0.3, 0.3));
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn test_button_style_disabled_is_muted() {
        let theme = Theme::Dark;
        let style = primary_button_style(&theme, button::Status::Disabled);

        assert_eq!(style.text_color, Color::from_rgb(0.5, 0.5, 0.5));
    }

    #[test]
    fn test_selected_tab_is_filled_and_unselected_is_transparent() {
        let theme = Theme::Dark;

        let selected = tab_button_style(true)(&theme, button::Status::Active);
        assert!(selected.background.is_some());

        let unselected = tab_button_style(false)(&theme, button::Status::Active);
        assert!(unselected.background.is_none());
    }

    #[test]
    fn test_success_banner_uses_palette_success_color() {
        let theme = get_theme(&ThemeMode::Dark);
        let style = success_banner_style(&theme);

        assert_eq!(
            style.background,
            Some(Background::Color(theme.palette().success))
        );
        assert_eq!(style.text_color, Some(Color::WHITE));
    }

    #[test]
    fn test_error_notice_uses_palette_danger_color() {
        let theme = get_theme(&ThemeMode::Light);
        let style = error_notice_style(&theme);

        assert_eq!(
            style.background,
            Some(Background::Color(theme.palette().danger))
        );
    }
}
