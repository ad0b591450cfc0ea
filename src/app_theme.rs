use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

use crate::user_settings::ThemeMode;

pub fn get_theme(mode: &ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::custom(
            "Dark".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.0, 0.0, 0.0),
                text: Color::from_rgb(1.0, 1.0, 1.0),
                primary: Color::from_rgb(0.4, 0.6, 1.0),
                success: Color::from_rgb(0.2, 0.9, 0.4),
                danger: Color::from_rgb(1.0, 0.3, 0.3),
                warning: Color::from_rgb(1.0, 0.7, 0.0),
            },
        ),
        ThemeMode::Light => Theme::custom(
            "Light".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.95, 0.95, 0.97),
                text: Color::from_rgb(0.1, 0.1, 0.1),
                primary: Color::from_rgb(0.2, 0.4, 0.9),
                success: Color::from_rgb(0.1, 0.7, 0.3),
                danger: Color::from_rgb(0.9, 0.2, 0.2),
                warning: Color::from_rgb(0.9, 0.6, 0.0),
            },
        ),
    }
}

fn solid_button_style(
    active: Color,
    hovered: Color,
    pressed: Color,
    status: button::Status,
) -> button::Style {
    match status {
        button::Status::Active => button::Style {
            background: Some(Background::Color(active)),
            text_color: Color::WHITE,
            border: Border {
                color: active,
                width: 2.0,
                radius: 8.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
                offset: Vector::new(0.0, 4.0),
                blur_radius: 8.0,
            },
            snap: false,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(hovered)),
            text_color: Color::WHITE,
            border: Border {
                color: hovered,
                width: 2.0,
                radius: 8.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(active.r, active.g, active.b, 0.4),
                offset: Vector::new(0.0, 6.0),
                blur_radius: 12.0,
            },
            snap: false,
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(pressed)),
            text_color: Color::WHITE,
            border: Border {
                color: pressed,
                width: 2.0,
                radius: 8.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.2),
                offset: Vector::new(0.0, 2.0),
                blur_radius: 4.0,
            },
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color::from_rgb(0.3, 0.3, 0.3))),
            text_color: Color::from_rgb(0.5, 0.5, 0.5),
            border: Border {
                color: Color::from_rgb(0.4, 0.4, 0.4),
                width: 2.0,
                radius: 8.0.into(),
            },
            shadow: Shadow::default(),
            snap: false,
        },
    }
}

/// Green "Download PNG" button.
pub fn primary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    solid_button_style(
        Color::from_rgb(0.098, 0.529, 0.329),
        Color::from_rgb(0.122, 0.655, 0.408),
        Color::from_rgb(0.078, 0.420, 0.263),
        status,
    )
}

/// Red "Clear" button.
pub fn danger_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    solid_button_style(
        Color::from_rgb(0.9, 0.3, 0.3),
        Color::from_rgb(1.0, 0.4, 0.4),
        Color::from_rgb(0.8, 0.2, 0.2),
        status,
    )
}

/// Tab strip buttons; the selected tab gets the filled treatment.
pub fn tab_button_style(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let palette = theme.palette();

        if selected {
            solid_button_style(
                Color::from_rgb(0.25, 0.35, 0.75),
                Color::from_rgb(0.30, 0.42, 0.85),
                Color::from_rgb(0.20, 0.28, 0.62),
                status,
            )
        } else {
            button::Style {
                background: None,
                text_color: palette.text,
                border: Border {
                    color: Color::from_rgba(0.5, 0.5, 0.5, 0.5),
                    width: 1.0,
                    radius: 8.0.into(),
                },
                shadow: Shadow::default(),
                snap: false,
            }
        }
    }
}

/// Blocking notice shown when an export cannot proceed.
pub fn error_notice_style(theme: &Theme) -> container::Style {
    let palette = theme.palette();

    container::Style {
        text_color: Some(Color::WHITE),
        background: Some(Background::Color(palette.danger)),
        border: Border {
            color: palette.danger,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

/// Banner shown after a successful export.
pub fn success_banner_style(theme: &Theme) -> container::Style {
    let palette = theme.palette();

    container::Style {
        text_color: Some(Color::WHITE),
        background: Some(Background::Color(palette.success)),
        border: Border {
            color: palette.success,
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}
