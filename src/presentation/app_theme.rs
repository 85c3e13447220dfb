use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme};

use crate::core::models::ThemeMode;

pub const ERROR_TEXT_COLOR: Color = Color::from_rgb(0.9, 0.1, 0.1);
pub const MUTED_TEXT_COLOR: Color = Color::from_rgb(0.45, 0.45, 0.45);

pub fn get_theme(mode: &ThemeMode) -> Theme {
    match mode {
        ThemeMode::Dark => Theme::custom(
            "Dark".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.08, 0.08, 0.08),
                text: Color::from_rgb(1.0, 1.0, 1.0),
                primary: Color::from_rgb(0.2, 0.7, 0.4),
                success: Color::from_rgb(0.2, 0.9, 0.4),
                danger: Color::from_rgb(1.0, 0.3, 0.3),
                warning: Color::from_rgb(1.0, 0.7, 0.0),
            },
        ),
        ThemeMode::Light => Theme::custom(
            "Light".to_string(),
            iced::theme::Palette {
                background: Color::from_rgb(0.96, 0.96, 0.96),
                text: Color::from_rgb(0.1, 0.1, 0.1),
                primary: Color::from_rgb(0.1, 0.53, 0.33),
                success: Color::from_rgb(0.1, 0.7, 0.3),
                danger: Color::from_rgb(0.9, 0.2, 0.2),
                warning: Color::from_rgb(0.9, 0.6, 0.0),
            },
        ),
    }
}

fn leaf_button(background: Color, text_color: Color, snap: bool) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: Border {
            color: background,
            width: 1.0,
            radius: 6.0.into(),
        },
        shadow: Shadow::default(),
        snap,
    }
}

pub fn primary_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => leaf_button(Color::from_rgb(0.098, 0.529, 0.329), Color::WHITE, false),
        button::Status::Hovered => leaf_button(Color::from_rgb(0.122, 0.655, 0.408), Color::WHITE, false),
        button::Status::Pressed => leaf_button(Color::from_rgb(0.078, 0.420, 0.263), Color::WHITE, true),
        button::Status::Disabled => {
            leaf_button(Color::from_rgb(0.3, 0.3, 0.3), Color::from_rgb(0.5, 0.5, 0.5), false)
        }
    }
}

pub fn result_panel_style(mode: &ThemeMode) -> container::Style {
    let (background, text) = match mode {
        ThemeMode::Light => (Color::WHITE, Color::from_rgb(0.2, 0.2, 0.2)),
        ThemeMode::Dark => (Color::from_rgb(0.15, 0.15, 0.15), Color::from_rgb(0.85, 0.85, 0.85)),
    };

    container::Style {
        background: Some(Background::Color(background)),
        text_color: Some(text),
        border: Border {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.1),
            width: 1.0,
            radius: 5.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.3),
            offset: iced::Vector::new(0.0, 2.0),
            blur_radius: 5.0,
        },
        ..Default::default()
    }
}
