use iced::widget::{button, column, container, image, scrollable, text};
use iced::{Alignment, Background, Element, Length};

use crate::core::models::{file_uri_to_path, Phase, ThemeMode, ViewState};
use crate::global_constants::{
    APPLICATION_TITLE, ERROR_LINE_PREFIX, PREVIEW_SIZE, RESULT_TITLE, SCAN_BUTTON_LABEL,
    STATUS_CAPTURING, STATUS_FAILED, STATUS_IDLE, STATUS_RESOLVED, STATUS_UPLOADING,
};
use crate::presentation::app_theme;

#[derive(Debug, Clone)]
pub enum DetectionViewMessage {
    ScanPressed,
}

/// Everything the detection screen shows, derived from a [`ViewState`] and nothing else.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenModel {
    pub title: &'static str,
    pub button_label: &'static str,
    pub button_enabled: bool,
    pub preview_uri: Option<String>,
    pub result_text: Option<String>,
    pub error_line: Option<String>,
    pub status_line: &'static str,
}

impl ScreenModel {
    pub fn project(state: &ViewState) -> Self {
        let phase = state.phase();

        Self {
            title: APPLICATION_TITLE,
            button_label: SCAN_BUTTON_LABEL,
            button_enabled: phase != Phase::Capturing,
            preview_uri: state.image().map(|image| image.uri.clone()),
            result_text: state.result().map(|result| result.to_indented_text()),
            error_line: state
                .error()
                .map(|message| format!("{}{}", ERROR_LINE_PREFIX, message)),
            status_line: status_line_for(phase),
        }
    }

    /// Text-only rendering of the screen, top to bottom.
    pub fn to_plain_text(&self) -> String {
        let mut lines = vec![self.title.to_string(), format!("[{}]", self.button_label)];

        if let Some(uri) = &self.preview_uri {
            lines.push(format!("<image {}>", uri));
        }
        if let Some(result) = &self.result_text {
            lines.push(RESULT_TITLE.to_string());
            lines.push(result.clone());
        }
        if let Some(error) = &self.error_line {
            lines.push(error.clone());
        }
        lines.push(self.status_line.to_string());

        lines.join("\n")
    }
}

fn status_line_for(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => STATUS_IDLE,
        Phase::Capturing => STATUS_CAPTURING,
        Phase::Uploading => STATUS_UPLOADING,
        Phase::Resolved => STATUS_RESOLVED,
        Phase::Failed => STATUS_FAILED,
    }
}

pub struct DetectionView;

impl DetectionView {
    pub fn render_ui<'a>(
        model: ScreenModel,
        theme_mode: &ThemeMode,
    ) -> Element<'a, DetectionViewMessage> {
        let theme = app_theme::get_theme(theme_mode);
        let panel_mode = theme_mode.clone();

        let title = text(model.title).size(24);

        let scan_button = button(text(model.button_label).size(16))
            .padding([12, 32])
            .style(|theme, status| app_theme::primary_button_style(theme, status))
            .on_press_maybe(
                model
                    .button_enabled
                    .then_some(DetectionViewMessage::ScanPressed),
            );

        let mut content = column![title, scan_button]
            .spacing(20)
            .padding(20)
            .align_x(Alignment::Center);

        if let Some(preview_path) = model
            .preview_uri
            .as_deref()
            .and_then(|uri| file_uri_to_path(uri).ok())
        {
            content = content.push(
                image(image::Handle::from_path(preview_path))
                    .width(Length::Fixed(PREVIEW_SIZE))
                    .height(Length::Fixed(PREVIEW_SIZE)),
            );
        }

        if let Some(result_text) = model.result_text {
            let result_panel = container(
                column![
                    text(RESULT_TITLE).size(18),
                    scrollable(text(result_text).size(14)).height(Length::Fixed(260.0)),
                ]
                .spacing(5),
            )
            .padding(10)
            .width(Length::Fill)
            .style(move |_theme| app_theme::result_panel_style(&panel_mode));

            content = content.push(result_panel);
        }

        if let Some(error_line) = model.error_line {
            content = content.push(text(error_line).size(14).style(|_theme: &iced::Theme| {
                iced::widget::text::Style {
                    color: Some(app_theme::ERROR_TEXT_COLOR),
                }
            }));
        }

        content = content.push(text(model.status_line).size(12).style(
            |_theme: &iced::Theme| iced::widget::text::Style {
                color: Some(app_theme::MUTED_TEXT_COLOR),
            },
        ));

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(move |_theme| {
                let palette = theme.palette();
                iced::widget::container::Style {
                    background: Some(Background::Color(palette.background)),
                    text_color: Some(palette.text),
                    ..Default::default()
                }
            })
            .into()
    }
}
