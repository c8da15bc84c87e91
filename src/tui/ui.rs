use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Header, InputForm, ResultCard, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

/// Screen layout, top to bottom: title bar, header, form, result.
///
/// `result_height` is what the result card needs. On a short terminal the
/// form shrinks (down to `InputForm::MIN_HEIGHT`) so the card fits whole.
pub fn layout(area: Rect, result_height: u16) -> [Rect; 4] {
    use Constraint::{Length, Min};
    let form_height = area
        .height
        .saturating_sub(1 + Header::HEIGHT + result_height)
        .clamp(InputForm::MIN_HEIGHT, InputForm::HEIGHT);
    Layout::vertical([
        Length(1),
        Length(Header::HEIGHT),
        Length(form_height),
        Min(0),
    ])
    .areas(area)
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let mut result_card = ResultCard::new(app.result.as_ref());
    let result_height = result_card.height(frame.area().width);
    let [title_area, header_area, form_area, result_area] =
        layout(frame.area(), result_height);

    TitleBar::new(
        app.classifier.endpoint().to_string(),
        app.status_message.clone(),
    )
    .render(frame, title_area);

    Header.render(frame, header_area);

    tui.input_form
        .set_props(&app.text, app.loading, app.submit_disabled());
    tui.input_form.render(frame, form_area);

    result_card.render(frame, result_area);
}
