use crate::ui::app::App;
use crate::ui::confirmation::render_confirmation;
use crate::ui::footer::Footer;
use crate::ui::form::render_form;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::screen::ScreenState;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(), header);
    frame.render_widget(Clear, body);
    match app.screen() {
        ScreenState::Form => render_form(frame, body, app.form(), app.animation_tick()),
        ScreenState::Confirmation => render_confirmation(frame, body),
    }
    frame.render_widget(Footer::new().widget(footer, app.screen()), footer);
}
