use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::pages::render_static_pane;
use crate::ui::router::Pane;
use crate::ui::summarizer::render_summarizer;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let active = app.active_pane();
    frame.render_widget(Header::new(active, app.endpoint_label()).widget(), header);
    frame.render_widget(Clear, body);
    match active {
        Pane::Summarizer => render_summarizer(frame, body, app.summarizer()),
        Pane::About | Pane::Contact | Pane::Profile => {
            render_static_pane(frame, body, active, app.panes())
        }
    }
    frame.render_widget(Footer::new(active).widget(footer), footer);
}
