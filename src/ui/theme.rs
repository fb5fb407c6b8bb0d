use fltk::prelude::*;

use crate::app::domain::theme::Palette;
use super::main_window::PageWidgets;

/// Restyle the live page with the given palette.
///
/// The chrome color is written straight onto the header, nav and footer
/// widgets, so it wins over any other background in effect. Inputs and
/// buttons keep their stock look in both modes, matching the original
/// page's rule set. The form's error frame (when it exists) also keeps its
/// own fixed red label.
pub fn apply_theme(widgets: &mut PageWidgets, palette: &Palette) {
    widgets.wind.set_color(palette.page_bg);
    widgets.wind.set_label_color(palette.page_text);

    widgets.header.set_color(palette.chrome_bg);
    widgets.header.set_label_color(palette.chrome_text);

    widgets.nav.set_color(palette.chrome_bg);
    for link in &mut widgets.nav_links {
        link.set_label_color(palette.link_text);
    }

    widgets.contact_section.set_color(palette.section_bg);
    widgets.contact_title.set_label_color(palette.section_text);
    widgets.name_input.set_label_color(palette.section_text);
    widgets.email_input.set_label_color(palette.section_text);
    widgets.message_input.set_label_color(palette.section_text);

    widgets.counter_section.set_color(palette.section_bg);
    widgets.counter_title.set_label_color(palette.section_text);
    widgets.count_display.set_label_color(palette.section_text);

    widgets.footer.set_color(palette.chrome_bg);
    widgets.footer_note.set_label_color(palette.chrome_text);

    widgets.wind.redraw();
}
