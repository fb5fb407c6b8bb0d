use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Color, Font, FrameType},
    frame::Frame,
    group::Group,
    image::SvgImage,
    input::{Input, MultilineInput},
    prelude::*,
    window::Window,
};

use crate::app::error::Result;
use crate::app::messages::Message;

pub const WINDOW_WIDTH: i32 = 520;
pub const WINDOW_HEIGHT: i32 = 640;

// 32x32 page glyph used as the window icon
const WINDOW_ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="32" height="32">
<rect width="32" height="32" rx="6" fill="#4CAF50"/>
<rect x="7" y="8" width="18" height="3" fill="#ffffff"/>
<rect x="7" y="14" width="18" height="3" fill="#ffffff"/>
<rect x="7" y="20" width="12" height="3" fill="#ffffff"/>
</svg>"##;

/// Every widget handle the application needs after construction.
///
/// The page is built exactly once; `AppState` owns this struct and restyles
/// the handles in place when the theme changes.
pub struct PageWidgets {
    pub wind: Window,
    pub header: Frame,
    pub nav: Group,
    pub nav_links: Vec<Button>,
    pub contact_section: Group,
    pub contact_title: Frame,
    pub name_input: Input,
    pub email_input: Input,
    pub message_input: MultilineInput,
    pub submit_btn: Button,
    pub counter_section: Group,
    pub counter_title: Frame,
    pub decrement_btn: Button,
    pub count_display: Frame,
    pub increment_btn: Button,
    pub footer: Group,
    pub footer_note: Frame,
    pub toggle_btn: Button,
}

/// Build the whole page: header, nav, the two content sections and the
/// footer with its dark-mode toggle. The toggle button is constructed here,
/// eagerly, along with everything else; only the form's error frame is left
/// for later (see [`create_error_box`]).
pub fn build_page(sender: &Sender<Message>) -> Result<PageWidgets> {
    let mut wind = Window::new(200, 100, WINDOW_WIDTH, WINDOW_HEIGHT, "Pagelet");
    wind.set_xclass("Pagelet");

    let mut icon = SvgImage::from_data(WINDOW_ICON_SVG)?;
    icon.scale(32, 32, true, true);
    wind.set_icon(Some(icon));

    // Header band
    let mut header = Frame::new(0, 0, WINDOW_WIDTH, 60, "Pagelet");
    header.set_frame(FrameType::FlatBox);
    header.set_label_font(Font::HelveticaBold);
    header.set_label_size(24);

    // Nav band with link-styled buttons. The links are same-page anchors on
    // the original layout, so activating one has no effect here.
    let mut nav = Group::new(0, 60, WINDOW_WIDTH, 34, None);
    nav.set_frame(FrameType::FlatBox);
    let mut nav_links = Vec::new();
    for (i, label) in ["Home", "Contact", "Counter"].iter().enumerate() {
        let mut link = Button::new(12 + i as i32 * 86, 65, 80, 24, *label);
        link.set_frame(FrameType::NoBox);
        link.set_down_frame(FrameType::NoBox);
        link.clear_visible_focus();
        nav_links.push(link);
    }
    nav.end();

    // Contact section
    let mut contact_section = Group::new(20, 110, WINDOW_WIDTH - 40, 300, None);
    contact_section.set_frame(FrameType::FlatBox);

    let mut contact_title = Frame::new(36, 122, 200, 26, "Contact Us");
    contact_title.set_label_font(Font::HelveticaBold);
    contact_title.set_label_size(16);
    contact_title.set_align(Align::Left | Align::Inside);

    let name_input = Input::new(140, 158, 330, 28, "Name:");
    let email_input = Input::new(140, 194, 330, 28, "Email:");
    let message_input = MultilineInput::new(140, 230, 330, 84, "Message:");

    let mut submit_btn = Button::new(140, 326, 130, 30, "Send Message");
    let submit_sender = sender.clone();
    submit_btn.set_callback(move |_| {
        submit_sender.send(Message::FormSubmit);
    });

    contact_section.end();

    // Counter section
    let mut counter_section = Group::new(20, 430, WINDOW_WIDTH - 40, 96, None);
    counter_section.set_frame(FrameType::FlatBox);

    let mut counter_title = Frame::new(36, 440, 200, 26, "Counter");
    counter_title.set_label_font(Font::HelveticaBold);
    counter_title.set_label_size(16);
    counter_title.set_align(Align::Left | Align::Inside);

    let mut decrement_btn = Button::new(170, 478, 40, 32, "-");
    let decrement_sender = sender.clone();
    decrement_btn.set_callback(move |_| {
        decrement_sender.send(Message::CounterDecrement);
    });

    let mut count_display = Frame::new(220, 478, 80, 32, "0");
    count_display.set_label_font(Font::HelveticaBold);
    count_display.set_label_size(18);

    let mut increment_btn = Button::new(310, 478, 40, 32, "+");
    let increment_sender = sender.clone();
    increment_btn.set_callback(move |_| {
        increment_sender.send(Message::CounterIncrement);
    });

    counter_section.end();

    // Footer band, with the dark-mode toggle appended as its last child
    let mut footer = Group::new(0, 546, WINDOW_WIDTH, WINDOW_HEIGHT - 546, None);
    footer.set_frame(FrameType::FlatBox);

    let mut footer_note = Frame::new(0, 552, WINDOW_WIDTH, 20, "\u{00a9} 2026 Pagelet");
    footer_note.set_label_size(11);

    let mut toggle_btn = Button::new(WINDOW_WIDTH / 2 - 75, 584, 150, 36, "Toggle Dark Mode");
    let toggle_sender = sender.clone();
    toggle_btn.set_callback(move |_| {
        toggle_sender.send(Message::ToggleDarkMode);
    });

    footer.end();

    wind.end();

    Ok(PageWidgets {
        wind,
        header,
        nav,
        nav_links,
        contact_section,
        contact_title,
        name_input,
        email_input,
        message_input,
        submit_btn,
        counter_section,
        counter_title,
        decrement_btn,
        count_display,
        increment_btn,
        footer,
        footer_note,
        toggle_btn,
    })
}

/// Create the form's error frame as the last child of the contact section.
///
/// Deliberately not part of [`build_page`]: the frame only comes into
/// existence on the first invalid submission, and the caller keeps the
/// handle so it is created at most once.
pub fn create_error_box(contact_section: &mut Group) -> Frame {
    contact_section.begin();
    let mut error_box = Frame::new(
        contact_section.x() + 16,
        contact_section.y() + 250,
        contact_section.w() - 32,
        48,
        None,
    );
    error_box.set_align(Align::Left | Align::Inside | Align::Wrap);
    error_box.set_label_size(12);
    error_box.set_label_color(Color::Red);
    contact_section.end();
    error_box
}
