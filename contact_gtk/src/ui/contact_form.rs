use std::rc::Rc;

use adw::prelude::*;
use contact_core::{AppState, Event, Field};
use gtk4 as gtk;

use crate::ui::main_window::MainWindow;

struct TextField {
    field: Field,
    entry: gtk::Entry,
    error: gtk::Label,
}

pub struct ContactFormView {
    root: gtk::Box,
    banner: gtk::Label,
    fields: Vec<TextField>,
    message: gtk::TextView,
    save: gtk::Button,
}

impl ContactFormView {
    pub fn new() -> Self {
        let root = gtk::Box::new(gtk::Orientation::Vertical, 12);
        root.add_css_class("card");
        root.add_css_class("contact-form");
        root.set_size_request(340, -1);
        root.set_valign(gtk::Align::Start);

        let title = gtk::Label::new(Some("Add New Contact"));
        title.add_css_class("title-3");
        title.set_halign(gtk::Align::Start);
        root.append(&title);
        let subtitle = gtk::Label::new(Some("Create a new entry in your digital phonebook."));
        subtitle.add_css_class("dim-label");
        subtitle.set_halign(gtk::Align::Start);
        root.append(&subtitle);

        let banner = gtk::Label::new(None);
        banner.add_css_class("success-banner");
        banner.set_halign(gtk::Align::Fill);
        banner.set_xalign(0.0);
        banner.set_visible(false);
        root.append(&banner);

        let mut fields = Vec::new();
        for (field, label, placeholder, purpose) in [
            (Field::Name, "Full Name", "e.g. Suraj Singh", gtk::InputPurpose::Name),
            (Field::Email, "Email Address", "e23cseu1384@bennett.edu.in", gtk::InputPurpose::Email),
            (Field::Phone, "Phone Number", "7880314386", gtk::InputPurpose::Phone),
        ] {
            let caption = gtk::Label::new(Some(label));
            caption.add_css_class("field-label");
            caption.set_halign(gtk::Align::Start);
            root.append(&caption);

            let entry = gtk::Entry::new();
            entry.set_placeholder_text(Some(placeholder));
            entry.set_input_purpose(purpose);
            entry.set_hexpand(true);
            root.append(&entry);

            let error = gtk::Label::new(None);
            error.add_css_class("field-error");
            error.set_halign(gtk::Align::Start);
            error.set_visible(false);
            root.append(&error);

            fields.push(TextField { field, entry, error });
        }

        let caption = gtk::Label::new(Some("Message"));
        caption.add_css_class("field-label");
        caption.set_halign(gtk::Align::Start);
        root.append(&caption);
        let message = gtk::TextView::new();
        message.set_wrap_mode(gtk::WrapMode::WordChar);
        message.add_css_class("message-input");
        let message_frame = gtk::Frame::new(None);
        message_frame.set_child(Some(&message));
        message_frame.set_size_request(-1, 64);
        root.append(&message_frame);

        let save = gtk::Button::with_label("Save Contact");
        save.add_css_class("suggested-action");
        save.add_css_class("pill");
        root.append(&save);

        Self { root, banner, fields, message, save }
    }

    pub fn widget(&self) -> &gtk::Box {
        &self.root
    }

    pub fn bind(&self, window: &Rc<MainWindow>) {
        for TextField { field, entry, .. } in &self.fields {
            let field = *field;
            let win = window.clone();
            entry.connect_changed(move |e| {
                win.dispatch(Event::FieldEdited(field, e.text().to_string()));
            });
            let win = window.clone();
            entry.connect_activate(move |_| win.dispatch(Event::SubmitRequested));
        }

        let win = window.clone();
        self.message.buffer().connect_changed(move |buf| {
            let text = buf.text(&buf.start_iter(), &buf.end_iter(), false);
            win.dispatch(Event::FieldEdited(Field::Message, text.to_string()));
        });

        let win = window.clone();
        self.save.connect_clicked(move |_| win.dispatch(Event::SubmitRequested));
    }

    pub fn render(&self, state: &AppState) {
        let form = state.form();
        for TextField { field, entry, error } in &self.fields {
            let value = form.value(*field);
            if entry.text().as_str() != value {
                entry.set_text(value);
            }
            match form.error(*field) {
                Some(err) => {
                    error.set_label(&err.to_string());
                    error.set_visible(true);
                    entry.add_css_class("error");
                }
                None => {
                    error.set_visible(false);
                    entry.remove_css_class("error");
                }
            }
        }

        let buffer = self.message.buffer();
        let current = buffer.text(&buffer.start_iter(), &buffer.end_iter(), false);
        if current.as_str() != form.value(Field::Message) {
            buffer.set_text(form.value(Field::Message));
        }

        self.save.set_sensitive(state.can_submit());
        self.save.set_label(if state.is_submitting() { "Saving..." } else { "Save Contact" });

        match state.success_message() {
            Some(msg) => {
                self.banner.set_label(msg);
                self.banner.set_visible(true);
            }
            None => self.banner.set_visible(false),
        }
    }
}
