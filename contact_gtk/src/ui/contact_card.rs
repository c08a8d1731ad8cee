use std::rc::Rc;

use adw::prelude::*;
use contact_core::{AppState, ContactCard, CopyTarget, Event};
use gtk4 as gtk;

use crate::ui::main_window::MainWindow;

fn copy_row(icon: &str, text: &str, copied: bool) -> gtk::Button {
    let row = gtk::Box::new(gtk::Orientation::Horizontal, 10);
    let leading = gtk::Image::from_icon_name(icon);
    leading.add_css_class("accent");
    row.append(&leading);

    let label = gtk::Label::new(Some(text));
    label.set_ellipsize(gtk::pango::EllipsizeMode::End);
    label.set_hexpand(true);
    label.set_xalign(0.0);
    row.append(&label);

    let trailing = if copied {
        let img = gtk::Image::from_icon_name("object-select-symbolic");
        img.add_css_class("success");
        img
    } else {
        let img = gtk::Image::from_icon_name("edit-copy-symbolic");
        img.add_css_class("dim-label");
        img
    };
    row.append(&trailing);

    let button = gtk::Button::builder().child(&row).tooltip_text("Click to Copy").build();
    button.add_css_class("copy-row");
    button
}

pub fn build(card: &ContactCard<'_>, state: &AppState, window: &Rc<MainWindow>) -> gtk::Widget {
    let contact = card.contact;
    let root = gtk::Box::new(gtk::Orientation::Vertical, 8);
    root.add_css_class("card");
    root.add_css_class("contact-card");

    let header = gtk::Box::new(gtk::Orientation::Horizontal, 12);
    let avatar = gtk::Label::new(Some(&card.initials));
    avatar.add_css_class("avatar");
    avatar.add_css_class(card.avatar.css_class());
    avatar.set_valign(gtk::Align::Center);
    header.append(&avatar);

    let titles = gtk::Box::new(gtk::Orientation::Vertical, 2);
    titles.set_hexpand(true);
    titles.set_valign(gtk::Align::Center);
    let name = gtk::Label::new(Some(&contact.name));
    name.add_css_class("heading");
    name.set_xalign(0.0);
    name.set_ellipsize(gtk::pango::EllipsizeMode::End);
    titles.append(&name);
    if let Some(created) = &card.created {
        let date = gtk::Label::new(Some(created));
        date.add_css_class("date-badge");
        date.set_halign(gtk::Align::Start);
        titles.append(&date);
    }
    header.append(&titles);

    let delete = gtk::Button::from_icon_name("user-trash-symbolic");
    delete.add_css_class("flat");
    delete.add_css_class("delete-button");
    delete.set_tooltip_text(Some("Delete Contact"));
    delete.set_valign(gtk::Align::Start);
    {
        let win = window.clone();
        let id = contact.id.clone();
        delete.connect_clicked(move |_| win.confirm_delete(id.clone()));
    }
    header.append(&delete);
    root.append(&header);

    for (target, icon, text) in [
        (CopyTarget::email(&contact.id), "mail-unread-symbolic", &contact.email),
        (CopyTarget::phone(&contact.id), "call-start-symbolic", &contact.phone),
    ] {
        let row = copy_row(icon, text, state.is_copied(&target));
        let win = window.clone();
        row.connect_clicked(move |_| win.dispatch(Event::CopyRequested(target.clone())));
        root.append(&row);
    }

    if let Some(note) = contact.note() {
        let separator = gtk::Separator::new(gtk::Orientation::Horizontal);
        root.append(&separator);
        let label = gtk::Label::new(None);
        label.set_markup(&format!(
            "<b>Note:</b> <i>{}</i>",
            glib::markup_escape_text(note)
        ));
        label.add_css_class("dim-label");
        label.set_wrap(true);
        label.set_xalign(0.0);
        root.append(&label);
    }

    root.upcast()
}
