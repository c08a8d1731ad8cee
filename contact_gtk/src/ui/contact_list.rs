use std::cell::OnceCell;
use std::rc::Rc;

use adw::prelude::*;
use contact_core::presenter::{EMPTY_HINT, EMPTY_TITLE};
use contact_core::{AppState, Event, SortKey};
use gtk4 as gtk;

use crate::ui::contact_card;
use crate::ui::main_window::MainWindow;

pub struct ContactListView {
    root: gtk::Box,
    search: gtk::SearchEntry,
    newest: gtk::ToggleButton,
    by_name: gtk::ToggleButton,
    stack: gtk::Stack,
    cards: gtk::FlowBox,
    window: OnceCell<Rc<MainWindow>>,
}

impl ContactListView {
    pub fn new() -> Self {
        let root = gtk::Box::new(gtk::Orientation::Vertical, 16);
        root.set_hexpand(true);

        let toolbar = gtk::Box::new(gtk::Orientation::Horizontal, 8);
        toolbar.add_css_class("card");
        toolbar.add_css_class("list-toolbar");

        let search = gtk::SearchEntry::new();
        search.set_placeholder_text(Some("Search contacts..."));
        search.set_width_chars(28);
        toolbar.append(&search);

        let spacer = gtk::Box::new(gtk::Orientation::Horizontal, 0);
        spacer.set_hexpand(true);
        toolbar.append(&spacer);

        let sort_caption = gtk::Label::new(Some("Sort By:"));
        sort_caption.add_css_class("dim-label");
        sort_caption.add_css_class("caption-heading");
        toolbar.append(&sort_caption);

        let newest = gtk::ToggleButton::with_label(SortKey::Newest.label());
        let by_name = gtk::ToggleButton::with_label(SortKey::Name.label());
        by_name.set_group(Some(&newest));
        let sort_group = gtk::Box::new(gtk::Orientation::Horizontal, 0);
        sort_group.add_css_class("linked");
        sort_group.append(&newest);
        sort_group.append(&by_name);
        toolbar.append(&sort_group);
        root.append(&toolbar);

        let cards = gtk::FlowBox::new();
        cards.set_selection_mode(gtk::SelectionMode::None);
        cards.set_homogeneous(true);
        cards.set_max_children_per_line(2);
        cards.set_min_children_per_line(1);
        cards.set_row_spacing(20);
        cards.set_column_spacing(20);
        cards.set_valign(gtk::Align::Start);

        let scroller = gtk::ScrolledWindow::builder()
            .vexpand(true)
            .hexpand(true)
            .hscrollbar_policy(gtk::PolicyType::Never)
            .child(&cards)
            .build();

        let empty = adw::StatusPage::builder()
            .icon_name("system-search-symbolic")
            .title(EMPTY_TITLE)
            .description(EMPTY_HINT)
            .build();

        let stack = gtk::Stack::new();
        stack.add_named(&scroller, Some("cards"));
        stack.add_named(&empty, Some("empty"));
        stack.set_vexpand(true);
        root.append(&stack);

        Self {
            root,
            search,
            newest,
            by_name,
            stack,
            cards,
            window: OnceCell::new(),
        }
    }

    pub fn widget(&self) -> &gtk::Box {
        &self.root
    }

    pub fn bind(&self, window: &Rc<MainWindow>) {
        let win = window.clone();
        self.search.connect_search_changed(move |entry| {
            win.dispatch(Event::SearchEdited(entry.text().to_string()));
        });

        for (button, key) in [(&self.newest, SortKey::Newest), (&self.by_name, SortKey::Name)] {
            let win = window.clone();
            button.connect_toggled(move |b| {
                if b.is_active() {
                    win.dispatch(Event::SortSelected(key));
                }
            });
        }

        // Cards are rebuilt on every render and need a way back to the window.
        let _ = self.window.set(window.clone());
    }

    pub fn render(&self, state: &AppState) {
        self.newest.set_active(state.sort() == SortKey::Newest);
        self.by_name.set_active(state.sort() == SortKey::Name);

        while let Some(child) = self.cards.first_child() {
            self.cards.remove(&child);
        }

        let cards = state.cards();
        if cards.is_empty() {
            self.stack.set_visible_child_name("empty");
            return;
        }
        self.stack.set_visible_child_name("cards");

        let Some(window) = self.window.get() else {
            return;
        };
        for card in &cards {
            let widget = contact_card::build(card, state, window);
            self.cards.insert(&widget, -1);
        }
    }
}
