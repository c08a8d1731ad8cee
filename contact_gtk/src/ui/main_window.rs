use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;

use adw::Application;
use adw::prelude::*;
use contact_core::state::DELETE_PROMPT;
use contact_core::{ApiClient, AppState, Command, Event, Settings};
use gtk4 as gtk;

use crate::ui::contact_form::ContactFormView;
use crate::ui::contact_list::ContactListView;

/// Owns the application state. Every user action and every finished request
/// goes through [`MainWindow::dispatch`]; the window is re-rendered after
/// each one.
pub struct MainWindow {
    window: adw::ApplicationWindow,
    total: gtk::Label,
    form: ContactFormView,
    list: ContactListView,
    state: RefCell<AppState>,
    rendering: Cell<bool>,
    store: Arc<ApiClient>,
}

impl MainWindow {
    pub fn new(app: &Application, settings: &Settings, store: Arc<ApiClient>) -> Rc<Self> {
        let window = adw::ApplicationWindow::builder()
            .application(app)
            .title("Contact Manager")
            .default_width(1100)
            .default_height(720)
            .build();

        let header = adw::HeaderBar::new();
        let title = gtk::Label::new(Some("Contact Manager"));
        title.add_css_class("title");
        header.set_title_widget(Some(&title));
        let total = gtk::Label::new(None);
        total.add_css_class("total-badge");
        header.pack_end(&total);

        let form = ContactFormView::new();
        let list = ContactListView::new();

        let body = gtk::Box::new(gtk::Orientation::Horizontal, 24);
        body.set_margin_top(24);
        body.set_margin_bottom(24);
        body.set_margin_start(24);
        body.set_margin_end(24);
        body.append(form.widget());
        body.append(list.widget());

        let container = gtk::Box::new(gtk::Orientation::Vertical, 0);
        container.append(&header);
        container.append(&body);
        window.set_content(Some(&container));

        let this = Rc::new(Self {
            window,
            total,
            form,
            list,
            state: RefCell::new(AppState::new(settings)),
            rendering: Cell::new(false),
            store,
        });
        this.form.bind(&this);
        this.list.bind(&this);
        this.render();
        this
    }

    pub fn present(&self) {
        self.window.present();
    }

    pub fn dispatch(self: &Rc<Self>, event: Event) {
        // Widget updates made while rendering echo back as change signals.
        if self.rendering.get() {
            return;
        }
        let commands = self.state.borrow_mut().apply(event);
        for command in commands {
            self.run(command);
        }
        self.render();
    }

    fn run(self: &Rc<Self>, command: Command) {
        match command {
            Command::Remote(request) => {
                let store = self.store.clone();
                let this = self.clone();
                crate::utils::run_async_to_main(
                    async move { contact_core::execute(store.as_ref(), request).await },
                    move |event| this.dispatch(event),
                );
            }
            Command::CopyToClipboard(text) => self.window.clipboard().set_text(&text),
            Command::ShowAlert(message) => self.alert(message),
            Command::ScheduleExpiry { flash, token, after } => {
                let this = self.clone();
                glib::timeout_add_local_once(after, move || {
                    this.dispatch(Event::FlashExpired(flash, token));
                });
            }
        }
    }

    fn render(&self) {
        self.rendering.set(true);
        {
            let state = self.state.borrow();
            self.total.set_label(&format!("Total: {}", state.total()));
            self.form.render(&state);
            self.list.render(&state);
        }
        self.rendering.set(false);
    }

    fn alert(&self, message: &str) {
        let dialog = gtk::MessageDialog::builder()
            .transient_for(&self.window)
            .modal(true)
            .message_type(gtk::MessageType::Error)
            .buttons(gtk::ButtonsType::Ok)
            .text(message)
            .build();
        dialog.connect_response(|dlg, _| dlg.close());
        dialog.present();
    }

    pub fn confirm_delete(self: &Rc<Self>, id: String) {
        let dialog = gtk::MessageDialog::builder()
            .transient_for(&self.window)
            .modal(true)
            .message_type(gtk::MessageType::Question)
            .buttons(gtk::ButtonsType::OkCancel)
            .text(DELETE_PROMPT)
            .build();
        let this = self.clone();
        dialog.connect_response(move |dlg, resp| {
            if resp == gtk::ResponseType::Ok {
                this.dispatch(Event::DeleteConfirmed(id.clone()));
            }
            dlg.close();
        });
        dialog.present();
    }
}
