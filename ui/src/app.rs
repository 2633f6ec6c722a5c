use std::time::Duration;

use log::debug;
use tiffin_business::{ApiDispatcher, CommandDispatcher, DashboardCommand};

use crate::pages::{Navigation, PageCtx, Tab};
use crate::state::State;
use crate::utils::colors::COLOR_RED;
use crate::widgets::{self, Modal};

const REPAINT_WHILE_BUSY: Duration = Duration::from_millis(250);

/// The dashboard shell: top bar, navigation rail, the active tab and one modal.
pub struct TiffinApp {
    state: State,
    navigation: Navigation,
    modal: Option<Modal>,
    dispatcher: Box<dyn CommandDispatcher>,
}

impl TiffinApp {
    /// Called once before the first frame. Starts loading every list.
    pub fn new(state: State) -> Self {
        let dispatcher = Box::new(ApiDispatcher::new(state.client.clone()));
        Self::with_dispatcher(state, dispatcher)
    }

    pub fn with_dispatcher(mut state: State, dispatcher: Box<dyn CommandDispatcher>) -> Self {
        state.load_all();
        Self {
            state,
            navigation: Navigation::default(),
            modal: None,
            dispatcher,
        }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn navigation(&self) -> &Navigation {
        &self.navigation
    }

    pub fn navigation_mut(&mut self) -> &mut Navigation {
        &mut self.navigation
    }

    pub fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    pub fn select(&mut self, tab: Tab) {
        self.navigation.select(tab);
    }

    /// Resolves UI-local commands here and forwards mutations to the dispatcher.
    pub fn handle(&mut self, command: DashboardCommand) {
        if !command.is_local() {
            self.dispatcher.dispatch(command);
            return;
        }
        if let DashboardCommand::Refresh(resource) = command {
            self.state.refresh(resource);
            return;
        }
        match Modal::from_command(&command) {
            Some(modal) => {
                debug!("Opening {}", modal.title());
                self.modal = Some(modal);
            }
            None => debug!("No dialog for {command:?}"),
        }
    }

    /// One frame of the dashboard.
    pub fn ui(&mut self, ctx: &egui::Context) {
        self.state.poll();
        for resource in self.dispatcher.poll_completed() {
            self.state.refresh(resource);
        }

        let mut refresh_all = false;
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.heading("Tiffin Admin");
                ui.add_space(8.0);
                widgets::env_version(ui);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    refresh_all = ui.button("⟳ Refresh").clicked();
                });
            });
        });
        if refresh_all {
            self.state.load_all();
        }

        if let Some(error) = self.state.data.last_error() {
            egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
                ui.colored_label(COLOR_RED, error);
            });
        }

        egui::SidePanel::left("navigation")
            .resizable(false)
            .show(ctx, |ui| self.navigation.rail(ui));

        let page_ctx = PageCtx {
            data: &self.state.data,
            client: &self.state.client,
            max_rows: self.state.config().max_rows,
        };
        let navigation = &mut self.navigation;
        let mut commands = egui::CentralPanel::default()
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink(false)
                    .show(ui, |ui| navigation.show_page(ui, &page_ctx))
                    .inner
            })
            .inner;

        commands.extend(widgets::show_modal(ctx, &mut self.modal));
        for command in commands {
            self.handle(command);
        }

        if self.state.is_loading() || self.dispatcher.is_busy() {
            ctx.request_repaint_after(REPAINT_WHILE_BUSY);
        }
    }
}

impl eframe::App for TiffinApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
    }
}
