use anyhow::{anyhow, Result};
use devotional_core::{
    render::DisplayModel,
    theme::{FilePreferences, Theme, ThemeState},
    DevotionalService,
};
use egui::{Align, Layout, RichText};
use tracing::{debug, info, warn};

use crate::{config::AppConfig, loader::StoreLoader};

const APP_NAME: &str = "Daily Devotional";

pub fn run(config: AppConfig) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_NAME)
            .with_inner_size([640.0, 760.0]),
        ..Default::default()
    };
    eframe::run_native(
        APP_NAME,
        options,
        Box::new(|cc| Ok(Box::new(DevotionalApp::new(cc, config)))),
    )
    .map_err(|err| anyhow!("{err}"))
}

enum Session {
    Loading(StoreLoader),
    Ready(DevotionalService),
}

pub struct DevotionalApp {
    config: AppConfig,
    session: Session,
    preferences: FilePreferences,
    theme: ThemeState,
    picker_buffer: String,
    status: Option<String>,
}

impl DevotionalApp {
    fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let preferences = FilePreferences::open(&config.preferences_path);
        let platform = platform_theme(&cc.egui_ctx).unwrap_or(Theme::Light);
        let theme = ThemeState::initialise(&preferences, platform);
        apply_theme(&cc.egui_ctx, theme.effective());

        let loader = StoreLoader::spawn(cc.egui_ctx.clone(), config.data_dir.clone());
        Self {
            config,
            session: Session::Loading(loader),
            preferences,
            theme,
            picker_buffer: String::new(),
            status: None,
        }
    }

    fn poll_loader(&mut self) {
        let Session::Loading(loader) = &self.session else {
            return;
        };
        let Some(result) = loader.poll() else {
            return;
        };

        let mut builder = DevotionalService::builder();
        if let Some(start) = self.config.start_date {
            builder = builder.today(start);
        }
        let service = builder.build_from(result);
        self.picker_buffer = service.current_view().picker_text.clone();
        info!(cursor = %service.cursor(), "reader ready");
        self.session = Session::Ready(service);
    }

    fn follow_platform_theme(&mut self, ctx: &egui::Context) {
        let Some(platform) = platform_theme(ctx) else {
            return;
        };
        if self.theme.on_platform_change(platform) {
            apply_theme(ctx, self.theme.effective());
        }
    }

    fn toggle_theme(&mut self, ctx: &egui::Context) {
        match self.theme.toggle(&mut self.preferences) {
            Ok(theme) => info!(%theme, "theme toggled"),
            Err(err) => {
                warn!(%err, "theme preference not saved");
                self.status = Some("Theme preference could not be saved".to_string());
            }
        }
        apply_theme(ctx, self.theme.effective());
    }

    fn apply_picker_text(&mut self) {
        let Session::Ready(service) = &mut self.session else {
            return;
        };
        match service.on_picker_text(&self.picker_buffer) {
            Ok(()) => self.status = None,
            Err(err) => {
                debug!(%err, "ignoring picked date");
                self.status = Some(err.to_string());
            }
        }
        self.picker_buffer = service.current_view().picker_text.clone();
    }

    fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.label(RichText::new(APP_NAME).strong().size(16.0));
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button(self.theme.label()).clicked() {
                        self.toggle_theme(ctx);
                    }
                });
            });
        });
    }

    fn render_navigation(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("navigation").show(ctx, |ui| {
            let Session::Ready(service) = &mut self.session else {
                ui.label("Loading…");
                return;
            };

            let mut picked = false;
            ui.horizontal(|ui| {
                if ui.button("◀ Previous").clicked() {
                    service.on_previous();
                    self.status = None;
                }
                ui.label(RichText::new(&service.current_view().nav_date_label).strong());
                if ui.button("Next ▶").clicked() {
                    service.on_next();
                    self.status = None;
                }

                ui.separator();

                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.picker_buffer)
                        .desired_width(96.0)
                        .hint_text("YYYY-MM-DD")
                        .font(egui::TextStyle::Monospace),
                );
                if response.lost_focus() {
                    picked = true;
                } else if !response.has_focus() {
                    self.picker_buffer = service.current_view().picker_text.clone();
                }

                if ui.button("Today").clicked() {
                    service.on_date_selected(chrono::Local::now().date_naive());
                    self.picker_buffer = service.current_view().picker_text.clone();
                    self.status = None;
                }
            });

            if picked {
                self.apply_picker_text();
            }
            if let Some(status) = &self.status {
                ui.label(RichText::new(status).small().weak());
            }
        });
    }

    fn render_reading(&self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let Session::Ready(service) = &self.session else {
                ui.centered_and_justified(|ui| {
                    ui.spinner();
                });
                return;
            };
            egui::ScrollArea::vertical().show(ui, |ui| {
                render_view(ui, service.current_view());
            });
        });
    }
}

impl eframe::App for DevotionalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_loader();
        self.follow_platform_theme(ctx);
        self.render_top_bar(ctx);
        self.render_navigation(ctx);
        self.render_reading(ctx);
    }
}

fn render_view(ui: &mut egui::Ui, view: &DisplayModel) {
    ui.heading(&view.header_title);
    if !view.subtitle_date.is_empty() {
        ui.label(RichText::new(&view.subtitle_date).italics().weak());
    }
    ui.add_space(12.0);

    ui.label(RichText::new(&view.primary_body).size(16.0));

    if let Some(alternate) = &view.alternate_body {
        ui.add_space(8.0);
        ui.group(|ui| {
            ui.label(RichText::new("ESV").small().strong());
            ui.label(RichText::new(alternate).size(15.0));
        });
    }

    if !view.verse_ref.is_empty() {
        ui.add_space(6.0);
        ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
            ui.label(RichText::new(&view.verse_ref).strong());
        });
    }

    if !view.poem_lines.is_empty() {
        ui.add_space(16.0);
        ui.separator();
        for line in &view.poem_lines {
            if line.blank {
                ui.add_space(ui.text_style_height(&egui::TextStyle::Body));
            } else {
                ui.label(RichText::new(&line.text).italics());
            }
        }
    }
}

fn platform_theme(ctx: &egui::Context) -> Option<Theme> {
    ctx.input(|input| input.raw.system_theme).map(|theme| match theme {
        egui::Theme::Dark => Theme::Dark,
        egui::Theme::Light => Theme::Light,
    })
}

fn apply_theme(ctx: &egui::Context, theme: Theme) {
    let theme = match theme {
        Theme::Dark => egui::Theme::Dark,
        Theme::Light => egui::Theme::Light,
    };
    ctx.set_theme(theme);
}
